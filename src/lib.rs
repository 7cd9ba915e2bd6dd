// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

//! Client for a network controller's northbound subnet REST service.
//!
//! - [`controller`] - the [`SubnetController`] client (exists / add / list)
//! - [`config`] - connection settings (base URL, credentials, timeout)
//! - [`models`] - wire types for the `subnetConfig` listing
//! - [`output`] - terminal rendering for listings
//! - [`cli`] - command-line surface for the binary

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod output;

pub use config::{ConfigOverrides, ControllerConfig};
pub use controller::{AddOutcome, SubnetController};
pub use error::{ConfigError, ControllerError};
pub use models::Subnet;
