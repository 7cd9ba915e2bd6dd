//! Wire models for the subnet service.
//!
//! - [`Subnet`] - a single subnet record (name + CIDR string)
//! - [`SubnetList`] - the `subnetConfig` listing envelope

mod subnet;

// Re-export public types
pub use subnet::{Subnet, SubnetList};
