//! Controller-facing client.
//!
//! - [`client`] - REST exchanges with the subnet service

mod client;

// Re-export public types
pub use client::{AddOutcome, SubnetController};
