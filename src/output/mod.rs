//! Output formatting for subnet data.
//!
//! - [`terminal`] - quoted-column terminal output

mod terminal;

// Re-export public functions
pub use terminal::{format_field, print_subnets};
