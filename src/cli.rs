//! Command-line surface.

use crate::config::ConfigOverrides;
use clap::{Parser, Subcommand};

/// Manage subnets on a network controller.
#[derive(Parser)]
#[command(name = "subnet-control")]
#[command(version)]
#[command(about = "Check, add and list subnets on a network controller")]
pub struct Cli {
    /// Base URL of the controller's subnet service (CONTROLLER_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Basic-auth username (CONTROLLER_USER)
    #[arg(long, global = true, value_name = "USER")]
    pub user: Option<String>,

    /// Basic-auth password (CONTROLLER_PASSWORD)
    #[arg(long, global = true, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Request timeout in seconds (CONTROLLER_TIMEOUT_SECS)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether a CIDR is configured on the controller
    Check {
        /// CIDR string, e.g. 10.0.0.0/24
        cidr: String,
    },
    /// Add a subnet unless its CIDR already exists
    Add {
        /// Subnet name, used in the creation URL
        name: String,
        /// CIDR string, e.g. 10.0.0.0/24
        cidr: String,
    },
    /// List all configured subnets
    List,
}

impl Cli {
    /// Flag values as config overrides; flags beat the environment.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.url.clone(),
            username: self.user.clone(),
            password: self.password.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_command() {
        let cli = Cli::try_parse_from(["subnet-control", "add", "b", "10.0.1.0/24"])
            .expect("Error parsing args");
        match cli.command {
            Command::Add { name, cidr } => {
                assert_eq!(name, "b");
                assert_eq!(cidr, "10.0.1.0/24");
            }
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "subnet-control",
            "list",
            "--url",
            "http://controller:8080/",
            "--user",
            "operator",
        ])
        .expect("Error parsing args");
        let overrides = cli.overrides();
        assert_eq!(overrides.base_url.as_deref(), Some("http://controller:8080/"));
        assert_eq!(overrides.username.as_deref(), Some("operator"));
        assert!(overrides.password.is_none());
    }
}
