//! Subnet wire model for the controller's northbound API.

use serde::{Deserialize, Serialize};

/// A subnet as the controller's subnet service reports it.
///
/// The CIDR string is the uniqueness key: two subnets are the same iff
/// their CIDR strings are character-equal. The string is an opaque key
/// here, never parsed, so overlapping but non-identical subnets count
/// as distinct.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    /// Subnet name, also the path segment of the creation URL.
    pub name: String,
    /// CIDR string, e.g. "10.0.0.0/24". Wire key is `subnet`.
    #[serde(rename = "subnet")]
    pub cidr: String,
}

impl Subnet {
    pub fn new(name: impl Into<String>, cidr: impl Into<String>) -> Self {
        Subnet {
            name: name.into(),
            cidr: cidr.into(),
        }
    }
}

/// Envelope around the controller's subnet listing.
///
/// A body without a `subnetConfig` field (an unconfigured controller)
/// reads as an empty list.
#[derive(Deserialize, Debug, Default)]
pub struct SubnetList {
    #[serde(rename = "subnetConfig", default)]
    pub subnet_config: Vec<Subnet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subnet_serializes_with_wire_key() {
        let subnet = Subnet::new("b", "10.0.1.0/24");
        let json = serde_json::to_string(&subnet).expect("Error serializing subnet");
        assert_eq!(json, r#"{"name":"b","subnet":"10.0.1.0/24"}"#);
    }

    #[test]
    fn test_listing_deserializes_in_order() {
        let body = r#"{"subnetConfig": [
            {"name": "a", "subnet": "10.0.0.0/24"},
            {"name": "b", "subnet": "10.0.1.0/24"},
            {"name": "c", "subnet": "192.168.0.0/16"}
        ]}"#;
        let listing: SubnetList = serde_json::from_str(body).expect("Error parsing listing");
        assert_eq!(listing.subnet_config.len(), 3);
        assert_eq!(listing.subnet_config[0], Subnet::new("a", "10.0.0.0/24"));
        assert_eq!(listing.subnet_config[2].cidr, "192.168.0.0/16");
    }

    #[test]
    fn test_missing_subnet_config_reads_as_empty() {
        let listing: SubnetList = serde_json::from_str("{}").expect("Error parsing empty body");
        assert!(listing.subnet_config.is_empty());
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = r#"{"subnetConfig": [{"name": "a", "subnet": "10.0.0.0/24", "nodeIds": []}]}"#;
        let listing: SubnetList = serde_json::from_str(body).expect("Error parsing listing");
        assert_eq!(listing.subnet_config.len(), 1);
    }
}
