//! REST exchanges with the controller's subnet service.
//!
//! One GET serves both the existence check and the listing; creation is
//! a single POST. Every operation is one request/response exchange run
//! to completion, with no retries.

use crate::config::ControllerConfig;
use crate::error::ControllerError;
use crate::models::{Subnet, SubnetList};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

/// Outcome of [`SubnetController::add_subnet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Controller accepted the subnet (HTTP 201).
    Created,
    /// The CIDR is already configured; no create request was sent.
    AlreadyExists,
    /// Controller refused the create with this status.
    Rejected { status: u16 },
}

/// Client for the controller's subnet service.
///
/// Holds the base URL, credential pair and HTTP transport for the life
/// of the process. Remote state is only ever mutated through
/// [`add_subnet`](Self::add_subnet), and only after a fresh existence
/// check; the check and the create are separate round trips, so
/// concurrent writers can still race.
pub struct SubnetController {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl SubnetController {
    /// Build a client from connection settings.
    ///
    /// The configured timeout applies to every request. The base URL is
    /// normalized to end with a slash so endpoint paths append cleanly.
    pub fn new(config: &ControllerConfig) -> Result<Self, ControllerError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let mut base_url = config.base_url.clone();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(SubnetController {
            http,
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Check whether a subnet with exactly this CIDR string is configured.
    ///
    /// Checks against the CIDR string (e.g. "10.0.0.0/24"), not the
    /// subnet name. The comparison is exact, so it will not catch things
    /// like overlapping subnets.
    pub async fn exists(&self, cidr: &str) -> Result<bool, ControllerError> {
        let subnets = self.fetch_subnets("exists").await?;
        Ok(subnets.iter().any(|s| s.cidr == cidr))
    }

    /// Add a subnet unless its CIDR is already configured.
    ///
    /// When the CIDR is present this is a no-op and no create request is
    /// sent. The existence check and the create are two separate
    /// exchanges; a concurrent writer can slip in between them, and the
    /// controller's own response decides what happens then.
    pub async fn add_subnet(&self, name: &str, cidr: &str) -> Result<AddOutcome, ControllerError> {
        if self.exists(cidr).await? {
            log::info!("Subnet {cidr} already exists");
            return Ok(AddOutcome::AlreadyExists);
        }

        let body = serde_json::json!({ "name": name, "subnet": cidr }).to_string();
        let url = format!("{}subnet/{}", self.base_url, name);
        log::debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED => {
                log::info!("Subnet {cidr} added");
                Ok(AddOutcome::Created)
            }
            status => {
                log::warn!("Subnet {cidr} could not be added: status {status}");
                Ok(AddOutcome::Rejected {
                    status: status.as_u16(),
                })
            }
        }
    }

    /// Fetch the full subnet listing, in controller-supplied order.
    pub async fn list(&self) -> Result<Vec<Subnet>, ControllerError> {
        self.fetch_subnets("list").await
    }

    async fn fetch_subnets(&self, operation: &'static str) -> Result<Vec<Subnet>, ControllerError> {
        let url = format!("{}subnets", self.base_url);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::error!("Controller returned {status} to {operation}");
            return Err(ControllerError::UnexpectedStatus {
                operation,
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let mut deserializer = serde_json::Deserializer::from_str(&text);
        let listing: SubnetList =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
                let path = e.path().to_string();
                log::error!("Error parsing subnet listing at {path}: {e}");
                ControllerError::MalformedResponse {
                    path,
                    source: e.into_inner(),
                }
            })?;

        Ok(listing.subnet_config)
    }
}
