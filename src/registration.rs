//! Registration with the bouncer
//!
//! Builds the registration payload around the assembled fragment and uploads
//! it with a single HTTP PUT.

use crate::fragment::ConfigFragment;
use anyhow::{Context, Result};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Default registration endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8585/update-ooni";

const FQDN_PREFIX: &str = "nothing.google.com";

/// Body of the registration PUT
///
/// The location fields are fixed placeholders. The bouncer keys its records
/// on `fqdn`, which carries a wall-clock token so successive runs stay
/// distinct; it is a correlation token, not an identity.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationPayload {
    city: String,
    country: String,
    fqdn: String,
    ip: String,
    port: String,
    site: String,
    tool_extra: ConfigFragment,
}

impl RegistrationPayload {
    /// Build a payload around `fragment`, stamping `unix_millis` into the fqdn
    pub fn new(fragment: ConfigFragment, unix_millis: u128) -> Self {
        Self {
            city: "foobar".to_string(),
            country: "foobar".to_string(),
            fqdn: format!("{}{}", FQDN_PREFIX, unix_millis),
            ip: "127.0.0.1".to_string(),
            port: "0".to_string(),
            site: "mars".to_string(),
            tool_extra: fragment,
        }
    }

    /// Build a payload stamped with the current wall clock
    pub fn now(fragment: ConfigFragment) -> Self {
        Self::new(fragment, unix_millis())
    }

    pub fn fqdn(&self) -> &str {
        &self.fqdn
    }

    pub fn tool_extra(&self) -> &ConfigFragment {
        &self.tool_extra
    }
}

/// Current Unix timestamp in milliseconds
fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis()
}

/// Client for the bouncer registration endpoint
pub struct RegistrationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RegistrationClient {
    /// Create a client for `endpoint`
    ///
    /// No request timeout is set: the run blocks for as long as the endpoint
    /// takes to answer.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Upload the payload with a single PUT
    ///
    /// A non-2xx status is an error; the response body is otherwise ignored.
    pub async fn register(&self, payload: &RegistrationPayload) -> Result<()> {
        info!("Registering {} with {}", payload.fqdn, self.endpoint);

        let response = self
            .client
            .put(&self.endpoint)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Registration PUT to {} failed", self.endpoint))?
            .error_for_status()
            .context("Registration endpoint rejected the payload")?;

        debug!("Registration accepted with status {}", response.status());
        Ok(())
    }
}
