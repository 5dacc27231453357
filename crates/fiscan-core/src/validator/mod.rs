//! Classification lookup against the NCM/CEST registry service.
//!
//! The lookup is fail-closed: any transport, status, or body failure degrades
//! to a negative result that the UI layer renders as "needs manual review".
//! It is not a security control, and a negative result does not distinguish
//! "confirmed unregistered" from "could not check" (the failure class is
//! still visible in the log).

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::document::rules::cest::normalize_cest;
use crate::error::LookupError;
use crate::models::config::LookupConfig;
use crate::models::document::FiscalDocument;

/// User agent string identifying the analyzer.
const USER_AGENT: &str = concat!("fiscan/", env!("CARGO_PKG_VERSION"));

/// Response body of the registry endpoint.
#[derive(Debug, Deserialize)]
struct RegistryResponse {
    #[serde(rename = "resultados")]
    results: Vec<RegistryEntry>,
}

#[derive(Debug, Deserialize)]
struct RegistryEntry {
    cest: String,
}

/// Fail-closed NCM/CEST pair validator.
pub struct CestValidator {
    client: Client,
    base_url: String,
}

impl CestValidator {
    /// Build a validator with a bounded-wait client. No retries.
    pub fn new(config: &LookupConfig) -> crate::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check whether `cest` is registered for `ncm`.
    ///
    /// Never raises: every lookup failure collapses to `false`.
    pub fn validate(&self, ncm: &str, cest: &str) -> bool {
        match self.lookup(ncm, cest) {
            Ok(registered) => registered,
            Err(e) => {
                warn!(ncm, error = %e, "classification lookup failed");
                false
            }
        }
    }

    /// Run the lookup once per line item, sequentially, filling
    /// `cest_validated`.
    pub fn annotate(&self, doc: &mut FiscalDocument) {
        for item in &mut doc.items {
            item.cest_validated = Some(self.validate(&item.ncm, &item.cest));
        }
    }

    fn lookup(&self, ncm: &str, cest: &str) -> Result<bool, LookupError> {
        let url = format!("{}/{}", self.base_url, ncm);
        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: RegistryResponse = response.json()?;

        let query = normalize_cest(cest);
        let registered = body
            .results
            .iter()
            .any(|entry| normalize_cest(&entry.cest) == query);

        debug!(ncm, registered, entries = body.results.len(), "registry lookup");
        Ok(registered)
    }
}
