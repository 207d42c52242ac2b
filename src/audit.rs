//! Audit trail operations.
//!
//! This module provides the AuditService for reading the audit trail of a
//! package.

use crate::error::Result;
use crate::model::PackageId;
use crate::rest::RestClient;
use crate::types::Audit;
use serde::Deserialize;

/// Client for audit trail operations.
///
/// Access via `client.audit()`.
pub struct AuditService {
    client: RestClient,
}

#[derive(Deserialize)]
struct AuditResponse {
    #[serde(rename = "audit-events", default)]
    audit_events: Vec<Audit>,
}

impl AuditService {
    pub(crate) fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// List the audit events of a package, oldest first.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::{EslClient, PackageId};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///
    ///     let events = client.audit().get_audit(&PackageId::new("pkg-id")).await?;
    ///     for event in events {
    ///         println!("{} {:?}", event.event_type, event.user_email);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_audit(&self, package_id: &PackageId) -> Result<Vec<Audit>> {
        let response: AuditResponse = self
            .client
            .get(&format!("/packages/{}/audit", package_id))
            .await?;
        Ok(response.audit_events)
    }
}
