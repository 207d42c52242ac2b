//! Values entered by signers into package fields.

use crate::error::Result;
use crate::model::PackageId;
use crate::rest::RestClient;
use crate::types::FieldSummary;

/// Client for field summaries.
///
/// Access via `client.field_summary()`.
pub struct FieldSummaryService {
    client: RestClient,
}

impl FieldSummaryService {
    pub(crate) fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub async fn get_field_summary(&self, package_id: &PackageId) -> Result<Vec<FieldSummary>> {
        self.client
            .get(&format!("/packages/{}/fieldSummary", package_id))
            .await
    }
}
