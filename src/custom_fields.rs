//! Account-wide custom fields.

use crate::error::Result;
use crate::rest::RestClient;
use crate::types::CustomField;

/// Client for custom field operations.
///
/// Access via `client.custom_fields()`.
pub struct CustomFieldService {
    client: RestClient,
}

impl CustomFieldService {
    pub(crate) fn new(client: RestClient) -> Self {
        Self { client }
    }

    pub async fn get_custom_fields(&self) -> Result<Vec<CustomField>> {
        self.client.get("/account/customfields").await
    }

    /// Create a custom field, or replace the one with the same id.
    pub async fn create_custom_field(&self, field: &CustomField) -> Result<CustomField> {
        self.client.post("/account/customfields", field).await
    }

    pub async fn delete_custom_field(&self, field_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/account/customfields/{}", field_id))
            .await
    }
}
