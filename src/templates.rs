//! Template operations.
//!
//! Templates are packages of type `TEMPLATE`. New packages are instantiated
//! from them by cloning.

use crate::api;
use crate::error::Result;
use crate::model::PackageId;
use crate::rest::RestClient;

/// Client for template operations.
///
/// Access via `client.templates()`.
pub struct TemplateService {
    client: RestClient,
}

impl TemplateService {
    pub(crate) fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Create a template from the wire form of a package.
    pub async fn create_template(&self, template: &api::Package) -> Result<PackageId> {
        let template = api::Package {
            package_type: Some(api::TEMPLATE_TYPE.to_string()),
            ..template.clone()
        };
        let created: api::Id = self.client.post("/packages", &template).await?;
        Ok(PackageId::from(created.id))
    }

    /// Instantiate a new package from a template.
    ///
    /// `delta` overrides the template's settings: at least its name, usually
    /// also the signers that fill the template's placeholder roles.
    pub async fn create_package_from_template(
        &self,
        template_id: &PackageId,
        delta: &api::Package,
    ) -> Result<PackageId> {
        let delta = api::Package {
            package_type: Some(api::PACKAGE_TYPE.to_string()),
            ..delta.clone()
        };
        self.clone_package(template_id, &delta).await
    }

    /// Turn an existing package into a new template.
    pub async fn create_template_from_package(
        &self,
        package_id: &PackageId,
        delta: &api::Package,
    ) -> Result<PackageId> {
        let delta = api::Package {
            package_type: Some(api::TEMPLATE_TYPE.to_string()),
            ..delta.clone()
        };
        self.clone_package(package_id, &delta).await
    }

    async fn clone_package(&self, source_id: &PackageId, delta: &api::Package) -> Result<PackageId> {
        let created: api::Id = self
            .client
            .post(&format!("/packages/{}/clone", source_id), delta)
            .await?;
        tracing::debug!(source_id = %source_id, package_id = %created.id, "package cloned");
        Ok(PackageId::from(created.id))
    }
}
