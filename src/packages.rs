//! Package operations.
//!
//! This module provides the PackageService for the package lifecycle,
//! documents, downloads and signer attachments.

use crate::api::{self, StatusUpdate};
use crate::error::Result;
use crate::model::{PackageId, PackageStatus};
use crate::rest::RestClient;
use crate::types::{Page, SigningStatus};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

/// Client for package operations.
///
/// Access via `client.packages()`.
pub struct PackageService {
    client: RestClient,
}

#[derive(Deserialize)]
struct SigningStatusResponse {
    status: String,
}

#[derive(Serialize)]
struct SignedDocuments<'a> {
    documents: &'a [api::Document],
}

impl PackageService {
    pub(crate) fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Create a package from its wire form and return the assigned id.
    pub async fn create_package(&self, package: &api::Package) -> Result<PackageId> {
        let created: api::Id = self.client.post("/packages", package).await?;
        Ok(PackageId::from(created.id))
    }

    /// Fetch the wire form of a package.
    pub async fn get_package(&self, package_id: &PackageId) -> Result<api::Package> {
        self.client
            .get(&format!("/packages/{}", package_id))
            .await
    }

    /// List packages in a given status, one page at a time.
    ///
    /// `from` and `to` are 1-based, inclusive item positions.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::{EslClient, PackageStatus};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///
    ///     let page = client.packages().get_packages(&PackageStatus::Sent, 1, 50).await?;
    ///     println!("{} sent packages", page.count);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_packages(
        &self,
        status: &PackageStatus,
        from: u32,
        to: u32,
    ) -> Result<Page<api::Package>> {
        let query = status.as_str().to_lowercase();
        self.client
            .get_with_query(
                "/packages",
                &[
                    ("query", query),
                    ("from", from.to_string()),
                    ("to", to.to_string()),
                ],
            )
            .await
    }

    /// Replace the settings of a package.
    pub async fn update_package(&self, package_id: &PackageId, package: &api::Package) -> Result<()> {
        self.client
            .put_no_content(&format!("/packages/{}", package_id), package)
            .await
    }

    pub async fn delete_package(&self, package_id: &PackageId) -> Result<()> {
        self.client
            .delete(&format!("/packages/{}", package_id))
            .await
    }

    /// Send a draft package to its signers.
    pub async fn send_package(&self, package_id: &PackageId) -> Result<()> {
        self.change_status(package_id, PackageStatus::Sent).await
    }

    /// Complete a package whose autocomplete is disabled.
    pub async fn mark_complete(&self, package_id: &PackageId) -> Result<()> {
        self.change_status(package_id, PackageStatus::Completed).await
    }

    pub async fn archive(&self, package_id: &PackageId) -> Result<()> {
        self.change_status(package_id, PackageStatus::Archived).await
    }

    async fn change_status(&self, package_id: &PackageId, status: PackageStatus) -> Result<()> {
        tracing::debug!(package_id = %package_id, status = %status, "changing package status");
        self.client
            .post_no_content(
                &format!("/packages/{}", package_id),
                &StatusUpdate {
                    status: status.as_str(),
                },
            )
            .await
    }

    /// Upload a document as a multipart request.
    ///
    /// The `file` part carries the content; the `payload` part carries the
    /// document JSON with its approvals and fields.
    pub async fn upload_document(
        &self,
        package_id: &PackageId,
        file_name: &str,
        mime_type: &str,
        content: &[u8],
        document: &api::Document,
    ) -> Result<api::Document> {
        let file = Part::bytes(content.to_vec())
            .file_name(file_name.to_string())
            .mime_str(mime_type)?;
        let payload = Part::text(serde_json::to_string(document)?);
        let form = Form::new().part("file", file).part("payload", payload);

        self.client
            .post_multipart(&format!("/packages/{}/documents", package_id), form, None)
            .await
    }

    pub async fn delete_document(&self, package_id: &PackageId, document_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/packages/{}/documents/{}", package_id, document_id))
            .await
    }

    /// Download a document as PDF, with signatures applied.
    pub async fn download_document(&self, package_id: &PackageId, document_id: &str) -> Result<Vec<u8>> {
        self.client
            .get_bytes(&format!("/packages/{}/documents/{}/pdf", package_id, document_id))
            .await
    }

    /// Download a document exactly as it was uploaded.
    pub async fn download_original_document(
        &self,
        package_id: &PackageId,
        document_id: &str,
    ) -> Result<Vec<u8>> {
        self.client
            .get_bytes(&format!(
                "/packages/{}/documents/{}/original",
                package_id, document_id
            ))
            .await
    }

    /// Download every document of the package as one zip archive.
    pub async fn download_zipped_documents(&self, package_id: &PackageId) -> Result<Vec<u8>> {
        self.client
            .get_bytes(&format!("/packages/{}/documents/zip", package_id))
            .await
    }

    pub async fn download_evidence_summary(&self, package_id: &PackageId) -> Result<Vec<u8>> {
        self.client
            .get_bytes(&format!("/packages/{}/evidence/summary", package_id))
            .await
    }

    /// Signing status of the package, optionally narrowed to one signer
    /// and/or one document.
    pub async fn get_signing_status(
        &self,
        package_id: &PackageId,
        signer_id: Option<&str>,
        document_id: Option<&str>,
    ) -> Result<SigningStatus> {
        let response: SigningStatusResponse = self
            .client
            .get_with_query(
                &format!("/packages/{}/signingStatus", package_id),
                &[
                    ("signer", signer_id.unwrap_or_default()),
                    ("document", document_id.unwrap_or_default()),
                ],
            )
            .await?;
        Ok(SigningStatus::from(response.status.as_str()))
    }

    /// Sign the approvals of the given documents as the package sender.
    pub async fn sign_documents(&self, package_id: &PackageId, documents: &[api::Document]) -> Result<()> {
        self.client
            .post_no_content(
                &format!("/packages/{}/documents/signed_documents", package_id),
                &SignedDocuments { documents },
            )
            .await
    }

    /// Upload a file against an attachment requirement inside a signer session.
    pub async fn upload_attachment(
        &self,
        package_id: &PackageId,
        attachment_id: &str,
        file_name: &str,
        content: &[u8],
        session_id: &str,
    ) -> Result<()> {
        let file = Part::bytes(content.to_vec()).file_name(file_name.to_string());
        let form = Form::new().part("file", file);

        tracing::debug!(package_id = %package_id, attachment_id, file_name, "uploading attachment");
        self.client
            .post_multipart_no_content(
                &format!("/packages/{}/attachment/{}", package_id, attachment_id),
                form,
                Some(session_id),
            )
            .await
    }

    /// Delete an uploaded attachment file inside a signer session.
    pub async fn delete_attachment_file(
        &self,
        package_id: &PackageId,
        attachment_id: &str,
        file_id: &str,
        session_id: &str,
    ) -> Result<()> {
        self.client
            .delete_as(
                &format!(
                    "/packages/{}/attachment/{}/file/{}",
                    package_id, attachment_id, file_id
                ),
                Some(session_id),
            )
            .await
    }

    /// Download one uploaded attachment file.
    pub async fn download_attachment_file(
        &self,
        package_id: &PackageId,
        attachment_id: &str,
        file_id: &str,
    ) -> Result<Vec<u8>> {
        self.client
            .get_bytes(&format!(
                "/packages/{}/attachment/download/{}/{}",
                package_id, attachment_id, file_id
            ))
            .await
    }
}
