//! eSignLive API client.
//!
//! The main entry point for interacting with the eSignLive REST API.

use crate::account::AccountService;
use crate::api;
use crate::audit::AuditService;
use crate::authentication::AuthenticationService;
use crate::builder::PackageBuilder;
use crate::custom_fields::CustomFieldService;
use crate::error::{EslError, Result};
use crate::event_notifications::EventNotificationService;
use crate::field_summary::FieldSummaryService;
use crate::groups::GroupService;
use crate::model::{Document, DocumentPackage, PackageId};
use crate::packages::PackageService;
use crate::reminders::ReminderService;
use crate::rest::RestClient;
use crate::sessions::SessionService;
use crate::templates::TemplateService;
use crate::types::{AuthenticationToken, SessionToken, SigningStatus};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://sandbox.esignlive.com/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// eSignLive API client.
///
/// Holds one [`RestClient`] shared by every service client it hands out.
///
/// # Example
///
/// ```rust,no_run
/// use esignlive::EslClient;
/// use esignlive::builder::{PackageBuilder, SignerBuilder};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
///
///     let package = PackageBuilder::new("Lease")
///         .with_signer(SignerBuilder::new("john.smith@example.com").build()?)
///         .build()?;
///
///     let package_id = client.create_and_send_package(&package).await?;
///     println!("Sent package {}", package_id);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct EslClient {
    rest: RestClient,
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL for the API (default: https://sandbox.esignlive.com/api).
    pub base_url: Option<String>,
    /// Request timeout (default: 30 seconds).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Read `ESL_BASE_URL` and `ESL_TIMEOUT_SECS` from the environment.
    ///
    /// Unset variables keep their defaults; a timeout that is not a number is
    /// a validation error.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("ESL_BASE_URL").ok();
        let timeout = match std::env::var("ESL_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(raw.trim().parse().map_err(|_| {
                EslError::validation("ESL_TIMEOUT_SECS", format!("{raw} is not a number of seconds"))
            })?)),
            Err(_) => None,
        };

        Ok(Self {
            base_url,
            timeout,
            user_agent: None,
        })
    }
}

impl EslClient {
    /// Create a client for `base_url` authenticating with `api_key`.
    ///
    /// Both values must be non-empty. A trailing `/` on the URL is ignored.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(
            api_key,
            ClientConfig {
                base_url: Some(base_url.into()),
                ..Default::default()
            },
        )
    }

    /// Create a client with custom configuration.
    ///
    /// ```rust,no_run
    /// use esignlive::{ClientConfig, EslClient};
    /// use std::time::Duration;
    ///
    /// let client = EslClient::with_config("api_key", ClientConfig {
    ///     base_url: Some("https://apps.esignlive.com/api".to_string()),
    ///     timeout: Some(Duration::from_secs(60)),
    ///     user_agent: Some("my-app/1.0".to_string()),
    /// });
    /// ```
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(EslError::validation("apiKey", "must not be empty"));
        }

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(EslError::validation("baseUrl", "must not be empty"));
        }
        let base_url = base_url.strip_suffix('/').unwrap_or(&base_url).to_string();

        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("esignlive-rust/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            rest: RestClient::new(api_key, base_url, timeout, user_agent)?,
        })
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        self.rest.base_url()
    }

    /// Get the package service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::{EslClient, PackageId};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///     let bytes = client.packages().download_zipped_documents(&PackageId::new("pkg-id")).await?;
    ///     println!("{} bytes", bytes.len());
    ///     Ok(())
    /// }
    /// ```
    pub fn packages(&self) -> PackageService {
        PackageService::new(self.rest.clone())
    }

    /// Get the template service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::{EslClient, PackageId};
    /// use esignlive::builder::PackageBuilder;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///     let template_id = PackageId::new("template-id");
    ///     let delta = PackageBuilder::new("Lease for John").build()?;
    ///     let package_id = client.templates()
    ///         .create_package_from_template(&template_id, &delta.to_api_package())
    ///         .await?;
    ///     println!("Created {}", package_id);
    ///     Ok(())
    /// }
    /// ```
    pub fn templates(&self) -> TemplateService {
        TemplateService::new(self.rest.clone())
    }

    /// Get the session service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::EslClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///     let token = client.sessions().create_sender_session_token().await?;
    ///     println!("Session: {}", token.session_id);
    ///     Ok(())
    /// }
    /// ```
    pub fn sessions(&self) -> SessionService {
        SessionService::new(self.rest.clone())
    }

    /// Get the authentication token service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::EslClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///     let token = client.authentication().create_authentication_token().await?;
    ///     println!("Token: {}", token.value);
    ///     Ok(())
    /// }
    /// ```
    pub fn authentication(&self) -> AuthenticationService {
        AuthenticationService::new(self.rest.clone())
    }

    /// Get the audit trail service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::{EslClient, PackageId};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///     let events = client.audit().get_audit(&PackageId::new("pkg-id")).await?;
    ///     println!("{} events", events.len());
    ///     Ok(())
    /// }
    /// ```
    pub fn audit(&self) -> AuditService {
        AuditService::new(self.rest.clone())
    }

    /// Get the field summary service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::{EslClient, PackageId};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///     for summary in client.field_summary().get_field_summary(&PackageId::new("pkg-id")).await? {
    ///         println!("{}: {:?}", summary.field_id, summary.field_value);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn field_summary(&self) -> FieldSummaryService {
        FieldSummaryService::new(self.rest.clone())
    }

    /// Get the account service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::EslClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///     let senders = client.account().get_senders(1, 50).await?;
    ///     println!("{} senders", senders.count);
    ///     Ok(())
    /// }
    /// ```
    pub fn account(&self) -> AccountService {
        AccountService::new(self.rest.clone())
    }

    /// Get the reminder schedule service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::{EslClient, PackageId};
    /// use esignlive::builder::ReminderScheduleBuilder;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///     let schedule = ReminderScheduleBuilder::for_package(PackageId::new("pkg-id"))
    ///         .with_days_until_first_reminder(2)
    ///         .with_days_between_reminders(1)
    ///         .with_number_of_repetitions(3)
    ///         .build()?;
    ///     client.reminders().create_reminder_schedule(&schedule).await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn reminders(&self) -> ReminderService {
        ReminderService::new(self.rest.clone())
    }

    /// Get the group service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::EslClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///     for group in client.groups().get_groups().await? {
    ///         println!("{} ({} members)", group.name, group.members.len());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn groups(&self) -> GroupService {
        GroupService::new(self.rest.clone())
    }

    /// Get the custom field service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::EslClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///     let fields = client.custom_fields().get_custom_fields().await?;
    ///     println!("{} custom fields", fields.len());
    ///     Ok(())
    /// }
    /// ```
    pub fn custom_fields(&self) -> CustomFieldService {
        CustomFieldService::new(self.rest.clone())
    }

    /// Get the event notification service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::EslClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///     let config = client.event_notifications().get_event_notification_config().await?;
    ///     println!("Callbacks go to {}", config.url);
    ///     Ok(())
    /// }
    /// ```
    pub fn event_notifications(&self) -> EventNotificationService {
        EventNotificationService::new(self.rest.clone())
    }

    /// Create a draft package and upload its documents.
    ///
    /// The package is created without documents, fetched back so signatures
    /// can be bound to the roles the service assigned, and then every
    /// document is uploaded in order.
    pub async fn create_package(&self, package: &DocumentPackage) -> Result<PackageId> {
        require_content(package)?;
        let mut wire = package.to_api_package();
        wire.documents.clear();

        let package_id = self.packages().create_package(&wire).await?;
        self.upload_documents(package, &package_id).await?;

        tracing::info!(
            package_id = %package_id,
            documents = package.documents().len(),
            "package created"
        );
        Ok(package_id)
    }

    /// Create a package and send it to its signers.
    pub async fn create_and_send_package(&self, package: &DocumentPackage) -> Result<PackageId> {
        let package_id = self.create_package(package).await?;
        self.send_package(&package_id).await?;
        Ok(package_id)
    }

    pub async fn send_package(&self, package_id: &PackageId) -> Result<()> {
        self.packages().send_package(package_id).await
    }

    /// Complete a package created with autocomplete disabled.
    pub async fn mark_complete(&self, package_id: &PackageId) -> Result<()> {
        self.packages().mark_complete(package_id).await
    }

    /// Fetch the current state of a package.
    ///
    /// The result is a snapshot; fetch again to observe later changes.
    pub async fn get_package(&self, package_id: &PackageId) -> Result<DocumentPackage> {
        let wire = self.packages().get_package(package_id).await?;
        PackageBuilder::from_api(&wire).build()
    }

    /// Replace the settings of a package with those of `package`.
    pub async fn update_package(
        &self,
        package_id: &PackageId,
        package: &DocumentPackage,
    ) -> Result<()> {
        self.packages()
            .update_package(package_id, &package.to_api_package())
            .await
    }

    /// Upload a document into an existing package.
    ///
    /// `package` supplies the roles signatures are bound to; the uploaded
    /// document replaces any same-named document in it.
    pub async fn upload_document(
        &self,
        document: &Document,
        package: &mut DocumentPackage,
    ) -> Result<Document> {
        let package_id = package
            .id()
            .cloned()
            .ok_or_else(|| EslError::validation("package id", "package has not been created"))?;
        let content = document
            .content()
            .ok_or_else(|| EslError::validation("document content", "document has no content"))?;

        let wire = package.to_api_package();
        let uploaded = self
            .packages()
            .upload_document(
                &package_id,
                &document.file_name(),
                document.document_type().mime_type(),
                content,
                &document.to_api_document(package),
            )
            .await?;

        let uploaded = crate::convert::document_from_api(&uploaded, &wire.roles);
        package.add_document(uploaded.clone());
        Ok(uploaded)
    }

    /// Upload a document into the package with this id.
    pub async fn upload_document_to(
        &self,
        document: &Document,
        package_id: &PackageId,
    ) -> Result<Document> {
        if document.content().is_none() {
            return Err(EslError::validation("document content", "document has no content"));
        }
        let mut package = self.get_package(package_id).await?;
        self.upload_document(document, &mut package).await
    }

    async fn upload_documents(&self, package: &DocumentPackage, package_id: &PackageId) -> Result<()> {
        if package.documents().is_empty() {
            return Ok(());
        }

        let mut created = self.get_package(package_id).await?;
        for document in package.documents() {
            self.upload_document(document, &mut created).await?;
        }
        Ok(())
    }

    /// Create a template and upload its documents.
    pub async fn create_template(&self, template: &DocumentPackage) -> Result<PackageId> {
        require_content(template)?;
        let mut wire = template.to_api_package();
        wire.documents.clear();

        let template_id = self.templates().create_template(&wire).await?;
        self.upload_documents(template, &template_id).await?;

        tracing::info!(template_id = %template_id, "template created");
        Ok(template_id)
    }

    /// Clone an existing package into a template, applying `delta`.
    pub async fn create_template_from_package(
        &self,
        package_id: &PackageId,
        delta: &DocumentPackage,
    ) -> Result<PackageId> {
        self.templates()
            .create_template_from_package(package_id, &delta.to_api_package())
            .await
    }

    /// Clone an existing package into a template with only a new name.
    pub async fn create_template_from_package_named(
        &self,
        package_id: &PackageId,
        template_name: &str,
    ) -> Result<PackageId> {
        let delta = PackageBuilder::new(template_name).build()?;
        self.create_template_from_package(package_id, &delta).await
    }

    /// Instantiate a package from a template, applying `delta`.
    pub async fn create_package_from_template(
        &self,
        template_id: &PackageId,
        delta: &DocumentPackage,
    ) -> Result<PackageId> {
        self.templates()
            .create_package_from_template(template_id, &delta.to_api_package())
            .await
    }

    /// Instantiate a package from a template with only a new name.
    pub async fn create_package_from_template_named(
        &self,
        template_id: &PackageId,
        package_name: &str,
    ) -> Result<PackageId> {
        let delta = PackageBuilder::new(package_name).build()?;
        self.create_package_from_template(template_id, &delta).await
    }

    pub async fn create_sender_session_token(&self) -> Result<SessionToken> {
        self.sessions().create_sender_session_token().await
    }

    pub async fn create_signer_session_token(
        &self,
        package_id: &PackageId,
        signer_id: &str,
    ) -> Result<SessionToken> {
        self.sessions()
            .create_signer_session_token(package_id, signer_id)
            .await
    }

    pub async fn create_authentication_token(&self) -> Result<AuthenticationToken> {
        self.authentication().create_authentication_token().await
    }

    pub async fn download_document(
        &self,
        package_id: &PackageId,
        document_id: &str,
    ) -> Result<Vec<u8>> {
        self.packages().download_document(package_id, document_id).await
    }

    pub async fn download_evidence_summary(&self, package_id: &PackageId) -> Result<Vec<u8>> {
        self.packages().download_evidence_summary(package_id).await
    }

    pub async fn download_zipped_documents(&self, package_id: &PackageId) -> Result<Vec<u8>> {
        self.packages().download_zipped_documents(package_id).await
    }

    pub async fn get_signing_status(
        &self,
        package_id: &PackageId,
        signer_id: Option<&str>,
        document_id: Option<&str>,
    ) -> Result<SigningStatus> {
        self.packages()
            .get_signing_status(package_id, signer_id, document_id)
            .await
    }

    /// Upload a file against an attachment requirement on behalf of a signer.
    ///
    /// Opens a session for `signer_id` and uploads inside it. Packages fetched
    /// earlier do not list the new file.
    pub async fn upload_attachment(
        &self,
        package_id: &PackageId,
        attachment_id: &str,
        file_name: &str,
        content: &[u8],
        signer_id: &str,
    ) -> Result<()> {
        let session = self.create_signer_session_token(package_id, signer_id).await?;
        self.packages()
            .upload_attachment(package_id, attachment_id, file_name, content, &session.session_id)
            .await
    }

    /// Delete an uploaded attachment file on behalf of a signer.
    ///
    /// Fails with the message key
    /// `error.validation.attachments.delete.completedTransaction` once the
    /// package is complete.
    pub async fn delete_attachment_file(
        &self,
        package_id: &PackageId,
        attachment_id: &str,
        file_id: &str,
        signer_id: &str,
    ) -> Result<()> {
        let session = self.create_signer_session_token(package_id, signer_id).await?;
        self.packages()
            .delete_attachment_file(package_id, attachment_id, file_id, &session.session_id)
            .await
    }

    /// Sign, as the sender, every approval of the package.
    pub async fn sign_documents(&self, package_id: &PackageId) -> Result<()> {
        let wire = self.packages().get_package(package_id).await?;
        let documents: Vec<api::Document> = wire
            .documents
            .into_iter()
            .map(|d| api::Document {
                fields: Vec::new(),
                ..d
            })
            .collect();
        self.packages().sign_documents(package_id, &documents).await
    }
}

/// Every document must carry content before anything is created remotely.
fn require_content(package: &DocumentPackage) -> Result<()> {
    match package.documents().iter().find(|d| d.content().is_none()) {
        Some(document) => Err(EslError::validation(
            "document content",
            format!("document {} has no content", document.name()),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = EslClient::new("test_key", "https://sandbox.esignlive.com/api/").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_config() {
        let client = EslClient::with_config(
            "test_key",
            ClientConfig {
                base_url: Some("https://apps.esignlive.com/api".to_string()),
                timeout: Some(Duration::from_secs(60)),
                user_agent: None,
            },
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://apps.esignlive.com/api");
    }

    #[test]
    fn test_default_config() {
        let client = EslClient::with_config("test_key", ClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_api_key_fails() {
        let err = EslClient::new("", DEFAULT_BASE_URL).err().unwrap();
        match err {
            EslError::Validation { field, .. } => assert_eq!(field, "apiKey"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_document_without_content_is_rejected() {
        use crate::builder::{DocumentBuilder, PackageBuilder};

        let package = PackageBuilder::new("Lease")
            .with_document(DocumentBuilder::new("lease").build().unwrap())
            .build()
            .unwrap();

        let err = require_content(&package).unwrap_err();
        assert!(err.to_string().contains("lease"));
    }

    #[test]
    fn test_empty_base_url_fails() {
        let err = EslClient::new("test_key", "  ").err().unwrap();
        assert!(err.is_validation());
    }
}
