use super::require_non_empty;
use crate::error::{EslError, Result};
use crate::model::{
    Document, DocumentPackage, PackageId, PackageStatus, Signer, TransactionRetention,
};
use chrono::{DateTime, Utc};

/// Builds a [`DocumentPackage`].
///
/// Start from a name with [`PackageBuilder::new`], or from a fetched wire
/// package with [`PackageBuilder::from_api`] to modify and resend it.
#[derive(Debug, Clone)]
pub struct PackageBuilder {
    pub(crate) id: Option<PackageId>,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) status: Option<PackageStatus>,
    pub(crate) autocomplete: bool,
    pub(crate) due_date: Option<DateTime<Utc>>,
    pub(crate) email_message: Option<String>,
    pub(crate) language: Option<String>,
    pub(crate) retention: Option<TransactionRetention>,
    pub(crate) documents: Vec<Document>,
    pub(crate) signers: Vec<Signer>,
}

impl PackageBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            status: None,
            autocomplete: true,
            due_date: None,
            email_message: None,
            language: None,
            retention: None,
            documents: Vec::new(),
            signers: Vec::new(),
        }
    }

    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Rename the package, e.g. after [`PackageBuilder::from_api`].
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_signer(mut self, signer: Signer) -> Self {
        self.signers.push(signer);
        self
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    pub fn expires_at(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_email_message(mut self, message: impl Into<String>) -> Self {
        self.email_message = Some(message.into());
        self
    }

    /// Language of the signing ceremony as a BCP 47 tag, e.g. `fr` or `en-CA`.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Keep the package open after all signers are done.
    pub fn without_autocomplete(mut self) -> Self {
        self.autocomplete = false;
        self
    }

    pub fn with_transaction_retention(mut self, retention: TransactionRetention) -> Self {
        self.retention = Some(retention);
        self
    }

    pub fn build(self) -> Result<DocumentPackage> {
        require_non_empty("package name", &self.name)?;

        for (i, signer) in self.signers.iter().enumerate() {
            if self.signers[..i].iter().any(|s| s.email() == signer.email()) {
                return Err(EslError::validation(
                    "signers",
                    format!("duplicate signer email {}", signer.email()),
                ));
            }
        }
        DocumentPackage::check_role_names(&self.signers)?;
        for (i, document) in self.documents.iter().enumerate() {
            if self.documents[..i].iter().any(|d| d.name() == document.name()) {
                return Err(EslError::validation(
                    "documents",
                    format!("duplicate document name {}", document.name()),
                ));
            }
        }

        Ok(DocumentPackage {
            id: self.id,
            name: self.name,
            description: self.description,
            status: self.status,
            autocomplete: self.autocomplete,
            due_date: self.due_date,
            email_message: self.email_message,
            language: self.language,
            retention: self.retention,
            documents: self.documents,
            signers: self.signers,
        })
    }
}
