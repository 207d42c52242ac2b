use super::{Document, Signer};
use crate::error::{EslError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of a package or template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PackageId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PackageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for PackageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lifecycle state of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageStatus {
    Draft,
    Sent,
    Completed,
    Archived,
    Declined,
    OptedOut,
    Expired,
    /// A status this SDK version does not know about.
    Other(String),
}

impl PackageStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PackageStatus::Draft => "DRAFT",
            PackageStatus::Sent => "SENT",
            PackageStatus::Completed => "COMPLETED",
            PackageStatus::Archived => "ARCHIVED",
            PackageStatus::Declined => "DECLINED",
            PackageStatus::OptedOut => "OPTED_OUT",
            PackageStatus::Expired => "EXPIRED",
            PackageStatus::Other(s) => s,
        }
    }
}

impl From<&str> for PackageStatus {
    fn from(s: &str) -> Self {
        match s {
            "DRAFT" => PackageStatus::Draft,
            "SENT" => PackageStatus::Sent,
            "COMPLETED" => PackageStatus::Completed,
            "ARCHIVED" => PackageStatus::Archived,
            "DECLINED" => PackageStatus::Declined,
            "OPTED_OUT" => PackageStatus::OptedOut,
            "EXPIRED" => PackageStatus::Expired,
            other => PackageStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Days a transaction is retained in each state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionRetention {
    pub draft: Option<i32>,
    pub sent: Option<i32>,
    pub completed: Option<i32>,
    pub archived: Option<i32>,
    pub declined: Option<i32>,
    pub opted_out: Option<i32>,
    pub expired: Option<i32>,
}

/// A signing transaction: documents plus the signers who act on them.
///
/// Obtained from [`crate::builder::PackageBuilder`] or from
/// [`crate::EslClient::get_package`]. A value fetched from the service is a
/// snapshot: it does not change when the package is modified remotely.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPackage {
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

impl DocumentPackage {
    pub fn id(&self) -> Option<&PackageId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> Option<&PackageStatus> {
        self.status.as_ref()
    }

    pub fn autocomplete(&self) -> bool {
        self.autocomplete
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    pub fn email_message(&self) -> Option<&str> {
        self.email_message.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn retention(&self) -> Option<&TransactionRetention> {
        self.retention.as_ref()
    }

    /// Documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Look up a document by name.
    pub fn document(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.name() == name)
    }

    /// Signers in insertion order.
    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    /// Look up a signer by email.
    pub fn signer(&self, email: &str) -> Option<&Signer> {
        self.signers.iter().find(|s| s.email() == email)
    }

    /// Insert a document, replacing any document with the same name in place.
    pub fn add_document(&mut self, document: Document) {
        match self.documents.iter_mut().find(|d| d.name() == document.name()) {
            Some(existing) => *existing = document,
            None => self.documents.push(document),
        }
    }

    /// Add a signer. Fails if a signer with the same email is already present
    /// or if its role name is taken.
    pub fn add_signer(&mut self, signer: Signer) -> Result<()> {
        if self.signer(signer.email()).is_some() {
            return Err(EslError::validation(
                "signers",
                format!("duplicate signer email {}", signer.email()),
            ));
        }
        self.signers.push(signer);
        if let Err(e) = Self::check_role_names(&self.signers) {
            self.signers.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove and return the signer with the given email.
    ///
    /// Signers after it move up one position, which renames their generated
    /// roles. If that would clash with a custom id the signer is kept and an
    /// error returned.
    pub fn remove_signer(&mut self, email: &str) -> Result<Option<Signer>> {
        let Some(position) = self.signers.iter().position(|s| s.email() == email) else {
            return Ok(None);
        };
        let removed = self.signers.remove(position);
        if let Err(e) = Self::check_role_names(&self.signers) {
            self.signers.insert(position, removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    /// Every signer must map to a distinct role name.
    pub(crate) fn check_role_names(signers: &[Signer]) -> Result<()> {
        let names: Vec<String> = signers
            .iter()
            .enumerate()
            .map(|(i, s)| s.role_name(i))
            .collect();
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(EslError::validation(
                    "signers",
                    format!("role {name} would be shared by two signers"),
                ));
            }
        }
        Ok(())
    }

    /// Role reference used on the wire for the signer with this email.
    ///
    /// The custom id when set, otherwise `Role{n}` with `n` the 1-based
    /// position of the signer.
    pub(crate) fn role_reference(&self, email: &str) -> Option<String> {
        self.signers
            .iter()
            .position(|s| s.email() == email)
            .map(|i| self.signers[i].role_name(i))
    }
}
