use super::document::document_from_api;
use super::signer::{signer_from_role, signer_to_role};
use crate::api;
use crate::builder::PackageBuilder;
use crate::model::{DocumentPackage, PackageId, PackageStatus, TransactionRetention};

impl DocumentPackage {
    /// Wire form of this package, documents and roles included.
    pub fn to_api_package(&self) -> api::Package {
        api::Package {
            id: self.id.as_ref().map(|id| id.to_string()),
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status.as_ref().map(|s| s.as_str().to_string()),
            package_type: Some(api::PACKAGE_TYPE.to_string()),
            autocomplete: Some(self.autocomplete),
            due: self.due_date,
            email_message: self.email_message.clone(),
            language: self.language.clone(),
            transaction_retention: self.retention.as_ref().map(retention_to_api),
            roles: self
                .signers
                .iter()
                .enumerate()
                .map(|(i, s)| signer_to_role(s, i))
                .collect(),
            documents: self
                .documents
                .iter()
                .map(|d| d.to_api_document(self))
                .collect(),
            created: None,
            updated: None,
        }
    }
}

impl PackageBuilder {
    /// Start from a package returned by the service.
    ///
    /// Fields the domain model does not know about are dropped.
    pub fn from_api(package: &api::Package) -> Self {
        Self {
            id: package.id.clone().map(PackageId::from),
            name: package.name.clone(),
            description: package.description.clone(),
            status: package.status.as_deref().map(PackageStatus::from),
            autocomplete: package.autocomplete.unwrap_or(true),
            due_date: package.due,
            email_message: package.email_message.clone(),
            language: package.language.clone(),
            retention: package.transaction_retention.as_ref().map(retention_from_api),
            documents: package
                .documents
                .iter()
                .map(|d| document_from_api(d, &package.roles))
                .collect(),
            signers: package.roles.iter().filter_map(signer_from_role).collect(),
        }
    }
}

fn retention_to_api(retention: &TransactionRetention) -> api::TransactionRetention {
    api::TransactionRetention {
        draft: retention.draft,
        sent: retention.sent,
        completed: retention.completed,
        archived: retention.archived,
        declined: retention.declined,
        opted_out: retention.opted_out,
        expired: retention.expired,
    }
}

fn retention_from_api(retention: &api::TransactionRetention) -> TransactionRetention {
    TransactionRetention {
        draft: retention.draft,
        sent: retention.sent,
        completed: retention.completed,
        archived: retention.archived,
        declined: retention.declined,
        opted_out: retention.opted_out,
        expired: retention.expired,
    }
}
