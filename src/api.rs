//! Wire representations exchanged with the eSignLive REST API.
//!
//! These types mirror the JSON the service speaks and are only used at the
//! transport boundary. Use the builders and [`crate::model`] types in
//! application code; [`crate::convert`] translates between the two.
//!
//! Unknown JSON fields are ignored on deserialization and `None` fields are
//! omitted on serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Package type marker for regular transactions.
pub const PACKAGE_TYPE: &str = "PACKAGE";
/// Package type marker for templates.
pub const TEMPLATE_TYPE: &str = "TEMPLATE";
/// Role type for signing parties.
pub const SIGNER_ROLE_TYPE: &str = "SIGNER";

/// A signing transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Package {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_id"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub package_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_retention: Option<TransactionRetention>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::or_default")]
    pub roles: Vec<Role>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::or_default")]
    pub documents: Vec<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// Days a transaction is kept in each state before it is purged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionRetention {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declined: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opted_out: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<i32>,
}

/// A party in the transaction, wrapping one signer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Role {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_id"
    )]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub role_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reassign: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_message: Option<EmailMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::or_default")]
    pub signers: Vec<Signer>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::or_default")]
    pub attachment_requirements: Vec<AttachmentRequirement>,
}

/// Personal message sent to a role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailMessage {
    #[serde(deserialize_with = "lenient::or_default")]
    pub content: String,
}

/// Signer identity inside a role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Signer {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_id"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
}

/// How signed documents are delivered to a signer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delivery {
    pub email: bool,
}

/// A file the signer is asked to upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentRequirement {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_id"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::or_default")]
    pub files: Vec<AttachmentFile>,
}

/// A file uploaded against an attachment requirement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentFile {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_date: Option<DateTime<Utc>>,
}

/// Document metadata. Content travels separately as a multipart part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_id"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::or_default")]
    pub approvals: Vec<Approval>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::or_default")]
    pub fields: Vec<Field>,
}

/// A signature placement bound to a role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Approval {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_id"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub role: String,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient::or_default")]
    pub fields: Vec<Field>,
}

/// Field type of the signature box inside an approval.
pub const FIELD_TYPE_SIGNATURE: &str = "SIGNATURE";
/// Field type of every non-signature field.
pub const FIELD_TYPE_INPUT: &str = "INPUT";

/// A positioned box on a document page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_id"
    )]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::or_default")]
    pub field_type: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub subtype: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub page: u32,
    #[serde(deserialize_with = "lenient::or_default")]
    pub left: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub top: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub width: f64,
    #[serde(deserialize_with = "lenient::or_default")]
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<String>,
}

/// Status change request body.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct StatusUpdate<'a> {
    pub status: &'a str,
}

/// Response of create calls returning only the new id.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Id {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
}

/// Deserializers tolerant of the loose typing some server responses use.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    impl From<RawId> for String {
        fn from(raw: RawId) -> Self {
            match raw {
                RawId::Text(s) => s,
                RawId::Integer(n) => n.to_string(),
                RawId::Float(n) => n.to_string(),
            }
        }
    }

    /// `null` reads as the type's default.
    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    /// An id sent as a string or a number; `null` reads as empty.
    pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<RawId>::deserialize(deserializer)?
            .map(String::from)
            .unwrap_or_default())
    }

    pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
    }
}
