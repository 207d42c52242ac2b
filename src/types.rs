//! Type definitions for the auxiliary services.
//!
//! These resources have the same shape in the SDK and on the wire, so a
//! single serde type serves both. The package graph lives in
//! [`crate::model`] and [`crate::api`] instead.

use crate::api::lenient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Session token used to open the signing ceremony or the sender UI.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub session_id: String,
}

/// Short-lived token authenticating a user or signer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AuthenticationToken {
    pub value: String,
}

/// Signing progress of a signer on a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningStatus {
    Inactive,
    SigningPending,
    SigningComplete,
    Complete,
    Archived,
    Other(String),
}

impl From<&str> for SigningStatus {
    fn from(s: &str) -> Self {
        match s {
            "INACTIVE" => SigningStatus::Inactive,
            "SIGNING_PENDING" => SigningStatus::SigningPending,
            "SIGNING_COMPLETE" => SigningStatus::SigningComplete,
            "COMPLETE" | "COMPLETED" => SigningStatus::Complete,
            "ARCHIVED" => SigningStatus::Archived,
            other => SigningStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for SigningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SigningStatus::Inactive => "INACTIVE",
            SigningStatus::SigningPending => "SIGNING_PENDING",
            SigningStatus::SigningComplete => "SIGNING_COMPLETE",
            SigningStatus::Complete => "COMPLETE",
            SigningStatus::Archived => "ARCHIVED",
            SigningStatus::Other(s) => s,
        };
        f.write_str(s)
    }
}

/// An audit trail entry of a package.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_ip: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

/// Value a signer entered into a field.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSummary {
    pub signer_id: String,
    pub document_id: String,
    pub field_id: String,
    #[serde(default)]
    pub field_value: Option<String>,
}

/// Role of a member inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupMemberType {
    Regular,
    Manager,
}

/// A member of a signing group.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub member_type: GroupMemberType,
}

/// A group of users any of whom may sign on behalf of the group.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub email_members: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub members: Vec<GroupMember>,
}

/// Localized label of a custom field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Translation {
    pub language: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An account-wide custom field senders can fill in.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CustomField {
    pub id: String,
    #[serde(rename = "value", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub translations: Vec<Translation>,
}

/// A sender belonging to the account.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Request to invite a new sender into the account.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMember {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// One page of a listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Items in this page.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub results: Vec<T>,
    /// Total number of items.
    pub count: u64,
}

/// Automatic reminder emails for pending signers.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSchedule {
    pub package_id: String,
    #[serde(rename = "startInDaysDelay")]
    pub days_until_first_reminder: u32,
    #[serde(rename = "intervalInDays")]
    pub days_between_reminders: u32,
    #[serde(rename = "repetitionsCount")]
    pub number_of_repetitions: u32,
}

/// Package events that can be pushed to a callback URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationEvent {
    PackageCreate,
    PackageActivate,
    PackageDeactivate,
    PackageReadyForComplete,
    PackageComplete,
    PackageTrash,
    PackageRestore,
    PackageDelete,
    PackageDecline,
    PackageExpire,
    PackageOptOut,
    DocumentSigned,
    RoleReassign,
    SignerComplete,
    KbaFailure,
    EmailBounce,
    PackageAttachment,
    SignerLocked,
    #[serde(other)]
    Unknown,
}

/// Callback registration for package events.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EventNotificationConfig {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub events: Vec<NotificationEvent>,
}
