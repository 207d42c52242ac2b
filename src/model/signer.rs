use chrono::{DateTime, Utc};
use std::fmt;

/// A party required to sign or to provide attachments.
#[derive(Debug, Clone, PartialEq)]
pub struct Signer {
    pub(crate) email: String,
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
    pub(crate) company: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) custom_id: Option<String>,
    pub(crate) signing_order: Option<i32>,
    pub(crate) message: Option<String>,
    pub(crate) can_change_signer: bool,
    pub(crate) deliver_signed_documents_by_email: bool,
    pub(crate) attachment_requirements: Vec<AttachmentRequirement>,
}

impl Signer {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Caller-chosen id, used as the role id on the wire. Fetched packages
    /// carry the id the service assigned.
    pub fn custom_id(&self) -> Option<&str> {
        self.custom_id.as_deref()
    }

    pub fn signing_order(&self) -> Option<i32> {
        self.signing_order
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn can_change_signer(&self) -> bool {
        self.can_change_signer
    }

    pub fn deliver_signed_documents_by_email(&self) -> bool {
        self.deliver_signed_documents_by_email
    }

    /// Attachment requirements in insertion order.
    pub fn attachment_requirements(&self) -> &[AttachmentRequirement] {
        &self.attachment_requirements
    }

    /// Look up an attachment requirement by name.
    pub fn attachment_requirement(&self, name: &str) -> Option<&AttachmentRequirement> {
        self.attachment_requirements.iter().find(|a| a.name() == name)
    }

    /// Wire role name: the custom id when set, otherwise `Role{n}` with `n`
    /// the 1-based position of the signer in its package.
    pub(crate) fn role_name(&self, position: usize) -> String {
        self.custom_id
            .clone()
            .unwrap_or_else(|| format!("Role{}", position + 1))
    }
}

/// Review state of an attachment requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementStatus {
    Incomplete,
    Complete,
    Rejected,
    Other(String),
}

impl RequirementStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RequirementStatus::Incomplete => "INCOMPLETE",
            RequirementStatus::Complete => "COMPLETE",
            RequirementStatus::Rejected => "REJECTED",
            RequirementStatus::Other(s) => s,
        }
    }
}

impl From<&str> for RequirementStatus {
    fn from(s: &str) -> Self {
        match s {
            "INCOMPLETE" => RequirementStatus::Incomplete,
            "COMPLETE" => RequirementStatus::Complete,
            "REJECTED" => RequirementStatus::Rejected,
            other => RequirementStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named request for a signer to upload supporting files.
///
/// `files` mirrors the service state at the time the owning package was
/// fetched. Uploading or deleting files does not update an existing value;
/// fetch the package again to observe the change.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentRequirement {
    pub(crate) id: Option<String>,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) required: bool,
    pub(crate) status: Option<RequirementStatus>,
    pub(crate) sender_comment: Option<String>,
    pub(crate) files: Vec<AttachmentFile>,
}

impl AttachmentRequirement {
    /// Server-assigned id; `None` until the package has been created.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn status(&self) -> Option<&RequirementStatus> {
        self.status.as_ref()
    }

    pub fn sender_comment(&self) -> Option<&str> {
        self.sender_comment.as_deref()
    }

    /// Uploaded files in upload order.
    pub fn files(&self) -> &[AttachmentFile] {
        &self.files
    }
}

/// A file a signer uploaded for an attachment requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentFile {
    pub id: String,
    pub name: String,
    pub insert_date: Option<DateTime<Utc>>,
}
