use super::require_non_empty;
use crate::error::{EslError, Result};
use crate::model::{AttachmentRequirement, Signer};

/// Builds a [`Signer`].
#[derive(Debug, Clone)]
pub struct SignerBuilder {
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
    company: Option<String>,
    title: Option<String>,
    custom_id: Option<String>,
    signing_order: Option<i32>,
    message: Option<String>,
    can_change_signer: bool,
    deliver_signed_documents_by_email: bool,
    attachment_requirements: Vec<AttachmentRequirement>,
}

impl SignerBuilder {
    /// Start a signer identified by `email`.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: None,
            last_name: None,
            company: None,
            title: None,
            custom_id: None,
            signing_order: None,
            message: None,
            can_change_signer: false,
            deliver_signed_documents_by_email: false,
            attachment_requirements: Vec::new(),
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Id used to address this signer in later calls (sessions, attachments).
    pub fn with_custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    pub fn signing_order(mut self, order: i32) -> Self {
        self.signing_order = Some(order);
        self
    }

    /// Personal message included in the signer's invitation.
    pub fn with_email_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn can_change_signer(mut self) -> Self {
        self.can_change_signer = true;
        self
    }

    pub fn deliver_signed_documents_by_email(mut self) -> Self {
        self.deliver_signed_documents_by_email = true;
        self
    }

    pub fn with_attachment_requirement(mut self, requirement: AttachmentRequirement) -> Self {
        self.attachment_requirements.push(requirement);
        self
    }

    pub fn build(self) -> Result<Signer> {
        require_non_empty("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(EslError::validation(
                "email",
                format!("{} is not an email address", self.email),
            ));
        }
        if let Some(id) = &self.custom_id {
            require_non_empty("custom id", id)?;
        }
        for (i, requirement) in self.attachment_requirements.iter().enumerate() {
            if self.attachment_requirements[..i]
                .iter()
                .any(|other| other.name() == requirement.name())
            {
                return Err(EslError::validation(
                    "attachment requirements",
                    format!("duplicate requirement name {}", requirement.name()),
                ));
            }
        }

        Ok(Signer {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            company: self.company,
            title: self.title,
            custom_id: self.custom_id,
            signing_order: self.signing_order,
            message: self.message,
            can_change_signer: self.can_change_signer,
            deliver_signed_documents_by_email: self.deliver_signed_documents_by_email,
            attachment_requirements: self.attachment_requirements,
        })
    }
}
