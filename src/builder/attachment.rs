use super::require_non_empty;
use crate::error::Result;
use crate::model::AttachmentRequirement;

/// Builds an [`AttachmentRequirement`] for a signer.
#[derive(Debug, Clone)]
pub struct AttachmentRequirementBuilder {
    name: String,
    description: Option<String>,
    required: bool,
}

impl AttachmentRequirementBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            required: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The signer cannot complete signing without uploading a file.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn build(self) -> Result<AttachmentRequirement> {
        require_non_empty("attachment requirement name", &self.name)?;

        Ok(AttachmentRequirement {
            id: None,
            name: self.name,
            description: self.description,
            required: self.required,
            status: None,
            sender_comment: None,
            files: Vec::new(),
        })
    }
}
