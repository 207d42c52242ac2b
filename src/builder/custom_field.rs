use super::require_non_empty;
use crate::error::{EslError, Result};
use crate::types::{CustomField, Translation};

/// Builds an account [`CustomField`].
#[derive(Debug, Clone)]
pub struct CustomFieldBuilder {
    id: String,
    default_value: Option<String>,
    required: bool,
    translations: Vec<Translation>,
}

impl CustomFieldBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_value: None,
            required: false,
            translations: Vec::new(),
        }
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_translation(
        mut self,
        language: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        self.translations.push(Translation {
            language: language.into(),
            name: name.into(),
            description,
        });
        self
    }

    pub fn build(self) -> Result<CustomField> {
        require_non_empty("custom field id", &self.id)?;
        if self.translations.is_empty() {
            return Err(EslError::validation(
                "translations",
                "at least one translation is required",
            ));
        }

        Ok(CustomField {
            id: self.id,
            default_value: self.default_value,
            required: self.required,
            translations: self.translations,
        })
    }
}
