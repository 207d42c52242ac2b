use super::require_dimension;
use crate::error::Result;
use crate::model::{Field, FieldStyle};

const DEFAULT_WIDTH: f64 = 150.0;
const DEFAULT_HEIGHT: f64 = 50.0;

/// Builds a [`Field`], either standalone on a document or attached to a
/// signature.
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    name: Option<String>,
    style: FieldStyle,
    page: u32,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    value: Option<String>,
}

impl FieldBuilder {
    fn with_style(style: FieldStyle) -> Self {
        Self {
            name: None,
            style,
            page: 0,
            x: 0.0,
            y: 0.0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            value: None,
        }
    }

    pub fn text_field() -> Self {
        Self::with_style(FieldStyle::TextField)
    }

    pub fn text_area() -> Self {
        Self::with_style(FieldStyle::TextArea)
    }

    pub fn label() -> Self {
        Self::with_style(FieldStyle::Label)
    }

    pub fn checkbox() -> Self {
        Self::with_style(FieldStyle::Checkbox)
    }

    pub fn signature_date() -> Self {
        Self::with_style(FieldStyle::SigningDate)
    }

    pub fn signer_name() -> Self {
        Self::with_style(FieldStyle::SignerName)
    }

    pub fn signer_title() -> Self {
        Self::with_style(FieldStyle::SignerTitle)
    }

    pub fn signer_company() -> Self {
        Self::with_style(FieldStyle::SignerCompany)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn on_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn at_position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn build(self) -> Result<Field> {
        require_dimension("field x", self.x)?;
        require_dimension("field y", self.y)?;
        require_dimension("field width", self.width)?;
        require_dimension("field height", self.height)?;

        Ok(Field {
            id: None,
            name: self.name,
            style: self.style,
            page: self.page,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            value: self.value,
        })
    }
}
