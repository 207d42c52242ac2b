use super::{require_dimension, require_non_empty};
use crate::error::Result;
use crate::model::{Field, Signature, SignatureStyle};

const DEFAULT_WIDTH: f64 = 250.0;
const DEFAULT_HEIGHT: f64 = 50.0;

/// Builds a [`Signature`] placed on a document for one signer.
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    signer_email: String,
    style: SignatureStyle,
    page: u32,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fields: Vec<Field>,
}

impl SignatureBuilder {
    fn new(signer_email: impl Into<String>, style: SignatureStyle) -> Self {
        Self {
            signer_email: signer_email.into(),
            style,
            page: 0,
            x: 0.0,
            y: 0.0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fields: Vec::new(),
        }
    }

    /// A full-name signature for the signer with this email.
    pub fn signature_for(signer_email: impl Into<String>) -> Self {
        Self::new(signer_email, SignatureStyle::FullName)
    }

    pub fn initials_for(signer_email: impl Into<String>) -> Self {
        Self::new(signer_email, SignatureStyle::Initials)
    }

    /// A hand-drawn signature captured on screen.
    pub fn capture_for(signer_email: impl Into<String>) -> Self {
        Self::new(signer_email, SignatureStyle::HandDrawn)
    }

    /// Zero-based page index.
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

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Result<Signature> {
        require_non_empty("signer email", &self.signer_email)?;
        require_dimension("signature x", self.x)?;
        require_dimension("signature y", self.y)?;
        require_dimension("signature width", self.width)?;
        require_dimension("signature height", self.height)?;

        Ok(Signature {
            id: None,
            signer_email: self.signer_email,
            style: self.style,
            page: self.page,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            fields: self.fields,
        })
    }
}
