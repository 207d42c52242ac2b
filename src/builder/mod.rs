//! Fluent builders for the domain model.
//!
//! Every builder ends in `build()`, which validates the collected values and
//! returns [`crate::EslError::Validation`] naming the offending field. No
//! builder performs I/O against the service.
//!
//! ```rust
//! use esignlive::builder::{
//!     AttachmentRequirementBuilder, DocumentBuilder, PackageBuilder, SignatureBuilder,
//!     SignerBuilder,
//! };
//! use esignlive::model::DocumentType;
//!
//! # fn main() -> esignlive::Result<()> {
//! let signer = SignerBuilder::new("john.smith@example.com")
//!     .with_first_name("John")
//!     .with_last_name("Smith")
//!     .with_custom_id("signer1Id")
//!     .with_attachment_requirement(
//!         AttachmentRequirementBuilder::new("Driver's license")
//!             .with_description("Please upload a scanned copy of your driver's license.")
//!             .required()
//!             .build()?,
//!     )
//!     .build()?;
//!
//! let package = PackageBuilder::new("Lease agreement")
//!     .described_as("Signed through the Rust SDK")
//!     .with_signer(signer)
//!     .with_document(
//!         DocumentBuilder::new("lease")
//!             .from_bytes(b"%PDF-1.4".to_vec(), DocumentType::Pdf)
//!             .with_signature(
//!                 SignatureBuilder::signature_for("john.smith@example.com")
//!                     .on_page(0)
//!                     .at_position(100.0, 200.0)
//!                     .build()?,
//!             )
//!             .build()?,
//!     )
//!     .build()?;
//!
//! assert_eq!(package.signers().len(), 1);
//! # Ok(())
//! # }
//! ```

mod attachment;
mod custom_field;
mod document;
mod field;
mod group;
mod package;
mod reminder;
mod signature;
mod signer;

pub use attachment::AttachmentRequirementBuilder;
pub use custom_field::CustomFieldBuilder;
pub use document::DocumentBuilder;
pub use field::FieldBuilder;
pub use group::GroupBuilder;
pub use package::PackageBuilder;
pub use reminder::ReminderScheduleBuilder;
pub use signature::SignatureBuilder;
pub use signer::SignerBuilder;

use crate::error::{EslError, Result};

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EslError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn require_dimension(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(EslError::validation(
            field,
            format!("must be a non-negative number, got {value}"),
        ));
    }
    Ok(())
}
