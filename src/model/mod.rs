//! Domain model of a signing transaction.
//!
//! Values in this module are assembled by the builders in
//! [`crate::builder`] and are read through accessors. Collections are only
//! filled by builders or by the explicit mutation methods on
//! [`DocumentPackage`].

mod document;
mod package;
mod signature;
mod signer;

pub use document::{Document, DocumentType};
pub use package::{DocumentPackage, PackageId, PackageStatus, TransactionRetention};
pub use signature::{Field, FieldStyle, Signature, SignatureStyle};
pub use signer::{AttachmentFile, AttachmentRequirement, RequirementStatus, Signer};
