//! # eSignLive Rust SDK
//!
//! Rust SDK for the eSignLive e-signature REST API.
//!
//! Packages are assembled locally with fluent builders, validated on
//! `build()`, and then created, sent and tracked through [`EslClient`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use esignlive::EslClient;
//! use esignlive::builder::{DocumentBuilder, PackageBuilder, SignatureBuilder, SignerBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
//!
//!     let package = PackageBuilder::new("Lease agreement")
//!         .with_signer(
//!             SignerBuilder::new("john.smith@example.com")
//!                 .with_first_name("John")
//!                 .with_last_name("Smith")
//!                 .build()?,
//!         )
//!         .with_document(
//!             DocumentBuilder::new("lease")
//!                 .from_file("lease.pdf")
//!                 .with_signature(
//!                     SignatureBuilder::signature_for("john.smith@example.com")
//!                         .on_page(0)
//!                         .at_position(100.0, 200.0)
//!                         .build()?,
//!                 )
//!                 .build()?,
//!         )
//!         .build()?;
//!
//!     let package_id = client.create_and_send_package(&package).await?;
//!     println!("Sent package {}", package_id);
//!
//!     let status = client.get_signing_status(&package_id, None, None).await?;
//!     println!("Signing status: {}", status);
//!     Ok(())
//! }
//! ```
//!
//! ## Signer Attachments
//!
//! ```rust,no_run
//! use esignlive::{EslClient, PackageId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
//!     let package_id = PackageId::new("pkg-id");
//!
//!     let package = client.get_package(&package_id).await?;
//!     let requirement = package
//!         .signer("john.smith@example.com")
//!         .and_then(|s| s.attachment_requirement("Driver's license"))
//!         .ok_or("no such requirement")?;
//!
//!     client
//!         .upload_attachment(
//!             &package_id,
//!             requirement.id().unwrap_or_default(),
//!             "license.pdf",
//!             &std::fs::read("license.pdf")?,
//!             "signer1Id",
//!         )
//!         .await?;
//!
//!     // `package` is a snapshot; fetch again to see the uploaded file.
//!     let refreshed = client.get_package(&package_id).await?;
//!     println!("{} signers", refreshed.signers().len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, EslError>`:
//!
//! ```rust,no_run
//! use esignlive::{EslClient, EslError, PackageId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
//!
//!     match client.get_package(&PackageId::new("pkg-id")).await {
//!         Ok(package) => println!("Found {}", package.name()),
//!         Err(e) if e.is_auth_error() => println!("Invalid API key"),
//!         Err(EslError::Server { message_key, .. }) => println!("Rejected: {}", message_key),
//!         Err(e) => println!("Error: {}", e),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Requests are reported through `tracing`. The SDK does not install a
//! subscriber.

pub mod account;
pub mod api;
pub mod audit;
pub mod authentication;
pub mod builder;
pub mod client;
mod convert;
pub mod custom_fields;
pub mod error;
pub mod event_notifications;
pub mod field_summary;
pub mod groups;
pub mod model;
pub mod packages;
pub mod reminders;
pub mod rest;
pub mod sessions;
pub mod templates;
pub mod types;

// Re-export main types at the crate root
pub use client::{ClientConfig, EslClient};
pub use error::{EslError, Result};
pub use model::{Document, DocumentPackage, PackageId, PackageStatus, Signer};

pub use types::{
    AuthenticationToken, EventNotificationConfig, Group, NotificationEvent, ReminderSchedule,
    SessionToken, SigningStatus,
};
