//! Basic usage example for the eSignLive SDK.
//!
//! This example demonstrates:
//! - Creating a client
//! - Building a package with one signer and one document
//! - Creating and sending it
//! - Checking its signing status
//!
//! Run with:
//! ```bash
//! ESL_API_KEY=xxx SIGNER_EMAIL=john.smith@example.com DOCUMENT=contract.pdf cargo run --example basic
//! ```

use esignlive::builder::{
    DocumentBuilder, FieldBuilder, PackageBuilder, SignatureBuilder, SignerBuilder,
};
use esignlive::{ClientConfig, EslClient};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Get settings from environment
    let api_key =
        std::env::var("ESL_API_KEY").expect("ESL_API_KEY environment variable required");
    let signer_email =
        std::env::var("SIGNER_EMAIL").expect("SIGNER_EMAIL environment variable required");
    let document = std::env::var("DOCUMENT").expect("DOCUMENT environment variable required");

    // Create client
    println!("Creating eSignLive client...");
    let client = EslClient::with_config(api_key, ClientConfig::from_env()?)?;

    // Build a package
    let package_name = format!("basic-{}", &Uuid::new_v4().to_string()[..8]);
    let package = PackageBuilder::new(&package_name)
        .described_as("This is a package created using the eSignLive SDK")
        .with_signer(
            SignerBuilder::new(&signer_email)
                .with_first_name("John")
                .with_last_name("Smith")
                .with_custom_id("signer1Id")
                .build()?,
        )
        .with_document(
            DocumentBuilder::new("contract")
                .from_file(&document)
                .with_signature(
                    SignatureBuilder::signature_for(&signer_email)
                        .on_page(0)
                        .at_position(100.0, 200.0)
                        .with_field(
                            FieldBuilder::signature_date()
                                .on_page(0)
                                .at_position(100.0, 260.0)
                                .build()?,
                        )
                        .build()?,
                )
                .build()?,
        )
        .build()?;

    println!("\nCreating and sending package {}...", package_name);
    let package_id = client.create_and_send_package(&package).await?;
    println!("Package id: {}", package_id);

    let sent = client.get_package(&package_id).await?;
    println!("Status:     {:?}", sent.status());
    for document in sent.documents() {
        println!("  - {} ({:?})", document.name(), document.id());
    }

    let status = client.get_signing_status(&package_id, None, None).await?;
    println!("Signing status: {}", status);

    let session = client
        .create_signer_session_token(&package_id, "signer1Id")
        .await?;
    println!("Signer session: {}", session.session_id);

    println!("\nDone!");
    Ok(())
}
