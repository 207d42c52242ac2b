//! Signer attachment example for the eSignLive SDK.
//!
//! Creates a package whose signer must provide a driver's license, uploads
//! two files against that requirement, deletes one, and lists what is left.
//!
//! Run with:
//! ```bash
//! ESL_API_KEY=xxx SIGNER_EMAIL=john.smith@example.com DOCUMENT=contract.pdf \
//!     ATTACHMENT=license.pdf cargo run --example attachment_file
//! ```

use esignlive::builder::{
    AttachmentRequirementBuilder, DocumentBuilder, PackageBuilder, SignatureBuilder, SignerBuilder,
};
use esignlive::{ClientConfig, DocumentPackage, EslClient};
use uuid::Uuid;

const SIGNER_ID: &str = "signer1Id";
const REQUIREMENT: &str = "Driver's license";

fn print_files(package: &DocumentPackage, email: &str) {
    let Some(requirement) = package
        .signer(email)
        .and_then(|s| s.attachment_requirement(REQUIREMENT))
    else {
        println!("  (no requirement)");
        return;
    };
    for file in requirement.files() {
        println!("  - {} ({})", file.name, file.id);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key =
        std::env::var("ESL_API_KEY").expect("ESL_API_KEY environment variable required");
    let signer_email =
        std::env::var("SIGNER_EMAIL").expect("SIGNER_EMAIL environment variable required");
    let document = std::env::var("DOCUMENT").expect("DOCUMENT environment variable required");
    let attachment_path =
        std::env::var("ATTACHMENT").expect("ATTACHMENT environment variable required");
    let attachment = std::fs::read(&attachment_path)?;

    let client = EslClient::with_config(api_key, ClientConfig::from_env()?)?;

    let package = PackageBuilder::new(format!(
        "attachment-{}",
        &Uuid::new_v4().to_string()[..8]
    ))
    .with_signer(
        SignerBuilder::new(&signer_email)
            .with_first_name("John")
            .with_last_name("Smith")
            .with_custom_id(SIGNER_ID)
            .with_attachment_requirement(
                AttachmentRequirementBuilder::new(REQUIREMENT)
                    .with_description("Please upload a scanned copy of your driver's license.")
                    .required()
                    .build()?,
            )
            .build()?,
    )
    .with_document(
        DocumentBuilder::new("contract")
            .from_file(&document)
            .with_signature(
                SignatureBuilder::signature_for(&signer_email)
                    .on_page(0)
                    .at_position(100.0, 200.0)
                    .build()?,
            )
            .build()?,
    )
    .build()?;

    let package_id = client.create_and_send_package(&package).await?;
    println!("Sent package {}", package_id);

    let sent = client.get_package(&package_id).await?;
    let attachment_id = sent
        .signer(&signer_email)
        .and_then(|s| s.attachment_requirement(REQUIREMENT))
        .and_then(|r| r.id())
        .ok_or("attachment requirement has no id")?
        .to_string();

    println!("\nUploading two files...");
    client
        .upload_attachment(&package_id, &attachment_id, "license-front.pdf", &attachment, SIGNER_ID)
        .await?;
    client
        .upload_attachment(&package_id, &attachment_id, "license-back.pdf", &attachment, SIGNER_ID)
        .await?;

    // `sent` still shows no files; fetch again.
    let uploaded = client.get_package(&package_id).await?;
    print_files(&uploaded, &signer_email);

    let first_file = uploaded
        .signer(&signer_email)
        .and_then(|s| s.attachment_requirement(REQUIREMENT))
        .and_then(|r| r.files().first())
        .map(|f| f.id.clone())
        .ok_or("no uploaded file")?;

    println!("\nDeleting {}...", first_file);
    client
        .delete_attachment_file(&package_id, &attachment_id, &first_file, SIGNER_ID)
        .await?;

    let remaining = client.get_package(&package_id).await?;
    print_files(&remaining, &signer_email);

    let bytes = client
        .packages()
        .download_attachment_file(&package_id, &attachment_id, &first_file)
        .await;
    println!("\nDownload of deleted file: {}", if bytes.is_ok() { "ok" } else { "rejected" });

    Ok(())
}
