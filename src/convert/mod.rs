//! Translation between the domain model and the wire DTOs.
//!
//! [`DocumentPackage::to_api_package`] and [`PackageBuilder::from_api`] are
//! inverses for every field the domain exposes, except values the service
//! assigns on creation and document content, which never travels inside the
//! package JSON.
//!
//! Signers travel as roles. A role is named after the signer's custom id, or
//! `Role{n}` when there is none, and approvals point at that name. Going back,
//! an approval's role reference resolves to the email of the matching role's
//! signer.

mod document;
mod package;
mod signer;

pub(crate) use document::document_from_api;

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::builder::{
        AttachmentRequirementBuilder, DocumentBuilder, FieldBuilder, PackageBuilder,
        SignatureBuilder, SignerBuilder,
    };
    use crate::model::{DocumentPackage, FieldStyle, PackageStatus, TransactionRetention};
    use chrono::{TimeZone, Utc};

    fn sample_package() -> DocumentPackage {
        let signer1 = SignerBuilder::new("john.smith@example.com")
            .with_first_name("John")
            .with_last_name("Smith")
            .with_company("Acme")
            .with_title("CFO")
            .with_custom_id("signer1Id")
            .signing_order(1)
            .with_email_message("Please sign")
            .can_change_signer()
            .deliver_signed_documents_by_email()
            .with_attachment_requirement(
                AttachmentRequirementBuilder::new("Driver's license")
                    .with_description("Please upload a scanned copy of your driver's license.")
                    .required()
                    .build()
                    .unwrap(),
            )
            .with_attachment_requirement(
                AttachmentRequirementBuilder::new("Proof of address")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let signer2 = SignerBuilder::new("jane.doe@example.com")
            .with_first_name("Jane")
            .build()
            .unwrap();

        let document = DocumentBuilder::new("lease")
            .with_description("Lease agreement")
            .at_index(1)
            .enable_extraction()
            .with_signature(
                SignatureBuilder::signature_for("john.smith@example.com")
                    .on_page(0)
                    .at_position(100.0, 200.0)
                    .with_field(
                        FieldBuilder::signature_date()
                            .at_position(100.0, 260.0)
                            .build()
                            .unwrap(),
                    )
                    .build()
                    .unwrap(),
            )
            .with_signature(
                SignatureBuilder::initials_for("jane.doe@example.com")
                    .on_page(1)
                    .at_position(50.5, 75.25)
                    .with_size(80.0, 40.0)
                    .build()
                    .unwrap(),
            )
            .with_signature(
                SignatureBuilder::capture_for("sender@example.com")
                    .on_page(2)
                    .build()
                    .unwrap(),
            )
            .with_injected_field(
                FieldBuilder::text_field()
                    .with_name("policy")
                    .with_value("A-1")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        PackageBuilder::new("Lease package")
            .described_as("This is a package created using the eSignLive SDK")
            .with_email_message("Hello")
            .with_language("fr")
            .without_autocomplete()
            .expires_at(Utc.with_ymd_and_hms(2030, 1, 31, 12, 0, 0).unwrap())
            .with_transaction_retention(TransactionRetention {
                draft: Some(30),
                completed: Some(120),
                ..Default::default()
            })
            .with_signer(signer1)
            .with_signer(signer2)
            .with_document(document)
            .build()
            .unwrap()
    }

    #[test]
    fn test_round_trip_preserves_domain_fields() {
        let package = sample_package();
        let restored = PackageBuilder::from_api(&package.to_api_package())
            .build()
            .unwrap();

        assert_eq!(restored, package);
    }

    #[test]
    fn test_round_trip_through_json() {
        let package = sample_package();
        let json = serde_json::to_string(&package.to_api_package()).unwrap();
        let wire: api::Package = serde_json::from_str(&json).unwrap();

        let restored = PackageBuilder::from_api(&wire).build().unwrap();
        assert_eq!(restored, package);
    }

    #[test]
    fn test_to_api_is_deterministic() {
        let package = sample_package();
        assert_eq!(package.to_api_package(), package.to_api_package());
    }

    #[test]
    fn test_roles_and_approvals() {
        let wire = sample_package().to_api_package();

        assert_eq!(wire.package_type.as_deref(), Some(api::PACKAGE_TYPE));
        assert_eq!(wire.roles.len(), 2);
        assert_eq!(wire.roles[0].id.as_deref(), Some("signer1Id"));
        assert_eq!(wire.roles[0].name.as_deref(), Some("signer1Id"));
        assert_eq!(wire.roles[1].id, None);
        assert_eq!(wire.roles[1].name.as_deref(), Some("Role2"));
        assert_eq!(wire.roles[0].attachment_requirements.len(), 2);

        let approvals = &wire.documents[0].approvals;
        assert_eq!(approvals[0].role, "signer1Id");
        assert_eq!(approvals[1].role, "Role2");
        // No signer with this email: the email itself is the reference.
        assert_eq!(approvals[2].role, "sender@example.com");

        let fields = &approvals[0].fields;
        assert_eq!(fields[0].field_type, api::FIELD_TYPE_SIGNATURE);
        assert_eq!(fields[0].subtype, "FULLNAME");
        assert_eq!(fields[1].field_type, api::FIELD_TYPE_INPUT);
        assert_eq!(fields[1].binding.as_deref(), Some("{approval.signed}"));
    }

    #[test]
    fn test_null_fields_are_omitted() {
        let package = PackageBuilder::new("Minimal").build().unwrap();
        let json = serde_json::to_value(package.to_api_package()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Minimal",
                "type": "PACKAGE",
                "autocomplete": true
            })
        );
    }

    #[test]
    fn test_server_package_maps_to_domain() {
        let json = serde_json::json!({
            "id": "pkg-1",
            "name": "Lease",
            "status": "SENT",
            "autocomplete": true,
            "created": "2024-03-01T10:00:00Z",
            "unknownFutureField": { "nested": true },
            "roles": [
                {
                    "id": "signer1Id",
                    "name": "signer1Id",
                    "type": "SIGNER",
                    "signers": [{ "id": "signer1Id", "email": "john.smith@example.com" }],
                    "attachmentRequirements": [{
                        "id": "att-1",
                        "name": "Driver's license",
                        "required": true,
                        "status": "INCOMPLETE",
                        "files": [
                            { "id": "f1", "name": "first.pdf" },
                            { "id": "f2", "name": "second.pdf" }
                        ]
                    }]
                },
                { "id": "placeholder", "name": "Placeholder", "signers": [] }
            ],
            "documents": [{
                "id": "doc-1",
                "name": "lease",
                "approvals": [
                    { "id": "ap-1", "role": "signer1Id", "fields": [
                        { "type": "SIGNATURE", "subtype": "CAPTURE", "page": 0, "left": 1.0, "top": 2.0, "width": 3.0, "height": 4.0 }
                    ]},
                    { "id": "ap-2", "role": "placeholder", "fields": [] }
                ]
            }]
        });

        let wire: api::Package = serde_json::from_value(json).unwrap();
        let package = PackageBuilder::from_api(&wire).build().unwrap();

        assert_eq!(package.id().map(|id| id.as_str()), Some("pkg-1"));
        assert_eq!(package.status(), Some(&PackageStatus::Sent));
        // Placeholder roles have no signer.
        assert_eq!(package.signers().len(), 1);

        let requirement = package
            .signer("john.smith@example.com")
            .and_then(|s| s.attachment_requirement("Driver's license"))
            .unwrap();
        assert_eq!(requirement.id(), Some("att-1"));
        let names: Vec<_> = requirement.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["first.pdf", "second.pdf"]);

        let document = package.document("lease").unwrap();
        assert_eq!(document.id(), Some("doc-1"));
        assert!(document.content().is_none());
        assert_eq!(document.signatures()[0].signer_email(), "john.smith@example.com");
        assert_eq!(document.signatures()[1].signer_email(), "placeholder");
    }

    #[test]
    fn test_document_uses_roles_of_owning_package() {
        let package = sample_package();
        let document = package.document("lease").unwrap();
        let wire = document.to_api_document(&package);

        assert_eq!(wire.name, "lease");
        assert_eq!(wire.fields.len(), 1);
        assert_eq!(
            FieldStyle::from_wire(&wire.fields[0].subtype, wire.fields[0].binding.as_deref()),
            FieldStyle::TextField
        );
    }

    #[test]
    fn test_custom_id_matching_generated_role_is_rejected() {
        let result = PackageBuilder::new("Clash")
            .with_signer(
                SignerBuilder::new("first@example.com")
                    .with_custom_id("Role2")
                    .build()
                    .unwrap(),
            )
            .with_signer(SignerBuilder::new("second@example.com").build().unwrap())
            .build();
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_every_role_resolves_to_its_own_signer() {
        let package = PackageBuilder::new("Distinct")
            .with_signer(
                SignerBuilder::new("first@example.com")
                    .with_custom_id("Role1")
                    .build()
                    .unwrap(),
            )
            .with_signer(SignerBuilder::new("second@example.com").build().unwrap())
            .with_signer(
                SignerBuilder::new("third@example.com")
                    .with_custom_id("lead")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let wire = package.to_api_package();
        let names: Vec<_> = wire.roles.iter().filter_map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec!["Role1", "Role2", "lead"]);

        let back = PackageBuilder::from_api(&wire).build().unwrap();
        let emails: Vec<_> = back.signers().iter().map(|s| s.email()).collect();
        assert_eq!(
            emails,
            vec!["first@example.com", "second@example.com", "third@example.com"]
        );
    }
}
