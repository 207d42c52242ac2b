use super::signer::email_for_role;
use crate::api;
use crate::model::{
    Document, DocumentPackage, DocumentType, Field, FieldStyle, Signature, SignatureStyle,
};

impl Document {
    /// Wire form of this document's metadata. Signatures are bound to the
    /// roles `package` assigns to their signers.
    pub fn to_api_document(&self, package: &DocumentPackage) -> api::Document {
        api::Document {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            index: self.index,
            extract: Some(self.extract),
            approvals: self
                .signatures
                .iter()
                .map(|s| signature_to_approval(s, package))
                .collect(),
            fields: self.fields.iter().map(field_to_api).collect(),
        }
    }
}

pub(crate) fn document_from_api(document: &api::Document, roles: &[api::Role]) -> Document {
    Document {
        id: document.id.clone(),
        name: document.name.clone(),
        description: document.description.clone(),
        file_name: None,
        content: None,
        document_type: DocumentType::Pdf,
        index: document.index,
        extract: document.extract.unwrap_or(false),
        signatures: document
            .approvals
            .iter()
            .map(|a| signature_from_approval(a, roles))
            .collect(),
        fields: document.fields.iter().map(field_from_api).collect(),
    }
}

fn signature_to_approval(signature: &Signature, package: &DocumentPackage) -> api::Approval {
    let role = package
        .role_reference(&signature.signer_email)
        .unwrap_or_else(|| signature.signer_email.clone());

    let mut fields = Vec::with_capacity(signature.fields.len() + 1);
    fields.push(api::Field {
        id: None,
        name: None,
        field_type: api::FIELD_TYPE_SIGNATURE.to_string(),
        subtype: signature.style.subtype().to_string(),
        page: signature.page,
        left: signature.x,
        top: signature.y,
        width: signature.width,
        height: signature.height,
        value: None,
        binding: None,
    });
    fields.extend(signature.fields.iter().map(field_to_api));

    api::Approval {
        id: signature.id.clone(),
        role,
        fields,
    }
}

fn signature_from_approval(approval: &api::Approval, roles: &[api::Role]) -> Signature {
    let signature_field = approval
        .fields
        .iter()
        .find(|f| f.field_type == api::FIELD_TYPE_SIGNATURE);

    let (style, page, x, y, width, height) = match signature_field {
        Some(f) => (
            SignatureStyle::from_subtype(&f.subtype),
            f.page,
            f.left,
            f.top,
            f.width,
            f.height,
        ),
        None => (SignatureStyle::FullName, 0, 0.0, 0.0, 0.0, 0.0),
    };

    Signature {
        id: approval.id.clone(),
        signer_email: email_for_role(roles, &approval.role),
        style,
        page,
        x,
        y,
        width,
        height,
        fields: approval
            .fields
            .iter()
            .filter(|f| f.field_type != api::FIELD_TYPE_SIGNATURE)
            .map(field_from_api)
            .collect(),
    }
}

fn field_to_api(field: &Field) -> api::Field {
    let (subtype, binding) = field.style.to_wire();

    api::Field {
        id: field.id.clone(),
        name: field.name.clone(),
        field_type: api::FIELD_TYPE_INPUT.to_string(),
        subtype,
        page: field.page,
        left: field.x,
        top: field.y,
        width: field.width,
        height: field.height,
        value: field.value.clone(),
        binding,
    }
}

fn field_from_api(field: &api::Field) -> Field {
    Field {
        id: field.id.clone(),
        name: field.name.clone(),
        style: FieldStyle::from_wire(&field.subtype, field.binding.as_deref()),
        page: field.page,
        x: field.left,
        y: field.top,
        width: field.width,
        height: field.height,
        value: field.value.clone(),
    }
}
