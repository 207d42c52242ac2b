use crate::api;
use crate::model::{AttachmentFile, AttachmentRequirement, RequirementStatus, Signer};

pub(crate) fn signer_to_role(signer: &Signer, position: usize) -> api::Role {
    api::Role {
        id: signer.custom_id.clone(),
        name: Some(signer.role_name(position)),
        index: signer.signing_order,
        role_type: Some(api::SIGNER_ROLE_TYPE.to_string()),
        reassign: Some(signer.can_change_signer),
        email_message: signer
            .message
            .as_ref()
            .map(|content| api::EmailMessage {
                content: content.clone(),
            }),
        signers: vec![api::Signer {
            id: signer.custom_id.clone(),
            email: signer.email.clone(),
            first_name: signer.first_name.clone(),
            last_name: signer.last_name.clone(),
            company: signer.company.clone(),
            title: signer.title.clone(),
            delivery: Some(api::Delivery {
                email: signer.deliver_signed_documents_by_email,
            }),
        }],
        attachment_requirements: signer
            .attachment_requirements
            .iter()
            .map(requirement_to_api)
            .collect(),
    }
}

/// Roles without a signer (placeholders) have no domain counterpart.
pub(crate) fn signer_from_role(role: &api::Role) -> Option<Signer> {
    let signer = role.signers.first()?;

    Some(Signer {
        email: signer.email.clone(),
        first_name: signer.first_name.clone(),
        last_name: signer.last_name.clone(),
        company: signer.company.clone(),
        title: signer.title.clone(),
        custom_id: role.id.clone().or_else(|| signer.id.clone()),
        signing_order: role.index,
        message: role.email_message.as_ref().map(|m| m.content.clone()),
        can_change_signer: role.reassign.unwrap_or(false),
        deliver_signed_documents_by_email: signer.delivery.as_ref().is_some_and(|d| d.email),
        attachment_requirements: role
            .attachment_requirements
            .iter()
            .map(requirement_from_api)
            .collect(),
    })
}

/// Email of the signer behind a role reference, or the reference itself when
/// no role with a signer matches.
pub(crate) fn email_for_role(roles: &[api::Role], reference: &str) -> String {
    roles
        .iter()
        .find(|r| r.id.as_deref() == Some(reference))
        .or_else(|| roles.iter().find(|r| r.name.as_deref() == Some(reference)))
        .and_then(|r| r.signers.first())
        .map(|s| s.email.clone())
        .unwrap_or_else(|| reference.to_string())
}

fn requirement_to_api(requirement: &AttachmentRequirement) -> api::AttachmentRequirement {
    api::AttachmentRequirement {
        id: requirement.id.clone(),
        name: requirement.name.clone(),
        description: requirement.description.clone(),
        required: requirement.required,
        status: requirement.status.as_ref().map(|s| s.as_str().to_string()),
        comment: requirement.sender_comment.clone(),
        files: requirement
            .files
            .iter()
            .map(|f| api::AttachmentFile {
                id: f.id.clone(),
                name: f.name.clone(),
                insert_date: f.insert_date,
            })
            .collect(),
    }
}

fn requirement_from_api(requirement: &api::AttachmentRequirement) -> AttachmentRequirement {
    AttachmentRequirement {
        id: requirement.id.clone(),
        name: requirement.name.clone(),
        description: requirement.description.clone(),
        required: requirement.required,
        status: requirement.status.as_deref().map(RequirementStatus::from),
        sender_comment: requirement.comment.clone(),
        files: requirement
            .files
            .iter()
            .map(|f| AttachmentFile {
                id: f.id.clone(),
                name: f.name.clone(),
                insert_date: f.insert_date,
            })
            .collect(),
    }
}
