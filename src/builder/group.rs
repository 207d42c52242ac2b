use super::require_non_empty;
use crate::error::Result;
use crate::types::{Group, GroupMember, GroupMemberType};

/// Builds a signing [`Group`].
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    name: String,
    email: Option<String>,
    email_members: bool,
    members: Vec<GroupMember>,
}

impl GroupBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            email_members: false,
            members: Vec::new(),
        }
    }

    /// Address notifications for the group are sent to.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Notify every member individually.
    pub fn with_individual_member_emailing(mut self) -> Self {
        self.email_members = true;
        self
    }

    pub fn with_member(mut self, email: impl Into<String>, member_type: GroupMemberType) -> Self {
        self.members.push(GroupMember {
            email: email.into(),
            first_name: None,
            last_name: None,
            member_type,
        });
        self
    }

    pub fn build(self) -> Result<Group> {
        require_non_empty("group name", &self.name)?;
        for member in &self.members {
            require_non_empty("member email", &member.email)?;
        }

        Ok(Group {
            id: None,
            name: self.name,
            email: self.email,
            email_members: self.email_members,
            members: self.members,
        })
    }
}
