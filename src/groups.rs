//! Group operations.
//!
//! This module provides the GroupService for signing groups and their
//! members.

use crate::error::Result;
use crate::rest::RestClient;
use crate::types::{Group, GroupMember, Page};

/// Client for group operations.
///
/// Access via `client.groups()`.
pub struct GroupService {
    client: RestClient,
}

impl GroupService {
    pub(crate) fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// List all groups of the account.
    pub async fn get_groups(&self) -> Result<Vec<Group>> {
        let page: Page<Group> = self.client.get("/groups").await?;
        Ok(page.results)
    }

    pub async fn get_group(&self, group_id: &str) -> Result<Group> {
        self.client.get(&format!("/groups/{}", group_id)).await
    }

    /// Create a group built with [`crate::builder::GroupBuilder`].
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::EslClient;
    /// use esignlive::builder::GroupBuilder;
    /// use esignlive::types::GroupMemberType;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///
    ///     let group = GroupBuilder::new("Legal")
    ///         .with_email("legal@example.com")
    ///         .with_member("ada@example.com", GroupMemberType::Manager)
    ///         .build()?;
    ///
    ///     let created = client.groups().create_group(&group).await?;
    ///     println!("Group id: {:?}", created.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_group(&self, group: &Group) -> Result<Group> {
        let created: Group = self.client.post("/groups", group).await?;
        tracing::debug!(group = %created.name, members = created.members.len(), "group created");
        Ok(created)
    }

    pub async fn delete_group(&self, group_id: &str) -> Result<()> {
        self.client.delete(&format!("/groups/{}", group_id)).await
    }

    /// Add a member to an existing group.
    pub async fn add_member(&self, group_id: &str, member: &GroupMember) -> Result<GroupMember> {
        self.client
            .post(&format!("/groups/{}/members", group_id), member)
            .await
    }
}
