//! Account operations.
//!
//! This module provides the AccountService for listing and inviting the
//! senders of the account.

use crate::error::{EslError, Result};
use crate::rest::RestClient;
use crate::types::{AccountMember, Page, Sender};

/// Client for account operations.
///
/// Access via `client.account()`.
pub struct AccountService {
    client: RestClient,
}

impl AccountService {
    pub(crate) fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// List senders of the account.
    ///
    /// `from` and `to` are 1-based, inclusive item positions.
    pub async fn get_senders(&self, from: u32, to: u32) -> Result<Page<Sender>> {
        self.client
            .get_with_query("/account/senders", &[("from", from), ("to", to)])
            .await
    }

    /// Invite a new sender into the account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use esignlive::{EslClient, types::AccountMember};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = EslClient::new("api_key", "https://sandbox.esignlive.com/api")?;
    ///
    ///     let sender = client.account().invite_user(&AccountMember {
    ///         email: "new.sender@example.com".to_string(),
    ///         first_name: Some("Ada".to_string()),
    ///         ..Default::default()
    ///     }).await?;
    ///     println!("Invited {}", sender.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn invite_user(&self, member: &AccountMember) -> Result<Sender> {
        if !member.email.contains('@') {
            return Err(EslError::validation("email", "must be an email address"));
        }
        self.client.post("/account/senders", member).await
    }
}
