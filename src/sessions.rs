//! Session tokens for the sender UI and the signing ceremony.

use crate::error::Result;
use crate::model::PackageId;
use crate::rest::RestClient;
use crate::types::SessionToken;

/// Client for session operations.
///
/// Access via `client.sessions()`.
pub struct SessionService {
    client: RestClient,
}

impl SessionService {
    pub(crate) fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Create a session for the API key's own user.
    pub async fn create_sender_session_token(&self) -> Result<SessionToken> {
        self.client.post_empty("/sessions").await
    }

    /// Create a session acting as one signer of a package.
    ///
    /// The token opens the signing ceremony and authorizes signer-scoped
    /// calls such as attachment uploads.
    pub async fn create_signer_session_token(
        &self,
        package_id: &PackageId,
        signer_id: &str,
    ) -> Result<SessionToken> {
        self.client
            .post_empty_with_query(
                "/sessions",
                &[("package", package_id.as_str()), ("signer", signer_id)],
            )
            .await
    }
}
