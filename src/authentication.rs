//! Authentication tokens.

use crate::error::Result;
use crate::model::PackageId;
use crate::rest::RestClient;
use crate::types::AuthenticationToken;
use serde::Serialize;

/// Client for authentication token operations.
///
/// Access via `client.authentication()`.
pub struct AuthenticationService {
    client: RestClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignerTokenRequest<'a> {
    package_id: &'a str,
    signer_id: &'a str,
}

impl AuthenticationService {
    pub(crate) fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Create a single-use token authenticating the API key's user.
    pub async fn create_authentication_token(&self) -> Result<AuthenticationToken> {
        self.client.post_empty("/authenticationTokens").await
    }

    /// Create a single-use token authenticating one signer of a package.
    pub async fn create_signer_authentication_token(
        &self,
        package_id: &PackageId,
        signer_id: &str,
    ) -> Result<AuthenticationToken> {
        self.client
            .post(
                "/signerAuthenticationTokens",
                &SignerTokenRequest {
                    package_id: package_id.as_str(),
                    signer_id,
                },
            )
            .await
    }
}
