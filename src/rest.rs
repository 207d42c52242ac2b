//! Authenticated HTTP transport shared by every service client.

use crate::error::{EslError, Result};
use reqwest::{header, multipart, Client as HttpClient, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cookie carrying a signer session for signer-scoped calls.
const SESSION_COOKIE: &str = "ESIGNLIVE_SESSION_ID";

/// Low-level REST client bound to one API key and base URL.
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Clone)]
pub struct RestClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl RestClient {
    pub(crate) fn new(
        api_key: String,
        base_url: String,
        timeout: Duration,
        user_agent: String,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(header::AUTHORIZATION, format!("Basic {}", self.api_key))
            .header(header::ACCEPT, "application/json")
    }

    fn with_session(request: RequestBuilder, session: Option<&str>) -> RequestBuilder {
        match session {
            Some(token) => request.header(header::COOKIE, format!("{}={}", SESSION_COOKIE, token)),
            None => request,
        }
    }

    /// Make an authenticated GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(method = "GET", path, "sending request");
        let response = self.send(self.http.get(self.url(path))).await?;
        decode(response).await
    }

    /// Make an authenticated GET request with URL-encoded query parameters.
    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        tracing::debug!(method = "GET", path, "sending request");
        let response = self.send(self.http.get(self.url(path)).query(query)).await?;
        decode(response).await
    }

    /// Make an authenticated GET request and return the raw body.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        tracing::debug!(method = "GET", path, "downloading");
        let response = self.send(self.http.get(self.url(path))).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!(method = "POST", path, "sending request");
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        decode(response).await
    }

    /// Make an authenticated POST request without a body.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(method = "POST", path, "sending request");
        let response = self.send(self.http.post(self.url(path))).await?;
        decode(response).await
    }

    /// Make an authenticated POST request with query parameters and no body.
    pub(crate) async fn post_empty_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        tracing::debug!(method = "POST", path, "sending request");
        let response = self.send(self.http.post(self.url(path)).query(query)).await?;
        decode(response).await
    }

    /// Make an authenticated POST request, discarding the response body.
    pub(crate) async fn post_no_content<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(method = "POST", path, "sending request");
        self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(())
    }

    /// Make an authenticated PUT request with a JSON body.
    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!(method = "PUT", path, "sending request");
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        decode(response).await
    }

    /// Make an authenticated PUT request, discarding the response body.
    pub(crate) async fn put_no_content<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(method = "PUT", path, "sending request");
        self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(())
    }

    /// Make an authenticated DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.delete_as(path, None).await
    }

    /// Make an authenticated DELETE request, optionally inside a signer session.
    pub(crate) async fn delete_as(&self, path: &str, session: Option<&str>) -> Result<()> {
        tracing::debug!(method = "DELETE", path, signer_session = session.is_some(), "sending request");
        let request = Self::with_session(self.http.delete(self.url(path)), session);
        self.send(request).await?;
        Ok(())
    }

    /// Make an authenticated multipart POST, optionally inside a signer session.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
        session: Option<&str>,
    ) -> Result<T> {
        tracing::debug!(method = "POST", path, signer_session = session.is_some(), "uploading");
        let request = Self::with_session(self.http.post(self.url(path)).multipart(form), session);
        let response = self.send(request).await?;
        decode(response).await
    }

    /// Make an authenticated multipart POST, discarding the response body.
    pub(crate) async fn post_multipart_no_content(
        &self,
        path: &str,
        form: multipart::Form,
        session: Option<&str>,
    ) -> Result<()> {
        tracing::debug!(method = "POST", path, signer_session = session.is_some(), "uploading");
        let request = Self::with_session(self.http.post(self.url(path)).multipart(form), session);
        self.send(request).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorized(request).send().await?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(parse_error(response).await)
        }
    }
}

/// Decodes a JSON body. Malformed payloads surface as [`EslError::Json`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

async fn parse_error(response: Response) -> EslError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let error = server_error(status, &body);

    if let EslError::Server { message_key, .. } = &error {
        tracing::warn!(status, message_key = %message_key, "request rejected by server");
    }
    error
}

/// Builds the typed server error for a non-2xx response body.
pub(crate) fn server_error(status: u16, body: &str) -> EslError {
    match serde_json::from_str::<ServerErrorResponse>(body) {
        Ok(e) => EslError::Server {
            message_key: e.message_key.unwrap_or_else(|| "unknown".to_string()),
            message: e.message.unwrap_or_default(),
            technical: e.technical,
            status_code: status,
        },
        Err(_) => EslError::Server {
            message_key: "unknown".to_string(),
            message: if body.is_empty() {
                "Unknown error".to_string()
            } else {
                body.to_string()
            },
            technical: None,
            status_code: status,
        },
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServerErrorResponse {
    message_key: Option<String>,
    message: Option<String>,
    technical: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_from_payload() {
        let body = r#"{
            "messageKey": "error.validation.attachments.delete.completedTransaction",
            "message": "Cannot delete attachment.",
            "technical": "Package is COMPLETED",
            "code": 400,
            "name": "Validation Error"
        }"#;

        match server_error(400, body) {
            EslError::Server {
                message_key,
                message,
                technical,
                status_code,
            } => {
                assert_eq!(
                    message_key,
                    "error.validation.attachments.delete.completedTransaction"
                );
                assert_eq!(message, "Cannot delete attachment.");
                assert_eq!(technical.as_deref(), Some("Package is COMPLETED"));
                assert_eq!(status_code, 400);
            }
            other => panic!("Expected Server error, got {other:?}"),
        }
    }

    #[test]
    fn test_server_error_from_garbage() {
        let err = server_error(502, "<html>Bad gateway</html>");
        assert_eq!(err.message_key(), Some("unknown"));
        assert_eq!(err.status_code(), Some(502));
    }

    #[test]
    fn test_server_error_from_empty_body() {
        match server_error(500, "") {
            EslError::Server { message, .. } => assert_eq!(message, "Unknown error"),
            other => panic!("Expected Server error, got {other:?}"),
        }
    }
}
