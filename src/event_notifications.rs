//! Callback registration for package events.

use crate::error::{EslError, Result};
use crate::rest::RestClient;
use crate::types::EventNotificationConfig;

/// Client for event notification settings.
///
/// Access via `client.event_notifications()`.
pub struct EventNotificationService {
    client: RestClient,
}

impl EventNotificationService {
    pub(crate) fn new(client: RestClient) -> Self {
        Self { client }
    }

    /// Current callback registration of the account.
    pub async fn get_event_notification_config(&self) -> Result<EventNotificationConfig> {
        self.client.get("/callback").await
    }

    /// Register a callback URL for the given events, replacing any previous
    /// registration.
    pub async fn register(&self, config: &EventNotificationConfig) -> Result<()> {
        if config.url.trim().is_empty() {
            return Err(EslError::validation("url", "must not be empty"));
        }
        self.client.post_no_content("/callback", config).await
    }
}
