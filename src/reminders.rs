//! Reminder schedules of packages.

use crate::error::Result;
use crate::model::PackageId;
use crate::rest::RestClient;
use crate::types::ReminderSchedule;

/// Client for reminder schedules.
///
/// Access via `client.reminders()`.
pub struct ReminderService {
    client: RestClient,
}

impl ReminderService {
    pub(crate) fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn path(package_id: &str) -> String {
        format!("/packages/{}/reminders", package_id)
    }

    /// Fetch the schedule of a package, `None` when it has none.
    pub async fn get_reminder_schedule(
        &self,
        package_id: &PackageId,
    ) -> Result<Option<ReminderSchedule>> {
        match self.client.get(&Self::path(package_id.as_str())).await {
            Ok(schedule) => Ok(Some(schedule)),
            Err(e) if e.status_code() == Some(404) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create_reminder_schedule(
        &self,
        schedule: &ReminderSchedule,
    ) -> Result<ReminderSchedule> {
        self.client
            .post(&Self::path(&schedule.package_id), schedule)
            .await
    }

    pub async fn update_reminder_schedule(
        &self,
        schedule: &ReminderSchedule,
    ) -> Result<ReminderSchedule> {
        self.client
            .put(&Self::path(&schedule.package_id), schedule)
            .await
    }

    /// Remove the schedule; no further reminders are sent.
    pub async fn clear_reminder_schedule(&self, package_id: &PackageId) -> Result<()> {
        self.client.delete(&Self::path(package_id.as_str())).await
    }
}
