use super::require_non_empty;
use crate::error::{EslError, Result};
use crate::model::PackageId;
use crate::types::ReminderSchedule;

/// Builds a [`ReminderSchedule`] for one package.
#[derive(Debug, Clone)]
pub struct ReminderScheduleBuilder {
    package_id: PackageId,
    days_until_first_reminder: u32,
    days_between_reminders: u32,
    number_of_repetitions: u32,
}

impl ReminderScheduleBuilder {
    pub fn for_package(package_id: PackageId) -> Self {
        Self {
            package_id,
            days_until_first_reminder: 1,
            days_between_reminders: 1,
            number_of_repetitions: 0,
        }
    }

    pub fn with_days_until_first_reminder(mut self, days: u32) -> Self {
        self.days_until_first_reminder = days;
        self
    }

    pub fn with_days_between_reminders(mut self, days: u32) -> Self {
        self.days_between_reminders = days;
        self
    }

    pub fn with_number_of_repetitions(mut self, repetitions: u32) -> Self {
        self.number_of_repetitions = repetitions;
        self
    }

    pub fn build(self) -> Result<ReminderSchedule> {
        require_non_empty("package id", self.package_id.as_str())?;
        if self.number_of_repetitions > 0 && self.days_between_reminders == 0 {
            return Err(EslError::validation(
                "days between reminders",
                "must be at least 1 when reminders repeat",
            ));
        }

        Ok(ReminderSchedule {
            package_id: self.package_id.to_string(),
            days_until_first_reminder: self.days_until_first_reminder,
            days_between_reminders: self.days_between_reminders,
            number_of_repetitions: self.number_of_repetitions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_schedule() {
        let schedule = ReminderScheduleBuilder::for_package(PackageId::new("pkg-1"))
            .with_days_until_first_reminder(2)
            .with_days_between_reminders(3)
            .with_number_of_repetitions(4)
            .build()
            .unwrap();

        assert_eq!(schedule.package_id, "pkg-1");
        assert_eq!(schedule.days_between_reminders, 3);
    }

    #[test]
    fn test_zero_interval_with_repetitions_fails() {
        let err = ReminderScheduleBuilder::for_package(PackageId::new("pkg-1"))
            .with_days_between_reminders(0)
            .with_number_of_repetitions(2)
            .build()
            .unwrap_err();
        assert!(err.is_validation());
    }
}
