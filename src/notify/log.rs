use anyhow::Result;
use tracing::info;

use super::NotificationSink;
use crate::models::appointment::AppointmentRecord;

/// Records confirmations as structured log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    fn notify(&self, record: &AppointmentRecord) -> Result<()> {
        info!(
            identifier = record.identifier(),
            email = record.email(),
            office = record.office(),
            date = %record.formatted_date(),
            confirmation_code = record.confirmation_code(),
            "appointment confirmed"
        );
        Ok(())
    }
}
