use tracing::{error, info};

use crate::error::BookingError;
use crate::models::appointment::{AppointmentBuilder, AppointmentRecord};
use crate::notify::NotificationSink;

/// One pending booking: a filled builder plus the sinks to tell about it.
pub struct BookingAction<'a> {
    builder: AppointmentBuilder,
    sinks: &'a [Box<dyn NotificationSink>],
}

impl<'a> BookingAction<'a> {
    pub fn new(builder: AppointmentBuilder, sinks: &'a [Box<dyn NotificationSink>]) -> Self {
        BookingAction { builder, sinks }
    }

    /// Builds exactly one record and notifies every sink in registration order.
    /// A failing sink is logged and skipped; the rest are still notified.
    pub fn execute(&self) -> Result<AppointmentRecord, BookingError> {
        let record = self.builder.build()?;
        info!(
            confirmation_code = record.confirmation_code(),
            office = record.office(),
            "appointment built"
        );

        for sink in self.sinks {
            match sink.notify(&record) {
                Ok(()) => info!(sink = sink.name(), "sink notified"),
                Err(e) => error!(sink = sink.name(), "failed to notify sink: {:?}", e),
            }
        }

        Ok(record)
    }
}
