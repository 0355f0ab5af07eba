use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::BookingError;
use crate::handlers::action::BookingAction;
use crate::models::appointment::{AppointmentBuilder, AppointmentRecord};
use crate::models::offices::{OfficeDirectory, normalize_office};
use crate::notify::NotificationSink;
use crate::validation::{is_known_office, is_nonempty, is_valid_email};

pub const DEFAULT_BOOKING_YEAR: i32 = 2025;

/// Single entry point for booking an appointment.
pub struct BookingService {
    offices: OfficeDirectory,
    year: i32,
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl BookingService {
    pub fn new(offices: OfficeDirectory, year: i32) -> Self {
        BookingService {
            offices,
            year,
            sinks: Vec::new(),
        }
    }

    /// Appends a sink. Registering the same sink twice notifies it twice.
    pub fn register_sink(&mut self, sink: impl NotificationSink + 'static) {
        debug!(sink = sink.name(), "registering sink");
        self.sinks.push(Box::new(sink));
    }

    pub fn register_boxed_sink(&mut self, sink: Box<dyn NotificationSink>) {
        debug!(sink = sink.name(), "registering sink");
        self.sinks.push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub fn offices(&self) -> &OfficeDirectory {
        &self.offices
    }

    /// Validates the request, issues the appointment and notifies every sink.
    /// On error nothing is built and no sink hears about it.
    pub fn request_appointment(
        &self,
        identifier: &str,
        email: &str,
        office: &str,
        day: i64,
        month: i64,
    ) -> Result<AppointmentRecord, BookingError> {
        info!(office, day, month, year = self.year, "appointment requested");

        let date = self.appointment_date(day, month)?;

        if !is_nonempty(identifier) {
            return Err(BookingError::EmptyField { field: "CURP" });
        }
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(BookingError::InvalidEmail(email.to_string()));
        }
        if !is_known_office(&self.offices, office) {
            return Err(BookingError::UnknownOffice(office.trim().to_string()));
        }

        let builder = AppointmentBuilder::new()
            .set_identifier(identifier.trim().to_uppercase())
            .set_email(email)
            .set_office(normalize_office(office))
            .set_date(date);

        BookingAction::new(builder, &self.sinks).execute()
    }

    /// Calendar date for `day`/`month` in the booking year.
    pub fn appointment_date(&self, day: i64, month: i64) -> Result<NaiveDate, BookingError> {
        let invalid = BookingError::InvalidDate {
            year: self.year,
            month,
            day,
        };
        let (Ok(d), Ok(m)) = (u32::try_from(day), u32::try_from(month)) else {
            return Err(invalid);
        };
        NaiveDate::from_ymd_opt(self.year, m, d).ok_or(invalid)
    }
}

impl Default for BookingService {
    fn default() -> Self {
        Self::new(OfficeDirectory::sonora(), DEFAULT_BOOKING_YEAR)
    }
}
