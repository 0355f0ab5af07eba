use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::console::constants::{CONFIRMATION_FOOTER, DATE_FORMAT};
use crate::error::BookingError;

const CODE_LEN: usize = 8;

/// A confirmed appointment. Only [`AppointmentBuilder::build`] creates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentRecord {
    identifier: String,
    email: String,
    office: String,
    date: NaiveDate,
    confirmation_code: String,
}

impl AppointmentRecord {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn office(&self) -> &str {
        &self.office
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn confirmation_code(&self) -> &str {
        &self.confirmation_code
    }

    /// Date as DD/MM/YYYY.
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// The confirmation block shown to the applicant.
    pub fn confirmation(&self) -> String {
        format!(
            "\nCita Confirmada:\n    CURP: {}\n    Correo: {}\n    Lugar: {}\n    Fecha: {}\n    Folio: {}\n\n{}\n",
            self.identifier,
            self.email,
            self.office,
            self.formatted_date(),
            self.confirmation_code,
            CONFIRMATION_FOOTER,
        )
    }
}

/// Collects the four applicant fields before an appointment is issued.
#[derive(Debug, Clone, Default)]
pub struct AppointmentBuilder {
    identifier: Option<String>,
    email: Option<String>,
    office: Option<String>,
    date: Option<NaiveDate>,
}

impl AppointmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn set_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn set_office(mut self, office: impl Into<String>) -> Self {
        self.office = Some(office.into());
        self
    }

    pub fn set_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Issues the record with a fresh confirmation code.
    pub fn build(&self) -> Result<AppointmentRecord, BookingError> {
        let identifier = self
            .identifier
            .clone()
            .ok_or(BookingError::MissingField("identifier"))?;
        let email = self
            .email
            .clone()
            .ok_or(BookingError::MissingField("email"))?;
        let office = self
            .office
            .clone()
            .ok_or(BookingError::MissingField("office"))?;
        let date = self.date.ok_or(BookingError::MissingField("date"))?;

        Ok(AppointmentRecord {
            identifier,
            email,
            office,
            date,
            confirmation_code: confirmation_code(),
        })
    }
}

/// First eight hex digits of a random v4 UUID, uppercased.
pub fn confirmation_code() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..CODE_LEN].to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn full_builder() -> AppointmentBuilder {
        AppointmentBuilder::new()
            .set_identifier("ABC123")
            .set_email("user@example.com")
            .set_office("SONORA")
            .set_date(june_15())
    }

    #[test]
    fn build_fills_every_field() {
        let record = full_builder().build().unwrap();

        assert_eq!(record.identifier(), "ABC123");
        assert_eq!(record.email(), "user@example.com");
        assert_eq!(record.office(), "SONORA");
        assert_eq!(record.date(), june_15());
        assert_eq!(record.formatted_date(), "15/06/2025");
    }

    #[test]
    fn build_reports_first_missing_field() {
        let err = AppointmentBuilder::new()
            .set_identifier("ABC123")
            .set_email("user@example.com")
            .build()
            .unwrap_err();
        assert_eq!(err, BookingError::MissingField("office"));

        let err = AppointmentBuilder::new().build().unwrap_err();
        assert_eq!(err, BookingError::MissingField("identifier"));
    }

    #[test]
    fn confirmation_code_is_eight_uppercase_hex_chars() {
        let code = confirmation_code();
        assert_eq!(code.len(), 8);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        );
    }

    #[test]
    fn each_build_issues_a_new_code() {
        let builder = full_builder();
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_ne!(first.confirmation_code(), second.confirmation_code());
    }

    #[test]
    fn confirmation_lists_all_fields() {
        let record = full_builder().build().unwrap();
        let text = record.confirmation();

        assert!(text.contains("CURP: ABC123"));
        assert!(text.contains("Correo: user@example.com"));
        assert!(text.contains("Lugar: SONORA"));
        assert!(text.contains("Fecha: 15/06/2025"));
        assert!(text.contains(&format!("Folio: {}", record.confirmation_code())));
        assert!(text.contains("formulario"));
    }

    #[test]
    fn record_serializes_date_as_iso() {
        let record = full_builder().build().unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2025-06-15");
        assert_eq!(json["office"], "SONORA");
    }
}
