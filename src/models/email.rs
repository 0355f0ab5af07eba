use serde::Serialize;

use crate::models::appointment::AppointmentRecord;

/// Payload an external mail relay would receive for a confirmed appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryRequest {
    pub to: String,
    pub subject: String,
    pub confirmation_code: String,
    pub appointment_date: String, // DD/MM/YYYY
    pub body: String,
}

impl DeliveryRequest {
    pub fn for_record(record: &AppointmentRecord) -> Self {
        DeliveryRequest {
            to: record.email().to_string(),
            subject: format!("Cita confirmada - Folio {}", record.confirmation_code()),
            confirmation_code: record.confirmation_code().to_string(),
            appointment_date: record.formatted_date(),
            body: record.confirmation(),
        }
    }
}
