use std::cell::RefCell;

use anyhow::{Context, Result};
use tracing::debug;

use super::NotificationSink;
use crate::models::{appointment::AppointmentRecord, email::DeliveryRequest};

/// Stand-in for a mail relay. Requests are queued in memory, never sent.
#[derive(Debug, Default)]
pub struct OutboxSink {
    pending: RefCell<Vec<DeliveryRequest>>,
}

impl OutboxSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Vec<DeliveryRequest> {
        self.pending.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl NotificationSink for OutboxSink {
    fn name(&self) -> &'static str {
        "outbox"
    }

    fn notify(&self, record: &AppointmentRecord) -> Result<()> {
        let request = DeliveryRequest::for_record(record);
        let payload =
            serde_json::to_string(&request).context("failed to encode delivery request")?;
        debug!(to = %request.to, %payload, "queued delivery request");

        self.pending.borrow_mut().push(request);
        Ok(())
    }
}
