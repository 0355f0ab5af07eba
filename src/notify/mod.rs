pub mod console;
pub mod log;
pub mod outbox;

use std::rc::Rc;
use std::str::FromStr;

use anyhow::Result;

use crate::error::ConfigError;
use crate::models::appointment::AppointmentRecord;

pub use self::console::ConsoleEmailSink;
pub use self::log::LogSink;
pub use self::outbox::OutboxSink;

/// Something that is told about every confirmed appointment.
pub trait NotificationSink {
    fn name(&self) -> &'static str;

    fn notify(&self, record: &AppointmentRecord) -> Result<()>;
}

impl<T: NotificationSink + ?Sized> NotificationSink for Rc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn notify(&self, record: &AppointmentRecord) -> Result<()> {
        (**self).notify(record)
    }
}

/// Sink variants selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// Prints the confirmation as the simulated email
    Console,
    /// Emits a structured tracing event
    Log,
    /// Queues a delivery request for an external mail relay
    Outbox,
}

impl SinkKind {
    pub fn build(self) -> Box<dyn NotificationSink> {
        match self {
            SinkKind::Console => Box::new(ConsoleEmailSink::new()),
            SinkKind::Log => Box::new(LogSink),
            SinkKind::Outbox => Box::new(OutboxSink::new()),
        }
    }

    /// Parses a comma separated list such as `console,log`.
    pub fn parse_list(value: &str) -> Result<Vec<SinkKind>, ConfigError> {
        let kinds = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(SinkKind::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        if kinds.is_empty() {
            return Err(ConfigError::EmptySinkList);
        }
        Ok(kinds)
    }
}

impl FromStr for SinkKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "console" | "email" => Ok(SinkKind::Console),
            "log" => Ok(SinkKind::Log),
            "outbox" => Ok(SinkKind::Outbox),
            other => Err(ConfigError::UnknownSink(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_keeps_order() {
        let kinds = SinkKind::parse_list(" log, Console ,outbox").unwrap();
        assert_eq!(kinds, vec![SinkKind::Log, SinkKind::Console, SinkKind::Outbox]);
    }

    #[test]
    fn parse_list_rejects_unknown_and_empty() {
        assert!(matches!(
            SinkKind::parse_list("console,sms"),
            Err(ConfigError::UnknownSink(name)) if name == "sms"
        ));
        assert!(matches!(
            SinkKind::parse_list(" , "),
            Err(ConfigError::EmptySinkList)
        ));
    }

    #[test]
    fn built_sinks_report_their_kind() {
        assert_eq!(SinkKind::Console.build().name(), "console");
        assert_eq!(SinkKind::Log.build().name(), "log");
        assert_eq!(SinkKind::Outbox.build().name(), "outbox");
    }
}
