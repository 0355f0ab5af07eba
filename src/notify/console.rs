use std::cell::RefCell;
use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};

use super::NotificationSink;
use crate::models::appointment::AppointmentRecord;

/// Simulated email: prints the confirmation block to a terminal.
pub struct ConsoleEmailSink<W: Write = Stdout> {
    out: RefCell<W>,
}

impl ConsoleEmailSink<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleEmailSink<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleEmailSink<W> {
    pub fn with_writer(out: W) -> Self {
        ConsoleEmailSink {
            out: RefCell::new(out),
        }
    }
}

impl ConsoleEmailSink<Vec<u8>> {
    /// Everything written so far, for writers backed by memory.
    pub fn written(&self) -> String {
        String::from_utf8_lossy(&self.out.borrow()).into_owned()
    }
}

impl<W: Write> NotificationSink for ConsoleEmailSink<W> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn notify(&self, record: &AppointmentRecord) -> Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(
            out,
            "\nEnviando correo a {} con los datos de la cita...",
            record.email()
        )
        .context("failed to print appointment confirmation")?;
        writeln!(out, "{}", record.confirmation())
            .context("failed to print appointment confirmation")?;
        out.flush()?;
        Ok(())
    }
}
