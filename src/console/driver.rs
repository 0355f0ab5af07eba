use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use super::constants::*;
use crate::error::BookingError;
use crate::handlers::booking::BookingService;
use crate::models::appointment::AppointmentRecord;
use crate::models::offices::{OfficeDirectory, normalize_office};
use crate::validation::{is_known_office, is_nonempty, is_valid_email};

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverOutcome {
    Booked(AppointmentRecord),
    /// Reported to the user; nothing was booked.
    Aborted(BookingError),
    /// Input ended before the booking could be requested.
    InputClosed,
}

// each state carries the fields collected so far
enum State {
    AwaitIdentifier,
    AwaitEmail {
        identifier: String,
    },
    AwaitOffice {
        identifier: String,
        email: String,
    },
    AwaitDate {
        identifier: String,
        email: String,
        office: String,
    },
}

/// Interactive booking session over any line reader and writer.
pub struct Driver<'a, R, W> {
    service: &'a BookingService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Driver<'a, R, W> {
    pub fn new(service: &'a BookingService, input: R, output: W) -> Self {
        Driver {
            service,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs one session: banner, prompts until each field is valid, one booking attempt.
    pub fn run(&mut self) -> io::Result<DriverOutcome> {
        self.print_banner()?;

        let mut state = State::AwaitIdentifier;
        loop {
            state = match state {
                State::AwaitIdentifier => {
                    let Some(line) = self.prompt(PROMPT_IDENTIFIER)? else {
                        return Ok(DriverOutcome::InputClosed);
                    };
                    match check_identifier(&line) {
                        Ok(identifier) => State::AwaitEmail { identifier },
                        Err(e) if e.is_recoverable() => {
                            self.reject(&e)?;
                            State::AwaitIdentifier
                        }
                        Err(e) => return self.abort(e),
                    }
                }
                State::AwaitEmail { identifier } => {
                    let Some(line) = self.prompt(PROMPT_EMAIL)? else {
                        return Ok(DriverOutcome::InputClosed);
                    };
                    match check_email(&line) {
                        Ok(email) => State::AwaitOffice { identifier, email },
                        Err(e) if e.is_recoverable() => {
                            self.reject(&e)?;
                            State::AwaitEmail { identifier }
                        }
                        Err(e) => return self.abort(e),
                    }
                }
                State::AwaitOffice { identifier, email } => {
                    let Some(line) = self.prompt(PROMPT_OFFICE)? else {
                        return Ok(DriverOutcome::InputClosed);
                    };
                    match check_office(self.service.offices(), &line) {
                        Ok(office) => State::AwaitDate {
                            identifier,
                            email,
                            office,
                        },
                        Err(e) if e.is_recoverable() => {
                            self.reject(&e)?;
                            State::AwaitOffice { identifier, email }
                        }
                        Err(e) => return self.abort(e),
                    }
                }
                State::AwaitDate {
                    identifier,
                    email,
                    office,
                } => return self.book(&identifier, &email, &office),
            };
        }
    }

    // day and month get a single attempt each
    fn book(&mut self, identifier: &str, email: &str, office: &str) -> io::Result<DriverOutcome> {
        let Some(day) = self.prompt(PROMPT_DAY)? else {
            return Ok(DriverOutcome::InputClosed);
        };
        let day = match parse_number("day", &day) {
            Ok(day) => day,
            Err(e) => return self.abort(e),
        };

        let Some(month) = self.prompt(PROMPT_MONTH)? else {
            return Ok(DriverOutcome::InputClosed);
        };
        let month = match parse_number("month", &month) {
            Ok(month) => month,
            Err(e) => return self.abort(e),
        };

        match self
            .service
            .request_appointment(identifier, email, office, day, month)
        {
            Ok(record) => Ok(DriverOutcome::Booked(record)),
            Err(e) => self.abort(e),
        }
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output, "{WELCOME_BANNER}")?;
        writeln!(self.output, "{OFFICES_HEADER}")?;
        for office in self.service.offices().names() {
            writeln!(self.output, "{office}")?;
        }
        writeln!(self.output, "\n")
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("input closed before booking finished");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    fn reject(&mut self, error: &BookingError) -> io::Result<()> {
        debug!("rejected input: {}", error);
        self.say(message_for(error))
    }

    fn abort(&mut self, error: BookingError) -> io::Result<DriverOutcome> {
        warn!("booking aborted: {}", error);
        self.say(message_for(&error))?;
        Ok(DriverOutcome::Aborted(error))
    }
}

/// Text shown to the applicant for each kind of rejection.
pub fn message_for(error: &BookingError) -> &'static str {
    match error {
        BookingError::EmptyField { .. } => MSG_EMPTY_IDENTIFIER,
        BookingError::InvalidEmail(_) => MSG_INVALID_EMAIL,
        BookingError::UnknownOffice(_) => MSG_UNKNOWN_OFFICE,
        BookingError::NonIntegerInput { .. } => MSG_NON_INTEGER,
        BookingError::InvalidDate { .. } => MSG_INVALID_DATE,
        BookingError::MissingField(_) => MSG_BOOKING_FAILED,
    }
}

fn check_identifier(line: &str) -> Result<String, BookingError> {
    let identifier = line.trim().to_uppercase();
    if is_nonempty(&identifier) {
        Ok(identifier)
    } else {
        Err(BookingError::EmptyField { field: "CURP" })
    }
}

fn check_email(line: &str) -> Result<String, BookingError> {
    let email = line.trim();
    if is_valid_email(email) {
        Ok(email.to_string())
    } else {
        Err(BookingError::InvalidEmail(email.to_string()))
    }
}

fn check_office(offices: &OfficeDirectory, line: &str) -> Result<String, BookingError> {
    let office = normalize_office(line);
    if is_known_office(offices, &office) {
        Ok(office)
    } else {
        Err(BookingError::UnknownOffice(office))
    }
}

/// Any whole number, sign allowed; range is checked when the date is built.
pub fn parse_number(field: &'static str, value: &str) -> Result<i64, BookingError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| BookingError::NonIntegerInput {
            field,
            value: value.trim().to_string(),
        })
}
