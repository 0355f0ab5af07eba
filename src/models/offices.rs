use std::{fs::File, io::BufReader, path::Path};

use csv::ReaderBuilder;

use crate::error::ConfigError;

/// Passport offices of the SRE delegation in Sonora.
pub const SONORA_OFFICES: &[&str] = &[
    "SONORA",
    "OME AGUA PRIETA",
    "OME CD OBREGÓN",
    "OME GUAYMAS",
    "OME NOGALES",
    "OME NAVOJOA",
    "OME SAN LUIS RÍO COLORADO",
    "OME CABORCA",
    "OME PUERTO PEÑASCO",
];

const OFFICE_COLUMN: &str = "office";

/// Read-only set of offices that accept appointments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeDirectory {
    names: Vec<String>,
}

impl OfficeDirectory {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = normalize_office(name.as_ref());
            if !name.is_empty() && !unique.contains(&name) {
                unique.push(name);
            }
        }
        OfficeDirectory { names: unique }
    }

    pub fn sonora() -> Self {
        Self::new(SONORA_OFFICES.iter().copied())
    }

    /// Loads offices from a CSV file with an `office` header column.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let file = File::open(path).map_err(|e| ConfigError::OfficeFile {
            path: display.clone(),
            source: csv::Error::from(e),
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(BufReader::new(file));

        let column = reader
            .headers()
            .map_err(|source| ConfigError::OfficeFile {
                path: display.clone(),
                source,
            })?
            .iter()
            .position(|h| h.eq_ignore_ascii_case(OFFICE_COLUMN))
            .ok_or_else(|| ConfigError::MissingOfficeColumn(display.clone()))?;

        let mut names = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|source| ConfigError::OfficeFile {
                path: display.clone(),
                source,
            })?;
            if let Some(name) = record.get(column) {
                names.push(name.to_string());
            }
        }

        Ok(Self::new(names))
    }

    /// Membership after trim + uppercase normalization.
    pub fn contains(&self, name: &str) -> bool {
        let name = normalize_office(name);
        self.names.iter().any(|office| *office == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for OfficeDirectory {
    fn default() -> Self {
        Self::sonora()
    }
}

pub fn normalize_office(name: &str) -> String {
    name.trim().to_uppercase()
}
