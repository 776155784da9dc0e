//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use deskclock_domain::DeskClockError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DeskClockError);

impl From<InfraError> for DeskClockError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DeskClockError> for InfraError {
    fn from(value: DeskClockError) -> Self {
        InfraError(value)
    }
}

trait IntoDeskClockError {
    fn into_deskclock(self) -> DeskClockError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → DeskClockError */
/* -------------------------------------------------------------------------- */

impl IntoDeskClockError for IoError {
    fn into_deskclock(self) -> DeskClockError {
        match self.kind() {
            ErrorKind::NotFound => DeskClockError::NotFound(self.to_string()),
            ErrorKind::PermissionDenied => DeskClockError::PermissionDenied(self.to_string()),
            ErrorKind::InvalidData => {
                DeskClockError::InvalidInput(format!("file is not valid UTF-8: {self}"))
            }
            _ => DeskClockError::CalendarSource(format!("I/O failure: {self}")),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_deskclock())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → DeskClockError */
/* -------------------------------------------------------------------------- */

impl IntoDeskClockError for JsonError {
    fn into_deskclock(self) -> DeskClockError {
        if self.is_io() {
            return DeskClockError::CalendarSource(format!("I/O failure while reading JSON: {self}"));
        }
        DeskClockError::InvalidInput(format!(
            "malformed JSON at line {} column {}: {self}",
            self.line(),
            self.column()
        ))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_deskclock())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → DeskClockError */
/* -------------------------------------------------------------------------- */

impl IntoDeskClockError for TomlError {
    fn into_deskclock(self) -> DeskClockError {
        DeskClockError::Config(format!("Invalid TOML format: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_deskclock())
    }
}
