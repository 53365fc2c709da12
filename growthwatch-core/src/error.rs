//! Validation errors raised before anything touches a store.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("measurement {measurement_type_id} must be a positive number, got {value}")]
    InvalidMeasurement {
        measurement_type_id: i64,
        value: f64,
    },
    #[error("measurement type {0} appears more than once in the record")]
    DuplicateMeasurement(i64),
    #[error("unknown measurement type {0}")]
    UnknownMeasurementType(i64),
    #[error("child name must not be empty")]
    EmptyName,
    #[error("date {date} is before the birth date {birth_date}")]
    BeforeBirth {
        date: chrono::NaiveDate,
        birth_date: chrono::NaiveDate,
    },
}
