use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::measurement::{GrowthDetail, MeasurementType};
use super::status::StatusLabel;
use crate::error::ValidationError;

/// A dated set of measurements for one child.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthRecord {
    pub id: Uuid,
    pub child_id: Uuid,
    pub recorded_on: NaiveDate,
    pub status: Option<StatusLabel>,
    pub details: Vec<GrowthDetail>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GrowthRecord {
    pub fn new(child_id: Uuid, recorded_on: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            child_id,
            recorded_on,
            status: None,
            details: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Adds a detail, replacing any existing detail of the same type.
    pub fn with_detail(mut self, detail: GrowthDetail) -> Self {
        self.set_detail(detail);
        self
    }

    pub fn with_details(mut self, details: impl IntoIterator<Item = GrowthDetail>) -> Self {
        for detail in details {
            self.set_detail(detail);
        }
        self
    }

    pub fn set_detail(&mut self, detail: GrowthDetail) {
        match self
            .details
            .iter_mut()
            .find(|d| d.measurement_type_id == detail.measurement_type_id)
        {
            Some(existing) => existing.value = detail.value,
            None => self.details.push(detail),
        }
    }

    pub fn remove_detail(&mut self, measurement_type_id: i64) -> Option<GrowthDetail> {
        let pos = self
            .details
            .iter()
            .position(|d| d.measurement_type_id == measurement_type_id)?;
        Some(self.details.remove(pos))
    }

    pub fn detail(&self, measurement_type_id: i64) -> Option<&GrowthDetail> {
        self.details
            .iter()
            .find(|d| d.measurement_type_id == measurement_type_id)
    }

    pub fn height(&self) -> Option<f64> {
        self.detail(MeasurementType::HEIGHT).map(|d| d.value)
    }

    pub fn weight(&self) -> Option<f64> {
        self.detail(MeasurementType::WEIGHT).map(|d| d.value)
    }

    /// Checks that every measurement is finite and positive and that no type repeats.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (i, detail) in self.details.iter().enumerate() {
            if !detail.value.is_finite() || detail.value <= 0.0 {
                return Err(ValidationError::InvalidMeasurement {
                    measurement_type_id: detail.measurement_type_id,
                    value: detail.value,
                });
            }
            if self.details[..i]
                .iter()
                .any(|d| d.measurement_type_id == detail.measurement_type_id)
            {
                return Err(ValidationError::DuplicateMeasurement(
                    detail.measurement_type_id,
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Display for GrowthRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Growth record: {}", self.recorded_on)?;
        writeln!(f, "{}", "=".repeat(25))?;
        match self.status {
            Some(status) => writeln!(f, "Status: {}", status)?,
            None => writeln!(f, "Status: unavailable")?,
        }
        if let Some(height) = self.height() {
            writeln!(f, "Height: {} cm", height)?;
        }
        if let Some(weight) = self.weight() {
            writeln!(f, "Weight: {} kg", weight)?;
        }
        if let Some(head) = self.detail(MeasurementType::HEAD_CIRCUMFERENCE) {
            writeln!(f, "Head circumference: {} cm", head.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> GrowthRecord {
        GrowthRecord::new(Uuid::new_v4(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_with_detail_replaces_same_type() {
        let record = record()
            .with_detail(GrowthDetail::height(70.0))
            .with_detail(GrowthDetail::weight(8.0))
            .with_detail(GrowthDetail::height(71.5));

        assert_eq!(record.details.len(), 2);
        assert_eq!(record.height(), Some(71.5));
        assert_eq!(record.weight(), Some(8.0));
    }

    #[test]
    fn test_remove_detail() {
        let mut record = record().with_details([GrowthDetail::height(70.0)]);

        assert!(record.remove_detail(MeasurementType::HEIGHT).is_some());
        assert!(record.height().is_none());
        assert!(record.remove_detail(MeasurementType::HEIGHT).is_none());
    }

    #[test]
    fn test_validate_rejects_non_positive_values() {
        let mut record = record();
        record.details.push(GrowthDetail::weight(0.0));

        let err = record.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidMeasurement { .. }));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let mut record = record();
        record.details.push(GrowthDetail::height(f64::NAN));

        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_types() {
        let mut record = record();
        record.details.push(GrowthDetail::height(70.0));
        record.details.push(GrowthDetail::height(72.0));

        assert_eq!(
            record.validate().unwrap_err(),
            ValidationError::DuplicateMeasurement(MeasurementType::HEIGHT)
        );
    }

    #[test]
    fn test_display_without_status() {
        let record = record().with_detail(GrowthDetail::height(70.0));
        let output = format!("{}", record);

        assert!(output.contains("2024-06-01"));
        assert!(output.contains("Status: unavailable"));
        assert!(output.contains("Height: 70 cm"));
    }
}
