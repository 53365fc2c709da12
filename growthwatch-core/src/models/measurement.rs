use serde::{Deserialize, Serialize};
use std::fmt;

/// Lookup row mapping a measurement type id to its display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeasurementType {
    pub id: i64,
    pub name: String,
}

impl MeasurementType {
    pub const HEIGHT: i64 = 1;
    pub const WEIGHT: i64 = 2;
    pub const HEAD_CIRCUMFERENCE: i64 = 3;

    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The types seeded into every fresh local store.
    pub fn builtin() -> Vec<MeasurementType> {
        vec![
            MeasurementType::new(Self::HEIGHT, "height"),
            MeasurementType::new(Self::WEIGHT, "weight"),
            MeasurementType::new(Self::HEAD_CIRCUMFERENCE, "head circumference"),
        ]
    }
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// One measurement on a growth record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GrowthDetail {
    pub measurement_type_id: i64,
    pub value: f64,
}

impl GrowthDetail {
    pub fn new(measurement_type_id: i64, value: f64) -> Self {
        Self {
            measurement_type_id,
            value,
        }
    }

    pub fn height(cm: f64) -> Self {
        Self::new(MeasurementType::HEIGHT, cm)
    }

    pub fn weight(kg: f64) -> Self {
        Self::new(MeasurementType::WEIGHT, kg)
    }

    pub fn head_circumference(cm: f64) -> Self {
        Self::new(MeasurementType::HEAD_CIRCUMFERENCE, cm)
    }

    pub fn is_height(&self) -> bool {
        self.measurement_type_id == MeasurementType::HEIGHT
    }
}
