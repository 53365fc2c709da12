use serde::{Deserialize, Serialize};

use super::sex::Sex;

/// Composite key of a reference standard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StandardKey {
    pub measurement_type_id: i64,
    pub age_months: u32,
    pub sex: Sex,
}

impl StandardKey {
    pub fn new(measurement_type_id: i64, age_months: u32, sex: Sex) -> Self {
        Self {
            measurement_type_id,
            age_months,
            sex,
        }
    }
}

/// WHO-derived expected value and Z-score scale for one (type, age, sex).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReferenceStandard {
    pub measurement_type_id: i64,
    pub age_months: u32,
    pub sex: Sex,
    /// Median value for the population.
    pub expected: f64,
    /// One standard deviation, in the measurement's unit.
    pub scale: f64,
}

impl ReferenceStandard {
    pub fn new(
        measurement_type_id: i64,
        age_months: u32,
        sex: Sex,
        expected: f64,
        scale: f64,
    ) -> Self {
        Self {
            measurement_type_id,
            age_months,
            sex,
            expected,
            scale,
        }
    }

    pub fn key(&self) -> StandardKey {
        StandardKey::new(self.measurement_type_id, self.age_months, self.sex)
    }
}
