//! Height-for-age classification against reference standards.
//!
//! The classifier is pure: it reads a child, one growth record and a set of
//! reference standards, and returns a status label or nothing. Persisting the
//! result is the caller's job.

use std::collections::HashMap;

use crate::age::age_in_months;
use crate::models::{
    Child, GrowthRecord, MeasurementType, ReferenceStandard, StandardKey, StatusLabel,
};

/// Deviations strictly below this are severely short.
pub const SEVERELY_SHORT_BELOW: f64 = -3.0;
/// Deviations strictly below this (and not severely short) are short.
pub const SHORT_BELOW: f64 = -2.0;

/// Source of reference standards keyed by (type, age, sex).
pub trait StandardLookup {
    fn find(&self, key: &StandardKey) -> Option<&ReferenceStandard>;
}

impl StandardLookup for [ReferenceStandard] {
    fn find(&self, key: &StandardKey) -> Option<&ReferenceStandard> {
        self.iter().find(|s| s.key() == *key)
    }
}

/// In-memory reference table.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    standards: HashMap<StandardKey, ReferenceStandard>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a standard, replacing any existing row with the same key.
    pub fn insert(&mut self, standard: ReferenceStandard) {
        self.standards.insert(standard.key(), standard);
    }

    pub fn len(&self) -> usize {
        self.standards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }
}

impl FromIterator<ReferenceStandard> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = ReferenceStandard>>(iter: I) -> Self {
        let mut table = Self::new();
        for standard in iter {
            table.insert(standard);
        }
        table
    }
}

impl StandardLookup for ReferenceTable {
    fn find(&self, key: &StandardKey) -> Option<&ReferenceStandard> {
        self.standards.get(key)
    }
}

/// Everything the classifier derived for one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub age_months: u32,
    pub deviation: f64,
    pub status: StatusLabel,
}

/// The key of the standard needed to classify `record`, if it has a height.
pub fn height_standard_key(child: &Child, record: &GrowthRecord) -> Option<StandardKey> {
    record.height()?;
    let age = age_in_months(child.birth_date, record.recorded_on)?;
    Some(StandardKey::new(MeasurementType::HEIGHT, age, child.sex))
}

/// Z-score of `value` against `standard`.
///
/// Returns `None` for a non-positive scale or a non-finite result; such a row
/// is as good as missing.
pub fn deviation(value: f64, standard: &ReferenceStandard) -> Option<f64> {
    if standard.scale.is_nan() || standard.scale <= 0.0 {
        return None;
    }
    let z = (value - standard.expected) / standard.scale;
    z.is_finite().then_some(z)
}

/// Maps a deviation onto the three ordered labels using strict comparisons.
pub fn status_for(deviation: f64) -> StatusLabel {
    if deviation < SEVERELY_SHORT_BELOW {
        StatusLabel::SeverelyShort
    } else if deviation < SHORT_BELOW {
        StatusLabel::Short
    } else {
        StatusLabel::Normal
    }
}

pub fn assess<L>(child: &Child, record: &GrowthRecord, standards: &L) -> Option<Assessment>
where
    L: StandardLookup + ?Sized,
{
    let height = record.height()?;
    let key = height_standard_key(child, record)?;
    let standard = standards.find(&key)?;
    let deviation = deviation(height, standard)?;

    Some(Assessment {
        age_months: key.age_months,
        deviation,
        status: status_for(deviation),
    })
}

/// Height-for-age status of `record`, or `None` when there is no height
/// detail or no matching standard.
pub fn classify<L>(child: &Child, record: &GrowthRecord, standards: &L) -> Option<StatusLabel>
where
    L: StandardLookup + ?Sized,
{
    assess(child, record, standards).map(|a| a.status)
}
