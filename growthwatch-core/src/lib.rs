//! growthwatch core library
//!
//! Growth models, calendar age arithmetic and height-for-age classification
//! shared by the growthwatch client.

pub mod age;
pub mod classifier;
pub mod error;
pub mod models;

pub use age::age_in_months;
pub use classifier::{assess, classify, Assessment, ReferenceTable, StandardLookup};
pub use error::ValidationError;
pub use models::{
    Child, GrowthDetail, GrowthRecord, MeasurementType, ReferenceStandard, Sex, StandardKey,
    StatusLabel, UserProfile,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
