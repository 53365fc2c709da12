mod child;
mod growth_record;
mod measurement;
mod profile;
mod reference_standard;
mod sex;
mod status;

pub use child::Child;
pub use growth_record::GrowthRecord;
pub use measurement::{GrowthDetail, MeasurementType};
pub use profile::UserProfile;
pub use reference_standard::{ReferenceStandard, StandardKey};
pub use sex::Sex;
pub use status::StatusLabel;
