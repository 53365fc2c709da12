use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::sex::Sex;
use crate::age::age_in_months;

/// A child whose growth is tracked, owned by a guardian account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Child {
    pub id: Uuid,
    pub guardian_id: String,
    pub name: String,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Child {
    pub fn new(
        guardian_id: impl Into<String>,
        name: impl Into<String>,
        sex: Sex,
        birth_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            guardian_id: guardian_id.into(),
            name: name.into(),
            sex,
            birth_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Whole months of age on `date`, or `None` if `date` precedes the birth date.
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        age_in_months(self.birth_date, date)
    }
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.len().max(10)))?;
        writeln!(f, "Sex:        {}", self.sex)?;
        writeln!(f, "Birth date: {}", self.birth_date)?;
        writeln!(f, "Guardian:   {}", self.guardian_id)?;
        Ok(())
    }
}
