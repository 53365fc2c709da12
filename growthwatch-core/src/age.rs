//! Calendar arithmetic for ages.

use chrono::{Datelike, NaiveDate};

/// Whole months elapsed between `birth` and `on`, counting calendar months.
///
/// A month is complete once the day-of-month of `on` reaches the day-of-month of
/// `birth`, so 2023-01-15 to 2023-03-14 is one month and 2023-03-15 is two.
/// When `birth` falls on a day the target month lacks (the 31st, say), the month
/// completes on the first day of the following month.
///
/// Returns `None` when `on` precedes `birth`.
pub fn age_in_months(birth: NaiveDate, on: NaiveDate) -> Option<u32> {
    if on < birth {
        return None;
    }

    let mut months = (on.year() - birth.year()) * 12 + on.month() as i32 - birth.month() as i32;
    if on.day() < birth.day() {
        months -= 1;
    }

    u32::try_from(months).ok()
}
