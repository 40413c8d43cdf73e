//! Age derived from a date of birth.

use chrono::{Datelike, NaiveDate};

/// Returns the age in whole years of someone born on `birth`, as of `as_of`.
///
/// The year difference is reduced by one when `as_of` falls on an earlier day
/// of its year than `birth` did in its own. The comparison is by day-of-year,
/// not by month and day, so around 29 February a leap year and a common year
/// disagree by one day on when the birthday has passed.
pub fn age_on(birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - birth.year();
    if as_of.ordinal() < birth.ordinal() {
        age -= 1;
    }
    age
}
