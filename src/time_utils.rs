// SPDX-License-Identifier: MIT

//! Shared helpers for calendar-date handling.

use chrono::{DateTime, Months, NaiveDate, NaiveTime, Utc};

/// First instant of a calendar date, in UTC.
///
/// Date-valued filters (`finished/{date}`) compare timestamps against this
/// boundary, so a training ending at any time during `date` itself counts
/// as "after" it only once the clock passes midnight.
pub fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Latest birthdate a person can have while being at least `age` years old
/// today. Saturates at the calendar boundaries for absurd ages.
pub fn birthdate_cutoff_for_age(age: u32) -> NaiveDate {
    let today = Utc::now().date_naive();
    today
        .checked_sub_months(Months::new(age.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN)
}
