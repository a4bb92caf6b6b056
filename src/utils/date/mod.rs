// Date utility functions
// Month arithmetic and display helpers shared by the grid and the text views

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Weekday};

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)).and_then(|next| next.pred_opt()) {
        Some(last) => last,
        // December of chrono's last year has no following month
        None => first.with_day(31).unwrap_or(first),
    }
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    last_of_month(date).day()
}

/// Monday-first weekday index where Monday is 1 and Sunday is 7.
pub fn monday_first_index(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// Number of days from `week_start` forward to the weekday of `date` (0..=6).
pub fn days_since_week_start(date: NaiveDate, week_start: Weekday) -> u32 {
    (date.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7
}

/// Convert a stored day number (0 = Sunday .. 6 = Saturday) into a weekday.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Move `date` by whole months, clamping the day to the target month's length.
///
/// Jan 31 + 1 month gives Feb 28 (or 29), never a date in March.
pub fn add_months_clamped(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let step = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    }
}

/// Move a timestamp by whole calendar days, keeping the time of day.
pub fn shift_days(timestamp: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    timestamp.checked_add_signed(Duration::try_days(days)?)
}

/// Short weekday names starting from `week_start`.
pub fn day_names(week_start: Weekday) -> [&'static str; 7] {
    let mut names = [""; 7];
    let mut day = week_start;
    for slot in names.iter_mut() {
        *slot = short_day_name(day);
        day = day.succ();
    }
    names
}

fn short_day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Month heading such as "June 2023".
pub fn month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
