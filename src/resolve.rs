//! Resolution of canonical date and time tokens to calendar values.
//!
//! The slot extractors emit canonical tokens ("tomorrow", "next friday",
//! "jan 15", "in 3 weeks", "10:30 pm"); this module turns them into
//! concrete [`NaiveDate`]s and clock times relative to an explicit
//! `today`, so callers control the anchor and tests are deterministic.
//! Weeks start on Monday.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ResolveError;

static IN_DAYS_RE: Lazy<Regex> = Lazy::new(|| re(r"^in\s+(\d+)\s+days?$"));
static IN_WEEKS_RE: Lazy<Regex> = Lazy::new(|| re(r"^in\s+(\d+)\s+weeks?$"));
static IN_MONTHS_RE: Lazy<Regex> = Lazy::new(|| re(r"^in\s+(\d+)\s+months?$"));
static THIS_WEEKDAY_RE: Lazy<Regex> =
    Lazy::new(|| re(r"^this\s+(monday|tuesday|wednesday|thursday|friday|saturday|sunday)$"));
static NEXT_WEEKDAY_RE: Lazy<Regex> =
    Lazy::new(|| re(r"^next\s+(monday|tuesday|wednesday|thursday|friday|saturday|sunday)$"));
static BARE_WEEKDAY_RE: Lazy<Regex> =
    Lazy::new(|| re(r"^(monday|tuesday|wednesday|thursday|friday|saturday|sunday)$"));
static MONTH_DAY_RE: Lazy<Regex> = Lazy::new(|| re(r"^([a-z]+)\s+(\d{1,2})$"));
static DAY_OF_MONTH_RE: Lazy<Regex> = Lazy::new(|| re(r"^(\d{1,2})\s+of\s+([a-z]+)$"));
static HOUR_ONLY_RE: Lazy<Regex> = Lazy::new(|| re(r"^\d{1,2}$"));
static HOUR_MINUTE_RE: Lazy<Regex> = Lazy::new(|| re(r"^(\d{1,2}):(\d{2})$"));
static AMPM_RE: Lazy<Regex> = Lazy::new(|| re(r"^(\d{1,2})(am|pm)$"));
static HOUR_H_RE: Lazy<Regex> = Lazy::new(|| re(r"^(\d{1,2})h$"));

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex compiles")
}

fn month_number(name: &str) -> Option<u32> {
    Some(match name {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    })
}

fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[(month as usize).saturating_sub(1).min(11)]
}

fn weekday_number(name: &str) -> Result<i64, ResolveError> {
    let day = match name {
        "monday" => 1,
        "tuesday" => 2,
        "wednesday" => 3,
        "thursday" => 4,
        "friday" => 5,
        "saturday" => 6,
        "sunday" => 7,
        _ => return Err(ResolveError::InvalidWeekday(name.to_string())),
    };
    Ok(day)
}

/// Next occurrence of a weekday. With `this_week` set, today itself
/// counts as a hit; otherwise the match is strictly in the future.
fn next_weekday(name: &str, today: NaiveDate, this_week: bool) -> Result<NaiveDate, ResolveError> {
    let target = weekday_number(name)?;
    let current = i64::from(today.weekday().number_from_monday());

    let mut days_ahead = target - current;
    if this_week {
        if days_ahead < 0 {
            days_ahead += 7;
        }
    } else if days_ahead <= 0 {
        days_ahead += 7;
    }

    Ok(today + chrono::Duration::days(days_ahead))
}

/// Coming Saturday. Today counts when it is Saturday and `this_weekend`
/// is set; a Sunday always rolls forward to the next Saturday.
fn weekend(today: NaiveDate, this_weekend: bool) -> NaiveDate {
    let current = i64::from(today.weekday().number_from_monday());
    let mut days_ahead = 6 - current;
    if this_weekend {
        if days_ahead < 0 {
            days_ahead += 7;
        }
    } else if days_ahead <= 0 {
        days_ahead += 7;
    }
    today + chrono::Duration::days(days_ahead)
}

fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn end_of_month(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    first + Months::new(1) - chrono::Duration::days(1)
}

/// Calendar date for `month`/`day`, rolled to next year when already
/// past. An out-of-range day (February 31st) is an error.
fn month_day(month: u32, day: u32, today: NaiveDate) -> Result<NaiveDate, ResolveError> {
    let this_year =
        NaiveDate::from_ymd_opt(today.year(), month, day).ok_or(ResolveError::InvalidDate {
            month: month_name(month).to_string(),
            day,
        })?;

    if this_year < today {
        NaiveDate::from_ymd_opt(today.year() + 1, month, day).ok_or(ResolveError::InvalidDate {
            month: month_name(month).to_string(),
            day,
        })
    } else {
        Ok(this_year)
    }
}

/// Resolve a canonical date token against an explicit anchor day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tasktalk::resolve::resolve_date;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
/// assert_eq!(
///     resolve_date("tomorrow", monday).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
/// );
/// assert_eq!(
///     resolve_date("next friday", monday).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
/// );
/// ```
pub fn resolve_date(token: &str, today: NaiveDate) -> Result<NaiveDate, ResolveError> {
    let clean = token.trim().to_lowercase();

    match clean.as_str() {
        "today" | "end of day" => return Ok(today),
        "tomorrow" => return Ok(today + chrono::Duration::days(1)),
        "yesterday" => return Ok(today - chrono::Duration::days(1)),
        "day after tomorrow" => return Ok(today + chrono::Duration::days(2)),
        "next week" => return Ok(start_of_week(today) + chrono::Duration::weeks(1)),
        "this week" => return Ok(start_of_week(today)),
        "next month" => {
            let next = today + Months::new(1);
            return Ok(next.with_day(1).unwrap_or(next));
        }
        // Weeks run Monday through Sunday.
        "end of week" => return Ok(start_of_week(today) + chrono::Duration::days(6)),
        "end of month" => return Ok(end_of_month(today)),
        "this weekend" => return Ok(weekend(today, true)),
        "next weekend" => return Ok(weekend(today, false)),
        _ => {}
    }

    if let Some(caps) = IN_DAYS_RE.captures(&clean) {
        let n: i64 = caps[1].parse().unwrap_or(0);
        return Ok(today + chrono::Duration::days(n));
    }
    if let Some(caps) = IN_WEEKS_RE.captures(&clean) {
        let n: i64 = caps[1].parse().unwrap_or(0);
        return Ok(today + chrono::Duration::weeks(n));
    }
    if let Some(caps) = IN_MONTHS_RE.captures(&clean) {
        let n: u32 = caps[1].parse().unwrap_or(0);
        return Ok(today + Months::new(n));
    }

    if let Some(caps) = THIS_WEEKDAY_RE.captures(&clean) {
        return next_weekday(&caps[1], today, true);
    }
    if let Some(caps) = NEXT_WEEKDAY_RE.captures(&clean) {
        return next_weekday(&caps[1], today, false);
    }
    if let Some(caps) = BARE_WEEKDAY_RE.captures(&clean) {
        return next_weekday(&caps[1], today, false);
    }

    if let Some(caps) = MONTH_DAY_RE.captures(&clean) {
        if let Some(month) = month_number(&caps[1]) {
            let day: u32 = caps[2].parse().unwrap_or(0);
            return month_day(month, day, today);
        }
    }
    if let Some(caps) = DAY_OF_MONTH_RE.captures(&clean) {
        if let Some(month) = month_number(&caps[2]) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            return month_day(month, day, today);
        }
    }

    for format in ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(&clean, format) {
            return Ok(date);
        }
    }

    Err(ResolveError::InvalidDateToken(clean))
}

/// Resolve a time token to `(hour, minute)` on a 24h clock.
///
/// Accepts `10`, `10:30`, `10am`, `10pm` and `22h`. Anything else,
/// including out-of-range hours or minutes, is an error.
pub fn resolve_time(token: &str) -> Result<(u32, u32), ResolveError> {
    let clean: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    let invalid = || ResolveError::InvalidTime(token.to_string());

    let (hour, minute) = if HOUR_ONLY_RE.is_match(&clean) {
        (clean.parse().map_err(|_| invalid())?, 0)
    } else if let Some(caps) = HOUR_MINUTE_RE.captures(&clean) {
        (
            caps[1].parse().map_err(|_| invalid())?,
            caps[2].parse().map_err(|_| invalid())?,
        )
    } else if let Some(caps) = AMPM_RE.captures(&clean) {
        let mut hour: u32 = caps[1].parse().map_err(|_| invalid())?;
        let is_pm = &caps[2] == "pm";
        if is_pm && hour < 12 {
            hour += 12;
        }
        if !is_pm && hour == 12 {
            hour = 0;
        }
        (hour, 0)
    } else if let Some(caps) = HOUR_H_RE.captures(&clean) {
        (caps[1].parse().map_err(|_| invalid())?, 0)
    } else {
        return Err(invalid());
    };

    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}

/// Resolve a date token plus an optional time token to a timestamp.
/// Without a time the result is midnight.
pub fn resolve_date_time(
    date: &str,
    time: Option<&str>,
    today: NaiveDate,
) -> Result<NaiveDateTime, ResolveError> {
    let day = resolve_date(date, today)?;
    let (hour, minute) = match time {
        Some(t) => resolve_time(t)?,
        None => (0, 0),
    };
    let clock = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ResolveError::InvalidTime(time.unwrap_or_default().to_string()))?;
    Ok(day.and_time(clock))
}
