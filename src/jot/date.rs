use crate::error::{JotError, Result};
use chrono::Local;

/// Days per month, January through December. February is adjusted for
/// leap years before the lookup.
const DAY_COUNT: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Validate `input` strictly as `yyyy-MM-dd`: exactly three digit groups
/// of widths 4, 2 and 2, a real month, a real day for that month.
pub fn validate(input: &str) -> Result<()> {
    let (year, month, day) =
        split_groups(input).ok_or_else(|| JotError::InvalidDate(input.to_string()))?;

    if !(1..=12).contains(&month) {
        return Err(JotError::InvalidDate(format!("{input}: invalid month")));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(JotError::InvalidDate(format!("{input}: invalid day")));
    }

    Ok(())
}

/// Silent probe: pass/fail with no diagnostics. Used when an argument is
/// opportunistically tried as "maybe a date" before being treated as
/// content.
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

/// Today in the canonical store format, local timezone.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn split_groups(input: &str) -> Option<(u32, u32, u32)> {
    let mut parts = input.split('-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    // u32::parse accepts a leading '+', which is not a digit group
    if ![year, month, day]
        .iter()
        .all(|group| group.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
}

fn days_in_month(year: u32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAY_COUNT[(month - 1) as usize]
    }
}

fn is_leap_year(year: u32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}
