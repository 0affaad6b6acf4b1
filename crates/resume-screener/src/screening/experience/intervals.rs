use std::ops::Range;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

const DAYS_PER_YEAR: f64 = 365.25;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

// Hyphen plus the unicode hyphen/dash family (‐ ‑ ‒ – — ―).
const DASH: &str = r"[-\x{2010}-\x{2015}]";

static MONTH_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b([a-z]{{3,9}})\.?\s+(\d{{4}})\s*{DASH}\s*(?:(present|now)\b|([a-z]{{3,9}})\.?\s+(\d{{4}})\b)"
    ))
    .expect("month range pattern compiles")
});

static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{4}})\s*{DASH}\s*(?:(present|now)\b|(\d{{4}})\b)"
    ))
    .expect("year range pattern compiles")
});

/// Closed calendar interval of claimed experience. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Returns `None` when the interval would run backwards.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn years(&self) -> f64 {
        (self.end - self.start).num_days() as f64 / DAYS_PER_YEAR
    }
}

/// Scans `text` for "Feb 2021 - Mar 2023" and "2018 - 2020" style ranges.
///
/// `today` stands in for open-ended "Present"/"Now" endpoints. Month-year ranges are
/// anchored to the first of the month. Year-only ranges run from January 1 of the start
/// year to December 31 of the end year; a year-only match lying inside an accepted
/// month-year range is the tail of that range and is not counted twice.
pub fn extract_intervals(text: &str, today: NaiveDate) -> Vec<DateInterval> {
    let mut intervals = Vec::new();
    let mut claimed: Vec<Range<usize>> = Vec::new();

    for caps in MONTH_RANGE_RE.captures_iter(text) {
        if let Some(interval) = month_range(&caps, today) {
            if let Some(whole) = caps.get(0) {
                claimed.push(whole.range());
            }
            intervals.push(interval);
        }
    }

    for caps in YEAR_RANGE_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let span = whole.range();
        if claimed
            .iter()
            .any(|taken| taken.start < span.end && span.start < taken.end)
        {
            continue;
        }
        if let Some(interval) = year_range(&caps, today) {
            intervals.push(interval);
        }
    }

    intervals
}

fn month_range(caps: &Captures<'_>, today: NaiveDate) -> Option<DateInterval> {
    let start = month_start(caps.get(1)?.as_str(), caps.get(2)?.as_str())?;
    let end = if caps.get(3).is_some() {
        today
    } else {
        month_start(caps.get(4)?.as_str(), caps.get(5)?.as_str())?
    };
    DateInterval::new(start, end)
}

fn year_range(caps: &Captures<'_>, today: NaiveDate) -> Option<DateInterval> {
    let start_year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let start = NaiveDate::from_ymd_opt(start_year, 1, 1)?;
    let end = if caps.get(2).is_some() {
        today
    } else {
        let end_year: i32 = caps.get(3)?.as_str().parse().ok()?;
        NaiveDate::from_ymd_opt(end_year, 12, 31)?
    };
    DateInterval::new(start, end)
}

fn month_start(month: &str, year: &str) -> Option<NaiveDate> {
    let month = parse_month(month)?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Accepts full month names and any prefix of at least three letters ("Sep", "Sept").
fn parse_month(word: &str) -> Option<u32> {
    let word = word.to_ascii_lowercase();
    if word.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|name| name.starts_with(word.as_str()))
        .map(|index| index as u32 + 1)
}
