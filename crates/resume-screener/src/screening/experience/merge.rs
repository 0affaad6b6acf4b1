use super::intervals::DateInterval;
use super::MAX_EXPERIENCE_YEARS;
use crate::screening::domain::round2;

/// Coalesces overlapping (and nested) intervals into a minimal sorted covering set.
pub fn merge_intervals(intervals: &[DateInterval]) -> Vec<DateInterval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();

    let mut merged: Vec<DateInterval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(current) if interval.start() <= current.end() => {
                if interval.end() > current.end() {
                    *current = DateInterval::new(current.start(), interval.end())
                        .unwrap_or(*current);
                }
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Sum of merged durations in years, clamped to `[0, 50]` and rounded to two decimals.
pub fn total_years(merged: &[DateInterval]) -> f64 {
    let total: f64 = merged.iter().map(DateInterval::years).sum();
    round2(total.clamp(0.0, MAX_EXPERIENCE_YEARS))
}
