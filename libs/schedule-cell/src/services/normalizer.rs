use chrono::NaiveTime;
use tracing::warn;

use crate::models::{
    DayOfWeek, Normalization, RawScheduleEntry, ScheduleParseWarning, TimeRange,
};

const PAIR_SEPARATOR: char = ',';
const RANGE_SEPARATOR: char = '-';
const TIME_FORMAT: &str = "%H:%M";

/// Parse raw schedule entries into the canonical hospital -> weekday ->
/// ranges structure. A malformed entry never aborts the rest: it is
/// skipped and surfaced as a warning on the tagged result.
pub fn normalize(entries: &[RawScheduleEntry]) -> Normalization {
    let mut result = Normalization::default();

    for (index, entry) in entries.iter().enumerate() {
        let day = match DayOfWeek::parse(&entry.day_of_week) {
            Some(day) => day,
            None => {
                result.warnings.push(skip(index, format!("unknown day of week '{}'", entry.day_of_week)));
                continue;
            }
        };

        match parse_ranges(&entry.time_slots) {
            Ok(ranges) => {
                result
                    .schedule
                    .insert(entry.hospital_id, day, entry.doctor_id, ranges);
            }
            Err(reason) => result.warnings.push(skip(index, reason)),
        }
    }

    for warning in &result.warnings {
        warn!("{}", warning);
    }

    result
}

fn skip(entry_index: usize, reason: String) -> ScheduleParseWarning {
    ScheduleParseWarning { entry_index, reason }
}

/// Split `"09:00-09:30,09:30-10:00"` into time ranges. Any malformed
/// pair fails the whole entry.
fn parse_ranges(time_slots: &str) -> Result<Vec<TimeRange>, String> {
    let mut ranges = Vec::new();

    for pair in time_slots.split(PAIR_SEPARATOR) {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }

        let (start_raw, end_raw) = pair
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| format!("time slot '{}' is missing the range separator", pair))?;

        let start = parse_time(start_raw)?;
        let end = parse_time(end_raw)?;

        if start >= end {
            return Err(format!("time slot '{}' has start at or after end", pair));
        }

        ranges.push(TimeRange { start, end });
    }

    if ranges.is_empty() {
        return Err("no usable time slots".to_string());
    }

    Ok(ranges)
}

fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
        .map_err(|_| format!("'{}' is not a HH:MM time", raw.trim()))
}
