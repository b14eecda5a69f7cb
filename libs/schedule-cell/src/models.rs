use std::collections::HashMap;
use std::fmt;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One recurring availability record as the backend returns it:
/// a (doctor, hospital, weekday) combination with its time ranges packed
/// into a delimited string like `"09:00-09:30,09:30-10:00"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScheduleEntry {
    pub doctor_id: i64,
    pub hospital_id: i64,
    pub day_of_week: String,
    pub time_slots: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Case-normalizing parse of the backend's day tag.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_uppercase().as_str() {
            "MONDAY" => Some(Self::Monday),
            "TUESDAY" => Some(Self::Tuesday),
            "WEDNESDAY" => Some(Self::Wednesday),
            "THURSDAY" => Some(Self::Thursday),
            "FRIDAY" => Some(Self::Friday),
            "SATURDAY" => Some(Self::Saturday),
            "SUNDAY" => Some(Self::Sunday),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open wall-clock interval within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Ranges for one (hospital, weekday) combination, with the owning
/// doctor retained so slot ids stay unique across schedule entries.
#[derive(Debug, Clone, Default)]
pub struct DaySchedule {
    pub doctor_id: i64,
    pub ranges: Vec<TimeRange>,
}

/// Canonical in-memory schedule keyed hospital -> weekday -> ranges.
/// Built per doctor-selection event, discarded when the flow closes.
#[derive(Debug, Clone, Default)]
pub struct NormalizedSchedule {
    by_hospital: HashMap<i64, HashMap<DayOfWeek, DaySchedule>>,
}

impl NormalizedSchedule {
    pub fn insert(&mut self, hospital_id: i64, day: DayOfWeek, doctor_id: i64, ranges: Vec<TimeRange>) {
        let day_schedule = self
            .by_hospital
            .entry(hospital_id)
            .or_default()
            .entry(day)
            .or_default();
        day_schedule.doctor_id = doctor_id;
        day_schedule.ranges.extend(ranges);
        day_schedule.ranges.sort_by_key(|r| r.start);
        // Duplicate source entries collapse to one range per start, so
        // one bookable instant never yields two slots with the same id.
        day_schedule.ranges.dedup_by_key(|r| r.start);
    }

    pub fn day_schedule(&self, hospital_id: i64, day: DayOfWeek) -> Option<&DaySchedule> {
        self.by_hospital.get(&hospital_id)?.get(&day)
    }

    /// Weekdays with at least one range for the given hospital.
    pub fn weekdays_for(&self, hospital_id: i64) -> Vec<DayOfWeek> {
        self.by_hospital
            .get(&hospital_id)
            .map(|days| {
                days.iter()
                    .filter(|(_, schedule)| !schedule.ranges.is_empty())
                    .map(|(day, _)| *day)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.by_hospital.is_empty()
    }
}

/// One schedule entry that failed to parse and was dropped. Recovered
/// locally: logged, never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleParseWarning {
    pub entry_index: usize,
    pub reason: String,
}

impl fmt::Display for ScheduleParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schedule entry {} skipped: {}", self.entry_index, self.reason)
    }
}

/// Tagged normalization result: the usable schedule plus whatever the
/// parser had to drop along the way. Never a throwing parse.
#[derive(Debug, Clone, Default)]
pub struct Normalization {
    pub schedule: NormalizedSchedule,
    pub warnings: Vec<ScheduleParseWarning>,
}

/// A single concrete bookable instant derived from a schedule range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub slot_id: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub display_range: String,
}

// Error types specific to schedule operations
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Failed to load schedule: {0}")]
    Fetch(String),
}
