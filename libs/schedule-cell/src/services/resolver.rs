use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::models::{DayOfWeek, NormalizedSchedule, TimeRange, TimeSlot};

/// Concrete calendar dates with availability at the given hospital,
/// from `now`'s date through `now + horizon_days` inclusive, ascending.
///
/// Linear scan over the horizon rather than a closed-form weekday
/// computation; the horizon is bounded (config, default 30 days) so the
/// scan is the simpler and sufficient choice. The horizon comes from the
/// caller, never from business logic here.
pub fn available_dates(
    schedule: &NormalizedSchedule,
    hospital_id: i64,
    horizon_days: u32,
    now: NaiveDateTime,
) -> Vec<NaiveDate> {
    let weekdays = schedule.weekdays_for(hospital_id);
    if weekdays.is_empty() {
        return Vec::new();
    }

    let first = now.date();
    let mut dates = Vec::new();

    for offset in 0..=i64::from(horizon_days) {
        let date = first + Duration::days(offset);
        if weekdays.contains(&DayOfWeek::from(date.weekday())) {
            dates.push(date);
        }
    }

    debug!(
        "Found {} available dates for hospital {} within {} days",
        dates.len(),
        hospital_id,
        horizon_days
    );
    dates
}

/// Ordered bookable slots at the given hospital on the given date. Each
/// declared schedule range is one slot keyed at its start; ranges are not
/// sub-divided into fixed-length appointments. On the current date,
/// slots whose start has already passed `now` are dropped; a slot
/// starting exactly at `now` is kept. An empty result is a normal
/// "no availability" outcome, not an error.
pub fn time_slots_for_date(
    schedule: &NormalizedSchedule,
    hospital_id: i64,
    date: NaiveDate,
    now: NaiveDateTime,
) -> Vec<TimeSlot> {
    let day = DayOfWeek::from(date.weekday());

    let day_schedule = match schedule.day_schedule(hospital_id, day) {
        Some(day_schedule) => day_schedule,
        None => return Vec::new(),
    };

    let today = date == now.date();

    day_schedule
        .ranges
        .iter()
        .filter(|range| !today || range.start >= now.time())
        .map(|range| to_slot(day_schedule.doctor_id, hospital_id, day, range))
        .collect()
}

fn to_slot(doctor_id: i64, hospital_id: i64, day: DayOfWeek, range: &TimeRange) -> TimeSlot {
    let start = range.start.format("%H:%M").to_string();
    let end = range.end.format("%H:%M").to_string();

    TimeSlot {
        // Entry identity + start keeps the id unique even when two
        // schedule entries declare the same wall-clock range.
        slot_id: format!("{}-{}-{}-{}", doctor_id, hospital_id, day, start),
        start: range.start,
        end: range.end,
        display_range: format!("{} - {}", start, end),
    }
}
