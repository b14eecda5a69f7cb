use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use schedule_cell::models::TimeSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentType {
    #[serde(rename = "IN_PERSON")]
    InPerson,
    #[serde(rename = "VIDEO")]
    Video,
    #[serde(rename = "PHONE")]
    Phone,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            AppointmentType::InPerson => "IN_PERSON",
            AppointmentType::Video => "VIDEO",
            AppointmentType::Phone => "PHONE",
        };
        f.write_str(tag)
    }
}

/// What the booking form holds mid-flow. Everything the user has not yet
/// picked is `None`; the slot is always a previously resolved [`TimeSlot`],
/// never a free-typed time.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub doctor_id: i64,
    pub hospital_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub slot: Option<TimeSlot>,
    pub appointment_type: Option<AppointmentType>,
    pub reason_for_visit: Option<String>,
}

/// Fully specified booking request: every field present, validated before
/// any network contact.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub hospital_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub slot_id: String,
    pub appointment_type: AppointmentType,
    pub reason_for_visit: String,
    pub patient_display_name: String,
}

/// Identifiers echoed back by the booking endpoint on success, kept for
/// the confirmation display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingConfirmation {
    #[serde(rename = "id")]
    pub appointment_id: i64,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Booking submission failed: {0}")]
    Submission(String),
}

/// Result of one submission attempt. Transient; a new attempt starts over.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Succeeded(BookingConfirmation),
    Failed(BookingError),
}

/// Per-attempt coordinator state. Terminal states exit back to `Idle`;
/// nothing is retried automatically.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingState {
    Idle,
    Validating,
    Submitting,
    Succeeded(BookingConfirmation),
    Failed(BookingError),
}
