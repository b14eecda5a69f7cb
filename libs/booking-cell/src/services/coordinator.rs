use std::sync::Mutex;

use tracing::{debug, warn};

use shared_models::session::SessionContext;

use crate::models::{
    BookingDraft, BookingError, BookingOutcome, BookingRequest, BookingState,
};
use crate::services::transport::BookingTransport;

/// Reason shown when the server gave none (or the transport itself failed).
pub const GENERIC_SUBMISSION_FAILURE: &str =
    "The booking request could not be completed. Please try again.";

/// Drives one booking attempt through
/// IDLE -> VALIDATING -> SUBMITTING -> {SUCCEEDED, FAILED} -> IDLE.
///
/// At most one submission is in flight per coordinator: a confirmation
/// trigger while an attempt is running is a no-op, which is the client
/// side of the mutual-exclusion guarantee (there is no server-side
/// idempotency key). Failures are terminal for the attempt; nothing is
/// retried without a new explicit user action.
pub struct BookingCoordinator<T: BookingTransport> {
    transport: T,
    state: Mutex<BookingState>,
}

impl<T: BookingTransport> BookingCoordinator<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: Mutex::new(BookingState::Idle),
        }
    }

    /// Snapshot of the current attempt state, for the UI to disable the
    /// submit control while an attempt is running.
    pub fn state(&self) -> BookingState {
        self.state.lock().expect("state lock poisoned").clone()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self.state(),
            BookingState::Validating | BookingState::Submitting
        )
    }

    /// Run one submission attempt. Returns `None` when an attempt is
    /// already in flight (the trigger is ignored, no network call is
    /// made); otherwise returns the attempt's outcome.
    pub async fn submit(
        &self,
        draft: &BookingDraft,
        session: &SessionContext,
    ) -> Option<BookingOutcome> {
        {
            let mut state = self.state.lock().expect("state lock poisoned");
            if matches!(*state, BookingState::Validating | BookingState::Submitting) {
                debug!("Ignoring booking trigger: an attempt is already in flight");
                return None;
            }
            // A terminal state exits to Idle here; starting a fresh
            // attempt is the only way out of Succeeded/Failed.
            *state = BookingState::Validating;
        }

        let request = match validate(draft, session) {
            Ok(request) => request,
            Err(error) => {
                warn!("Booking rejected before submission: {}", error);
                return Some(self.finish(BookingOutcome::Failed(error)));
            }
        };

        {
            let mut state = self.state.lock().expect("state lock poisoned");
            *state = BookingState::Submitting;
        }

        let outcome = match self.transport.submit(&request).await {
            Ok(confirmation) => BookingOutcome::Succeeded(confirmation),
            Err(api_error) => {
                warn!("Booking submission failed: {}", api_error);
                let reason = api_error
                    .server_message()
                    .unwrap_or(GENERIC_SUBMISSION_FAILURE)
                    .to_string();
                BookingOutcome::Failed(BookingError::Submission(reason))
            }
        };

        Some(self.finish(outcome))
    }

    /// Return the coordinator to Idle without starting a new attempt,
    /// e.g. when the user dismisses the confirmation or error display.
    pub fn reset(&self) {
        let mut state = self.state.lock().expect("state lock poisoned");
        if !matches!(*state, BookingState::Validating | BookingState::Submitting) {
            *state = BookingState::Idle;
        }
    }

    /// Record the terminal state for the attempt. It stays visible until
    /// the next attempt or an explicit reset exits to Idle.
    fn finish(&self, outcome: BookingOutcome) -> BookingOutcome {
        let mut state = self.state.lock().expect("state lock poisoned");
        *state = match &outcome {
            BookingOutcome::Succeeded(confirmation) => {
                BookingState::Succeeded(confirmation.clone())
            }
            BookingOutcome::Failed(error) => BookingState::Failed(error.clone()),
        };
        outcome
    }
}

/// Reject the draft before any network contact when a required field is
/// absent. The reason names the missing concern, not an internal field.
fn validate(
    draft: &BookingDraft,
    session: &SessionContext,
) -> Result<BookingRequest, BookingError> {
    let hospital_id = draft
        .hospital_id
        .ok_or(BookingError::MissingField("hospital"))?;
    let date = draft.date.ok_or(BookingError::MissingField("date"))?;
    let slot = draft
        .slot
        .as_ref()
        .ok_or(BookingError::MissingField("time slot"))?;
    let appointment_type = draft
        .appointment_type
        .ok_or(BookingError::MissingField("appointment type"))?;

    let reason_for_visit = draft
        .reason_for_visit
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .ok_or(BookingError::MissingField("reason for visit"))?
        .to_string();

    let patient_display_name = session.display_name.trim();
    if patient_display_name.is_empty() {
        return Err(BookingError::MissingField("patient name"));
    }

    Ok(BookingRequest {
        patient_id: session.patient_id,
        doctor_id: draft.doctor_id,
        hospital_id,
        date,
        start_time: slot.start,
        slot_id: slot.slot_id.clone(),
        appointment_type,
        reason_for_visit,
        patient_display_name: patient_display_name.to_string(),
    })
}
