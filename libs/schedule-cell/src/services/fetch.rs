use std::sync::atomic::{AtomicU64, Ordering};

use reqwest::Method;
use tracing::{debug, warn};

use shared_api::ApiClient;
use shared_config::AppConfig;

use crate::models::{Normalization, RawScheduleEntry, ScheduleError};
use crate::services::normalizer::normalize;

/// Fetches and normalizes a doctor's weekly schedule. One request per
/// doctor-selection event; selecting another doctor mid-flight bumps the
/// selection generation, so a response landing for an older selection is
/// discarded instead of applied (last selection wins).
pub struct ScheduleService {
    api: ApiClient,
    selection_generation: AtomicU64,
}

impl ScheduleService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ApiClient::new(config),
            selection_generation: AtomicU64::new(0),
        }
    }

    /// `Ok(None)` means a newer selection superseded this fetch while it
    /// was in flight; the caller must drop the result silently.
    pub async fn fetch_schedule(
        &self,
        doctor_id: i64,
    ) -> Result<Option<Normalization>, ScheduleError> {
        let generation = self.selection_generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Fetching schedule for doctor {} (selection {})", doctor_id, generation);

        let path = format!("/api/schedules?doctorId={}", doctor_id);
        let result: Result<Vec<RawScheduleEntry>, _> =
            self.api.request(Method::GET, &path, None).await;

        // Staleness is checked before the outcome is inspected: a
        // superseded response is discarded whether it succeeded or
        // failed, so an old selection can never surface an error for a
        // doctor the user has already navigated away from.
        if self.selection_generation.load(Ordering::SeqCst) != generation {
            warn!(
                "Discarding stale schedule response for doctor {} (selection {} superseded)",
                doctor_id, generation
            );
            return Ok(None);
        }

        let entries = result.map_err(|e| ScheduleError::Fetch(e.to_string()))?;
        Ok(Some(normalize(&entries)))
    }
}
