use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use tracing::info;

use shared_api::ApiClient;
use shared_config::AppConfig;
use shared_models::error::ApiError;

use crate::models::{BookingConfirmation, BookingRequest};

/// Seam between the coordinator and the booking endpoint, so tests can
/// substitute a counting or blocking transport.
#[async_trait]
pub trait BookingTransport: Send + Sync {
    async fn submit(&self, request: &BookingRequest) -> Result<BookingConfirmation, ApiError>;
}

/// Production transport posting to the flat appointment API.
pub struct HttpBookingApi {
    api: ApiClient,
}

impl HttpBookingApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }
}

#[async_trait]
impl BookingTransport for HttpBookingApi {
    async fn submit(&self, request: &BookingRequest) -> Result<BookingConfirmation, ApiError> {
        info!(
            "Submitting booking for patient {} with doctor {} on {}",
            request.patient_id, request.doctor_id, request.date
        );

        let body = json!({
            "patientId": request.patient_id,
            "doctorId": request.doctor_id,
            "hospitalId": request.hospital_id,
            "appointmentDate": request.date.format("%Y-%m-%d").to_string(),
            "appointmentTime": request.start_time.format("%H:%M").to_string(),
            "type": request.appointment_type.to_string(),
            "reason": request.reason_for_visit,
            "patientName": request.patient_display_name,
            "slotId": request.slot_id,
        });

        let confirmation: BookingConfirmation = self
            .api
            .request(Method::POST, "/api/appointments/request", Some(body))
            .await?;

        info!("Booking confirmed with id {}", confirmation.appointment_id);
        Ok(confirmation)
    }
}
