// libs/booking-cell/tests/booking_api_test.rs

use assert_matches::assert_matches;
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use booking_cell::models::{
    AppointmentType, BookingDraft, BookingError, BookingOutcome, BookingRequest,
};
use booking_cell::services::coordinator::BookingCoordinator;
use booking_cell::services::transport::{BookingTransport, HttpBookingApi};
use schedule_cell::models::TimeSlot;
use shared_config::AppConfig;
use shared_models::session::SessionContext;

// ==============================================================================
// TEST FIXTURES AND UTILITIES
// ==============================================================================

fn request() -> BookingRequest {
    BookingRequest {
        patient_id: 42,
        doctor_id: 11,
        hospital_id: 7,
        date: NaiveDate::from_ymd_opt(2025, 6, 23).unwrap(),
        start_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        slot_id: "11-7-MONDAY-09:30".to_string(),
        appointment_type: AppointmentType::Video,
        reason_for_visit: "Chest pain follow-up".to_string(),
        patient_display_name: "Jane Doe".to_string(),
    }
}

fn draft() -> BookingDraft {
    BookingDraft {
        doctor_id: 11,
        hospital_id: Some(7),
        date: NaiveDate::from_ymd_opt(2025, 6, 23),
        slot: Some(TimeSlot {
            slot_id: "11-7-MONDAY-09:30".to_string(),
            start: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            end: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            display_range: "09:30 - 10:00".to_string(),
        }),
        appointment_type: Some(AppointmentType::Video),
        reason_for_visit: Some("Chest pain follow-up".to_string()),
    }
}

async fn api_for(server: &MockServer) -> HttpBookingApi {
    HttpBookingApi::new(&AppConfig::for_base_url(&server.uri()))
}

// ==============================================================================
// WIRE FORMAT
// ==============================================================================

#[tokio::test]
async fn submit_posts_the_flat_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/appointments/request"))
        .and(body_partial_json(json!({
            "patientId": 42,
            "doctorId": 11,
            "hospitalId": 7,
            "appointmentDate": "2025-06-23",
            "appointmentTime": "09:30",
            "type": "VIDEO",
            "reason": "Chest pain follow-up",
            "patientName": "Jane Doe",
            "slotId": "11-7-MONDAY-09:30",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 555,
            "status": "PENDING",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let confirmation = api_for(&server).await.submit(&request()).await.unwrap();

    assert_eq!(confirmation.appointment_id, 555);
    assert_eq!(confirmation.status.as_deref(), Some("PENDING"));
}

#[tokio::test]
async fn confirmation_without_status_still_decodes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/appointments/request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 9 })))
        .mount(&server)
        .await;

    let confirmation = api_for(&server).await.submit(&request()).await.unwrap();

    assert_eq!(confirmation.appointment_id, 9);
    assert_eq!(confirmation.status, None);
}

// ==============================================================================
// END TO END THROUGH THE COORDINATOR
// ==============================================================================

#[tokio::test]
async fn coordinator_over_http_succeeds_against_a_live_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/appointments/request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 881,
            "status": "PENDING",
        })))
        .mount(&server)
        .await;

    let coordinator = BookingCoordinator::new(api_for(&server).await);
    let outcome = coordinator
        .submit(&draft(), &SessionContext::patient(42, "Jane Doe"))
        .await
        .unwrap();

    assert_matches!(outcome, BookingOutcome::Succeeded(c) if c.appointment_id == 881);
}

#[tokio::test]
async fn coordinator_surfaces_the_server_rejection_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/appointments/request"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Doctor is not available at the selected time",
        })))
        .mount(&server)
        .await;

    let coordinator = BookingCoordinator::new(api_for(&server).await);
    let outcome = coordinator
        .submit(&draft(), &SessionContext::patient(42, "Jane Doe"))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        BookingOutcome::Failed(BookingError::Submission(
            "Doctor is not available at the selected time".to_string()
        ))
    );
}
