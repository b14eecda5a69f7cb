use anyhow::{bail, Context, Result};
use chrono::Local;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use directory_cell::models::DirectoryFilter;
use directory_cell::services::{filter_doctors, DirectoryService};
use schedule_cell::services::{available_dates, time_slots_for_date, ScheduleService};
use shared_config::AppConfig;

/// Walks the availability flow against a live backend: list the doctor
/// roster, or resolve the bookable dates and slots for one doctor.
///
/// Usage: booking-flow [doctor_id] [free_text_filter]
#[tokio::main]
async fn main() -> Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    if !config.is_configured() {
        bail!("API_BASE_URL is not set");
    }

    let mut args = std::env::args().skip(1);
    let doctor_id: Option<i64> = match args.next() {
        Some(raw) => Some(raw.parse().context("doctor_id must be a number")?),
        None => None,
    };
    let free_text = args.next();

    let directory = DirectoryService::new(&config);
    let (doctors, hospitals) =
        futures::try_join!(directory.fetch_doctors(), directory.fetch_hospitals())?;
    info!("Loaded {} doctors across {} hospitals", doctors.len(), hospitals.len());

    let doctor_id = match doctor_id {
        Some(id) => id,
        None => {
            let criteria = DirectoryFilter {
                free_text,
                ..Default::default()
            };
            for doctor in filter_doctors(&doctors, &criteria) {
                println!("{:>6}  {}  ({})", doctor.id, doctor.name, doctor.specialization);
            }
            return Ok(());
        }
    };

    let schedules = ScheduleService::new(&config);
    let normalization = schedules
        .fetch_schedule(doctor_id)
        .await?
        .context("schedule fetch was superseded")?;

    if !normalization.warnings.is_empty() {
        info!("Skipped {} malformed schedule entries", normalization.warnings.len());
    }

    let now = Local::now().naive_local();
    for hospital in &hospitals {
        let dates = available_dates(
            &normalization.schedule,
            hospital.id,
            config.booking_horizon_days,
            now,
        );
        let first = match dates.first() {
            Some(date) => *date,
            None => continue,
        };

        println!("{}: next availability {}", hospital.name, first);
        for slot in time_slots_for_date(&normalization.schedule, hospital.id, first, now) {
            println!("    {}  [{}]", slot.display_range, slot.slot_id);
        }
    }

    Ok(())
}
