use reqwest::Method;
use tracing::debug;

use shared_api::ApiClient;
use shared_config::AppConfig;

use crate::models::{DirectoryError, Doctor, Hospital};

/// Fetches the doctor/hospital roster that feeds the directory filter.
/// A fetch failure is a blocking error state for the booking flow; no
/// partial roster is ever returned.
pub struct DirectoryService {
    api: ApiClient,
}

impl DirectoryService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    pub async fn fetch_doctors(&self) -> Result<Vec<Doctor>, DirectoryError> {
        debug!("Fetching doctor directory");

        let doctors: Vec<Doctor> = self
            .api
            .request(Method::GET, "/api/doctors", None)
            .await
            .map_err(|e| DirectoryError::Fetch(e.to_string()))?;

        debug!("Loaded {} doctors", doctors.len());
        Ok(doctors)
    }

    pub async fn fetch_hospitals(&self) -> Result<Vec<Hospital>, DirectoryError> {
        debug!("Fetching hospital directory");

        let hospitals: Vec<Hospital> = self
            .api
            .request(Method::GET, "/api/hospitals", None)
            .await
            .map_err(|e| DirectoryError::Fetch(e.to_string()))?;

        debug!("Loaded {} hospitals", hospitals.len());
        Ok(hospitals)
    }
}
