use serde::{Deserialize, Serialize};

/// Dropdown sentinel meaning "do not filter by specialty".
pub const ALL_SPECIALTIES: &str = "All Specialties";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub specialization: String,
    #[serde(default)]
    pub hospital_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
}

/// Criteria for narrowing the doctor roster. All present criteria AND
/// together; an empty/sentinel criterion is a no-op.
#[derive(Debug, Clone, Default)]
pub struct DirectoryFilter {
    pub free_text: Option<String>,
    pub specialty: Option<String>,
    pub hospital_id: Option<i64>,
}

// Error types specific to directory operations
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Failed to load directory: {0}")]
    Fetch(String),
}
