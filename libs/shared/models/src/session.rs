use serde::{Deserialize, Serialize};

/// Role of the signed-in user, as far as the booking flow cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

/// Session data handed into the core by the outer shell. The core never
/// reads role or identity from ambient storage; callers pass this in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    pub patient_id: i64,
    pub display_name: String,
    pub role: Role,
}

impl SessionContext {
    pub fn patient(patient_id: i64, display_name: impl Into<String>) -> Self {
        Self {
            patient_id,
            display_name: display_name.into(),
            role: Role::Patient,
        }
    }
}
