use crate::models::{DirectoryFilter, Doctor, ALL_SPECIALTIES};

/// Narrow a doctor roster against the given criteria. Pure and
/// deterministic: identical input always yields identical output,
/// regardless of call order. Debouncing of free-text input is the
/// caller's concern; this stays synchronous.
pub fn filter_doctors(doctors: &[Doctor], criteria: &DirectoryFilter) -> Vec<Doctor> {
    doctors
        .iter()
        .filter(|doctor| matches_free_text(doctor, criteria.free_text.as_deref()))
        .filter(|doctor| matches_specialty(doctor, criteria.specialty.as_deref()))
        .filter(|doctor| matches_hospital(doctor, criteria.hospital_id))
        .cloned()
        .collect()
}

/// Distinct specialty values for the filter dropdown, sentinel first.
pub fn specialties(doctors: &[Doctor]) -> Vec<String> {
    let mut seen = vec![ALL_SPECIALTIES.to_string()];
    for doctor in doctors {
        if !seen
            .iter()
            .any(|s| s.eq_ignore_ascii_case(&doctor.specialization))
        {
            seen.push(doctor.specialization.clone());
        }
    }
    seen
}

/// Case-insensitive substring match against name, email, and
/// specialization; a doctor matches when ANY field matches.
fn matches_free_text(doctor: &Doctor, free_text: Option<&str>) -> bool {
    let needle = match free_text {
        Some(text) if !text.trim().is_empty() => text.trim().to_lowercase(),
        _ => return true,
    };

    doctor.name.to_lowercase().contains(&needle)
        || doctor.email.to_lowercase().contains(&needle)
        || doctor.specialization.to_lowercase().contains(&needle)
}

fn matches_specialty(doctor: &Doctor, specialty: Option<&str>) -> bool {
    match specialty {
        Some(wanted) if !wanted.is_empty() && wanted != ALL_SPECIALTIES => {
            doctor.specialization.eq_ignore_ascii_case(wanted)
        }
        _ => true,
    }
}

fn matches_hospital(doctor: &Doctor, hospital_id: Option<i64>) -> bool {
    match hospital_id {
        Some(id) => doctor.hospital_ids.contains(&id),
        None => true,
    }
}
