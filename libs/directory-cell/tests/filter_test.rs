// libs/directory-cell/tests/filter_test.rs

use directory_cell::models::{DirectoryFilter, Doctor, ALL_SPECIALTIES};
use directory_cell::services::filter::{filter_doctors, specialties};

fn roster() -> Vec<Doctor> {
    vec![
        Doctor {
            id: 1,
            name: "Dr. Sarah Wilson".to_string(),
            email: "sarah.wilson@hospital.example".to_string(),
            phone: Some("+1 555 0101".to_string()),
            specialization: "Cardiologist".to_string(),
            hospital_ids: vec![7, 9],
        },
        Doctor {
            id: 2,
            name: "Dr. Michael Brown".to_string(),
            email: "michael.brown@hospital.example".to_string(),
            phone: None,
            specialization: "Neurologist".to_string(),
            hospital_ids: vec![9],
        },
        Doctor {
            id: 3,
            name: "Dr. Emily Chen".to_string(),
            email: "emily.chen@clinic.example".to_string(),
            phone: None,
            specialization: "Pediatrician".to_string(),
            hospital_ids: vec![7],
        },
    ]
}

fn ids(doctors: &[Doctor]) -> Vec<i64> {
    doctors.iter().map(|d| d.id).collect()
}

#[test]
fn empty_criteria_is_the_identity() {
    let roster = roster();
    let criteria = DirectoryFilter {
        free_text: Some(String::new()),
        specialty: Some(ALL_SPECIALTIES.to_string()),
        hospital_id: None,
    };

    let filtered = filter_doctors(&roster, &criteria);
    assert_eq!(ids(&filtered), ids(&roster));
}

#[test]
fn free_text_matches_any_of_name_email_specialization() {
    let roster = roster();

    // Name fragment, case-insensitive.
    let by_name = filter_doctors(
        &roster,
        &DirectoryFilter {
            free_text: Some("WILSON".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(ids(&by_name), vec![1]);

    // Email fragment.
    let by_email = filter_doctors(
        &roster,
        &DirectoryFilter {
            free_text: Some("clinic.example".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(ids(&by_email), vec![3]);

    // Specialization fragment.
    let by_specialization = filter_doctors(
        &roster,
        &DirectoryFilter {
            free_text: Some("neuro".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(ids(&by_specialization), vec![2]);
}

#[test]
fn specialty_is_exact_case_insensitive_match() {
    let roster = roster();

    let filtered = filter_doctors(
        &roster,
        &DirectoryFilter {
            specialty: Some("cardiologist".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(ids(&filtered), vec![1]);

    // Substring is not enough for the specialty criterion.
    let none = filter_doctors(
        &roster,
        &DirectoryFilter {
            specialty: Some("Cardio".to_string()),
            ..Default::default()
        },
    );
    assert!(none.is_empty());
}

#[test]
fn hospital_filter_is_a_membership_test() {
    let roster = roster();

    let at_seven = filter_doctors(
        &roster,
        &DirectoryFilter {
            hospital_id: Some(7),
            ..Default::default()
        },
    );
    assert_eq!(ids(&at_seven), vec![1, 3]);
}

#[test]
fn criteria_compose_with_and_semantics() {
    let roster = roster();

    let filtered = filter_doctors(
        &roster,
        &DirectoryFilter {
            free_text: Some("dr.".to_string()),
            specialty: Some("Pediatrician".to_string()),
            hospital_id: Some(7),
        },
    );
    assert_eq!(ids(&filtered), vec![3]);

    // Same text, wrong hospital: AND fails.
    let none = filter_doctors(
        &roster,
        &DirectoryFilter {
            free_text: Some("dr.".to_string()),
            specialty: Some("Pediatrician".to_string()),
            hospital_id: Some(9),
        },
    );
    assert!(none.is_empty());
}

#[test]
fn filtering_is_deterministic() {
    let roster = roster();
    let criteria = DirectoryFilter {
        free_text: Some("hospital".to_string()),
        ..Default::default()
    };

    let first = filter_doctors(&roster, &criteria);
    let second = filter_doctors(&roster, &criteria);
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn specialties_lists_sentinel_first_without_duplicates() {
    let mut roster = roster();
    roster.push(Doctor {
        id: 4,
        name: "Dr. Ana Costa".to_string(),
        email: "ana.costa@hospital.example".to_string(),
        phone: None,
        specialization: "CARDIOLOGIST".to_string(), // dup modulo case
        hospital_ids: vec![9],
    });

    let list = specialties(&roster);
    assert_eq!(list[0], ALL_SPECIALTIES);
    assert_eq!(
        list[1..],
        ["Cardiologist", "Neurologist", "Pediatrician"]
    );
}
