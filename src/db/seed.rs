use crate::models::{Appointment, Doctor, Patient};

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: None,
            patient_name: "John Smith".into(),
            doctor: "Dr. Johnson".into(),
            date: "2024-01-15".into(),
            time: "09:00".into(),
            status: "Confirmed".into(),
            patient_type: "New".into(),
            phone: Some("(555) 123-4567".into()),
            insurance: Some("BlueCross".into()),
        },
        Appointment {
            id: None,
            patient_name: "Sarah Wilson".into(),
            doctor: "Dr. Brown".into(),
            date: "2024-01-16".into(),
            time: "14:30".into(),
            status: "Pending".into(),
            patient_type: "Returning".into(),
            phone: Some("(555) 987-6543".into()),
            insurance: Some("Aetna".into()),
        },
    ]
}

pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: None,
            name: "John Smith".into(),
            dob: "1985-03-15".into(),
            phone: "(555) 123-4567".into(),
            email: "john.smith@email.com".into(),
            patient_type: "New".into(),
            insurance_carrier: Some("BlueCross".into()),
            member_id: Some("BC123456".into()),
        },
        Patient {
            id: None,
            name: "Sarah Wilson".into(),
            dob: "1990-07-22".into(),
            phone: "(555) 987-6543".into(),
            email: "sarah.wilson@email.com".into(),
            patient_type: "Returning".into(),
            insurance_carrier: Some("Aetna".into()),
            member_id: Some("AET789012".into()),
        },
    ]
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: None,
            name: "Dr. Johnson".into(),
            specialty: "Family Medicine".into(),
            availability: owned(&["09:00", "10:00", "11:00", "14:00", "15:00"]),
        },
        Doctor {
            id: None,
            name: "Dr. Brown".into(),
            specialty: "Internal Medicine".into(),
            availability: owned(&["08:00", "09:30", "11:00", "13:30", "15:00"]),
        },
    ]
}
