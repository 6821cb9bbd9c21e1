use crate::models::{Appointment, DashboardStats, Patient};

/// Anything not "Confirmed" counts as pending, anything not "New" as returning.
pub fn compute_dashboard_stats(appointments: &[Appointment], patients: &[Patient]) -> DashboardStats {
    let total_appointments = appointments.len();
    let confirmed_appointments = appointments.iter().filter(|a| a.is_confirmed()).count();

    let total_patients = patients.len();
    let new_patients = patients.iter().filter(|p| p.is_new()).count();

    DashboardStats {
        total_appointments,
        confirmed_appointments,
        pending_appointments: total_appointments - confirmed_appointments,
        total_patients,
        new_patients,
        returning_patients: total_patients - new_patients,
    }
}
