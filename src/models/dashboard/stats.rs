use serde::{Deserialize, Serialize};

// Aggregate counts shown on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_appointments: usize,
    pub confirmed_appointments: usize,
    pub pending_appointments: usize,
    pub total_patients: usize,
    pub new_patients: usize,
    pub returning_patients: usize,
}
