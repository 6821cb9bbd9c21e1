// src/db/mod.rs

pub mod collection;
pub mod seed;

pub use collection::{Collection, Record};

use crate::error::StoreError;
use crate::models::{Appointment, DashboardStats, Doctor, Patient};
use crate::services::compute_dashboard_stats;

/// Maps a record type to its collection inside [`AdminStore`].
pub trait Stored: Record {
    fn collection(store: &AdminStore) -> &Collection<Self>;
}

impl Stored for Appointment {
    fn collection(store: &AdminStore) -> &Collection<Self> {
        &store.appointments
    }
}

impl Stored for Patient {
    fn collection(store: &AdminStore) -> &Collection<Self> {
        &store.patients
    }
}

impl Stored for Doctor {
    fn collection(store: &AdminStore) -> &Collection<Self> {
        &store.doctors
    }
}

/// The three admin collections. Lives for the whole process; nothing is
/// written to disk.
#[derive(Default)]
pub struct AdminStore {
    pub appointments: Collection<Appointment>,
    pub patients: Collection<Patient>,
    pub doctors: Collection<Doctor>,
}

impl AdminStore {
    /// Store holding the demo rows the admin UI ships with.
    pub fn seeded() -> Self {
        AdminStore {
            appointments: Collection::with_records(seed::appointments()),
            patients: Collection::with_records(seed::patients()),
            doctors: Collection::with_records(seed::doctors()),
        }
    }

    pub async fn set_appointment_status(
        &self,
        id: &str,
        status: String,
    ) -> Result<Appointment, StoreError> {
        self.appointments
            .modify(id, move |appointment| appointment.status = status)
            .await
    }

    pub async fn stats(&self) -> DashboardStats {
        let appointments = self.appointments.list().await;
        let patients = self.patients.list().await;
        compute_dashboard_stats(&appointments, &patients)
    }
}
