use serde::{Deserialize, Serialize};

use crate::db::Record;

fn default_status() -> String {
    "Confirmed".to_string()
}

fn default_patient_type() -> String {
    "New".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    // Assigned by the store; whatever the client sends is ignored.
    #[serde(default)]
    pub id: Option<String>,
    pub patient_name: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_patient_type")]
    pub patient_type: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub insurance: Option<String>,
}

impl Appointment {
    pub fn is_confirmed(&self) -> bool {
        self.status == "Confirmed"
    }
}

impl Record for Appointment {
    const KIND: &'static str = "Appointment";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
