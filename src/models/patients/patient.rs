use serde::{Deserialize, Serialize};

use crate::db::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub dob: String,
    pub phone: String,
    pub email: String,
    pub patient_type: String,
    #[serde(default)]
    pub insurance_carrier: Option<String>,
    #[serde(default)]
    pub member_id: Option<String>,
}

impl Patient {
    pub fn is_new(&self) -> bool {
        self.patient_type == "New"
    }
}

impl Record for Patient {
    const KIND: &'static str = "Patient";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
