use serde::{Deserialize, Serialize};

use crate::db::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub specialty: String,
    /// Time slots such as "09:30", in the order the clinic lists them.
    #[serde(default)]
    pub availability: Vec<String>,
}

impl Record for Doctor {
    const KIND: &'static str = "Doctor";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}
