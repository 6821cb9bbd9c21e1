use crate::db::AdminStore;
use crate::services::SessionIssuer;

pub struct AppState {
    pub store: AdminStore,
    pub issuer: SessionIssuer,
}

impl AppState {
    pub fn new(store: AdminStore, issuer: SessionIssuer) -> Self {
        AppState { store, issuer }
    }
}
