pub mod auth_service;
pub mod dashboard_service;

pub use auth_service::SessionIssuer;
pub use dashboard_service::compute_dashboard_stats;
