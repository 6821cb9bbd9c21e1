// src/models/mod.rs

pub mod api;
pub mod app;
pub mod appointments;
pub mod dashboard;
pub mod doctors;
pub mod patients;

pub use api::{LoginRequest, MessageResponse, StatusUpdate, TokenResponse, VerifyResponse};
pub use app::AppState;
pub use appointments::Appointment;
pub use dashboard::DashboardStats;
pub use doctors::Doctor;
pub use patients::Patient;
