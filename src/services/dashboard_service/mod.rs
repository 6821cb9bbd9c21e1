// src/services/dashboard_service/mod.rs

pub mod stats;

pub use stats::compute_dashboard_stats;
