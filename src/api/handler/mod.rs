// src/api/handler/mod.rs

pub mod appointments;
pub mod auth;
pub mod dashboard;
pub mod records;
