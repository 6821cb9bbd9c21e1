// src/models/api/mod.rs

pub mod params;

pub use params::{LoginRequest, MessageResponse, StatusUpdate, TokenResponse, VerifyResponse};
