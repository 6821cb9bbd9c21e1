// src/api/mod.rs

pub mod handler;
pub mod middleware;
pub mod router;

pub use middleware::AdminSession;
pub use router::create_router;
