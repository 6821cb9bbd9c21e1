// src/services/auth_service/mod.rs
pub mod issue_token;
pub mod session;
pub mod verify_token;

pub use issue_token::IssuedToken;
pub use session::{Claims, SessionIssuer};
