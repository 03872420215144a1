//! LedgerShare Auth — Session store: login, signup, logout, profile edits
//! and session persistence across reloads.

pub mod config;
pub mod error;
pub mod service;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{LoginInput, SessionService, SignupInput};
