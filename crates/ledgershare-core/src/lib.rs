//! LedgerShare Core — Domain models, repository traits, notifications and
//! error types shared by every LedgerShare crate.

pub mod error;
pub mod models;
pub mod notify;
pub mod repository;
