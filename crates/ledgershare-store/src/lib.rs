//! LedgerShare Store — In-memory repository implementations with
//! simulated backend latency, seed data, and device session storage.
//!
//! This crate provides:
//! - Repository implementations for the `ledgershare-core` traits
//!   ([`InMemoryIdentityRepository`], [`InMemoryClientRepository`],
//!   [`InMemoryDocumentRepository`])
//! - Session storage backends ([`MemorySessionStorage`],
//!   [`FileSessionStorage`])
//! - Seed data and a one-call backend builder ([`InMemoryBackend`])

mod config;
mod error;
mod latency;
pub mod repository;
pub mod seed;
mod storage;

pub use config::StoreConfig;
pub use error::StoreError;
pub use latency::Latency;
pub use repository::{
    InMemoryClientRepository, InMemoryDocumentRepository, InMemoryIdentityRepository,
};
pub use seed::InMemoryBackend;
pub use storage::{FileSessionStorage, MemorySessionStorage};
