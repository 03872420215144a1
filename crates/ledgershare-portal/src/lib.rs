//! LedgerShare Portal — Client and document registries plus the derived
//! views (filters, orderings, aggregates) the presentation layer renders.

pub mod clients;
pub mod config;
pub mod dashboard;
pub mod documents;
pub mod views;

pub use clients::ClientRegistry;
pub use config::{ClientDeletePolicy, RegistryConfig};
pub use dashboard::{AccountantDashboard, ClientDashboard, TopClient};
pub use documents::DocumentRegistry;
