//! In-memory repository implementations.
//!
//! Each repository owns a [`Table`] behind a `tokio` read-write lock.
//! Cloning a repository shares the table. Writes await the configured
//! [`Latency`](crate::Latency) before taking the lock, then check and
//! mutate under a single write guard.

mod client;
mod document;
mod identity;

pub use client::InMemoryClientRepository;
pub use document::InMemoryDocumentRepository;
pub use identity::InMemoryIdentityRepository;

/// A record addressable by a string ID.
pub(crate) trait Record {
    fn record_id(&self) -> &str;
}

/// Rows in insertion order plus the ID sequence that feeds them.
///
/// IDs are decimal strings drawn from a counter that only moves forward,
/// so removing rows never makes an ID available again.
#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: Vec<T>,
    last_id: u64,
}

impl<T: Record> Table<T> {
    pub(crate) fn new(rows: Vec<T>) -> Self {
        let last_id = rows
            .iter()
            .filter_map(|row| row.record_id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { rows, last_id }
    }

    pub(crate) fn next_id(&mut self) -> String {
        self.last_id += 1;
        self.last_id.to_string()
    }

    pub(crate) fn rows(&self) -> &[T] {
        &self.rows
    }

    pub(crate) fn push(&mut self, row: T) {
        self.rows.push(row);
    }

    pub(crate) fn find(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.record_id() == id)
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.record_id() == id)
    }

    /// Remove the row with `id`, returning whether one existed.
    pub(crate) fn remove(&mut self, id: &str) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.record_id() != id);
        self.rows.len() != before
    }

    /// Remove every row matching `pred`, returning how many were removed.
    pub(crate) fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !pred(row));
        before - self.rows.len()
    }
}
