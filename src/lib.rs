pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::engine::SettlementEngine;
pub use crate::core::errors::SplitbookError;
pub use crate::core::services::LedgerService;
pub use crate::infrastructure::cache::in_memory::InMemoryCache;
pub use crate::infrastructure::logging::in_memory::InMemoryLogging;
pub use crate::infrastructure::storage::in_memory::InMemoryStore;

#[cfg(test)]
mod tests;
