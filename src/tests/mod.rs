mod settlement_tests;

use crate::core::services::LedgerService;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStore;

pub type TestService = LedgerService<InMemoryLogging, InMemoryStore, InMemoryCache>;

pub fn create_test_service() -> TestService {
    let storage = InMemoryStore::new();
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    LedgerService::new(storage, logging, cache)
}
