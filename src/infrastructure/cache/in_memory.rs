use crate::core::errors::SplitbookError;
use crate::core::models::settlement::SettlementSummary;
use crate::infrastructure::cache::Cache;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct InMemoryCache {
    cache: Arc<RwLock<HashMap<String, (SettlementSummary, chrono::DateTime<chrono::Utc>)>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache {
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_settlement(
        &self,
        ledger_id: &str,
    ) -> Result<Option<SettlementSummary>, SplitbookError> {
        let cache = self.cache.read().await;
        let key = crate::infrastructure::cache::cache_keys::settlement_key(ledger_id);
        Ok(cache
            .get(&key)
            .filter(|(_, expiry)| *expiry > chrono::Utc::now())
            .map(|(summary, _)| summary.clone()))
    }

    async fn save_settlement(
        &self,
        ledger_id: &str,
        summary: &SettlementSummary,
        ttl: std::time::Duration,
    ) -> Result<(), SplitbookError> {
        let mut cache = self.cache.write().await;
        let key = crate::infrastructure::cache::cache_keys::settlement_key(ledger_id);
        cache.insert(
            key,
            (
                summary.clone(),
                chrono::Utc::now()
                    + chrono::Duration::from_std(ttl)
                        .map_err(|e| SplitbookError::CacheError(format!("Failed to convert TTL: {}", e)))?,
            ),
        );
        Ok(())
    }

    async fn invalidate_settlement(&self, ledger_id: &str) -> Result<(), SplitbookError> {
        let mut cache = self.cache.write().await;
        let key = crate::infrastructure::cache::cache_keys::settlement_key(ledger_id);
        cache.remove(&key);
        Ok(())
    }
}
