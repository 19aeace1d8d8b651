pub mod cache_keys;
pub mod in_memory;

use crate::core::errors::SplitbookError;
use crate::core::models::settlement::SettlementSummary;
use async_trait::async_trait;

#[async_trait]
pub trait Cache: Send + Sync {
    async fn get_settlement(
        &self,
        ledger_id: &str,
    ) -> Result<Option<SettlementSummary>, SplitbookError>;
    async fn save_settlement(
        &self,
        ledger_id: &str,
        summary: &SettlementSummary,
        ttl: std::time::Duration,
    ) -> Result<(), SplitbookError>;
    async fn invalidate_settlement(&self, ledger_id: &str) -> Result<(), SplitbookError>;
}
