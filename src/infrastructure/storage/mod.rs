use crate::core::errors::SplitbookError;
use crate::core::models::{expense::Expense, ledger::Ledger};
use async_trait::async_trait;

/// Boundary to the ledger data. Authorization inputs (`is_member`) live here;
/// the engine itself only ever sees a pre-fetched snapshot.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn save_ledger(&self, ledger: Ledger) -> Result<(), SplitbookError>;
    async fn get_ledger(&self, ledger_id: &str) -> Result<Option<Ledger>, SplitbookError>;
    async fn is_member(&self, ledger_id: &str, member_id: &str) -> Result<bool, SplitbookError>;
    async fn save_expense(&self, expense: Expense) -> Result<(), SplitbookError>;
    async fn get_expenses(&self, ledger_id: &str) -> Result<Vec<Expense>, SplitbookError>;
}

pub mod in_memory;
