use crate::core::errors::SplitbookError;
use crate::core::models::{expense::Expense, ledger::Ledger};
use crate::infrastructure::storage::LedgerStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

pub struct InMemoryStore {
    ledgers: Mutex<HashMap<String, Ledger>>,
    expenses: Mutex<HashMap<String, Expense>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            ledgers: Mutex::new(HashMap::new()),
            expenses: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerStore for InMemoryStore {
    async fn save_ledger(&self, ledger: Ledger) -> Result<(), SplitbookError> {
        self.ledgers.lock().await.insert(ledger.id.clone(), ledger);
        Ok(())
    }

    async fn get_ledger(&self, ledger_id: &str) -> Result<Option<Ledger>, SplitbookError> {
        // For production: Add caching
        Ok(self.ledgers.lock().await.get(ledger_id).cloned())
    }

    async fn is_member(&self, ledger_id: &str, member_id: &str) -> Result<bool, SplitbookError> {
        Ok(self
            .ledgers
            .lock()
            .await
            .get(ledger_id)
            .map(|l| l.is_member(member_id))
            .unwrap_or(false))
    }

    async fn save_expense(&self, expense: Expense) -> Result<(), SplitbookError> {
        self.expenses.lock().await.insert(expense.id.clone(), expense);
        Ok(())
    }

    async fn get_expenses(&self, ledger_id: &str) -> Result<Vec<Expense>, SplitbookError> {
        // For production: Use database query with index
        let mut expenses: Vec<Expense> = self
            .expenses
            .lock()
            .await
            .values()
            .filter(|e| e.ledger_id == ledger_id)
            .cloned()
            .collect();
        // HashMap order is arbitrary; listings stay deterministic.
        expenses.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(expenses)
    }
}
