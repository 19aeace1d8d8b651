use crate::config::CONFIG;
use crate::constants::{
    EXPENSE_RECORDED, EXPENSES_QUERIED, LEDGER_CREATED, MEMBER_ADDED, SETTLEMENT_CALCULATED,
};
use crate::core::engine::{SettlementEngine, round_money};
use crate::core::errors::SplitbookError;
use crate::core::models::{
    audit::AppLog,
    expense::{Expense, FundingSource, Participant},
    ledger::Ledger,
    member::Member,
    settlement::SettlementSummary,
};
use crate::infrastructure::cache::Cache;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::LedgerStore;
use chrono::Utc;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

pub struct LedgerService<L: LoggingService, S: LedgerStore, C: Cache> {
    storage: S,
    logging: L,
    cache: C,
}

impl<L: LoggingService, S: LedgerStore, C: Cache> LedgerService<L, S, C> {
    pub fn new(storage: S, logging: L, cache: C) -> Self {
        info!("Initializing LedgerService");
        LedgerService {
            storage,
            logging,
            cache,
        }
    }

    // LEDGER & MEMBER MANAGEMENT

    pub async fn create_ledger(
        &self,
        name: String,
        member_names: Vec<String>,
    ) -> Result<Ledger, SplitbookError> {
        info!("Creating ledger '{}' with {} members", name, member_names.len());
        self.validate_string_input("name", &name)?;
        if member_names.is_empty() {
            return Err(SplitbookError::InvalidInput(
                "member_names".to_string(),
                "a ledger needs at least one member".to_string(),
            ));
        }
        for member_name in &member_names {
            self.validate_string_input("member_names", member_name)?;
        }

        let ledger = Ledger {
            id: Uuid::new_v4().to_string(),
            name,
            members: member_names
                .into_iter()
                .map(|member_name| Member {
                    id: Uuid::new_v4().to_string(),
                    name: member_name,
                })
                .collect(),
        };

        self.storage.save_ledger(ledger.clone()).await?;
        debug!("Ledger created with ID: {}", ledger.id);

        self.logging
            .log_action(
                LEDGER_CREATED,
                json!({ "ledger_id": ledger.id, "members": ledger.members.len() }),
                None,
            )
            .await?;

        Ok(ledger)
    }

    pub async fn get_ledger(&self, ledger_id: &str) -> Result<Ledger, SplitbookError> {
        self.storage
            .get_ledger(ledger_id)
            .await?
            .ok_or_else(|| SplitbookError::LedgerNotFound(ledger_id.to_string()))
    }

    pub async fn add_member(
        &self,
        ledger_id: &str,
        name: String,
    ) -> Result<Member, SplitbookError> {
        info!("Adding member '{}' to ledger {}", name, ledger_id);
        self.validate_string_input("name", &name)?;
        let mut ledger = self.get_ledger(ledger_id).await?;

        let member = Member {
            id: Uuid::new_v4().to_string(),
            name,
        };
        ledger.members.push(member.clone());
        self.storage.save_ledger(ledger).await?;

        // Equal-split shares depend on the member count.
        self.cache.invalidate_settlement(ledger_id).await?;

        self.logging
            .log_action(
                MEMBER_ADDED,
                json!({ "ledger_id": ledger_id, "member_id": member.id }),
                Some(&member.id),
            )
            .await?;

        Ok(member)
    }

    // EXPENSE MANAGEMENT

    #[allow(clippy::too_many_arguments)]
    pub async fn record_expense(
        &self,
        ledger_id: &str,
        recorded_by: &str,
        description: String,
        amount: Decimal,
        funding: FundingSource,
        payer_id: Option<String>,
        participants: Vec<Participant>,
    ) -> Result<Expense, SplitbookError> {
        info!(
            "Recording expense in ledger {} by member {} for amount {}",
            ledger_id, recorded_by, amount
        );
        let ledger = self.validate_membership(ledger_id, recorded_by).await?;
        self.validate_string_input("description", &description)?;

        if amount <= Decimal::ZERO {
            warn!("Rejecting non-positive expense amount {}", amount);
            return Err(SplitbookError::InvalidAmount);
        }

        let payer = payer_id.as_deref().unwrap_or(recorded_by);
        if !ledger.is_member(payer) {
            warn!("Payer {} not in ledger {}", payer, ledger_id);
            return Err(SplitbookError::NotLedgerMember(payer.to_string()));
        }

        for participant in &participants {
            if !ledger.is_member(&participant.member_id) {
                warn!(
                    "Participant {} not in ledger {}",
                    participant.member_id, ledger_id
                );
                return Err(SplitbookError::NotLedgerMember(
                    participant.member_id.clone(),
                ));
            }
            if participant.share_ratio <= Decimal::ZERO {
                return Err(SplitbookError::InvalidShareRatio);
            }
        }

        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            ledger_id: ledger_id.to_string(),
            description,
            amount: round_money(amount),
            owner_id: recorded_by.to_string(),
            payer_id,
            funding,
            participants,
            created_at: Utc::now(),
        };

        self.storage.save_expense(expense.clone()).await?;
        self.cache.invalidate_settlement(ledger_id).await?;
        debug!("Expense recorded with ID: {}", expense.id);

        self.logging
            .log_action(
                EXPENSE_RECORDED,
                json!({
                    "expense_id": expense.id,
                    "ledger_id": ledger_id,
                    "amount": expense.amount,
                    "funding": expense.funding,
                }),
                Some(recorded_by),
            )
            .await?;

        Ok(expense)
    }

    pub async fn list_expenses(
        &self,
        ledger_id: &str,
        queried_by: &str,
    ) -> Result<Vec<Expense>, SplitbookError> {
        self.validate_membership(ledger_id, queried_by).await?;
        let expenses = self.storage.get_expenses(ledger_id).await?;

        self.logging
            .log_action(
                EXPENSES_QUERIED,
                json!({ "ledger_id": ledger_id, "count": expenses.len() }),
                Some(queried_by),
            )
            .await?;

        Ok(expenses)
    }

    // SETTLEMENT

    /// Computes the settlement for a ledger on behalf of one of its members.
    ///
    /// The requester must belong to the ledger; the check happens before any
    /// computation. The summary is cached per ledger and invalidated whenever
    /// a member or expense is added.
    pub async fn settle(
        &self,
        ledger_id: &str,
        requested_by: &str,
    ) -> Result<SettlementSummary, SplitbookError> {
        let ledger = self.get_ledger(ledger_id).await?;
        if !self.storage.is_member(ledger_id, requested_by).await? {
            warn!(
                "Member {} requested settlement for ledger {} without membership",
                requested_by, ledger_id
            );
            return Err(SplitbookError::NotLedgerMember(requested_by.to_string()));
        }

        if let Some(summary) = self.cache.get_settlement(ledger_id).await? {
            debug!("Serving cached settlement for ledger {}", ledger_id);
            return Ok(summary);
        }

        let expenses = self.storage.get_expenses(ledger_id).await?;
        let summary = SettlementEngine::settle(&ledger, &expenses)?;

        self.cache
            .save_settlement(
                ledger_id,
                &summary,
                std::time::Duration::from_secs(CONFIG.settlement_cache_ttl_secs),
            )
            .await?;

        self.logging
            .log_action(
                SETTLEMENT_CALCULATED,
                json!({
                    "ledger_id": ledger_id,
                    "transactions": summary.transactions.len(),
                    "total_shared_expense": summary.total_shared_expense,
                }),
                Some(requested_by),
            )
            .await?;

        Ok(summary)
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, SplitbookError> {
        self.logging.get_logs().await
    }

    // VALIDATION HELPERS

    async fn validate_membership(
        &self,
        ledger_id: &str,
        member_id: &str,
    ) -> Result<Ledger, SplitbookError> {
        let ledger = self.get_ledger(ledger_id).await?;
        if !ledger.is_member(member_id) {
            return Err(SplitbookError::NotLedgerMember(member_id.to_string()));
        }
        Ok(ledger)
    }

    fn validate_string_input(&self, field: &str, value: &str) -> Result<(), SplitbookError> {
        if value.trim().is_empty() {
            return Err(SplitbookError::InvalidInput(
                field.to_string(),
                "must not be empty".to_string(),
            ));
        }
        if value.len() > 255 {
            return Err(SplitbookError::InvalidInput(
                field.to_string(),
                "must be at most 255 characters".to_string(),
            ));
        }
        Ok(())
    }
}
