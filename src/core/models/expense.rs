use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum FundingSource {
    /// Paid from common funds, subject to settlement among members.
    Shared,
    /// Attributable to one member only, excluded from settlement.
    Personal,
}

/// An (expense, member) pairing with a relative weight. The set of
/// participants for an expense, if non-empty, restricts who owes on it;
/// if empty, all ledger members owe equally.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    pub member_id: String,
    #[schema(value_type = String, example = "1.5")]
    pub share_ratio: Decimal,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    pub id: String,
    pub ledger_id: String,
    pub description: String,
    #[schema(value_type = String, example = "42.00")]
    pub amount: Decimal,
    /// Member who recorded the expense.
    pub owner_id: String,
    /// Member who fronted the money, when distinct from the owner.
    pub payer_id: Option<String>,
    pub funding: FundingSource,
    pub participants: Vec<Participant>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Expense {
    /// The payer falls back to the owner when no distinct payer is recorded.
    pub fn payer(&self) -> &str {
        self.payer_id.as_deref().unwrap_or(&self.owner_id)
    }
}
