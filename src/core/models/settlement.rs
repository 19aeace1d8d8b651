use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-member accounting line: what the member fronted, what their computed
/// share across all shared expenses is, and the net of the two. A positive
/// balance means the group owes the member; negative means the member owes.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberBalance {
    pub member_id: String,
    pub name: String,
    #[schema(value_type = String, example = "120.00")]
    pub paid_amount: Decimal,
    #[schema(value_type = String, example = "80.00")]
    pub should_pay_amount: Decimal,
    #[schema(value_type = String, example = "40.00")]
    pub balance: Decimal,
}

/// A recommended directed transfer between two members.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SettlementTransaction {
    pub from_member_id: String,
    pub from_name: String,
    pub to_member_id: String,
    pub to_name: String,
    #[schema(value_type = String, example = "40.00")]
    pub amount: Decimal,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SettlementSummary {
    pub ledger_id: String,
    pub ledger_name: String,
    #[schema(value_type = String, example = "300.00")]
    pub total_shared_expense: Decimal,
    #[schema(value_type = String, example = "55.00")]
    pub total_personal_expense: Decimal,
    /// One line per ledger member, in ledger member order.
    pub members: Vec<MemberBalance>,
    /// Applying these in order brings every balance to zero, up to the
    /// residual cents left by per-member rounding.
    pub transactions: Vec<SettlementTransaction>,
}
