/// Fractional digits for all monetary amounts.
pub const MONEY_SCALE: u32 = 2;

// Action names for the structured application log.
pub const LEDGER_CREATED: &str = "ledger_created";
pub const MEMBER_ADDED: &str = "member_added";
pub const EXPENSE_RECORDED: &str = "expense_recorded";
pub const EXPENSES_QUERIED: &str = "expenses_queried";
pub const SETTLEMENT_CALCULATED: &str = "settlement_calculated";
