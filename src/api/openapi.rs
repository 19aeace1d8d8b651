use utoipa::OpenApi;

use crate::{
    api::models::{
        AddMemberRequest, CalculateSettlementRequest, CreateLedgerRequest, ErrorResponse,
        ListExpensesRequest, RecordExpenseRequest,
    },
    core::models::{
        audit::AppLog,
        expense::{Expense, FundingSource, Participant},
        ledger::Ledger,
        member::Member,
        settlement::{MemberBalance, SettlementSummary, SettlementTransaction},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_ledger,
        super::handlers::get_ledger,
        super::handlers::add_member,
        super::handlers::record_expense,
        super::handlers::list_expenses,
        super::handlers::calculate_settlement,
        super::handlers::get_app_logs
    ),
    components(schemas(
        CreateLedgerRequest,
        AddMemberRequest,
        RecordExpenseRequest,
        ListExpensesRequest,
        CalculateSettlementRequest,
        ErrorResponse,
        Member,
        Ledger,
        Expense,
        FundingSource,
        Participant,
        MemberBalance,
        SettlementTransaction,
        SettlementSummary,
        AppLog
    )),
    info(
        title = "Splitbook API",
        description = "API for shared ledgers, expenses and settlement calculation",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
