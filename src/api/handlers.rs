use crate::{
    api::models::*,
    core::{
        models::{
            audit::AppLog, expense::Expense, ledger::Ledger, member::Member,
            settlement::SettlementSummary,
        },
        services::LedgerService,
    },
    infrastructure::{
        cache::in_memory::InMemoryCache, logging::in_memory::InMemoryLogging,
        storage::in_memory::InMemoryStore,
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

type AppService = Arc<LedgerService<InMemoryLogging, InMemoryStore, InMemoryCache>>;

// Define API routes
pub fn api_routes(service: AppService) -> Router {
    Router::new()
        .route("/ledgers", axum::routing::post(create_ledger))
        .route("/ledgers/{ledger_id}", axum::routing::get(get_ledger))
        .route(
            "/ledgers/{ledger_id}/members",
            axum::routing::post(add_member),
        )
        .route(
            "/ledgers/{ledger_id}/settlement",
            axum::routing::post(calculate_settlement),
        )
        .route("/expenses", axum::routing::post(record_expense))
        .route("/expenses/list", axum::routing::post(list_expenses))
        .route("/logs", axum::routing::get(get_app_logs))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/ledgers",
    request_body = CreateLedgerRequest,
    responses(
        (status = 201, description = "Ledger created", body = Ledger),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_ledger(
    State(service): State<AppService>,
    Json(req): Json<CreateLedgerRequest>,
) -> Result<(StatusCode, Json<Ledger>), ApiError> {
    let ledger = service.create_ledger(req.name, req.member_names).await?;
    Ok((StatusCode::CREATED, Json(ledger)))
}

#[utoipa::path(
    get,
    path = "/api/ledgers/{ledger_id}",
    responses(
        (status = 200, description = "Ledger found", body = Ledger),
        (status = 404, description = "Ledger not found", body = ErrorResponse)
    )
)]
pub async fn get_ledger(
    State(service): State<AppService>,
    Path(ledger_id): Path<String>,
) -> Result<Json<Ledger>, ApiError> {
    let ledger = service.get_ledger(&ledger_id).await?;
    Ok(Json(ledger))
}

#[utoipa::path(
    post,
    path = "/api/ledgers/{ledger_id}/members",
    request_body = AddMemberRequest,
    responses(
        (status = 201, description = "Member added", body = Member),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Ledger not found", body = ErrorResponse)
    )
)]
pub async fn add_member(
    State(service): State<AppService>,
    Path(ledger_id): Path<String>,
    Json(req): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<Member>), ApiError> {
    let member = service.add_member(&ledger_id, req.name).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    post,
    path = "/api/expenses",
    request_body = RecordExpenseRequest,
    responses(
        (status = 201, description = "Expense recorded", body = Expense),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 403, description = "Not a ledger member", body = ErrorResponse),
        (status = 404, description = "Ledger not found", body = ErrorResponse)
    )
)]
pub async fn record_expense(
    State(service): State<AppService>,
    Json(req): Json<RecordExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = service
        .record_expense(
            &req.ledger_id,
            &req.recorded_by_id,
            req.description,
            req.amount,
            req.funding,
            req.payer_id,
            req.participants,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

#[utoipa::path(
    post,
    path = "/api/expenses/list",
    request_body = ListExpensesRequest,
    responses(
        (status = 200, description = "Expenses for the ledger", body = Vec<Expense>),
        (status = 403, description = "Not a ledger member", body = ErrorResponse),
        (status = 404, description = "Ledger not found", body = ErrorResponse)
    )
)]
pub async fn list_expenses(
    State(service): State<AppService>,
    Json(req): Json<ListExpensesRequest>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = service
        .list_expenses(&req.ledger_id, &req.queried_by_id)
        .await?;
    Ok(Json(expenses))
}

#[utoipa::path(
    post,
    path = "/api/ledgers/{ledger_id}/settlement",
    request_body = CalculateSettlementRequest,
    responses(
        (status = 200, description = "Settlement calculated", body = SettlementSummary),
        (status = 403, description = "Requester is not a ledger member", body = ErrorResponse),
        (status = 404, description = "Ledger not found", body = ErrorResponse),
        (status = 500, description = "Data integrity fault", body = ErrorResponse)
    )
)]
pub async fn calculate_settlement(
    State(service): State<AppService>,
    Path(ledger_id): Path<String>,
    Json(req): Json<CalculateSettlementRequest>,
) -> Result<Json<SettlementSummary>, ApiError> {
    let summary = service.settle(&ledger_id, &req.requested_by_id).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Application logs", body = Vec<AppLog>)
    )
)]
pub async fn get_app_logs(State(service): State<AppService>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}
