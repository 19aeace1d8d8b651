use axum::{Json, http::StatusCode, response::IntoResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::SplitbookError;
use crate::core::models::expense::{FundingSource, Participant};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateLedgerRequest {
    pub name: String,
    pub member_names: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct AddMemberRequest {
    pub name: String,
}

#[derive(Deserialize, ToSchema)]
pub struct RecordExpenseRequest {
    pub ledger_id: String,
    pub description: String,
    #[schema(value_type = String, example = "42.00")]
    pub amount: Decimal,
    pub recorded_by_id: String,
    pub payer_id: Option<String>,
    pub funding: FundingSource,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

#[derive(Deserialize, ToSchema)]
pub struct ListExpensesRequest {
    pub ledger_id: String,
    pub queried_by_id: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CalculateSettlementRequest {
    pub requested_by_id: String,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SplitbookError to implement IntoResponse
pub struct ApiError(pub SplitbookError);

impl From<SplitbookError> for ApiError {
    fn from(err: SplitbookError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            SplitbookError::LedgerNotFound(_) | SplitbookError::MemberNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            SplitbookError::NotLedgerMember(_) => StatusCode::FORBIDDEN,
            SplitbookError::InvalidAmount
            | SplitbookError::InvalidShareRatio
            | SplitbookError::InvalidInput(_, _) => StatusCode::BAD_REQUEST,
            SplitbookError::UnknownParticipant(_, _)
            | SplitbookError::InvalidShareTotal(_)
            | SplitbookError::StorageError(_)
            | SplitbookError::LoggingError(_)
            | SplitbookError::CacheError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
