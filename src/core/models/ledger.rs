use super::member::Member;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A shared account book: a named expense-tracking context with its members.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Ledger {
    pub id: String,
    pub name: String,
    pub members: Vec<Member>,
}

impl Ledger {
    pub fn is_member(&self, member_id: &str) -> bool {
        self.members.iter().any(|m| m.id == member_id)
    }
}
