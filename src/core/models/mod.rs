pub mod audit;
pub mod expense;
pub mod ledger;
pub mod member;
pub mod settlement;
