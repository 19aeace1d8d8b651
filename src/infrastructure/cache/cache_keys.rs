pub fn settlement_key(ledger_id: &str) -> String {
    format!("settlement:{}", ledger_id)
}
