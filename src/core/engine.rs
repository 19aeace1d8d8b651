use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::MONEY_SCALE;
use crate::core::errors::SplitbookError;
use crate::core::models::expense::{Expense, FundingSource};
use crate::core::models::ledger::Ledger;
use crate::core::models::settlement::{MemberBalance, SettlementSummary, SettlementTransaction};

/// Rounds a monetary value to two fractional digits, half-up.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Settlement over a fully materialized ledger snapshot. Stateless and pure:
/// it never writes, so concurrent invocations need no coordination.
pub struct SettlementEngine;

impl SettlementEngine {
    /// Computes per-member balances and the transfer list for a ledger.
    ///
    /// Only shared-pool expenses participate in balancing; personal expenses
    /// contribute to `total_personal_expense` and nothing else. Any integrity
    /// fault in the snapshot aborts the whole calculation: a settlement with
    /// only some expenses processed would be misleading.
    pub fn settle(ledger: &Ledger, expenses: &[Expense]) -> Result<SettlementSummary, SplitbookError> {
        let shared: Vec<&Expense> = expenses
            .iter()
            .filter(|e| e.funding == FundingSource::Shared)
            .collect();
        let total_shared_expense: Decimal = shared.iter().map(|e| e.amount).sum();
        let total_personal_expense: Decimal = expenses
            .iter()
            .filter(|e| e.funding == FundingSource::Personal)
            .map(|e| e.amount)
            .sum();

        let members = Self::member_balances(ledger, &shared)?;
        let transactions = Self::net_transfers(&members);

        Ok(SettlementSummary {
            ledger_id: ledger.id.clone(),
            ledger_name: ledger.name.clone(),
            total_shared_expense,
            total_personal_expense,
            members,
            transactions,
        })
    }

    fn member_balances(
        ledger: &Ledger,
        shared: &[&Expense],
    ) -> Result<Vec<MemberBalance>, SplitbookError> {
        let mut paid: HashMap<&str, Decimal> = HashMap::new();
        let mut should_pay: HashMap<&str, Decimal> = HashMap::new();

        for expense in shared {
            let payer = expense.payer();
            if !ledger.is_member(payer) {
                return Err(SplitbookError::UnknownParticipant(
                    expense.id.clone(),
                    payer.to_string(),
                ));
            }
            *paid.entry(payer).or_insert(Decimal::ZERO) += expense.amount;

            if expense.participants.is_empty() {
                // Equal split over every ledger member. Each share is rounded
                // independently; residual cents are not redistributed, so the
                // shares may sum to a few cents off the expense amount.
                let share =
                    round_money(expense.amount / Decimal::from(ledger.members.len() as u64));
                for member in &ledger.members {
                    *should_pay.entry(member.id.as_str()).or_insert(Decimal::ZERO) += share;
                }
            } else {
                let total_ratio: Decimal =
                    expense.participants.iter().map(|p| p.share_ratio).sum();
                if total_ratio <= Decimal::ZERO {
                    return Err(SplitbookError::InvalidShareTotal(expense.id.clone()));
                }
                for participant in &expense.participants {
                    if !ledger.is_member(&participant.member_id) {
                        return Err(SplitbookError::UnknownParticipant(
                            expense.id.clone(),
                            participant.member_id.clone(),
                        ));
                    }
                    let share =
                        round_money(expense.amount * participant.share_ratio / total_ratio);
                    *should_pay
                        .entry(participant.member_id.as_str())
                        .or_insert(Decimal::ZERO) += share;
                }
            }
        }

        Ok(ledger
            .members
            .iter()
            .map(|member| {
                let paid_amount = paid.get(member.id.as_str()).copied().unwrap_or(Decimal::ZERO);
                let should_pay_amount = should_pay
                    .get(member.id.as_str())
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                MemberBalance {
                    member_id: member.id.clone(),
                    name: member.name.clone(),
                    paid_amount,
                    should_pay_amount,
                    balance: paid_amount - should_pay_amount,
                }
            })
            .collect())
    }

    /// Greedy largest-pair-first netting: repeatedly match the largest
    /// creditor against the largest debtor for the smaller of the two
    /// remaining amounts. Not guaranteed minimal in the combinatorial sense,
    /// but polynomial and deterministic: the sorts are stable, so equal
    /// amounts keep ledger member order.
    fn net_transfers(balances: &[MemberBalance]) -> Vec<SettlementTransaction> {
        let mut receivers: Vec<(&MemberBalance, Decimal)> = balances
            .iter()
            .filter(|b| b.balance > Decimal::ZERO)
            .map(|b| (b, b.balance))
            .collect();
        let mut payers: Vec<(&MemberBalance, Decimal)> = balances
            .iter()
            .filter(|b| b.balance < Decimal::ZERO)
            .map(|b| (b, -b.balance))
            .collect();

        receivers.sort_by(|a, b| b.1.cmp(&a.1));
        payers.sort_by(|a, b| b.1.cmp(&a.1));

        let mut transactions = Vec::new();
        while !payers.is_empty() && !receivers.is_empty() {
            let amount = payers[0].1.min(receivers[0].1);

            if amount > Decimal::ZERO {
                transactions.push(SettlementTransaction {
                    from_member_id: payers[0].0.member_id.clone(),
                    from_name: payers[0].0.name.clone(),
                    to_member_id: receivers[0].0.member_id.clone(),
                    to_name: receivers[0].0.name.clone(),
                    amount,
                });
            }

            payers[0].1 -= amount;
            receivers[0].1 -= amount;

            if payers[0].1.is_zero() {
                payers.remove(0);
            }
            if receivers[0].1.is_zero() {
                receivers.remove(0);
            }
            payers.sort_by(|a, b| b.1.cmp(&a.1));
            receivers.sort_by(|a, b| b.1.cmp(&a.1));
        }

        transactions
    }
}
