//! Human readable views of the settlement and of the expense log.
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::exchange::Transfer;
use crate::ledger::Ledger;
use crate::schemas::ParticipantId;

pub const ALL_SETTLED: &str = "All settled up!";
pub const NO_EXPENSES: &str = "No expenses yet";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SettlementLine {
    pub from: ParticipantId,
    pub from_name: String,
    pub to: ParticipantId,
    pub to_name: String,
    pub amount: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpenseLine {
    pub id: String,
    pub description: String,
    pub paid_by: String,
    pub date: DateTime<Utc>,
    pub amount: String,
    pub participants: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub settlement: Vec<SettlementLine>,
    pub settlement_message: Option<String>,
    pub history: Vec<ExpenseLine>,
    pub history_message: Option<String>,
}

pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn settlement_lines(transfers: &[Transfer], ledger: &Ledger) -> Vec<SettlementLine> {
    transfers
        .iter()
        .map(|transfer| {
            let from_name = ledger.participant_name(&transfer.from).to_string();
            let to_name = ledger.participant_name(&transfer.to).to_string();
            let amount = format_amount(transfer.amount);
            SettlementLine {
                text: format!("{from_name} owes {to_name} {amount}"),
                from: transfer.from.clone(),
                from_name,
                to: transfer.to.clone(),
                to_name,
                amount,
            }
        })
        .collect()
}

pub fn history_lines(ledger: &Ledger) -> Vec<ExpenseLine> {
    ledger
        .expenses()
        .iter()
        .map(|expense| ExpenseLine {
            id: expense.id.clone(),
            description: expense.description.clone(),
            paid_by: format!("Paid by {}", ledger.participant_name(&expense.paid_by)),
            date: expense.date,
            amount: format_amount(expense.amount),
            participants: format!("{} participants", expense.participants.len()),
        })
        .collect()
}

pub fn summarize(ledger: &Ledger) -> Result<Summary> {
    let settlement = settlement_lines(&ledger.transfers()?, ledger);
    let history = history_lines(ledger);
    Ok(Summary {
        settlement_message: settlement.is_empty().then(|| ALL_SETTLED.to_string()),
        settlement,
        history_message: history.is_empty().then(|| NO_EXPENSES.to_string()),
        history,
    })
}
