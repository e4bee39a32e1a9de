//! In-memory state of a group: who takes part and what was spent.
//!
//! Nothing here is persisted. The balances and transfers are recomputed
//! from the two lists on every call.
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::balance::{compute_balances, Balances};
use crate::error::{Result, SplitError};
use crate::exchange::{calculate_balances, Transfer};
use crate::ids::IdSupplier;
use crate::schemas::{Expense, NewExpenseJson, Participant};
use crate::validation::{validate_expense, validate_participant_name};

pub const UNKNOWN_PARTICIPANT: &str = "Unknown";

pub struct Ledger {
    participants: Vec<Participant>,
    // Newest first
    expenses: Vec<Expense>,
    ids: Arc<dyn IdSupplier>,
}

impl Ledger {
    pub fn new(ids: Arc<dyn IdSupplier>) -> Self {
        Ledger {
            participants: Vec::new(),
            expenses: Vec::new(),
            ids,
        }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn add_participant(&mut self, name: &str) -> Result<Participant> {
        let participant = Participant {
            id: self.ids.next_id(),
            name: validate_participant_name(name)?,
        };
        info!(id = %participant.id, name = %participant.name, "participant added");
        self.participants.push(participant.clone());
        Ok(participant)
    }

    /// Removes a participant from the group. Expenses that already list
    /// them keep their snapshot, so their debts still count.
    pub fn remove_participant(&mut self, id: &str) -> Result<Participant> {
        let position = self
            .participants
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| SplitError::ParticipantNotFound(id.to_string()))?;
        let participant = self.participants.remove(position);
        info!(id = %participant.id, "participant removed");
        Ok(participant)
    }

    pub fn add_expense(&mut self, request: &NewExpenseJson) -> Result<Expense> {
        let valid = validate_expense(request, &self.participants)?;
        let expense = Expense {
            id: self.ids.next_id(),
            description: valid.description,
            amount: valid.amount,
            paid_by: valid.paid_by,
            date: Utc::now(),
            participants: valid.participants,
        };
        info!(
            id = %expense.id,
            amount = expense.amount,
            paid_by = %expense.paid_by,
            shared_by = expense.participants.len(),
            "expense added"
        );
        self.expenses.insert(0, expense.clone());
        Ok(expense)
    }

    pub fn participant_name(&self, id: &str) -> &str {
        self.participants
            .iter()
            .find(|p| p.id == id)
            .map_or(UNKNOWN_PARTICIPANT, |p| p.name.as_str())
    }

    pub fn balances(&self) -> Result<Balances> {
        compute_balances(&self.participants, &self.expenses)
    }

    pub fn transfers(&self) -> Result<Vec<Transfer>> {
        calculate_balances(&self.participants, &self.expenses)
    }
}
