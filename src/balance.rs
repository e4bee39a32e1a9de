use std::collections::HashMap;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Result, SplitError};
use crate::schemas::{Expense, Participant, ParticipantId};

/// Net position of every participant, positive when they are owed money.
///
/// Entries iterate in insertion order. Reading an id that was never
/// inserted yields a zero balance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Balances {
    entries: Vec<(ParticipantId, f64)>,
    index: HashMap<ParticipantId, usize>,
}

impl Balances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts every participant at zero, in list order.
    pub fn for_participants(participants: &[Participant]) -> Self {
        let mut balances = Self::new();
        for participant in participants {
            balances.slot(&participant.id);
        }
        balances
    }

    pub fn get(&self, id: &str) -> f64 {
        self.index.get(id).map_or(0.0, |&i| self.entries[i].1)
    }

    pub fn credit(&mut self, id: &str, amount: f64) {
        *self.slot(id) += amount;
    }

    pub fn debit(&mut self, id: &str, amount: f64) {
        *self.slot(id) -= amount;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, f64)> {
        self.entries.iter().map(|(id, balance)| (id, *balance))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, balance)| balance).sum()
    }

    fn slot(&mut self, id: &str) -> &mut f64 {
        let i = match self.index.get(id) {
            Some(&i) => i,
            None => {
                self.entries.push((id.to_string(), 0.0));
                self.index.insert(id.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[i].1
    }
}

impl Serialize for Balances {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Folds the expense log into a balance per participant.
///
/// Each expense is split equally between the people in its snapshot. Ids
/// that only appear inside expenses, such as removed participants, are
/// appended after the known participants.
pub fn compute_balances(participants: &[Participant], expenses: &[Expense]) -> Result<Balances> {
    let mut balances = Balances::for_participants(participants);

    for expense in expenses {
        if expense.participants.is_empty() {
            return Err(SplitError::InvalidExpense(format!(
                "expense {} has no participants",
                expense.id
            )));
        }
        if !expense.amount.is_finite() || expense.amount <= 0.0 {
            return Err(SplitError::InvalidExpense(format!(
                "expense {} has a non-positive amount {}",
                expense.id, expense.amount
            )));
        }

        // The payer's own share cancels against the credit, leaving them
        // owed `amount - share` when they are part of the snapshot.
        balances.credit(&expense.paid_by, expense.amount);
        let amount_per_person = expense.amount / expense.participants.len() as f64;
        for beneficiary in &expense.participants {
            balances.debit(&beneficiary.id, amount_per_person);
        }
    }

    debug!(
        participants = balances.len(),
        expenses = expenses.len(),
        "computed balances"
    );
    Ok(balances)
}
