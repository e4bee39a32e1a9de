//! Input checks for participants and expenses.
//!
//! Every check returns a [`ValidationError`] describing why the input was
//! refused; how the reason is shown to the user is up to the caller.
use thiserror::Error;

use crate::schemas::{ExpenseParticipant, NewExpenseJson, Participant, ParticipantId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Please enter a name")]
    EmptyName,
    #[error("Amount must be a positive number, got {0}")]
    NonPositiveAmount(f64),
    #[error("Payer \"{0}\" is not a participant")]
    UnknownPayer(ParticipantId),
    #[error("Participant \"{0}\" is not part of the group")]
    UnknownParticipant(ParticipantId),
    #[error("An expense needs at least one participant")]
    NoParticipants,
}

/// An expense that passed validation, waiting for an id and a date.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidExpense {
    pub description: String,
    pub amount: f64,
    pub paid_by: ParticipantId,
    pub participants: Vec<ExpenseParticipant>,
}

/// Returns the trimmed name, refusing blank ones.
pub fn validate_participant_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

pub fn validate_expense(
    request: &NewExpenseJson,
    participants: &[Participant],
) -> Result<ValidExpense, ValidationError> {
    let description = request.description.trim();
    let (amount, paid_by) = match request.amount {
        Some(amount) if !description.is_empty() && !request.paid_by.is_empty() => {
            (amount, request.paid_by.clone())
        }
        _ => return Err(ValidationError::MissingFields),
    };
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::NonPositiveAmount(amount));
    }
    if !participants.iter().any(|p| p.id == paid_by) {
        return Err(ValidationError::UnknownPayer(paid_by));
    }

    let snapshot = match &request.participants {
        None => participants.iter().map(ExpenseParticipant::from).collect(),
        Some(ids) => snapshot_of(ids, participants)?,
    };
    if snapshot.is_empty() {
        return Err(ValidationError::NoParticipants);
    }

    Ok(ValidExpense {
        description: description.to_string(),
        amount,
        paid_by,
        participants: snapshot,
    })
}

// Resolves the selected ids in request order, ignoring repeats.
fn snapshot_of(
    ids: &[ParticipantId],
    participants: &[Participant],
) -> Result<Vec<ExpenseParticipant>, ValidationError> {
    let mut snapshot: Vec<ExpenseParticipant> = Vec::with_capacity(ids.len());
    for id in ids {
        if snapshot.iter().any(|p| &p.id == id) {
            continue;
        }
        let participant = participants
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| ValidationError::UnknownParticipant(id.clone()))?;
        snapshot.push(participant.into());
    }
    Ok(snapshot)
}
