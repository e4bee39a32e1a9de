use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ParticipantId = String;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

/// A participant as recorded inside an expense when it was created.
///
/// `share` is carried along with the snapshot but balances always use an
/// equal split.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ExpenseParticipant {
    pub id: ParticipantId,
    pub name: String,
    pub share: f64,
}

impl From<&Participant> for ExpenseParticipant {
    fn from(participant: &Participant) -> Self {
        ExpenseParticipant {
            id: participant.id.clone(),
            name: participant.name.clone(),
            share: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub paid_by: ParticipantId,
    pub date: DateTime<Utc>,
    pub participants: Vec<ExpenseParticipant>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ParticipantNameJson {
    #[serde(default)]
    pub name: String,
}

/// Body of `POST /expenses`. Every field is optional on the wire so that
/// missing ones surface as a validation error instead of a JSON error.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpenseJson {
    #[serde(default)]
    pub description: String,
    pub amount: Option<f64>,
    #[serde(default)]
    pub paid_by: String,
    // Ids of the people sharing the expense, everyone when omitted
    pub participants: Option<Vec<ParticipantId>>,
}
