use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::balance::{compute_balances, Balances};
use crate::error::Result;
use crate::schemas::{Expense, Participant, ParticipantId};

// Balances closer to zero than this are treated as settled
const BALANCE_EPSILON: f64 = 1e-9;
// Transfers at or below one cent are not worth proposing
const MIN_TRANSFER: f64 = 0.01;

#[derive(Clone, Debug)]
pub struct PersonalBalance {
    pub id: ParticipantId,
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: f64,
}

/// Matches the largest debts against the largest credits until one side
/// runs out.
///
/// Both lists keep balance-map order between equal balances, so the same
/// balances always produce the same transfers.
pub fn reduce_to_transfers(balances: &Balances) -> Vec<Transfer> {
    let mut debtors: Vec<PersonalBalance> = Vec::new();
    let mut creditors: Vec<PersonalBalance> = Vec::new();

    for (id, balance) in balances.iter() {
        let person = PersonalBalance {
            id: id.clone(),
            balance,
        };
        if balance < -BALANCE_EPSILON {
            debtors.push(person);
        } else if balance > BALANCE_EPSILON {
            creditors.push(person);
        }
    }

    // `sort_by` is stable, ties stay in insertion order
    debtors.sort_by(|a, b| a.balance.total_cmp(&b.balance));
    creditors.sort_by(|a, b| b.balance.total_cmp(&a.balance));

    let mut transfers = Vec::new();
    let (mut d, mut c) = (0, 0);

    while d < debtors.len() && c < creditors.len() {
        let debt = debtors[d].balance.abs();
        let credit = creditors[c].balance;
        let amount = debt.min(credit);

        if amount > MIN_TRANSFER {
            transfers.push(Transfer {
                from: debtors[d].id.clone(),
                to: creditors[c].id.clone(),
                amount: round_to_2_decimals(amount),
            });
        }

        if debt == credit {
            d += 1;
            c += 1;
        } else if debt < credit {
            creditors[c].balance -= debt;
            d += 1;
        } else {
            debtors[d].balance += credit;
            c += 1;
        }
    }

    debug!(
        debtors = debtors.len(),
        creditors = creditors.len(),
        transfers = transfers.len(),
        "reduced balances to transfers"
    );
    transfers
}

fn round_to_2_decimals(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

/// Balances and transfers in one go, for callers that only need the
/// settlement.
pub fn calculate_balances(
    participants: &[Participant],
    expenses: &[Expense],
) -> Result<Vec<Transfer>> {
    let balances = compute_balances(participants, expenses)?;
    Ok(reduce_to_transfers(&balances))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balances(entries: &[(&str, f64)]) -> Balances {
        let mut balances = Balances::new();
        for (id, amount) in entries {
            balances.credit(id, *amount);
        }
        balances
    }

    fn transfer(from: &str, to: &str, amount: f64) -> Transfer {
        Transfer {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        }
    }

    #[test]
    fn single_debt() {
        let transfers = reduce_to_transfers(&balances(&[("a", 50.0), ("b", -50.0)]));
        assert_eq!(transfers, [transfer("b", "a", 50.0)]);
    }

    #[test]
    fn equal_debtors_keep_insertion_order() {
        let transfers =
            reduce_to_transfers(&balances(&[("a", 60.0), ("b", -30.0), ("c", -30.0)]));
        assert_eq!(transfers, [transfer("b", "a", 30.0), transfer("c", "a", 30.0)]);

        let transfers =
            reduce_to_transfers(&balances(&[("a", 60.0), ("c", -30.0), ("b", -30.0)]));
        assert_eq!(transfers, [transfer("c", "a", 30.0), transfer("b", "a", 30.0)]);
    }

    #[test]
    fn largest_debt_meets_largest_credit_first() {
        let transfers = reduce_to_transfers(&balances(&[
            ("a", 10.0),
            ("b", 40.0),
            ("c", -5.0),
            ("d", -45.0),
        ]));
        assert_eq!(
            transfers,
            [
                transfer("d", "b", 40.0),
                transfer("d", "a", 5.0),
                transfer("c", "a", 5.0),
            ]
        );
    }

    #[test]
    fn settled_balances_produce_nothing() {
        assert!(reduce_to_transfers(&balances(&[("a", 0.0), ("b", 0.0)])).is_empty());
        assert!(reduce_to_transfers(&Balances::new()).is_empty());
    }

    #[test]
    fn near_zero_balances_are_ignored() {
        let transfers = reduce_to_transfers(&balances(&[("a", 1e-12), ("b", -1e-12)]));
        assert!(transfers.is_empty());
    }

    #[test]
    fn cent_sized_remainders_are_dropped() {
        let transfers = reduce_to_transfers(&balances(&[("a", 0.01), ("b", -0.01)]));
        assert!(transfers.is_empty());
    }

    #[test]
    fn amounts_are_rounded_to_cents() {
        let transfers = reduce_to_transfers(&balances(&[
            ("a", 20.0 / 3.0 * 2.0),
            ("b", -20.0 / 3.0),
            ("c", -20.0 / 3.0),
        ]));
        assert_eq!(transfers, [transfer("b", "a", 6.67), transfer("c", "a", 6.67)]);
    }

    #[test]
    fn composes_with_accumulator() {
        let participants = vec![
            Participant {
                id: "a".to_string(),
                name: "A".to_string(),
            },
            Participant {
                id: "b".to_string(),
                name: "B".to_string(),
            },
        ];
        assert!(calculate_balances(&participants, &[]).unwrap().is_empty());
    }
}
