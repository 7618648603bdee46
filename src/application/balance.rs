use crate::domain::expense::Expense;
use crate::domain::participant::{Participant, ParticipantId};
use crate::domain::settlement::{BalanceEntry, Balances};
use crate::error::{Result, SplitError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Computes paid, owed and net for every participant, in participant-list
/// order. Participants without any activity get an all-zero entry.
///
/// Shares are kept at full precision; rounding is left to whoever renders
/// or settles the result.
///
/// # Errors
///
/// * `DegenerateSplit` if an expense is split among nobody.
/// * `UnknownParticipant` if an expense names a payer or beneficiary that
///   is not in `participants`.
/// * `AmountOverflow` if a running total leaves the `Decimal` range.
pub fn balance_sheet(
    participants: &[Participant],
    expenses: &[Expense],
) -> Result<Vec<BalanceEntry>> {
    let mut entries: Vec<BalanceEntry> = Vec::with_capacity(participants.len());
    let mut index: HashMap<&ParticipantId, usize> = HashMap::with_capacity(participants.len());
    for participant in participants {
        index.entry(&participant.id).or_insert_with(|| {
            entries.push(BalanceEntry {
                participant: participant.id.clone(),
                paid: Decimal::ZERO,
                owed: Decimal::ZERO,
                net: Decimal::ZERO,
            });
            entries.len() - 1
        });
    }

    let slot = |expense: &Expense, id: &ParticipantId| -> Result<usize> {
        index
            .get(id)
            .copied()
            .ok_or_else(|| SplitError::UnknownParticipant {
                expense: expense.id.clone(),
                participant: id.clone(),
            })
    };

    for expense in expenses {
        let beneficiaries = expense.beneficiaries();
        if beneficiaries.is_empty() {
            return Err(SplitError::DegenerateSplit(expense.id.clone()));
        }
        let payer = slot(expense, &expense.paid_by)?;
        let shares = beneficiaries
            .iter()
            .map(|id| slot(expense, *id))
            .collect::<Result<Vec<usize>>>()?;

        let amount = expense.amount.value();
        let overflow = || SplitError::AmountOverflow(expense.id.clone());
        entries[payer].paid = entries[payer].paid.checked_add(amount).ok_or_else(overflow)?;

        let share = amount / Decimal::from(shares.len());
        for i in shares {
            entries[i].owed = entries[i].owed.checked_add(share).ok_or_else(overflow)?;
        }
    }

    // paid and owed are both non-negative, so the difference always fits
    for entry in &mut entries {
        entry.net = entry.paid - entry.owed;
    }
    Ok(entries)
}

/// Net balance per participant. See [`balance_sheet`] for the error cases.
pub fn compute_balances(participants: &[Participant], expenses: &[Expense]) -> Result<Balances> {
    Ok(balance_sheet(participants, expenses)?
        .into_iter()
        .map(|entry| (entry.participant, entry.net))
        .collect())
}
