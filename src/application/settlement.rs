use crate::config::SettlementConfig;
use crate::domain::participant::{Participant, ParticipantId};
use crate::domain::settlement::{Balances, Settlement};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::debug;

/// Outstanding magnitude for one side of the matching.
#[derive(Debug)]
struct Position<'a> {
    id: &'a ParticipantId,
    remaining: Decimal,
}

/// Plans the payments that bring every balance back to zero.
///
/// Debtors and creditors are matched greedily, largest debt against largest
/// credit, and each step settles as much as the smaller side allows. Ties
/// keep the order of `participants`, so identical input always yields the
/// same plan. Participants missing from `balances` count as settled.
///
/// Balances within `config.tolerance` of zero are ignored, and emitted
/// amounts are rounded to `config.scale` places. The input balances are
/// never modified; the matching runs on its own working copies.
pub fn plan_settlements(
    balances: &Balances,
    participants: &[Participant],
    config: &SettlementConfig,
) -> Vec<Settlement> {
    let tolerance = config.tolerance;
    let mut seen = HashSet::new();
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();

    for participant in participants {
        if !seen.insert(&participant.id) {
            continue;
        }
        let net = balances
            .get(&participant.id)
            .copied()
            .unwrap_or(Decimal::ZERO);
        if net < -tolerance {
            debtors.push(Position {
                id: &participant.id,
                remaining: -net,
            });
        } else if net > tolerance {
            creditors.push(Position {
                id: &participant.id,
                remaining: net,
            });
        }
    }

    // Stable sorts: equal magnitudes stay in participant order.
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let max_steps = debtors.len() + creditors.len();
    let mut settlements = Vec::new();
    let (mut i, mut j) = (0, 0);
    let mut steps = 0;

    while i < debtors.len() && j < creditors.len() && steps < max_steps {
        steps += 1;
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];
        let amount = debtor.remaining.min(creditor.remaining);

        if amount > tolerance {
            let rounded = config.round(amount);
            if !rounded.is_zero() {
                debug!(from = %debtor.id, to = %creditor.id, amount = %rounded, "settlement");
                settlements.push(Settlement {
                    from: debtor.id.clone(),
                    to: creditor.id.clone(),
                    amount: rounded,
                });
            }
        }

        debtor.remaining -= amount;
        creditor.remaining -= amount;
        if is_settled(debtor.remaining, tolerance) {
            i += 1;
        }
        if is_settled(creditor.remaining, tolerance) {
            j += 1;
        }
    }

    if i < debtors.len() || j < creditors.len() {
        debug!(
            debtors_left = debtors.len() - i,
            creditors_left = creditors.len() - j,
            "unmatched remainder dropped"
        );
    }

    settlements
}

/// A side is done once its remainder drops below the tolerance. A remainder
/// of exactly the tolerance stays in play and is absorbed by the next
/// counterparty. The zero check keeps a zero tolerance advancing.
fn is_settled(remaining: Decimal, tolerance: Decimal) -> bool {
    remaining < tolerance || remaining.is_zero()
}
