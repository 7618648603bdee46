use crate::application::ledger::Ledger;
use crate::config::SettlementConfig;
use crate::domain::participant::ParticipantId;
use crate::domain::settlement::{BalanceEntry, Settlement};
use serde::Serialize;

/// How participants are labelled in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Name,
    Id,
}

/// A settlement ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementRow {
    pub from: String,
    pub to: String,
    pub amount: String,
}

/// One line of the balance report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceRow {
    pub participant: String,
    pub paid: String,
    pub owed: String,
    pub net: String,
}

fn label(ledger: &Ledger, id: &ParticipantId, label: Label) -> String {
    match label {
        Label::Name => ledger.name_of(id).to_string(),
        Label::Id => id.to_string(),
    }
}

pub fn settlement_rows(
    ledger: &Ledger,
    settlements: &[Settlement],
    config: &SettlementConfig,
    labels: Label,
) -> Vec<SettlementRow> {
    settlements
        .iter()
        .map(|s| SettlementRow {
            from: label(ledger, &s.from, labels),
            to: label(ledger, &s.to, labels),
            amount: config.format(s.amount),
        })
        .collect()
}

pub fn balance_rows(
    ledger: &Ledger,
    entries: &[BalanceEntry],
    config: &SettlementConfig,
    labels: Label,
) -> Vec<BalanceRow> {
    entries
        .iter()
        .map(|e| BalanceRow {
            participant: label(ledger, &e.participant, labels),
            paid: config.format(e.paid),
            owed: config.format(e.owed),
            net: config.format(e.net),
        })
        .collect()
}
