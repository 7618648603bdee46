use super::participant::ParticipantId;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Net balance per participant: positive means the participant is owed
/// money, negative means they owe.
pub type Balances = HashMap<ParticipantId, Decimal>;

/// One participant's side of the books.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceEntry {
    pub participant: ParticipantId,
    /// Sum of every expense this participant paid for.
    pub paid: Decimal,
    /// Sum of this participant's shares across the expenses they are part of.
    pub owed: Decimal,
    /// `paid - owed`.
    pub net: Decimal,
}

/// A single payment `from` a debtor `to` a creditor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Decimal,
}
