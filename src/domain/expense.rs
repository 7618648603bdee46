use super::participant::ParticipantId;
use crate::error::{Result, SplitError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Description used when a receipt yields no usable text for one.
pub const RECEIPT_FALLBACK_DESCRIPTION: &str = "Receipt expense";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ExpenseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A strictly positive monetary amount.
///
/// The only way to obtain one is through [`Amount::new`], so an `Expense`
/// can never carry a zero or negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(SplitError::NonPositiveAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = SplitError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// A shared cost: paid by one participant, split equally among several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Amount,
    pub paid_by: ParticipantId,
    pub split_among: Vec<ParticipantId>,
}

impl Expense {
    /// Builds an expense, trimming the description and rejecting an empty
    /// description or an empty split.
    ///
    /// Whether the referenced participants exist is checked by whoever owns
    /// the participant list (see `Ledger::add_expense`).
    pub fn new(
        id: impl Into<ExpenseId>,
        description: impl AsRef<str>,
        amount: Amount,
        paid_by: impl Into<ParticipantId>,
        split_among: Vec<ParticipantId>,
    ) -> Result<Self> {
        let id = id.into();
        let description = description.as_ref().trim().to_string();
        if description.is_empty() {
            return Err(SplitError::EmptyDescription(id));
        }
        if split_among.is_empty() {
            return Err(SplitError::DegenerateSplit(id));
        }
        Ok(Self {
            id,
            description,
            amount,
            paid_by: paid_by.into(),
            split_among,
        })
    }

    /// Distinct beneficiaries in first-seen order.
    pub fn beneficiaries(&self) -> Vec<&ParticipantId> {
        let mut seen = HashSet::new();
        self.split_among
            .iter()
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Every participant this expense references, payer first.
    pub fn references(&self) -> impl Iterator<Item = &ParticipantId> {
        std::iter::once(&self.paid_by).chain(self.split_among.iter())
    }

    pub fn involves(&self, participant: &ParticipantId) -> bool {
        self.references().any(|id| id == participant)
    }
}

/// A partially filled expense proposed by an untrusted source such as a
/// receipt scan. It becomes an [`Expense`] only through the same validation
/// as a manually entered one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateExpense {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub paid_by: Option<ParticipantId>,
    pub split_among: Option<Vec<ParticipantId>>,
}

impl CandidateExpense {
    /// Fills the gaps and validates.
    ///
    /// A missing payer falls back to `default_payer`, a missing split to the
    /// payer alone, and a missing or blank description to
    /// [`RECEIPT_FALLBACK_DESCRIPTION`]. The amount is mandatory.
    pub fn into_expense(
        self,
        id: impl Into<ExpenseId>,
        default_payer: &ParticipantId,
    ) -> Result<Expense> {
        let amount = self
            .amount
            .ok_or(SplitError::IncompleteCandidate("amount"))?;
        let amount = Amount::new(amount)?;
        let paid_by = self.paid_by.unwrap_or_else(|| default_payer.clone());
        let split_among = self
            .split_among
            .filter(|ids| !ids.is_empty())
            .unwrap_or_else(|| vec![paid_by.clone()]);
        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| RECEIPT_FALLBACK_DESCRIPTION.to_string());

        Expense::new(id, description, amount, paid_by, split_among)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ids(raw: &[&str]) -> Vec<ParticipantId> {
        raw.iter().map(|id| ParticipantId::new(*id)).collect()
    }

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(0.01)).is_ok());
        assert!(matches!(
            Amount::new(dec!(0.0)),
            Err(SplitError::NonPositiveAmount(_))
        ));
        assert!(matches!(
            Amount::new(dec!(-5)),
            Err(SplitError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_amount_deserialization_rejects_negative() {
        let ok: Amount = serde_json::from_str("\"12.50\"").unwrap();
        assert_eq!(ok.value(), dec!(12.50));
        assert!(serde_json::from_str::<Amount>("\"-1\"").is_err());
    }

    #[test]
    fn test_expense_trims_description() {
        let amount = Amount::new(dec!(10)).unwrap();
        let expense = Expense::new("e1", "  Dinner ", amount, "a", ids(&["a", "b"])).unwrap();
        assert_eq!(expense.description, "Dinner");
    }

    #[test]
    fn test_expense_rejects_empty_split_and_description() {
        let amount = Amount::new(dec!(10)).unwrap();
        assert!(matches!(
            Expense::new("e1", "Dinner", amount, "a", vec![]),
            Err(SplitError::DegenerateSplit(_))
        ));
        assert!(matches!(
            Expense::new("e1", "   ", amount, "a", ids(&["a"])),
            Err(SplitError::EmptyDescription(_))
        ));
    }

    #[test]
    fn test_beneficiaries_deduplicates_in_order() {
        let amount = Amount::new(dec!(10)).unwrap();
        let expense =
            Expense::new("e1", "Taxi", amount, "a", ids(&["b", "a", "b", "c", "a"])).unwrap();
        let names: Vec<&str> = expense
            .beneficiaries()
            .into_iter()
            .map(ParticipantId::as_str)
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_involves_payer_and_split_members() {
        let amount = Amount::new(dec!(10)).unwrap();
        let expense = Expense::new("e1", "Taxi", amount, "a", ids(&["b"])).unwrap();
        assert!(expense.involves(&"a".into()));
        assert!(expense.involves(&"b".into()));
        assert!(!expense.involves(&"c".into()));
    }

    #[test]
    fn test_candidate_defaults() {
        let candidate = CandidateExpense {
            amount: Some(dec!(42.10)),
            ..Default::default()
        };
        let expense = candidate.into_expense("r1", &"a".into()).unwrap();
        assert_eq!(expense.description, RECEIPT_FALLBACK_DESCRIPTION);
        assert_eq!(expense.paid_by, ParticipantId::new("a"));
        assert_eq!(expense.split_among, ids(&["a"]));
        assert_eq!(expense.amount.value(), dec!(42.10));
    }

    #[test]
    fn test_candidate_keeps_supplied_fields() {
        let candidate = CandidateExpense {
            description: Some("Groceries".to_string()),
            amount: Some(dec!(30)),
            paid_by: Some("b".into()),
            split_among: Some(ids(&["a", "b"])),
        };
        let expense = candidate.into_expense("r1", &"a".into()).unwrap();
        assert_eq!(expense.description, "Groceries");
        assert_eq!(expense.paid_by, ParticipantId::new("b"));
        assert_eq!(expense.split_among, ids(&["a", "b"]));
    }

    #[test]
    fn test_candidate_requires_positive_amount() {
        let missing = CandidateExpense::default();
        assert!(matches!(
            missing.into_expense("r1", &"a".into()),
            Err(SplitError::IncompleteCandidate("amount"))
        ));

        let zero = CandidateExpense {
            amount: Some(dec!(0)),
            ..Default::default()
        };
        assert!(matches!(
            zero.into_expense("r1", &"a".into()),
            Err(SplitError::NonPositiveAmount(_))
        ));
    }
}
