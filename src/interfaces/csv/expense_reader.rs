use crate::domain::expense::{Amount, Expense};
use crate::domain::participant::ParticipantId;
use crate::error::{Result, SplitError};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// Separator between participant ids in the `split_among` column.
pub const SPLIT_SEPARATOR: char = ';';

/// Raw CSV row, before any domain validation.
#[derive(Debug, Deserialize)]
struct ExpenseRecord {
    id: String,
    description: String,
    amount: Decimal,
    paid_by: String,
    split_among: String,
}

impl ExpenseRecord {
    fn into_expense(self) -> Result<Expense> {
        let split_among = self
            .split_among
            .split(SPLIT_SEPARATOR)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ParticipantId::new)
            .collect();
        Expense::new(
            self.id,
            self.description,
            Amount::new(self.amount)?,
            self.paid_by,
            split_among,
        )
    }
}

/// Reads `id,description,amount,paid_by,split_among` rows into expenses.
///
/// Each row is validated on its own: a bad amount or an empty split fails
/// that row only. Participant references are checked later by the ledger.
pub struct ExpenseReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ExpenseReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn expenses(self) -> impl Iterator<Item = Result<Expense>> {
        self.reader
            .into_deserialize::<ExpenseRecord>()
            .map(|result| {
                result
                    .map_err(SplitError::from)
                    .and_then(ExpenseRecord::into_expense)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const HEADER: &str = "id, description, amount, paid_by, split_among\n";

    fn read(rows: &str) -> Vec<Result<Expense>> {
        let data = format!("{HEADER}{rows}");
        ExpenseReader::new(data.as_bytes()).expenses().collect()
    }

    #[test]
    fn test_reader_valid_stream() {
        let results = read("e1, Dinner, 90.00, a, a;b; c\ne2, Taxi, 12, b, a");

        assert_eq!(results.len(), 2);
        let dinner = results[0].as_ref().unwrap();
        assert_eq!(dinner.amount.value(), dec!(90.00));
        assert_eq!(dinner.paid_by, ParticipantId::new("a"));
        assert_eq!(
            dinner.split_among,
            vec![
                ParticipantId::new("a"),
                ParticipantId::new("b"),
                ParticipantId::new("c")
            ]
        );
    }

    #[test]
    fn test_reader_rejects_bad_rows_individually() {
        let results = read(
            "e1, Dinner, -5, a, a\n\
             e2, Lunch, 10, a, ;\n\
             e3, Snack, abc, a, a\n\
             e4, Coffee, 3.50, a, a",
        );

        assert!(matches!(results[0], Err(SplitError::NonPositiveAmount(_))));
        assert!(matches!(results[1], Err(SplitError::DegenerateSplit(_))));
        assert!(matches!(results[2], Err(SplitError::CsvError(_))));
        assert!(results[3].is_ok());
    }
}
