#![allow(dead_code)]

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use splitledger::domain::expense::{Amount, Expense};
use splitledger::domain::participant::{Participant, ParticipantId};
use std::io::Error;
use std::path::Path;

/// A random group: `participants` people and `expenses` expenses with amounts
/// between 0.01 and 500.00, each split among a random non-empty subset.
pub fn random_group(
    rng: &mut StdRng,
    participants: usize,
    expenses: usize,
) -> (Vec<Participant>, Vec<Expense>) {
    let people: Vec<Participant> = (1..=participants)
        .map(|i| Participant::new(format!("p{i}"), format!("Person {i}")))
        .collect();
    let ids: Vec<ParticipantId> = people.iter().map(|p| p.id.clone()).collect();

    let expenses = (1..=expenses)
        .map(|i| {
            let cents: i64 = rng.gen_range(1..=50_000);
            let amount = Amount::new(Decimal::new(cents, 2)).unwrap();
            let payer = ids.choose(rng).unwrap().clone();
            let size = rng.gen_range(1..=ids.len());
            let split: Vec<ParticipantId> = ids.choose_multiple(rng, size).cloned().collect();
            Expense::new(format!("e{i}"), "generated", amount, payer, split).unwrap()
        })
        .collect();

    (people, expenses)
}

pub fn write_group(
    participants_path: &Path,
    expenses_path: &Path,
    participants: &[Participant],
    expenses: &[Expense],
) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(participants_path)?;
    wtr.write_record(["id", "name"])?;
    for p in participants {
        wtr.write_record([p.id.as_str(), p.name.as_str()])?;
    }
    wtr.flush()?;

    let mut wtr = csv::Writer::from_path(expenses_path)?;
    wtr.write_record(["id", "description", "amount", "paid_by", "split_among"])?;
    for e in expenses {
        let split = e
            .split_among
            .iter()
            .map(ParticipantId::as_str)
            .collect::<Vec<_>>()
            .join(";");
        wtr.write_record([
            e.id.as_str(),
            e.description.as_str(),
            e.amount.value().to_string().as_str(),
            e.paid_by.as_str(),
            split.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
