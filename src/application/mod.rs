//! Application layer: the balance engine, the settlement planner, and the
//! orchestration built on top of them.
//!
//! `balance` and `settlement` are pure functions over immutable snapshots.
//! `Ledger` owns the append-only participant and expense lists and validates
//! input on the way in; `ReceiptScanner` feeds receipt images through the
//! recognition port and yields untrusted candidate expenses.

pub mod balance;
pub mod ledger;
pub mod receipt;
pub mod settlement;
