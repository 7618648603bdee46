use crate::domain::expense::ExpenseId;
use crate::domain::participant::ParticipantId;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("expense {expense} references unknown participant {participant}")]
    UnknownParticipant {
        expense: ExpenseId,
        participant: ParticipantId,
    },
    #[error("expense {0} is not split among anyone")]
    DegenerateSplit(ExpenseId),
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("expense {0} has an empty description")]
    EmptyDescription(ExpenseId),
    #[error("totals overflow while adding expense {0}")]
    AmountOverflow(ExpenseId),

    #[error("participant {0} has an empty name")]
    EmptyName(ParticipantId),
    #[error("participant {0} already exists")]
    DuplicateParticipant(ParticipantId),
    #[error("expense {0} already exists")]
    DuplicateExpense(ExpenseId),
    #[error("participant {0} is referenced by existing expenses")]
    ParticipantInUse(ParticipantId),
    #[error("participant {0} does not exist")]
    UnknownParticipantId(ParticipantId),

    #[error("invalid receipt image: {0}")]
    InvalidReceiptImage(String),
    #[error("receipt recognizer failed to initialize: {0}")]
    RecognizerInit(String),
    #[error("receipt recognition failed: {0}")]
    Recognition(String),
    #[error("receipt recognized with confidence {confidence}, need at least {minimum}")]
    LowConfidence { confidence: f32, minimum: f32 },
    #[error("receipt candidate is missing its {0}")]
    IncompleteCandidate(&'static str),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, SplitError>;
