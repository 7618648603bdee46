use crate::application::balance::{balance_sheet, compute_balances};
use crate::application::settlement::plan_settlements;
use crate::config::SettlementConfig;
use crate::domain::expense::Expense;
use crate::domain::participant::{Participant, ParticipantId};
use crate::domain::settlement::{BalanceEntry, Balances, Settlement};
use crate::error::{Result, SplitError};
use tracing::{debug, info};

/// Name shown for ids that do not resolve to a participant.
pub const UNKNOWN_PARTICIPANT_NAME: &str = "Unknown";

/// An append-only book of participants and the expenses between them.
///
/// Every expense is validated when it is accepted, so balances computed from
/// a `Ledger` never hit the engine's error paths. Removing a participant
/// that any expense references is rejected rather than cascaded.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    /// Display name for `id`, or [`UNKNOWN_PARTICIPANT_NAME`].
    pub fn name_of(&self, id: &ParticipantId) -> &str {
        self.participant(id)
            .map(|p| p.name.as_str())
            .unwrap_or(UNKNOWN_PARTICIPANT_NAME)
    }

    /// Adds a participant, trimming its name.
    pub fn add_participant(&mut self, participant: Participant) -> Result<()> {
        let name = participant.name.trim();
        if name.is_empty() {
            return Err(SplitError::EmptyName(participant.id));
        }
        if self.participant(&participant.id).is_some() {
            return Err(SplitError::DuplicateParticipant(participant.id));
        }
        let participant = Participant::new(participant.id.clone(), name);
        debug!(id = %participant.id, name = %participant.name, "participant added");
        self.participants.push(participant);
        Ok(())
    }

    /// Removes a participant that no expense refers to.
    pub fn remove_participant(&mut self, id: &ParticipantId) -> Result<Participant> {
        let position = self
            .participants
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| SplitError::UnknownParticipantId(id.clone()))?;
        if self.expenses.iter().any(|e| e.involves(id)) {
            return Err(SplitError::ParticipantInUse(id.clone()));
        }
        Ok(self.participants.remove(position))
    }

    /// Accepts an expense, trimming its description, after checking its id
    /// is new and that its payer and every beneficiary are known.
    pub fn add_expense(&mut self, mut expense: Expense) -> Result<()> {
        if self.expenses.iter().any(|e| e.id == expense.id) {
            return Err(SplitError::DuplicateExpense(expense.id));
        }
        let description = expense.description.trim();
        if description.is_empty() {
            return Err(SplitError::EmptyDescription(expense.id));
        }
        expense.description = description.to_string();
        if expense.split_among.is_empty() {
            return Err(SplitError::DegenerateSplit(expense.id));
        }
        let unknown = expense
            .references()
            .find(|id| self.participant(id).is_none())
            .cloned();
        if let Some(participant) = unknown {
            return Err(SplitError::UnknownParticipant {
                expense: expense.id,
                participant,
            });
        }
        debug!(id = %expense.id, amount = %expense.amount.value(), "expense accepted");
        self.expenses.push(expense);
        Ok(())
    }

    pub fn balances(&self) -> Result<Balances> {
        compute_balances(&self.participants, &self.expenses)
    }

    pub fn balance_sheet(&self) -> Result<Vec<BalanceEntry>> {
        balance_sheet(&self.participants, &self.expenses)
    }

    /// Runs the full pipeline: balances, then the settlement plan.
    pub fn settle(&self, config: &SettlementConfig) -> Result<Vec<Settlement>> {
        let balances = self.balances()?;
        let settlements = plan_settlements(&balances, &self.participants, config);
        info!(
            participants = self.participants.len(),
            expenses = self.expenses.len(),
            settlements = settlements.len(),
            "settlement planned"
        );
        Ok(settlements)
    }
}
