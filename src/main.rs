use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use splitledger::application::ledger::Ledger;
use splitledger::config::SettlementConfig;
use splitledger::interfaces::csv::expense_reader::ExpenseReader;
use splitledger::interfaces::csv::participant_reader::ParticipantReader;
use splitledger::interfaces::csv::report_writer::ReportWriter;
use splitledger::interfaces::json;
use splitledger::interfaces::report::{Label, balance_rows, settlement_rows};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Report {
    /// Who pays whom
    Settlements,
    /// Paid, owed and net per participant
    Balances,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Participants CSV file (id,name)
    participants: PathBuf,

    /// Expenses CSV file (id,description,amount,paid_by,split_among)
    expenses: PathBuf,

    /// Balances within this distance of zero count as settled
    #[arg(long, default_value = "0.01")]
    tolerance: Decimal,

    /// Decimal places for emitted amounts
    #[arg(long, default_value_t = 2)]
    scale: u32,

    #[arg(long, value_enum, default_value_t = Report::Settlements)]
    report: Report,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Label participants by id instead of name
    #[arg(long)]
    ids: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = SettlementConfig::new(cli.tolerance, cli.scale).into_diagnostic()?;
    let mut ledger = Ledger::new();

    let file = File::open(&cli.participants).into_diagnostic()?;
    for result in ParticipantReader::new(file).participants() {
        match result {
            Ok(participant) => {
                if let Err(e) = ledger.add_participant(participant) {
                    warn!("Error adding participant: {e}");
                }
            }
            Err(e) => warn!("Error reading participant: {e}"),
        }
    }

    let file = File::open(&cli.expenses).into_diagnostic()?;
    for result in ExpenseReader::new(file).expenses() {
        match result {
            Ok(expense) => {
                if let Err(e) = ledger.add_expense(expense) {
                    warn!("Error adding expense: {e}");
                }
            }
            Err(e) => warn!("Error reading expense: {e}"),
        }
    }

    let labels = if cli.ids { Label::Id } else { Label::Name };
    let stdout = io::stdout();
    let out = stdout.lock();

    let written = match cli.report {
        Report::Settlements => {
            let settlements = ledger.settle(&config).into_diagnostic()?;
            let rows = settlement_rows(&ledger, &settlements, &config, labels);
            match cli.format {
                Format::Csv => ReportWriter::new(out).write_rows(&rows),
                Format::Json => json::write_rows(out, &rows),
            }
        }
        Report::Balances => {
            let entries = ledger.balance_sheet().into_diagnostic()?;
            let rows = balance_rows(&ledger, &entries, &config, labels);
            match cli.format {
                Format::Csv => ReportWriter::new(out).write_rows(&rows),
                Format::Json => json::write_rows(out, &rows),
            }
        }
    };
    written.into_diagnostic()
}
