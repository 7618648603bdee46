pub mod expense_reader;
pub mod participant_reader;
pub mod report_writer;
