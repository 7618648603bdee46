use crate::domain::participant::Participant;
use crate::error::{Result, SplitError};
use std::io::Read;

/// Reads `id,name` rows into participants.
pub struct ParticipantReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ParticipantReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    pub fn participants(self) -> impl Iterator<Item = Result<Participant>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(SplitError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "id, name\np1, Alice\np2, Bob";
        let results: Vec<Result<Participant>> =
            ParticipantReader::new(data.as_bytes()).participants().collect();

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[1].as_ref().unwrap(),
            &Participant::new("p2", "Bob")
        );
    }

    #[test]
    fn test_reader_missing_column() {
        let data = "id\np1";
        let results: Vec<Result<Participant>> =
            ParticipantReader::new(data.as_bytes()).participants().collect();
        assert!(matches!(results[0], Err(SplitError::CsvError(_))));
    }
}
