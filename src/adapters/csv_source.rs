use crate::domain::model::RawRecord;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Reads input rows from a CSV file with `entity`, `code`, `origin_gps` and
/// `destination_gps` columns. Only the shape of the rows is checked here;
/// GPS text stays raw for the pipeline to judge.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for CsvSource {
    fn fetch(&self) -> Result<Vec<RawRecord>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();

        for row in reader.deserialize::<RawRecord>() {
            records.push(row?);
        }

        tracing::debug!("Read {} rows from {}", records.len(), self.path.display());
        Ok(records)
    }
}
