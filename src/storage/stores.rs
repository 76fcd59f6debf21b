use super::*;

use crate::domain::contact::CSV_HEADER;
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::path::PathBuf;

pub const DEFAULT_CSV_PATH: &str = "contacts.csv";

/// Flat CSV file: one header row, then one row per contact.
#[derive(Debug)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: Option<&Path>) -> Result<Self, AppError> {
        let mut file_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH));

        if file_path.is_dir() {
            file_path = file_path.join(DEFAULT_CSV_PATH);
        } else if file_path.extension().is_some_and(|ext| ext != "csv") {
            return Err(AppError::Validation(
                "Contacts file must be a .csv file".to_string(),
            ));
        }

        Ok(Self { path: file_path })
    }
}

impl ContactStore for CsvStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new().from_path(&self.path)?;

        let mut contacts = Vec::new();
        for result in reader.deserialize() {
            let record: Contact = result?;
            contacts.push(record);
        }

        tracing::info!("Loaded {} contacts from {}", contacts.len(), self.path.display());
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Header goes out even for an empty book, so it is written by hand.
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_path(&self.path)?;

        writer.write_record(CSV_HEADER)?;
        for contact in contacts {
            writer.serialize(contact)?;
        }
        writer.flush()?;

        tracing::info!("Saved {} contacts to {}", contacts.len(), self.path.display());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
