use crate::error::ImporterError;
use crate::services::files::write_atomic;
use common::model::translation::{TranslationRow, ID_COLUMN};
use csv::{ReaderBuilder, StringRecord, Writer};
use log::info;
use std::path::PathBuf;

/// Tabular store shared with the translators.
pub trait TranslationStore {
    /// Every data row, headers taken from the first row.
    fn fetch(&self) -> Result<Vec<TranslationRow>, ImporterError>;
    /// Replaces the sheet content with `rows`, keeping the existing column
    /// order.
    fn update(&self, rows: &[TranslationRow]) -> Result<(), ImporterError>;
}

/// Translation sheet kept as a CSV file.
///
/// Cells are read as text without any numeric coercion. A missing file is an
/// empty sheet.
pub struct CsvTranslationStore {
    path: PathBuf,
    empty_value: String,
    default_header: Vec<String>,
}

impl CsvTranslationStore {
    /// `default_header` is used when the sheet has no header row yet.
    pub fn new(path: impl Into<PathBuf>, default_header: Vec<String>) -> Self {
        Self {
            path: path.into(),
            empty_value: String::new(),
            default_header,
        }
    }

    /// Value written for columns a row has no entry for.
    pub fn with_empty_value(mut self, empty_value: impl Into<String>) -> Self {
        self.empty_value = empty_value.into();
        self
    }

    fn reader(&self) -> Result<Option<csv::Reader<std::fs::File>>, ImporterError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;
        Ok(Some(reader))
    }

    /// Header row of the sheet without its trailing blank cells.
    pub fn existing_header(&self) -> Result<Vec<String>, ImporterError> {
        let Some(mut reader) = self.reader()? else {
            return Ok(Vec::new());
        };
        let mut first = StringRecord::new();
        if !reader.read_record(&mut first)? {
            return Ok(Vec::new());
        }
        Ok(trim_trailing_blanks(first.iter().map(str::to_string).collect()))
    }
}

fn trim_trailing_blanks(mut cells: Vec<String>) -> Vec<String> {
    while cells.last().is_some_and(|cell| cell.is_empty()) {
        cells.pop();
    }
    cells
}

fn id_position(header: &[String]) -> Result<usize, ImporterError> {
    header.iter().position(|h| h == ID_COLUMN).ok_or_else(|| {
        ImporterError::TranslationStore(format!(
            "header row has no '{ID_COLUMN}' column: {header:?}"
        ))
    })
}

impl TranslationStore for CsvTranslationStore {
    fn fetch(&self) -> Result<Vec<TranslationRow>, ImporterError> {
        let Some(mut reader) = self.reader()? else {
            info!("Translation sheet {} not found, starting empty", self.path.display());
            return Ok(Vec::new());
        };

        let mut records = reader.records();
        let header: Vec<String> = match records.next() {
            Some(first) => trim_trailing_blanks(first?.iter().map(str::to_string).collect()),
            None => return Ok(Vec::new()),
        };
        if header.is_empty() {
            return Ok(Vec::new());
        }
        let id_index = id_position(&header)?;

        let mut rows = Vec::new();
        for record in records {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            let mut row = TranslationRow::new(record.get(id_index).unwrap_or_default());
            for (index, column) in header.iter().enumerate() {
                if index == id_index || column.is_empty() {
                    continue;
                }
                let cell = record.get(index).unwrap_or_default();
                row.cells.insert(column.clone(), cell.to_string());
            }
            rows.push(row);
        }
        info!("Fetched {} translation rows", rows.len());
        Ok(rows)
    }

    fn update(&self, rows: &[TranslationRow]) -> Result<(), ImporterError> {
        let mut header = self.existing_header()?;
        if header.is_empty() {
            header = self.default_header.clone();
        }
        id_position(&header)?;

        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record(&header)?;
        for row in rows {
            writer.write_record(
                header
                    .iter()
                    .map(|column| row.get(column).unwrap_or(self.empty_value.as_str())),
            )?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ImporterError::TranslationStore(e.to_string()))?;
        write_atomic(&self.path, &bytes)?;
        info!("Wrote {} translation rows to {}", rows.len(), self.path.display());
        Ok(())
    }
}
