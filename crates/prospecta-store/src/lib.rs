//! Flat-file store for the latest website analysis of each company.
//!
//! One `;`-delimited UTF-8 file (with BOM, so spreadsheet tools read the
//! accents correctly), one row per CNPJ. Re-analyzing a company replaces its
//! row; rows are never deleted.

mod row;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use prospecta_core::AnalysisResult;
use thiserror::Error;

pub use row::COLUMNS;

const UTF8_BOM: &str = "\u{feff}";
const DELIMITER: u8 = b';';

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{path} is not valid UTF-8; refusing to rewrite it")]
    NotUtf8 { path: String },
}

/// Handle to the analysis file. Cheap to create; every call reads or rewrites
/// the file, so there is no in-memory state to go stale.
#[derive(Debug, Clone)]
pub struct AnalysisStore {
    path: PathBuf,
}

impl AnalysisStore {
    /// Points the store at `path`. The file does not need to exist yet.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every stored analysis, in file order.
    ///
    /// A missing file, an unreadable file, or a file without a `cnpj` column
    /// all read as an empty store; problems are logged, never returned. A file
    /// that is not valid UTF-8 is still read, with undecodable bytes replaced.
    #[must_use]
    pub fn load_all(&self) -> Vec<AnalysisResult> {
        let bytes = match self.read_bytes() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "analysis file not found; starting empty");
                return Vec::new();
            }
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "could not read analysis file; treating as empty");
                return Vec::new();
            }
        };

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    valid_up_to = error.utf8_error().valid_up_to(),
                    "analysis file is not valid UTF-8; accented text will be garbled"
                );
                String::from_utf8_lossy(error.as_bytes()).into_owned()
            }
        };
        self.parse_records(&text)
    }

    /// Loads the analysis stored for `company_id`, if any.
    #[must_use]
    pub fn load(&self, company_id: &str) -> Option<AnalysisResult> {
        self.load_all()
            .into_iter()
            .find(|r| r.company_id == company_id)
    }

    /// Inserts `record`, or replaces the existing row with the same
    /// `company_id`.
    ///
    /// The whole file is rewritten to a sibling temporary file and renamed over
    /// the original, so a failed write leaves the previous contents intact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotUtf8`] without touching the file if the
    /// existing contents are not valid UTF-8, since rewriting them would
    /// replace every undecodable byte for good. Returns another
    /// [`StoreError`] if the file cannot be read, written, or renamed.
    pub fn upsert(&self, record: &AnalysisResult) -> Result<(), StoreError> {
        let mut records = match self.read_bytes().map_err(io_error(&self.path))? {
            Some(bytes) => {
                let text = String::from_utf8(bytes).map_err(|_| StoreError::NotUtf8 {
                    path: self.path.display().to_string(),
                })?;
                self.parse_records(&text)
            }
            None => Vec::new(),
        };
        match records
            .iter_mut()
            .find(|r| r.company_id == record.company_id)
        {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        self.write_all(&records)?;
        tracing::debug!(
            path = %self.path.display(),
            company_id = %record.company_id,
            rows = records.len(),
            "analysis stored"
        );
        Ok(())
    }

    /// `Ok(None)` when the file does not exist yet.
    fn read_bytes(&self) -> io::Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn parse_records(&self, text: &str) -> Vec<AnalysisResult> {
        let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .flexible(true)
            .from_reader(text.as_bytes());

        let columns = match reader.headers() {
            Ok(headers) => row::ColumnIndex::from_headers(headers),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "unreadable analysis file header; treating as empty");
                return Vec::new();
            }
        };
        let Some(columns) = columns else {
            tracing::warn!(path = %self.path.display(), "analysis file has no cnpj column; treating as empty");
            return Vec::new();
        };

        let mut records = Vec::new();
        for (line, result) in reader.records().enumerate() {
            match result {
                Ok(raw) => {
                    if let Some(record) = columns.parse(&raw) {
                        records.push(record);
                    }
                }
                Err(error) => {
                    tracing::warn!(path = %self.path.display(), row = line + 1, %error, "skipping unreadable analysis row");
                }
            }
        }
        records
    }

    fn write_all(&self, records: &[AnalysisResult]) -> Result<(), StoreError> {
        let tmp_path = self.tmp_path();

        let mut file = fs::File::create(&tmp_path).map_err(io_error(&tmp_path))?;
        file.write_all(UTF8_BOM.as_bytes())
            .map_err(io_error(&tmp_path))?;

        let mut writer = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .from_writer(file);
        writer.write_record(COLUMNS)?;
        for record in records {
            writer.write_record(row::to_row(record)?)?;
        }
        writer.flush().map_err(io_error(&tmp_path))?;
        drop(writer);

        fs::rename(&tmp_path, &self.path).map_err(io_error(&self.path))?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> StoreError {
    let path = path.display().to_string();
    move |source| StoreError::Io { path, source }
}
