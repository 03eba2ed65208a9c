use crate::error::ConvertError;
use crate::record::{FieldRecord, Variant};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Which input layout a run was processed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Column 0 holds field names, every other column is one problem.
    WholeTable,
    /// One example per row, two documents per example.
    Translation,
}

/// A document that was written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedDocument {
    pub problem: String,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
    pub steps: usize,
    pub fields: FieldRecord,
}

/// Why a problem produced no document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SkipReason {
    /// The problem column has no header.
    Unnamed,
    /// No field of the problem carried a value.
    NoData,
    /// Fewer than two meaningful fields.
    InsufficientData { fields: usize },
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedProblem {
    pub problem: String,
    pub reason: SkipReason,
}

/// The outcome of a conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub mode: InputMode,
    pub generated: Vec<GeneratedDocument>,
    pub skipped: Vec<SkippedProblem>,
}

impl ConversionReport {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            generated: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn skip(&mut self, problem: impl Into<String>, reason: SkipReason) {
        self.skipped.push(SkippedProblem {
            problem: problem.into(),
            reason,
        });
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), ConvertError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
