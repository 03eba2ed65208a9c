use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an input table from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(
        "Unsupported file type '{0}'. Please provide an Excel (.xlsx, .xls), TSV (.tsv, .txt), or CSV (.csv) file"
    )]
    UnsupportedFormat(String),

    #[error("Failed to read delimited file '{path}': {source}")]
    Delimited {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read workbook '{path}': {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Workbook '{0}' does not contain any worksheet")]
    NoWorksheet(PathBuf),
}

/// Errors that can occur when converting a table column or row into a `FieldRecord`.
#[derive(Error, Debug, Clone)]
pub enum RecordError {
    #[error("Column index {index} is out of range for a table with {width} columns")]
    ColumnOutOfRange { index: usize, width: usize },

    #[error("Required column '{0}' is missing from the translation table")]
    MissingColumn(String),
}

/// Errors that can occur while serializing a graph into a BRD document.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to write XML: {0}")]
    Xml(#[from] std::io::Error),

    #[error("Serialized document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Errors that abort a whole conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize conversion report: {0}")]
    Report(#[from] serde_json::Error),
}
