use super::Table;
use crate::error::LoadError;
use calamine::{Reader, open_workbook_auto};
use std::io;
use std::path::Path;
use tracing::info;

/// The input formats understood by the loader, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
    Workbook,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(TableFormat::Csv),
            "tsv" | "txt" => Ok(TableFormat::Tsv),
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Ok(TableFormat::Workbook),
            _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Loads the first sheet of `path` into a `Table`. The first row becomes the header.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let format = TableFormat::from_path(path)?;
    let table = match format {
        TableFormat::Csv => load_delimited(path, b',')?,
        TableFormat::Tsv => load_delimited(path, b'\t')?,
        TableFormat::Workbook => load_workbook(path)?,
    };

    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.width(),
        "Loaded table"
    );
    Ok(table)
}

/// Reads delimited text with a header row. Ragged rows are padded with empty cells.
pub fn read_delimited<R: io::Read>(reader: R, delimiter: u8) -> Result<Table, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}

fn load_delimited(path: &Path, delimiter: u8) -> Result<Table, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Delimited {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    read_delimited(file, delimiter).map_err(|source| LoadError::Delimited {
        path: path.to_path_buf(),
        source,
    })
}

fn load_workbook(path: &Path) -> Result<Table, LoadError> {
    let workbook_error = |source| LoadError::Workbook {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::NoWorksheet(path.to_path_buf()))?
        .map_err(workbook_error)?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect::<Vec<_>>());
    let headers = rows.next().unwrap_or_default();

    Ok(Table::new(headers, rows.collect()))
}
