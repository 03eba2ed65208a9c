use super::conversion::IntoRecord;
use super::definition::FieldRecord;
use crate::error::RecordError;
use crate::table::Table;

/// One problem column of a whole-table input. Column 0 holds the field names.
#[derive(Debug, Clone, Copy)]
pub struct TableColumn<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> TableColumn<'a> {
    pub fn new(table: &'a Table, index: usize) -> Self {
        Self { table, index }
    }

    /// The header of this column, used as the problem name.
    pub fn name(&self) -> &'a str {
        self.table
            .headers()
            .get(self.index)
            .map_or("", String::as_str)
    }
}

impl IntoRecord for TableColumn<'_> {
    fn into_record(self) -> Result<FieldRecord, RecordError> {
        if self.index >= self.table.width() {
            return Err(RecordError::ColumnOutOfRange {
                index: self.index,
                width: self.table.width(),
            });
        }

        let mut record = FieldRecord::new();
        for row in 0..self.table.len() {
            record.insert(self.table.cell(row, 0), self.table.cell(row, self.index));
        }
        Ok(record)
    }
}

/// Extracts the record of `column` from `table`.
pub fn extract_record(table: &Table, column: usize) -> Result<FieldRecord, RecordError> {
    TableColumn::new(table, column).into_record()
}
