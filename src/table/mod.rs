mod loader;

pub use loader::{TableFormat, load_table, read_delimited};

/// A rectangular grid of string cells with a header row.
///
/// Every row is padded to the same width as the header, so `cell` never has to
/// deal with ragged input. Missing cells are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table, padding the header and all rows to the widest row.
    pub fn new(mut headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);

        headers.resize(width, String::new());
        for row in &mut rows {
            row.resize(width, String::new());
        }

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns, including the field-name column.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (the header row is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the cell at `(row, column)`, or `""` when out of range.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map_or("", String::as_str)
    }

    /// Finds a column by its exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Returns `true` when every name in `names` is a header of this table.
    pub fn has_columns(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.column_index(name).is_some())
    }

    /// Drops rows whose first cell is blank, then drops every problem column
    /// whose first remaining data cell is blank. The field-name column is always kept.
    pub fn pruned(&self) -> Table {
        let rows: Vec<&Vec<String>> = self
            .rows
            .iter()
            .filter(|row| row.first().is_some_and(|c| !c.trim().is_empty()))
            .collect();

        let keep: Vec<usize> = (0..self.width())
            .filter(|&col| {
                col == 0
                    || rows
                        .first()
                        .is_some_and(|row| !row[col].trim().is_empty())
            })
            .collect();

        let headers = keep.iter().map(|&c| self.headers[c].clone()).collect();
        let rows = rows
            .into_iter()
            .map(|row| keep.iter().map(|&c| row[c].clone()).collect())
            .collect();

        Table::new(headers, rows)
    }
}
