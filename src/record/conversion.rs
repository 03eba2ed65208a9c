use super::definition::FieldRecord;
use crate::error::RecordError;

/// A trait for input shapes that can be converted into a canonical `FieldRecord`.
///
/// The planner only ever sees `FieldRecord`s. Each supported input layout (a
/// problem column of a whole table, a row of a translation table) implements
/// this trait to provide its own translation.
///
/// # Example
///
/// ```rust
/// use brdgen::record::{FieldRecord, IntoRecord};
/// use brdgen::error::RecordError;
///
/// struct Pair(&'static str, &'static str);
///
/// impl IntoRecord for Pair {
///     fn into_record(self) -> Result<FieldRecord, RecordError> {
///         Ok(FieldRecord::from_iter([(self.0, self.1)]))
///     }
/// }
///
/// let record = Pair("situation-input", " At work ").into_record().unwrap();
/// assert_eq!(record.get("situation-input"), Some("At work"));
/// ```
pub trait IntoRecord {
    /// Consumes the input and produces the record for one problem.
    fn into_record(self) -> Result<FieldRecord, RecordError>;
}
