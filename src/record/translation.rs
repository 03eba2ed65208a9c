use super::conversion::IntoRecord;
use super::definition::FieldRecord;
use crate::error::RecordError;
use crate::fields;
use crate::table::Table;
use serde::Serialize;
use std::fmt;

/// Header names that identify a translation table. All of them must be present.
pub const TRANSLATION_COLUMNS: [&str; 7] = [
    "Situation",
    "Relationship-A",
    "Relationship-B",
    "Formality",
    "Title",
    "Wrong Titles",
    "Completed Sentence",
];

/// Returns `true` when `table` uses the row-per-example translation layout.
pub fn is_translation_table(table: &Table) -> bool {
    table.has_columns(&TRANSLATION_COLUMNS)
}

/// One example of a translation table, with every cell trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRow {
    pub situation: String,
    pub relationship_a: String,
    pub relationship_b: String,
    pub formality: String,
    pub title: String,
    pub wrong_titles: String,
    pub completed_sentence: String,
}

impl TranslationRow {
    /// Reads every data row of a translation table.
    pub fn read_all(table: &Table) -> Result<Vec<TranslationRow>, RecordError> {
        let columns = TRANSLATION_COLUMNS
            .iter()
            .map(|name| {
                table
                    .column_index(name)
                    .ok_or_else(|| RecordError::MissingColumn(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows = (0..table.len())
            .map(|row| {
                let cell = |i: usize| table.cell(row, columns[i]).trim().to_string();
                TranslationRow {
                    situation: cell(0),
                    relationship_a: cell(1),
                    relationship_b: cell(2),
                    formality: cell(3),
                    title: cell(4),
                    wrong_titles: cell(5),
                    completed_sentence: cell(6),
                }
            })
            .collect();
        Ok(rows)
    }

    /// The correct title followed by the whitespace-separated decoys, before shuffling.
    pub fn title_choices(&self) -> Vec<String> {
        std::iter::once(self.title.as_str())
            .filter(|t| !t.is_empty())
            .chain(self.wrong_titles.split_whitespace())
            .map(str::to_string)
            .collect()
    }
}

/// The two document variants produced for every translation example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Variant {
    /// The formality checkbox is left out entirely.
    #[serde(rename = "1step")]
    OneStep,
    /// The student also ticks the formality checkbox.
    #[serde(rename = "2step")]
    TwoStep,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::OneStep, Variant::TwoStep];
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::OneStep => write!(f, "1step"),
            Variant::TwoStep => write!(f, "2step"),
        }
    }
}

/// A translation example ready for planning: the row plus its shuffled titles and
/// tokenized sentence.
#[derive(Debug, Clone, Copy)]
pub struct TranslationProblem<'a> {
    pub row: &'a TranslationRow,
    pub variant: Variant,
    pub titles: &'a [String],
    pub words: &'a [String],
}

impl IntoRecord for TranslationProblem<'_> {
    fn into_record(self) -> Result<FieldRecord, RecordError> {
        let mut record = FieldRecord::new();
        record.insert(fields::SITUATION, &self.row.situation);
        record.insert(fields::RELATIONSHIP_A, &self.row.relationship_a);
        record.insert(fields::RELATIONSHIP_B, &self.row.relationship_b);

        for (i, title) in self.titles.iter().enumerate() {
            record.insert(&fields::indexed(fields::OPTION_WORD, i + 1), title);
        }
        for (i, word) in self.words.iter().enumerate() {
            record.insert(&fields::indexed(fields::PERSON_A_WORD, i + 1), word);
        }

        if self.variant == Variant::TwoStep {
            record.insert(fields::FORMAL_CHECKBOX, &self.row.formality);
        }
        Ok(record)
    }
}
