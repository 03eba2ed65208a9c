//! Common test utilities for building tables, records and tokenizers.
use brdgen::prelude::*;
use std::collections::HashSet;

/// Splits text into single characters, standing in for jieba in tests.
#[allow(dead_code)]
pub struct CharTokenizer;

impl Tokenizer for CharTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_string())
            .collect()
    }
}

#[allow(dead_code)]
fn strings(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Builds a table from string literals. The first slice is the header row.
#[allow(dead_code)]
pub fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    Table::new(strings(headers), rows.iter().map(|r| strings(r)).collect())
}

/// The worked example record: three context fields and two title options.
#[allow(dead_code)]
pub fn create_work_record() -> FieldRecord {
    FieldRecord::from_iter([
        ("situation-input", "At work"),
        ("relationship-a-input", "Boss"),
        ("relationship-b-input", "Employee"),
        ("option-word-1", "Sir"),
        ("option-word-2", "Bro"),
    ])
}

/// A record touching every planning category, including out-of-range indices.
#[allow(dead_code)]
pub fn create_full_record() -> FieldRecord {
    FieldRecord::from_iter([
        ("person-a-word-1", "我"),
        ("person-a-word-3", "老师"),
        ("person-a-word-2", "是"),
        ("person-a-word-16", "ignored"),
        ("option-word-2", "Bro"),
        ("option-word-1", "Sir"),
        ("option-word-6", "ignored"),
        ("formal-checkbox", "true"),
        ("relationship-b-input", "Employee"),
        ("situation-input", "At work"),
        ("relationship-a-input", "Boss"),
        ("unknown-field", "ignored"),
    ])
}

/// A whole-table layout with one good problem, one thin problem, an unnamed
/// column and a column whose first cell is blank.
#[allow(dead_code)]
pub fn create_problem_table() -> Table {
    table(
        &["Problem Name", "sq1", "sq2", "", "sq4"],
        &[
            &["%(situation-input)%", "At work", "Home", "x", ""],
            &["relationship-a-input", "Boss", "", "y", "Boss"],
            &["", "orphan", "orphan", "orphan", "orphan"],
            &["relationship-b-input", " Employee ", "  ", "z", "Employee"],
            &["option-word-1", "Sir", "", "", "Sir"],
            &["option-word-2", "Bro", "", "", "Bro"],
        ],
    )
}

#[allow(dead_code)]
pub const TRANSLATION_HEADERS: [&str; 7] = [
    "Situation",
    "Relationship-A",
    "Relationship-B",
    "Formality",
    "Title",
    "Wrong Titles",
    "Completed Sentence",
];

/// A translation table with `rows` examples, each with a distinct situation.
#[allow(dead_code)]
pub fn create_translation_table(rows: usize) -> Table {
    let data: Vec<Vec<String>> = (0..rows)
        .map(|i| {
            vec![
                format!("Situation {i}"),
                "Boss".to_string(),
                "Employee".to_string(),
                if i % 2 == 0 { "formal" } else { "informal" }.to_string(),
                "Sir".to_string(),
                "Bro Pal".to_string(),
                "你好".to_string(),
            ]
        })
        .collect();
    Table::new(strings(&TRANSLATION_HEADERS), data)
}

/// Removes the transaction id lines, the only part of a document that changes between runs.
#[allow(dead_code)]
pub fn without_transaction_ids(xml: &str) -> String {
    xml.lines()
        .filter(|line| !line.contains("<transaction_id>"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extracts every transaction id of a document.
#[allow(dead_code)]
pub fn transaction_ids(xml: &str) -> Vec<String> {
    xml.lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix("<transaction_id>")
                .and_then(|rest| rest.strip_suffix("</transaction_id>"))
                .map(str::to_string)
        })
        .collect()
}

/// Collects the step field names in order.
#[allow(dead_code)]
pub fn field_names(steps: &[Step]) -> Vec<&str> {
    steps.iter().map(|s| s.field.as_str()).collect()
}

#[allow(dead_code)]
pub fn unique<T: std::hash::Hash + Eq>(items: impl IntoIterator<Item = T>) -> HashSet<T> {
    items.into_iter().collect()
}
