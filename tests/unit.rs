//! Unit tests for tables, small value types and error messages.
mod common;
use brdgen::convert::TrainTestSplit;
use brdgen::table::{TableFormat, read_delimited};
use brdgen::prelude::*;
use common::*;
use std::path::PathBuf;

#[test]
fn test_display_strings() {
    assert_eq!(ActionKind::UpdateTextField.to_string(), "UpdateTextField");
    assert_eq!(ActionKind::ButtonPressed.to_string(), "ButtonPressed");
    assert_eq!(Actor::Tutor.to_string(), "Tutor (unevaluated)");
    assert_eq!(Actor::Student.to_string(), "Student");
    assert_eq!(Variant::OneStep.to_string(), "1step");
    assert_eq!(Variant::TwoStep.to_string(), "2step");
}

#[test]
fn test_train_test_split() {
    assert_eq!(TrainTestSplit::new(50).train, 0..40);
    assert_eq!(TrainTestSplit::new(50).test, 40..50);
    assert_eq!(TrainTestSplit::new(14).test.len(), 2);
    assert_eq!(TrainTestSplit::new(3).test, 2..3);
    assert_eq!(TrainTestSplit::new(1).train, 0..0);
    assert_eq!(TrainTestSplit::new(1).test, 0..1);
    assert!(TrainTestSplit::new(0).test.is_empty());
}

#[test]
fn test_table_pads_ragged_rows() {
    let table = table(&["a", "b"], &[&["1"], &["1", "2", "3"]]);
    assert_eq!(table.width(), 3);
    assert_eq!(table.headers()[2], "");
    assert_eq!(table.cell(0, 1), "");
    assert_eq!(table.cell(1, 2), "3");
    assert_eq!(table.cell(9, 9), "");
}

#[test]
fn test_table_pruning() {
    let pruned = create_problem_table().pruned();
    assert_eq!(pruned.headers(), &["Problem Name", "sq1", "sq2", ""]);
    assert_eq!(pruned.len(), 5);
    assert!(pruned.rows().iter().all(|row| !row[0].trim().is_empty()));
}

#[test]
fn test_pruning_empty_table_keeps_field_column_only() {
    let pruned = table(&["Problem Name", "sq1"], &[]).pruned();
    assert_eq!(pruned.width(), 1);
    assert!(pruned.is_empty());
}

#[test]
fn test_read_delimited() {
    let input = "Problem Name,sq1\n\"%(situation-input)%\",\"At work, late\"\noption-word-1\n";
    let table = read_delimited(input.as_bytes(), b',').unwrap();

    assert_eq!(table.headers(), &["Problem Name", "sq1"]);
    assert_eq!(table.cell(0, 1), "At work, late");
    assert_eq!(table.cell(1, 0), "option-word-1");
    assert_eq!(table.cell(1, 1), "");
}

#[test]
fn test_table_format_from_extension() {
    let format = |name: &str| TableFormat::from_path(&PathBuf::from(name));
    assert_eq!(format("a.csv").unwrap(), TableFormat::Csv);
    assert_eq!(format("a.TSV").unwrap(), TableFormat::Tsv);
    assert_eq!(format("a.txt").unwrap(), TableFormat::Tsv);
    assert_eq!(format("a.xlsx").unwrap(), TableFormat::Workbook);
    assert_eq!(format("a.xls").unwrap(), TableFormat::Workbook);
    assert!(matches!(
        format("a.json"),
        Err(LoadError::UnsupportedFormat(_))
    ));
    assert!(format("no_extension").is_err());
}

#[test]
fn test_error_display() {
    let err = LoadError::UnsupportedFormat("data.json".to_string());
    assert!(err.to_string().contains("data.json"));
    assert!(err.to_string().contains("Unsupported file type"));

    let err = RecordError::MissingColumn("Title".to_string());
    assert!(err.to_string().contains("'Title'"));

    let err = ConvertError::from(RecordError::ColumnOutOfRange { index: 4, width: 2 });
    assert!(err.to_string().contains("Column index 4"));
    assert!(err.to_string().contains("2 columns"));
}

#[test]
fn test_jieba_tokens_cover_sentence() {
    let tokens = JiebaTokenizer::new().tokenize("我是老师");
    assert!(!tokens.is_empty());
    assert_eq!(tokens.concat(), "我是老师");
}

#[test]
fn test_jieba_drops_whitespace_tokens() {
    let tokens = JiebaTokenizer::new().tokenize("你好 世界");
    assert!(tokens.iter().all(|t| !t.trim().is_empty()));
    assert_eq!(tokens.concat(), "你好世界");
}
