//! # brdgen - Spreadsheet to BRD Converter
//!
//! **brdgen** turns spreadsheets of tutoring problems into BRD documents, the
//! XML state graphs an example-tracing tutor replays. Every problem becomes a
//! linear chain of states whose edges describe the one action expected at that
//! point: which field, which interface action, which input.
//!
//! ## Core Workflow
//!
//! 1.  **Load a Table**: `table::load_table` reads CSV, TSV or a workbook into a `Table`.
//! 2.  **Extract Records**: Each problem becomes a `FieldRecord` through the `IntoRecord`
//!     trait, either from a table column (`TableColumn`) or a translation row
//!     (`TranslationProblem`).
//! 3.  **Plan Steps**: `plan_steps` orders the record's fields into a fixed step sequence
//!     that always ends with a `done` button press.
//! 4.  **Build and Emit**: `BrdGraph::from_steps` lays out the node and edge chains and
//!     `DocumentEmitter` serializes them with the BRD declaration line.
//!
//! `Converter` runs the whole pipeline for a file and writes the documents to disk.
//!
//! ## Quick Start
//!
//! ```rust
//! use brdgen::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let record = FieldRecord::from_iter([
//!         ("situation-input", "At work"),
//!         ("relationship-a-input", "Boss"),
//!         ("relationship-b-input", "Employee"),
//!         ("option-word-1", "Sir"),
//!         ("option-word-2", "Bro"),
//!     ]);
//!
//!     let steps = plan_steps(&record);
//!     assert_eq!(steps.len(), 6);
//!     assert!(steps.last().unwrap().is_done());
//!
//!     let graph = BrdGraph::from_steps(&steps);
//!     assert_eq!(graph.nodes.len(), 7);
//!     assert_eq!(graph.edges.len(), 6);
//!
//!     let xml = DocumentEmitter::new().emit(&graph)?;
//!     assert!(xml.starts_with(r#"<?xml version="1.0" standalone="yes"?>"#));
//!     Ok(())
//! }
//! ```

pub mod convert;
pub mod emit;
pub mod error;
pub mod fields;
pub mod graph;
pub mod planner;
pub mod prelude;
pub mod record;
pub mod table;
pub mod tokenizer;
