//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions of the
//! brdgen crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use brdgen::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let converter = Converter::builder().with_seed(42).build();
//! let report = converter.convert_file(Path::new("problems.xlsx"))?;
//! println!("Generated {} documents", report.generated.len());
//! # Ok(())
//! # }
//! ```

// Pipeline
pub use crate::convert::{ConversionReport, Converter, RenderedDocument};
pub use crate::emit::{DocumentEmitter, GraphSettings};
pub use crate::graph::{BrdGraph, GraphBuilder};
pub use crate::planner::{ActionKind, Actor, Step, plan_steps};

// Inputs
pub use crate::record::{FieldRecord, IntoRecord, TableColumn, TranslationRow, Variant};
pub use crate::table::{Table, load_table};
pub use crate::tokenizer::{JiebaTokenizer, Tokenizer};

// Error types
pub use crate::error::{ConvertError, EmitError, LoadError, RecordError};

pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
