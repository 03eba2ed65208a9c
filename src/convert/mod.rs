use crate::emit::{DocumentEmitter, GraphSettings};
use crate::error::{ConvertError, EmitError};
use crate::graph::BrdGraph;
use crate::planner::plan_steps;
use crate::record::{
    FieldRecord, IntoRecord, TableColumn, TranslationProblem, TranslationRow, Variant,
    is_translation_table,
};
use crate::table::{Table, load_table};
use crate::tokenizer::{JiebaTokenizer, Tokenizer};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use ahash::AHashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

mod report;
mod split;

pub use report::*;
pub use split::TrainTestSplit;

/// Seed of the row and title shuffles when none is configured.
pub const DEFAULT_SEED: u64 = 42;
/// Output directory, next to the input file, for whole-table runs without `--output`.
pub const TABLE_OUTPUT_DIR: &str = "brd_generated";
/// A problem needs at least this many meaningful fields to get a document.
pub const MIN_MEANINGFUL_FIELDS: usize = 2;

const UNNAMED_COLUMN_PREFIX: &str = "Unnamed:";

/// A rendered BRD document and the number of steps it encodes.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub xml: String,
    pub steps: usize,
}

/// The four sibling directories of a translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationDirs {
    pub train_one_step: PathBuf,
    pub train_two_step: PathBuf,
    pub test_one_step: PathBuf,
    pub test_two_step: PathBuf,
}

impl TranslationDirs {
    pub fn new(base: &Path) -> Self {
        Self {
            train_one_step: base.join("brd_generated_1step"),
            train_two_step: base.join("brd_generated_2step"),
            test_one_step: base.join("brd_test_1step"),
            test_two_step: base.join("brd_test_2step"),
        }
    }

    pub fn for_variant(&self, test: bool, variant: Variant) -> &Path {
        match (test, variant) {
            (false, Variant::OneStep) => &self.train_one_step,
            (false, Variant::TwoStep) => &self.train_two_step,
            (true, Variant::OneStep) => &self.test_one_step,
            (true, Variant::TwoStep) => &self.test_two_step,
        }
    }

    fn create_all(&self) -> Result<(), ConvertError> {
        for dir in [
            &self.train_one_step,
            &self.train_two_step,
            &self.test_one_step,
            &self.test_two_step,
        ] {
            create_dir(dir)?;
        }
        Ok(())
    }
}

/// Turns input tables into BRD documents on disk.
pub struct Converter {
    output_dir: Option<PathBuf>,
    seed: u64,
    tokenizer: Option<Box<dyn Tokenizer>>,
    emitter: DocumentEmitter,
}

pub struct ConverterBuilder {
    output_dir: Option<PathBuf>,
    seed: u64,
    tokenizer: Option<Box<dyn Tokenizer>>,
    settings: GraphSettings,
}

impl Default for ConverterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    pub fn new() -> Self {
        Self {
            output_dir: None,
            seed: DEFAULT_SEED,
            tokenizer: None,
            settings: GraphSettings::default(),
        }
    }

    /// Whole-table runs write here directly; translation runs create their four
    /// directories under it.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the jieba tokenizer used for translation sentences.
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    pub fn with_settings(mut self, settings: GraphSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            output_dir: self.output_dir,
            seed: self.seed,
            tokenizer: self.tokenizer,
            emitter: DocumentEmitter::with_settings(self.settings),
        }
    }
}

impl Converter {
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::new()
    }

    /// Plans, builds and serializes the document of a single record.
    pub fn render(&self, record: &FieldRecord) -> Result<RenderedDocument, EmitError> {
        let steps = plan_steps(record);
        let graph = BrdGraph::from_steps(&steps);
        let xml = self.emitter.emit(&graph)?;
        Ok(RenderedDocument {
            xml,
            steps: steps.len(),
        })
    }

    /// Loads `path` and converts it in whichever layout its header matches.
    pub fn convert_file(&self, path: &Path) -> Result<ConversionReport, ConvertError> {
        let table = load_table(path)?;
        let input_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        if is_translation_table(&table) {
            let base = self.output_dir.clone().unwrap_or(input_dir);
            self.convert_translation(&table, &base)
        } else {
            let out = self
                .output_dir
                .clone()
                .unwrap_or_else(|| input_dir.join(TABLE_OUTPUT_DIR));
            self.convert_table(&table, &out)
        }
    }

    /// Writes one document per problem column into `output_dir`.
    pub fn convert_table(
        &self,
        table: &Table,
        output_dir: &Path,
    ) -> Result<ConversionReport, ConvertError> {
        let table = table.pruned();
        create_dir(output_dir)?;
        let mut report = ConversionReport::new(InputMode::WholeTable);
        let mut written = AHashSet::new();

        for index in 1..table.width() {
            let column = TableColumn::new(&table, index);
            let problem = column.name();

            if problem.trim().is_empty() || problem.starts_with(UNNAMED_COLUMN_PREFIX) {
                warn!(column = index, "Skipping unnamed column");
                report.skip(problem, SkipReason::Unnamed);
                continue;
            }

            info!(problem, "Processing problem");
            let record = column.into_record()?;
            let Some(record) = self.usable_record(problem, record, &mut report) else {
                continue;
            };

            let path = output_dir.join(format!("{}.brd", sanitize_file_stem(problem)));
            if !written.insert(path.clone()) {
                warn!(
                    problem,
                    path = %path.display(),
                    "Overwriting a document written earlier in this run"
                );
            }
            let document = self.render(&record)?;
            write_document(&path, &document.xml)?;
            info!(path = %path.display(), steps = document.steps, "Generated");

            report.generated.push(GeneratedDocument {
                problem: problem.to_string(),
                path,
                variant: None,
                steps: document.steps,
                fields: record,
            });
        }

        info!(
            dir = %output_dir.display(),
            generated = report.generated.len(),
            skipped = report.skipped.len(),
            "All files generated"
        );
        Ok(report)
    }

    /// Shuffles the examples with the configured seed, splits them 80/20 and
    /// writes a 1step and a 2step document per example under `base`.
    pub fn convert_translation(
        &self,
        table: &Table,
        base: &Path,
    ) -> Result<ConversionReport, ConvertError> {
        let mut rows = TranslationRow::read_all(table)?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        rows.shuffle(&mut rng);

        let split = TrainTestSplit::new(rows.len());
        let dirs = TranslationDirs::new(base);
        dirs.create_all()?;

        let jieba;
        let tokenizer: &dyn Tokenizer = match &self.tokenizer {
            Some(tokenizer) => tokenizer.as_ref(),
            None => {
                jieba = JiebaTokenizer::new();
                &jieba
            }
        };

        let mut report = ConversionReport::new(InputMode::Translation);
        let examples = split
            .train
            .clone()
            .map(|i| (i, false, format!("problem_{i}")))
            .chain(
                split
                    .test
                    .clone()
                    .enumerate()
                    .map(|(n, i)| (i, true, format!("test_{}", n + 1))),
            );

        for (index, test, stem) in examples {
            let row = &rows[index];
            let mut titles = row.title_choices();
            titles.shuffle(&mut rng);
            let words = if row.completed_sentence.is_empty() {
                Vec::new()
            } else {
                tokenizer.tokenize(&row.completed_sentence)
            };

            for variant in Variant::ALL {
                let file_stem = format!("{stem}_{variant}");
                let problem = if test || row.completed_sentence.is_empty() {
                    file_stem.clone()
                } else {
                    row.completed_sentence.clone()
                };

                info!(problem = %problem, "Processing problem");
                let record = TranslationProblem {
                    row,
                    variant,
                    titles: &titles,
                    words: &words,
                }
                .into_record()?;
                let Some(record) = self.usable_record(&problem, record, &mut report) else {
                    continue;
                };

                let path = dirs
                    .for_variant(test, variant)
                    .join(format!("{file_stem}.brd"));
                let document = self.render(&record)?;
                write_document(&path, &document.xml)?;
                info!(path = %path.display(), steps = document.steps, "Generated");

                report.generated.push(GeneratedDocument {
                    problem,
                    path,
                    variant: Some(variant),
                    steps: document.steps,
                    fields: record,
                });
            }
        }

        info!(
            train = split.train.len(),
            test = split.test.len(),
            generated = report.generated.len(),
            "All files generated"
        );
        Ok(report)
    }

    /// Returns the meaningful part of `record`, or records why the problem is skipped.
    fn usable_record(
        &self,
        problem: &str,
        record: FieldRecord,
        report: &mut ConversionReport,
    ) -> Option<FieldRecord> {
        if record.is_empty() {
            warn!(problem, "Skipping problem, no data found");
            report.skip(problem, SkipReason::NoData);
            return None;
        }

        let meaningful = record.meaningful();
        if meaningful.len() < MIN_MEANINGFUL_FIELDS {
            warn!(
                problem,
                fields = meaningful.len(),
                "Skipping problem, insufficient meaningful data"
            );
            report.skip(
                problem,
                SkipReason::InsufficientData {
                    fields: meaningful.len(),
                },
            );
            return None;
        }

        debug!(problem, fields = ?meaningful.names(), "Found {} meaningful fields", meaningful.len());
        Some(meaningful)
    }
}

/// Replaces characters that would split a problem name into path components.
pub fn sanitize_file_stem(name: &str) -> String {
    name.replace([' ', '/', '\\'], "_")
}

fn create_dir(dir: &Path) -> Result<(), ConvertError> {
    fs::create_dir_all(dir).map_err(|source| ConvertError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_document(path: &Path, xml: &str) -> Result<(), ConvertError> {
    fs::write(path, xml).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })
}
