//! Pipeline orchestrator — runs the preprocessing stages over a dataset.
//!
//! [`Preprocessor::run`] executes the stages in order: corpus stopword-set
//! construction (a serial pre-pass over the whole text column — a hard
//! ordering dependency), per-row normalization (data-parallel via rayon,
//! since documents are independent), derived preview column, diagnostics,
//! and removal of rows whose processed result is empty.

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;

use crate::dataset::{Dataset, DatasetError};
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::normalizer::DocumentNormalizer;
use crate::types::PrepConfig;

/// Name of the column holding the normalized text.
pub const PROCESSED_COLUMN: &str = "processed_content";

/// Name of the column holding the bounded-length preview.
pub const PREVIEW_COLUMN: &str = "processed_preview";

/// Maximum preview length, in characters.
const PREVIEW_LEN: usize = 200;

/// Marker appended when the processed text exceeds [`PREVIEW_LEN`].
const PREVIEW_MARKER: &str = "...";

/// A diagnostic count with its share of total rows.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DiagnosticCount {
    pub count: usize,
    pub percent: f64,
}

impl DiagnosticCount {
    fn of(count: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        Self { count, percent }
    }
}

impl fmt::Display for DiagnosticCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}%)", self.count, self.percent)
    }
}

/// Diagnostics reported after a preprocessing run.
#[derive(Debug, Clone, Serialize)]
pub struct PrepSummary {
    /// Rows processed (before the empty-result drop).
    pub total_rows: usize,
    /// Documents whose processed text still contains an isolated "th" token.
    pub with_th_artifact: DiagnosticCount,
    /// Documents whose processed text is empty.
    pub empty: DiagnosticCount,
    /// Documents with three or fewer resulting tokens (includes empty ones).
    pub three_tokens_or_fewer: DiagnosticCount,
    /// Rows removed because their processed result was empty.
    pub dropped_rows: usize,
}

impl fmt::Display for PrepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed {} documents: 'th' leftovers {}, empty {}, <=3 tokens {}, {} rows dropped",
            self.total_rows,
            self.with_th_artifact,
            self.empty,
            self.three_tokens_or_fewer,
            self.dropped_rows
        )
    }
}

/// Preprocessing pipeline over a dataset text column.
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    config: PrepConfig,
}

impl Preprocessor {
    /// Create a preprocessor with default configuration
    /// (text column "full_content", cutoff 50, minimum token length 3).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a preprocessor with custom configuration.
    pub fn with_config(config: PrepConfig) -> Self {
        Self { config }
    }

    /// Set the text column name.
    pub fn with_text_column(mut self, name: impl Into<String>) -> Self {
        self.config.text_column = name.into();
        self
    }

    /// Set the corpus-frequency cutoff.
    pub fn with_frequency_cutoff(mut self, cutoff: usize) -> Self {
        self.config.frequency_cutoff = cutoff;
        self
    }

    /// Set the minimum token length.
    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.config.min_token_len = len;
        self
    }

    /// Run the pipeline over the dataset, in place.
    ///
    /// Adds the [`PROCESSED_COLUMN`] and [`PREVIEW_COLUMN`] columns, logs
    /// and returns the diagnostic summary, and removes rows whose processed
    /// result (and therefore preview) is empty.
    pub fn run(&self, dataset: &mut Dataset) -> Result<PrepSummary, DatasetError> {
        let processed = {
            let texts = dataset.column(&self.config.text_column)?;

            // The stopword set must be complete before any normalization
            // starts; this pre-pass is serial by contract.
            let stopwords = StopwordFilter::for_corpus(
                texts.iter().map(Option::as_deref),
                self.config.frequency_cutoff,
                self.config.min_token_len,
            );
            let normalizer = DocumentNormalizer::new(stopwords, self.config.min_token_len);

            // Documents are independent; normalize them in parallel.
            texts
                .par_iter()
                .map(|cell| normalizer.normalize(cell.as_deref()))
                .collect::<Vec<String>>()
        };

        let total_rows = processed.len();
        let with_th = processed
            .iter()
            .filter(|p| p.split_whitespace().any(|t| t == "th"))
            .count();
        let empty = processed.iter().filter(|p| p.is_empty()).count();
        let short = processed
            .iter()
            .filter(|p| p.split_whitespace().count() <= 3)
            .count();

        let previews: Vec<Option<String>> = processed.iter().map(|p| Some(preview(p))).collect();
        let keep: Vec<bool> = previews
            .iter()
            .map(|p| p.as_deref().is_some_and(|s| !s.is_empty()))
            .collect();
        let dropped_rows = keep.iter().filter(|k| !**k).count();

        dataset.set_column(PROCESSED_COLUMN, processed.into_iter().map(Some).collect())?;
        dataset.set_column(PREVIEW_COLUMN, previews)?;
        dataset.retain_rows(|i| keep[i]);

        let summary = PrepSummary {
            total_rows,
            with_th_artifact: DiagnosticCount::of(with_th, total_rows),
            empty: DiagnosticCount::of(empty, total_rows),
            three_tokens_or_fewer: DiagnosticCount::of(short, total_rows),
            dropped_rows,
        };
        log::info!("{summary}");
        Ok(summary)
    }
}

/// First [`PREVIEW_LEN`] characters of the text, with [`PREVIEW_MARKER`]
/// appended when the text is longer. Counted in characters, never splitting
/// a UTF-8 sequence.
fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_LEN).collect();
    if chars.next().is_some() {
        head + PREVIEW_MARKER
    } else {
        head
    }
}
