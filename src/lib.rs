//! textprep — corpus preparation for news-article dictionary generation.
//!
//! Two independent, stateless components over an in-memory tabular dataset:
//!
//! - **Category bucketing** ([`categories`]): maps free-text topical labels
//!   onto five fixed broad categories via static set membership, dropping
//!   unmatched rows.
//! - **Text preprocessing** ([`pipeline`]): builds a corpus-derived stopword
//!   set, then cleans, tokenizes, POS-tags, and lemmatizes each document,
//!   producing a normalized string and a bounded preview.
//!
//! The [`transforms`] module additionally exposes the earlier standalone
//! token transforms (tokenize, normalize, stopword removal, lemmatize, stem,
//! join) as independent, composable stages.
//!
//! # Example
//!
//! ```
//! use textprep::{categorize, column_of, Dataset, Preprocessor};
//!
//! let mut dataset = Dataset::from_columns([
//!     ("category", column_of(["France", "Bitcoin", "Zzyzx"])),
//!     (
//!         "full_content",
//!         column_of([
//!             "Paris hosted the climate summit this year.",
//!             "Bitcoin rallied after the halving event.",
//!             "Unlabeled row that will be dropped.",
//!         ]),
//!     ),
//! ])
//! .unwrap();
//!
//! let report = categorize(&mut dataset, "category").unwrap();
//! assert_eq!(report.unmatched_labels, vec!["Zzyzx".to_string()]);
//!
//! // On a corpus this small the frequency cut would swallow every
//! // substantive token, so disable it; real corpora keep the default of 50.
//! let summary = Preprocessor::new()
//!     .with_frequency_cutoff(0)
//!     .run(&mut dataset)
//!     .unwrap();
//! assert_eq!(summary.total_rows, 2);
//! assert_eq!(dataset.len(), 2);
//!
//! let processed = dataset.column(textprep::PROCESSED_COLUMN).unwrap();
//! assert!(processed[1].as_deref().unwrap().contains("bitcoin"));
//! ```

pub mod categories;
pub mod dataset;
pub mod nlp;
pub mod pipeline;
pub mod transforms;
pub mod types;

pub use categories::{categorize, classify, BroadCategory, CategorizeReport, BROAD_CATEGORY_COLUMN};
pub use dataset::{column_of, Dataset, DatasetError};
pub use nlp::lemmatizer::Lemmatizer;
pub use nlp::stemmer::Stemmer;
pub use nlp::stopwords::StopwordFilter;
pub use pipeline::{DocumentNormalizer, PrepSummary, Preprocessor, PREVIEW_COLUMN, PROCESSED_COLUMN};
pub use types::{LemmaCategory, PosTag, PrepConfig};
