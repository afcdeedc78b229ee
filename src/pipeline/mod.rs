//! Preprocessing pipeline
//!
//! This module provides per-document normalization and the orchestrator
//! that runs it over a dataset.

pub mod normalizer;
pub mod runner;

pub use normalizer::DocumentNormalizer;
pub use runner::{PrepSummary, Preprocessor, PREVIEW_COLUMN, PROCESSED_COLUMN};
