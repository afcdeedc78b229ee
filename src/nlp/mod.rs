//! Natural Language Processing components
//!
//! This module provides text cleaning, tokenization, stopword filtering,
//! part-of-speech tagging, lemmatization, and stemming.

pub mod lemmatizer;
pub mod stemmer;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
