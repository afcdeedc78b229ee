//! In-memory tabular dataset.
//!
//! A small column-oriented table: named columns of optional strings, all the
//! same length. Both the category classifier and the preprocessing pipeline
//! mutate a [`Dataset`] in place — adding derived columns and dropping rows —
//! the way the source datasets they were written for are handled.
//!
//! Column order is preserved (insertion order), so iteration and reporting
//! are deterministic.

use indexmap::IndexMap;
use thiserror::Error;

/// Errors raised by dataset column operations.
///
/// These are the only fallible operations in the crate: every other contract
/// degrades gracefully (absent cells become empty strings, unknown labels
/// become the sentinel category).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("column not found: `{0}`")]
    ColumnMissing(String),
    #[error("column `{name}` has {got} values but the dataset has {expected} rows")]
    LengthMismatch {
        name: String,
        got: usize,
        expected: usize,
    },
}

/// A column-oriented in-memory table with named columns of optional strings.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: IndexMap<String, Vec<Option<String>>>,
}

impl Dataset {
    /// Create an empty dataset (no columns, no rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from `(name, values)` pairs.
    ///
    /// All columns must have the same length.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (S, Vec<Option<String>>)>,
        S: Into<String>,
    {
        let mut dataset = Self::new();
        for (name, values) in columns {
            dataset.set_column(name.into(), values)?;
        }
        Ok(dataset)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, |(_, col)| col.len())
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Whether a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Read a column by name.
    pub fn column(&self, name: &str) -> Result<&[Option<String>], DatasetError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| DatasetError::ColumnMissing(name.to_string()))
    }

    /// Add a column, or overwrite an existing one with the same name.
    ///
    /// The value count must match the current row count, unless the dataset
    /// has no columns yet (the first column defines the row count).
    pub fn set_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<Option<String>>,
    ) -> Result<(), DatasetError> {
        let name = name.into();
        if !self.columns.is_empty() {
            let expected = self.len();
            // Overwriting the only column may change the row count freely.
            let is_sole_column = self.columns.len() == 1 && self.columns.contains_key(&name);
            if !is_sole_column && values.len() != expected {
                return Err(DatasetError::LengthMismatch {
                    name,
                    got: values.len(),
                    expected,
                });
            }
        }
        self.columns.insert(name, values);
        Ok(())
    }

    /// Keep only the rows whose index satisfies the predicate.
    ///
    /// Removal is applied to every column, in place.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize) -> bool,
    {
        let mask: Vec<bool> = (0..self.len()).map(|i| keep(i)).collect();
        for (_, col) in self.columns.iter_mut() {
            let mut it = mask.iter();
            col.retain(|_| *it.next().unwrap_or(&false));
        }
    }
}

/// Convenience for building string columns in tests and examples.
pub fn column_of<I, S>(values: I) -> Vec<Option<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(|v| Some(v.into())).collect()
}
