//! Keyed, insertion-ordered row collection

use std::collections::HashMap;

use crate::domain::{QuoteRecord, Row};

/// Currently known rows, at most one per `symbol_level`, in first-seen order
#[derive(Debug, Default, Clone)]
pub struct RowCollection {
    rows: Vec<Row>,
    index: HashMap<String, usize>,
    revision: u64,
}

impl RowCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new row at the end, or overwrite an existing row in place.
    /// Every call bumps the revision, including updates with identical values.
    pub fn upsert(&mut self, record: QuoteRecord) {
        self.revision += 1;

        match self.index.get(&record.symbol_level) {
            Some(&position) => self.rows[position].apply(record),
            None => {
                self.index
                    .insert(record.symbol_level.clone(), self.rows.len());
                self.rows.push(Row::from(record));
            }
        }
    }

    /// Rows in display order. Has no side effects.
    #[inline]
    pub fn snapshot(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, symbol_level: &str) -> Option<&Row> {
        self.index.get(symbol_level).map(|&i| &self.rows[i])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of upserts applied so far
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
