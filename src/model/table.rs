//! Row-oriented tables handed to the chart renderer.

use crate::model::dataset::Dataset;
use crate::model::profile::{RehashRecord, ResultRecord};
use crate::model::tag::{Library, Operation};

pub const ELEMENT_INDEX: &str = "i-th element";
pub const BUCKET_COUNT: &str = "bucket count";
pub const TIME_US: &str = "time (us)";
pub const LIBRARY_NAME: &str = "library name";
pub const ELEMENT_COUNT: &str = "number of elements";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Int(i64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn push(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }
}

/// One row per accepted rehash line, both libraries in a single table.
pub fn rehash_table(dataset: &Dataset<Library, RehashRecord>) -> Table {
    let mut table = Table::new(&[ELEMENT_INDEX, BUCKET_COUNT, TIME_US, LIBRARY_NAME]);
    for (library, records) in dataset.categories() {
        for r in records {
            table.push(vec![
                Cell::Int(r.element_index),
                Cell::Int(r.bucket_count),
                Cell::Int(r.time_us),
                Cell::Text(library.label().to_string()),
            ]);
        }
    }
    table
}

/// One table per operation, holding both libraries' records for it.
pub fn results_table(
    dataset: &Dataset<(Library, Operation), ResultRecord>,
    operation: Operation,
) -> Table {
    let mut table = Table::new(&[ELEMENT_COUNT, LIBRARY_NAME, TIME_US]);
    for ((library, op), records) in dataset.categories() {
        if op != operation {
            continue;
        }
        for r in records {
            table.push(vec![
                Cell::Int(r.element_count),
                Cell::Text(library.label().to_string()),
                Cell::Int(r.time_us),
            ]);
        }
    }
    table
}
