//! Category tags derived from the free text of a log line.

use std::fmt;

/// Token identifying lines produced by the standard-library container.
pub const COMPARISON_TOKEN: &str = "unordered_map";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Library {
    HashTable,
    UnorderedMap,
}

impl Library {
    /// Case-sensitive containment test; anything else is the custom table.
    pub fn classify(line: &str) -> Self {
        if line.contains(COMPARISON_TOKEN) {
            Library::UnorderedMap
        } else {
            Library::HashTable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Library::HashTable => "hash_table",
            Library::UnorderedMap => "unordered_map",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Insert,
    At,
    Remove,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Insert, Operation::At, Operation::Remove];

    /// First match wins: `insert()`, then `at()`; everything else is a removal.
    pub fn classify(line: &str) -> Self {
        if line.contains("insert()") {
            Operation::Insert
        } else if line.contains("at()") {
            Operation::At
        } else {
            Operation::Remove
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::At => "at",
            Operation::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
