//! The two benchmark logs: their grammar, record shape, and category key.

use crate::logfile::{LineGrammar, REHASH_PROFILE, TEST_RESULTS};
use crate::model::tag::{Library, Operation};
use crate::pipeline::Profile;

/// One insertion from the rehash profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RehashRecord {
    pub element_index: i64,
    pub time_us: i64,
    pub bucket_count: i64,
}

/// One timed batch from the test results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRecord {
    pub element_count: i64,
    pub time_us: i64,
}

/// Bucket growth and insertion time per element (`rehash_profile.txt`).
pub struct RehashProfile;

impl Profile for RehashProfile {
    type Key = Library;
    type Record = RehashRecord;

    const KIND: &'static str = "rehash profile";
    const GRAMMAR: LineGrammar = REHASH_PROFILE;

    fn record(values: &[i64]) -> RehashRecord {
        RehashRecord {
            element_index: values[0],
            time_us: values[1],
            bucket_count: values[2],
        }
    }

    fn classify(line: &str) -> Library {
        Library::classify(line)
    }
}

/// Per-operation batch timings (`test_results.txt`).
pub struct ResultsProfile;

impl Profile for ResultsProfile {
    type Key = (Library, Operation);
    type Record = ResultRecord;

    const KIND: &'static str = "test results";
    const GRAMMAR: LineGrammar = TEST_RESULTS;

    fn record(values: &[i64]) -> ResultRecord {
        ResultRecord {
            element_count: values[0],
            time_us: values[1],
        }
    }

    fn classify(line: &str) -> (Library, Operation) {
        (Library::classify(line), Operation::classify(line))
    }
}
