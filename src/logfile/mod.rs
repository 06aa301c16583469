//! Reading and field extraction for the hash-table benchmark logs.

pub mod grammar;
pub mod reader;

pub use grammar::{LineGrammar, REHASH_PROFILE, TEST_RESULTS};
pub use reader::open_log;
