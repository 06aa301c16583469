//! Record model: category tags, per-category accumulation, table assembly.

pub mod dataset;
pub mod profile;
pub mod table;
pub mod tag;

pub use dataset::Dataset;
pub use profile::{RehashProfile, ResultsProfile};
pub use table::{Cell, Table, rehash_table, results_table};
pub use tag::Operation;
