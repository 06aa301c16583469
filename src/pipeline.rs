//! Single streaming pass: parse each line, classify it, accumulate it.

use crate::Result;
use crate::logfile::LineGrammar;
use crate::model::Dataset;
use anyhow::Context;
use std::fmt::Debug;
use std::io::Write;

/// A kind of benchmark log the pipeline can consume.
pub trait Profile {
    /// Category a record is grouped under on the chart.
    type Key: Copy + PartialEq + Debug;
    type Record: Debug;

    /// Human-readable name used in diagnostics.
    const KIND: &'static str;
    const GRAMMAR: LineGrammar;

    /// Build a record from values in `GRAMMAR` field order.
    fn record(values: &[i64]) -> Self::Record;

    /// Category of an accepted line, taken from its free text.
    fn classify(line: &str) -> Self::Key;
}

/// Consume `lines` once and bucket every accepted record by category.
///
/// Rejected lines are echoed verbatim to `diagnostics` and skipped. Read
/// errors are fatal.
pub fn collect<P, I, W>(lines: I, mut diagnostics: W) -> Result<Dataset<P::Key, P::Record>>
where
    P: Profile,
    I: IntoIterator<Item = Result<String>>,
    W: Write,
{
    let mut dataset = Dataset::new();

    for (lineno, line) in lines.into_iter().enumerate() {
        let lno = lineno + 1;
        let line = line?;

        match P::GRAMMAR.extract(&line) {
            Ok(values) => {
                let key = P::classify(&line);
                let record = P::record(&values);
                log::debug!("{} line {}: {:?} {:?}", P::KIND, lno, key, record);
                dataset.push(key, record);
            }
            Err(reason) => {
                writeln!(diagnostics, "{}", line).context("write skipped line")?;
                log::warn!("{} line {} skipped: {}", P::KIND, lno, reason);
                dataset.reject();
            }
        }
    }

    log::info!(
        "{}: {} lines accepted, {} rejected",
        P::KIND,
        dataset.accepted(),
        dataset.rejected()
    );
    for (key, records) in dataset.categories() {
        log::info!("{}: {:?} -> {} records", P::KIND, key, records.len());
    }

    Ok(dataset)
}
