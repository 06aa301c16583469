use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

/// Single-pass stream of lines from a benchmark log file.
///
/// The file handle is owned by the stream and closed when it is dropped,
/// whether iteration ran to completion or stopped on an error.
pub struct LogLines {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

/// Open a log file for line-by-line reading.
pub fn open_log(path: impl AsRef<Path>) -> Result<LogLines> {
    let path = path.as_ref().to_path_buf();
    let file = File::open(&path).with_context(|| format!("open log file {}", path.display()))?;
    Ok(LogLines {
        path,
        lines: BufReader::new(file).lines(),
    })
}

impl Iterator for LogLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = &self.path;
        self.lines
            .next()
            .map(|line| line.with_context(|| format!("read log file {}", path.display())))
    }
}
