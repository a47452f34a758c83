// File: crates/bench-plot/src/loader.rs
// Summary: Reads a benchmark results CSV (header + `changes,avg_ms` rows) into `Samples`.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{LoadError, Result};
use crate::samples::{Sample, Samples};

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "out.csv";

/// Load samples from the CSV file at `path`.
///
/// The first row is discarded unconditionally as a header. Every following row
/// must hold an integer change count in field 0 and a decimal average time in
/// field 1; extra fields are ignored. The file is closed before this returns,
/// on success or failure.
pub fn load(path: impl AsRef<Path>) -> Result<Samples> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound { path: path.to_path_buf() },
        _ => LoadError::Io { path: path.to_path_buf(), source },
    })?;
    let samples = from_reader(file, path)?;
    debug!(path = %path.display(), rows = samples.len(), "loaded benchmark samples");
    Ok(samples)
}

/// Parse samples from any reader; `source` only names the input in errors.
///
/// Blank lines are rows with no fields: the first row is still discarded as the
/// header whatever it holds, and a blank data row fails as a missing field.
pub fn from_reader<R: Read>(mut reader: R, source: &Path) -> Result<Samples> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| LoadError::Io { path: source.to_path_buf(), source: e })?;
    let lines = LineIndex::new(&buf);

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(buf.as_slice());

    let blank = csv::StringRecord::new();
    let mut rec = csv::StringRecord::new();
    let mut rows = Rows::default();
    loop {
        let from = rdr.position().byte() as usize;
        let more = rdr
            .read_record(&mut rec)
            .map_err(|e| LoadError::from_csv(source.to_path_buf(), e))?;

        // The csv reader skips empty lines; recover them from the bytes it passed over.
        let start = if more { content_start(&buf, from) } else { buf.len() };
        let prev_line = if from == 0 { 0 } else { lines.line_of(from - 1) };
        let line = lines.line_of(start);
        for blank_line in prev_line + 1..line {
            rows.accept(&blank, blank_line)?;
        }
        if !more {
            break;
        }
        rows.accept(&rec, line)?;
    }

    if !rows.header_seen {
        return Err(LoadError::MissingHeader { path: source.to_path_buf() });
    }
    Ok(rows.samples)
}

/// Header-then-data row handling shared by real and blank rows.
#[derive(Default)]
struct Rows {
    header_seen: bool,
    samples: Samples,
}

impl Rows {
    fn accept(&mut self, rec: &csv::StringRecord, line: u64) -> Result<()> {
        if !self.header_seen {
            self.header_seen = true;
            trace!(line, header = ?rec, "skipping header row");
            return Ok(());
        }
        self.samples.push(parse_row(rec, line)?);
        Ok(())
    }
}

/// Byte offsets where each physical line starts. `\n`, `\r\n` and a lone `\r` end a line.
struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(buf: &[u8]) -> Self {
        let mut starts = vec![0];
        for (i, &b) in buf.iter().enumerate() {
            let ends_line = b == b'\n' || (b == b'\r' && buf.get(i + 1) != Some(&b'\n'));
            if ends_line {
                starts.push(i + 1);
            }
        }
        Self { starts }
    }

    /// 1-based line holding byte `offset`; `buf.len()` maps past the last terminator.
    fn line_of(&self, offset: usize) -> u64 {
        self.starts.partition_point(|&s| s <= offset) as u64
    }
}

/// First byte at or after `from` that is not a line terminator.
fn content_start(buf: &[u8], from: usize) -> usize {
    buf[from.min(buf.len())..]
        .iter()
        .position(|&b| b != b'\r' && b != b'\n')
        .map_or(buf.len(), |n| from + n)
}

fn parse_row(rec: &csv::StringRecord, line: u64) -> Result<Sample> {
    let (Some(changes), Some(avg)) = (rec.get(0), rec.get(1)) else {
        return Err(LoadError::MissingField { line, found: rec.len() });
    };
    let change_count = changes.parse::<i64>().map_err(|_| LoadError::InvalidNumber {
        line,
        field: 0,
        value: changes.to_string(),
        expected: "an integer",
    })?;
    let avg_time_ms = avg.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        line,
        field: 1,
        value: avg.to_string(),
        expected: "a decimal number",
    })?;
    Ok(Sample { change_count, avg_time_ms })
}
