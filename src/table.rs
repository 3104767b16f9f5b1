use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::ConvertError;

/// A CSV file held in memory as rows of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse comma separated values. The first line is data like any other
    /// and rows may differ in length.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ConvertError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(csv::Error::from)?;
        Self::parse(&bytes)
    }

    /// Blank lines become empty rows so row indices keep matching the file.
    fn parse(bytes: &[u8]) -> Result<Self, ConvertError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut record = StringRecord::new();
        let mut start = 0;
        let mut after_cr = false;
        while rdr.read_record(&mut record)? {
            let end = rdr.position().byte() as usize;
            let consumed = &bytes[start..end];
            // the reader swallows empty lines in front of a record
            for _ in 0..leading_blank_lines(consumed, after_cr) {
                rows.push(Vec::new());
            }
            rows.push(record.iter().map(str::to_owned).collect());
            after_cr = consumed.last() == Some(&b'\r');
            start = end;
        }
        Ok(Self { rows })
    }

    /// Read the whole file, then parse it.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let bytes = std::fs::read(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&bytes)?;
        debug!(path = %path.display(), rows = table.len(), "loaded csv table");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, idx: usize) -> Option<&[String]> {
        self.rows.get(idx).map(Vec::as_slice)
    }
}

/// Count the line terminators at the front of `consumed`. When the previous
/// record stopped on a `\r`, a leading `\n` finishes that CRLF instead.
fn leading_blank_lines(consumed: &[u8], after_cr: bool) -> usize {
    let mut rest = consumed;
    if after_cr {
        rest = rest.strip_prefix(b"\n").unwrap_or(rest);
    }
    let mut count = 0;
    loop {
        let next = rest
            .strip_prefix(b"\r\n")
            .or_else(|| rest.strip_prefix(b"\n"))
            .or_else(|| rest.strip_prefix(b"\r"));
        match next {
            Some(r) => rest = r,
            None => break,
        }
        count += 1;
    }
    count
}
