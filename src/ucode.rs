use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConvertError;
use crate::layout::Layout;
use crate::table::Table;

/// Spreadsheet marker for a deasserted control signal.
pub const BLANK_CELL: &str = " ";
/// What a blank marker becomes in the ucode file.
pub const BLANK_BIT: &str = "0";

/// Replace the blank marker, pass anything else through untouched.
pub fn substitute(cell: &str) -> &str {
    if cell == BLANK_CELL {
        BLANK_BIT
    } else {
        cell
    }
}

/// One microinstruction: its control signal cells joined without separators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Microword(pub String);

impl Microword {
    pub fn from_cells<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self(cells.into_iter().map(substitute).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Microword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The control store image, one microword per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ucode {
    pub words: Vec<Microword>,
}

impl Ucode {
    /// Cut `layout` out of `table`. The table must cover the whole window.
    pub fn from_table(table: &Table, layout: &Layout) -> Result<Self, ConvertError> {
        if table.len() < layout.min_rows() {
            return Err(ConvertError::MissingRows {
                needed: layout.min_rows(),
                found: table.len(),
            });
        }
        debug!(?layout, rows = table.len(), "applying microcode window");

        let cols = layout.cols();
        let mut words = Vec::with_capacity(layout.row_count);
        for (row, cells) in table.rows[layout.rows()].iter().enumerate() {
            let Some(signals) = cells.get(cols.clone()) else {
                return Err(ConvertError::ShortRow {
                    row: layout.start_row + row,
                    needed: layout.min_cols(),
                    found: cells.len(),
                });
            };
            words.push(Microword::from_cells(signals.iter().map(String::as_str)));
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> std::io::Result<()> {
        for word in &self.words {
            writeln!(w, "{word}")?;
        }
        w.flush()
    }

    /// Create or truncate `path` and write every microword to it.
    pub fn save(&self, path: &Path) -> Result<(), ConvertError> {
        let write_err = |source| ConvertError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_err)?;
        self.write_to(BufWriter::new(file)).map_err(write_err)
    }
}

impl fmt::Display for Ucode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            writeln!(f, "{word}")?;
        }
        Ok(())
    }
}
