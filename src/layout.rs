use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Header rows above the first microinstruction.
pub const HEADER_ROWS: usize = 1;
/// Microinstructions in the LC-3 control store.
pub const MICROCODE_ROWS: usize = 64;
/// Label columns left of the first control signal.
pub const HEADER_COLS: usize = 1;
/// Control signal bits per microinstruction.
pub const CONTROL_SIGNALS: usize = 49;

/// Rectangular window of the CSV table that holds the microcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub start_row: usize,
    pub row_count: usize,
    pub start_col: usize,
    pub col_count: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            start_row: HEADER_ROWS,
            row_count: MICROCODE_ROWS,
            start_col: HEADER_COLS,
            col_count: CONTROL_SIGNALS,
        }
    }
}

impl Layout {
    pub fn rows(&self) -> Range<usize> {
        self.start_row..self.min_rows()
    }

    pub fn cols(&self) -> Range<usize> {
        self.start_col..self.min_cols()
    }

    /// Rows the table must have for the window to fit. Saturates, so an
    /// oversized layout asks for more rows than any table holds.
    pub fn min_rows(&self) -> usize {
        self.start_row.saturating_add(self.row_count)
    }

    /// Cells every selected row must have for the window to fit.
    pub fn min_cols(&self) -> usize {
        self.start_col.saturating_add(self.col_count)
    }
}
