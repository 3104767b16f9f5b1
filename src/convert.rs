use std::path::Path;

use tracing::info;

use crate::error::ConvertError;
use crate::layout::Layout;
use crate::table::Table;
use crate::ucode::Ucode;

/// Convert the CSV microcode table at `csv_path` into a ucode file at
/// `ucode_path`.
///
/// The input is read and the whole window validated before the output is
/// opened, so a bad table never truncates an existing ucode file. Paths are
/// compared as given, byte for byte.
pub fn convert(
    csv_path: &Path,
    ucode_path: &Path,
    layout: &Layout,
) -> Result<Ucode, ConvertError> {
    if csv_path.as_os_str() == ucode_path.as_os_str() {
        return Err(ConvertError::SamePath);
    }

    let table = Table::load(csv_path)?;
    let ucode = Ucode::from_table(&table, layout)?;
    ucode.save(ucode_path)?;

    info!(
        input = %csv_path.display(),
        output = %ucode_path.display(),
        words = ucode.len(),
        "wrote ucode"
    );
    Ok(ucode)
}
