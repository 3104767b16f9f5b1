use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("input and output paths are the same")]
    SamePath,
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("table has {found} rows, microcode window needs {needed}")]
    MissingRows { needed: usize, found: usize },
    #[error("row {row} has {found} cells, microcode window needs {needed}")]
    ShortRow {
        row: usize,
        needed: usize,
        found: usize,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
