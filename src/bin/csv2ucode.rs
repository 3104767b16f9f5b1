use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use csv2ucode::{convert, ConvertError, Layout};

const USAGE: &str = concat!(env!("CARGO_BIN_NAME"), " <csv path> <ucode output path>");

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert a CSV microcode table into an LC-3 ucode file"
)]
struct Opts {
    #[arg(value_name = "CSV", allow_hyphen_values = true)]
    csv: Option<PathBuf>,
    #[arg(value_name = "UCODE", allow_hyphen_values = true)]
    ucode: Option<PathBuf>,
    // Anything past the two paths is ignored.
    #[allow(dead_code)]
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<std::ffi::OsString>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{USAGE}");
            return Ok(ExitCode::from(1));
        }
    };
    let (Some(csv), Some(ucode)) = (opts.csv, opts.ucode) else {
        println!("{USAGE}");
        return Ok(ExitCode::from(1));
    };

    match convert(&csv, &ucode, &Layout::default()) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(ConvertError::SamePath) => {
            println!("{}", ConvertError::SamePath);
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(anyhow::Error::new(e).context(format!("converting {}", csv.display()))),
    }
}
