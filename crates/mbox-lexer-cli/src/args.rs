use anyhow::{Result, bail};
use std::path::PathBuf;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    /// Archive to open; falls back to the configured archive when absent.
    pub file: Option<PathBuf>,
    /// Print the per-line classification instead of starting the viewer.
    pub dump: bool,
}

/// Parses arguments, excluding the program name.
pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--dump" => parsed.dump = true,
            flag if flag.starts_with("--") => bail!("unknown option `{flag}`"),
            path => {
                if parsed.file.is_some() {
                    bail!("only one archive can be opened at a time");
                }
                parsed.file = Some(PathBuf::from(path));
            }
        }
    }
    Ok(parsed)
}
