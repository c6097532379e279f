use std::path::PathBuf;

use crate::errors::{Error, Result};

/// Command-line options: `[--config <path>] [--logs <dir>] [--no-color]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Explicit config file; must exist when given.
    pub config_path: Option<PathBuf>,
    pub logs_dir: PathBuf,
    pub no_color: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config_path: None,
            logs_dir: PathBuf::from("logs"),
            no_color: false,
        }
    }
}

impl CliArgs {
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => parsed.config_path = Some(Self::next_path(&mut args, "--config")?),
                "--logs" => parsed.logs_dir = Self::next_path(&mut args, "--logs")?,
                "--no-color" => parsed.no_color = true,
                _ => return Err(Error::parse(format!("Unknown argument: {arg}"))),
            }
        }
        Ok(parsed)
    }

    fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .map(PathBuf::from)
            .ok_or_else(|| Error::parse(format!("Missing value for {flag}")))
    }
}
