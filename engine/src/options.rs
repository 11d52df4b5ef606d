use std::path::{Path, PathBuf};

use crate::{error::SettingsError, locator::normalize};

pub const USAGE: &str = "usage: [--dir <install directory>] [--monitor <display index>]";

/// Command line options shared by both tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramOptions {
    /// Directory that settings paths are resolved against
    pub base_dir: PathBuf,
    /// Display to center the window on
    pub monitor: i32,
}

impl ProgramOptions {
    pub fn from_env() -> Result<Self, SettingsError> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let current_dir = std::env::current_dir()
            .map_err(|e| SettingsError::IoError(PathBuf::from("."), e))?;
        ProgramOptions::from_args(&args, &current_dir)
    }

    pub fn from_args(args: &[String], current_dir: &Path) -> Result<Self, SettingsError> {
        let mut options = ProgramOptions {
            base_dir: current_dir.to_path_buf(),
            monitor: 0,
        };

        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dir" => {
                    let dir = args.next().ok_or_else(|| missing_value(arg))?;
                    options.base_dir = normalize(&current_dir.join(dir));
                }
                "--monitor" => {
                    let monitor = args.next().ok_or_else(|| missing_value(arg))?;
                    options.monitor = monitor.parse::<i32>().map_err(|_| {
                        SettingsError::InvalidArgument(format!(
                            "'{}' is not a valid display index",
                            monitor
                        ))
                    })?;
                }
                other => {
                    return Err(SettingsError::InvalidArgument(format!(
                        "unknown option '{}'",
                        other
                    )))
                }
            }
        }

        Ok(options)
    }
}

fn missing_value(flag: &str) -> SettingsError {
    SettingsError::InvalidArgument(format!("missing value for '{}'", flag))
}
