//! Line-oriented `key=value` access for INI-style settings files.
//!
//! Files are never parsed as a whole: a setting is the first line that starts
//! with `<key>=`, and every other line is treated as opaque text that must
//! survive a rewrite byte-for-byte.

use std::{fs, path::Path};

use crate::error::{from_io, SettingsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Fail with `FileNotFound` if the file is absent
    ExistingOnly,
    /// Treat an absent file as empty and create it, along with its directory
    CreateIfMissing,
}

/// Returns the value of the first line starting with `<key>=`.
///
/// The value is everything after the first `=`, with trailing whitespace
/// (including a `\r` line ending) removed.
pub fn find_value<'a>(contents: &'a str, key: &str) -> Option<&'a str> {
    let prefix = key_prefix(key);
    contents
        .lines()
        .map(str::trim_end)
        .find(|line| line.starts_with(&prefix))
        .map(|line| &line[prefix.len()..])
}

/// Replaces the value of the first `<key>=` line, or appends `<key>=<value>`
/// if there is none. All other lines are copied verbatim, line endings included.
pub fn rewrite_value(contents: &str, key: &str, value: &str) -> String {
    let prefix = key_prefix(key);
    let mut output = String::with_capacity(contents.len() + prefix.len() + value.len() + 2);
    let mut replaced = false;

    for line in contents.split_inclusive('\n') {
        if !replaced && line.starts_with(&prefix) {
            output.push_str(&prefix);
            output.push_str(value);
            output.push_str(line_ending(line));
            replaced = true;
        } else {
            output.push_str(line);
        }
    }

    if !replaced {
        let ending = first_line_ending(contents);
        // don't glue the new setting onto an unterminated last line
        if !contents.is_empty() && !contents.ends_with('\n') {
            output.push_str(ending);
        }
        output.push_str(&prefix);
        output.push_str(value);
        output.push_str(ending);
    }

    output
}

/// Reads `key` from the file at `path`. `Ok(None)` means the file exists but
/// has no such line.
pub fn read_value(path: &Path, key: &str) -> Result<Option<String>, SettingsError> {
    let contents = fs::read_to_string(path).map_err(|e| from_io(path, e))?;
    let value = find_value(&contents, key).map(str::to_owned);
    log::debug!("read {} from {}: {:?}", key, path.display(), value);
    Ok(value)
}

/// Rewrites the file at `path` with `key` set to `value`.
///
/// The file is read fully, then overwritten in place.
pub fn write_value(
    path: &Path,
    key: &str,
    value: &str,
    mode: WriteMode,
) -> Result<(), SettingsError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && mode == WriteMode::CreateIfMissing => {
            create_parent_dir(path)?;
            log::info!("creating {}", path.display());
            String::new()
        }
        Err(e) => return Err(from_io(path, e)),
    };

    let rewritten = rewrite_value(&contents, key, value);
    fs::write(path, rewritten).map_err(|e| SettingsError::IoError(path.to_path_buf(), e))?;
    log::debug!("wrote {}={} to {}", key, value, path.display());
    Ok(())
}

fn key_prefix(key: &str) -> String {
    format!("{}=", key)
}

fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

fn first_line_ending(contents: &str) -> &'static str {
    contents
        .split_inclusive('\n')
        .map(line_ending)
        .find(|ending| !ending.is_empty())
        .unwrap_or("\n")
}

fn create_parent_dir(path: &Path) -> Result<(), SettingsError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| SettingsError::IoError(parent.to_path_buf(), e)),
        _ => Ok(()),
    }
}
