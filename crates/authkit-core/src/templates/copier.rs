//! Template directory copying with project name substitution

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Literal token replaced with the project name in every copied line
pub const PLACEHOLDER: &str = "{{PROJECT_NAME}}";

/// Recursively copy `source_dir` into `dest_dir`, replacing [`PLACEHOLDER`]
/// with `project_name` in every line.
///
/// Files are treated as text and every line is written back with a trailing
/// `\n`. Fails before copying anything if `dest_dir` already has entries. An
/// error mid-copy aborts immediately and leaves written files in place.
///
/// Returns the paths of copied files, relative to `dest_dir`.
pub fn copy_template(
    source_dir: &Path,
    dest_dir: &Path,
    project_name: &str,
) -> Result<Vec<PathBuf>> {
    if has_entries(dest_dir)? {
        return Err(Error::DestinationNotEmpty(dest_dir.to_path_buf()));
    }

    let mut copied_files = Vec::new();

    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source_dir).to_path_buf();
            Error::copy(path, e)
        })?;

        let relative = entry
            .path()
            .strip_prefix(source_dir)
            .unwrap_or(entry.path());
        let target = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::copy(&target, e))?;
        } else {
            copy_file(entry.path(), &target, project_name)?;
            copied_files.push(relative.to_path_buf());
        }
    }

    Ok(copied_files)
}

/// True if `dir` exists as a directory with at least one entry
fn has_entries(dir: &Path) -> Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }
    let mut entries = fs::read_dir(dir).map_err(|e| Error::copy(dir, e))?;
    Ok(entries.next().is_some())
}

fn copy_file(source: &Path, target: &Path, project_name: &str) -> Result<()> {
    let input = File::open(source).map_err(|e| Error::copy(source, e))?;
    let output = File::create(target).map_err(|e| Error::copy(target, e))?;
    let mut writer = BufWriter::new(output);

    for line in BufReader::new(input).lines() {
        let line = line.map_err(|e| Error::copy(source, e))?;
        writeln!(writer, "{}", substitute(&line, project_name))
            .map_err(|e| Error::copy(target, e))?;
    }

    writer.flush().map_err(|e| Error::copy(target, e))
}

/// Replace every occurrence of the placeholder in one line
pub fn substitute(line: &str, project_name: &str) -> String {
    line.replace(PLACEHOLDER, project_name)
}
