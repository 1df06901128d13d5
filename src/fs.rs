use eyre::{Result, WrapErr, eyre};
use std::io::BufRead;
use std::path::Path;
use walkdir::WalkDir;

/// Walk `dir` recursively and return every file path as a string.
/// Directories are skipped, symlinks to files are listed, and paths that are
/// not valid UTF-8 are left out. The root must exist and be a directory.
pub fn scan_folder(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(eyre!("not a directory: {}", dir.display()));
    }

    let mut files = Vec::new();
    let mut folders = 0usize;
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.wrap_err_with(|| format!("failed to walk {}", dir.display()))?;
        if entry.file_type().is_dir() {
            folders += 1;
            continue;
        }
        // Symlinks are not followed by the walk; resolve them so linked frames count.
        if !entry.path().is_file() {
            continue;
        }
        match entry.path().to_str() {
            Some(p) => files.push(p.to_string()),
            None => {
                tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 path");
            }
        }
    }
    tracing::debug!(dir = %dir.display(), files = files.len(), folders, "scanned folder");
    Ok(files)
}

/// Read one path per line, skipping blank lines.
pub fn read_path_list<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line.wrap_err("failed to read path list")?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            paths.push(line.to_string());
        }
    }
    Ok(paths)
}
