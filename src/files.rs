//! Source file discovery for the CLI.

use crate::error::{FormatError, FormatResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions recognized as Clojure-family sources when walking directories.
const SOURCE_EXTENSIONS: [&str; 6] = ["clj", "cljs", "cljc", "cljd", "edn", "bb"];

/// Whether a path carries a recognized source extension.
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Collect the source files named by `paths`, in sorted order.
///
/// Directories are walked recursively with hidden directories and build
/// output skipped; files given explicitly are taken as-is, whatever their
/// extension.
pub fn collect_source_files(paths: &[PathBuf]) -> FormatResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, &mut files)?;
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(FormatError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            )));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> FormatResult<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') || name == "target" {
                continue;
            }
            walk_dir(&path, files)?;
        } else if is_source_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}
