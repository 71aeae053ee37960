//! Listing the CSV files of a data folder.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Suffix a file name must end with to be listed. Matched case-sensitively.
pub const CSV_SUFFIX: &str = ".csv";

/// The outcome of scanning one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderListing {
    /// The scanned folder, exactly as passed in.
    pub folder: PathBuf,
    /// CSV file names in directory-listing order.
    pub files: Vec<String>,
}

impl FolderListing {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f == name)
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.folder.join(name)
    }
}

/// Returns `true` when `name` should be offered as a data file.
pub fn is_csv_name(name: &str) -> bool {
    name.ends_with(CSV_SUFFIX)
}

/// List the regular files directly inside `dir` whose name ends in `.csv`.
///
/// Sub-directories are not descended into and the result is not sorted.
/// Symlinks are followed when deciding whether an entry is a file.
pub fn scan_csv_folder(dir: impl AsRef<Path>) -> Result<FolderListing> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            log::debug!("skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        if is_csv_name(&name) {
            files.push(name);
        }
    }

    log::info!("found {} csv file(s) in {}", files.len(), dir.display());
    Ok(FolderListing {
        folder: dir.to_path_buf(),
        files,
    })
}
