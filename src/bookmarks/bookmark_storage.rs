use std::ffi::OsString;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::config::CONFIG_DIR;
use crate::error::{ClipmarkError, Result};

const BOOKMARKS_FILE: &str = "bookmarks.json";
const CORRUPT_SUFFIX: &str = ".corrupt";

pub fn bookmarks_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(BOOKMARKS_FILE))
}

/// Where a corrupt bookmark file is moved before starting over.
///
/// `<file>.corrupt` if that name is free, otherwise the first free
/// `<file>.corrupt.N`, so an earlier backup is never overwritten.
pub fn corrupt_backup_path(path: &Path) -> PathBuf {
    let mut base = OsString::from(path.as_os_str());
    base.push(CORRUPT_SUFFIX);
    let base = PathBuf::from(base);

    let mut candidate = base.clone();
    let mut n: u32 = 0;
    while candidate.symlink_metadata().is_ok() {
        n += 1;
        let mut name = base.clone().into_os_string();
        name.push(format!(".{}", n));
        candidate = PathBuf::from(name);
    }
    candidate
}

/// Read the bookmark list. A missing file is an empty list.
pub fn load_bookmarks_from_path(path: &Path) -> Result<Vec<String>> {
    // Raw bytes: invalid UTF-8 is a JSON error, not an I/O one
    let contents = match fs::read(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    parse_bookmarks_json(path, &contents)
}

/// The file must be a JSON array of strings and nothing else
pub fn parse_bookmarks_json(path: &Path, content: impl AsRef<[u8]>) -> Result<Vec<String>> {
    serde_json::from_slice::<Vec<String>>(content.as_ref()).map_err(|source| {
        ClipmarkError::CorruptBookmarkFile {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Replace the file with the full list.
///
/// The JSON goes to a temp file in the same directory, which is then renamed
/// over `path`; readers see either the old list or the new one.
pub fn save_bookmarks_to_path(path: &Path, bookmarks: &[String]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string(bookmarks).map_err(io::Error::from)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    log::debug!("Saved {} bookmarks to {}", bookmarks.len(), path.display());
    Ok(())
}

#[cfg(test)]
#[path = "bookmark_storage_tests.rs"]
mod bookmark_storage_tests;
