use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ClipmarkError, Result};

use super::bookmark_storage::{corrupt_backup_path, load_bookmarks_from_path, save_bookmarks_to_path};

/// Ordered list of bookmarked texts mirrored to a JSON file
///
/// Every successful mutation rewrites the whole file, so after `add` or
/// `remove_at` returns `Ok` the file holds exactly `all()`. A failed save
/// rolls the mutation back; the in-memory list never runs ahead of the file.
///
/// Entries have no identity beyond their position. Removing by index is only
/// correct if the caller's view of the list is current.
#[derive(Debug)]
pub struct BookmarkStore {
    path: PathBuf,
    bookmarks: Vec<String>,
    selected: usize,
    /// Set when the file could not be loaded or moved aside; saves are
    /// refused so that file is never overwritten
    read_only: bool,
}

impl BookmarkStore {
    /// Load the store from `path`; a missing file gives an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let bookmarks = Self::load(&path)?;
        log::debug!("Loaded {} bookmarks from {}", bookmarks.len(), path.display());
        Ok(Self {
            path,
            bookmarks,
            selected: 0,
            read_only: false,
        })
    }

    /// Startup entry point that never fails.
    ///
    /// A corrupt file is moved aside and the store starts empty. Any other
    /// problem gives an empty store that refuses to save. The second value
    /// describes what went wrong, for the user.
    pub fn open_or_recover(path: impl Into<PathBuf>) -> (Self, Option<String>) {
        let path = path.into();
        let error = match Self::open(path.clone()) {
            Ok(store) => return (store, None),
            Err(e) => e,
        };
        log::error!("{}", error);

        if matches!(error, ClipmarkError::CorruptBookmarkFile { .. }) {
            match Self::recover(path.clone()) {
                Ok((store, backup)) => {
                    let warning = format!("{}. Moved it to {}", error, backup.display());
                    return (store, Some(warning));
                }
                Err(e) => {
                    let warning = format!(
                        "{}. Could not move it aside ({}); bookmarks will not be saved",
                        error, e
                    );
                    return (Self::detached(path), Some(warning));
                }
            }
        }

        let warning = format!(
            "Could not load bookmarks: {}; bookmarks will not be saved",
            error
        );
        (Self::detached(path), Some(warning))
    }

    fn detached(path: PathBuf) -> Self {
        Self {
            path,
            bookmarks: Vec::new(),
            selected: 0,
            read_only: true,
        }
    }

    /// True when saves are refused because the file could not be loaded
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Start empty after moving an unreadable file out of the way.
    ///
    /// Returns the store and the path the old file now lives at.
    pub fn recover(path: impl Into<PathBuf>) -> Result<(Self, PathBuf)> {
        let path = path.into();
        let backup = corrupt_backup_path(&path);
        fs::rename(&path, &backup)?;
        log::warn!(
            "Moved corrupt bookmark file {} to {}",
            path.display(),
            backup.display()
        );
        let store = Self {
            path,
            bookmarks: Vec::new(),
            selected: 0,
            read_only: false,
        };
        Ok((store, backup))
    }

    pub fn load(path: &Path) -> Result<Vec<String>> {
        load_bookmarks_from_path(path)
    }

    pub fn save(&self) -> Result<()> {
        if self.read_only {
            return Err(ClipmarkError::Io(io::Error::other(format!(
                "{} was not loaded, leaving it untouched",
                self.path.display()
            ))));
        }
        save_bookmarks_to_path(&self.path, &self.bookmarks)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn all(&self) -> &[String] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Append and persist. The new entry becomes the selection.
    pub fn add(&mut self, text: &str) -> Result<()> {
        self.bookmarks.push(text.to_string());
        if let Err(e) = self.save() {
            self.bookmarks.pop();
            return Err(e);
        }
        self.selected = self.bookmarks.len() - 1;
        Ok(())
    }

    /// Remove the entry at `index` and persist. Returns the removed text.
    pub fn remove_at(&mut self, index: usize) -> Result<String> {
        if index >= self.bookmarks.len() {
            return Err(ClipmarkError::IndexOutOfRange {
                index,
                len: self.bookmarks.len(),
            });
        }

        let removed = self.bookmarks.remove(index);
        if let Err(e) = self.save() {
            self.bookmarks.insert(index, removed);
            return Err(e);
        }

        if self.selected >= self.bookmarks.len() {
            self.selected = self.bookmarks.len().saturating_sub(1);
        }
        Ok(removed)
    }

    pub fn remove_selected(&mut self) -> Result<String> {
        self.remove_at(self.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&str> {
        self.bookmarks.get(self.selected).map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.bookmarks.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[cfg(test)]
#[path = "bookmark_store_tests.rs"]
mod bookmark_store_tests;
