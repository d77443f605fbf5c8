//! Working set layered over the read-only seed tree: edited contents, open tabs,
//! the active tab and dirty tracking.
//!
//! Per path: `Unopened -> Open/Clean -> Open/Dirty -> Open/Clean (save)`, and
//! closing keeps content and dirty state cached for the next `open`.

use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

use crate::models::SeedTree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStoreError {
    NotFound(String),
    NotOpen(String),
}

impl fmt::Display for FileStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStoreError::NotFound(path) => write!(f, "no file at {path}"),
            FileStoreError::NotOpen(path) => write!(f, "{path} is not open"),
        }
    }
}

impl std::error::Error for FileStoreError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItem {
    pub path: String,
    pub title: String,
    pub dirty: bool,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct VirtualFileStore {
    tree: SeedTree,
    contents: FxHashMap<String, String>,
    saved: FxHashMap<String, String>,
    open_paths: Vec<String>,
    active: Option<String>,
    dirty: FxHashSet<String>,
}

impl VirtualFileStore {
    /// Store with nothing open.
    pub fn empty(tree: SeedTree) -> Self {
        Self {
            tree,
            contents: FxHashMap::default(),
            saved: FxHashMap::default(),
            open_paths: Vec::new(),
            active: None,
            dirty: FxHashSet::default(),
        }
    }

    /// Store with `default_file` open and active. An unresolvable default leaves
    /// the editor empty.
    pub fn new(tree: SeedTree, default_file: &str) -> Self {
        let mut store = Self::empty(tree);
        if !store.open(default_file) {
            tracing::warn!(path = %default_file, "default file not in seed tree");
        }
        store
    }

    pub fn tree(&self) -> &SeedTree {
        &self.tree
    }

    pub fn resolve(&self, path: &str) -> Result<&str, FileStoreError> {
        self.tree
            .file_body(path)
            .ok_or_else(|| FileStoreError::NotFound(path.to_string()))
    }

    pub fn open(&mut self, path: &str) -> bool {
        let seed = match self.resolve(path) {
            Ok(body) => body.to_string(),
            Err(e) => {
                tracing::debug!(error = %e, "open ignored");
                return false;
            }
        };

        if !self.is_open(path) {
            self.open_paths.push(path.to_string());
        }
        self.active = Some(path.to_string());
        self.contents.entry(path.to_string()).or_insert(seed);

        tracing::debug!(path = %path, tabs = self.open_paths.len(), "file opened");
        true
    }

    /// Returns whether a tab was removed. When the active tab closes, focus goes
    /// to the first remaining tab.
    pub fn close(&mut self, path: &str) -> bool {
        let Some(index) = self.open_paths.iter().position(|p| p == path) else {
            return false;
        };
        self.open_paths.remove(index);

        if self.active.as_deref() == Some(path) {
            self.active = self.open_paths.first().cloned();
        }

        tracing::debug!(
            path = %path,
            active = ?self.active,
            dirty = self.dirty.contains(path),
            "file closed"
        );
        true
    }

    pub fn edit(&mut self, path: &str, text: impl Into<String>) -> Result<(), FileStoreError> {
        if !self.is_open(path) {
            return Err(FileStoreError::NotOpen(path.to_string()));
        }
        self.contents.insert(path.to_string(), text.into());
        self.dirty.insert(path.to_string());
        Ok(())
    }

    /// Commits the current contents of `path` as its saved baseline. No-op unless
    /// `path` is dirty.
    pub fn save(&mut self, path: &str) -> bool {
        if !self.dirty.remove(path) {
            return false;
        }
        if let Some(text) = self.contents.get(path) {
            self.saved.insert(path.to_string(), text.clone());
        }
        tracing::info!(path = %path, "file saved");
        true
    }

    pub fn save_active(&mut self) -> bool {
        match self.active.clone() {
            Some(path) => self.save(&path),
            None => false,
        }
    }

    pub fn active_text(&self) -> &str {
        self.active
            .as_deref()
            .and_then(|path| self.contents.get(path))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn active_path(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn open_paths(&self) -> &[String] {
        &self.open_paths
    }

    pub fn is_open(&self, path: &str) -> bool {
        self.open_paths.iter().any(|p| p == path)
    }

    pub fn is_dirty(&self, path: &str) -> bool {
        self.dirty.contains(path)
    }

    pub fn dirty_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.dirty.iter().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Current body of a file that has been opened at least once.
    pub fn contents(&self, path: &str) -> Option<&str> {
        self.contents.get(path).map(String::as_str)
    }

    /// Last saved body, or the seed body if the file was never saved.
    pub fn saved_contents(&self, path: &str) -> Option<&str> {
        self.saved
            .get(path)
            .map(String::as_str)
            .or_else(|| self.tree.file_body(path))
    }

    pub fn tabs(&self) -> Vec<TabItem> {
        self.open_paths
            .iter()
            .map(|path| TabItem {
                path: path.clone(),
                title: path.rsplit('/').next().unwrap_or(path).to_string(),
                dirty: self.dirty.contains(path),
                active: self.active.as_deref() == Some(path.as_str()),
            })
            .collect()
    }

    /// Path of the tab `delta` positions away from the active one, wrapping.
    pub fn neighbor_tab(&self, delta: isize) -> Option<&str> {
        let len = self.open_paths.len();
        if len == 0 {
            return None;
        }
        let current = self
            .active
            .as_deref()
            .and_then(|a| self.open_paths.iter().position(|p| p == a))
            .unwrap_or(0);
        let next = (current as isize + delta).rem_euclid(len as isize) as usize;
        self.open_paths.get(next).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/files.rs"]
mod tests;
