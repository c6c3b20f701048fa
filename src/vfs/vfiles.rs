//! This module provides an ordered, in-memory collection of virtual files.

use std::collections::HashSet;

use anyhow::anyhow;
use log::{debug, trace};

use crate::core::{Result, utils};
use crate::{Contents, VFile, VFileData};

/// Where `VFiles::set_vfile()` splices a new entry.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Position {
    /// After every existing entry.
    #[default]
    Append,
    /// Before every existing entry.
    Prepend,
    /// In place of the entry currently at this index.
    Replace(usize),
}

/// An ordered, path-unique sequence of `VFile` records.
///
/// `VFiles` is the state a UI layer renders: a flat list rather than a tree. The hierarchy is
/// implied by paths alone, and directories are the entries whose path ends with `/`.
///
/// ### Invariants
///
/// 1. **Uniqueness**: no two entries share a path.
/// 2. **Parent consistency**: with auto-parents enabled (the default), every ancestor directory of
///    an entry inserted through `set_vfile()` is present after the insertion.
/// 3. **Wholesale updates**: every mutation builds a fresh sequence and bumps `revision()`, so
///    observers can compare revisions instead of diffing entries.
///
/// ### Thread Safety
///
/// `VFiles` holds only owned data and adds no locking. If concurrent access is required, wrap it
/// in `Arc<Mutex<VFiles>>` at the application level.
///
/// ### Example
///
/// ```
/// use vfiles::{Position, VFile, VFiles};
///
/// let mut files = VFiles::new();
/// files.set_vfile(VFile::file("src/main.rs", "fn main() {}"), Position::Append).unwrap();
///
/// let paths: Vec<_> = files.paths().collect();
/// assert_eq!(paths, vec!["src/", "src/main.rs"]);
///
/// assert!(files.remove("src/main.rs"));
/// assert!(!files.remove("src/main.rs"));
/// ```
#[derive(Debug, Clone)]
pub struct VFiles {
    files: Vec<VFile>,
    revision: u64,
    is_auto_parents: bool,
}

impl Default for VFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl VFiles {
    /// Creates an empty collection with auto-parents enabled.
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            revision: 0,
            is_auto_parents: true,
        }
    }

    /// Creates a collection from `files`, keeping their order.
    /// When paths repeat, the last record wins and takes the slot of the first.
    /// Ancestors are not synthesized.
    pub fn from_files<I: IntoIterator<Item = VFile>>(files: I) -> Self {
        Self {
            files: Self::dedup(files),
            ..Self::new()
        }
    }

    /// Changes auto-parents flag.
    /// If auto-parents flag is true, `set_vfile()` creates placeholder directory entries for every
    /// missing ancestor of the inserted path.
    pub fn set_auto_parents(&mut self, auto_parents: bool) {
        self.is_auto_parents = auto_parents;
    }

    pub fn is_auto_parents(&self) -> bool {
        self.is_auto_parents
    }

    /// Number of mutations applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Inserts `file` at `position` and returns a reference to the stored record.
    ///
    /// # Behavior
    /// - Any existing entry with the same path is dropped first, so paths stay unique.
    /// - With auto-parents enabled, missing ancestor directories are inserted immediately before
    ///   `file`, shallowest first. Presence is checked against the sequence that remains after
    ///   the replaced slot and the duplicate are dropped.
    /// - `Append` yields `[existing.., ancestors.., file]`, `Prepend` yields
    ///   `[ancestors.., file, existing..]` and `Replace(i)` yields
    ///   `[existing[..i].., ancestors.., file, existing[i + 1..]..]`.
    ///
    /// # Errors
    /// * `Replace(i)` where `i` is out of bounds. The collection is left untouched.
    pub fn set_vfile(&mut self, file: VFile, position: Position) -> Result<&VFile> {
        let len = self.files.len();
        let replaced = match position {
            Position::Replace(index) if index >= len => {
                return Err(anyhow!("index {index} is out of bounds (len {len})"));
            }
            Position::Replace(index) => Some(index),
            _ => None,
        };

        let mut before = Vec::with_capacity(len + 1);
        let mut after = Vec::new();
        for (i, existing) in std::mem::take(&mut self.files).into_iter().enumerate() {
            if Some(i) == replaced || existing.path() == file.path() {
                continue;
            }
            match position {
                Position::Append => before.push(existing),
                Position::Prepend => after.push(existing),
                Position::Replace(index) if i < index => before.push(existing),
                Position::Replace(_) => after.push(existing),
            }
        }

        let parents = if self.is_auto_parents {
            Self::missing_ancestors(&file, before.iter().chain(after.iter()))
        } else {
            Vec::new()
        };
        if !parents.is_empty() {
            debug!("{}: created {} parent(s)", file.path(), parents.len());
        }
        debug!("{}: inserted at {:?}", file.path(), position);

        let index = before.len() + parents.len();
        before.extend(parents);
        before.push(file);
        before.extend(after);
        self.commit(before);

        Ok(&self.files[index])
    }

    /// Builds a `VFile` from its parts and inserts it with `set_vfile()`.
    pub fn create(
        &mut self,
        path: impl Into<String>,
        contents: Option<Contents>,
        data: Option<VFileData>,
        position: Position,
    ) -> Result<&VFile> {
        self.set_vfile(VFile::new(path, contents, data), position)
    }

    /// Removes the entry with exactly this `path`.
    /// Returns `false` (and leaves the revision unchanged) if there was none.
    pub fn remove(&mut self, path: &str) -> bool {
        if !self.contains(path) {
            return false;
        }
        let files = std::mem::take(&mut self.files)
            .into_iter()
            .filter(|file| file.path() != path)
            .collect();
        self.commit(files);
        debug!("{path}: removed");
        true
    }

    /// Removes a directory and every entry beneath it.
    ///
    /// `path` may be given with or without the trailing separator. Returns the number of removed
    /// entries; removing an absent tree is a no-op.
    pub fn remove_tree(&mut self, path: &str) -> usize {
        let dir = utils::as_dir(path);
        let before = self.files.len();
        let files: Vec<_> = std::mem::take(&mut self.files)
            .into_iter()
            .filter(|file| file.path() != dir && !utils::is_descendant(file.path(), &dir))
            .collect();
        let removed = before - files.len();
        if removed == 0 {
            self.files = files;
        } else {
            self.commit(files);
            debug!("{dir}: removed {removed} entr(ies)");
        }
        removed
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        if !self.files.is_empty() {
            self.commit(Vec::new());
            debug!("all entries removed");
        }
    }

    /// Swaps in a new sequence wholesale. Repeated paths are collapsed as in `from_files()`.
    pub fn replace_all<I: IntoIterator<Item = VFile>>(&mut self, files: I) {
        let files = Self::dedup(files);
        debug!("replaced with {} entr(ies)", files.len());
        self.commit(files);
    }

    pub fn get(&self, path: &str) -> Option<&VFile> {
        self.files.iter().find(|file| file.path() == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.position(path).is_some()
    }

    /// Index of the entry with this `path`.
    pub fn position(&self, path: &str) -> Option<usize> {
        self.files.iter().position(|file| file.path() == path)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VFile> {
        self.files.iter()
    }

    pub fn as_slice(&self) -> &[VFile] {
        &self.files
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(VFile::path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns the immediate children of a directory (shallow listing), in collection order.
    ///
    /// `dir` may be given with or without the trailing separator; `""` lists the top level, i.e.
    /// every entry whose `dirname()` is `""`, absolute ones such as `/readme.md` included.
    /// The directory itself is not included.
    pub fn ls<'a>(&'a self, dir: &str) -> impl Iterator<Item = &'a VFile> + use<'a> {
        let dir = utils::as_dir(dir).into_owned();
        self.files
            .iter()
            .filter(move |file| utils::is_child(file.path(), &dir))
    }

    /// Returns every entry beneath a directory (recursive listing), in collection order.
    /// The directory itself is not included.
    pub fn tree<'a>(&'a self, dir: &str) -> impl Iterator<Item = &'a VFile> + use<'a> {
        let dir = utils::as_dir(dir).into_owned();
        self.files
            .iter()
            .filter(move |file| utils::is_descendant(file.path(), &dir))
    }

    fn commit(&mut self, files: Vec<VFile>) {
        self.files = files;
        self.revision += 1;
    }

    fn missing_ancestors<'a, I>(file: &VFile, existing: I) -> Vec<VFile>
    where
        I: Iterator<Item = &'a VFile>,
    {
        let present: HashSet<&str> = existing.map(VFile::path).collect();
        file.ancestors()
            .filter(|parent| !present.contains(parent))
            .map(|parent| {
                trace!("{parent}: auto-created");
                VFile::dir(parent)
            })
            .collect()
    }

    fn dedup<I: IntoIterator<Item = VFile>>(files: I) -> Vec<VFile> {
        let mut result: Vec<VFile> = Vec::new();
        for file in files {
            match result.iter().position(|f| f.path() == file.path()) {
                Some(index) => result[index] = file,
                None => result.push(file),
            }
        }
        result
    }
}

impl<'a> IntoIterator for &'a VFiles {
    type Item = &'a VFile;
    type IntoIter = std::slice::Iter<'a, VFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
