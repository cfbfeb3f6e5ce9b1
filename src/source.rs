//! Read-only source tree abstraction for Kickstart templates.
//! The renderer walks a `SourceTree` without knowing whether it is the
//! embedded bundle, a directory on disk or an in-memory fixture. Paths are
//! relative, forward-slash separated and carry no leading `./`.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One entry of a source tree, in walk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEntry {
    Dir(String),
    File(String),
}

impl TreeEntry {
    pub fn path(&self) -> &str {
        match self {
            TreeEntry::Dir(path) | TreeEntry::File(path) => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeEntry::Dir(_))
    }
}

/// Trait for read-only hierarchical template sources.
pub trait SourceTree {
    /// Lists every entry of the tree in stable lexicographic order.
    /// Parent directories sort before their children.
    fn entries(&self) -> Result<Vec<TreeEntry>>;

    /// Reads the full content of a file entry.
    fn read(&self, path: &str) -> Result<Vec<u8>>;
}

fn ancestors_of(path: &str) -> Vec<String> {
    path.match_indices('/').map(|(idx, _)| path[..idx].to_string()).collect()
}

fn merge_entries(dirs: BTreeSet<String>, files: BTreeSet<String>) -> Vec<TreeEntry> {
    let mut paths: Vec<TreeEntry> = dirs
        .into_iter()
        .map(TreeEntry::Dir)
        .chain(files.into_iter().map(TreeEntry::File))
        .collect();
    paths.sort_by(|a, b| a.path().cmp(b.path()));
    paths
}

/// In-memory source tree used as a test fixture. Ancestor directories of
/// every file are implied and do not need to be added explicitly.
#[derive(Debug, Default)]
pub struct MemoryTree {
    files: BTreeMap<String, Vec<u8>>,
    dirs: BTreeSet<String>,
}

impl MemoryTree {
    pub fn new() -> Self {
        MemoryTree::default()
    }

    /// Adds a file entry with the given content.
    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.as_bytes().to_vec());
        self
    }

    /// Adds an explicit (possibly empty) directory entry.
    pub fn dir(mut self, path: &str) -> Self {
        self.dirs.insert(path.to_string());
        self
    }
}

impl SourceTree for MemoryTree {
    fn entries(&self) -> Result<Vec<TreeEntry>> {
        let mut dirs = self.dirs.clone();
        for path in self.files.keys() {
            dirs.extend(ancestors_of(path));
        }
        let files = self.files.keys().cloned().collect();
        Ok(merge_entries(dirs, files))
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::TemplateError(format!("no such template file: {}", path)))
    }
}

/// Source tree backed by a directory on disk.
pub struct DiskTree {
    root: PathBuf,
}

impl DiskTree {
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::TemplateError(format!(
                "template directory does not exist: {}",
                root.display()
            )));
        }
        Ok(DiskTree { root: root.to_path_buf() })
    }

    fn absolute(&self, path: &str) -> PathBuf {
        let mut abs = self.root.clone();
        for part in path.split('/') {
            abs.push(part);
        }
        abs
    }
}

impl SourceTree for DiskTree {
    fn entries(&self) -> Result<Vec<TreeEntry>> {
        let mut entries = Vec::new();
        for dir_entry in WalkDir::new(&self.root).sort_by_file_name() {
            let dir_entry = dir_entry.map_err(|e| Error::IoError(e.into()))?;
            let relative = dir_entry
                .path()
                .strip_prefix(&self.root)
                .map_err(|e| Error::TemplateError(e.to_string()))?;
            if relative.as_os_str().is_empty() {
                continue;
            }
            let relative = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            if dir_entry.file_type().is_dir() {
                entries.push(TreeEntry::Dir(relative));
            } else {
                entries.push(TreeEntry::File(relative));
            }
        }
        entries.sort_by(|a, b| a.path().cmp(b.path()));
        Ok(entries)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(self.absolute(path)).map_err(Error::IoError)
    }
}

/// Source tree backed by a `rust_embed` bundle compiled into the binary.
/// Embedded bundles only record files; directories are derived from the
/// file paths, so empty directories cannot occur here.
pub struct EmbeddedTree<E: RustEmbed> {
    _marker: PhantomData<E>,
}

impl<E: RustEmbed> EmbeddedTree<E> {
    pub fn new() -> Self {
        EmbeddedTree { _marker: PhantomData }
    }
}

impl<E: RustEmbed> Default for EmbeddedTree<E> {
    fn default() -> Self {
        EmbeddedTree::new()
    }
}

impl<E: RustEmbed> SourceTree for EmbeddedTree<E> {
    fn entries(&self) -> Result<Vec<TreeEntry>> {
        let mut dirs = BTreeSet::new();
        let mut files = BTreeSet::new();
        for path in E::iter() {
            let path = path.as_ref();
            dirs.extend(ancestors_of(path));
            files.insert(path.to_string());
        }
        Ok(merge_entries(dirs, files))
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        E::get(path)
            .map(|file| file.data.into_owned())
            .ok_or_else(|| Error::TemplateError(format!("no such embedded file: {}", path)))
    }
}
