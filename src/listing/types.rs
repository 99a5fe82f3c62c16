use path_slash::PathExt;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Which folder a group of files lives in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FolderLabel {
    /// A folder below the root, relative to it.
    Subfolder(PathBuf),
    /// The root directory itself.
    Root,
}

impl FolderLabel {
    /// Display text for the label. `Root` renders as the root path.
    pub fn display<'a>(
        &'a self,
        root: &'a Path,
    ) -> Cow<'a, str> {
        match self {
            FolderLabel::Subfolder(rel) => rel.to_slash_lossy(),
            FolderLabel::Root => root.to_string_lossy(),
        }
    }

    /// Path of `file` relative to the root.
    pub fn join(
        &self,
        file: &str,
    ) -> PathBuf {
        match self {
            FolderLabel::Subfolder(rel) => rel.join(file),
            FolderLabel::Root => PathBuf::from(file),
        }
    }
}

/// A folder and the matching files directly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub label: FolderLabel,
    pub files: Vec<String>,
}

impl FolderEntry {
    pub fn new(
        label: FolderLabel,
        files: Vec<String>,
    ) -> Self {
        Self { label, files }
    }
}

/// Matching files grouped by folder, built once per scan.
///
/// Every entry holds at least one file and the root's own entry, if any,
/// comes last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListing {
    root: PathBuf,
    entries: Vec<FolderEntry>,
}

impl FileListing {
    /// Builds a listing from arbitrary entries, dropping empty ones and
    /// moving the root entry to the end.
    pub fn from_entries(
        root: impl Into<PathBuf>,
        entries: Vec<FolderEntry>,
    ) -> Self {
        let (mut entries, root_entries): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .filter(|e| !e.files.is_empty())
            .partition(|e| e.label != FolderLabel::Root);
        entries.extend(root_entries);
        Self {
            root: root.into(),
            entries,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[FolderEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<&FolderEntry> {
        self.entries.get(index)
    }

    /// Display text of an entry's label.
    pub fn label_of<'a>(
        &'a self,
        entry: &'a FolderEntry,
    ) -> Cow<'a, str> {
        entry.label.display(&self.root)
    }
}
