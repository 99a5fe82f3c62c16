use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, warn};

use super::types::{FileListing, FolderEntry, FolderLabel};
use crate::error::PickerError;

/// Knobs for the directory walk. The defaults walk everything, hidden
/// entries included, in the order the filesystem yields them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Sort folders by label and files by name. The root entry stays last.
    pub sort: bool,
    /// Skip hidden entries and honour `.gitignore` / `.ignore` files.
    pub respect_ignore: bool,
    /// Deepest folder level to list; the root is level 0. Files directly
    /// inside a listed folder are always included.
    pub max_depth: Option<usize>,
}

/// Scans `root` for files whose name ends with `extension`.
pub fn build(
    root: &Path,
    extension: &str,
) -> Result<FileListing, PickerError> {
    build_with(root, extension, &ScanOptions::default())
}

/// Scans `root` once, grouping matching files by their containing folder.
///
/// Folders appear in depth-first discovery order: a folder's subfolders are
/// visited right after it, before its next sibling (`a`, `a/c`, `b`), unlike
/// a breadth-per-level walk (`a`, `b`, `a/c`). With `options.sort` set they
/// are ordered by label instead. Folders without a match are dropped and
/// files sitting directly in `root` form the last entry.
///
/// A symlink to a folder is listed like a folder, but only its own files are
/// read; the walk never descends through it.
pub fn build_with(
    root: &Path,
    extension: &str,
    options: &ScanOptions,
) -> Result<FileListing, PickerError> {
    if !root.is_dir() {
        return Err(PickerError::InvalidPath {
            path: root.to_path_buf(),
        });
    }
    // Surface an unreadable root as an error instead of an empty listing
    fs::read_dir(root).map_err(|source| PickerError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let walker = WalkBuilder::new(root)
        .standard_filters(options.respect_ignore)
        .follow_links(false)
        // Files sit one level below their folder
        .max_depth(options.max_depth.map(|depth| depth + 1))
        .build();

    let mut folders: Vec<FolderEntry> = Vec::new();
    let mut folder_index: HashMap<PathBuf, usize> = HashMap::new();
    let mut root_files: Vec<String> = Vec::new();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Could not process entry in {:?}: {}", root, e);
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        let rel = rel.to_path_buf();

        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            folder_index.insert(rel.clone(), folders.len());
            folders.push(FolderEntry::new(FolderLabel::Subfolder(rel), Vec::new()));
            continue;
        }
        if is_linked_folder(&entry) {
            if options.max_depth.is_some_and(|max| entry.depth() > max) {
                continue;
            }
            let files = list_linked_folder(entry.path(), extension);
            folders.push(FolderEntry::new(FolderLabel::Subfolder(rel), files));
            continue;
        }
        if !is_file_like(&entry) {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!("Skipping non UTF-8 file name {:?}", entry.path());
            continue;
        };
        if !name.ends_with(extension) {
            continue;
        }

        let parent = rel.parent().unwrap_or_else(|| Path::new(""));
        if parent.as_os_str().is_empty() {
            root_files.push(name.to_owned());
        } else if let Some(&idx) = folder_index.get(parent) {
            folders[idx].files.push(name.to_owned());
        } else {
            // Parent filtered out by the walker; the file is unreachable from any menu.
            debug!("No folder registered for {:?}", entry.path());
        }
    }

    if options.sort {
        folders.sort_by(|a, b| a.label.cmp(&b.label));
        for folder in &mut folders {
            folder.files.sort();
        }
        root_files.sort();
    }

    let scanned = folders.len();
    folders.push(FolderEntry::new(FolderLabel::Root, root_files));
    let listing = FileListing::from_entries(root, folders);
    debug!(
        "Scanned {} folders under {:?}, {} contain {:?} files",
        scanned,
        root,
        listing.len(),
        extension
    );
    Ok(listing)
}

// Regular files, plus symlinks that resolve to one.
fn is_file_like(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

fn is_linked_folder(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_symlink()) && entry.path().is_dir()
}

// Matching files directly inside a symlinked folder, in read order.
fn list_linked_folder(
    dir: &Path,
    extension: &str,
) -> Vec<String> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) => {
            warn!("Could not read linked folder {:?}: {}", dir, e);
            return Vec::new();
        }
    };
    let mut files = Vec::new();
    for dirent in read {
        let dirent = match dirent {
            Ok(d) => d,
            Err(e) => {
                warn!("Could not process entry in {:?}: {}", dir, e);
                continue;
            }
        };
        if !dirent.path().is_file() {
            continue;
        }
        match dirent.file_name().into_string() {
            Ok(name) if name.ends_with(extension) => files.push(name),
            Ok(_) => {}
            Err(name) => warn!("Skipping non UTF-8 file name {:?} in {:?}", name, dir),
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn missing_root_is_invalid_path() {
        let dir = TempDir::new().unwrap();
        let err = build(&dir.path().join("nope"), ".KD").unwrap_err();
        assert!(matches!(err, PickerError::InvalidPath { .. }), "{err}");
    }

    #[test]
    fn file_root_is_invalid_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.KD");
        touch(&file);
        let err = build(&file, ".KD").unwrap_err();
        assert!(matches!(err, PickerError::InvalidPath { .. }), "{err}");
    }

    fn labels_at_depth(
        root: &Path,
        max_depth: usize,
    ) -> Vec<FolderLabel> {
        let options = ScanOptions {
            max_depth: Some(max_depth),
            ..ScanOptions::default()
        };
        build_with(root, ".KD", &options)
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.label.clone())
            .collect()
    }

    #[test]
    fn max_depth_counts_folder_levels() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("top.KD"));
        touch(&dir.path().join("a/one.KD"));
        touch(&dir.path().join("a/b/two.KD"));

        assert_eq!(labels_at_depth(dir.path(), 0), vec![FolderLabel::Root]);
        assert_eq!(
            labels_at_depth(dir.path(), 1),
            vec![FolderLabel::Subfolder("a".into()), FolderLabel::Root]
        );
        assert_eq!(
            labels_at_depth(dir.path(), 2),
            vec![
                FolderLabel::Subfolder("a".into()),
                FolderLabel::Subfolder(Path::new("a").join("b")),
                FolderLabel::Root,
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_folder_lists_its_own_files() {
        let target = TempDir::new().unwrap();
        touch(&target.path().join("x.KD"));
        touch(&target.path().join("skip.txt"));
        touch(&target.path().join("nested/deep.KD"));

        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(target.path(), dir.path().join("link")).unwrap();

        let listing = build(dir.path(), ".KD").unwrap();
        assert_eq!(
            listing.entries(),
            &[FolderEntry::new(
                FolderLabel::Subfolder("link".into()),
                vec!["x.KD".to_string()],
            )]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_folder_beyond_max_depth_is_skipped() {
        let target = TempDir::new().unwrap();
        touch(&target.path().join("x.KD"));

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        std::os::unix::fs::symlink(target.path(), dir.path().join("a/link")).unwrap();

        assert!(labels_at_depth(dir.path(), 1).is_empty());
        assert_eq!(
            labels_at_depth(dir.path(), 2),
            vec![FolderLabel::Subfolder(Path::new("a").join("link"))]
        );
    }

    #[test]
    fn hidden_entries_are_scanned_unless_ignore_rules_apply() {
        let dir = tempfile::Builder::new().prefix("scan").tempdir().unwrap();
        touch(&dir.path().join(".hidden/secret.KD"));

        let listing = build(dir.path(), ".KD").unwrap();
        assert_eq!(listing.len(), 1);

        let options = ScanOptions {
            respect_ignore: true,
            ..ScanOptions::default()
        };
        let listing = build_with(dir.path(), ".KD", &options).unwrap();
        assert!(listing.is_empty());
    }
}
