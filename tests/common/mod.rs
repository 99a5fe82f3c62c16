#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};
use file_picker::{FileListing, FolderEntry, FolderLabel};

/// Builds a fixture tree:
/// root/
///   top.KD
///   upper.kd        (wrong case)
///   subA/x.KD
///   subA/y.KD
///   subA/notes.txt
///   subB/deeper/z.KD
///   empty/readme.md
///   trap.KD/inner.txt  (directory named like a match)
pub fn basic_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("top.KD").write_str("top").unwrap();
    td.child("upper.kd").write_str("upper").unwrap();

    let sub_a = td.child("subA");
    sub_a.child("x.KD").write_str("x").unwrap();
    sub_a.child("y.KD").write_str("y").unwrap();
    sub_a.child("notes.txt").write_str("notes").unwrap();

    td.child("subB")
        .child("deeper")
        .child("z.KD")
        .write_str("z")
        .unwrap();

    td.child("empty").child("readme.md").write_str("# readme\n").unwrap();
    td.child("trap.KD").child("inner.txt").write_str("inner").unwrap();
    td
}

/// The two-folder listing used throughout the picker and tree tests:
/// `subA` with `x.KD`, `y.KD`, then the root `R` with `z.KD`.
pub fn sample_listing() -> FileListing {
    FileListing::from_entries(
        "R",
        vec![
            FolderEntry::new(
                FolderLabel::Subfolder("subA".into()),
                vec!["x.KD".into(), "y.KD".into()],
            ),
            FolderEntry::new(FolderLabel::Root, vec!["z.KD".into()]),
        ],
    )
}
