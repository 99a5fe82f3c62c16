use std::io::{self, Write};

use crate::constants::{BRANCH, HEADER_INDENT, INDEX_GAP, LAST_BRANCH};
use crate::listing::{FileListing, FolderEntry};

fn digits(n: usize) -> usize {
    n.to_string().len()
}

// Spaces after `[n]` so entries line up with the widest index
fn index_padding(
    index: usize,
    count: usize,
) -> String {
    " ".repeat(INDEX_GAP + digits(count) - digits(index))
}

/// Writes the root path followed by one numbered line per folder.
pub fn write_folder_menu(
    out: &mut impl Write,
    listing: &FileListing,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", listing.root().display())?;
    let count = listing.len();
    for (i, entry) in listing.entries().iter().enumerate() {
        let n = i + 1;
        writeln!(
            out,
            "[{n}]{}{}",
            index_padding(n, count),
            listing.label_of(entry)
        )?;
    }
    Ok(())
}

/// Writes the folder header followed by one numbered line per file.
pub fn write_file_menu(
    out: &mut impl Write,
    listing: &FileListing,
    entry: &FolderEntry,
) -> io::Result<()> {
    let count = entry.files.len();
    writeln!(out)?;
    writeln!(
        out,
        "{}{}:",
        " ".repeat(HEADER_INDENT + digits(count)),
        listing.label_of(entry)
    )?;
    for (i, file) in entry.files.iter().enumerate() {
        let n = i + 1;
        let glyph = if n == count { LAST_BRANCH } else { BRANCH };
        writeln!(out, "[{n}]{}{glyph}{file}", index_padding(n, count))?;
    }
    Ok(())
}

/// Writes the three-line box announcing the chosen file.
pub fn write_banner(
    out: &mut impl Write,
    file: &str,
) -> io::Result<()> {
    let rule = "┅".repeat(file.chars().count() + 17);
    writeln!(out, "┏{rule}┓")?;
    writeln!(out, "┇ File selected: {file} ┇")?;
    writeln!(out, "┗{rule}┛")
}
