use std::io::{self, Write};

use crate::constants::{BLANK_INDENT, BRANCH, LAST_BRANCH, PIPE_INDENT};
use crate::listing::FileListing;

/// Writes the listing as a two-level tree under the root path.
pub fn write_tree(
    listing: &FileListing,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{}", listing.root().display())?;
    let last_folder = listing.len().saturating_sub(1);
    for (i, entry) in listing.entries().iter().enumerate() {
        let (branch, indent) = if i == last_folder {
            (LAST_BRANCH, BLANK_INDENT)
        } else {
            (BRANCH, PIPE_INDENT)
        };
        writeln!(out, "{branch}{}", listing.label_of(entry))?;

        let last_file = entry.files.len().saturating_sub(1);
        for (j, file) in entry.files.iter().enumerate() {
            let glyph = if j == last_file { LAST_BRANCH } else { BRANCH };
            writeln!(out, "{indent}{glyph}{file}")?;
        }
    }
    Ok(())
}

pub fn render_tree(listing: &FileListing) -> String {
    let mut buf = Vec::new();
    write_tree(listing, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

/// Prints the tree to stdout.
pub fn print_tree(listing: &FileListing) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tree(listing, &mut out)?;
    out.flush()
}
