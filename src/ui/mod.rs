pub mod menu;
pub mod picker;
pub mod tree;

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use crate::listing::FileListing;

pub use picker::pick_file;
pub use tree::{print_tree, render_tree, write_tree};

/// Runs the picker on the process's stdin and stdout.
pub fn pick_file_stdio(listing: &FileListing) -> Result<Option<PathBuf>> {
    pick_file(listing, io::stdin().lock(), io::stdout().lock())
}
