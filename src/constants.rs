// Menu text and tree glyphs shared by the picker and the tree printer
pub const BRANCH: &str = "├───";
pub const LAST_BRANCH: &str = "└───";
pub const PIPE_INDENT: &str = "│   ";
pub const BLANK_INDENT: &str = "    ";

pub const FOLDER_PROMPT: &str = "Select a folder: ";
pub const FILE_PROMPT: &str = "Select a file: ";
pub const FOLDER_HINT: &str =
    "Invalid selection. Input a folder number (shown in brackets) or q to quit.";
pub const FILE_HINT: &str =
    "Invalid selection. Input a file number (shown in brackets) or q (quit), b (back).";

/// Spaces between `[n]` and the entry for the widest index.
pub const INDEX_GAP: usize = 4;
/// Indent of the file menu header, before the per-listing digit padding.
pub const HEADER_INDENT: usize = 6;
