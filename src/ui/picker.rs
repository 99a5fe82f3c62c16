use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use super::menu::{write_banner, write_file_menu, write_folder_menu};
use crate::constants::{FILE_HINT, FILE_PROMPT, FOLDER_HINT, FOLDER_PROMPT};
use crate::listing::{FileListing, FolderEntry};

/// Where the picker currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState<'a> {
    Folders,
    Files(&'a FolderEntry),
}

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Quit,
    Back,
    /// Zero-based index, already checked against the menu length.
    Item(usize),
    Invalid,
}

fn parse_choice(
    line: &str,
    len: usize,
    allow_back: bool,
) -> Choice {
    match line {
        "q" | "Q" => return Choice::Quit,
        "b" | "B" if allow_back => return Choice::Back,
        _ => {}
    }
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return Choice::Invalid;
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Choice::Item(n - 1),
        _ => Choice::Invalid,
    }
}

/// Reads one line, stripping the terminator. `None` on end of input.
fn read_choice(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "\n{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Walks the user through folder then file selection.
///
/// Returns the chosen file's path relative to the listing root, or `None`
/// when the user quits at either menu or the input ends. Quitting never
/// restarts the menus; callers wanting another round call this again.
pub fn pick_file(
    listing: &FileListing,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<Option<PathBuf>> {
    let mut state = MenuState::Folders;
    let mut redraw = true;
    loop {
        match state {
            MenuState::Folders => {
                if redraw {
                    write_folder_menu(&mut output, listing)?;
                }
                let Some(line) = read_choice(&mut input, &mut output, FOLDER_PROMPT)? else {
                    debug!("Input closed at folder menu");
                    return Ok(None);
                };
                match parse_choice(&line, listing.len(), false) {
                    Choice::Quit => return Ok(None),
                    Choice::Item(folder) => {
                        state = MenuState::Files(&listing.entries()[folder]);
                        redraw = true;
                    }
                    Choice::Back | Choice::Invalid => {
                        write_folder_menu(&mut output, listing)?;
                        write!(output, "\n{FOLDER_HINT}\n")?;
                        redraw = false;
                    }
                }
            }
            MenuState::Files(entry) => {
                if redraw {
                    write_file_menu(&mut output, listing, entry)?;
                }
                let Some(line) = read_choice(&mut input, &mut output, FILE_PROMPT)? else {
                    debug!("Input closed at file menu");
                    return Ok(None);
                };
                match parse_choice(&line, entry.files.len(), true) {
                    Choice::Quit => return Ok(None),
                    Choice::Back => {
                        state = MenuState::Folders;
                        redraw = true;
                    }
                    Choice::Item(file) => {
                        let name = &entry.files[file];
                        write_banner(&mut output, name)?;
                        output.flush()?;
                        return Ok(Some(entry.label.join(name)));
                    }
                    Choice::Invalid => {
                        write_file_menu(&mut output, listing, entry)?;
                        write!(output, "\n{FILE_HINT}\n")?;
                        redraw = false;
                    }
                }
            }
        }
    }
}
