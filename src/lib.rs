pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod listing;
pub mod ui;

pub use error::PickerError;
pub use listing::{FileListing, FolderEntry, FolderLabel, ScanOptions};
