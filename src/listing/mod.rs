pub mod scan;
pub mod types;

pub use scan::{ScanOptions, build, build_with};
pub use types::{FileListing, FolderEntry, FolderLabel};
