use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`FileListing`](crate::listing::FileListing).
#[derive(Error, Debug)]
pub enum PickerError {
    #[error("root path {path:?} does not exist or is not a directory")]
    InvalidPath { path: PathBuf },

    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
