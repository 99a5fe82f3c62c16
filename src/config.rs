use crate::cli::Cli;
use crate::listing::ScanOptions;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// What the binary does once the listing is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Pick,
    Tree,
}

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub extension: String,
    pub mode: Mode,
    pub scan: ScanOptions,
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        Ok(Cli::parse().into())
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            root: cli.root,
            extension: cli.extension,
            mode: if cli.tree { Mode::Tree } else { Mode::Pick },
            scan: ScanOptions {
                sort: cli.sort,
                respect_ignore: cli.respect_ignore,
                max_depth: cli.max_depth,
            },
        }
    }
}
