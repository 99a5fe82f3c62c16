use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "file-picker")]
#[command(
    about = "Browse the folders under DIR that hold files with a given extension \
                   and pick one of them from a numbered menu."
)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// File name suffix to match, compared literally (e.g. ".jpeg").
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extension: String,

    /// Print the folder/file tree and exit instead of picking.
    #[arg(short = 't', long = "tree")]
    pub tree: bool,

    /// Sort folders and files by name instead of walk order.
    #[arg(short = 's', long = "sort")]
    pub sort: bool,

    /// Skip hidden entries and honour .gitignore/.ignore files.
    #[arg(short = 'r', long = "respect-ignore")]
    pub respect_ignore: bool,

    /// List folders at most this many levels below DIR (0 lists only DIR's own files).
    #[arg(short = 'd', long = "max-depth", value_name = "N")]
    pub max_depth: Option<usize>,
}
