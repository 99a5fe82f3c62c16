use anyhow::Result;
use file_picker::config::{Config, Mode};
use file_picker::{listing, ui};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the menus on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli()?;
    let listing = listing::build_with(&config.root, &config.extension, &config.scan)?;

    match config.mode {
        Mode::Tree => ui::print_tree(&listing)?,
        Mode::Pick => {
            if listing.is_empty() {
                warn!(
                    "No files ending in {:?} under {:?}",
                    config.extension, config.root
                );
                return Ok(());
            }
            if let Some(path) = ui::pick_file_stdio(&listing)? {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}
