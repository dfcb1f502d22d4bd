use anyhow::{Context, Result};
use papersite::Config;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Installs stderr logging, `info` level unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let summary = papersite::generate_site(&config).context("Failed to generate site")?;

    if !summary.skipped.is_empty() {
        warn!(
            count = summary.skipped.len(),
            "Some articles were skipped because of invalid ids"
        );
    }

    println!("Generated: {}", summary.index_path.display());
    println!("Generated {} article pages", summary.article_pages);

    if !config.no_open {
        if let Err(e) = open::that(&summary.index_path) {
            warn!("Failed to open browser: {}", e);
        } else {
            info!("Opened {} in browser", summary.index_path.display());
        }
    }

    Ok(())
}
