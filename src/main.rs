use anyhow::{Context, Result};
use devthoughts::{Config, SiteMetadata, generate_site};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let metadata = SiteMetadata::default_starter();
    let site = generate_site(
        &config.content,
        &config.output,
        &metadata,
        config.viewport(),
    )
    .context("Failed to generate site")?;

    tracing::info!(
        "Generated {} pages in {}",
        site.page_count(),
        config.output.display()
    );

    if !config.no_open
        && let Err(e) = open::that(&site.index)
    {
        tracing::warn!("Failed to open {}: {}", site.index.display(), e);
    }

    Ok(())
}
