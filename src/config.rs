//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::responsive::Viewport;

/// Command line configuration for Dev Thoughts.
#[derive(Debug, Clone, Parser)]
#[command(name = "devthoughts", version, about, long_about = None)]
pub struct Config {
    /// Directory containing markdown posts
    #[arg(default_value = "content")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Viewport width in pixels the static pages are laid out for
    #[arg(long, default_value_t = 1024)]
    pub viewport_width: u32,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory does not exist or the viewport
    /// width is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }
        if self.viewport_width == 0 {
            bail!("Viewport width must be greater than zero");
        }

        Ok(())
    }

    /// Viewport the static render pass uses.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width)
    }
}
