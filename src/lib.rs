//! Static generator for the Dev Thoughts blog.

mod assets;
pub mod components;
mod config;
mod markdown;
pub mod pages;
pub mod posts;
mod responsive;
mod site;
pub mod style;

pub use assets::{site_css, write_css_assets};
pub use components::header::header;
pub use components::layout::LayoutWrapper;
pub use components::metadata::{MetaTag, SiteMetadata};
pub use config::Config;
pub use markdown::MarkdownRenderer;
pub use posts::{Post, PostDate, load_posts};
pub use responsive::{LayoutVariant, MediaQuery, Viewport, responsive_css, select_layout};
pub use site::{GeneratedSite, generate_site};
