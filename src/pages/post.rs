//! Single post page generation

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};

use super::{PageContext, STYLESHEET};
use crate::components::layout::LayoutWrapper;
use crate::components::nav::NavLink;
use crate::markdown::MarkdownRenderer;
use crate::posts::Post;

/// Post pages live at `posts/<slug>/index.html`.
pub const POST_DEPTH: usize = 2;

/// Generates a post page
///
/// Renders the markdown body before entering the layout so the content
/// producer itself stays infallible.
///
/// # Arguments
///
/// * `ctx`: Shared page context
/// * `post`: Post to render
/// * `renderer`: Markdown renderer
///
/// # Returns
///
/// Complete HTML page as Markup
///
/// # Errors
///
/// Returns error if markdown rendering fails
pub fn generate(ctx: PageContext<'_>, post: &Post, renderer: &MarkdownRenderer) -> Result<Markup> {
    let body = renderer
        .render(&post.body)
        .with_context(|| format!("Failed to render post body: {}", post.slug))?;

    Ok(LayoutWrapper::new(ctx.metadata, ctx.viewport)
        .depth(POST_DEPTH)
        .stylesheets(&[STYLESHEET])
        .render(|| {
            html! {
                article.post {
                    h1.post-heading { (post.title) }
                    @if let Some(date) = post.date {
                        time.post-date datetime=(date.to_string()) { (date.to_string()) }
                    }
                    div.markdown-body { (PreEscaped(body)) }
                    p.post-back {
                        a href=(NavLink::home().href()) { "← All posts" }
                    }
                }
            }
        }))
}
