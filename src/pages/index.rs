//! Home page listing all posts

use maud::{Markup, html};

use super::{PageContext, STYLESHEET};
use crate::components::layout::LayoutWrapper;
use crate::components::nav::NavLink;
use crate::posts::Post;

/// Generates the home page
///
/// Lists posts in the order given with title link, date and description.
/// Shows an empty state when there are no posts.
///
/// # Arguments
///
/// * `ctx`: Shared page context
/// * `posts`: Posts sorted for display
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn generate(ctx: PageContext<'_>, posts: &[Post]) -> Markup {
    LayoutWrapper::new(ctx.metadata, ctx.viewport)
        .stylesheets(&[STYLESHEET])
        .render(|| post_list(posts))
}

fn post_list(posts: &[Post]) -> Markup {
    html! {
        @if posts.is_empty() {
            p.empty-state { "No posts yet." }
        } @else {
            ul.post-list {
                @for post in posts {
                    li.post-entry {
                        a.post-title href=(NavLink::to(post.path()).href()) { (post.title) }
                        @if let Some(date) = post.date {
                            time.post-date datetime=(date.to_string()) { (date.to_string()) }
                        }
                        @if let Some(description) = &post.description {
                            p.post-description { (description) }
                        }
                    }
                }
            }
        }
    }
}
