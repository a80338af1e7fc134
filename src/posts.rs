//! Blog post discovery and front matter parsing.

use anyhow::{Context, Result, bail};
use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;

const FRONT_MATTER_DELIMITER: &str = "---";

/// Calendar date a post was published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PostDate {
    year: u16,
    month: u8,
    day: u8,
}

impl PostDate {
    /// Parses `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns error if the value is not three numeric fields or the month or
    /// day is out of range.
    pub fn parse(value: &str) -> Result<Self> {
        let parts: Vec<&str> = value.trim().split('-').collect();
        let [year, month, day] = parts.as_slice() else {
            bail!("Date must be YYYY-MM-DD: {}", value);
        };
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            bail!("Date must be YYYY-MM-DD: {}", value);
        }
        if ![year, month, day]
            .iter()
            .all(|field| field.bytes().all(|b| b.is_ascii_digit()))
        {
            bail!("Date must contain only digits: {}", value);
        }

        let year: u16 = year
            .parse()
            .with_context(|| format!("Invalid year in date: {}", value))?;
        let month: u8 = month
            .parse()
            .with_context(|| format!("Invalid month in date: {}", value))?;
        let day: u8 = day
            .parse()
            .with_context(|| format!("Invalid day in date: {}", value))?;

        if !(1..=12).contains(&month) {
            bail!("Month out of range in date: {}", value);
        }
        if !(1..=days_in_month(year, month)).contains(&day) {
            bail!("Day out of range in date: {}", value);
        }

        Ok(Self { year, month, day })
    }
}

fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Single blog post loaded from a markdown source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: Option<PostDate>,
    pub description: Option<String>,
    /// Markdown body with front matter and title heading removed.
    pub body: String,
}

impl Post {
    /// Parses post source.
    ///
    /// Reads optional `---` delimited front matter (`title`, `date`,
    /// `description`). Without a `title` key the first `# ` heading is used
    /// and removed from the body; without either the file stem is used.
    ///
    /// # Arguments
    ///
    /// * `stem`: File name without extension
    /// * `source`: Full markdown source
    ///
    /// # Errors
    ///
    /// Returns error if front matter is unterminated or the date is malformed
    pub fn parse(stem: &str, source: &str) -> Result<Self> {
        let (front_matter, body) = split_front_matter(source)?;

        let mut title = None;
        let mut date = None;
        let mut description = None;

        for line in front_matter.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim().trim_matches('"');
            match key.trim() {
                "title" => title = Some(value.to_string()),
                "date" => date = Some(PostDate::parse(value)?),
                "description" => description = Some(value.to_string()),
                _ => {}
            }
        }

        let mut body = body.to_string();
        let title = match title {
            Some(title) => title,
            None => match take_title_heading(&body) {
                Some((heading, rest)) => {
                    body = rest;
                    heading
                }
                None => stem.to_string(),
            },
        };

        Ok(Self {
            slug: slugify(stem),
            title,
            date,
            description,
            body,
        })
    }

    /// Site-absolute path of the post page.
    pub fn path(&self) -> String {
        format!("/posts/{}/", self.slug)
    }
}

/// Splits leading front matter from the body.
fn split_front_matter(source: &str) -> Result<(&str, &str)> {
    let Some(rest) = source
        .strip_prefix(FRONT_MATTER_DELIMITER)
        .and_then(|r| r.strip_prefix('\n').or_else(|| r.strip_prefix("\r\n")))
    else {
        return Ok(("", source));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            let body = &rest[offset + line.len()..];
            return Ok((&rest[..offset], body));
        }
        offset += line.len();
    }

    bail!("Front matter is missing closing '---'")
}

/// Returns the first `# ` heading text and the body without that line.
fn take_title_heading(body: &str) -> Option<(String, String)> {
    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        let trimmed = line.trim();
        if let Some(heading) = trimmed.strip_prefix("# ") {
            let rest = format!("{}{}", &body[..offset], &body[offset + line.len()..]);
            return Some((heading.trim().to_string(), rest));
        }
        if !trimmed.is_empty() {
            return None;
        }
        offset += line.len();
    }
    None
}

/// Converts file stem to URL slug.
///
/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single `-`.
pub fn slugify(stem: &str) -> String {
    let mut slug = String::with_capacity(stem.len());
    let mut pending_dash = false;

    for c in stem.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Orders newest first; undated posts last; ties broken by slug.
fn compare_posts(a: &Post, b: &Post) -> Ordering {
    match (a.date, b.date) {
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.slug.cmp(&b.slug)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.slug.cmp(&b.slug),
    }
}

/// Loads every `*.md` post in a directory.
///
/// Subdirectories are ignored. Files that are not valid UTF8 are skipped
/// with a warning.
///
/// # Errors
///
/// Returns error if the directory cannot be read, a post fails to parse, or
/// two posts share a slug
pub fn load_posts(dir: impl AsRef<Path>) -> Result<Vec<Post>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read content directory: {}", dir.display()))?;

    let mut posts = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();

        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!("Skipping post with non UTF8 name: {}", path.display());
            continue;
        };

        let bytes =
            fs::read(&path).with_context(|| format!("Failed to read post: {}", path.display()))?;
        let Ok(source) = String::from_utf8(bytes) else {
            tracing::warn!("Skipping post with invalid UTF8: {}", path.display());
            continue;
        };

        let post = Post::parse(stem, &source)
            .with_context(|| format!("Failed to parse post: {}", path.display()))?;

        if post.slug.is_empty() {
            tracing::warn!("Skipping post with empty slug: {}", path.display());
            continue;
        }
        if posts.iter().any(|p: &Post| p.slug == post.slug) {
            bail!("Duplicate post slug '{}' from {}", post.slug, path.display());
        }

        posts.push(post);
    }

    posts.sort_by(compare_posts);
    Ok(posts)
}
