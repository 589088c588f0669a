use chrono::{DateTime, Utc};

use crate::config::RecommendedEntry;

/// Content-type classifier for a post, used to pick a display glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostFormat {
    #[default]
    Standard,
    Gallery,
    Video,
    Audio,
}

impl PostFormat {
    /// Parse a post-format slug. The API reports either the bare name
    /// ("video") or the taxonomy-prefixed form ("post-format-video").
    /// Unknown slugs fall back to `Standard`.
    pub fn from_slug(slug: &str) -> Self {
        match slug.trim().trim_start_matches("post-format-") {
            "gallery" => PostFormat::Gallery,
            "video" => PostFormat::Video,
            "audio" => PostFormat::Audio,
            _ => PostFormat::Standard,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            PostFormat::Standard => "≡",
            PostFormat::Gallery => "▤",
            PostFormat::Video => "▶",
            PostFormat::Audio => "♪",
        }
    }
}

/// A post returned by the remote search, replaced wholesale on each fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u64,
    /// Raw title as delivered by the editorial backend. May contain inline
    /// markup; rendered as received (the upstream source sanitizes).
    pub title: String,
    pub published_at: Option<DateTime<Utc>>,
    pub author_name: Option<String>,
    pub featured_image_url: Option<String>,
    pub format: PostFormat,
    pub canonical_path: String,
}

/// A selectable entry in the overlay list.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchItem {
    /// Static shortcut, always listed last. Quick actions are search
    /// refinements: the live query text is appended to `target_prefix`.
    QuickAction {
        label: &'static str,
        target_prefix: &'static str,
    },
    /// Static suggestion from site configuration, shown only while the
    /// query is empty.
    Recommended { label: String, target_path: String },
    /// A remote search result.
    Post(Post),
}

impl SearchItem {
    pub fn label(&self) -> &str {
        match self {
            SearchItem::QuickAction { label, .. } => label,
            SearchItem::Recommended { label, .. } => label,
            SearchItem::Post(post) => &post.title,
        }
    }

    /// Resolve where selecting this item navigates to.
    pub fn navigation_target(&self, query_text: &str) -> String {
        match self {
            SearchItem::Post(post) => post.canonical_path.clone(),
            SearchItem::QuickAction { target_prefix, .. } => {
                format!("{target_prefix}{query_text}")
            }
            SearchItem::Recommended { target_path, .. } => target_path.clone(),
        }
    }
}

/// The fixed quick-action set, defined once at startup.
pub fn quick_actions() -> Vec<SearchItem> {
    vec![
        SearchItem::QuickAction {
            label: "Search posts",
            target_prefix: "/search/posts/",
        },
        SearchItem::QuickAction {
            label: "Filter posts by",
            target_prefix: "/posts?search=",
        },
        SearchItem::QuickAction {
            label: "Search authors",
            target_prefix: "/search/authors/",
        },
        SearchItem::QuickAction {
            label: "Search categories",
            target_prefix: "/search/categories/",
        },
    ]
}

/// Build the recommended-search items from configuration. Entries without an
/// explicit URL land on the posts search page for their title.
pub fn recommended_searches(entries: &[RecommendedEntry]) -> Vec<SearchItem> {
    entries
        .iter()
        .map(|entry| SearchItem::Recommended {
            label: entry.title.clone(),
            target_path: entry
                .url
                .clone()
                .unwrap_or_else(|| format!("/search/posts/{}", entry.title)),
        })
        .collect()
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod item_tests;
