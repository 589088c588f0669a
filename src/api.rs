//! Remote search client
//!
//! Implements the posts-search call contract against the site's GraphQL
//! endpoint. This is a pass-through over remote ranking: no local indexing,
//! scoring, or caching happens here. Uses reqwest for HTTP and tokio for the
//! async runtime; cancellation is supported via `tokio::select!` against a
//! `CancellationToken`.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::overlay::item::{Post, PostFormat};

/// GraphQL document for the posts search. Field set mirrors what the result
/// rows render: id, title, date, author, featured image, format, path.
const SEARCH_QUERY: &str = "\
query GetPostsBySearch($first: Int, $search: String) {
  posts(first: $first, where: { search: $search }) {
    nodes {
      databaseId
      title
      date
      uri
      author { node { name } }
      featuredImage { node { sourceUrl } }
      postFormats { nodes { slug } }
    }
  }
}";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("search API returned HTTP {code}: {message}")]
    Api { code: u16, message: String },

    #[error("search query failed: {0}")]
    Query(String),

    #[error("malformed search response: {0}")]
    Parse(String),

    #[error("search request cancelled")]
    Cancelled,
}

/// Remote search execution seam.
///
/// The worker thread drives this; tests substitute a canned backend.
/// Implementations return `ApiError::Cancelled` once the token fires.
pub trait SearchBackend: Send + 'static {
    fn execute(
        &self,
        term: &str,
        limit: u32,
        cancel_token: &CancellationToken,
    ) -> impl Future<Output = Result<Vec<Post>, ApiError>>;
}

/// GraphQL search client over reqwest.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute the posts search.
    ///
    /// Zero matches yield an empty vec, never an error. Titles pass through
    /// untouched, markup included.
    pub async fn search(&self, term: &str, limit: u32) -> Result<Vec<Post>, ApiError> {
        let body = serde_json::json!({
            "query": SEARCH_QUERY,
            "variables": { "search": term, "first": limit },
        });

        let response = self
            .http
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Api { code, message });
        }

        let envelope: GraphqlEnvelope = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        parse_envelope(envelope)
    }

    /// `search`, raced against a cancellation token.
    pub async fn search_with_cancel(
        &self,
        term: &str,
        limit: u32,
        cancel_token: &CancellationToken,
    ) -> Result<Vec<Post>, ApiError> {
        tokio::select! {
            biased;

            _ = cancel_token.cancelled() => Err(ApiError::Cancelled),
            result = self.search(term, limit) => result,
        }
    }
}

impl SearchBackend for SearchClient {
    fn execute(
        &self,
        term: &str,
        limit: u32,
        cancel_token: &CancellationToken,
    ) -> impl Future<Output = Result<Vec<Post>, ApiError>> {
        self.search_with_cancel(term, limit, cancel_token)
    }
}

/* ---- wire format ---- */

#[derive(Debug, Deserialize)]
struct GraphqlEnvelope {
    data: Option<SearchData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    posts: Option<PostConnection>,
}

#[derive(Debug, Deserialize)]
struct PostConnection {
    #[serde(default)]
    nodes: Vec<PostNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostNode {
    database_id: u64,
    title: Option<String>,
    date: Option<String>,
    uri: Option<String>,
    author: Option<AuthorEdge>,
    featured_image: Option<FeaturedImageEdge>,
    post_formats: Option<FormatConnection>,
}

#[derive(Debug, Deserialize)]
struct AuthorEdge {
    node: Option<AuthorNode>,
}

#[derive(Debug, Deserialize)]
struct AuthorNode {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FeaturedImageEdge {
    node: Option<ImageNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageNode {
    source_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FormatConnection {
    #[serde(default)]
    nodes: Vec<FormatNode>,
}

#[derive(Debug, Deserialize)]
struct FormatNode {
    slug: Option<String>,
}

fn parse_envelope(envelope: GraphqlEnvelope) -> Result<Vec<Post>, ApiError> {
    if let Some(errors) = envelope.errors
        && !errors.is_empty()
    {
        let message = errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ApiError::Query(message));
    }

    let nodes = envelope
        .data
        .and_then(|d| d.posts)
        .map(|p| p.nodes)
        .unwrap_or_default();

    Ok(nodes.into_iter().map(post_from_node).collect())
}

fn post_from_node(node: PostNode) -> Post {
    let format = node
        .post_formats
        .and_then(|f| f.nodes.into_iter().next())
        .and_then(|n| n.slug)
        .map(|slug| PostFormat::from_slug(&slug))
        .unwrap_or_default();

    Post {
        id: node.database_id,
        title: node.title.unwrap_or_default(),
        published_at: node.date.as_deref().and_then(parse_post_date),
        author_name: node.author.and_then(|a| a.node).and_then(|n| n.name),
        featured_image_url: node
            .featured_image
            .and_then(|f| f.node)
            .and_then(|n| n.source_url),
        format,
        canonical_path: node.uri.unwrap_or_default(),
    }
}

/// Post dates come back either as RFC 3339 or as a bare site-local datetime.
fn parse_post_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
