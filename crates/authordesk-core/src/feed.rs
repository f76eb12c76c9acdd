//! Syndication feed retrieval and normalisation.

use std::io::Cursor;
use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, warn};

/// Title used for entries that do not carry one.
pub const UNTITLED_ENTRY: &str = "No title";

const USER_AGENT: &str = concat!("authordesk/", env!("CARGO_PKG_VERSION"));

/// A single normalised feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub summary: String,
    pub link: String,
}

impl FeedEntry {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            link: link.into(),
        }
    }

    pub fn has_link(&self) -> bool {
        !self.link.trim().is_empty()
    }
}

/// Network and parse failures are reported as one kind to callers.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to load feed from {url}: {detail}")]
    ParseOrNetworkFailure { url: String, detail: String },
}

impl FetchError {
    fn new(url: &str, detail: impl ToString) -> Self {
        FetchError::ParseOrNetworkFailure {
            url: url.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Anything able to produce the entries of one feed.
pub trait FeedSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>, FetchError>;
}

/// Parses an RSS, Atom or JSON feed document into entries, keeping document order.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<FeedEntry>, feed_rs::parser::ParseFeedError> {
    let feed = feed_rs::parser::parse(Cursor::new(bytes))?;
    let entries = feed
        .entries
        .into_iter()
        .map(|entry| {
            let link = entry_link(&entry);
            FeedEntry {
                title: entry
                    .title
                    .map(|text| text.content)
                    .unwrap_or_else(|| UNTITLED_ENTRY.to_string()),
                summary: entry.summary.map(|text| text.content).unwrap_or_default(),
                link,
            }
        })
        .collect();
    Ok(entries)
}

/// The entry's page: its alternate link, else its first link, else a
/// permalink id.
fn entry_link(entry: &feed_rs::model::Entry) -> String {
    let alternate = entry
        .links
        .iter()
        .find(|link| matches!(link.rel.as_deref(), None | Some("alternate")))
        .or_else(|| entry.links.first())
        .map(|link| link.href.trim())
        .filter(|href| !href.is_empty());
    if let Some(href) = alternate {
        return href.to_string();
    }
    let id = entry.id.trim();
    if id.starts_with("http://") || id.starts_with("https://") {
        return id.to_string();
    }
    String::new()
}

/// Fetches feeds over HTTP GET with a bounded timeout.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    client: Client,
}

impl HttpFeedSource {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| FetchError::new("<client>", err))?;
        Ok(Self { client })
    }
}

impl FeedSource for HttpFeedSource {
    fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>, FetchError> {
        debug!(%url, "fetching feed");
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| {
                warn!(%url, ?err, "feed request failed");
                FetchError::new(url, err)
            })?;
        let body = response.bytes().map_err(|err| FetchError::new(url, err))?;
        let entries = parse_feed(&body).map_err(|err| {
            warn!(%url, ?err, "feed document could not be parsed");
            FetchError::new(url, err)
        })?;
        debug!(%url, count = entries.len(), "feed parsed");
        Ok(entries)
    }
}
