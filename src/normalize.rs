use chrono::{DateTime, Utc};
use feed_rs::model::Entry;
use serde::{Deserialize, Serialize};

use crate::sources::FeedSource;

/// Uniform article record produced from heterogeneous feed entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub source_name: String,
    pub source_url: String,
    pub url: String,
    /// Source of truth for ordering. `None` when the feed entry carried no
    /// parseable date; such articles sort as oldest.
    pub published_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Article {
    /// Descending-recency sort key. Dateless articles order as oldest.
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Map one feed entry into the uniform article record.
///
/// Entries without a usable title or link are skipped. Pure: no I/O, no
/// side effects.
pub fn normalize_entry(source: &FeedSource, entry: &Entry) -> Option<Article> {
    let title = entry
        .title
        .as_ref()
        .map(|t| t.content.trim().to_string())
        .filter(|t| !t.is_empty())?;

    let url = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .filter(|l| !l.is_empty())?;

    let published_at = entry.published.or(entry.updated);

    let summary = entry
        .summary
        .as_ref()
        .map(|s| s.content.trim().to_string())
        .filter(|s| !s.is_empty());

    Some(Article {
        title,
        source_name: source.name.clone(),
        source_url: source.homepage.clone(),
        url,
        published_at,
        summary,
    })
}
