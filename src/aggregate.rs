use serde::Serialize;
use tracing::warn;

use crate::fetcher::SourceOutcome;
use crate::normalize::Article;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// One page of the merged, recency-sorted article stream.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPage {
    pub status: Status,
    pub total_results: usize,
    pub articles: Vec<Article>,
}

impl NewsPage {
    pub fn error() -> Self {
        Self {
            status: Status::Error,
            total_results: 0,
            articles: Vec::new(),
        }
    }
}

/// Merge per-source outcomes into one sorted page.
///
/// Failed sources are logged and excluded. When no source produced data the
/// result is an explicit error page, never a fault. Sorting is stable, so
/// articles with equal timestamps keep source-iteration order and repeated
/// calls over identical data paginate identically. Pages are 1-indexed;
/// values below 1 are treated as the first page.
pub fn paginate(outcomes: Vec<SourceOutcome>, page: usize, limit: usize) -> NewsPage {
    let mut articles: Vec<Article> = Vec::new();
    let mut any_succeeded = false;

    for (name, outcome) in outcomes {
        match outcome {
            Ok(batch) => {
                any_succeeded = true;
                articles.extend(batch);
            }
            Err(e) => {
                warn!("Source '{}' excluded from aggregation: {}", name, e);
            }
        }
    }

    if !any_succeeded {
        return NewsPage::error();
    }

    articles.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));

    let total_results = articles.len();
    let page = page.max(1);
    let start = (page - 1).saturating_mul(limit);
    let articles = articles.into_iter().skip(start).take(limit).collect();

    NewsPage {
        status: Status::Ok,
        total_results,
        articles,
    }
}
