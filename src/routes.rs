use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::aggregate::{paginate, NewsPage, Status, DEFAULT_PAGE_SIZE};
use crate::bookmarks::{article_identity, BookmarkStore};
use crate::fetcher::Fetcher;
use crate::highlight::highlight_entities;
use crate::normalize::Article;

pub struct AppState {
    pub fetcher: Arc<Fetcher>,
    pub bookmarks: Arc<BookmarkStore>,
}

// Custom error type
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error: {}", self.0),
        )
            .into_response()
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/news", get(news))
        .route("/bookmarks", get(bookmarks))
        .route("/bookmarks/toggle", post(toggle_bookmark))
        .route("/health", get(health))
        .with_state(state)
}

#[derive(Deserialize)]
pub struct NewsQuery {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub highlight: bool,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    DEFAULT_PAGE_SIZE
}

// Route handlers
pub async fn news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> (StatusCode, Json<NewsPage>) {
    let outcomes = state.fetcher.fetch_all().await;
    let mut page = paginate(outcomes, query.page, query.limit);

    if query.highlight {
        for article in &mut page.articles {
            article.title = highlight_entities(&article.title);
        }
    }

    let code = match page.status {
        Status::Ok => StatusCode::OK,
        Status::Error => StatusCode::BAD_GATEWAY,
    };
    (code, Json(page))
}

pub async fn bookmarks(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.bookmarks.all().await?;
    Ok(Json(entries))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub bookmarked: bool,
    pub identity: String,
}

pub async fn toggle_bookmark(
    State(state): State<Arc<AppState>>,
    Json(article): Json<Article>,
) -> Result<impl IntoResponse, AppError> {
    let bookmarked = state.bookmarks.toggle(&article).await?;
    let identity = article_identity(&article.title, &article.source_name);
    Ok(Json(ToggleResponse {
        bookmarked,
        identity,
    }))
}

pub async fn health() -> impl IntoResponse {
    "OK"
}
