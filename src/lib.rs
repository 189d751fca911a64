//! Newsdesk - an RSS news aggregation service
//!
//! Fetches articles from a registry of RSS/Atom feeds, normalizes them into
//! a uniform article model, and serves a sorted, paginated JSON feed with
//! optional entity highlighting and a persisted bookmark store.

pub mod aggregate;
pub mod bookmarks;
pub mod config;
pub mod fetcher;
pub mod highlight;
pub mod normalize;
pub mod routes;
pub mod sources;
