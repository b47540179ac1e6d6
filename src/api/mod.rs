//! HTTP client for the EDUScroll article server.
//!
//! The server exposes three endpoints:
//!
//! - `GET /api/genres` — the authoritative genre vocabulary
//! - `POST /api/articles` — articles filtered by a set of genres
//! - `GET /api/articles/{genre}` — legacy single-genre variant
//!
//! Application failures can arrive as an `error` field inside an otherwise
//! successful 2xx response; [`ApiClient`] folds that quirk into the
//! [`ApiError`] taxonomy so callers see one error type.

mod client;
mod types;

pub use client::{ApiClient, ApiError, FETCH_FALLBACK_MESSAGE};
pub use types::{ArticleFull, ArticleRecord, ArticleSummary, ArticlesResponse, GenresResponse};
