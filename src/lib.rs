//! Client-side article browsing for the EDUScroll API.
//!
//! The crate models the app's linear browsing flow as three screen
//! controllers over one HTTP client:
//!
//! - [`flow::GenreSelector`] — fetch the genre catalog, toggle selections
//! - [`flow::ArticleListLoader`] — fetch and shuffle article summaries for
//!   the selected genres
//! - [`flow::ArticleDetailLoader`] — re-fetch a genre and resolve one full
//!   article by title
//!
//! [`flow::Flow`] strings the controllers together as forward-only
//! navigation (Login → Welcome → Preview → FullArticle); [`api::ApiClient`]
//! talks to the server. The `eduscroll` binary in `main.rs` drives the same
//! flow from the command line.

pub mod api;
pub mod config;
pub mod flow;
pub mod util;
