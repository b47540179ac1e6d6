//! Screen controllers for the article-browsing flow.
//!
//! Control flows strictly forward: genre selection hands a set of genres to
//! the article list, the list hands one summary to the detail screen, and
//! every stage re-fetches from the server independently — nothing is cached
//! or synced backward.
//!
//! Each controller owns its view state ([`LoadState`] or [`DetailState`]),
//! mutates it only from its own `activate`, and is dropped whole when its
//! screen is replaced. Activation futures abort the in-flight request when
//! dropped, so a late response can never touch a torn-down screen.

mod articles;
mod detail;
mod genres;
mod nav;
mod state;

pub use articles::ArticleListLoader;
pub use detail::{ArticleDetailLoader, DetailState};
pub use genres::{GenreSelector, SelectedGenres};
pub use nav::{Flow, NavError, Screen};
pub use state::LoadState;
