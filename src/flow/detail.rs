use crate::api::{ApiClient, ApiError, ArticleFull, ArticleRecord, ArticleSummary};

/// View state for the full-article screen.
///
/// `NotFound` is a terminal state of its own: the server answered, but no
/// record in the genre carried the expected title. Folding that case into
/// `Loading` would leave the screen spinning forever; folding it into
/// `Error` would misreport a data-freshness condition as a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Idle,
    Loading,
    Ready(ArticleFull),
    NotFound,
    Error(String),
}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }

    pub fn ready(&self) -> Option<&ArticleFull> {
        match self {
            DetailState::Ready(article) => Some(article),
            _ => None,
        }
    }
}

/// Full-article screen controller.
///
/// Only `title` and `genre` of the incoming summary are used: the server
/// has no single-article lookup, so the whole genre is re-fetched and
/// scanned for the first record whose title matches exactly. Titles are
/// assumed unique within a genre; on a collision the first match wins.
#[derive(Debug)]
pub struct ArticleDetailLoader {
    summary: ArticleSummary,
    state: DetailState,
}

impl ArticleDetailLoader {
    pub fn new(summary: ArticleSummary) -> Self {
        Self {
            summary,
            state: DetailState::Idle,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// The summary this screen was opened with.
    pub fn summary(&self) -> &ArticleSummary {
        &self.summary
    }

    /// Re-fetch the summary's genre and resolve the full article by title.
    /// Called once when the screen becomes active; dropping the returned
    /// future aborts the request.
    pub async fn activate(&mut self, client: &ApiClient) {
        self.state = DetailState::Loading;
        let genres = vec![self.summary.genre.clone()];
        let result = client.fetch_articles(&genres).await;
        self.resolve(result);
    }

    /// Like [`ArticleDetailLoader::activate`], but via the legacy
    /// per-genre GET route.
    pub async fn activate_legacy(&mut self, client: &ApiClient) {
        self.state = DetailState::Loading;
        let result = client.fetch_articles_by_genre(&self.summary.genre).await;
        self.resolve(result);
    }

    fn resolve(&mut self, result: Result<Vec<ArticleRecord>, ApiError>) {
        match result {
            Ok(records) => {
                match records.into_iter().find(|r| r.title == self.summary.title) {
                    Some(record) => {
                        self.state = DetailState::Ready(ArticleFull::from(record));
                    }
                    None => {
                        tracing::warn!(
                            title = %self.summary.title,
                            genre = %self.summary.genre,
                            "Article no longer present in its genre"
                        );
                        self.state = DetailState::NotFound;
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch article detail");
                self.state = DetailState::Error(e.screen_message());
            }
        }
    }
}
