use crate::api::{ApiClient, ApiError, ArticleRecord, ArticleSummary};
use crate::flow::{LoadState, SelectedGenres};
use rand::seq::SliceRandom;
use rand::Rng;

/// Preview-screen controller: loads article summaries for the selected
/// genres and presents them in randomized order.
#[derive(Debug, Default)]
pub struct ArticleListLoader {
    articles: LoadState<Vec<ArticleSummary>>,
}

impl ArticleListLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and shuffle the article list for `genres`. Called once when
    /// the screen becomes active; dropping the returned future aborts the
    /// request.
    pub async fn activate(&mut self, client: &ApiClient, genres: &SelectedGenres) {
        let result = self.fetch(client, genres).await;
        self.apply(result, &mut rand::thread_rng());
    }

    /// Like [`ArticleListLoader::activate`], with the shuffle's randomness
    /// injected. Tests pass a seeded generator to pin the display order.
    pub async fn activate_with_rng<R: Rng>(
        &mut self,
        client: &ApiClient,
        genres: &SelectedGenres,
        rng: &mut R,
    ) {
        let result = self.fetch(client, genres).await;
        self.apply(result, rng);
    }

    async fn fetch(
        &mut self,
        client: &ApiClient,
        genres: &SelectedGenres,
    ) -> Result<Vec<ArticleRecord>, ApiError> {
        self.articles = LoadState::Loading;
        client.fetch_articles(&genres.to_vec()).await
    }

    fn apply<R: Rng>(&mut self, result: Result<Vec<ArticleRecord>, ApiError>, rng: &mut R) {
        match result {
            Ok(records) => {
                self.articles = LoadState::Ready(shuffled_summaries(records, rng));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch article list");
                self.articles = LoadState::Error(e.screen_message());
            }
        }
    }

    /// The shuffled summaries, or the state of fetching them.
    pub fn articles(&self) -> &LoadState<Vec<ArticleSummary>> {
        &self.articles
    }

    /// Hand the full summary at `index` (in display order) to the detail
    /// screen. `None` while the list is not ready or the index is out of
    /// range.
    pub fn select(&self, index: usize) -> Option<ArticleSummary> {
        self.articles.ready().and_then(|list| list.get(index).cloned())
    }
}

/// Project the raw records to summaries and apply a uniform Fisher-Yates
/// shuffle. The displayed set is always a permutation of the response set.
fn shuffled_summaries<R: Rng>(records: Vec<ArticleRecord>, rng: &mut R) -> Vec<ArticleSummary> {
    let mut summaries: Vec<ArticleSummary> =
        records.into_iter().map(ArticleSummary::from).collect();
    summaries.shuffle(rng);
    summaries
}
