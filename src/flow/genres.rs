use crate::api::ApiClient;
use crate::flow::LoadState;
use std::collections::BTreeSet;

/// Snapshot of the user's genre choices, handed forward by value.
///
/// Unique and unordered as far as semantics go; backed by a `BTreeSet` so
/// iteration (and therefore the request body) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedGenres(BTreeSet<String>);

impl SelectedGenres {
    pub fn contains(&self, genre: &str) -> bool {
        self.0.contains(genre)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The selection in request-body form.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl FromIterator<String> for SelectedGenres {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Welcome-screen controller: loads the genre catalog and tracks which
/// genres the user has selected.
#[derive(Debug, Default)]
pub struct GenreSelector {
    catalog: LoadState<Vec<String>>,
    selected: SelectedGenres,
}

impl GenreSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the genre catalog. Called once when the screen becomes active;
    /// dropping the returned future aborts the request.
    pub async fn activate(&mut self, client: &ApiClient) {
        self.catalog = LoadState::Loading;
        match client.fetch_genres().await {
            Ok(genres) => {
                self.catalog = LoadState::Ready(genres);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch genre catalog");
                self.catalog = LoadState::Error(e.to_string());
            }
        }
    }

    /// The server's genre vocabulary, or the state of fetching it.
    pub fn catalog(&self) -> &LoadState<Vec<String>> {
        &self.catalog
    }

    pub fn selected(&self) -> &SelectedGenres {
        &self.selected
    }

    /// Toggle one genre: remove it if selected, add it otherwise.
    /// Idempotent per press; toggling twice restores the previous set.
    pub fn toggle(&mut self, genre: &str) {
        if !self.selected.0.remove(genre) {
            self.selected.0.insert(genre.to_string());
        }
    }

    /// Hand the current selection (possibly empty) to the next screen.
    pub fn confirm(&self) -> SelectedGenres {
        self.selected.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use proptest::prelude::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        let config = Config {
            api_base_url: server.uri(),
            ..Config::default()
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selector = GenreSelector::new();
        selector.toggle("science");
        assert!(selector.selected().contains("science"));
        selector.toggle("science");
        assert!(!selector.selected().contains("science"));
        assert!(selector.selected().is_empty());
    }

    #[test]
    fn test_toggle_is_per_genre() {
        let mut selector = GenreSelector::new();
        selector.toggle("science");
        selector.toggle("history");
        selector.toggle("science");
        assert!(!selector.selected().contains("science"));
        assert!(selector.selected().contains("history"));
        assert_eq!(selector.selected().len(), 1);
    }

    #[test]
    fn test_confirm_returns_independent_snapshot() {
        let mut selector = GenreSelector::new();
        selector.toggle("science");
        let snapshot = selector.confirm();

        selector.toggle("history");
        assert_eq!(snapshot.to_vec(), vec!["science"]);
        assert_eq!(selector.selected().len(), 2);
    }

    #[test]
    fn test_selection_order_is_deterministic() {
        let mut selector = GenreSelector::new();
        selector.toggle("technology");
        selector.toggle("diy");
        selector.toggle("health");
        assert_eq!(selector.confirm().to_vec(), vec!["diy", "health", "technology"]);
    }

    proptest! {
        #[test]
        fn double_toggle_restores_selection(
            initial in proptest::collection::btree_set("[a-z]{1,8}", 0..6),
            genre in "[a-z]{1,8}",
        ) {
            let mut selector = GenreSelector::new();
            for g in &initial {
                selector.toggle(g);
            }
            let before = selector.confirm();

            selector.toggle(&genre);
            selector.toggle(&genre);

            prop_assert_eq!(selector.confirm(), before);
        }
    }

    #[tokio::test]
    async fn test_activate_populates_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/genres"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"genres": ["Science", "History"]})),
            )
            .mount(&server)
            .await;

        let mut selector = GenreSelector::new();
        selector.activate(&client_for(&server)).await;

        assert_eq!(
            selector.catalog().ready(),
            Some(&vec!["Science".to_string(), "History".to_string()])
        );
        assert!(selector.selected().is_empty());
    }

    #[tokio::test]
    async fn test_activate_failure_is_observable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/genres"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let mut selector = GenreSelector::new();
        selector.activate(&client_for(&server)).await;

        // No silent failure: the screen sees an explicit error, not an
        // empty catalog stuck in Loading.
        assert_eq!(selector.catalog().error(), Some("HTTP error: status 500"));
        assert!(!selector.catalog().is_loading());
    }
}
