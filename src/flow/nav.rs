use crate::api::ApiClient;
use crate::flow::{ArticleDetailLoader, ArticleListLoader, GenreSelector};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("Navigation requires the {0} screen")]
    WrongScreen(&'static str),
    #[error("No article at row {0}")]
    NoSuchArticle(usize),
}

/// One navigable screen and the state it owns.
///
/// Replacing the current screen drops the previous one together with its
/// controller, so view state never outlives its screen and no stage sees
/// another stage's data except through the typed parameters handed
/// forward.
#[derive(Debug)]
pub enum Screen {
    Login,
    Welcome(GenreSelector),
    Preview(ArticleListLoader),
    FullArticle(ArticleDetailLoader),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Welcome(_) => "Welcome",
            Screen::Preview(_) => "Preview",
            Screen::FullArticle(_) => "FullArticle",
        }
    }
}

/// Forward-only navigation over the four screens.
///
/// Each transition builds the next screen, runs its activation fetch to
/// completion, and only then swaps it in. Dropping a transition future
/// mid-flight aborts the request and leaves the flow on the screen it was
/// on — a late response can never mutate a screen that no longer exists.
#[derive(Debug, Default)]
pub struct Flow {
    screen: Screen,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Login
    }
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Leave the Login screen and load the genre catalog.
    ///
    /// There is no credential handling; Login exists only as the flow's
    /// entry point and always advances.
    pub async fn sign_in(&mut self, client: &ApiClient) -> Result<(), NavError> {
        let Screen::Login = &self.screen else {
            return Err(NavError::WrongScreen("Login"));
        };
        let mut selector = GenreSelector::new();
        selector.activate(client).await;
        self.screen = Screen::Welcome(selector);
        Ok(())
    }

    /// Toggle a genre selection on the Welcome screen.
    pub fn toggle_genre(&mut self, genre: &str) -> Result<(), NavError> {
        let Screen::Welcome(selector) = &mut self.screen else {
            return Err(NavError::WrongScreen("Welcome"));
        };
        selector.toggle(genre);
        Ok(())
    }

    /// Confirm the Welcome selection and advance to the Preview list.
    pub async fn confirm_genres(&mut self, client: &ApiClient) -> Result<(), NavError> {
        let Screen::Welcome(selector) = &self.screen else {
            return Err(NavError::WrongScreen("Welcome"));
        };
        let genres = selector.confirm();
        let mut loader = ArticleListLoader::new();
        loader.activate(client, &genres).await;
        self.screen = Screen::Preview(loader);
        Ok(())
    }

    /// Open the article at `index` (in display order) on the FullArticle
    /// screen.
    pub async fn open_article(&mut self, client: &ApiClient, index: usize) -> Result<(), NavError> {
        let Screen::Preview(list) = &self.screen else {
            return Err(NavError::WrongScreen("Preview"));
        };
        let summary = list.select(index).ok_or(NavError::NoSuchArticle(index))?;
        let mut loader = ArticleDetailLoader::new(summary);
        loader.activate(client).await;
        self.screen = Screen::FullArticle(loader);
        Ok(())
    }
}
