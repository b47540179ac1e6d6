/// Tagged view state shared by the genre and list screens.
///
/// Entered once per activation: `Idle → Loading → {Ready | Error}`. The
/// value is owned by its screen and discarded on teardown, so a terminal
/// variant is final for the life of the screen. `Error` always carries a
/// user-facing message; there is no silent-failure path that leaves the
/// screen loading forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The loaded value, if the fetch has settled successfully.
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The error message, if the fetch has settled with a failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}
