use serde::Deserialize;

/// Response shape of `GET /api/genres`.
#[derive(Debug, Deserialize)]
pub struct GenresResponse {
    pub genres: Vec<String>,
}

/// Envelope returned by both articles endpoints.
///
/// The server reports application failures as an `error` field in an
/// otherwise well-formed 2xx response, so both fields are optional here and
/// `error` must be checked before `articles` is trusted.
#[derive(Debug, Deserialize)]
pub struct ArticlesResponse {
    #[serde(default)]
    pub articles: Option<Vec<ArticleRecord>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Raw article document as served over the wire.
///
/// `body` is absent from trimmed responses; the list view never reads it,
/// and the detail view substitutes an empty body rather than failing.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleRecord {
    /// Server-assigned unique id (stringified by the server).
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default)]
    pub excerpt: String,
    /// Preformatted display date, e.g. "December 05th, 2023".
    #[serde(default)]
    pub publish_date: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// List-view projection of an [`ArticleRecord`].
///
/// Immutable once fetched; lives only as long as the Preview screen that
/// produced it, and is handed to the detail screen whole (not by id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub excerpt: String,
    pub publish_date: String,
    pub image: Option<String>,
}

impl From<ArticleRecord> for ArticleSummary {
    fn from(record: ArticleRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            author: record.author,
            genre: record.genre,
            excerpt: record.excerpt,
            publish_date: record.publish_date,
            image: record.image,
        }
    }
}

/// Detail-view projection carrying the full body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFull {
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Multi-paragraph text; paragraphs are separated by line breaks.
    pub body: String,
    pub image: Option<String>,
    pub publish_date: String,
}

impl From<ArticleRecord> for ArticleFull {
    fn from(record: ArticleRecord) -> Self {
        Self {
            title: record.title,
            author: record.author,
            genre: record.genre,
            body: record.body.unwrap_or_default(),
            image: record.image,
            publish_date: record.publish_date,
        }
    }
}
