//! Wire-contract tests for `ApiClient` against a mock article server.
//!
//! These pin the request shapes the server depends on — paths, methods,
//! headers, body layout — and the client's reading of the response
//! envelope, independent of any screen logic.

use eduscroll::api::{ApiClient, ApiError};
use eduscroll::config::Config;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = Config {
        api_base_url: server.uri(),
        ..Config::default()
    };
    ApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_genres_is_a_get_on_api_genres() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/genres"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "genres": ["diy", "science", "technology", "health", "gear", "environment", "other"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let genres = client_for(&server).fetch_genres().await.unwrap();
    assert_eq!(genres.len(), 7);
    assert_eq!(genres[0], "diy");
}

#[tokio::test]
async fn test_articles_posts_json_with_sorted_genres() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"genres": ["history", "science"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"articles": []})))
        .expect(1)
        .mount(&server)
        .await;

    let genres = vec!["history".to_string(), "science".to_string()];
    let articles = client_for(&server).fetch_articles(&genres).await.unwrap();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn test_legacy_route_embeds_genre_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/environment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"articles": []})))
        .expect(1)
        .mount(&server)
        .await;

    let articles = client_for(&server)
        .fetch_articles_by_genre("environment")
        .await
        .unwrap();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn test_full_document_maps_onto_record_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "articles": [{
                "_id": "656e1c2f9a0b",
                "title": "Repairing the unrepairable",
                "author": "M. Vance",
                "genre": "diy",
                "excerpt": "Fixing what the manual says you cannot.",
                "publish_date": "November 21th, 2023",
                "image": "https://example.com/repair.jpg",
                "body": "Paragraph one.\nParagraph two.",
            }]
        })))
        .mount(&server)
        .await;

    let articles = client_for(&server)
        .fetch_articles(&["diy".to_string()])
        .await
        .unwrap();

    let record = &articles[0];
    assert_eq!(record.id, "656e1c2f9a0b");
    assert_eq!(record.title, "Repairing the unrepairable");
    assert_eq!(record.author, "M. Vance");
    assert_eq!(record.genre, "diy");
    assert_eq!(record.excerpt, "Fixing what the manual says you cannot.");
    assert_eq!(record.publish_date, "November 21th, 2023");
    assert_eq!(record.image.as_deref(), Some("https://example.com/repair.jpg"));
    assert_eq!(record.body.as_deref(), Some("Paragraph one.\nParagraph two."));
}

#[tokio::test]
async fn test_error_envelope_beats_articles_field() {
    // If the server somehow sends both, the error wins: the document is
    // not trusted once the server has flagged the request as failed.
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "articles": [],
            "error": "Invalid genres: cooking",
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_articles(&[]).await;
    match result {
        Err(ApiError::Application(message)) => assert_eq!(message, "Invalid genres: cooking"),
        other => panic!("Expected Application error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_2xx_is_reported_by_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad genres"})))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_articles(&[]).await;
    assert!(matches!(result, Err(ApiError::HttpStatus(400))));
}
