//! Mock API tests for the bgt-client library.
//!
//! These tests use wiremock to simulate the Mason hypermedia server and
//! test the library's behavior without requiring a running API.

use bgt_client::error::HypermediaError;
use bgt_client::{
    ApiUrl, DetailView, Error, ListView, MasonPlayerDirectory, NewPlayer, PlayerDirectory,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create an API URL pointing at a mock server.
fn mock_api_url(server: &MockServer) -> ApiUrl {
    ApiUrl::new(format!(
        "http://127.0.0.1:{}/api/players/",
        server.address().port()
    ))
    .unwrap()
}

/// The collection representation the server would emit.
fn collection_body(names: &[&str]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "@controls": {"self": {"href": format!("/api/players/{name}/")}}
            })
        })
        .collect();

    json!({
        "@namespaces": {"BGT": {"name": "/boardgametracker/link-relations/"}},
        "items": items,
        "@controls": {
            "self": {"href": "/api/players/"},
            "BGT:add-player": {
                "href": "/api/players/",
                "method": "POST",
                "encoding": "json",
                "title": "Add a new player",
                "schema": {
                    "type": "object",
                    "properties": {
                        "name": {"description": "Player's name", "type": "string"}
                    },
                    "required": ["name"]
                }
            }
        }
    })
}

/// The long representation of one player.
fn player_body(name: &str, location: &str) -> serde_json::Value {
    json!({
        "name": name,
        "location": location,
        "@controls": {
            "self": {"href": format!("/api/players/{name}/")},
            "collection": {"href": "/api/players/"},
            "edit": {
                "href": format!("/api/players/{name}/"),
                "method": "PUT",
                "encoding": "json",
                "schema": {
                    "type": "object",
                    "properties": {
                        "name": {"description": "Player's name", "type": "string"}
                    },
                    "required": ["name"]
                }
            },
            "BGT:delete": {
                "href": format!("/api/players/{name}/"),
                "method": "DELETE"
            }
        }
    })
}

// ============================================================================
// Collection Tests
// ============================================================================

#[tokio::test]
async fn test_list_renders_one_row_per_item() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/"))
        .and(header("accept", "application/vnd.mason+json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(collection_body(&["Ada", "Grace", "Edsger"])),
        )
        .mount(&server)
        .await;

    let directory = MasonPlayerDirectory::new(mock_api_url(&server));
    let collection = directory.list().await.unwrap();
    let view = ListView::from_collection(&collection).unwrap();

    assert_eq!(view.rows.len(), 3);
    assert_eq!(view.rows[0].name, "Ada");
    assert_eq!(view.rows[0].show_href, "/api/players/Ada/");
    assert!(view.add_form.field("name").unwrap().required);
}

#[tokio::test]
async fn test_list_empty_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_body(&[])))
        .mount(&server)
        .await;

    let directory = MasonPlayerDirectory::new(mock_api_url(&server));
    let collection = directory.list().await.unwrap();

    assert!(collection.items.is_empty());
    assert!(ListView::from_collection(&collection).unwrap().rows.is_empty());
}

#[tokio::test]
async fn test_show_follows_self_control_and_renders_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_body(&["Ada"])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/players/Ada/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(player_body("Ada", "Oulu")))
        .mount(&server)
        .await;

    let directory = MasonPlayerDirectory::new(mock_api_url(&server));
    let collection = directory.list().await.unwrap();
    let view = ListView::from_collection(&collection).unwrap();

    let player = directory.player_at(&view.rows[0].show_href).await.unwrap();
    let detail = DetailView::from_player(&player).unwrap();

    // Breadcrumb points back at the original collection href.
    assert_eq!(detail.breadcrumb, "/api/players/");
    assert_eq!(detail.form.field("name").unwrap().value, "Ada");

    let location = detail.form.field("location").unwrap();
    assert!(location.readonly);
    assert_eq!(location.value, "Oulu");
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_posts_once_and_follows_location() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_body(&[])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/players/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Ada"})))
        .respond_with(
            ResponseTemplate::new(201).insert_header("location", "/api/players/Ada/"),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/players/Ada/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(player_body("Ada", "Oulu")))
        .expect(1)
        .mount(&server)
        .await;

    let directory = MasonPlayerDirectory::new(mock_api_url(&server));
    let collection = directory.list().await.unwrap();

    let created = directory
        .create(&collection, &NewPlayer::new("Ada"))
        .await
        .unwrap();

    assert_eq!(created.unwrap().name, "Ada");
}

#[tokio::test]
async fn test_create_without_location_returns_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_body(&[])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/players/"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let directory = MasonPlayerDirectory::new(mock_api_url(&server));
    let collection = directory.list().await.unwrap();

    let created = directory
        .create(&collection, &NewPlayer::new("Ada"))
        .await
        .unwrap();

    assert!(created.is_none());
}

#[tokio::test]
async fn test_create_conflict_surfaces_mason_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(collection_body(&["Ada"])))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/players/"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "@error": {
                "@message": "Player with name 'Ada' already exists.",
                "@messages": ["409 Conflict"]
            }
        })))
        .mount(&server)
        .await;

    let directory = MasonPlayerDirectory::new(mock_api_url(&server));
    let collection = directory.list().await.unwrap();

    let err = directory
        .create(&collection, &NewPlayer::new("Ada"))
        .await
        .unwrap_err();

    match err {
        Error::Api(api) => {
            assert!(api.is_conflict());
            assert_eq!(api.user_message(), "Player with name 'Ada' already exists.");
        }
        other => panic!("expected API error, got {other}"),
    }
}

// ============================================================================
// Edit / Delete Tests
// ============================================================================

#[tokio::test]
async fn test_update_puts_through_edit_control() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/Ada/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(player_body("Ada", "Oulu")))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/players/Ada/"))
        .and(body_json(json!({"name": "Ada Lovelace"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let directory = MasonPlayerDirectory::new(mock_api_url(&server));
    let player = directory.player_at("/api/players/Ada/").await.unwrap();

    directory
        .update(&player, &NewPlayer::new("Ada Lovelace"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_deletes_through_control() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/Ada/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(player_body("Ada", "Oulu")))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/players/Ada/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let directory = MasonPlayerDirectory::new(mock_api_url(&server));
    let player = directory.player_at("/api/players/Ada/").await.unwrap();

    directory.remove(&player).await.unwrap();
}

#[tokio::test]
async fn test_update_without_edit_control_makes_no_request() {
    let server = MockServer::start().await;

    // A representation missing its edit control; no PUT mock mounted, so
    // any request would fail the test through the returned error path.
    Mock::given(method("GET"))
        .and(path("/api/players/Ada/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Ada",
            "@controls": {"collection": {"href": "/api/players/"}}
        })))
        .mount(&server)
        .await;

    let directory = MasonPlayerDirectory::new(mock_api_url(&server));
    let player = directory.player_at("/api/players/Ada/").await.unwrap();

    let err = directory
        .update(&player, &NewPlayer::new("Ada Lovelace"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Hypermedia(HypermediaError::MissingControl { ref relation }) if relation == "edit"
    ));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_not_found_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/Nobody/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "@error": {
                "@message": "Player not found",
                "@messages": ["404 Not Found"]
            }
        })))
        .mount(&server)
        .await;

    let directory = MasonPlayerDirectory::new(mock_api_url(&server));
    let err = directory.player_at("/api/players/Nobody/").await.unwrap_err();

    assert_eq!(err.user_message(), "Player not found");
}

#[tokio::test]
async fn test_non_mason_error_body_degrades_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let directory = MasonPlayerDirectory::new(mock_api_url(&server));
    let err = directory.list().await.unwrap_err();

    // No secondary failure: the malformed body becomes a status-only error.
    assert_eq!(err.user_message(), "HTTP 500");
}

#[tokio::test]
async fn test_empty_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/players/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let directory = MasonPlayerDirectory::new(mock_api_url(&server));
    let err = directory.list().await.unwrap_err();

    let rendered = err.to_string();
    assert!(rendered.contains("503"));
}
