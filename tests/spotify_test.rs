//! Spotify client behaviour against a mock Web API.

use serde_json::json;
use setlistify::{
    catalog::Catalog,
    error::{Error, Provider},
    playlist::{PlaylistFromSetsRequest, create_playlist_from_sets, resolver},
    spotify::SpotifyClient,
    types::{AccessToken, PerformanceSegment, PlaylistSpec, Song},
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token() -> AccessToken {
    AccessToken::new("token-123").unwrap()
}

fn track_item(id: &str, name: &str, artists: &[&str]) -> serde_json::Value {
    let artists: Vec<serde_json::Value> = artists
        .iter()
        .map(|a| {
            let artist_id = format!("{}-id", a.to_lowercase());
            json!({
                "id": artist_id,
                "name": a,
                "uri": format!("spotify:artist:{}", artist_id),
                "type": "artist",
            })
        })
        .collect();

    json!({
        "id": id,
        "name": name,
        "uri": format!("spotify:track:{}", id),
        "type": "track",
        "popularity": 71,
        "artists": artists,
    })
}

fn search_body(items: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "tracks": {
            "href": "https://api.spotify.com/v1/search",
            "limit": 20,
            "offset": 0,
            "total": items.len(),
            "items": items,
        }
    })
}

fn playlist_body(id: &str, name: &str, public: bool) -> serde_json::Value {
    json!({
        "id": id,
        "uri": format!("spotify:playlist:{}", id),
        "name": name,
        "public": public,
        "type": "playlist",
        "collaborative": false,
        "tracks": { "href": "", "total": 0, "items": [] },
    })
}

fn client(server: &MockServer) -> SpotifyClient {
    SpotifyClient::new(format!("{}/v1/", server.uri())).unwrap()
}

#[test]
fn test_new_trims_trailing_slash() {
    let client = SpotifyClient::new("https://api.spotify.com/v1/").unwrap();
    assert_eq!(client.api_url(), "https://api.spotify.com/v1");
}

#[tokio::test]
async fn test_search_sends_query_and_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "track:Creep artist:Radiohead"))
        .and(query_param("type", "track"))
        .and(header("authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(vec![
            track_item("1", "Creep", &["Radiohead"]),
            track_item("2", "Creep - Acoustic", &["Radiohead"]),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let candidates = client(&server)
        .search_tracks(&token(), "Creep", "Radiohead")
        .await
        .unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].uri, "spotify:track:1");
    assert_eq!(candidates[0].artists[0].name, "Radiohead");
    assert_eq!(candidates[1].name, "Creep - Acoustic");
}

#[tokio::test]
async fn test_resolver_strips_apostrophes_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "track:Dont Stop Me Now artist:Queen"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(vec![
            track_item("dsmn", "Don't Stop Me Now - Remastered 2011", &["Queen"]),
            track_item("cover", "Don't Stop Me Now", &["Glee Cast"]),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let matches = resolver::resolve(&client(&server), &token(), "Queen", "Don't Stop Me Now")
        .await
        .unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].uri, "spotify:track:dsmn");
}

#[tokio::test]
async fn test_search_unauthorized_is_authorization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "status": 401, "message": "The access token expired" }
        })))
        .mount(&server)
        .await;

    let result = client(&server)
        .search_tracks(&token(), "Creep", "Radiohead")
        .await;

    match result {
        Err(Error::Authorization(message)) => assert_eq!(message, "The access token expired"),
        other => panic!("Expected Authorization error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_rate_limit_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "3")
                .set_body_json(json!({
                    "error": { "status": 429, "message": "API rate limit exceeded" }
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server)
        .search_tracks(&token(), "Creep", "Radiohead")
        .await;

    match result {
        Err(Error::Upstream {
            provider,
            status,
            message,
        }) => {
            assert_eq!(provider, Provider::Spotify);
            assert_eq!(status, 429);
            assert_eq!(message, "API rate limit exceeded");
        }
        other => panic!("Expected Upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_malformed_payload_is_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": { "items": [ { "id": "1", "name": "Creep", "type": "track" } ] }
        })))
        .mount(&server)
        .await;

    let result = client(&server)
        .search_tracks(&token(), "Creep", "Radiohead")
        .await;

    assert!(matches!(
        result,
        Err(Error::Validation {
            provider: Provider::Spotify,
            ..
        })
    ));
}

#[tokio::test]
async fn test_search_rejects_non_track_items() {
    let server = MockServer::start().await;
    let mut album = track_item("1", "Pablo Honey", &["Radiohead"]);
    album["type"] = json!("album");
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(vec![album])))
        .mount(&server)
        .await;

    let result = client(&server)
        .search_tracks(&token(), "Creep", "Radiohead")
        .await;

    match result {
        Err(Error::Validation { message, .. }) => assert!(message.contains("expected track")),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_playlist_posts_spec() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/me/playlists"))
        .and(header("authorization", "Bearer token-123"))
        .and(body_json(json!({
            "name": "Radiohead live",
            "description": "",
            "public": true,
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(playlist_body("pl1", "Radiohead live", true)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let playlist = client(&server)
        .create_playlist(&token(), &PlaylistSpec::new("Radiohead live"))
        .await
        .unwrap();

    assert_eq!(playlist.id, "pl1");
    assert_eq!(playlist.uri, "spotify:playlist:pl1");
    assert!(playlist.is_public);
}

#[tokio::test]
async fn test_add_tracks_posts_uris() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl1/tracks"))
        .and(body_json(json!({ "uris": ["spotify:track:1", "spotify:track:2"] })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "snapshot_id": "abc123" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uris = vec!["spotify:track:1".to_string(), "spotify:track:2".to_string()];
    let result = client(&server)
        .add_tracks(&token(), "pl1", &uris)
        .await
        .unwrap();

    assert_eq!(result.snapshot_id, "abc123");
}

#[tokio::test]
async fn test_add_tracks_missing_snapshot_is_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl1/tracks"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = client(&server).add_tracks(&token(), "pl1", &[]).await;

    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[tokio::test]
async fn test_pipeline_end_to_end_against_mock_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "track:Creep artist:Radiohead"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(vec![track_item(
            "1",
            "Creep",
            &["Radiohead"],
        )])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/me/playlists"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(playlist_body("pl1", "Radiohead live", true)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/playlists/pl1/tracks"))
        .and(body_json(json!({ "uris": ["spotify:track:1"] })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "snapshot_id": "snap-1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = PlaylistFromSetsRequest {
        access_token: token(),
        artist_name: "Radiohead".to_string(),
        segments: vec![PerformanceSegment::new(vec![Song::new("Creep")])],
        playlist: PlaylistSpec::new("Radiohead live"),
    };

    let outcome = create_playlist_from_sets(&client(&server), &request)
        .await
        .unwrap();

    assert_eq!(outcome.tracks.len(), 1);
    assert_eq!(outcome.tracks[0].name, "Creep");
    assert_eq!(outcome.tracks[0].uri, "spotify:track:1");
    assert_eq!(outcome.population.snapshot_id, "snap-1");
}
