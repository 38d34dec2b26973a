use chrono::{Duration, Utc};
use setlistify::{
    error::Error,
    types::{AccessToken, PerformanceSegment, PlaylistSpec, Setlist},
};

// Helper function to create a setlist with an unparseable date
fn create_test_setlist(event_date: &str) -> Setlist {
    serde_json::from_value(serde_json::json!({
        "id": "1",
        "eventDate": event_date,
        "url": "https://www.setlist.fm/setlist/1.html",
        "artist": {
            "mbid": "m",
            "name": "Sigur Rós",
            "sortName": "Sigur Rós",
            "url": "https://www.setlist.fm/setlists/sigur-ros.html"
        },
        "venue": { "id": "v", "name": "Harpa", "url": "https://www.setlist.fm/venue/harpa.html" },
        "sets": { "set": [] }
    }))
    .unwrap()
}

#[test]
fn test_access_token_rejects_blank_secret() {
    assert!(matches!(AccessToken::new(""), Err(Error::Authorization(_))));
    assert!(matches!(AccessToken::new("  "), Err(Error::Authorization(_))));
}

#[test]
fn test_access_token_expiry() {
    let now = Utc::now();
    let token = AccessToken::new("secret").unwrap();
    assert!(token.ensure_valid(now).is_ok());

    let token = token.with_expiry(now + Duration::minutes(10));
    assert!(!token.is_expired(now));
    assert!(token.is_expired(now + Duration::minutes(10)));
    assert!(matches!(
        token.ensure_valid(now + Duration::hours(1)),
        Err(Error::Authorization(_))
    ));
}

#[test]
fn test_access_token_debug_hides_secret() {
    let token = AccessToken::new("very-secret-value").unwrap();
    let printed = format!("{:?}", token);
    assert!(!printed.contains("very-secret-value"));
    assert_eq!(token.secret(), "very-secret-value");
}

#[test]
fn test_playlist_spec_defaults() {
    let spec = PlaylistSpec::new("Show");
    assert_eq!(spec.name, "Show");
    assert_eq!(spec.description, "");
    assert!(spec.is_public);
}

#[test]
fn test_segment_deserializes_setlistfm_shape() {
    let segment: PerformanceSegment = serde_json::from_str(
        r#"{"name": "Encore", "encore": 2, "song": [{"name": "Svefn-g-englar", "info": "extended"}]}"#,
    )
    .unwrap();

    assert!(segment.is_encore());
    assert_eq!(segment.encore, Some(2));
    assert_eq!(segment.songs.len(), 1);
    assert_eq!(segment.songs[0].name, "Svefn-g-englar");
}

#[test]
fn test_default_playlist_name_keeps_unparsed_date() {
    let setlist = create_test_setlist("sometime");
    assert_eq!(setlist.default_playlist_name(), "Sigur Rós @ Harpa (sometime)");
    assert_eq!(setlist.song_count(), 0);
    assert!(setlist.event_date().is_none());
}

#[test]
fn test_event_date_parses_setlistfm_format() {
    let setlist = create_test_setlist("03-11-2012");
    let date = setlist.event_date().unwrap();
    assert_eq!(date.format("%Y-%m-%d").to_string(), "2012-11-03");
}
