// SPDX-License-Identifier: MPL-2.0
//! Feed requests against a mock NASA server.

use httpmock::prelude::*;
use serde_json::json;
use stellar_view::config::NasaConfig;
use stellar_view::error::Error;
use stellar_view::feeds::{FeedResult, Feeds};
use stellar_view::nasa::apod::MediaKind;
use stellar_view::nasa::{apod, epic, gibs, library, mars, Client};

const KEY: &str = "TEST_KEY";

fn settings_for(server: &MockServer) -> NasaConfig {
    NasaConfig {
        api_key: KEY.to_string(),
        apod_url: server.url("/planetary/apod"),
        mars_url: server.url("/mars-photos/api/v1"),
        epic_url: server.url("/EPIC/api"),
        epic_archive_url: server.url("/archive/natural"),
        library_url: server.url(""),
        ..NasaConfig::default()
    }
}

fn client_for(server: &MockServer) -> Client {
    Client::new(settings_for(server)).expect("client should build")
}

#[tokio::test]
async fn apod_success_maps_fields() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/planetary/apod")
            .query_param("api_key", KEY);
        then.status(200).json_body(json!({
            "title": "Pillars of Creation",
            "explanation": "Towers of gas and dust.",
            "date": "2024-03-05",
            "url": "https://apod.nasa.gov/apod/image/pillars.jpg",
            "media_type": "image",
            "service_version": "v1"
        }));
    });

    let apod = apod::fetch(&client_for(&server))
        .await
        .expect("APOD should load");

    mock.assert();
    assert_eq!(apod.title, "Pillars of Creation");
    assert_eq!(apod.date, "2024-03-05");
    assert_eq!(apod.media, MediaKind::Image);
    assert_eq!(
        apod.image_url(),
        Some("https://apod.nasa.gov/apod/image/pillars.jpg")
    );
}

#[tokio::test]
async fn apod_video_has_no_image() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/planetary/apod");
        then.status(200).json_body(json!({
            "title": "Eclipse",
            "explanation": "Totality.",
            "date": "2024-04-08",
            "url": "https://www.youtube.com/embed/abc",
            "media_type": "video"
        }));
    });

    let apod = apod::fetch(&client_for(&server))
        .await
        .expect("APOD should load");
    assert_eq!(apod.media, MediaKind::Video);
    assert!(apod.image_url().is_none());
}

#[tokio::test]
async fn mars_success_uses_first_photo() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/mars-photos/api/v1/rovers/curiosity/photos")
            .query_param("sol", "1000")
            .query_param("api_key", KEY);
        then.status(200).json_body(json!({
            "photos": [
                {
                    "img_src": "https://mars.nasa.gov/first.jpg",
                    "earth_date": "2015-05-30",
                    "rover": { "name": "Curiosity" },
                    "camera": { "full_name": "Front Hazard Avoidance Camera" }
                },
                {
                    "img_src": "https://mars.nasa.gov/second.jpg",
                    "earth_date": "2015-05-30",
                    "rover": { "name": "Curiosity" },
                    "camera": { "full_name": "Mast Camera" }
                }
            ]
        }));
    });

    let photo = mars::fetch(&client_for(&server))
        .await
        .expect("Mars photo should load");

    mock.assert();
    assert_eq!(photo.image_url, "https://mars.nasa.gov/first.jpg");
    assert_eq!(photo.rover_name.as_deref(), Some("Curiosity"));
    assert_eq!(
        photo.camera_name.as_deref(),
        Some("Front Hazard Avoidance Camera")
    );
    assert_eq!(photo.earth_date, "2015-05-30");
}

#[tokio::test]
async fn mars_without_photos_fails() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/mars-photos/api/v1/rovers/curiosity/photos");
        then.status(200).json_body(json!({ "photos": [] }));
    });

    let result = mars::fetch(&client_for(&server)).await;
    assert!(matches!(result, Err(Error::Empty(_))));
}

#[tokio::test]
async fn epic_success_builds_archive_address_from_latest_entry() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/EPIC/api/natural/images")
            .query_param("api_key", KEY);
        then.status(200).json_body(json!([
            { "image": "early", "caption": "Morning", "date": "2024-03-05 00:00:00" },
            { "image": "X", "caption": "Evening", "date": "2024-03-05 21:47:52" }
        ]));
    });

    let epic = epic::fetch(&client_for(&server))
        .await
        .expect("EPIC should load");

    assert_eq!(
        epic.image_url,
        server.url("/archive/natural/2024/03/05/png/X.png")
    );
    assert_eq!(epic.caption, "Evening");
    assert_eq!(epic.date, "2024-03-05 21:47:52");
}

#[tokio::test]
async fn library_caps_results_and_drops_missing_thumbnails() {
    let server = MockServer::start_async().await;
    let items: Vec<_> = (0..10)
        .map(|i| {
            if i == 2 {
                json!({ "data": [{ "title": format!("Earth {i}") }] })
            } else {
                json!({
                    "data": [{ "title": format!("Earth {i}") }],
                    "links": [{ "href": format!("https://images/{i}.jpg") }]
                })
            }
        })
        .collect();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("q", "Earth")
            .query_param("media_type", "image");
        then.status(200)
            .json_body(json!({ "collection": { "items": items } }));
    });

    let selected = library::fetch(&client_for(&server))
        .await
        .expect("library should load");

    mock.assert();
    assert_eq!(selected.len(), 5);
    assert!(selected.iter().all(|item| !item.thumbnail_url.is_empty()));
    assert_eq!(selected[2].title.as_deref(), Some("Earth 3"));
}

#[tokio::test]
async fn one_failing_feed_leaves_the_others_intact() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/planetary/apod");
        then.status(200).json_body(json!({
            "title": "T",
            "explanation": "E",
            "date": "2024-03-05",
            "url": "https://apod/img.jpg",
            "media_type": "image"
        }));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/mars-photos/api/v1/rovers/curiosity/photos");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/EPIC/api/natural/images");
        then.status(200).body("not json");
    });
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).json_body(json!({ "collection": { "items": [] } }));
    });

    let client = client_for(&server);
    let mut feeds = Feeds::default();

    // Completion order is arbitrary; apply in a scrambled order.
    feeds.apply(FeedResult::Library(library::fetch(&client).await));
    feeds.apply(FeedResult::Mars(mars::fetch(&client).await));
    feeds.apply(FeedResult::Tile(Ok(gibs::static_tile(client.settings()))));
    feeds.apply(FeedResult::Epic(epic::fetch(&client).await));
    feeds.apply(FeedResult::Apod(apod::fetch(&client).await));

    assert!(!feeds.any_pending());
    assert_eq!(
        feeds.mars.failure(),
        Some("Request failed with status code 500")
    );
    assert!(feeds
        .epic
        .failure()
        .is_some_and(|message| message.starts_with("Invalid response")));
    assert_eq!(feeds.apod.ready().map(|apod| apod.title.as_str()), Some("T"));
    assert_eq!(feeds.library.ready().map(Vec::len), Some(0));
    assert!(feeds.tile.ready().is_some());
}

#[tokio::test]
async fn unreachable_server_fails_with_transport_message() {
    let mut settings = NasaConfig::default();
    settings.apod_url = "http://127.0.0.1:9/planetary/apod".to_string();
    settings.request_timeout_secs = 2;
    let client = Client::new(settings).expect("client should build");

    let mut feeds = Feeds::default();
    feeds.apply(FeedResult::Apod(apod::fetch(&client).await));

    let message = feeds.apod.failure().expect("APOD should fail");
    assert!(!message.is_empty());
    assert!(feeds.mars.is_pending());
}

#[tokio::test]
async fn apod_rate_limit_fails_only_its_slot() {
    let server = MockServer::start_async().await;
    let apod_mock = server.mock(|when, then| {
        when.method(GET).path("/planetary/apod");
        then.status(429);
    });
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).json_body(json!({
            "collection": { "items": [
                { "data": [{ "title": "Earth" }], "links": [{ "href": "https://images/0.jpg" }] }
            ] }
        }));
    });

    let client = client_for(&server);
    let mut feeds = Feeds::default();
    feeds.apply(FeedResult::Apod(apod::fetch(&client).await));
    feeds.apply(FeedResult::Library(library::fetch(&client).await));

    apod_mock.assert();
    assert_eq!(
        feeds.apod.failure(),
        Some("Request failed with status code 429")
    );
    assert_eq!(feeds.library.ready().map(Vec::len), Some(1));
    assert!(feeds.mars.is_pending());
    assert!(feeds.epic.is_pending());
    assert!(feeds.tile.is_pending());
}

#[tokio::test]
async fn library_invalid_json_is_a_decode_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).body("{ \"collection\": ");
    });

    let client = client_for(&server);
    let result = library::fetch(&client).await;
    assert!(matches!(result, Err(Error::Decode(_))));

    let mut feeds = Feeds::default();
    feeds.apply(FeedResult::Library(result));
    assert!(feeds
        .library
        .failure()
        .is_some_and(|message| message.starts_with("Invalid response")));
    assert!(feeds.apod.is_pending());
}

#[tokio::test]
async fn oversized_library_limit_is_capped_at_six() {
    let server = MockServer::start_async().await;
    let items: Vec<_> = (0..20)
        .map(|i| {
            json!({
                "data": [{ "title": format!("Earth {i}") }],
                "links": [{ "href": format!("https://images/{i}.jpg") }]
            })
        })
        .collect();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .json_body(json!({ "collection": { "items": items } }));
    });

    let settings = NasaConfig {
        library_limit: 50,
        ..settings_for(&server)
    };
    let client = Client::new(settings).expect("client should build");

    let selected = library::fetch(&client).await.expect("library should load");
    assert_eq!(selected.len(), 6);
}
