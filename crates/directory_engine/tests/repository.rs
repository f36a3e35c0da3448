use std::time::Duration;

use directory_core::{Category, Listing, ListingId};
use directory_engine::{
    FailureKind, HttpSettings, ListingRepository, RepositorySettings, WordPressRepository,
    FALLBACK_ADDRESS, FALLBACK_IMAGE, NONCE_HEADER,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COLLECTION: &str = "/wp-json/wp/v2/business";

fn repository_for(server: &MockServer) -> WordPressRepository {
    repository_with(server, HttpSettings::default())
}

fn repository_with(server: &MockServer, http: HttpSettings) -> WordPressRepository {
    WordPressRepository::new(
        Some(RepositorySettings {
            root: format!("{}/wp-json/", server.uri()),
            nonce: "abc123".to_string(),
        }),
        http,
    )
}

fn new_listing() -> Listing {
    Listing {
        id: ListingId::new("local-1"),
        name: "Edgewater Yoga".to_string(),
        category: Category::Gym,
        description: "A calm studio for all skill levels".to_string(),
        address: "5 Bay Rd".to_string(),
        phone: "(410) 555-0199".to_string(),
        rating: 5.0,
        image: "http://x.com/a.jpg".to_string(),
    }
}

#[tokio::test]
async fn fetch_maps_posts_to_listings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 101,
                "title": { "rendered": "Crab &amp; Co" },
                "excerpt": { "rendered": "<p>Fresh <strong>crabs</strong> daily.</p>\n" },
                "business_category": "Restaurant",
                "meta": { "address": "12 Dock St", "phone": "(410) 555-2000", "rating": "4.5" },
                "_embedded": {
                    "wp:featuredmedia": [{ "source_url": "https://cdn.example.com/crab.jpg" }]
                }
            },
            {
                "id": 102,
                "title": { "rendered": "Bare Post" },
                "excerpt": { "rendered": "" },
                "meta": []
            }
        ])))
        .mount(&server)
        .await;

    let listings = repository_for(&server).fetch_all().await;

    assert_eq!(
        listings,
        vec![
            Listing {
                id: ListingId::new("101"),
                name: "Crab & Co".to_string(),
                category: Category::Restaurant,
                description: "Fresh crabs daily.".to_string(),
                address: "12 Dock St".to_string(),
                phone: "(410) 555-2000".to_string(),
                rating: 4.5,
                image: "https://cdn.example.com/crab.jpg".to_string(),
            },
            Listing {
                id: ListingId::new("102"),
                name: "Bare Post".to_string(),
                category: Category::Restaurant,
                description: String::new(),
                address: FALLBACK_ADDRESS.to_string(),
                phone: String::new(),
                rating: 5.0,
                image: FALLBACK_IMAGE.to_string(),
            },
        ]
    );

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("_embed"));
}

#[tokio::test]
async fn fetch_reads_category_lists_and_numeric_ratings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "business_category": ["Unknown", "Dentist"], "meta": { "rating": 3.5 } },
            { "id": 2, "business_category": "Pizza Place", "meta": { "rating": "n/a" } },
            { "id": 3, "business_category": "hair salon", "meta": { "address": "" } }
        ])))
        .mount(&server)
        .await;

    let listings = repository_for(&server).fetch_all().await;

    let summary: Vec<_> = listings
        .iter()
        .map(|l| (l.id.to_string(), l.category, l.rating, l.address.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("1".to_string(), Category::Dentist, 3.5, FALLBACK_ADDRESS.to_string()),
            ("2".to_string(), Category::Restaurant, 5.0, FALLBACK_ADDRESS.to_string()),
            ("3".to_string(), Category::HairSalon, 5.0, FALLBACK_ADDRESS.to_string()),
        ]
    );
}

#[tokio::test]
async fn fetch_reads_rating_prefix_and_treats_zero_as_unrated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "meta": { "rating": 0 } },
            { "id": 2, "meta": { "rating": "0" } },
            { "id": 3, "meta": { "rating": "4.5 stars" } },
            { "id": 4, "meta": { "rating": " 3" } },
            { "id": 5, "meta": { "rating": "4.2.1" } },
            { "id": 6, "meta": { "rating": "-" } },
            { "id": 7, "meta": { "rating": true } }
        ])))
        .mount(&server)
        .await;

    let ratings: Vec<f64> = repository_for(&server)
        .fetch_all()
        .await
        .iter()
        .map(|listing| listing.rating)
        .collect();
    assert_eq!(ratings, vec![5.0, 5.0, 4.5, 3.0, 4.2, 5.0, 5.0]);
}

#[tokio::test]
async fn fetch_failure_yields_empty_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let repository = repository_for(&server);
    assert!(repository.fetch_all().await.is_empty());

    let err = repository.try_fetch_all().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn fetch_rejects_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let repository = repository_for(&server);
    assert!(repository.fetch_all().await.is_empty());
    assert_eq!(
        repository.try_fetch_all().await.unwrap_err().kind,
        FailureKind::Decode
    );
}

#[tokio::test]
async fn fetch_times_out_on_slow_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let http = HttpSettings {
        request_timeout: Duration::from_millis(50),
        ..HttpSettings::default()
    };
    let err = repository_with(&server, http)
        .try_fetch_all()
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn save_posts_pending_business_with_nonce() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .and(header(NONCE_HEADER, "abc123"))
        .and(body_json(json!({
            "title": "Edgewater Yoga",
            "content": "A calm studio for all skill levels",
            "status": "pending",
            "meta": {
                "address": "5 Bay Rd",
                "phone": "(410) 555-0199",
                "rating": 5.0,
                "category": "Gym"
            }
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    assert!(repository_for(&server).save(&new_listing()).await);
}

#[tokio::test]
async fn save_reports_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let repository = repository_for(&server);
    assert!(!repository.save(&new_listing()).await);
    assert_eq!(
        repository.try_save(&new_listing()).await.unwrap_err().kind,
        FailureKind::HttpStatus(403)
    );
}

#[tokio::test]
async fn unconfigured_repository_never_touches_the_network() {
    let repository = WordPressRepository::new(None, HttpSettings::default());

    assert!(!repository.is_configured());
    assert!(repository.fetch_all().await.is_empty());
    assert!(!repository.save(&new_listing()).await);
    assert_eq!(
        repository.try_save(&new_listing()).await.unwrap_err().kind,
        FailureKind::NotConfigured
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_network_failure() {
    let repository = WordPressRepository::new(
        Some(RepositorySettings {
            root: "http://127.0.0.1:9/wp-json".to_string(),
            nonce: String::new(),
        }),
        HttpSettings {
            connect_timeout: Duration::from_millis(200),
            ..HttpSettings::default()
        },
    );

    assert!(repository.fetch_all().await.is_empty());
    assert!(!repository.save(&new_listing()).await);
}
