use directory_core::{Category, Listing, ListingId, DEFAULT_RATING};
use directory_logging::{directory_debug, directory_info, directory_warn};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::config::{HttpSettings, RepositorySettings};
use crate::http::{build_client, map_reqwest_error, parse_url, read_body};
use crate::sanitize::strip_tags;
use crate::{BackendError, FailureKind};

pub const FALLBACK_ADDRESS: &str = "Edgewater, MD";
pub const FALLBACK_IMAGE: &str = "https://picsum.photos/seed/wp/400/300";
pub const FALLBACK_CATEGORY: Category = Category::Restaurant;
pub const NONCE_HEADER: &str = "X-WP-Nonce";
/// New submissions wait for moderation before other visitors see them.
const PENDING_STATUS: &str = "pending";
const COLLECTION_PATH: &str = "wp/v2/business";

/// Remote store for listings.
///
/// Neither method fails: an unreachable backend yields an empty collection or
/// `false`, and the caller falls back to what it already shows.
#[async_trait::async_trait]
pub trait ListingRepository: Send + Sync {
    async fn fetch_all(&self) -> Vec<Listing>;
    async fn save(&self, listing: &Listing) -> bool;
}

/// Listing repository backed by the WordPress REST API (`business` post type).
#[derive(Debug, Clone)]
pub struct WordPressRepository {
    settings: Option<RepositorySettings>,
    http: HttpSettings,
}

impl WordPressRepository {
    pub fn new(settings: Option<RepositorySettings>, http: HttpSettings) -> Self {
        Self { settings, http }
    }

    pub fn is_configured(&self) -> bool {
        self.settings.is_some()
    }

    pub async fn try_fetch_all(&self) -> Result<Vec<Listing>, BackendError> {
        let settings = self.require_settings()?;
        let mut url = collection_url(settings)?;
        url.set_query(Some("_embed"));

        let client = build_client(&self.http)?;
        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let body = read_body(response, self.http.max_bytes).await?;
        let posts: Vec<WpPost> = serde_json::from_slice(&body)
            .map_err(|err| BackendError::new(FailureKind::Decode, err.to_string()))?;

        Ok(posts.into_iter().map(WpPost::into_listing).collect())
    }

    pub async fn try_save(&self, listing: &Listing) -> Result<(), BackendError> {
        let settings = self.require_settings()?;
        let url = collection_url(settings)?;
        let body = serde_json::to_vec(&NewPost::from_listing(listing))
            .map_err(|err| BackendError::new(FailureKind::Decode, err.to_string()))?;

        let client = build_client(&self.http)?;
        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(NONCE_HEADER, settings.nonce.as_str())
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(BackendError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ))
        }
    }

    fn require_settings(&self) -> Result<&RepositorySettings, BackendError> {
        self.settings.as_ref().ok_or_else(|| {
            BackendError::new(FailureKind::NotConfigured, "no repository root configured")
        })
    }
}

#[async_trait::async_trait]
impl ListingRepository for WordPressRepository {
    async fn fetch_all(&self) -> Vec<Listing> {
        match self.try_fetch_all().await {
            Ok(listings) => {
                directory_info!("Fetched {} listings from repository", listings.len());
                listings
            }
            Err(err) if err.kind == FailureKind::NotConfigured => {
                directory_info!("Listing repository not configured; using bundled listings");
                Vec::new()
            }
            Err(err) => {
                directory_warn!("Listing repository unavailable, keeping bundled listings: {}", err);
                Vec::new()
            }
        }
    }

    async fn save(&self, listing: &Listing) -> bool {
        match self.try_save(listing).await {
            Ok(()) => {
                directory_info!("Listing {} synced with repository", listing.id);
                true
            }
            Err(err) if err.kind == FailureKind::NotConfigured => {
                directory_debug!("Skipping save of listing {}: {}", listing.id, err);
                false
            }
            Err(err) => {
                directory_warn!("Failed to save listing {}: {}", listing.id, err);
                false
            }
        }
    }
}

fn collection_url(settings: &RepositorySettings) -> Result<Url, BackendError> {
    parse_url(&format!(
        "{}/{COLLECTION_PATH}",
        settings.root.trim_end_matches('/')
    ))
}

#[derive(Debug, Deserialize)]
struct WpPost {
    id: u64,
    #[serde(default)]
    title: Rendered,
    #[serde(default)]
    excerpt: Rendered,
    #[serde(default)]
    business_category: Value,
    // WordPress sends `[]` instead of an object when no meta is registered.
    #[serde(default)]
    meta: Value,
    #[serde(default, rename = "_embedded")]
    embedded: Option<WpEmbedded>,
}

#[derive(Debug, Default, Deserialize)]
struct Rendered {
    #[serde(default)]
    rendered: String,
}

#[derive(Debug, Deserialize)]
struct WpEmbedded {
    #[serde(default, rename = "wp:featuredmedia")]
    featured_media: Vec<WpMedia>,
}

#[derive(Debug, Deserialize)]
struct WpMedia {
    #[serde(default)]
    source_url: Option<String>,
}

impl WpPost {
    fn into_listing(self) -> Listing {
        let image = self
            .embedded
            .and_then(|embedded| embedded.featured_media.into_iter().next())
            .and_then(|media| media.source_url)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| FALLBACK_IMAGE.to_string());

        Listing {
            id: ListingId::new(self.id.to_string()),
            name: strip_tags(&self.title.rendered),
            category: parse_category(&self.business_category),
            description: strip_tags(&self.excerpt.rendered),
            address: meta_text(&self.meta, "address")
                .unwrap_or_else(|| FALLBACK_ADDRESS.to_string()),
            phone: meta_text(&self.meta, "phone").unwrap_or_default(),
            rating: meta_rating(&self.meta).unwrap_or(DEFAULT_RATING),
            image,
        }
    }
}

/// Accepts a single label or a list of term labels; the first known one wins.
fn parse_category(value: &Value) -> Category {
    let known = match value {
        Value::String(label) => Category::parse(label),
        Value::Array(labels) => labels
            .iter()
            .filter_map(Value::as_str)
            .find_map(Category::parse),
        _ => None,
    };
    known.unwrap_or(FALLBACK_CATEGORY)
}

fn meta_text(meta: &Value, key: &str) -> Option<String> {
    meta.get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}

/// A zero rating counts as unrated, like a missing one.
fn meta_rating(meta: &Value) -> Option<f64> {
    let rating = match meta.get("rating")? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => leading_number(text),
        _ => None,
    }?;
    (rating.is_finite() && rating != 0.0).then_some(rating)
}

/// Longest numeric prefix, so `"4.5 stars"` reads as 4.5.
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map_or(text.len(), |(index, _)| index);
    let candidate = &text[..end];
    (1..=candidate.len())
        .rev()
        .find_map(|len| candidate[..len].parse::<f64>().ok())
}

#[derive(Debug, Serialize)]
struct NewPost<'a> {
    title: &'a str,
    content: &'a str,
    status: &'static str,
    meta: NewPostMeta<'a>,
}

#[derive(Debug, Serialize)]
struct NewPostMeta<'a> {
    address: &'a str,
    phone: &'a str,
    rating: f64,
    category: &'static str,
}

impl<'a> NewPost<'a> {
    fn from_listing(listing: &'a Listing) -> Self {
        Self {
            title: &listing.name,
            content: &listing.description,
            status: PENDING_STATUS,
            meta: NewPostMeta {
                address: &listing.address,
                phone: &listing.phone,
                rating: listing.rating,
                category: listing.category.label(),
            },
        }
    }
}
