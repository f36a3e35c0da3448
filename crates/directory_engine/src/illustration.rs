use directory_logging::{directory_error, directory_info};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::config::{HttpSettings, IllustrationSettings};
use crate::http::{build_client, map_reqwest_error, parse_url, read_body};
use crate::{BackendError, FailureKind};

pub const API_KEY_HEADER: &str = "x-goog-api-key";
pub const HEADER_ASPECT_RATIO: &str = "16:9";

const HEADER_PROMPT: &str = "A dynamic and engaging collage representing a diverse range of local \
businesses in Edgewater, Maryland. Include high-quality visual icons and elements like a gym, \
electrical contractor, massage therapy, lawn care service, HVAC contractor, barber shop, \
restaurant, automotive service, nail salon, dentist office, house cleaning service, and hair \
salon. Use a vibrant color palette (blues, oranges, greens) and a modern grid/collage layout. \
Create a sense of local community, warmth, and professional support for small businesses. \
Background should feel bright and inviting for a website header.";

/// Optional decorative header image.
///
/// Returns `None` whenever no image can be produced; callers keep their
/// default image in that case.
#[async_trait::async_trait]
pub trait IllustrationProvider: Send + Sync {
    async fn try_generate(&self) -> Option<String>;
}

/// Generates the header collage with a Gemini image model.
#[derive(Debug, Clone)]
pub struct GeminiIllustrator {
    settings: IllustrationSettings,
    http: HttpSettings,
}

impl GeminiIllustrator {
    pub fn new(settings: IllustrationSettings, http: HttpSettings) -> Self {
        Self { settings, http }
    }

    /// Whether a credential is present. Without one no request is ever made.
    pub fn is_available(&self) -> bool {
        self.settings.api_key.is_some()
    }

    /// Requests one image and returns it as a `data:` URL.
    pub async fn generate(&self) -> Result<String, BackendError> {
        let api_key = self.settings.api_key.as_deref().ok_or_else(|| {
            BackendError::new(FailureKind::NotConfigured, "no illustration api key")
        })?;
        let url = parse_url(&format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.api_base.trim_end_matches('/'),
            self.settings.model
        ))?;
        let body = serde_json::to_vec(&GenerateRequest::header_collage())
            .map_err(|err| BackendError::new(FailureKind::Decode, err.to_string()))?;

        let client = build_client(&self.http)?;
        let response = client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, api_key)
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body = read_body(response, self.http.max_bytes).await?;
        let parsed: GenerateResponse = serde_json::from_slice(&body)
            .map_err(|err| BackendError::new(FailureKind::Decode, err.to_string()))?;

        parsed.first_image().ok_or_else(|| {
            BackendError::new(FailureKind::Decode, "response contained no inline image")
        })
    }
}

#[async_trait::async_trait]
impl IllustrationProvider for GeminiIllustrator {
    async fn try_generate(&self) -> Option<String> {
        if !self.is_available() {
            directory_info!("Illustration api key not found; using static header image");
            return None;
        }
        match self.generate().await {
            Ok(image) => Some(image),
            Err(err) => {
                directory_error!("Error generating header image: {}", err);
                None
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: &'static str,
}

impl GenerateRequest {
    fn header_collage() -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: HEADER_PROMPT,
                }],
            }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: HEADER_ASPECT_RATIO,
                },
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

impl GenerateResponse {
    /// First inline image of the first candidate, as a `data:` URL.
    fn first_image(self) -> Option<String> {
        let parts = self.candidates.into_iter().next()?.content?.parts;
        parts
            .into_iter()
            .find_map(|part| part.inline_data)
            .map(|inline| {
                let mime = inline.mime_type.unwrap_or_else(|| "image/png".to_string());
                format!("data:{mime};base64,{}", inline.data)
            })
    }
}
