use crate::config::Config;
use crate::gateway::error::{GatewayError, Result};
use crate::gateway::poll::poll_until_done;
use crate::gateway::traits::MarketplaceAi;
use crate::gateway::types::{
    GeminiModels, GenerateContentRequest, GenerateContentResponse, Operation, Part, PollPolicy,
    PredictVideoRequest, VideoImage, VideoInstance, VideoParameters,
};
use crate::models::{ImageData, VideoClip};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini REST implementation of the marketplace AI operations
#[derive(Clone)]
pub struct GeminiGateway {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    models: GeminiModels,
    poll: PollPolicy,
}

impl GeminiGateway {
    /// Create a gateway from application configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            api_key: None,
            models: config.models.clone(),
            poll: config.video_poll.clone(),
        })
    }

    /// Use a fixed key instead of reading `GEMINI_API_KEY` per request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn models(&self) -> &GeminiModels {
        &self.models
    }

    fn api_key(&self) -> Result<String> {
        match &self.api_key {
            Some(key) => Ok(key.clone()),
            None => std::env::var(API_KEY_ENV)
                .map_err(|_| GatewayError::Config(format!("{} not set", API_KEY_ENV))),
        }
    }

    fn model_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, model, method)
    }

    fn operation_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name.trim_start_matches('/'))
    }

    /// Send an authenticated request and fail on non-2xx
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .header(API_KEY_HEADER, self.api_key()?)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GatewayError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        Ok(response)
    }

    async fn post_json<B, R>(&self, url: String, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.send(self.client.post(url).json(body)).await?;
        Ok(response.json().await?)
    }

    async fn get_operation(&self, name: String) -> Result<Operation> {
        let response = self.send(self.client.get(self.operation_url(&name))).await?;
        Ok(response.json().await?)
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let start = std::time::Instant::now();
        let response = self
            .post_json(self.model_url(model, "generateContent"), request)
            .await?;

        debug!(
            model = %model,
            duration_ms = start.elapsed().as_millis(),
            "Gemini generateContent"
        );
        Ok(response)
    }

    /// Fetch a finished video asset; the URI needs the same API key
    async fn download_video(&self, uri: &str) -> Result<VideoClip> {
        let response = self.send(self.client.get(uri)).await?;

        let mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("video/mp4")
            .to_string();

        let bytes = response.bytes().await?;

        debug!(bytes = bytes.len(), mime_type = %mime_type, "Downloaded generated video");

        Ok(VideoClip {
            mime_type,
            bytes: bytes.to_vec(),
            source_uri: uri.to_string(),
        })
    }
}

#[async_trait]
impl MarketplaceAi for GeminiGateway {
    async fn fetch_market_insights(&self, query: &str) -> Result<Option<String>> {
        info!("Requesting grounded market insights");

        let request =
            GenerateContentRequest::user(vec![Part::text(query)]).with_search_grounding();
        let response = self.generate_content(&self.models.insights, &request).await?;

        Ok(response.text())
    }

    async fn transform_listing_image(
        &self,
        image: &ImageData,
        instruction: &str,
    ) -> Result<Option<ImageData>> {
        info!(bytes = image.bytes.len(), "Requesting listing image edit");

        let request = GenerateContentRequest::user(vec![
            Part::inline(image.mime_type.clone(), image.to_base64()),
            Part::text(instruction),
        ]);
        let response = self.generate_content(&self.models.image, &request).await?;

        match response.first_inline_data() {
            Some(inline) => {
                let mime_type = if inline.mime_type.is_empty() {
                    "image/png"
                } else {
                    inline.mime_type.as_str()
                };
                let edited = ImageData::from_base64(mime_type, &inline.data)
                    .map_err(|e| GatewayError::Parse(e.to_string()))?;
                Ok(Some(edited))
            }
            None => {
                warn!("Image edit response carried no image part");
                Ok(None)
            }
        }
    }

    async fn synthesize_listing_video(
        &self,
        image: &ImageData,
        instruction: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<VideoClip>> {
        info!(bytes = image.bytes.len(), "Submitting listing video job");

        let request = PredictVideoRequest {
            instances: vec![VideoInstance {
                prompt: instruction.to_string(),
                image: VideoImage {
                    bytes_base64_encoded: image.to_base64(),
                    mime_type: image.mime_type.clone(),
                },
            }],
            parameters: VideoParameters::default(),
        };

        let operation: Operation = self
            .post_json(self.model_url(&self.models.video, "predictLongRunning"), &request)
            .await?;
        info!(operation = %operation.name, "Video job accepted, polling for completion");

        let operation =
            poll_until_done(operation, &self.poll, cancel, |name| self.get_operation(name))
                .await?;

        if let Some(status) = &operation.error {
            return Err(GatewayError::Operation(format!(
                "{} (code {})",
                status.message, status.code
            )));
        }

        let uri = match operation.video_uri() {
            Some(uri) => uri.to_string(),
            None => {
                warn!(operation = %operation.name, "Finished video job has no video");
                return Ok(None);
            }
        };

        let clip = self.download_video(&uri).await?;
        info!(bytes = clip.bytes.len(), "Video ready");
        Ok(Some(clip))
    }

    fn provider_name(&self) -> &'static str {
        "Gemini"
    }
}
