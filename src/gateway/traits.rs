use crate::gateway::error::Result;
use crate::models::{ImageData, VideoClip};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// The three generative operations the marketplace delegates to a vendor.
///
/// Each call is one round trip (or one polled job) with no retry and no
/// caching. `Ok(None)` means the vendor answered without the payload asked for.
#[async_trait]
pub trait MarketplaceAi: Send + Sync {
    /// Search-grounded summary for a freeform market question
    async fn fetch_market_insights(&self, query: &str) -> Result<Option<String>>;

    /// Apply a textual instruction to a listing photo
    async fn transform_listing_image(
        &self,
        image: &ImageData,
        instruction: &str,
    ) -> Result<Option<ImageData>>;

    /// Animate a listing photo into a short clip. Stops early when `cancel` fires.
    async fn synthesize_listing_video(
        &self,
        image: &ImageData,
        instruction: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<VideoClip>>;

    /// Name of the vendor behind this gateway
    fn provider_name(&self) -> &'static str;
}
