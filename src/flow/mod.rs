pub mod draft;
pub mod form;
pub mod upload;

pub use draft::{AiOperation, AiResult, CreationDraft, DraftPhase, Preview};
pub use form::ListingForm;
pub use upload::{is_data_uri, load_image};

use crate::gateway::MarketplaceAi;
use crate::models::ImageData;
use chrono::Utc;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

pub const ENHANCE_PROMPT: &str =
    "Make this image look more professional and vibrant for a high-end listing";
pub const VIDEO_PROMPT: &str =
    "A smooth cinematic drone shot moving around this property/vehicle";

/// Drives one "new listing" modal: owns the draft and talks to the AI gateway.
///
/// Gateway failures never reach the caller. They are logged and the draft
/// falls back to where it was before the request.
pub struct CreationFlow {
    draft: CreationDraft,
    ai: Arc<dyn MarketplaceAi>,
    cancel: CancellationToken,
}

impl CreationFlow {
    pub fn new(ai: Arc<dyn MarketplaceAi>) -> Self {
        Self {
            draft: CreationDraft::new(),
            ai,
            cancel: CancellationToken::new(),
        }
    }

    pub fn draft(&self) -> &CreationDraft {
        &self.draft
    }

    pub fn phase(&self) -> DraftPhase {
        self.draft.phase()
    }

    pub fn stage_image(&mut self, image: ImageData) {
        self.draft.stage_image(image);
    }

    pub fn clear_image(&mut self) {
        self.draft.clear_image();
    }

    /// Token that aborts an outstanding video job. Cancelled when the flow is dropped.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Ask the gateway for a polished version of the staged photo
    pub async fn enhance_image(&mut self) -> DraftPhase {
        let Some(ticket) = self.draft.begin(AiOperation::Edit) else {
            return self.draft.phase();
        };

        let result = match self
            .ai
            .transform_listing_image(ticket.image(), ENHANCE_PROMPT)
            .await
        {
            Ok(Some(image)) => AiResult::Edited(image),
            Ok(None) => {
                warn!(provider = self.ai.provider_name(), "Image edit returned nothing");
                AiResult::None
            }
            Err(e) => {
                error!(provider = self.ai.provider_name(), error = %e, "Image edit failed");
                AiResult::None
            }
        };

        self.draft.complete(ticket, result)
    }

    /// Ask the gateway to animate the staged photo into a clip
    pub async fn generate_video(&mut self) -> DraftPhase {
        let Some(ticket) = self.draft.begin(AiOperation::Video) else {
            return self.draft.phase();
        };

        let result = match self
            .ai
            .synthesize_listing_video(ticket.image(), VIDEO_PROMPT, &self.cancel)
            .await
        {
            Ok(Some(clip)) => AiResult::Generated(clip),
            Ok(None) => {
                warn!(provider = self.ai.provider_name(), "Video job finished without a video");
                AiResult::None
            }
            Err(e) => {
                error!(provider = self.ai.provider_name(), error = %e, "Video generation failed");
                AiResult::None
            }
        };

        self.draft.complete(ticket, result)
    }

    /// Publish the listing. There is no backend yet, so the form and draft are dropped.
    pub fn submit(self, form: ListingForm) {
        info!(
            title = %form.title,
            price = ?form.price,
            category = %form.category,
            has_image = self.draft.image().is_some(),
            ai_result = ?self.draft.result().operation(),
            submitted_at = %Utc::now().to_rfc3339(),
            "Listing submitted (not stored)"
        );
    }
}

impl Drop for CreationFlow {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
