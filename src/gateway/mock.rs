// MockAi - scripted MarketplaceAi for tests
//
// Each operation pops the next queued outcome; an empty queue answers Ok(None).

use crate::gateway::error::{GatewayError, Result};
use crate::gateway::traits::MarketplaceAi;
use crate::models::{ImageData, VideoClip};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// Which operation a recorded call went to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Insights(String),
    Image(String),
    Video(String),
}

#[derive(Default)]
pub struct MockAi {
    insights: Arc<Mutex<VecDeque<Result<Option<String>>>>>,
    images: Arc<Mutex<VecDeque<Result<Option<ImageData>>>>>,
    videos: Arc<Mutex<VecDeque<Result<Option<VideoClip>>>>>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockAi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_insights(self, text: &str) -> Self {
        self.insights.lock().unwrap().push_back(Ok(Some(text.to_string())));
        self
    }

    pub fn with_image(self, image: ImageData) -> Self {
        self.images.lock().unwrap().push_back(Ok(Some(image)));
        self
    }

    pub fn with_video(self, clip: VideoClip) -> Self {
        self.videos.lock().unwrap().push_back(Ok(Some(clip)));
        self
    }

    /// Make the next call of every operation fail
    pub fn failing(self) -> Self {
        let err = || GatewayError::Api {
            status: 503,
            message: "overloaded".to_string(),
        };
        self.insights.lock().unwrap().push_back(Err(err()));
        self.images.lock().unwrap().push_back(Err(err()));
        self.videos.lock().unwrap().push_back(Err(err()));
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }
}

fn next<T>(queue: &Mutex<VecDeque<Result<Option<T>>>>) -> Result<Option<T>> {
    queue.lock().unwrap().pop_front().unwrap_or(Ok(None))
}

#[async_trait]
impl MarketplaceAi for MockAi {
    async fn fetch_market_insights(&self, query: &str) -> Result<Option<String>> {
        self.calls.lock().unwrap().push(MockCall::Insights(query.to_string()));
        next(&self.insights)
    }

    async fn transform_listing_image(
        &self,
        _image: &ImageData,
        instruction: &str,
    ) -> Result<Option<ImageData>> {
        self.calls.lock().unwrap().push(MockCall::Image(instruction.to_string()));
        next(&self.images)
    }

    async fn synthesize_listing_video(
        &self,
        _image: &ImageData,
        instruction: &str,
        cancel: &CancellationToken,
    ) -> Result<Option<VideoClip>> {
        self.calls.lock().unwrap().push(MockCall::Video(instruction.to_string()));
        if cancel.is_cancelled() {
            return Err(GatewayError::Cancelled);
        }
        next(&self.videos)
    }

    fn provider_name(&self) -> &'static str {
        "Mock"
    }
}
