use anyhow::{ensure, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::num::NonZeroU32;
use std::time::Duration;

use crate::gateway::{GeminiModels, PollPolicy};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
///
/// `GEMINI_API_KEY` is not captured here; the gateway reads it on every request.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_base_url: String,
    pub models: GeminiModels,
    pub video_poll: PollPolicy,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_base_url: DEFAULT_BASE_URL.to_string(),
            models: GeminiModels::default(),
            video_poll: PollPolicy::default(),
            http_timeout: Duration::from_secs(120),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Config::default();

        let video_poll = parse_poll_policy(
            env::var("SOUQNA_VIDEO_POLL_SECS").ok().as_deref(),
            env::var("SOUQNA_VIDEO_MAX_POLLS").ok().as_deref(),
        )?;
        let http_timeout =
            parse_http_timeout(env::var("SOUQNA_HTTP_TIMEOUT_SECS").ok().as_deref())?;

        Ok(Self {
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| defaults.gemini_base_url.clone()),
            models: GeminiModels {
                insights: env::var("SOUQNA_INSIGHTS_MODEL").unwrap_or(defaults.models.insights),
                image: env::var("SOUQNA_IMAGE_MODEL").unwrap_or(defaults.models.image),
                video: env::var("SOUQNA_VIDEO_MODEL").unwrap_or(defaults.models.video),
            },
            video_poll,
            http_timeout,
        })
    }
}

/// Video polling settings. Both values must be above zero: a zero interval
/// spins against the vendor and a zero limit gives up before the first check.
fn parse_poll_policy(poll_secs: Option<&str>, max_polls: Option<&str>) -> Result<PollPolicy> {
    let defaults = PollPolicy::default();

    let interval = match poll_secs {
        Some(v) => {
            let secs: u64 = v
                .trim()
                .parse()
                .context("SOUQNA_VIDEO_POLL_SECS must be a whole number of seconds")?;
            ensure!(secs > 0, "SOUQNA_VIDEO_POLL_SECS must be at least 1");
            Duration::from_secs(secs)
        }
        None => defaults.interval,
    };

    let max_attempts = match max_polls {
        Some(v) => Some(
            v.trim()
                .parse::<NonZeroU32>()
                .context("SOUQNA_VIDEO_MAX_POLLS must be a positive number")?,
        ),
        None => defaults.max_attempts,
    };

    Ok(PollPolicy {
        interval,
        max_attempts,
    })
}

fn parse_http_timeout(timeout_secs: Option<&str>) -> Result<Duration> {
    let Some(v) = timeout_secs else {
        return Ok(Config::default().http_timeout);
    };

    let secs: u64 = v
        .trim()
        .parse()
        .context("SOUQNA_HTTP_TIMEOUT_SECS must be a whole number of seconds")?;
    ensure!(secs > 0, "SOUQNA_HTTP_TIMEOUT_SECS must be at least 1");
    Ok(Duration::from_secs(secs))
}
