//! Top-level application state.
//!
//! State is an immutable value; every change goes through [`reduce`].

use crate::catalog::{market_insights_query, Catalog};
use crate::gateway::{MarketplaceAi, Result};
use crate::models::{Category, Listing};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub active_category: Category,
    pub creation_open: bool,
    /// Last grounded market summary. Only a successful fetch sets it.
    pub insights: Option<String>,
}

impl AppState {
    pub fn visible_listings<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Listing> {
        catalog.by_category(self.active_category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectCategory(Category),
    OpenCreation,
    CloseCreation,
    InsightsLoaded(Option<String>),
}

pub fn reduce(state: &AppState, action: Action) -> AppState {
    debug!(?action, "Applying action");

    match action {
        Action::SelectCategory(category) => AppState {
            active_category: category,
            ..state.clone()
        },
        Action::OpenCreation => AppState {
            creation_open: true,
            ..state.clone()
        },
        Action::CloseCreation => AppState {
            creation_open: false,
            ..state.clone()
        },
        Action::InsightsLoaded(Some(text)) => AppState {
            insights: Some(text),
            ..state.clone()
        },
        Action::InsightsLoaded(None) => state.clone(),
    }
}

/// Ask the gateway about the active category's market.
///
/// Errors are returned untouched; the caller decides on a fallback.
pub async fn fetch_insights(state: &AppState, ai: &dyn MarketplaceAi) -> Result<Action> {
    let query = market_insights_query(state.active_category);
    info!(category = %state.active_category, "Fetching market insights");

    let text = ai.fetch_market_insights(&query).await?;
    Ok(Action::InsightsLoaded(text))
}
