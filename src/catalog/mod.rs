pub mod seed;

pub use seed::seed_listings;

use crate::models::{Category, Listing};

/// Read-only set of listings the marketplace browses
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Catalog backed by the built-in mock listings
    pub fn seeded() -> Self {
        Self::new(seed_listings())
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn by_category(&self, category: Category) -> Vec<&Listing> {
        filter_by_category(&self.listings, category)
    }
}

/// Listings in `category`, keeping their original relative order
pub fn filter_by_category(listings: &[Listing], category: Category) -> Vec<&Listing> {
    listings.iter().filter(|l| l.category == category).collect()
}

/// Freeform question sent to the grounded insights model for a category.
/// Only real estate and cars have their own market wording; every other
/// section asks about heavy equipment.
pub fn market_insights_query(category: Category) -> String {
    let market = match category {
        Category::RealEstate => "العقارات",
        Category::Cars => "السيارات",
        _ => "المعدات الثقيلة",
    };
    format!("أعطني نظرة سريعة على سوق {} في السعودية اليوم", market)
}
