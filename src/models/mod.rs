pub mod media;

pub use media::{ImageData, VideoClip};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Marketplace section a listing belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    RealEstate,
    Factories,
    HeavyEquipment,
    Cars,
    Uber,
}

impl Category {
    /// Categories in the order the header pills show them
    pub const ALL: [Category; 5] = [
        Category::RealEstate,
        Category::Cars,
        Category::HeavyEquipment,
        Category::Factories,
        Category::Uber,
    ];

    /// Categories a new listing can be filed under. Transport is a service
    /// section, not something users post into.
    pub fn listable() -> &'static [Category] {
        &[
            Category::RealEstate,
            Category::Cars,
            Category::HeavyEquipment,
            Category::Factories,
        ]
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Category::RealEstate => "real-estate",
            Category::Factories => "factories",
            Category::HeavyEquipment => "heavy-equipment",
            Category::Cars => "cars",
            Category::Uber => "uber",
        }
    }

    /// Label shown on the category pill
    pub fn label(&self) -> &'static str {
        match self {
            Category::RealEstate => "عقارات",
            Category::Factories => "مصانع",
            Category::HeavyEquipment => "معدات",
            Category::Cars => "سيارات",
            Category::Uber => "أوبر",
        }
    }

    /// Short badge printed over a listing card's image
    pub fn badge(&self) -> &'static str {
        match self {
            Category::RealEstate => "عقار",
            Category::Cars => "سيارة",
            Category::HeavyEquipment => "معدة",
            Category::Factories => "مصنع",
            Category::Uber => "نقل",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::RealEstate => "\u{1F3E0}",     // 🏠
            Category::Cars => "\u{1F697}",           // 🚗
            Category::HeavyEquipment => "\u{1F69A}", // 🚚
            Category::Factories => "\u{1F3ED}",      // 🏭
            Category::Uber => "\u{1F4DE}",           // 📞
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::RealEstate
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.tag() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown category: {}", s))
    }
}

/// Condition of a listed item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: u64,
    pub currency: String,
    pub category: Category,
    pub location: String,
    pub image_url: String,
    pub description: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specs: Option<BTreeMap<String, String>>,
}

/// Marketplace user. No flow reads it yet.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
}
