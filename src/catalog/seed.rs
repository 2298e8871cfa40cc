use crate::models::{Category, Listing};
use tracing::debug;

fn listing(id: &str, title: &str, price: u64, category: Category, location: &str, image: &str) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        price,
        currency: "ريال".to_string(),
        category,
        location: location.to_string(),
        image_url: format!("assets/images/{}", image),
        description: String::new(),
        created_at: String::new(),
        condition: None,
        specs: None,
    }
}

/// Mock listings shown until a real listing store exists
pub fn seed_listings() -> Vec<Listing> {
    debug!("Loading seed listings");

    vec![
        listing("1", "فيلا مودرن للبيع", 2_500_000, Category::RealEstate, "الرياض، حي النرجس", "house1.jpg"),
        listing("2", "تويوتا لاندكروزر 2024", 340_000, Category::Cars, "جدة، حي الروضة", "car1.jpg"),
        listing("3", "رافعات شوكية كوماتسو", 85_000, Category::HeavyEquipment, "الدمام، المنطقة الصناعية", "truck1.jpg"),
        listing("4", "مصنع بلاستيك متكامل", 12_000_000, Category::Factories, "الجبيل", "factory1.jpg"),
        listing("5", "شقة فاخرة للإيجار", 45_000, Category::RealEstate, "الخبر", "apt1.jpg"),
        listing("6", "مرسيدس G63 AMG", 980_000, Category::Cars, "الرياض", "car2.jpg"),
    ]
}
