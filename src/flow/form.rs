use crate::models::Category;

/// Fields of the "new listing" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub price: Option<u64>,
    pub category: Category,
    pub description: String,
}

impl ListingForm {
    /// Categories the form's section picker offers
    pub fn category_choices() -> &'static [Category] {
        Category::listable()
    }
}
