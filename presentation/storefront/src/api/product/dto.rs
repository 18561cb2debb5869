use serde::{Deserialize, Serialize};

use business::domain::product::listing::{CategorySection, ListedProduct};
use business::domain::shared::value_objects::Cost;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListingRequest {
    /// Restrict the listing to this category
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedProductResponse {
    pub name: String,
    pub image: String,
    pub description: String,
    pub cost: Cost,
    /// Formatted price
    pub price: String,
    /// Already in the cart; the UI disables "Add to Cart"
    pub in_cart: bool,
}

impl From<ListedProduct> for ListedProductResponse {
    fn from(listed: ListedProduct) -> Self {
        let product = listed.product;
        Self {
            price: product.price().to_string(),
            name: product.name,
            image: product.image,
            description: product.description,
            cost: product.cost,
            in_cart: listed.in_cart,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySectionResponse {
    pub category: String,
    pub products: Vec<ListedProductResponse>,
}

impl From<CategorySection> for CategorySectionResponse {
    fn from(section: CategorySection) -> Self {
        Self {
            category: section.category,
            products: section.products.into_iter().map(Into::into).collect(),
        }
    }
}
