use serde::Deserialize;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::shared::value_objects::Cost;

/// One category block of the catalog document.
#[derive(Debug, Deserialize)]
pub struct CatalogSectionEntity {
    pub category: String,
    #[serde(alias = "plants", default)]
    pub products: Vec<ProductEntity>,
}

#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cost: Cost,
}

impl CatalogSectionEntity {
    pub fn into_domain(self) -> Result<Vec<Product>, ProductError> {
        let category = self.category;
        self.products
            .into_iter()
            .map(|entity| entity.into_domain(category.clone()))
            .collect()
    }
}

impl ProductEntity {
    pub fn into_domain(self, category: String) -> Result<Product, ProductError> {
        Product::new(NewProductProps {
            name: self.name,
            image: self.image,
            description: self.description,
            cost: self.cost,
            category,
        })
    }
}
