use std::fs;
use std::path::Path;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::CatalogSectionEntity;
use crate::error::CatalogError;

/// Product catalog held in memory for the whole session.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parses a catalog document: a list of `{ "category", "products" }` blocks.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let sections: Vec<CatalogSectionEntity> =
            serde_json::from_str(json).map_err(CatalogError::ParseError)?;

        let mut products = Vec::new();
        for section in sections {
            products.extend(section.into_domain().map_err(CatalogError::InvalidProduct)?);
        }

        tracing::debug!(count = products.len(), "Loaded product catalog");
        Ok(Self::new(products))
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(CatalogError::ReadError)?;
        Self::from_json(&json)
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }
}
