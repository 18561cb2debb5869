use crate::domain::errors::RepositoryError;

use super::model::Product;

pub trait ProductRepository: Send + Sync {
    /// Every product, in catalog order.
    fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
