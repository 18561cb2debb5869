use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use crate::domain::cart::model::NewLineItemProps;
use crate::domain::shared::value_objects::{Cost, Price};

/// A product descriptor as the catalog lists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub image: String,
    pub description: String,
    pub cost: Cost,
    pub category: String,
}

pub struct NewProductProps {
    pub name: String,
    pub image: String,
    pub description: String,
    pub cost: Cost,
    pub category: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.category.trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }

        Ok(Self {
            name: props.name,
            image: props.image,
            description: props.description,
            cost: props.cost,
            category: props.category,
        })
    }

    pub fn price(&self) -> Price {
        self.cost.normalized()
    }

    /// The fields a cart line copies when this product is added.
    pub fn to_line_item_props(&self) -> NewLineItemProps {
        NewLineItemProps {
            name: self.name.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
            cost: self.cost.clone(),
        }
    }
}
