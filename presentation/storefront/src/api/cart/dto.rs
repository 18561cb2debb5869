use serde::{Deserialize, Serialize};

use business::domain::cart::model::{CartLineItem, CartSummary, QuantityChange};
use business::domain::cart::value_objects::RequestedQuantity;
use business::domain::shared::value_objects::{Cost, Price};

#[derive(Debug, Clone, Deserialize)]
pub struct AddItemRequest {
    /// Product name, the line's key in the cart
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    /// Number or currency string, kept as sent
    #[serde(default)]
    pub cost: Cost,
}

/// Removal payload: a bare name or any object carrying `name`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RemoveItemRequest {
    Name(String),
    Item {
        #[serde(default)]
        name: Option<String>,
    },
    Missing,
}

impl RemoveItemRequest {
    /// The target name, if the payload carried a usable one.
    pub fn into_name(self) -> Option<String> {
        let name = match self {
            RemoveItemRequest::Name(name) => Some(name),
            RemoveItemRequest::Item { name } => name,
            RemoveItemRequest::Missing => None,
        };
        name.filter(|n| !n.trim().is_empty())
    }
}

impl From<&str> for RemoveItemRequest {
    fn from(name: &str) -> Self {
        RemoveItemRequest::Name(name.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuantityRequest {
    pub name: String,
    /// Number or numeric string; missing, unreadable or negative values mean 0
    #[serde(default)]
    pub amount: RequestedQuantity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItemResponse {
    pub name: String,
    pub image: String,
    pub description: String,
    /// Cost exactly as the catalog sent it
    pub cost: Cost,
    pub quantity: u32,
    /// Formatted unit price
    pub unit_price: String,
    /// Formatted `quantity × unit price`
    pub subtotal: String,
}

impl From<CartLineItem> for CartItemResponse {
    fn from(item: CartLineItem) -> Self {
        Self {
            unit_price: item.unit_price().to_string(),
            subtotal: item.subtotal().to_string(),
            name: item.name,
            image: item.image,
            description: item.description,
            cost: item.cost,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoveItemResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<CartItemResponse>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityOutcome {
    Set,
    Removed,
    NotInCart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateQuantityResponse {
    pub outcome: QuantityOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<CartItemResponse>,
}

impl From<QuantityChange> for UpdateQuantityResponse {
    fn from(change: QuantityChange) -> Self {
        match change {
            QuantityChange::Set(item) => Self {
                outcome: QuantityOutcome::Set,
                item: Some(item.into()),
            },
            QuantityChange::Removed(item) => Self {
                outcome: QuantityOutcome::Removed,
                item: Some(item.into()),
            },
            QuantityChange::NotInCart => Self {
                outcome: QuantityOutcome::NotInCart,
                item: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartCountResponse {
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartTotalResponse {
    pub total: f64,
    pub formatted: String,
}

impl From<Price> for CartTotalResponse {
    fn from(total: Price) -> Self {
        Self {
            total: total.amount(),
            formatted: total.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClearCartResponse {
    /// Number of lines removed
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummaryResponse {
    pub items: Vec<CartItemResponse>,
    pub count: u64,
    pub total: CartTotalResponse,
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            items: summary.items.into_iter().map(Into::into).collect(),
            count: summary.count,
            total: summary.total.into(),
        }
    }
}
