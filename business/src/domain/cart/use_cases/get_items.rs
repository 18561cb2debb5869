use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLineItem;

pub trait GetCartItemsUseCase: Send + Sync {
    fn execute(&self) -> Result<Vec<CartLineItem>, CartError>;
}
