use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLineItem;

pub struct RemoveItemParams {
    pub name: String,
}

pub trait RemoveItemUseCase: Send + Sync {
    /// Returns the removed line, or `None` when nothing matched.
    fn execute(&self, params: RemoveItemParams) -> Result<Option<CartLineItem>, CartError>;
}
