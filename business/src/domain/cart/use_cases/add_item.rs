use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLineItem;
use crate::domain::shared::value_objects::Cost;

pub struct AddItemParams {
    pub name: String,
    pub image: String,
    pub description: String,
    pub cost: Cost,
}

pub trait AddItemUseCase: Send + Sync {
    fn execute(&self, params: AddItemParams) -> Result<CartLineItem, CartError>;
}
