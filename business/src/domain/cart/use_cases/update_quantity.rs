use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::QuantityChange;
use crate::domain::cart::value_objects::RequestedQuantity;

pub struct UpdateQuantityParams {
    pub name: String,
    pub amount: RequestedQuantity,
}

pub trait UpdateQuantityUseCase: Send + Sync {
    fn execute(&self, params: UpdateQuantityParams) -> Result<QuantityChange, CartError>;
}
