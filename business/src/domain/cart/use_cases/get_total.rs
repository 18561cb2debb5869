use crate::domain::cart::errors::CartError;
use crate::domain::shared::value_objects::Price;

pub trait GetCartTotalUseCase: Send + Sync {
    fn execute(&self) -> Result<Price, CartError>;
}
