use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;

pub trait GetCartSummaryUseCase: Send + Sync {
    fn execute(&self) -> Result<CartSummary, CartError>;
}
