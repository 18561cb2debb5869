use crate::domain::cart::errors::CartError;

pub trait ClearCartUseCase: Send + Sync {
    fn execute(&self) -> Result<usize, CartError>;
}
