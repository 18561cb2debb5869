use crate::domain::cart::errors::CartError;

pub trait GetCartCountUseCase: Send + Sync {
    fn execute(&self) -> Result<u64, CartError>;
}
