use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl ClearCartUseCase for ClearCartUseCaseImpl {
    fn execute(&self) -> Result<usize, CartError> {
        self.logger.info("Clearing cart");

        let removed = self.repository.modify(Cart::clear)?;

        self.logger
            .info(&format!("Cleared {} cart items", removed));
        Ok(removed)
    }
}
