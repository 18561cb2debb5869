use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLineItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_items::GetCartItemsUseCase;
use crate::domain::logger::Logger;

pub struct GetCartItemsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetCartItemsUseCase for GetCartItemsUseCaseImpl {
    fn execute(&self) -> Result<Vec<CartLineItem>, CartError> {
        self.logger.debug("Fetching cart items");
        let cart = self.repository.get()?;
        Ok(cart.items().to_vec())
    }
}
