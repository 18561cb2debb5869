use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLineItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveItemUseCase for RemoveItemUseCaseImpl {
    fn execute(&self, params: RemoveItemParams) -> Result<Option<CartLineItem>, CartError> {
        if params.name.trim().is_empty() {
            self.logger.debug("Ignoring cart removal without a name");
            return Ok(None);
        }

        self.logger
            .info(&format!("Removing item from cart: {}", params.name));

        let removed = self
            .repository
            .modify(|cart| cart.remove_item(&params.name))?;
        let Some(removed) = removed else {
            self.logger
                .debug(&format!("Item {} is not in the cart", params.name));
            return Ok(None);
        };

        self.logger.info(&format!(
            "Removed {} ({} units) from cart",
            removed.name, removed.quantity
        ));
        Ok(Some(removed))
    }
}
