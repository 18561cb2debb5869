use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::QuantityChange;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateQuantityUseCase for UpdateQuantityUseCaseImpl {
    fn execute(&self, params: UpdateQuantityParams) -> Result<QuantityChange, CartError> {
        self.logger.info(&format!(
            "Setting quantity of {} to {}",
            params.name,
            params.amount.value()
        ));

        let change = self
            .repository
            .modify(|cart| cart.update_quantity(&params.name, params.amount))?;

        match &change {
            QuantityChange::Set(item) => {
                self.logger
                    .info(&format!("Cart item {} now has quantity {}", item.name, item.quantity));
            }
            QuantityChange::Removed(item) => {
                self.logger
                    .info(&format!("Quantity reached 0, removed {} from cart", item.name));
            }
            QuantityChange::NotInCart => {
                self.logger
                    .debug(&format!("Item {} is not in the cart", params.name));
            }
        }

        Ok(change)
    }
}
