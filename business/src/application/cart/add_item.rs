use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartLineItem, NewLineItemProps};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase};
use crate::domain::logger::Logger;

pub struct AddItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl AddItemUseCase for AddItemUseCaseImpl {
    fn execute(&self, params: AddItemParams) -> Result<CartLineItem, CartError> {
        if params.name.trim().is_empty() {
            self.logger.warn("Rejected cart item without a name");
            return Err(CartError::NameEmpty);
        }

        self.logger
            .info(&format!("Adding item to cart: {}", params.name));

        if params.cost.degrades_to_zero() {
            self.logger.warn(&format!(
                "Cost {:?} of {} has no readable amount, pricing it at 0",
                params.cost, params.name
            ));
        }

        let props = NewLineItemProps {
            name: params.name,
            image: params.image,
            description: params.description,
            cost: params.cost,
        };
        let item = self
            .repository
            .modify(|cart| cart.add_item(props).cloned())??;

        self.logger.info(&format!(
            "Cart item {} now has quantity {}",
            item.name, item.quantity
        ));
        Ok(item)
    }
}
