use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_total::GetCartTotalUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::Price;

pub struct GetCartTotalUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetCartTotalUseCase for GetCartTotalUseCaseImpl {
    fn execute(&self) -> Result<Price, CartError> {
        let total = self.repository.get()?.total();
        self.logger.debug(&format!("Cart total is {}", total));
        Ok(total)
    }
}
