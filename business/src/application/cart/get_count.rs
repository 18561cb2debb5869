use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_count::GetCartCountUseCase;
use crate::domain::logger::Logger;

pub struct GetCartCountUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetCartCountUseCase for GetCartCountUseCaseImpl {
    fn execute(&self) -> Result<u64, CartError> {
        let count = self.repository.get()?.count();
        self.logger.debug(&format!("Cart holds {} units", count));
        Ok(count)
    }
}
