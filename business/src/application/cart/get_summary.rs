use std::sync::Arc;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_summary::GetCartSummaryUseCase;
use crate::domain::logger::Logger;

pub struct GetCartSummaryUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetCartSummaryUseCase for GetCartSummaryUseCaseImpl {
    fn execute(&self) -> Result<CartSummary, CartError> {
        let summary = self.repository.get()?.summary();
        self.logger.debug(&format!(
            "Cart summary: {} lines, {} units, {}",
            summary.items.len(),
            summary.count,
            summary.total
        ));
        Ok(summary)
    }
}
