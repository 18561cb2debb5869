use std::sync::Arc;

use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::listing::{CategorySection, build_listing};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_listing::{
    GetProductListingParams, GetProductListingUseCase,
};

pub struct GetProductListingUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl GetProductListingUseCase for GetProductListingUseCaseImpl {
    fn execute(
        &self,
        params: GetProductListingParams,
    ) -> Result<Vec<CategorySection>, ProductError> {
        match &params.category {
            Some(category) => self
                .logger
                .info(&format!("Building product listing for {}", category)),
            None => self.logger.info("Building product listing"),
        }

        let products = self.repository.get_all()?;
        let cart = self.cart_repository.get()?;
        let sections = build_listing(products, &cart, params.category.as_deref());

        self.logger
            .info(&format!("Listing has {} categories", sections.len()));
        Ok(sections)
    }
}
