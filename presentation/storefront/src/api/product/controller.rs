use std::sync::Arc;

use business::domain::product::use_cases::get_listing::{
    GetProductListingParams, GetProductListingUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CategorySectionResponse, ProductListingRequest};

pub struct ProductController {
    get_listing_use_case: Arc<dyn GetProductListingUseCase>,
}

impl ProductController {
    pub fn new(get_listing_use_case: Arc<dyn GetProductListingUseCase>) -> Self {
        Self {
            get_listing_use_case,
        }
    }

    /// Product listing
    ///
    /// Catalog grouped by category, each product flagged when already in the cart.
    pub fn listing(
        &self,
        request: ProductListingRequest,
    ) -> Result<Vec<CategorySectionResponse>, ErrorResponse> {
        let params = GetProductListingParams {
            category: request.category,
        };

        self.get_listing_use_case
            .execute(params)
            .map(|sections| sections.into_iter().map(Into::into).collect())
            .map_err(IntoErrorResponse::into_error_response)
    }
}
