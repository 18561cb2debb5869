use crate::domain::product::errors::ProductError;
use crate::domain::product::listing::CategorySection;

#[derive(Default)]
pub struct GetProductListingParams {
    /// Only list this category when set.
    pub category: Option<String>,
}

pub trait GetProductListingUseCase: Send + Sync {
    fn execute(
        &self,
        params: GetProductListingParams,
    ) -> Result<Vec<CategorySection>, ProductError>;
}
