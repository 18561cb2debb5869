use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> ErrorResponse {
        match &self {
            ProductError::NameEmpty => ErrorResponse::new("ValidationError", "product.name_empty"),
            ProductError::CategoryEmpty => {
                ErrorResponse::new("ValidationError", "product.category_empty")
            }
            ProductError::Repository(_) => {
                tracing::error!(error = ?self, "Product catalog failure");
                ErrorResponse::new("InternalError", "repository.persistence")
            }
        }
    }
}
