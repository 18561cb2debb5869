use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> ErrorResponse {
        match &self {
            CartError::NameEmpty => ErrorResponse::new("ValidationError", "cart.name_empty"),
            CartError::Repository(_) => {
                tracing::error!(error = ?self, "Cart store failure");
                ErrorResponse::new("InternalError", "repository.persistence")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_name_empty_to_validation_error() {
        let response = CartError::NameEmpty.into_error_response();

        assert_eq!(response, ErrorResponse::new("ValidationError", "cart.name_empty"));
    }

    #[test]
    fn should_map_repository_failure_to_internal_error() {
        let response = CartError::Repository(RepositoryError::Persistence).into_error_response();

        assert_eq!(response.name, "InternalError");
        assert_eq!(response.message, "repository.persistence");
    }
}
