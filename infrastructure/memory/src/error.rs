use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog.read_error")]
    ReadError(#[source] std::io::Error),
    #[error("catalog.parse_error")]
    ParseError(#[source] serde_json::Error),
    #[error("catalog.invalid_product")]
    InvalidProduct(#[source] business::domain::product::errors::ProductError),
}
