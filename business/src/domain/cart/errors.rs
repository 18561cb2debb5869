#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.name_empty")]
    NameEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
