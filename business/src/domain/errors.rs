/// Failures of a storage adapter, shared by every area of the domain.
///
/// Messages are i18n codes; the presentation layer forwards them untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    /// The store could not be read or written, e.g. a poisoned lock.
    #[error("repository.persistence")]
    Persistence,
}
