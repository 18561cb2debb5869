use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Holds the cart of the current session.
///
/// Reads get a snapshot. Changes run inside [`CartRepository::update`] so two
/// mutations never interleave.
pub trait CartRepository: Send + Sync {
    fn get(&self) -> Result<Cart, RepositoryError>;

    /// Runs `change` against the stored cart while holding it exclusively.
    fn update(&self, change: &mut dyn FnMut(&mut Cart)) -> Result<(), RepositoryError>;
}

impl dyn CartRepository + '_ {
    /// Applies one cart operation atomically and hands back its result.
    pub fn modify<R>(&self, change: impl FnOnce(&mut Cart) -> R) -> Result<R, RepositoryError> {
        let mut change = Some(change);
        let mut outcome = None;

        self.update(&mut |cart| {
            if let Some(change) = change.take() {
                outcome = Some(change(cart));
            }
        })?;

        // An adapter that returns Ok without running the change lost it.
        outcome.ok_or(RepositoryError::Persistence)
    }
}
