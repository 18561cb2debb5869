use std::sync::Mutex;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

/// Cart of the running session. Starts empty and lives as long as the process.
///
/// Every change runs under the lock, so callers sharing the store never
/// overwrite each other's edits.
#[derive(Default)]
pub struct InMemoryCartRepository {
    cart: Mutex<Cart>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartRepository for InMemoryCartRepository {
    fn get(&self) -> Result<Cart, RepositoryError> {
        let cart = self
            .cart
            .lock()
            .map_err(|_| RepositoryError::Persistence)?;
        Ok(cart.clone())
    }

    fn update(&self, change: &mut dyn FnMut(&mut Cart)) -> Result<(), RepositoryError> {
        let mut cart = self
            .cart
            .lock()
            .map_err(|_| RepositoryError::Persistence)?;
        change(&mut *cart);
        Ok(())
    }
}
