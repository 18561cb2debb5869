use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::errors::RepositoryError;

use super::model::{Cart, NewLineItemProps};
use super::repository::CartRepository;

/// Cart store for use-case tests: a mutex-held cart that counts updates and
/// can be switched to fail every call.
pub struct FakeCartRepository {
    cart: Mutex<Cart>,
    failing: bool,
    updates: AtomicUsize,
}

impl FakeCartRepository {
    pub fn new() -> Self {
        Self::holding(Cart::new())
    }

    pub fn holding(cart: Cart) -> Self {
        Self {
            cart: Mutex::new(cart),
            failing: false,
            updates: AtomicUsize::new(0),
        }
    }

    /// A cart with one unit of each named product.
    pub fn with_items(names: &[&str]) -> Self {
        let mut cart = Cart::new();
        for name in names {
            cart.add_item(NewLineItemProps {
                name: name.to_string(),
                ..Default::default()
            })
            .unwrap();
        }
        Self::holding(cart)
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn cart(&self) -> Cart {
        self.cart.lock().unwrap().clone()
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl CartRepository for FakeCartRepository {
    fn get(&self) -> Result<Cart, RepositoryError> {
        if self.failing {
            return Err(RepositoryError::Persistence);
        }
        Ok(self.cart())
    }

    fn update(&self, change: &mut dyn FnMut(&mut Cart)) -> Result<(), RepositoryError> {
        if self.failing {
            return Err(RepositoryError::Persistence);
        }
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut cart = self.cart.lock().unwrap();
        change(&mut *cart);
        Ok(())
    }
}
