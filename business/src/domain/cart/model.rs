use serde::{Deserialize, Serialize};

use super::errors::CartError;
use super::value_objects::RequestedQuantity;
use crate::domain::shared::value_objects::{Cost, Price};

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub name: String,
    pub image: String,
    pub description: String,
    pub cost: Cost,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn unit_price(&self) -> Price {
        self.cost.normalized()
    }

    /// `quantity × unit price` for this line.
    pub fn subtotal(&self) -> Price {
        self.unit_price().times(self.quantity)
    }
}

/// Display fields copied into a new line item.
#[derive(Debug, Clone, Default)]
pub struct NewLineItemProps {
    pub name: String,
    pub image: String,
    pub description: String,
    pub cost: Cost,
}

/// Outcome of setting a line's quantity.
#[derive(Debug, Clone, PartialEq)]
pub enum QuantityChange {
    Set(CartLineItem),
    Removed(CartLineItem),
    NotInCart,
}

/// Items, unit count and total read from one cart state.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub items: Vec<CartLineItem>,
    pub count: u64,
    pub total: Price,
}

/// Ordered line items, unique by name, each with a quantity of at least 1.
///
/// The item sequence is private; every change goes through the methods below
/// so the invariants cannot be bypassed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a product.
    ///
    /// A name already in the cart only gains a unit; its display fields keep
    /// the values from the first add.
    pub fn add_item(&mut self, props: NewLineItemProps) -> Result<&CartLineItem, CartError> {
        if props.name.trim().is_empty() {
            return Err(CartError::NameEmpty);
        }

        let index = match self.position(&props.name) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
                index
            }
            None => {
                self.items.push(CartLineItem {
                    name: props.name,
                    image: props.image,
                    description: props.description,
                    cost: props.cost,
                    quantity: 1,
                });
                self.items.len() - 1
            }
        };

        Ok(&self.items[index])
    }

    /// Removes the line named `name`, if there is one.
    pub fn remove_item(&mut self, name: &str) -> Option<CartLineItem> {
        self.position(name).map(|index| self.items.remove(index))
    }

    /// Sets an absolute quantity. Zero removes the line.
    pub fn update_quantity(&mut self, name: &str, amount: RequestedQuantity) -> QuantityChange {
        let Some(index) = self.position(name) else {
            return QuantityChange::NotInCart;
        };

        if amount.is_zero() {
            return QuantityChange::Removed(self.items.remove(index));
        }

        let item = &mut self.items[index];
        item.quantity = amount.value();
        QuantityChange::Set(item.clone())
    }

    /// Empties the cart and returns how many lines were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn find(&self, name: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across every line.
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of every line subtotal.
    pub fn total(&self) -> Price {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.items.clone(),
            count: self.count(),
            total: self.total(),
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn props(name: &str, cost: impl Into<Cost>) -> NewLineItemProps {
        NewLineItemProps {
            name: name.to_string(),
            image: format!("https://cdn.example.com/{name}.jpg"),
            description: format!("{name} description"),
            cost: cost.into(),
        }
    }

    fn cart_with(name: &str, cost: impl Into<Cost>, quantity: i64) -> Cart {
        let mut cart = Cart::new();
        cart.add_item(props(name, cost)).unwrap();
        cart.update_quantity(name, RequestedQuantity::new(quantity));
        cart
    }

    #[test]
    fn should_append_new_item_with_quantity_one() {
        let mut cart = Cart::new();

        let item = cart.add_item(props("Snake Plant", "$15")).unwrap();

        assert_eq!(item.quantity, 1);
        assert_eq!(item.cost, Cost::from("$15"));
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn should_increment_existing_item_and_keep_first_display_fields() {
        let mut cart = Cart::new();
        cart.add_item(props("Aloe Vera", "$14")).unwrap();

        let second = NewLineItemProps {
            name: "Aloe Vera".to_string(),
            image: "other.jpg".to_string(),
            description: "changed".to_string(),
            cost: Cost::from(99.0),
        };
        let item = cart.add_item(second).unwrap().clone();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.cost, Cost::from("$14"));
        assert_eq!(item.description, "Aloe Vera description");
        assert_eq!(item.image, "https://cdn.example.com/Aloe Vera.jpg");
    }

    #[test]
    fn should_reject_item_without_name() {
        let mut cart = Cart::new();

        let result = cart.add_item(props("   ", 10.0));

        assert!(matches!(result, Err(CartError::NameEmpty)));
        assert!(cart.is_empty());
    }

    #[test]
    fn should_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(props("Fern", 5.0)).unwrap();
        cart.add_item(props("Ivy", 6.0)).unwrap();
        cart.add_item(props("Fern", 5.0)).unwrap();

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Fern", "Ivy"]);
    }

    #[test]
    fn should_remove_item_and_be_idempotent() {
        let mut cart = cart_with("X", 1.0, 1);

        assert!(cart.remove_item("X").is_some());
        assert!(cart.remove_item("X").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn should_remove_item_when_quantity_set_to_zero() {
        let mut cart = cart_with("X", 1.0, 2);

        let change = cart.update_quantity("X", RequestedQuantity::new(0));

        assert!(matches!(change, QuantityChange::Removed(ref item) if item.name == "X"));
        assert!(!cart.contains("X"));
    }

    #[test]
    fn should_remove_item_when_quantity_negative() {
        let mut cart = cart_with("X", 1.0, 2);

        cart.update_quantity("X", RequestedQuantity::new(-5));

        assert!(cart.is_empty());
    }

    #[test]
    fn should_set_absolute_quantity() {
        let mut cart = cart_with("X", 1.0, 4);

        let change = cart.update_quantity("X", RequestedQuantity::new(3));

        assert!(matches!(change, QuantityChange::Set(ref item) if item.quantity == 3));
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn should_ignore_quantity_update_for_absent_item() {
        let mut cart = cart_with("Y", 1.0, 1);
        let before = cart.clone();

        let change = cart.update_quantity("X", RequestedQuantity::new(3));

        assert_eq!(change, QuantityChange::NotInCart);
        assert_eq!(cart, before);
    }

    #[test]
    fn should_total_string_cost() {
        assert_eq!(cart_with("X", "$15.00", 2).total().amount(), 30.0);
    }

    #[test]
    fn should_total_numeric_cost() {
        assert_eq!(cart_with("X", 15.0, 2).total().amount(), 30.0);
    }

    #[test]
    fn should_total_unreadable_cost_as_zero() {
        assert_eq!(cart_with("X", "free", 1).total().amount(), 0.0);
    }

    #[test]
    fn should_compute_line_subtotal() {
        let cart = cart_with("Lavender", "$20", 3);

        let item = cart.find("Lavender").unwrap();

        assert_eq!(item.unit_price(), Price::new(20.0));
        assert_eq!(item.subtotal(), Price::new(60.0));
    }

    #[test]
    fn should_clear_every_line() {
        let mut cart = cart_with("X", 1.0, 2);
        cart.add_item(props("Y", 2.0)).unwrap();

        assert_eq!(cart.clear(), 2);
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn should_summarize_items_count_and_total() {
        let mut cart = cart_with("X", "$2.50", 2);
        cart.add_item(props("Y", 1.0)).unwrap();

        let summary = cart.summary();

        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total, Price::new(6.0));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(String),
        Remove(String),
        Update(String, i64),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        let name = prop::sample::select(vec!["Aloe", "Fern", "Ivy", "Moss"]).prop_map(String::from);
        prop_oneof![
            4 => name.clone().prop_map(Op::Add),
            2 => name.clone().prop_map(Op::Remove),
            3 => (name, -3i64..6).prop_map(|(n, a)| Op::Update(n, a)),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn should_count_one_per_distinct_add(names in prop::collection::hash_set("[a-z]{1,8}", 0..20)) {
            let mut cart = Cart::new();
            for name in &names {
                cart.add_item(props(name, 1.0)).unwrap();
            }

            prop_assert_eq!(cart.count(), names.len() as u64);
            prop_assert_eq!(cart.items().len(), names.len());
            prop_assert!(cart.items().iter().all(|item| item.quantity == 1));
        }

        #[test]
        fn should_never_hold_duplicates_or_empty_lines(ops in prop::collection::vec(op(), 0..60)) {
            let mut cart = Cart::new();
            for op in ops {
                match op {
                    Op::Add(name) => { cart.add_item(props(&name, 2.0)).unwrap(); }
                    Op::Remove(name) => { cart.remove_item(&name); }
                    Op::Update(name, amount) => { cart.update_quantity(&name, RequestedQuantity::new(amount)); }
                    Op::Clear => { cart.clear(); }
                }
            }

            let names: HashSet<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
            prop_assert_eq!(names.len(), cart.items().len());
            prop_assert!(cart.items().iter().all(|item| item.quantity >= 1));
            prop_assert_eq!(cart.total().amount(), cart.count() as f64 * 2.0);
        }
    }
}
