use serde::Deserialize;

use crate::api::cart::controller::CartController;
use crate::api::cart::dto::{
    AddItemRequest, CartSummaryResponse, RemoveItemRequest, UpdateQuantityRequest,
};
use crate::api::error::ErrorResponse;

/// A cart action as the UI store emits it: `{ "type": "cart/addItem", "payload": ... }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum CartAction {
    #[serde(rename = "cart/addItem")]
    AddItem(AddItemRequest),
    #[serde(rename = "cart/removeItem")]
    RemoveItem(RemoveItemRequest),
    #[serde(rename = "cart/updateQuantity")]
    UpdateQuantity(UpdateQuantityRequest),
    #[serde(rename = "cart/clear")]
    Clear,
}

impl CartController {
    /// Applies one action and returns the cart as it stands afterwards.
    pub fn apply(&self, action: CartAction) -> Result<CartSummaryResponse, ErrorResponse> {
        match action {
            CartAction::AddItem(request) => {
                self.add_item(request)?;
            }
            CartAction::RemoveItem(request) => {
                self.remove_item(request)?;
            }
            CartAction::UpdateQuantity(request) => {
                self.update_quantity(request)?;
            }
            CartAction::Clear => {
                self.clear()?;
            }
        }

        self.summary()
    }

    /// Parses a JSON action and applies it.
    pub fn dispatch(&self, json: &str) -> Result<CartSummaryResponse, ErrorResponse> {
        let action: CartAction = serde_json::from_str(json).map_err(|error| {
            tracing::warn!(%error, "Rejected malformed cart action");
            ErrorResponse::new("ValidationError", "action.invalid")
        })?;

        tracing::debug!(?action, "Dispatching cart action");
        self.apply(action)
    }
}

#[cfg(test)]
mod tests {
    use memory::product::repository::InMemoryProductRepository;

    use crate::api::cart::controller::CartController;
    use crate::setup::dependency_injection::DependencyContainer;

    fn controller() -> CartController {
        DependencyContainer::new(InMemoryProductRepository::default()).cart_controller
    }

    const ADD_SNAKE_PLANT: &str = r#"{
        "type": "cart/addItem",
        "payload": { "name": "Snake Plant", "image": "snake.jpg", "description": "Hardy", "cost": "$15" }
    }"#;

    #[test]
    fn should_add_item_from_action() {
        let cart = controller();

        let summary = cart.dispatch(ADD_SNAKE_PLANT).unwrap();

        assert_eq!(summary.count, 1);
        assert_eq!(summary.items[0].name, "Snake Plant");
        assert_eq!(summary.total.formatted, "$15.00");
    }

    #[test]
    fn should_accept_bare_name_and_object_removal_payloads() {
        let cart = controller();
        cart.dispatch(ADD_SNAKE_PLANT).unwrap();

        let summary = cart
            .dispatch(r#"{ "type": "cart/removeItem", "payload": "Snake Plant" }"#)
            .unwrap();
        assert_eq!(summary.count, 0);

        cart.dispatch(ADD_SNAKE_PLANT).unwrap();
        let summary = cart
            .dispatch(r#"{ "type": "cart/removeItem", "payload": { "name": "Snake Plant" } }"#)
            .unwrap();
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn should_ignore_removal_payload_without_name() {
        let cart = controller();
        cart.dispatch(ADD_SNAKE_PLANT).unwrap();

        let summary = cart
            .dispatch(r#"{ "type": "cart/removeItem", "payload": { "action": "Snake Plant" } }"#)
            .unwrap();

        assert_eq!(summary.count, 1);
    }

    #[test]
    fn should_update_quantity_from_string_amount() {
        let cart = controller();
        cart.dispatch(ADD_SNAKE_PLANT).unwrap();

        let summary = cart
            .dispatch(r#"{ "type": "cart/updateQuantity", "payload": { "name": "Snake Plant", "amount": "4" } }"#)
            .unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.total.total, 60.0);
    }

    #[test]
    fn should_remove_item_when_amount_unreadable() {
        let cart = controller();
        cart.dispatch(ADD_SNAKE_PLANT).unwrap();

        let summary = cart
            .dispatch(r#"{ "type": "cart/updateQuantity", "payload": { "name": "Snake Plant", "amount": "many" } }"#)
            .unwrap();

        assert!(summary.items.is_empty());
    }

    #[test]
    fn should_remove_item_when_amount_is_infinity_text() {
        let cart = controller();
        cart.dispatch(ADD_SNAKE_PLANT).unwrap();

        let summary = cart
            .dispatch(r#"{ "type": "cart/updateQuantity", "payload": { "name": "Snake Plant", "amount": "inf" } }"#)
            .unwrap();

        assert!(summary.items.is_empty());
        assert_eq!(summary.total.formatted, "$0.00");
    }

    #[test]
    fn should_remove_item_when_amount_missing() {
        let cart = controller();
        cart.dispatch(ADD_SNAKE_PLANT).unwrap();

        let summary = cart
            .dispatch(r#"{ "type": "cart/updateQuantity", "payload": { "name": "Snake Plant" } }"#)
            .unwrap();

        assert!(summary.items.is_empty());
    }

    #[test]
    fn should_keep_every_add_from_parallel_dispatches() {
        let cart = controller();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..250 {
                        cart.dispatch(ADD_SNAKE_PLANT).unwrap();
                    }
                });
            }
        });

        assert_eq!(cart.count().unwrap().count, 2000);
    }

    #[test]
    fn should_clear_without_payload() {
        let cart = controller();
        cart.dispatch(ADD_SNAKE_PLANT).unwrap();

        let summary = cart.dispatch(r#"{ "type": "cart/clear" }"#).unwrap();

        assert!(summary.items.is_empty());
    }

    #[test]
    fn should_match_direct_controller_call() {
        let dispatched = controller();
        let direct = controller();

        dispatched.dispatch(ADD_SNAKE_PLANT).unwrap();
        direct
            .add_item(crate::api::cart::dto::AddItemRequest {
                name: "Snake Plant".to_string(),
                image: "snake.jpg".to_string(),
                description: "Hardy".to_string(),
                cost: "$15".into(),
            })
            .unwrap();

        assert_eq!(dispatched.summary().unwrap(), direct.summary().unwrap());
    }

    #[test]
    fn should_reject_unknown_action_type() {
        let cart = controller();

        let error = cart
            .dispatch(r#"{ "type": "cart/checkout", "payload": {} }"#)
            .unwrap_err();

        assert_eq!(error.name, "ValidationError");
        assert_eq!(error.message, "action.invalid");
    }

    #[test]
    fn should_surface_validation_error_from_action() {
        let cart = controller();

        let error = cart
            .dispatch(r#"{ "type": "cart/addItem", "payload": { "cost": 3 } }"#)
            .unwrap_err();

        assert_eq!(error.message, "cart.name_empty");
    }
}
