use std::sync::Arc;

use business::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get_count::GetCartCountUseCase;
use business::domain::cart::use_cases::get_items::GetCartItemsUseCase;
use business::domain::cart::use_cases::get_summary::GetCartSummaryUseCase;
use business::domain::cart::use_cases::get_total::GetCartTotalUseCase;
use business::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};

use crate::api::cart::dto::{
    AddItemRequest, CartCountResponse, CartItemResponse, CartSummaryResponse, CartTotalResponse,
    ClearCartResponse, RemoveItemRequest, RemoveItemResponse, UpdateQuantityRequest,
    UpdateQuantityResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};

/// Cart operations as the UI calls them.
///
/// The only way to change the session cart: every mutation goes through one
/// of the use cases held here.
pub struct CartController {
    add_item_use_case: Arc<dyn AddItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    get_items_use_case: Arc<dyn GetCartItemsUseCase>,
    get_count_use_case: Arc<dyn GetCartCountUseCase>,
    get_total_use_case: Arc<dyn GetCartTotalUseCase>,
    get_summary_use_case: Arc<dyn GetCartSummaryUseCase>,
}

impl CartController {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        add_item_use_case: Arc<dyn AddItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        get_items_use_case: Arc<dyn GetCartItemsUseCase>,
        get_count_use_case: Arc<dyn GetCartCountUseCase>,
        get_total_use_case: Arc<dyn GetCartTotalUseCase>,
        get_summary_use_case: Arc<dyn GetCartSummaryUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            remove_item_use_case,
            update_quantity_use_case,
            clear_use_case,
            get_items_use_case,
            get_count_use_case,
            get_total_use_case,
            get_summary_use_case,
        }
    }

    /// Add one unit of a product
    pub fn add_item(&self, request: AddItemRequest) -> Result<CartItemResponse, ErrorResponse> {
        let params = AddItemParams {
            name: request.name,
            image: request.image,
            description: request.description,
            cost: request.cost,
        };

        self.add_item_use_case
            .execute(params)
            .map(Into::into)
            .map_err(IntoErrorResponse::into_error_response)
    }

    /// Remove a line
    ///
    /// A payload without a usable name removes nothing.
    pub fn remove_item(
        &self,
        request: RemoveItemRequest,
    ) -> Result<RemoveItemResponse, ErrorResponse> {
        let Some(name) = request.into_name() else {
            tracing::debug!("Cart removal payload carried no name");
            return Ok(RemoveItemResponse { removed: None });
        };

        self.remove_item_use_case
            .execute(RemoveItemParams { name })
            .map(|removed| RemoveItemResponse {
                removed: removed.map(Into::into),
            })
            .map_err(IntoErrorResponse::into_error_response)
    }

    /// Set a line's quantity; 0 or less removes it
    pub fn update_quantity(
        &self,
        request: UpdateQuantityRequest,
    ) -> Result<UpdateQuantityResponse, ErrorResponse> {
        let params = UpdateQuantityParams {
            name: request.name,
            amount: request.amount,
        };

        self.update_quantity_use_case
            .execute(params)
            .map(Into::into)
            .map_err(IntoErrorResponse::into_error_response)
    }

    pub fn clear(&self) -> Result<ClearCartResponse, ErrorResponse> {
        self.clear_use_case
            .execute()
            .map(|count| ClearCartResponse { count })
            .map_err(IntoErrorResponse::into_error_response)
    }

    pub fn items(&self) -> Result<Vec<CartItemResponse>, ErrorResponse> {
        self.get_items_use_case
            .execute()
            .map(|items| items.into_iter().map(Into::into).collect())
            .map_err(IntoErrorResponse::into_error_response)
    }

    /// Badge count: units across all lines
    pub fn count(&self) -> Result<CartCountResponse, ErrorResponse> {
        self.get_count_use_case
            .execute()
            .map(|count| CartCountResponse { count })
            .map_err(IntoErrorResponse::into_error_response)
    }

    pub fn total(&self) -> Result<CartTotalResponse, ErrorResponse> {
        self.get_total_use_case
            .execute()
            .map(Into::into)
            .map_err(IntoErrorResponse::into_error_response)
    }

    pub fn summary(&self) -> Result<CartSummaryResponse, ErrorResponse> {
        self.get_summary_use_case
            .execute()
            .map(Into::into)
            .map_err(IntoErrorResponse::into_error_response)
    }
}
