use std::sync::Arc;

use anyhow::Context;

use logger::TracingLogger;
use memory::cart::repository::InMemoryCartRepository;
use memory::product::repository::InMemoryProductRepository;

use business::application::cart::add_item::AddItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get_count::GetCartCountUseCaseImpl;
use business::application::cart::get_items::GetCartItemsUseCaseImpl;
use business::application::cart::get_summary::GetCartSummaryUseCaseImpl;
use business::application::cart::get_total::GetCartTotalUseCaseImpl;
use business::application::cart::remove_item::RemoveItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateQuantityUseCaseImpl;
use business::application::product::get_listing::GetProductListingUseCaseImpl;

use crate::api::cart::controller::CartController;
use crate::api::product::controller::ProductController;
use crate::config::catalog_config::CatalogConfig;

/// One session's wiring: a fresh empty cart shared by every controller.
pub struct DependencyContainer {
    pub cart_controller: CartController,
    pub product_controller: ProductController,
}

impl DependencyContainer {
    pub fn new(product_repository: InMemoryProductRepository) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let cart_repository = Arc::new(InMemoryCartRepository::new());
        let product_repository = Arc::new(product_repository);

        // Cart use cases
        let add_item_use_case = Arc::new(AddItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_items_use_case = Arc::new(GetCartItemsUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_count_use_case = Arc::new(GetCartCountUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_total_use_case = Arc::new(GetCartTotalUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let get_summary_use_case = Arc::new(GetCartSummaryUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });

        // Product use cases
        let get_listing_use_case = Arc::new(GetProductListingUseCaseImpl {
            repository: product_repository,
            cart_repository,
            logger,
        });

        let cart_controller = CartController::new(
            add_item_use_case,
            remove_item_use_case,
            update_quantity_use_case,
            clear_use_case,
            get_items_use_case,
            get_count_use_case,
            get_total_use_case,
            get_summary_use_case,
        );
        let product_controller = ProductController::new(get_listing_use_case);

        Self {
            cart_controller,
            product_controller,
        }
    }

    /// Loads the catalog named by the configuration; no path means an empty catalog.
    pub fn from_config(config: &CatalogConfig) -> anyhow::Result<Self> {
        let catalog = match &config.path {
            Some(path) => InMemoryProductRepository::from_path(path)
                .with_context(|| format!("loading catalog from {}", path.display()))?,
            None => {
                tracing::warn!("CATALOG_PATH not set, starting with an empty catalog");
                InMemoryProductRepository::default()
            }
        };

        Ok(Self::new(catalog))
    }
}
