//! Storefront boundary for UI collaborators.
//!
//! - config/: Environment configuration (logging, catalog)
//! - setup/: Dependency injection and bootstrap
//! - api/: Controllers, DTOs and error mapping for the cart and the product listing

pub mod api {
    pub mod error;
    pub mod cart {
        pub mod actions;
        pub mod controller;
        pub mod dto;
        pub mod error_mapper;
    }
    pub mod product {
        pub mod controller;
        pub mod dto;
        pub mod error_mapper;
    }
}

pub mod config {
    pub mod app_config;
    pub mod catalog_config;
    pub mod logging_config;
}

pub mod setup {
    pub mod bootstrap;
    pub mod dependency_injection;
}
