pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get_count;
        pub mod get_items;
        pub mod get_summary;
        pub mod get_total;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod product {
        pub mod get_listing;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        #[cfg(test)]
        pub mod fake_repository;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get_count;
            pub mod get_items;
            pub mod get_summary;
            pub mod get_total;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod listing;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_listing;
        }
    }
}
