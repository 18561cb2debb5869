use crate::domain::cart::model::Cart;

use super::model::Product;

/// A catalog product as the listing shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedProduct {
    pub product: Product,
    /// Whether a line with this product's name is already in the cart.
    pub in_cart: bool,
}

/// Products of one category, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    pub category: String,
    pub products: Vec<ListedProduct>,
}

/// Groups products by category and flags the ones already in the cart.
///
/// Categories appear in the order their first product appears in the
/// catalog. With `only_category` set, every other category is dropped.
pub fn build_listing(
    products: Vec<Product>,
    cart: &Cart,
    only_category: Option<&str>,
) -> Vec<CategorySection> {
    let mut sections: Vec<CategorySection> = Vec::new();

    for product in products {
        if only_category.is_some_and(|category| category != product.category) {
            continue;
        }

        let listed = ListedProduct {
            in_cart: cart.contains(&product.name),
            product,
        };

        match sections
            .iter()
            .position(|section| section.category == listed.product.category)
        {
            Some(index) => sections[index].products.push(listed),
            None => sections.push(CategorySection {
                category: listed.product.category.clone(),
                products: vec![listed],
            }),
        }
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::Cost;

    fn product(name: &str, category: &str) -> Product {
        Product {
            name: name.to_string(),
            image: String::new(),
            description: String::new(),
            cost: Cost::from("$10"),
            category: category.to_string(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Snake Plant", "Air Purifying Plants"),
            product("Lavender", "Aromatic Fragrant Plants"),
            product("Spider Plant", "Air Purifying Plants"),
            product("Oregano", "Medicinal Plants"),
        ]
    }

    #[test]
    fn should_group_by_category_in_catalog_order() {
        let sections = build_listing(catalog(), &Cart::new(), None);

        let categories: Vec<&str> = sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                "Air Purifying Plants",
                "Aromatic Fragrant Plants",
                "Medicinal Plants"
            ]
        );

        let air: Vec<&str> = sections[0]
            .products
            .iter()
            .map(|p| p.product.name.as_str())
            .collect();
        assert_eq!(air, vec!["Snake Plant", "Spider Plant"]);
    }

    #[test]
    fn should_flag_products_already_in_cart() {
        let mut cart = Cart::new();
        cart.add_item(product("Lavender", "Aromatic Fragrant Plants").to_line_item_props())
            .unwrap();

        let sections = build_listing(catalog(), &cart, None);

        let flagged: Vec<&str> = sections
            .iter()
            .flat_map(|s| s.products.iter())
            .filter(|p| p.in_cart)
            .map(|p| p.product.name.as_str())
            .collect();
        assert_eq!(flagged, vec!["Lavender"]);
    }

    #[test]
    fn should_keep_only_requested_category() {
        let sections = build_listing(catalog(), &Cart::new(), Some("Medicinal Plants"));

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].products.len(), 1);
        assert_eq!(sections[0].products[0].product.name, "Oregano");
    }

    #[test]
    fn should_return_nothing_for_unknown_category() {
        assert!(build_listing(catalog(), &Cart::new(), Some("Cacti")).is_empty());
    }
}
