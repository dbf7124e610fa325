//! Filter engine: category, name search and active-only predicates.

use serde::{Deserialize, Serialize};

use crate::product::{Category, CategoryFilter, Product};

/// Current filter state of a catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilters {
    pub category: CategoryFilter,
    pub search_term: String,
    pub active_only: bool,
}

impl ProductFilters {
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only;
        self
    }

    /// True when every product passes.
    pub fn is_unfiltered(&self) -> bool {
        *self == ProductFilters::default()
    }

    /// Compile into a matcher (case-folds the search term once).
    pub fn matcher(&self) -> FilterMatcher {
        FilterMatcher {
            category: self.category,
            needle: self.search_term.to_lowercase(),
            active_only: self.active_only,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matcher().matches(product)
    }
}

/// Filters with the search term already lowercased.
#[derive(Debug, Clone)]
pub struct FilterMatcher {
    category: CategoryFilter,
    needle: String,
    active_only: bool,
}

impl FilterMatcher {
    pub fn matches_category(&self, category: Category) -> bool {
        self.category.matches(category)
    }

    /// Case-insensitive substring match on the name. The term is not trimmed.
    pub fn matches_search(&self, name: &str) -> bool {
        self.needle.is_empty() || name.to_lowercase().contains(&self.needle)
    }

    pub fn matches_active(&self, is_active: bool) -> bool {
        !self.active_only || is_active
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product.category())
            && self.matches_search(product.name())
            && self.matches_active(product.is_active())
    }
}

/// Products passing all filters, in input order.
pub fn apply<'a, I>(products: I, filters: &ProductFilters) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let matcher = filters.matcher();
    products.into_iter().filter(|p| matcher.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{ProductId, ProductInput};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn product(id: u64, name: &str, category: Category, is_active: bool) -> Product {
        Product::from_input(
            ProductId::new(id),
            Utc::now(),
            ProductInput {
                name: name.to_string(),
                price: Decimal::new(1000, 2),
                category,
                stock: 3,
                description: None,
                is_active,
                tags: vec![],
            },
        )
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Office Chair", Category::Furniture, true),
            product(2, "Desk Lamp", Category::Home, true),
            product(3, "Gaming Chair", Category::Furniture, false),
            product(4, "Wireless Mouse", Category::Electronics, true),
            product(5, "Armchair Cover", Category::Home, false),
        ]
    }

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn default_filters_pass_everything() {
        let products = catalog();
        let filters = ProductFilters::default();
        assert!(filters.is_unfiltered());
        assert_eq!(apply(&products, &filters).len(), products.len());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let products = catalog();
        let filters = ProductFilters::default().with_search("CHAIR");
        let result = names(&apply(&products, &filters));

        assert_eq!(result, ["Office Chair", "Gaming Chair", "Armchair Cover"]);
        assert!(!result.contains(&"Desk Lamp".to_string()));
    }

    #[test]
    fn whitespace_search_is_literal() {
        let products = catalog();
        let filters = ProductFilters::default().with_search(" ");
        // Only multi-word names contain a space.
        assert_eq!(apply(&products, &filters).len(), 5);

        let filters = ProductFilters::default().with_search("  ");
        assert!(apply(&products, &filters).is_empty());
    }

    #[test]
    fn predicates_are_conjunctive_and_order_is_stable() {
        let products = catalog();
        let filters = ProductFilters::default()
            .with_category(Category::Furniture)
            .with_search("chair")
            .with_active_only(true);

        assert_eq!(names(&apply(&products, &filters)), ["Office Chair"]);

        let filters = ProductFilters::default().with_category(Category::Home);
        assert_eq!(names(&apply(&products, &filters)), ["Desk Lamp", "Armchair Cover"]);
    }

    #[test]
    fn active_only_drops_inactive() {
        let products = catalog();
        let filters = ProductFilters::default().with_active_only(true);
        assert!(apply(&products, &filters).iter().all(|p| p.is_active()));
        assert_eq!(apply(&products, &filters).len(), 3);
    }

    #[test]
    fn filters_deserialize_from_camel_case() {
        let filters: ProductFilters =
            serde_json::from_str(r#"{"category":"Sports","searchTerm":"ball","activeOnly":true}"#).unwrap();
        assert_eq!(filters.category, CategoryFilter::Only(Category::Sports));
        assert_eq!(filters.search_term, "ball");
        assert!(filters.active_only);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_category() -> impl Strategy<Value = Category> {
            proptest::sample::select(Category::ALL.to_vec())
        }

        fn arb_filter() -> impl Strategy<Value = CategoryFilter> {
            prop_oneof![Just(CategoryFilter::All), arb_category().prop_map(CategoryFilter::Only)]
        }

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            proptest::collection::vec(("[A-Za-z ]{1,16}", arb_category(), any::<bool>()), 0..40).prop_map(
                |rows| {
                    rows.into_iter()
                        .enumerate()
                        .map(|(i, (name, category, active))| product(i as u64 + 1, &name, category, active))
                        .collect()
                },
            )
        }

        proptest! {
            /// Property: output is exactly the products satisfying all three predicates, in order.
            #[test]
            fn filter_is_sound_and_complete(
                products in arb_products(),
                category in arb_filter(),
                term in "[A-Za-z ]{0,3}",
                active_only in any::<bool>(),
            ) {
                let filters = ProductFilters { category, search_term: term.clone(), active_only };
                let result = apply(&products, &filters);

                let expected: Vec<&Product> = products
                    .iter()
                    .filter(|p| {
                        category.matches(p.category())
                            && p.name().to_lowercase().contains(&term.to_lowercase())
                            && (!active_only || p.is_active())
                    })
                    .collect();
                prop_assert_eq!(result, expected);
            }
        }
    }
}
