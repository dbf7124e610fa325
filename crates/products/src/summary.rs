//! Summary aggregator: counts over the whole, unfiltered registry.

use serde::{Deserialize, Serialize};

use crate::product::{Category, CategoryFilter, Product};

/// Counts shown on the summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub total: usize,
    pub electronics: usize,
    pub furniture: usize,
    pub sports: usize,
    pub kitchen: usize,
    pub fashion: usize,
    pub home: usize,
    pub active: usize,
    pub inactive: usize,
}

impl ProductSummary {
    /// Count of products in `category`.
    pub fn category_count(&self, category: Category) -> usize {
        match category {
            Category::Electronics => self.electronics,
            Category::Furniture => self.furniture,
            Category::Sports => self.sports,
            Category::Kitchen => self.kitchen,
            Category::Fashion => self.fashion,
            Category::Home => self.home,
        }
    }

    /// Count displayed for a category card; `All` shows the total.
    pub fn count(&self, filter: CategoryFilter) -> usize {
        match filter {
            CategoryFilter::All => self.total,
            CategoryFilter::Only(c) => self.category_count(c),
        }
    }

    fn category_slot(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Electronics => &mut self.electronics,
            Category::Furniture => &mut self.furniture,
            Category::Sports => &mut self.sports,
            Category::Kitchen => &mut self.kitchen,
            Category::Fashion => &mut self.fashion,
            Category::Home => &mut self.home,
        }
    }
}

/// Summarize a full registry snapshot.
pub fn summarize<'a, I>(products: I) -> ProductSummary
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut summary = ProductSummary::default();
    for product in products {
        summary.total += 1;
        *summary.category_slot(product.category()) += 1;
        if product.is_active() {
            summary.active += 1;
        } else {
            summary.inactive += 1;
        }
    }
    summary
}
