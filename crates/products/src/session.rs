//! Catalog session: the state a catalog screen holds between user actions.
//!
//! Owns the registry handle plus filter, paging and view-mode state, and serves
//! the derived views. Every read recomputes from current state, except the
//! summary, which is memoized per registry version.

use core::cell::RefCell;
use core::num::NonZeroUsize;
use core::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use prodcat_core::{DomainError, DomainResult};

use crate::config::CatalogConfig;
use crate::filter::{self, ProductFilters};
use crate::form::{FormErrors, ProductForm};
use crate::pagination::PageCursor;
use crate::product::{CategoryFilter, Product, ProductId, ProductInput, ProductPatch, StockStatus};
use crate::registry::ProductRegistry;
use crate::seed::{self, SeedError};
use crate::summary::{self, ProductSummary};

/// How the product list is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Card,
}

/// Failure of a form submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormErrors),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// The rows of the current page, plus what the pager needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub items: Vec<&'a Product>,
    pub page: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub total_items: usize,
    pub total_pages: usize,
    /// Page-number buttons to show.
    pub window: Range<usize>,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Debug)]
pub struct CatalogSession {
    registry: ProductRegistry,
    config: CatalogConfig,
    filters: ProductFilters,
    cursor: PageCursor,
    view_mode: ViewMode,
    summary_cache: RefCell<Option<(u64, ProductSummary)>>,
}

impl CatalogSession {
    pub fn new(registry: ProductRegistry, config: CatalogConfig) -> Self {
        info!(
            products = registry.len(),
            page_size = config.page_size.get(),
            "catalog session started"
        );
        Self {
            cursor: PageCursor::new(config.page_size),
            registry,
            config,
            filters: ProductFilters::default(),
            view_mode: ViewMode::default(),
            summary_cache: RefCell::new(None),
        }
    }

    /// Session over the bundled mock catalog.
    pub fn from_seed(config: CatalogConfig) -> Result<Self, SeedError> {
        Ok(Self::new(seed::seeded_registry()?, config))
    }

    pub fn registry(&self) -> &ProductRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn filters(&self) -> &ProductFilters {
        &self.filters
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.registry.get(id)
    }

    pub fn stock_status(&self, product: &Product) -> StockStatus {
        product.stock_status(self.config.low_stock_threshold)
    }

    // Filters. Any change sends the pager back to the first page, since the
    // old page may not exist in the new result.

    pub fn set_filters(&mut self, filters: ProductFilters) {
        if filters != self.filters {
            debug!(?filters, "filters changed");
            self.filters = filters;
            self.cursor.first();
        }
    }

    pub fn select_category(&mut self, category: impl Into<CategoryFilter>) {
        let filters = self.filters.clone().with_category(category);
        self.set_filters(filters);
    }

    pub fn search(&mut self, term: impl Into<String>) {
        let filters = self.filters.clone().with_search(term);
        self.set_filters(filters);
    }

    pub fn set_active_only(&mut self, active_only: bool) {
        let filters = self.filters.clone().with_active_only(active_only);
        self.set_filters(filters);
    }

    // Derived views.

    /// Products passing the current filters, in registry order.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter::apply(self.registry.list(), &self.filters)
    }

    /// Counts over the whole registry, ignoring filters.
    pub fn summary(&self) -> ProductSummary {
        let version = self.registry.version();
        let mut cache = self.summary_cache.borrow_mut();
        if let Some((cached_version, summary)) = *cache {
            if cached_version == version {
                return summary;
            }
        }
        let summary = summary::summarize(self.registry.list());
        *cache = Some((version, summary));
        summary
    }

    pub fn current_page(&self) -> PageView<'_> {
        let visible = self.visible_products();
        let page = self.cursor.slice(&visible);
        PageView {
            items: page.items.to_vec(),
            page: page.page,
            start_index: page.start_index,
            end_index: page.end_index,
            total_items: page.total_items,
            total_pages: page.total_pages,
            window: page.window(),
            has_prev: self.cursor.has_prev(),
            has_next: self.cursor.has_next(page.total_items),
        }
    }

    // Paging.

    /// Switch rows per page; only sizes from `page_size_options` are accepted.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) -> DomainResult<()> {
        if !self.config.page_size_options.contains(&page_size) {
            return Err(DomainError::validation(format!(
                "page size {page_size} is not one of the offered options"
            )));
        }
        self.cursor.set_page_size(page_size);
        Ok(())
    }

    pub fn first_page(&mut self) {
        self.cursor.first();
    }

    pub fn prev_page(&mut self) {
        self.cursor.prev();
    }

    pub fn next_page(&mut self) {
        let total = self.visible_products().len();
        self.cursor.next(total);
    }

    pub fn last_page(&mut self) {
        let total = self.visible_products().len();
        self.cursor.last(total);
    }

    pub fn go_to_page(&mut self, page: usize) {
        let total = self.visible_products().len();
        self.cursor.go_to(page, total);
    }

    // Mutations.

    pub fn create(&mut self, input: ProductInput) -> DomainResult<Product> {
        self.registry.create(input)
    }

    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> DomainResult<Product> {
        let updated = self.registry.update(id, patch)?;
        self.clamp_cursor();
        Ok(updated)
    }

    pub fn delete(&mut self, id: ProductId) -> bool {
        let removed = self.registry.delete(id);
        if removed {
            self.clamp_cursor();
        }
        removed
    }

    /// Validate a submitted form and create (no `editing` id) or update a product.
    pub fn submit(&mut self, form: &ProductForm, editing: Option<ProductId>) -> Result<Product, SubmitError> {
        match editing {
            Some(id) => Ok(self.update(id, form.validate_patch()?)?),
            None => Ok(self.create(form.validate()?)?),
        }
    }

    fn clamp_cursor(&mut self) {
        let total = self.visible_products().len();
        self.cursor.clamp(total);
    }
}
