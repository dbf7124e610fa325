//! Product catalog core.
//!
//! An in-memory product registry and the views derived from it: filtering,
//! summary counts and pagination. Pure domain logic (no IO, no rendering).

pub mod config;
pub mod filter;
pub mod form;
pub mod pagination;
pub mod product;
pub mod registry;
pub mod seed;
pub mod session;
pub mod store;
pub mod summary;

pub use config::CatalogConfig;
pub use filter::{FilterMatcher, ProductFilters};
pub use form::{FormErrors, FormField, ProductForm};
pub use pagination::{Page, PageCursor, page_window, paginate};
pub use product::{
    Category, CategoryFilter, Product, ProductId, ProductInput, ProductPatch, StockStatus,
};
pub use registry::ProductRegistry;
pub use seed::SeedError;
pub use session::{CatalogSession, PageView, SubmitError, ViewMode};
pub use store::{EntityStore, InMemoryEntityStore};
pub use summary::{ProductSummary, summarize};
