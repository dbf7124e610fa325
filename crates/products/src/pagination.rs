//! Pagination window and the page-number button strip.

use core::num::NonZeroUsize;
use core::ops::Range;

use serde::{Deserialize, Serialize};

use prodcat_core::{DomainError, DomainResult};

/// Maximum number of page buttons shown at once.
pub const PAGE_WINDOW: usize = 5;

/// One page of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Page-number buttons to render for this page.
    pub fn window(&self) -> Range<usize> {
        page_window(self.total_pages, self.page)
    }
}

/// Validate a page size coming from outside (config, UI).
pub fn page_size(size: usize) -> DomainResult<NonZeroUsize> {
    NonZeroUsize::new(size).ok_or_else(|| DomainError::validation("page size must be positive"))
}

/// `ceil(total_items / page_size)`; 0 for an empty sequence.
pub fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// Slice out page `page` (0-based). Out-of-range pages give an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let total_items = items.len();
    let start_index = page.saturating_mul(page_size.get());
    let end_index = start_index.saturating_add(page_size.get()).min(total_items);
    let slice = if start_index >= total_items {
        &items[..0]
    } else {
        &items[start_index..end_index]
    };

    Page {
        items: slice,
        page,
        start_index,
        end_index,
        total_items,
        total_pages: total_pages(total_items, page_size),
    }
}

/// Up to [`PAGE_WINDOW`] contiguous page indices centred on `page`, clamped at both ends.
pub fn page_window(total_pages: usize, page: usize) -> Range<usize> {
    if total_pages <= PAGE_WINDOW {
        0..total_pages
    } else if page < 2 {
        0..PAGE_WINDOW
    } else if page > total_pages - 3 {
        total_pages - PAGE_WINDOW..total_pages
    } else {
        page - 2..page + 3
    }
}

/// Current page and page size of a paged view.
///
/// Navigation clamps into `[0, total_pages - 1]`; [`paginate`] itself never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCursor {
    page: usize,
    page_size: NonZeroUsize,
}

impl PageCursor {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page: 0, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Change the page size; always returns to the first page.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.page_size = page_size;
        self.page = 0;
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total_items: usize) -> bool {
        self.page + 1 < total_pages(total_items, self.page_size)
    }

    pub fn first(&mut self) {
        self.page = 0;
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn next(&mut self, total_items: usize) {
        if self.has_next(total_items) {
            self.page += 1;
        }
    }

    pub fn last(&mut self, total_items: usize) {
        self.page = total_pages(total_items, self.page_size).saturating_sub(1);
    }

    /// Jump to `page`, clamped to the last existing page.
    pub fn go_to(&mut self, page: usize, total_items: usize) {
        let last = total_pages(total_items, self.page_size).saturating_sub(1);
        self.page = page.min(last);
    }

    /// Pull the page back in range after the underlying sequence shrank.
    pub fn clamp(&mut self, total_items: usize) {
        self.go_to(self.page, total_items);
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        paginate(items, self.page, self.page_size)
    }
}
