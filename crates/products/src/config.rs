//! Catalog session configuration.

use core::num::NonZeroUsize;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::pagination::page_size;

pub const PAGE_SIZE_ENV: &str = "PRODCAT_PAGE_SIZE";
pub const PAGE_SIZES_ENV: &str = "PRODCAT_PAGE_SIZES";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "PRODCAT_LOW_STOCK_THRESHOLD";

/// Defaults for a catalog session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Rows per page when a session starts.
    pub page_size: NonZeroUsize,
    /// Choices offered by the rows-per-page selector.
    pub page_size_options: Vec<NonZeroUsize>,
    /// Stock below this (and above zero) is "Low Stock".
    pub low_stock_threshold: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let sizes = [5, 10, 25].map(|n| NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN));
        Self {
            page_size: sizes[1],
            page_size_options: sizes.to_vec(),
            low_stock_threshold: 10,
        }
    }
}

impl CatalogConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PAGE_SIZES_ENV) {
            let mut sizes = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(parse_page_size)
                .collect::<anyhow::Result<Vec<_>>>()
                .with_context(|| format!("invalid {PAGE_SIZES_ENV}={raw:?}"))?;
            sizes.sort();
            sizes.dedup();
            if sizes.is_empty() {
                bail!("{PAGE_SIZES_ENV} must list at least one page size");
            }
            config.page_size_options = sizes;
        }

        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            config.page_size =
                parse_page_size(&raw).with_context(|| format!("invalid {PAGE_SIZE_ENV}={raw:?}"))?;
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_ENV) {
            config.low_stock_threshold = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid {LOW_STOCK_THRESHOLD_ENV}={raw:?}"))?;
        }

        if !config.page_size_options.contains(&config.page_size) {
            warn!(
                page_size = config.page_size.get(),
                "default page size is not among the page size options; adding it"
            );
            config.page_size_options.push(config.page_size);
            config.page_size_options.sort();
        }

        Ok(config)
    }
}

fn parse_page_size(raw: &str) -> anyhow::Result<NonZeroUsize> {
    let n: usize = raw.trim().parse().context("not a number")?;
    Ok(page_size(n)?)
}
