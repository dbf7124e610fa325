//! Input boundary: raw product-form fields to validated inputs.
//!
//! The form collects everything as text. Validation reports every failing
//! field at once so the caller can annotate all of them.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::product::{Category, Product, ProductInput, ProductPatch};

/// Form fields that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Price,
    Category,
    Stock,
}

impl core::fmt::Display for FormField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            FormField::Name => "name",
            FormField::Price => "price",
            FormField::Category => "category",
            FormField::Stock => "stock",
        })
    }
}

/// Field-keyed validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[error("invalid product form: {}", summary(.0))]
pub struct FormErrors(BTreeMap<FormField, &'static str>);

fn summary(errors: &BTreeMap<FormField, &'static str>) -> String {
    errors
        .iter()
        .map(|(field, msg)| format!("{field}: {msg}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, field: FormField, msg: &'static str) {
        self.0.insert(field, msg);
    }
}

/// Raw form state, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    /// Empty until a category is picked.
    pub category: String,
    pub stock: String,
    pub description: String,
    pub is_active: bool,
    /// Comma-separated.
    pub tags: String,
}

impl Default for ProductForm {
    /// A blank "add product" form; new products start active.
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            category: String::new(),
            stock: String::new(),
            description: String::new(),
            is_active: true,
            tags: String::new(),
        }
    }
}

impl ProductForm {
    /// Pre-fill an "edit product" form.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            price: product.price().normalize().to_string(),
            category: product.category().as_str().to_string(),
            stock: product.stock().to_string(),
            description: product.description().unwrap_or_default().to_string(),
            is_active: product.is_active(),
            tags: product.tags().join(", "),
        }
    }

    /// Check every field and build the input the registry accepts.
    pub fn validate(&self) -> Result<ProductInput, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FormField::Name, "Name is required");
        }

        let price = parse_price(&self.price);
        if price.is_none() {
            errors.push(FormField::Price, "Valid price is required");
        }

        let category = self.category.parse::<Category>().ok();
        if category.is_none() {
            errors.push(FormField::Category, "Category is required");
        }

        let stock = parse_stock(&self.stock);
        if stock.is_none() {
            errors.push(FormField::Stock, "Valid stock quantity is required");
        }

        match (price, category, stock) {
            (Some(price), Some(category), Some(stock)) if errors.is_empty() => {
                let description = self.description.trim();
                Ok(ProductInput {
                    name: name.to_string(),
                    price,
                    category,
                    stock,
                    description: (!description.is_empty()).then(|| description.to_string()),
                    is_active: self.is_active,
                    tags: parse_tags(&self.tags),
                })
            }
            _ => Err(errors),
        }
    }

    /// Validate for the edit path: every field is submitted.
    pub fn validate_patch(&self) -> Result<ProductPatch, FormErrors> {
        self.validate().map(ProductPatch::from)
    }
}

/// Split on commas, trim each token, drop empties. Order and duplicates are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_price(raw: &str) -> Option<Decimal> {
    let price = raw.trim().parse::<Decimal>().ok()?;
    (price > Decimal::ZERO).then_some(price)
}

fn parse_stock(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}
