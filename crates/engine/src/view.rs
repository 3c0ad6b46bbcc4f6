//! Read-side result shapes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use souq_catalog::{ActorSummary, Category, Product};
use souq_core::{LocalizedText, ProductId};

/// A product as listings and single reads present it: the stored record with
/// its category resolved inline and audit actors projected down to
/// [`ActorSummary`]. A dangling category reference resolves to `None` rather
/// than failing the read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: ProductId,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub slug: LocalizedText,
    pub price: f64,
    pub image: String,
    pub category: Option<Category>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<ActorSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<ActorSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductView {
    pub fn compose(
        product: Product,
        category: Option<Category>,
        created_by: Option<ActorSummary>,
        updated_by: Option<ActorSummary>,
    ) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            slug: product.slug,
            price: product.price,
            image: product.image,
            category,
            is_active: product.is_active,
            created_by,
            updated_by,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of a listing. `count` is the page size, `total` the filter-wide
/// match count, `pages` the page count for that total.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub items: Vec<ProductView>,
    pub count: usize,
    pub total: usize,
    pub page: u32,
    pub pages: u32,
}

impl PageResult {
    pub fn assemble(items: Vec<ProductView>, total: usize, page: u32, limit: u32) -> Self {
        Self {
            count: items.len(),
            total,
            page,
            pages: page_count(total, limit),
            items,
        }
    }
}

/// A category-scoped page: the resolved category plus its products.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPage {
    pub category: Category,
    pub page: PageResult,
}

/// `ceil(total / limit)`; 0 when nothing matches or when `limit` is 0.
pub fn page_count(total: usize, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit as usize) as u32
}
