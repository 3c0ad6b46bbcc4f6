use serde::Deserialize;
use serde_json::json;

use souq_core::LocalizedText;
use souq_engine::{CategoryPage, PageResult};

// -------------------------
// Request DTOs
// -------------------------

/// Raw query parameters for product listings. Numeric fields stay strings so
/// bad values surface as envelope errors instead of extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsParams {
    pub category: Option<String>,
    pub lang: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

/// Category references arrive as strings and are parsed in the handler, for
/// the same reason.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub slug: Option<LocalizedText>,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub slug: Option<LocalizedText>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: LocalizedText,
    pub slug: Option<LocalizedText>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<LocalizedText>,
    pub slug: Option<LocalizedText>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

// -------------------------
// Response envelopes
// -------------------------

pub fn page_to_json(page: PageResult) -> serde_json::Value {
    json!({
        "success": true,
        "count": page.count,
        "total": page.total,
        "page": page.page,
        "pages": page.pages,
        "data": page.items,
    })
}

pub fn category_page_to_json(scoped: CategoryPage) -> serde_json::Value {
    json!({
        "success": true,
        "count": scoped.page.count,
        "total": scoped.page.total,
        "page": scoped.page.page,
        "pages": scoped.page.pages,
        "category": scoped.category,
        "data": scoped.page.items,
    })
}
