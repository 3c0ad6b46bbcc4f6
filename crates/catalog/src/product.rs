//! Product records, drafts, and patches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use souq_core::{CategoryId, DomainError, DomainResult, Lang, LocalizedText, ProductId, UserId};

use crate::category::{normalized_slug, validate_name, validate_slug};

/// A catalog product.
///
/// `category` is a reference by id; the record does not embed the category
/// document. Read-side joins happen in the query layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub slug: LocalizedText,
    pub price: f64,
    pub image: String,
    pub category: CategoryId,
    pub is_active: bool,
    pub created_by: Option<UserId>,
    pub updated_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn slug_for(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.slug.en,
            Lang::Ar => &self.slug.ar,
        }
    }

    /// Record-local invariants. Slug uniqueness is the store's concern.
    pub fn validate(&self) -> DomainResult<()> {
        validate_name(&self.name)?;
        validate_description(&self.description)?;
        validate_price(self.price)?;
        validate_image(&self.image)?;
        validate_slug(&self.slug)
    }
}

/// Input for creating a product. Slugs are derived from the name when absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub slug: Option<LocalizedText>,
    pub price: f64,
    pub image: String,
    pub category: CategoryId,
    pub is_active: Option<bool>,
}

impl NewProduct {
    /// Materialize a record: derive and normalize slugs, stamp the creating
    /// actor and timestamps.
    pub fn into_product(
        self,
        id: ProductId,
        actor: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<Product> {
        let slug = normalized_slug(self.slug, &self.name);
        let product = Product {
            id,
            name: self.name,
            description: self.description,
            slug,
            price: self.price,
            image: self.image,
            category: self.category,
            is_active: self.is_active.unwrap_or(true),
            created_by: Some(actor),
            updated_by: None,
            created_at: now,
            updated_at: now,
        };
        product.validate()?;
        Ok(product)
    }
}

/// Partial update for a product. Absent fields are preserved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub slug: Option<LocalizedText>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<CategoryId>,
    pub is_active: Option<bool>,
}

impl ProductPatch {
    pub fn apply_to(
        self,
        product: &mut Product,
        actor: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if let Some(slug) = self.slug {
            product.slug = souq_core::slugify_text(&slug);
        } else if let Some(name) = &self.name {
            product.slug = souq_core::slugify_text(name);
        }
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(is_active) = self.is_active {
            product.is_active = is_active;
        }
        product.updated_by = Some(actor);
        product.updated_at = now;
        product.validate()
    }
}

fn validate_description(description: &LocalizedText) -> DomainResult<()> {
    if description.en.trim().is_empty() {
        return Err(DomainError::validation("English description is required"));
    }
    if description.ar.trim().is_empty() {
        return Err(DomainError::validation("Arabic description is required"));
    }
    Ok(())
}

fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation("Price must be a positive number"));
    }
    Ok(())
}

fn validate_image(image: &str) -> DomainResult<()> {
    if image.trim().is_empty() {
        return Err(DomainError::validation("Image URL is required"));
    }
    Ok(())
}
