//! Category records and validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use souq_core::{slugify, slugify_text, CategoryId, DomainError, DomainResult, Lang, LocalizedText};

/// A catalog category.
///
/// Slugs are unique per language across all categories; that namespace is
/// enforced by the store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: LocalizedText,
    pub slug: LocalizedText,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn slug_for(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.slug.en,
            Lang::Ar => &self.slug.ar,
        }
    }

    /// Record-local invariants (bilingual completeness, non-empty slugs).
    pub fn validate(&self) -> DomainResult<()> {
        validate_name(&self.name)?;
        validate_slug(&self.slug)
    }
}

/// Input for creating a category. Slugs are derived from the name when absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: LocalizedText,
    pub slug: Option<LocalizedText>,
    pub is_active: Option<bool>,
}

impl NewCategory {
    /// Materialize a record: derive and normalize slugs, stamp timestamps.
    pub fn into_category(self, id: CategoryId, now: DateTime<Utc>) -> DomainResult<Category> {
        let slug = normalized_slug(self.slug, &self.name);
        let category = Category {
            id,
            name: self.name,
            slug,
            is_active: self.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        category.validate()?;
        Ok(category)
    }
}

/// Partial update for a category. Absent fields are preserved.
///
/// A name change without an explicit slug re-derives the slugs, matching how
/// the admin surface has always behaved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    pub name: Option<LocalizedText>,
    pub slug: Option<LocalizedText>,
    pub is_active: Option<bool>,
}

impl CategoryPatch {
    pub fn apply_to(self, category: &mut Category, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(slug) = self.slug {
            category.slug = slugify_text(&slug);
        } else if let Some(name) = &self.name {
            category.slug = slugify_text(name);
        }
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(is_active) = self.is_active {
            category.is_active = is_active;
        }
        category.updated_at = now;
        category.validate()
    }
}

pub(crate) fn validate_name(name: &LocalizedText) -> DomainResult<()> {
    if name.en.trim().is_empty() {
        return Err(DomainError::validation("English name is required"));
    }
    if name.ar.trim().is_empty() {
        return Err(DomainError::validation("Arabic name is required"));
    }
    Ok(())
}

pub(crate) fn validate_slug(slug: &LocalizedText) -> DomainResult<()> {
    if slug.en.is_empty() {
        return Err(DomainError::validation("English slug is required"));
    }
    if slug.ar.is_empty() {
        return Err(DomainError::validation("Arabic slug is required"));
    }
    Ok(())
}

/// Normalize a provided slug, or derive one from the name.
///
/// Provided slugs go through `slugify` too, so stored slugs are always in
/// canonical form regardless of what the client sent.
pub(crate) fn normalized_slug(slug: Option<LocalizedText>, name: &LocalizedText) -> LocalizedText {
    match slug {
        Some(s) => LocalizedText {
            en: slugify(&s.en, Lang::En),
            ar: slugify(&s.ar, Lang::Ar),
        },
        None => slugify_text(name),
    }
}
