//! Write side of the catalog.

use chrono::{DateTime, Utc};

use souq_catalog::{Category, CategoryPatch, NewCategory, NewProduct, Product, ProductPatch};
use souq_core::{CategoryId, DomainError, ProductId, UserId};
use souq_store::{CategoryStore, ProductStore, StoreError};

use crate::error::WriteError;

/// Catalog mutations. Callers are admin-gated upstream; this layer owns
/// validation, slug derivation, audit stamping, and conflict translation.
#[derive(Debug, Clone)]
pub struct CatalogWriter<S> {
    store: S,
}

impl<S> CatalogWriter<S>
where
    S: ProductStore + CategoryStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a product. The referenced category must already exist; a slug
    /// collision in either language is a conflict.
    pub fn create_product(
        &self,
        draft: NewProduct,
        actor: UserId,
        now: DateTime<Utc>,
    ) -> Result<Product, WriteError> {
        if self.store.get_category(draft.category)?.is_none() {
            return Err(DomainError::validation("Category does not exist").into());
        }
        let product = draft.into_product(ProductId::new(), actor, now)?;
        self.store
            .insert_product(product.clone())
            .map_err(product_conflict)?;
        tracing::info!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Partial update. Absent fields stay untouched; `updated_by` and
    /// `updated_at` are stamped server-side.
    pub fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
        actor: UserId,
        now: DateTime<Utc>,
    ) -> Result<Product, WriteError> {
        let mut product = self.store.get_product(id)?.ok_or(DomainError::NotFound)?;
        if let Some(category) = patch.category {
            if self.store.get_category(category)?.is_none() {
                return Err(DomainError::validation("Category does not exist").into());
            }
        }
        patch.apply_to(&mut product, actor, now)?;
        match self
            .store
            .update_product(product.clone())
            .map_err(product_conflict)?
        {
            Some(_) => {
                tracing::info!(product_id = %product.id, "product updated");
                Ok(product)
            }
            None => Err(DomainError::NotFound.into()),
        }
    }

    /// Hard delete. Returns the removed record.
    pub fn delete_product(&self, id: ProductId) -> Result<Product, WriteError> {
        let product = self.store.delete_product(id)?.ok_or(DomainError::NotFound)?;
        tracing::info!(product_id = %product.id, "product deleted");
        Ok(product)
    }

    pub fn create_category(
        &self,
        draft: NewCategory,
        now: DateTime<Utc>,
    ) -> Result<Category, WriteError> {
        let category = draft.into_category(CategoryId::new(), now)?;
        self.store
            .insert_category(category.clone())
            .map_err(category_conflict)?;
        tracing::info!(category_id = %category.id, "category created");
        Ok(category)
    }

    pub fn update_category(
        &self,
        id: CategoryId,
        patch: CategoryPatch,
        now: DateTime<Utc>,
    ) -> Result<Category, WriteError> {
        let mut category = self.store.get_category(id)?.ok_or(DomainError::NotFound)?;
        patch.apply_to(&mut category, now)?;
        match self
            .store
            .update_category(category.clone())
            .map_err(category_conflict)?
        {
            Some(_) => {
                tracing::info!(category_id = %category.id, "category updated");
                Ok(category)
            }
            None => Err(DomainError::NotFound.into()),
        }
    }

    /// Hard delete. Products referencing the category keep their dangling
    /// id; read views then resolve the category to `None`.
    pub fn delete_category(&self, id: CategoryId) -> Result<Category, WriteError> {
        let category = self
            .store
            .delete_category(id)?
            .ok_or(DomainError::NotFound)?;
        tracing::info!(category_id = %category.id, "category deleted");
        Ok(category)
    }
}

fn product_conflict(err: StoreError) -> WriteError {
    match err {
        StoreError::DuplicateKey(_) => {
            DomainError::conflict("Product with this slug already exists").into()
        }
        other => WriteError::Store(other),
    }
}

fn category_conflict(err: StoreError) -> WriteError {
    match err {
        StoreError::DuplicateKey(_) => {
            DomainError::conflict("Category with this slug already exists").into()
        }
        other => WriteError::Store(other),
    }
}
