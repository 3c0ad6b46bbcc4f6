use std::sync::Arc;

use souq_auth::User;
use souq_catalog::{Category, Product, ProductSort};
use souq_core::{CategoryId, Lang, ProductId, UserId};

use crate::error::StoreResult;

/// Filter applied to product listings and counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Restrict to `is_active == true` documents.
    pub active_only: bool,
    /// Restrict to products in this category.
    pub category: Option<CategoryId>,
}

impl ProductFilter {
    pub fn active() -> Self {
        Self {
            active_only: true,
            category: None,
        }
    }

    pub fn active_in(category: CategoryId) -> Self {
        Self {
            active_only: true,
            category: Some(category),
        }
    }
}

/// Category persistence.
///
/// Slug uniqueness is per language across all categories, enforced on insert
/// and update.
pub trait CategoryStore: Send + Sync {
    fn insert_category(&self, category: Category) -> StoreResult<()>;
    /// Replace the stored record by id. `Ok(None)` when no such category.
    fn update_category(&self, category: Category) -> StoreResult<Option<Category>>;
    /// Remove and return the record. `Ok(None)` when no such category.
    fn delete_category(&self, id: CategoryId) -> StoreResult<Option<Category>>;
    fn get_category(&self, id: CategoryId) -> StoreResult<Option<Category>>;
    /// Look up by slug in one language, preferring an active match but
    /// falling back to an inactive one so admin tooling can still resolve it.
    fn find_category_by_slug(&self, lang: Lang, slug: &str) -> StoreResult<Option<Category>>;
    /// Active categories, newest first.
    fn list_active_categories(&self) -> StoreResult<Vec<Category>>;
}

/// Product persistence.
pub trait ProductStore: Send + Sync {
    fn insert_product(&self, product: Product) -> StoreResult<()>;
    /// Replace the stored record by id. `Ok(None)` when no such product.
    fn update_product(&self, product: Product) -> StoreResult<Option<Product>>;
    /// Remove and return the record. `Ok(None)` when no such product.
    fn delete_product(&self, id: ProductId) -> StoreResult<Option<Product>>;
    fn get_product(&self, id: ProductId) -> StoreResult<Option<Product>>;
    /// Storefront lookup by slug in one language. Active products only.
    fn find_product_by_slug(&self, lang: Lang, slug: &str) -> StoreResult<Option<Product>>;
    /// How many products match the filter.
    fn count_products(&self, filter: &ProductFilter) -> StoreResult<usize>;
    /// One page of matching products in `sort` order. Ties break by id
    /// ascending so pagination never duplicates or drops a row.
    fn find_products(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        skip: usize,
        limit: usize,
    ) -> StoreResult<Vec<Product>>;
    /// Count and page from one consistent view of the data.
    fn find_products_counted(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        skip: usize,
        limit: usize,
    ) -> StoreResult<(usize, Vec<Product>)>;
}

/// User persistence. Email uniqueness is enforced on insert and update.
pub trait UserStore: Send + Sync {
    fn insert_user(&self, user: User) -> StoreResult<()>;
    /// Replace the stored record by id. `Ok(None)` when no such user.
    fn update_user(&self, user: User) -> StoreResult<Option<User>>;
    /// Remove and return the record. `Ok(None)` when no such user.
    fn delete_user(&self, id: UserId) -> StoreResult<Option<User>>;
    fn get_user(&self, id: UserId) -> StoreResult<Option<User>>;
    fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    /// All users, newest first.
    fn list_users(&self) -> StoreResult<Vec<User>>;
}

impl<S> CategoryStore for Arc<S>
where
    S: CategoryStore + ?Sized,
{
    fn insert_category(&self, category: Category) -> StoreResult<()> {
        (**self).insert_category(category)
    }

    fn update_category(&self, category: Category) -> StoreResult<Option<Category>> {
        (**self).update_category(category)
    }

    fn delete_category(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        (**self).delete_category(id)
    }

    fn get_category(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        (**self).get_category(id)
    }

    fn find_category_by_slug(&self, lang: Lang, slug: &str) -> StoreResult<Option<Category>> {
        (**self).find_category_by_slug(lang, slug)
    }

    fn list_active_categories(&self) -> StoreResult<Vec<Category>> {
        (**self).list_active_categories()
    }
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn insert_product(&self, product: Product) -> StoreResult<()> {
        (**self).insert_product(product)
    }

    fn update_product(&self, product: Product) -> StoreResult<Option<Product>> {
        (**self).update_product(product)
    }

    fn delete_product(&self, id: ProductId) -> StoreResult<Option<Product>> {
        (**self).delete_product(id)
    }

    fn get_product(&self, id: ProductId) -> StoreResult<Option<Product>> {
        (**self).get_product(id)
    }

    fn find_product_by_slug(&self, lang: Lang, slug: &str) -> StoreResult<Option<Product>> {
        (**self).find_product_by_slug(lang, slug)
    }

    fn count_products(&self, filter: &ProductFilter) -> StoreResult<usize> {
        (**self).count_products(filter)
    }

    fn find_products(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        skip: usize,
        limit: usize,
    ) -> StoreResult<Vec<Product>> {
        (**self).find_products(filter, sort, skip, limit)
    }

    fn find_products_counted(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        skip: usize,
        limit: usize,
    ) -> StoreResult<(usize, Vec<Product>)> {
        (**self).find_products_counted(filter, sort, skip, limit)
    }
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn insert_user(&self, user: User) -> StoreResult<()> {
        (**self).insert_user(user)
    }

    fn update_user(&self, user: User) -> StoreResult<Option<User>> {
        (**self).update_user(user)
    }

    fn delete_user(&self, id: UserId) -> StoreResult<Option<User>> {
        (**self).delete_user(id)
    }

    fn get_user(&self, id: UserId) -> StoreResult<Option<User>> {
        (**self).get_user(id)
    }

    fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        (**self).find_user_by_email(email)
    }

    fn list_users(&self) -> StoreResult<Vec<User>> {
        (**self).list_users()
    }
}
