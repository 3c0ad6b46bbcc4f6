//! In-memory document store.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

use souq_auth::User;
use souq_catalog::{Category, Product, ProductSort};
use souq_core::{CategoryId, Lang, ProductId, UserId};

use crate::error::{StoreError, StoreResult};
use crate::traits::{CategoryStore, ProductFilter, ProductStore, UserStore};

/// In-memory store backing the whole catalog. Suitable for dev servers,
/// seeding, and tests; swap the traits for a persistent backend in
/// production.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    categories: RwLock<HashMap<CategoryId, Category>>,
    products: RwLock<HashMap<ProductId, Product>>,
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(product: &Product, filter: &ProductFilter) -> bool {
    if filter.active_only && !product.is_active {
        return false;
    }
    if let Some(category) = filter.category {
        if product.category != category {
            return false;
        }
    }
    true
}

/// Total order over products for a given sort. Ties break by id ascending so
/// consecutive pages of an unchanged store never overlap or skip.
fn cmp_products(a: &Product, b: &Product, sort: ProductSort) -> Ordering {
    let primary = match sort {
        ProductSort::Newest => b.created_at.cmp(&a.created_at),
        ProductSort::Oldest => a.created_at.cmp(&b.created_at),
        ProductSort::PriceLow => a.price.total_cmp(&b.price),
        ProductSort::PriceHigh => b.price.total_cmp(&a.price),
        ProductSort::NameAsc => a.name.en.cmp(&b.name.en),
        ProductSort::NameDesc => b.name.en.cmp(&a.name.en),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

fn page_of(mut items: Vec<Product>, sort: ProductSort, skip: usize, limit: usize) -> Vec<Product> {
    items.sort_by(|a, b| cmp_products(a, b, sort));
    items.into_iter().skip(skip).take(limit).collect()
}

fn category_slug_conflict(
    categories: &HashMap<CategoryId, Category>,
    candidate: &Category,
) -> Option<String> {
    for existing in categories.values() {
        if existing.id == candidate.id {
            continue;
        }
        if existing.slug.en == candidate.slug.en {
            return Some(candidate.slug.en.clone());
        }
        if existing.slug.ar == candidate.slug.ar {
            return Some(candidate.slug.ar.clone());
        }
    }
    None
}

fn product_slug_conflict(
    products: &HashMap<ProductId, Product>,
    candidate: &Product,
) -> Option<String> {
    for existing in products.values() {
        if existing.id == candidate.id {
            continue;
        }
        if existing.slug.en == candidate.slug.en {
            return Some(candidate.slug.en.clone());
        }
        if existing.slug.ar == candidate.slug.ar {
            return Some(candidate.slug.ar.clone());
        }
    }
    None
}

fn user_email_conflict(users: &HashMap<UserId, User>, candidate: &User) -> bool {
    users
        .values()
        .any(|existing| existing.id != candidate.id && existing.email == candidate.email)
}

impl CategoryStore for MemoryCatalogStore {
    fn insert_category(&self, category: Category) -> StoreResult<()> {
        let mut categories = self.categories.write().map_err(|_| StoreError::Poisoned)?;
        if categories.contains_key(&category.id) {
            return Err(StoreError::DuplicateKey(format!(
                "category id '{}'",
                category.id
            )));
        }
        if let Some(slug) = category_slug_conflict(&categories, &category) {
            return Err(StoreError::DuplicateKey(format!("category slug '{slug}'")));
        }
        categories.insert(category.id, category);
        Ok(())
    }

    fn update_category(&self, category: Category) -> StoreResult<Option<Category>> {
        let mut categories = self.categories.write().map_err(|_| StoreError::Poisoned)?;
        if !categories.contains_key(&category.id) {
            return Ok(None);
        }
        if let Some(slug) = category_slug_conflict(&categories, &category) {
            return Err(StoreError::DuplicateKey(format!("category slug '{slug}'")));
        }
        let stored = category.clone();
        categories.insert(category.id, category);
        Ok(Some(stored))
    }

    fn delete_category(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        let mut categories = self.categories.write().map_err(|_| StoreError::Poisoned)?;
        Ok(categories.remove(&id))
    }

    fn get_category(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        let categories = self.categories.read().map_err(|_| StoreError::Poisoned)?;
        Ok(categories.get(&id).cloned())
    }

    fn find_category_by_slug(&self, lang: Lang, slug: &str) -> StoreResult<Option<Category>> {
        let categories = self.categories.read().map_err(|_| StoreError::Poisoned)?;
        let mut inactive = None;
        for category in categories.values() {
            if category.slug_for(lang) != slug {
                continue;
            }
            if category.is_active {
                return Ok(Some(category.clone()));
            }
            inactive = Some(category.clone());
        }
        Ok(inactive)
    }

    fn list_active_categories(&self) -> StoreResult<Vec<Category>> {
        let categories = self.categories.read().map_err(|_| StoreError::Poisoned)?;
        let mut active: Vec<Category> = categories
            .values()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(active)
    }
}

impl ProductStore for MemoryCatalogStore {
    fn insert_product(&self, product: Product) -> StoreResult<()> {
        let mut products = self.products.write().map_err(|_| StoreError::Poisoned)?;
        if products.contains_key(&product.id) {
            return Err(StoreError::DuplicateKey(format!(
                "product id '{}'",
                product.id
            )));
        }
        if let Some(slug) = product_slug_conflict(&products, &product) {
            return Err(StoreError::DuplicateKey(format!("product slug '{slug}'")));
        }
        products.insert(product.id, product);
        Ok(())
    }

    fn update_product(&self, product: Product) -> StoreResult<Option<Product>> {
        let mut products = self.products.write().map_err(|_| StoreError::Poisoned)?;
        if !products.contains_key(&product.id) {
            return Ok(None);
        }
        if let Some(slug) = product_slug_conflict(&products, &product) {
            return Err(StoreError::DuplicateKey(format!("product slug '{slug}'")));
        }
        let stored = product.clone();
        products.insert(product.id, product);
        Ok(Some(stored))
    }

    fn delete_product(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let mut products = self.products.write().map_err(|_| StoreError::Poisoned)?;
        Ok(products.remove(&id))
    }

    fn get_product(&self, id: ProductId) -> StoreResult<Option<Product>> {
        let products = self.products.read().map_err(|_| StoreError::Poisoned)?;
        Ok(products.get(&id).cloned())
    }

    fn find_product_by_slug(&self, lang: Lang, slug: &str) -> StoreResult<Option<Product>> {
        let products = self.products.read().map_err(|_| StoreError::Poisoned)?;
        Ok(products
            .values()
            .find(|p| p.is_active && p.slug_for(lang) == slug)
            .cloned())
    }

    fn count_products(&self, filter: &ProductFilter) -> StoreResult<usize> {
        let products = self.products.read().map_err(|_| StoreError::Poisoned)?;
        Ok(products.values().filter(|p| matches(p, filter)).count())
    }

    fn find_products(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        skip: usize,
        limit: usize,
    ) -> StoreResult<Vec<Product>> {
        let products = self.products.read().map_err(|_| StoreError::Poisoned)?;
        let matching: Vec<Product> = products
            .values()
            .filter(|p| matches(p, filter))
            .cloned()
            .collect();
        Ok(page_of(matching, sort, skip, limit))
    }

    fn find_products_counted(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        skip: usize,
        limit: usize,
    ) -> StoreResult<(usize, Vec<Product>)> {
        // One read guard, so the count and the page see the same documents.
        let products = self.products.read().map_err(|_| StoreError::Poisoned)?;
        let matching: Vec<Product> = products
            .values()
            .filter(|p| matches(p, filter))
            .cloned()
            .collect();
        let total = matching.len();
        Ok((total, page_of(matching, sort, skip, limit)))
    }
}

impl UserStore for MemoryCatalogStore {
    fn insert_user(&self, user: User) -> StoreResult<()> {
        let mut users = self.users.write().map_err(|_| StoreError::Poisoned)?;
        if users.contains_key(&user.id) {
            return Err(StoreError::DuplicateKey(format!("user id '{}'", user.id)));
        }
        if user_email_conflict(&users, &user) {
            return Err(StoreError::DuplicateKey(format!(
                "user email '{}'",
                user.email
            )));
        }
        users.insert(user.id, user);
        Ok(())
    }

    fn update_user(&self, user: User) -> StoreResult<Option<User>> {
        let mut users = self.users.write().map_err(|_| StoreError::Poisoned)?;
        if !users.contains_key(&user.id) {
            return Ok(None);
        }
        if user_email_conflict(&users, &user) {
            return Err(StoreError::DuplicateKey(format!(
                "user email '{}'",
                user.email
            )));
        }
        let stored = user.clone();
        users.insert(user.id, user);
        Ok(Some(stored))
    }

    fn delete_user(&self, id: UserId) -> StoreResult<Option<User>> {
        let mut users = self.users.write().map_err(|_| StoreError::Poisoned)?;
        Ok(users.remove(&id))
    }

    fn get_user(&self, id: UserId) -> StoreResult<Option<User>> {
        let users = self.users.read().map_err(|_| StoreError::Poisoned)?;
        Ok(users.get(&id).cloned())
    }

    fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().map_err(|_| StoreError::Poisoned)?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = self.users.read().map_err(|_| StoreError::Poisoned)?;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }
}
