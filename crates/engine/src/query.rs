//! Read side of the catalog.

use souq_catalog::{ActorSummary, Category, Product};
use souq_core::{CategoryId, Lang, ProductId, UserId};
use souq_store::{CategoryStore, ProductFilter, ProductStore, UserStore};

use crate::error::QueryError;
use crate::request::{ConsistencyMode, PageRequest};
use crate::view::{CategoryPage, PageResult, ProductView};

/// Catalog reads over a document store.
///
/// Listings apply exactly one active-filter policy (`is_active == true`) and
/// one of the six fixed sort orders. All reads are side-effect free.
#[derive(Debug, Clone)]
pub struct CatalogQuery<S> {
    store: S,
}

impl<S> CatalogQuery<S>
where
    S: ProductStore + CategoryStore + UserStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List active products, optionally constrained to a category slug.
    ///
    /// The category filter resolves before any product query runs; an
    /// unresolvable slug is a terminal [`QueryError::CategoryNotFound`],
    /// never an empty page.
    pub fn list_products(&self, request: &PageRequest) -> Result<PageResult, QueryError> {
        let filter = match &request.category {
            Some(category) => {
                let resolved = self
                    .store
                    .find_category_by_slug(category.lang, &category.slug)?
                    .ok_or(QueryError::CategoryNotFound)?;
                ProductFilter::active_in(resolved.id)
            }
            None => ProductFilter::active(),
        };
        self.page(&filter, request)
    }

    /// List active products of one category, supplied as a resolved id.
    ///
    /// The category must exist; any slug filter on the request is ignored,
    /// the id wins. The resolved category rides along in the envelope.
    pub fn list_by_category(
        &self,
        id: CategoryId,
        request: &PageRequest,
    ) -> Result<CategoryPage, QueryError> {
        let category = self
            .store
            .get_category(id)?
            .ok_or(QueryError::CategoryNotFound)?;
        let page = self.page(&ProductFilter::active_in(id), request)?;
        Ok(CategoryPage { category, page })
    }

    /// Single active product by slug within one language namespace.
    pub fn get_by_slug(&self, lang: Lang, slug: &str) -> Result<ProductView, QueryError> {
        let product = self
            .store
            .find_product_by_slug(lang, slug)?
            .ok_or(QueryError::ProductNotFound)?;
        self.resolve_view(product)
    }

    /// Single product by id, regardless of active state.
    pub fn get_by_id(&self, id: ProductId) -> Result<ProductView, QueryError> {
        let product = self
            .store
            .get_product(id)?
            .ok_or(QueryError::ProductNotFound)?;
        self.resolve_view(product)
    }

    /// Active categories, newest first.
    pub fn list_categories(&self) -> Result<Vec<Category>, QueryError> {
        Ok(self.store.list_active_categories()?)
    }

    pub fn get_category(&self, id: CategoryId) -> Result<Category, QueryError> {
        self.store
            .get_category(id)?
            .ok_or(QueryError::CategoryNotFound)
    }

    pub fn get_category_by_slug(&self, lang: Lang, slug: &str) -> Result<Category, QueryError> {
        self.store
            .find_category_by_slug(lang, slug)?
            .ok_or(QueryError::CategoryNotFound)
    }

    fn page(&self, filter: &ProductFilter, request: &PageRequest) -> Result<PageResult, QueryError> {
        let skip = request.skip();
        let limit = request.limit as usize;
        let (total, items) = match request.consistency {
            ConsistencyMode::Weak => {
                let total = self.store.count_products(filter)?;
                let items = self.store.find_products(filter, request.sort, skip, limit)?;
                (total, items)
            }
            ConsistencyMode::Snapshot => {
                self.store
                    .find_products_counted(filter, request.sort, skip, limit)?
            }
        };
        let views = items
            .into_iter()
            .map(|product| self.resolve_view(product))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PageResult::assemble(views, total, request.page, request.limit))
    }

    fn resolve_view(&self, product: Product) -> Result<ProductView, QueryError> {
        let category = self.store.get_category(product.category)?;
        let created_by = self.actor_summary(product.created_by)?;
        let updated_by = self.actor_summary(product.updated_by)?;
        Ok(ProductView::compose(product, category, created_by, updated_by))
    }

    fn actor_summary(&self, actor: Option<UserId>) -> Result<Option<ActorSummary>, QueryError> {
        let Some(id) = actor else {
            return Ok(None);
        };
        Ok(self
            .store
            .get_user(id)?
            .map(|user| ActorSummary::new(user.id, user.name, user.email)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::CategoryFilter;
    use chrono::{DateTime, TimeZone, Utc};
    use souq_auth::{NewUser, Role, User};
    use souq_catalog::{NewCategory, NewProduct, ProductSort};
    use souq_core::LocalizedText;
    use souq_store::{MemoryCatalogStore, StoreError, StoreResult};
    use std::sync::Arc;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn electronics(store: &MemoryCatalogStore) -> CategoryId {
        let category = NewCategory {
            name: LocalizedText::new("Electronics", "إلكترونيات"),
            slug: None,
            is_active: None,
        }
        .into_category(CategoryId::new(), at(1))
        .unwrap();
        let id = category.id;
        store.insert_category(category).unwrap();
        id
    }

    fn add_product(
        store: &MemoryCatalogStore,
        name: &str,
        price: f64,
        category: CategoryId,
        secs: i64,
    ) -> ProductId {
        let product = NewProduct {
            name: LocalizedText::new(name, format!("{name} ع")),
            description: LocalizedText::new("desc", "وصف"),
            slug: None,
            price,
            image: "https://example.com/p.jpg".to_string(),
            category,
            is_active: None,
        }
        .into_product(ProductId::new(), UserId::new(), at(secs))
        .unwrap();
        let id = product.id;
        store.insert_product(product).unwrap();
        id
    }

    fn fixture() -> (CatalogQuery<Arc<MemoryCatalogStore>>, Arc<MemoryCatalogStore>, CategoryId) {
        let store = Arc::new(MemoryCatalogStore::new());
        let category = electronics(&store);
        (CatalogQuery::new(Arc::clone(&store)), store, category)
    }

    #[test]
    fn filtered_price_high_page_matches_hand_computation() {
        let (query, store, cat) = fixture();
        add_product(&store, "Ten", 10.0, cat, 10);
        add_product(&store, "Twenty", 20.0, cat, 20);
        add_product(&store, "Thirty", 30.0, cat, 30);

        let request = PageRequest::from_query(
            Some(CategoryFilter {
                lang: Lang::En,
                slug: "electronics".to_string(),
            }),
            Some("1"),
            Some("2"),
            Some("price-high"),
        )
        .unwrap();
        let result = query.list_products(&request).unwrap();

        let prices: Vec<f64> = result.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![30.0, 20.0]);
        assert_eq!(result.count, 2);
        assert_eq!(result.total, 3);
        assert_eq!(result.page, 1);
        assert_eq!(result.pages, 2);
    }

    #[test]
    fn page_past_the_end_is_empty_but_still_counted() {
        let (query, store, cat) = fixture();
        for (i, name) in ["A", "B", "C"].iter().enumerate() {
            add_product(&store, name, 5.0 + i as f64, cat, i as i64);
        }

        let request = PageRequest::from_query(None, Some("5"), Some("10"), Some("newest")).unwrap();
        let result = query.list_products(&request).unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.count, 0);
        assert_eq!(result.total, 3);
        assert_eq!(result.pages, 1);
    }

    #[test]
    fn unresolvable_category_slug_is_terminal() {
        let (query, store, cat) = fixture();
        add_product(&store, "Widget", 9.0, cat, 1);

        let request = PageRequest {
            category: Some(CategoryFilter {
                lang: Lang::En,
                slug: "no-such-category".to_string(),
            }),
            ..Default::default()
        };
        match query.list_products(&request) {
            Err(QueryError::CategoryNotFound) => {}
            other => panic!("expected CategoryNotFound, got {other:?}"),
        }
    }

    #[test]
    fn arabic_slug_filter_resolves_in_its_own_namespace() {
        let (query, store, cat) = fixture();
        add_product(&store, "Widget", 9.0, cat, 1);

        let request = PageRequest {
            category: Some(CategoryFilter {
                lang: Lang::Ar,
                slug: "إلكترونيات".to_string(),
            }),
            ..Default::default()
        };
        let result = query.list_products(&request).unwrap();
        assert_eq!(result.total, 1);

        // The Arabic slug does not exist in the English namespace.
        let wrong_ns = PageRequest {
            category: Some(CategoryFilter {
                lang: Lang::En,
                slug: "إلكترونيات".to_string(),
            }),
            ..Default::default()
        };
        assert!(matches!(
            query.list_products(&wrong_ns),
            Err(QueryError::CategoryNotFound)
        ));
    }

    #[test]
    fn inactive_products_never_appear_in_listings() {
        let (query, store, cat) = fixture();
        add_product(&store, "Visible", 10.0, cat, 1);
        let hidden = NewProduct {
            name: LocalizedText::new("Hidden", "مخفي"),
            description: LocalizedText::new("d", "و"),
            slug: None,
            price: 10.0,
            image: "https://example.com/h.jpg".to_string(),
            category: cat,
            is_active: Some(false),
        }
        .into_product(ProductId::new(), UserId::new(), at(2))
        .unwrap();
        let hidden_id = hidden.id;
        store.insert_product(hidden).unwrap();

        let result = query.list_products(&PageRequest::default()).unwrap();
        assert_eq!(result.total, 1);
        assert!(result.items.iter().all(|p| p.id != hidden_id));
    }

    #[test]
    fn weak_and_snapshot_agree_on_a_quiet_store() {
        let (query, store, cat) = fixture();
        for i in 0..7 {
            add_product(&store, &format!("Item {i}"), i as f64, cat, i);
        }

        let weak = PageRequest {
            page: 2,
            limit: 3,
            sort: ProductSort::PriceLow,
            consistency: ConsistencyMode::Weak,
            ..Default::default()
        };
        let snapshot = PageRequest {
            consistency: ConsistencyMode::Snapshot,
            ..weak.clone()
        };

        assert_eq!(
            query.list_products(&weak).unwrap(),
            query.list_products(&snapshot).unwrap()
        );
    }

    #[test]
    fn price_sorts_reverse_each_other_when_tie_free() {
        let (query, store, cat) = fixture();
        for (i, price) in [3.5, 12.0, 7.25, 99.0, 0.5].iter().enumerate() {
            add_product(&store, &format!("P{i}"), *price, cat, i as i64);
        }

        let ids = |sort: ProductSort| -> Vec<ProductId> {
            let request = PageRequest {
                sort,
                limit: 100,
                ..Default::default()
            };
            query
                .list_products(&request)
                .unwrap()
                .items
                .into_iter()
                .map(|p| p.id)
                .collect()
        };

        let low = ids(ProductSort::PriceLow);
        let mut high = ids(ProductSort::PriceHigh);
        high.reverse();
        assert_eq!(low, high);
    }

    #[test]
    fn views_join_category_and_project_actors_credential_free() {
        let (query, store, cat) = fixture();
        let admin = NewUser {
            name: "Super Admin".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
            is_active: None,
        }
        .into_user(UserId::new(), at(1))
        .unwrap();
        let admin_id = admin.id;
        store.insert_user(admin).unwrap();

        let product = NewProduct {
            name: LocalizedText::new("Laptop", "لابتوب"),
            description: LocalizedText::new("d", "و"),
            slug: None,
            price: 100.0,
            image: "https://example.com/l.jpg".to_string(),
            category: cat,
            is_active: None,
        }
        .into_product(ProductId::new(), admin_id, at(2))
        .unwrap();
        let id = product.id;
        store.insert_product(product).unwrap();

        let view = query.get_by_id(id).unwrap();
        assert_eq!(view.category.as_ref().unwrap().id, cat);
        let actor = view.created_by.as_ref().unwrap();
        assert_eq!(actor.id, admin_id);
        assert_eq!(actor.email, "admin@example.com");
        assert!(view.updated_by.is_none());

        // The serialized actor carries id/name/email and nothing else.
        let json = serde_json::to_value(&view).unwrap();
        let actor_json = json.get("createdBy").unwrap().as_object().unwrap();
        assert_eq!(actor_json.len(), 3);
        assert!(actor_json.get("role").is_none());
    }

    #[test]
    fn slug_read_is_active_only_but_id_read_is_not() {
        let (query, store, cat) = fixture();
        let retired = NewProduct {
            name: LocalizedText::new("Retired", "متقاعد"),
            description: LocalizedText::new("d", "و"),
            slug: None,
            price: 1.0,
            image: "https://example.com/r.jpg".to_string(),
            category: cat,
            is_active: Some(false),
        }
        .into_product(ProductId::new(), UserId::new(), at(1))
        .unwrap();
        let id = retired.id;
        store.insert_product(retired).unwrap();

        assert!(matches!(
            query.get_by_slug(Lang::En, "retired"),
            Err(QueryError::ProductNotFound)
        ));
        let view = query.get_by_id(id).unwrap();
        assert!(!view.is_active);
    }

    #[test]
    fn dangling_category_reference_reads_as_none() {
        let (query, store, _) = fixture();
        // Points at a category that was never stored.
        add_product(&store, "Orphan", 5.0, CategoryId::new(), 1);

        let result = query.list_products(&PageRequest::default()).unwrap();
        assert_eq!(result.count, 1);
        assert!(result.items[0].category.is_none());
    }

    #[test]
    fn list_by_category_ignores_any_slug_filter_on_the_request() {
        let (query, store, electronics_id) = fixture();
        let books = NewCategory {
            name: LocalizedText::new("Books", "كتب"),
            slug: None,
            is_active: None,
        }
        .into_category(CategoryId::new(), at(2))
        .unwrap();
        let books_id = books.id;
        store.insert_category(books).unwrap();

        add_product(&store, "Novel", 12.0, books_id, 3);
        add_product(&store, "Laptop", 900.0, electronics_id, 4);

        let request = PageRequest {
            category: Some(CategoryFilter {
                lang: Lang::En,
                slug: "electronics".to_string(),
            }),
            ..Default::default()
        };
        let result = query.list_by_category(books_id, &request).unwrap();
        assert_eq!(result.category.id, books_id);
        assert_eq!(result.page.total, 1);
        assert_eq!(result.page.items[0].name.en, "Novel");

        assert!(matches!(
            query.list_by_category(CategoryId::new(), &request),
            Err(QueryError::CategoryNotFound)
        ));
    }

    #[test]
    fn active_categories_list_hides_disabled_ones() {
        let (query, store, electronics_id) = fixture();
        let hidden = NewCategory {
            name: LocalizedText::new("Hidden", "مخفي"),
            slug: None,
            is_active: Some(false),
        }
        .into_category(CategoryId::new(), at(2))
        .unwrap();
        store.insert_category(hidden).unwrap();

        let listed = query.list_categories().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, electronics_id);
    }

    /// A store whose every call fails, to prove failures pass through.
    struct OfflineStore;

    fn offline<T>() -> StoreResult<T> {
        Err(StoreError::Backend("backend offline".to_string()))
    }

    impl CategoryStore for OfflineStore {
        fn insert_category(&self, _: Category) -> StoreResult<()> {
            offline()
        }
        fn update_category(&self, _: Category) -> StoreResult<Option<Category>> {
            offline()
        }
        fn delete_category(&self, _: CategoryId) -> StoreResult<Option<Category>> {
            offline()
        }
        fn get_category(&self, _: CategoryId) -> StoreResult<Option<Category>> {
            offline()
        }
        fn find_category_by_slug(&self, _: Lang, _: &str) -> StoreResult<Option<Category>> {
            offline()
        }
        fn list_active_categories(&self) -> StoreResult<Vec<Category>> {
            offline()
        }
    }

    impl ProductStore for OfflineStore {
        fn insert_product(&self, _: Product) -> StoreResult<()> {
            offline()
        }
        fn update_product(&self, _: Product) -> StoreResult<Option<Product>> {
            offline()
        }
        fn delete_product(&self, _: ProductId) -> StoreResult<Option<Product>> {
            offline()
        }
        fn get_product(&self, _: ProductId) -> StoreResult<Option<Product>> {
            offline()
        }
        fn find_product_by_slug(&self, _: Lang, _: &str) -> StoreResult<Option<Product>> {
            offline()
        }
        fn count_products(&self, _: &ProductFilter) -> StoreResult<usize> {
            offline()
        }
        fn find_products(
            &self,
            _: &ProductFilter,
            _: ProductSort,
            _: usize,
            _: usize,
        ) -> StoreResult<Vec<Product>> {
            offline()
        }
        fn find_products_counted(
            &self,
            _: &ProductFilter,
            _: ProductSort,
            _: usize,
            _: usize,
        ) -> StoreResult<(usize, Vec<Product>)> {
            offline()
        }
    }

    impl UserStore for OfflineStore {
        fn insert_user(&self, _: User) -> StoreResult<()> {
            offline()
        }
        fn update_user(&self, _: User) -> StoreResult<Option<User>> {
            offline()
        }
        fn delete_user(&self, _: UserId) -> StoreResult<Option<User>> {
            offline()
        }
        fn get_user(&self, _: UserId) -> StoreResult<Option<User>> {
            offline()
        }
        fn find_user_by_email(&self, _: &str) -> StoreResult<Option<User>> {
            offline()
        }
        fn list_users(&self) -> StoreResult<Vec<User>> {
            offline()
        }
    }

    #[test]
    fn store_failures_surface_instead_of_masking_as_empty() {
        let query = CatalogQuery::new(OfflineStore);
        match query.list_products(&PageRequest::default()) {
            Err(QueryError::Store(StoreError::Backend(_))) => {}
            other => panic!("expected Store error, got {other:?}"),
        }
        assert!(matches!(
            query.get_by_id(ProductId::new()),
            Err(QueryError::Store(_))
        ));
        assert!(matches!(
            query.list_categories(),
            Err(QueryError::Store(_))
        ));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the page window arithmetic holds for every
            /// (total, page, limit) combination.
            #[test]
            fn page_window_arithmetic_holds(
                total in 0usize..36,
                page in 1u32..7,
                limit in 1u32..13,
            ) {
                let store = Arc::new(MemoryCatalogStore::new());
                let cat = electronics(&store);
                for i in 0..total {
                    add_product(&store, &format!("Item {i:02}"), i as f64, cat, i as i64);
                }
                let query = CatalogQuery::new(Arc::clone(&store));

                let request = PageRequest {
                    page,
                    limit,
                    ..Default::default()
                };
                let result = query.list_products(&request).unwrap();

                let skip = (page as usize - 1) * limit as usize;
                let expected = (limit as usize).min(total.saturating_sub(skip));
                prop_assert_eq!(result.items.len(), expected);
                prop_assert_eq!(result.count, result.items.len());
                prop_assert_eq!(result.total, total);
                prop_assert_eq!(result.pages, total.div_ceil(limit as usize) as u32);
            }

            /// Property: both consistency modes return identical pages when
            /// nothing writes in between.
            #[test]
            fn consistency_modes_agree_without_writers(
                total in 0usize..20,
                page in 1u32..4,
                limit in 1u32..8,
            ) {
                let store = Arc::new(MemoryCatalogStore::new());
                let cat = electronics(&store);
                for i in 0..total {
                    add_product(&store, &format!("Item {i:02}"), i as f64, cat, i as i64);
                }
                let query = CatalogQuery::new(Arc::clone(&store));

                let weak = PageRequest {
                    page,
                    limit,
                    consistency: ConsistencyMode::Weak,
                    ..Default::default()
                };
                let snapshot = PageRequest {
                    consistency: ConsistencyMode::Snapshot,
                    ..weak.clone()
                };
                prop_assert_eq!(
                    query.list_products(&weak).unwrap(),
                    query.list_products(&snapshot).unwrap()
                );
            }
        }
    }
}
