//! Demo fixture for local development and black-box tests.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use souq_auth::{Role, User};
use souq_catalog::{Category, Product};
use souq_core::{CategoryId, LocalizedText, ProductId, UserId};
use souq_store::{CategoryStore, ProductStore, StoreResult, UserStore};

/// Fixed id for the seeded admin, so dev tokens can be minted against a
/// known subject.
pub fn demo_admin_id() -> UserId {
    UserId::from_uuid(Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0001))
}

/// Seed one admin account, three categories, and a handful of products.
/// Timestamps are staggered so sort orders are deterministic.
pub fn seed_demo_data<S>(store: &S) -> StoreResult<()>
where
    S: CategoryStore + ProductStore + UserStore,
{
    let base = Utc::now() - Duration::hours(1);

    store.insert_user(User {
        id: demo_admin_id(),
        name: "Super Admin".to_string(),
        email: "admin@example.com".to_string(),
        role: Role::Admin,
        is_active: true,
        created_at: base,
        updated_at: base,
    })?;

    let electronics = category("Electronics", "إلكترونيات", "electronics", "الكترونيات", base);
    let clothing = category("Clothing", "ملابس", "clothing", "ملابس", base);
    let books = category("Books", "كتب", "books", "كتب", base);

    store.insert_category(electronics.clone())?;
    store.insert_category(clothing.clone())?;
    store.insert_category(books.clone())?;

    let demo = [
        product(
            ("Laptop Pro 15", "لابتوب برو 15"),
            (
                "15-inch laptop with a fast SSD and all-day battery",
                "لابتوب 15 انش مع قرص سريع وبطارية تدوم طوال اليوم",
            ),
            ("laptop-pro-15", "لابتوب-برو-15"),
            1299.99,
            electronics.id,
        ),
        product(
            ("Wireless Headphones", "سماعات لاسلكية"),
            (
                "Over-ear headphones with active noise cancelling",
                "سماعات فوق الأذن مع خاصية عزل الضوضاء",
            ),
            ("wireless-headphones", "سماعات-لاسلكية"),
            249.99,
            electronics.id,
        ),
        product(
            ("Smart Watch", "ساعة ذكية"),
            (
                "Fitness tracking and notifications on your wrist",
                "تتبع اللياقة والإشعارات على معصمك",
            ),
            ("smart-watch", "ساعة-ذكية"),
            399.99,
            electronics.id,
        ),
        product(
            ("Cotton T-Shirt", "قميص قطني"),
            (
                "Plain crew-neck t-shirt in 100% cotton",
                "قميص بياقة دائرية من القطن الخالص",
            ),
            ("cotton-t-shirt", "قميص-قطني"),
            29.99,
            clothing.id,
        ),
        product(
            ("Denim Jeans", "جينز"),
            (
                "Straight-cut jeans in classic indigo",
                "بنطال جينز بقصة مستقيمة بلون نيلي كلاسيكي",
            ),
            ("denim-jeans", "جينز"),
            79.99,
            clothing.id,
        ),
        product(
            ("JavaScript: The Good Parts", "جافا سكريبت: الأجزاء الجيدة"),
            (
                "A concise tour of the language's best ideas",
                "جولة موجزة في أفضل أفكار اللغة",
            ),
            ("javascript-good-parts", "جافا-سكريبت-الأجزاء-الجيدة"),
            34.99,
            books.id,
        ),
        product(
            ("Clean Code", "كود نظيف"),
            (
                "A handbook of agile software craftsmanship",
                "دليل حرفية البرمجيات الرشيقة",
            ),
            ("clean-code", "كود-نظيف"),
            42.99,
            books.id,
        ),
    ];

    for (i, mut item) in demo.into_iter().enumerate() {
        let created_at = base + Duration::seconds(i as i64 + 1);
        item.created_at = created_at;
        item.updated_at = created_at;
        store.insert_product(item)?;
    }

    tracing::info!("demo data seeded");
    Ok(())
}

fn category(
    en: &str,
    ar: &str,
    slug_en: &str,
    slug_ar: &str,
    now: DateTime<Utc>,
) -> Category {
    Category {
        id: CategoryId::new(),
        name: LocalizedText::new(en, ar),
        slug: LocalizedText::new(slug_en, slug_ar),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

fn product(
    name: (&str, &str),
    description: (&str, &str),
    slug: (&str, &str),
    price: f64,
    category: CategoryId,
) -> Product {
    let now = Utc::now();
    Product {
        id: ProductId::new(),
        name: LocalizedText::new(name.0, name.1),
        description: LocalizedText::new(description.0, description.1),
        slug: LocalizedText::new(slug.0, slug.1),
        price,
        image: format!("https://placehold.co/600x400?text={}", slug.0),
        category,
        is_active: true,
        created_by: Some(demo_admin_id()),
        updated_by: None,
        created_at: now,
        updated_at: now,
    }
}
