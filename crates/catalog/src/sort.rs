//! Sort orders for product listings.

use serde::{Deserialize, Serialize};

/// Comparator selection for product listings.
///
/// Name ordering compares the English name; price ordering uses total
/// ordering so listings stay stable even with unusual float values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSort {
    #[default]
    Newest,
    Oldest,
    PriceLow,
    PriceHigh,
    NameAsc,
    NameDesc,
}

impl ProductSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSort::Newest => "newest",
            ProductSort::Oldest => "oldest",
            ProductSort::PriceLow => "price-low",
            ProductSort::PriceHigh => "price-high",
            ProductSort::NameAsc => "name-asc",
            ProductSort::NameDesc => "name-desc",
        }
    }

    /// Parse a query-string token. Unrecognized tokens fall back to `Newest`
    /// rather than failing the request.
    pub fn parse_or_default(token: &str) -> Self {
        match token {
            "newest" => ProductSort::Newest,
            "oldest" => ProductSort::Oldest,
            "price-low" => ProductSort::PriceLow,
            "price-high" => ProductSort::PriceHigh,
            "name-asc" => ProductSort::NameAsc,
            "name-desc" => ProductSort::NameDesc,
            _ => ProductSort::Newest,
        }
    }
}

impl std::fmt::Display for ProductSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
