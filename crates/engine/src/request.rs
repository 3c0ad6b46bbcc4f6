//! Query inputs: paging, sorting, filtering, consistency.

use souq_catalog::ProductSort;
use souq_core::{DomainError, DomainResult, Lang};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Optional category constraint on a listing: a slug within one language's
/// slug namespace. Both parts always travel together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    pub lang: Lang,
    pub slug: String,
}

/// How the count and the page slice relate to each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsistencyMode {
    /// Count and fetch are two independent store calls; totals may drift
    /// from the page under concurrent writes.
    #[default]
    Weak,
    /// One store call returns count and page from the same view of the data.
    Snapshot,
}

/// A listing request, normally built through [`PageRequest::from_query`].
/// Fields are public, so hand-built values skip that validation; the paging
/// arithmetic stays total over them regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub category: Option<CategoryFilter>,
    pub page: u32,
    pub limit: u32,
    pub sort: ProductSort,
    pub consistency: ConsistencyMode,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            category: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: ProductSort::default(),
            consistency: ConsistencyMode::default(),
        }
    }
}

impl PageRequest {
    /// Build a request from raw query-string values.
    ///
    /// Missing values take defaults. Non-numeric or non-positive page/limit
    /// are rejected rather than coerced; limits above [`MAX_LIMIT`] clamp.
    /// Unrecognized sort tokens fall back to the default order.
    pub fn from_query(
        category: Option<CategoryFilter>,
        page: Option<&str>,
        limit: Option<&str>,
        sort: Option<&str>,
    ) -> DomainResult<Self> {
        Ok(Self {
            category,
            page: parse_page(page)?,
            limit: parse_limit(limit)?,
            sort: sort.map(ProductSort::parse_or_default).unwrap_or_default(),
            consistency: ConsistencyMode::default(),
        })
    }

    /// Documents to pass over before this page starts. A page below 1
    /// counts as the first page.
    pub fn skip(&self) -> usize {
        (self.page as usize).saturating_sub(1) * self.limit as usize
    }
}

fn parse_page(raw: Option<&str>) -> DomainResult<u32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PAGE);
    };
    match raw.trim().parse::<u32>() {
        Ok(page) if page > 0 => Ok(page),
        _ => Err(DomainError::validation("page must be a positive integer")),
    }
}

fn parse_limit(raw: Option<&str>) -> DomainResult<u32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LIMIT);
    };
    match raw.trim().parse::<u32>() {
        Ok(limit) if limit > 0 => Ok(limit.min(MAX_LIMIT)),
        _ => Err(DomainError::validation("limit must be a positive integer")),
    }
}
