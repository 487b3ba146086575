//! # Product Catalog
//!
//! The static, read-only list of products the storefront renders. The shop
//! store only ever uses a product's `id` as a key; everything else here
//! serves the product grid.
//!
//! ## Grid Filtering
//! ```text
//! ?q=Mint&cat=capsules
//!      │
//!      ▼
//! CatalogFilter { query: "mint", category: Some("capsules") }
//!      │
//!      ▼
//! keep p where (query empty  OR  query ⊂ lower(name | description | any tag))
//!          AND (no category  OR  p.category == category)
//! ```
//! Catalog order is preserved.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::validation::validate_product_id;

// =============================================================================
// Product
// =============================================================================

/// Stock state shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Availability {
    InStock,
    ComingSoon,
    Limited,
}

/// Corner badge of a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    New,
    Limited,
    ComingSoon,
}

impl Badge {
    /// Storefront label (the shop is Spanish-language).
    pub fn label(&self) -> &'static str {
        match self {
            Badge::New => "Nuevo",
            Badge::Limited => "Limitado",
            Badge::ComingSoon => "Próximamente",
        }
    }
}

/// A product record as supplied by the catalog source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub btc_price: f64,
    pub eth_price: f64,
    pub dosage_mg: u32,
    pub description: String,
    pub category: String,
    pub flavor: Option<String>,
    pub availability: Availability,
    pub is_new: bool,
    pub image: String,
    pub partner: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Badge to display, if any. "New" wins over stock state.
    pub fn badge(&self) -> Option<Badge> {
        if self.is_new {
            return Some(Badge::New);
        }

        match self.availability {
            Availability::Limited => Some(Badge::Limited),
            Availability::ComingSoon => Some(Badge::ComingSoon),
            Availability::InStock => None,
        }
    }

    /// Whether the card shows crypto prices instead of a placeholder.
    pub fn shows_prices(&self) -> bool {
        self.btc_price > 0.0 || self.eth_price > 0.0
    }

    /// Text of the price chip: both prices to four decimals, or a placeholder.
    pub fn price_label(&self) -> String {
        if self.shows_prices() {
            format!("₿ {:.4} • Ξ {:.4}", self.btc_price, self.eth_price)
        } else if self.availability == Availability::Limited {
            "Solo premium".to_string()
        } else {
            "Próximamente".to_string()
        }
    }

    fn matches_query(&self, query: &str) -> bool {
        query.is_empty()
            || self.name.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(query))
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Search/category predicate driven by the `q` and `cat` query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Lower-cased, trimmed search text. Empty matches everything.
    query: String,
    /// Exact category, `None` matches everything.
    category: Option<String>,
}

impl CatalogFilter {
    pub fn new(query: &str, category: Option<&str>) -> Self {
        CatalogFilter {
            query: query.trim().to_lowercase(),
            category: category.filter(|c| !c.is_empty()).map(str::to_string),
        }
    }

    /// Builds a filter from decoded query-string pairs.
    ///
    /// Unknown parameters are ignored; for repeated keys the first wins.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query: Option<String> = None;
        let mut category: Option<String> = None;

        for (key, value) in pairs {
            match key.as_ref() {
                "q" if query.is_none() => query = Some(value.as_ref().to_string()),
                "cat" if category.is_none() => category = Some(value.as_ref().to_string()),
                _ => {}
            }
        }

        CatalogFilter::new(query.as_deref().unwrap_or(""), category.as_deref())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn matches(&self, product: &Product) -> bool {
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |c| product.category == c);

        matches_category && product.matches_query(&self.query)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered, read-only product list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wraps a product list, rejecting empty or duplicate ids.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        {
            let mut seen = HashSet::with_capacity(products.len());
            for product in &products {
                validate_product_id(&product.id)?;
                if !seen.insert(product.id.as_str()) {
                    return Err(ValidationError::Duplicate {
                        field: "product id".to_string(),
                        value: product.id.clone(),
                    }
                    .into());
                }
            }
        }

        Ok(Catalog { products })
    }

    /// Parses a JSON array of product records.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json).map_err(CoreError::CatalogFormat)?;
        Catalog::new(products)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products passing `filter`, in catalog order.
    pub fn filter<'a>(&'a self, filter: &'a CatalogFilter) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |p| filter.matches(p))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
