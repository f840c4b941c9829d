use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_BASE_URL: &str = "https://loja.infinitepay.io/alex-santos-549/";
pub const DEFAULT_FALLBACK_SLUG: &str = "vgf8152-vst-stage";

/// Product id → storefront slug, as published on the store.
const DEFAULT_PRODUCTS: [(&str, &str); 5] = [
    ("infinity-pads", "infinity-pads-39"),
    ("infinity-mix", "infinity-mix-89"),
    ("abba-keys", "abba-keys-220"),
    ("vst-stage", "vgf8152-vst-stage"),
    ("curso-reaper", "curso-reaper-15"),
];

/// Storefront configuration used by the redirect step.
///
/// Constructed once at startup and handed to whoever performs redirects.
/// Every field has a default, so a partial JSON override only needs the
/// keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_products")]
    pub products: BTreeMap<String, String>,
    #[serde(default = "default_fallback_slug")]
    pub fallback_slug: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_products() -> BTreeMap<String, String> {
    DEFAULT_PRODUCTS
        .iter()
        .map(|(id, slug)| (id.to_string(), slug.to_string()))
        .collect()
}

fn default_fallback_slug() -> String {
    DEFAULT_FALLBACK_SLUG.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            products: default_products(),
            fallback_slug: default_fallback_slug(),
        }
    }
}

/// Whether the product id was found in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Product,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub url: String,
    pub target: RedirectTarget,
}

impl Redirect {
    /// Toast text shown while the store tab opens.
    pub fn notice(&self) -> &'static str {
        match self.target {
            RedirectTarget::Product => "Redirecionando para pagamento seguro...",
            RedirectTarget::Fallback => "Redirecionando para nossa loja...",
        }
    }
}

impl StoreConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("invalid store config JSON")
    }

    pub fn slug_for(&self, product_id: &str) -> Option<&str> {
        self.products.get(product_id).map(String::as_str)
    }

    /// Unknown ids degrade to the fallback slug; this never fails.
    pub fn resolve(&self, product_id: &str) -> Redirect {
        match self.slug_for(product_id) {
            Some(slug) => Redirect {
                url: format!("{}{}", self.base_url, slug),
                target: RedirectTarget::Product,
            },
            None => Redirect {
                url: format!("{}{}", self.base_url, self.fallback_slug),
                target: RedirectTarget::Fallback,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    /// Sold through the external store (`buy-btn`).
    Paid,
    /// Handed out for free (`download-btn`).
    Free,
}

/// A card in the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductListing {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Display price in BRL, empty for free products.
    pub price: &'static str,
    pub image: &'static str,
    pub kind: ProductKind,
}

pub const PRODUCT_LISTINGS: [ProductListing; 6] = [
    ProductListing {
        id: "infinity-pads",
        name: "Infinity Pads",
        description: "Pads atmosféricos infinitos para worship, ambient e trilhas.",
        price: "39",
        image: "images/infinity-pads.jpg",
        kind: ProductKind::Paid,
    },
    ProductListing {
        id: "infinity-mix",
        name: "Infinity Mix",
        description: "Cadeia de mixagem pronta para voz e instrumentos.",
        price: "89",
        image: "images/infinity-mix.jpg",
        kind: ProductKind::Paid,
    },
    ProductListing {
        id: "abba-keys",
        name: "ABBA Keys",
        description: "Biblioteca de teclados com timbres clássicos e modernos.",
        price: "220",
        image: "images/abba-keys.jpg",
        kind: ProductKind::Paid,
    },
    ProductListing {
        id: "vst-stage",
        name: "VST Stage",
        description: "Rack ao vivo com presets organizados para o palco.",
        price: "152",
        image: "images/vst-stage.jpg",
        kind: ProductKind::Paid,
    },
    ProductListing {
        id: "curso-reaper",
        name: "Curso Reaper",
        description: "Do zero à mixagem no REAPER, passo a passo.",
        price: "15",
        image: "images/curso-reaper.jpg",
        kind: ProductKind::Paid,
    },
    ProductListing {
        id: "free-pack",
        name: "Starter Pack",
        description: "Presets gratuitos para começar a produzir hoje.",
        price: "",
        image: "images/free-pack.jpg",
        kind: ProductKind::Free,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_products_resolve_to_their_slug() {
        let config = StoreConfig::default();
        for (id, slug) in DEFAULT_PRODUCTS {
            let redirect = config.resolve(id);
            assert_eq!(redirect.url, format!("{}{}", DEFAULT_BASE_URL, slug));
            assert_eq!(redirect.target, RedirectTarget::Product);
        }
    }

    #[test]
    fn test_unknown_product_falls_back() {
        let config = StoreConfig::default();
        for id in ["", "free-pack", "INFINITY-PADS", "nope"] {
            let redirect = config.resolve(id);
            assert_eq!(
                redirect.url,
                "https://loja.infinitepay.io/alex-santos-549/vgf8152-vst-stage"
            );
            assert_eq!(redirect.target, RedirectTarget::Fallback);
            assert_eq!(redirect.notice(), "Redirecionando para nossa loja...");
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = StoreConfig::from_json(r#"{"baseUrl":"https://example.test/"}"#).unwrap();
        assert_eq!(config.base_url, "https://example.test/");
        assert_eq!(config.products.len(), 5);
        assert_eq!(
            config.resolve("abba-keys").url,
            "https://example.test/abba-keys-220"
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(StoreConfig::from_json("{not json").is_err());
        assert!(StoreConfig::from_json(r#"{"products": 3}"#).is_err());
    }

    #[test]
    fn test_every_paid_listing_is_in_the_catalog() {
        let config = StoreConfig::default();
        for listing in PRODUCT_LISTINGS.iter() {
            if listing.kind == ProductKind::Paid {
                assert!(config.slug_for(listing.id).is_some(), "{}", listing.id);
            }
        }
    }
}
