//! Static catalog and shop identity handlers.
//!
//! The product catalog is a fixed list of categories; stock and pricing are
//! handled over the counter, so there is nothing dynamic to store.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// One product category tile on the storefront.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCategory {
    pub key: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
}

/// The categories the shop trades in. Keys are stable: the frontend uses
/// them for category icons and filter links.
const CATEGORIES: &[ProductCategory] = &[
    ProductCategory {
        key: "tmt",
        name: "Rod / TMT",
        desc: "Daily rates, wholesale bundles",
    },
    ProductCategory {
        key: "cement",
        name: "Cement",
        desc: "OPC and PPC grades, all major brands",
    },
    ProductCategory {
        key: "bricks",
        name: "Bricks",
        desc: "First-class, picked and stacked",
    },
    ProductCategory {
        key: "sand",
        name: "Sand & Stone",
        desc: "Clean river sand, stone chips",
    },
    ProductCategory {
        key: "paint",
        name: "Paint",
        desc: "Interior and exterior shades, putty, primer",
    },
    ProductCategory {
        key: "electrical",
        name: "Electrical",
        desc: "Cables, switches, lighting",
    },
    ProductCategory {
        key: "plumbing",
        name: "Water Line",
        desc: "Pipes, fittings, tanks",
    },
];

/// Response for the category listing.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub categories: &'static [ProductCategory],
}

/// Shop identity as served to the frontend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub shop_name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub hours: String,
}

/// List the product categories.
///
/// GET /api/products
pub async fn products() -> Json<ProductsResponse> {
    Json(ProductsResponse {
        categories: CATEGORIES,
    })
}

/// Shop identity for the frontend header, footer, and call buttons.
///
/// GET /api/config
pub async fn site_config(State(state): State<AppState>) -> Json<SiteConfig> {
    let shop = &state.config().shop;
    Json(SiteConfig {
        shop_name: shop.name.clone(),
        tagline: shop.tagline.clone(),
        address: shop.address.clone(),
        phone: shop.phone.clone(),
        hours: shop.hours.clone(),
    })
}
