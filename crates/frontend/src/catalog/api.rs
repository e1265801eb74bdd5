//! Remote catalog client.
//!
//! Adapts the Platzi fake-store API to the canonical [`Product`] shape.
//! The remote service is authoritative for all non-custom items; this
//! module is the only place its wire format appears.

use contracts::catalog::{Category, Product, ProductPage};
use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

const API_BASE: &str = "https://api.escuelajs.co/api/v1";

/// The remote list endpoint is unpaginated when asked for a total; if even
/// that request fails we assume a fixed catalog size rather than failing
/// the page fetch.
const FALLBACK_TOTAL: usize = 200;

const CATEGORY_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("item {0} not found")]
    NotFound(i64),
    #[error("{0}")]
    RequestFailed(String),
}

// ============================================================================
// Wire shapes
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
struct RemoteCategory {
    id: i64,
    name: String,
    #[serde(default)]
    image: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RemoteProduct {
    id: i64,
    title: String,
    price: f64,
    description: String,
    category: RemoteCategory,
    #[serde(default)]
    images: Vec<String>,
}

/// The remote service carries no discount/rating/stock/brand data, so the
/// canonical shape is filled with the same constants the original client
/// presented. An item without images falls back to its category image.
fn adapt_product(remote: RemoteProduct) -> Product {
    let thumbnail = remote
        .images
        .first()
        .cloned()
        .unwrap_or_else(|| remote.category.image.clone());
    let images = if remote.images.is_empty() {
        vec![remote.category.image.clone()]
    } else {
        remote.images
    };
    Product {
        id: remote.id,
        title: remote.title,
        description: remote.description,
        price: remote.price,
        discount_percentage: 0.0,
        rating: 4.5,
        stock: 100,
        brand: String::new(),
        category: remote.category.name,
        thumbnail,
        images,
    }
}

// ============================================================================
// Requests
// ============================================================================

async fn get_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::RequestFailed(format!("request failed: {e}")))?;

    if !response.ok() {
        return Err(ApiError::RequestFailed(format!(
            "HTTP {}",
            response.status()
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::RequestFailed(format!("bad response: {e}")))
}

/// Fetch one page of the unfiltered listing plus the catalog-wide total.
pub async fn fetch_page(limit: usize, offset: usize) -> Result<ProductPage, ApiError> {
    let url = format!("{API_BASE}/products?offset={offset}&limit={limit}");
    let items: Vec<RemoteProduct> = get_json(&url).await?;

    // The listing endpoint reports no total; count the full collection and
    // fall back to a fixed size if that secondary request fails.
    let total = match get_json::<Vec<RemoteProduct>>(&format!("{API_BASE}/products")).await {
        Ok(all) => all.len(),
        Err(e) => {
            log::warn!("total count request failed, assuming {FALLBACK_TOTAL}: {e}");
            FALLBACK_TOTAL
        }
    };

    Ok(ProductPage {
        items: items.into_iter().map(adapt_product).collect(),
        total,
    })
}

/// Fetch a single item. A 404 becomes [`ApiError::NotFound`].
pub async fn fetch_by_id(id: i64) -> Result<Product, ApiError> {
    let url = format!("{API_BASE}/products/{id}");
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::RequestFailed(format!("request failed: {e}")))?;

    if response.status() == 404 {
        return Err(ApiError::NotFound(id));
    }
    if !response.ok() {
        return Err(ApiError::RequestFailed(format!(
            "HTTP {}",
            response.status()
        )));
    }

    response
        .json::<RemoteProduct>()
        .await
        .map(adapt_product)
        .map_err(|e| ApiError::RequestFailed(format!("bad response: {e}")))
}

/// Title search. The server does not paginate this endpoint.
pub async fn search_by_title(query: &str) -> Result<Vec<Product>, ApiError> {
    let url = format!("{API_BASE}/products?title={}", urlencoding::encode(query));
    let items: Vec<RemoteProduct> = get_json(&url).await?;
    Ok(items.into_iter().map(adapt_product).collect())
}

/// The first few remote categories, with slugs usable in the URL.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let categories: Vec<RemoteCategory> = get_json(&format!("{API_BASE}/categories")).await?;
    Ok(categories
        .into_iter()
        .take(CATEGORY_LIMIT)
        .map(|c| Category::new(c.id, c.name))
        .collect())
}

/// Map a URL slug back to the remote category id it names, comparing by
/// canonical slug so multi-word names resolve too.
fn resolve_category_id(categories: &[RemoteCategory], slug: &str) -> Option<i64> {
    categories
        .iter()
        .find(|c| Category::slug_of(&c.name).eq_ignore_ascii_case(slug))
        .map(|c| c.id)
}

/// All items in the category named by `slug`. A slug that resolves to no
/// remote category yields an empty list, not an error.
pub async fn fetch_by_category(slug: &str) -> Result<Vec<Product>, ApiError> {
    let categories: Vec<RemoteCategory> = get_json(&format!("{API_BASE}/categories")).await?;
    let Some(category_id) = resolve_category_id(&categories, slug) else {
        return Ok(Vec::new());
    };

    let url = format!("{API_BASE}/products/?categoryId={category_id}");
    let items: Vec<RemoteProduct> = get_json(&url).await?;
    Ok(items.into_iter().map(adapt_product).collect())
}

/// Remote soft delete. Succeeds only on a 2xx acknowledgement.
pub async fn delete_by_id(id: i64) -> Result<(), ApiError> {
    let url = format!("{API_BASE}/products/{id}");
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| ApiError::RequestFailed(format!("request failed: {e}")))?;

    if !response.ok() {
        return Err(ApiError::RequestFailed(format!(
            "HTTP {}",
            response.status()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_fixture(images: &[&str]) -> RemoteProduct {
        serde_json::from_str(&format!(
            r#"{{
                "id": 42,
                "title": "Canvas Tote",
                "price": 19.0,
                "description": "Roomy bag",
                "category": {{"id": 2, "name": "Bags", "image": "https://img.example/bags.png"}},
                "images": [{}]
            }}"#,
            images
                .iter()
                .map(|i| format!("\"{i}\""))
                .collect::<Vec<_>>()
                .join(",")
        ))
        .unwrap()
    }

    #[test]
    fn adapt_fills_constants_and_keeps_images() {
        let product = adapt_product(remote_fixture(&["https://img.example/tote-1.png"]));
        assert_eq!(product.id, 42);
        assert_eq!(product.category, "Bags");
        assert_eq!(product.rating, 4.5);
        assert_eq!(product.stock, 100);
        assert_eq!(product.discount_percentage, 0.0);
        assert_eq!(product.brand, "");
        assert_eq!(product.thumbnail, "https://img.example/tote-1.png");
        assert_eq!(product.images.len(), 1);
    }

    #[test]
    fn adapt_falls_back_to_category_image() {
        let product = adapt_product(remote_fixture(&[]));
        assert_eq!(product.thumbnail, "https://img.example/bags.png");
        assert_eq!(product.images, vec!["https://img.example/bags.png"]);
    }

    #[test]
    fn category_slug_resolution_handles_multiword_names() {
        let categories = vec![
            RemoteCategory {
                id: 1,
                name: "Shoes".to_string(),
                image: String::new(),
            },
            RemoteCategory {
                id: 2,
                name: "Living Room".to_string(),
                image: String::new(),
            },
        ];
        assert_eq!(resolve_category_id(&categories, "shoes"), Some(1));
        assert_eq!(resolve_category_id(&categories, "living-room"), Some(2));
        assert_eq!(resolve_category_id(&categories, "LIVING-ROOM"), Some(2));
        // an unknown slug is not an error, just no match
        assert_eq!(resolve_category_id(&categories, "garden"), None);
    }

    #[test]
    fn missing_images_key_is_tolerated() {
        let remote: RemoteProduct = serde_json::from_str(
            r#"{
                "id": 1, "title": "X", "price": 1.0, "description": "d",
                "category": {"id": 1, "name": "Misc", "image": "https://img.example/m.png"}
            }"#,
        )
        .unwrap();
        assert!(remote.images.is_empty());
    }
}
