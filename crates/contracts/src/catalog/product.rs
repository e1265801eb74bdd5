use serde::{Deserialize, Serialize};

// ============================================================================
// Canonical item shape
// ============================================================================

/// Canonical catalog item as the UI sees it, independent of the remote
/// service's wire shape. Negative ids denote locally created items,
/// non-negative ids come from the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    pub brand: String,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
}

/// A `Product` augmented with per-user view state. Only the custom subset
/// is ever persisted; `liked` is re-derived from the liked-id set whenever
/// that set changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub is_custom: bool,
}

impl ProductView {
    pub fn remote(product: Product, liked: bool) -> Self {
        Self {
            product,
            liked,
            is_custom: false,
        }
    }

    pub fn id(&self) -> i64 {
        self.product.id
    }
}

// ============================================================================
// Create / update inputs
// ============================================================================

/// User-supplied fields for a locally created item. Validation happens at
/// the form boundary; by the time this reaches the store it is well formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
    pub thumbnail: String,
}

impl CreateProductInput {
    /// Materialize a custom item under the given (negative) id.
    /// Rating, stock and discount start at zero; the image list is seeded
    /// from the thumbnail.
    pub fn into_view(self, id: i64) -> ProductView {
        ProductView {
            product: Product {
                id,
                title: self.title,
                description: self.description,
                price: self.price,
                discount_percentage: 0.0,
                rating: 0.0,
                stock: 0,
                brand: self.brand,
                category: self.category,
                thumbnail: self.thumbnail.clone(),
                images: vec![self.thumbnail],
            },
            liked: false,
            is_custom: true,
        }
    }
}

/// Partial update for a custom item. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub thumbnail: Option<String>,
}

impl ProductPatch {
    pub fn apply(&self, view: &mut ProductView) {
        let p = &mut view.product;
        if let Some(title) = &self.title {
            p.title = title.clone();
        }
        if let Some(description) = &self.description {
            p.description = description.clone();
        }
        if let Some(price) = self.price {
            p.price = price;
        }
        if let Some(category) = &self.category {
            p.category = category.clone();
        }
        if let Some(brand) = &self.brand {
            p.brand = brand.clone();
        }
        if let Some(thumbnail) = &self.thumbnail {
            p.thumbnail = thumbnail.clone();
        }
    }
}

impl From<CreateProductInput> for ProductPatch {
    fn from(input: CreateProductInput) -> Self {
        Self {
            title: Some(input.title),
            description: Some(input.description),
            price: Some(input.price),
            category: Some(input.category),
            brand: Some(input.brand),
            thumbnail: Some(input.thumbnail),
        }
    }
}

// ============================================================================
// Listing responses
// ============================================================================

/// One page worth of remote items plus the server-reported total for the
/// active query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> CreateProductInput {
        CreateProductInput {
            title: "Walnut desk".to_string(),
            description: "A sturdy desk made of walnut".to_string(),
            price: 249.5,
            category: "furniture".to_string(),
            brand: "Heimwerk".to_string(),
            thumbnail: "https://example.com/desk.png".to_string(),
        }
    }

    #[test]
    fn into_view_zeroes_derived_fields_and_seeds_images() {
        let view = sample_input().into_view(-3);
        assert_eq!(view.id(), -3);
        assert!(view.is_custom);
        assert!(!view.liked);
        assert_eq!(view.product.rating, 0.0);
        assert_eq!(view.product.stock, 0);
        assert_eq!(view.product.discount_percentage, 0.0);
        assert_eq!(view.product.images, vec!["https://example.com/desk.png"]);
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut view = sample_input().into_view(-1);
        let patch = ProductPatch {
            title: Some("Oak desk".to_string()),
            price: Some(199.0),
            ..Default::default()
        };
        patch.apply(&mut view);
        assert_eq!(view.product.title, "Oak desk");
        assert_eq!(view.product.price, 199.0);
        // untouched fields survive
        assert_eq!(view.product.brand, "Heimwerk");
        assert_eq!(view.product.description, "A sturdy desk made of walnut");
    }

    #[test]
    fn view_serializes_with_camel_case_wire_names() {
        let view = sample_input().into_view(-1);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["discountPercentage"], 0.0);
        assert_eq!(json["isCustom"], true);
        assert_eq!(json["id"], -1);
    }

    #[test]
    fn view_deserializes_with_defaulted_flags() {
        // Shape as stored by an older client: no liked/isCustom keys.
        let json = r#"{
            "id": 7, "title": "Mug", "description": "Ceramic mug",
            "price": 9.5, "discountPercentage": 0.0, "rating": 4.5,
            "stock": 100, "brand": "", "category": "kitchen",
            "thumbnail": "https://example.com/mug.png",
            "images": ["https://example.com/mug.png"]
        }"#;
        let view: ProductView = serde_json::from_str(json).unwrap();
        assert!(!view.liked);
        assert!(!view.is_custom);
        assert_eq!(view.product.stock, 100);
    }
}
