use contracts::catalog::CreateProductInput;

/// Per-field validation messages for the product form. Empty means valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub thumbnail: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.brand.is_none()
            && self.thumbnail.is_none()
    }
}

pub fn validate(input: &CreateProductInput) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let title = input.title.trim();
    if title.chars().count() < 3 {
        errors.title = Some("Title must be at least 3 characters".to_string());
    } else if title.chars().count() > 100 {
        errors.title = Some("Title must be at most 100 characters".to_string());
    }

    if input.description.trim().chars().count() < 10 {
        errors.description = Some("Description must be at least 10 characters".to_string());
    }

    if !input.price.is_finite() || input.price <= 0.0 {
        errors.price = Some("Price must be greater than zero".to_string());
    }

    if input.category.trim().chars().count() < 2 {
        errors.category = Some("Category must be at least 2 characters".to_string());
    }

    if input.brand.trim().chars().count() < 2 {
        errors.brand = Some("Brand must be at least 2 characters".to_string());
    }

    let thumbnail = input.thumbnail.trim();
    if !(thumbnail.starts_with("http://") || thumbnail.starts_with("https://")) {
        errors.thumbnail = Some("Image URL must start with http:// or https://".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CreateProductInput {
        CreateProductInput {
            title: "Trail Shoes".to_string(),
            description: "Lightweight shoes for rocky terrain".to_string(),
            price: 89.5,
            category: "shoes".to_string(),
            brand: "Acme".to_string(),
            thumbnail: "https://example.com/shoes.jpg".to_string(),
        }
    }

    #[test]
    fn accepts_valid_input() {
        assert!(validate(&valid_input()).is_empty());
    }

    #[test]
    fn rejects_short_title() {
        let mut input = valid_input();
        input.title = "ab".to_string();
        assert!(validate(&input).title.is_some());
    }

    #[test]
    fn rejects_overlong_title() {
        let mut input = valid_input();
        input.title = "x".repeat(101);
        assert!(validate(&input).title.is_some());
    }

    #[test]
    fn title_length_counts_trimmed_chars() {
        let mut input = valid_input();
        input.title = "  ab  ".to_string();
        assert!(validate(&input).title.is_some());
    }

    #[test]
    fn rejects_short_description() {
        let mut input = valid_input();
        input.description = "ten chars!".to_string();
        assert!(validate(&input).description.is_none());
        input.description = "short".to_string();
        assert!(validate(&input).description.is_some());
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut input = valid_input();
        input.price = 0.0;
        assert!(validate(&input).price.is_some());
        input.price = -5.0;
        assert!(validate(&input).price.is_some());
        input.price = f64::NAN;
        assert!(validate(&input).price.is_some());
    }

    #[test]
    fn rejects_non_http_thumbnail() {
        let mut input = valid_input();
        input.thumbnail = "ftp://example.com/a.jpg".to_string();
        assert!(validate(&input).thumbnail.is_some());
        input.thumbnail = "example.com/a.jpg".to_string();
        assert!(validate(&input).thumbnail.is_some());
        input.thumbnail = "http://example.com/a.jpg".to_string();
        assert!(validate(&input).thumbnail.is_none());
    }

    #[test]
    fn collects_multiple_errors() {
        let input = CreateProductInput {
            title: String::new(),
            description: String::new(),
            price: 0.0,
            category: String::new(),
            brand: String::new(),
            thumbnail: String::new(),
        };
        let errors = validate(&input);
        assert!(errors.title.is_some());
        assert!(errors.description.is_some());
        assert!(errors.price.is_some());
        assert!(errors.category.is_some());
        assert!(errors.brand.is_some());
        assert!(errors.thumbnail.is_some());
    }
}
