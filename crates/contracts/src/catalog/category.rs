use serde::{Deserialize, Serialize};

/// A remote catalog category. The slug is the shareable identifier used in
/// the URL and in the store's filter state; the numeric id is only needed
/// when talking to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = Self::slug_of(&name);
        Self { id, name, slug }
    }

    /// Canonical slug for a category name: lowercased, runs of whitespace
    /// collapsed to a single hyphen.
    pub fn slug_of(name: &str) -> String {
        name.to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    pub fn matches_slug(&self, slug: &str) -> bool {
        self.slug.eq_ignore_ascii_case(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(Category::slug_of("Living Room"), "living-room");
        assert_eq!(Category::slug_of("Shoes"), "shoes");
        assert_eq!(Category::slug_of("  Home   Office "), "home-office");
    }

    #[test]
    fn matches_slug_is_case_insensitive() {
        let cat = Category::new(4, "Living Room");
        assert!(cat.matches_slug("living-room"));
        assert!(cat.matches_slug("LIVING-ROOM"));
        assert!(!cat.matches_slug("living"));
    }
}
