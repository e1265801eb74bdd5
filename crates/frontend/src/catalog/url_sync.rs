//! Two-way binding between the shareable query parameters and the store's
//! filter/pagination state.
//!
//! Both directions are pure functions ([`parse_query`] / [`render_query`])
//! plus thin effects. Loop prevention: the inbound effect applies only
//! differing values, and the outbound effect writes the location only when
//! the rendered query string actually differs from the current one, via
//! `history.replaceState` so no history entry is created.

use std::collections::HashMap;

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

use super::store::CatalogStore;

/// The URL-visible slice of filter state. Field order is the serialization
/// order of the query string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterQuery {
    #[serde(skip_serializing_if = "is_first_page")]
    pub page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub liked: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self {
            page: 1,
            category: None,
            liked: false,
            search: String::new(),
        }
    }
}

fn is_first_page(page: &usize) -> bool {
    *page == 1
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Parse a location's query string. Absent or malformed parameters fall
/// back to their defaults; `liked` recognizes the literal "true" only.
pub fn parse_query(search: &str) -> FilterQuery {
    let raw = search.trim_start_matches('?');
    let params: HashMap<String, String> = serde_qs::from_str(raw).unwrap_or_default();

    FilterQuery {
        page: params
            .get("page")
            .and_then(|p| p.parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1),
        category: params.get("category").cloned().filter(|c| !c.is_empty()),
        liked: params.get("liked").map(|v| v == "true").unwrap_or(false),
        search: params.get("search").cloned().unwrap_or_default(),
    }
}

/// Render the query string, omitting every parameter that still holds its
/// default (page 1, no category, liked off, empty search).
pub fn render_query(query: &FilterQuery) -> String {
    serde_qs::to_string(query).unwrap_or_default()
}

/// The exact value to compare against `location.search`: empty for an
/// all-default filter, otherwise `?`-prefixed.
pub fn target_search(query: &FilterQuery) -> String {
    let qs = render_query(query);
    if qs.is_empty() {
        qs
    } else {
        format!("?{qs}")
    }
}

fn current_filter(store: &CatalogStore) -> FilterQuery {
    FilterQuery {
        page: store.current_page.get_untracked(),
        category: store.active_category.get_untracked(),
        liked: store.liked_only.get_untracked(),
        search: store.search_text.get_untracked(),
    }
}

/// Install both sync directions for the products page.
pub fn use_url_sync(store: CatalogStore) {
    let location = leptos_router::hooks::use_location();
    // Flips to true once the first inbound pass has issued its data load;
    // outbound writes are suppressed until then.
    let synced_once = StoredValue::new(false);

    // Inbound: location -> state, plus exactly one data load per change.
    Effect::new(move |_| {
        let query = parse_query(&location.search.get());
        let first_load = !synced_once.get_value();
        let state = current_filter(&store);

        if !first_load && query == state {
            return;
        }

        if query.liked != state.liked {
            store.set_liked_only(query.liked);
        }
        if query.category != state.category {
            store.set_selected_category(query.category.clone());
        }
        if query.search != state.search {
            store.set_search_text(query.search.clone());
        }

        // Load priority: category filter, then page change, then the
        // unconditional first load. A search-text change alone does not
        // reload here; the search box debounce owns that trigger.
        let page_changed = query.page != state.page;
        spawn_local(async move {
            if query.category.is_some() {
                store
                    .filter_by_category(query.category.clone(), query.page)
                    .await;
            } else if page_changed || first_load {
                store.fetch_page(query.page).await;
            }
            synced_once.set_value(true);
        });
    });

    // Outbound: state -> location, replace-only, only when different.
    Effect::new(move |_| {
        // Read tracked so the effect re-runs on any filter change, even
        // while writes are still suppressed.
        let query = FilterQuery {
            page: store.current_page.get(),
            category: store.active_category.get(),
            liked: store.liked_only.get(),
            search: store.search_text.get(),
        };
        if !synced_once.get_value() {
            return;
        }

        let target = target_search(&query);
        let current = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if current == target {
            return;
        }

        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let pathname = w.location().pathname().unwrap_or_default();
                let url = format!("{pathname}{target}");
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&url),
                );
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_of_empty_search_yields_defaults() {
        let query = parse_query("");
        assert_eq!(query, FilterQuery::default());
        assert_eq!(query.page, 1);
    }

    #[test]
    fn parse_reads_all_parameters() {
        let query = parse_query("?page=3&category=shoes&liked=true&search=boot");
        assert_eq!(query.page, 3);
        assert_eq!(query.category.as_deref(), Some("shoes"));
        assert!(query.liked);
        assert_eq!(query.search, "boot");
    }

    #[test]
    fn liked_accepts_the_true_literal_only() {
        assert!(!parse_query("?liked=1").liked);
        assert!(!parse_query("?liked=TRUE").liked);
        assert!(!parse_query("?liked=").liked);
        assert!(parse_query("?liked=true").liked);
    }

    #[test]
    fn malformed_page_falls_back_to_one() {
        assert_eq!(parse_query("?page=abc").page, 1);
        assert_eq!(parse_query("?page=0").page, 1);
        assert_eq!(parse_query("?page=-2").page, 1);
    }

    #[test]
    fn render_omits_defaults() {
        assert_eq!(render_query(&FilterQuery::default()), "");
        assert_eq!(
            render_query(&FilterQuery {
                page: 2,
                ..Default::default()
            }),
            "page=2"
        );
        assert_eq!(
            render_query(&FilterQuery {
                page: 2,
                category: Some("shoes".to_string()),
                liked: true,
                search: "boot".to_string(),
            }),
            "page=2&category=shoes&liked=true&search=boot"
        );
    }

    #[test]
    fn target_search_is_empty_or_question_prefixed() {
        assert_eq!(target_search(&FilterQuery::default()), "");
        assert_eq!(
            target_search(&FilterQuery {
                liked: true,
                ..Default::default()
            }),
            "?liked=true"
        );
    }

    #[test]
    fn parse_render_round_trip() {
        let query = FilterQuery {
            page: 4,
            category: Some("living-room".to_string()),
            liked: true,
            search: "red shoe".to_string(),
        };
        assert_eq!(parse_query(&target_search(&query)), query);
    }
}
