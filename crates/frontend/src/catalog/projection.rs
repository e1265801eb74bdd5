//! View projection: derives the list to render from the store's raw
//! collections. Pure recomputation over bounded in-memory data; the memo
//! keeps it from running on unrelated state changes.

use std::collections::HashSet;

use contracts::catalog::ProductView;
use leptos::prelude::*;

use super::store::{CatalogStore, ITEMS_PER_PAGE};

#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePage {
    pub items: Vec<ProductView>,
    pub total_count: usize,
    pub total_pages: usize,
}

pub fn total_pages(total_count: usize, per_page: usize) -> usize {
    total_count.div_ceil(per_page)
}

/// Compute the visible slice.
///
/// Custom items always sort before remote ones; anything in the deleted
/// set is dropped, as is any later duplicate of an id seen earlier. In the
/// normal mode the store already holds exactly the requested server page,
/// so the candidate set passes through and totals come from the server.
/// In favorites mode the liked subset is paginated entirely client-side;
/// an out-of-range page yields an empty slice rather than clamping.
pub fn project(
    custom: &[ProductView],
    remote: &[ProductView],
    deleted: &HashSet<i64>,
    liked_only: bool,
    current_page: usize,
    per_page: usize,
    server_total: usize,
) -> VisiblePage {
    let mut seen = HashSet::new();
    let candidates: Vec<ProductView> = custom
        .iter()
        .chain(remote.iter())
        .filter(|p| !deleted.contains(&p.id()) && seen.insert(p.id()))
        .cloned()
        .collect();

    if !liked_only {
        return VisiblePage {
            items: candidates,
            total_count: server_total,
            total_pages: total_pages(server_total, per_page),
        };
    }

    let liked: Vec<ProductView> = candidates.into_iter().filter(|p| p.liked).collect();
    let total_count = liked.len();
    let start = current_page.saturating_sub(1).saturating_mul(per_page);
    let items = if start >= total_count {
        Vec::new()
    } else {
        liked[start..(start + per_page).min(total_count)].to_vec()
    };

    VisiblePage {
        items,
        total_count,
        total_pages: total_pages(total_count, per_page),
    }
}

/// Memoized projection over the store, for the list page.
pub fn use_visible_page(store: CatalogStore) -> Memo<VisiblePage> {
    Memo::new(move |_| {
        store.custom_items.with(|custom| {
            store.remote_items.with(|remote| {
                store.deleted_ids.with(|deleted| {
                    project(
                        custom,
                        remote,
                        deleted,
                        store.liked_only.get(),
                        store.current_page.get(),
                        ITEMS_PER_PAGE,
                        store.total_count.get(),
                    )
                })
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::Product;

    fn view(id: i64, liked: bool) -> ProductView {
        ProductView {
            product: Product {
                id,
                title: format!("item {id}"),
                description: String::new(),
                price: 1.0,
                discount_percentage: 0.0,
                rating: 0.0,
                stock: 0,
                brand: String::new(),
                category: "misc".to_string(),
                thumbnail: String::new(),
                images: Vec::new(),
            },
            liked,
            is_custom: id < 0,
        }
    }

    fn ids(page: &VisiblePage) -> Vec<i64> {
        page.items.iter().map(|p| p.id()).collect()
    }

    #[test]
    fn custom_items_sort_before_remote_ones() {
        let page = project(
            &[view(-2, false), view(-1, false)],
            &[view(10, false), view(11, false)],
            &HashSet::new(),
            false,
            1,
            12,
            50,
        );
        assert_eq!(ids(&page), vec![-2, -1, 10, 11]);
    }

    #[test]
    fn deleted_ids_never_appear() {
        let deleted: HashSet<i64> = [10].into_iter().collect();
        let page = project(
            &[view(-1, false)],
            &[view(10, false), view(11, false)],
            &deleted,
            false,
            1,
            12,
            50,
        );
        assert_eq!(ids(&page), vec![-1, 11]);
    }

    #[test]
    fn duplicate_ids_keep_the_first_occurrence() {
        let page = project(
            &[view(-1, false)],
            &[view(5, false), view(5, true)],
            &HashSet::new(),
            false,
            1,
            12,
            50,
        );
        assert_eq!(ids(&page), vec![-1, 5]);
    }

    #[test]
    fn server_total_drives_page_count_in_normal_mode() {
        let page = project(&[], &[view(1, false)], &HashSet::new(), false, 1, 12, 29);
        assert_eq!(page.total_count, 29);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn liked_total_drives_page_count_in_favorites_mode() {
        let remote: Vec<ProductView> = (1..=29).map(|id| view(id, true)).collect();
        let page = project(&[], &remote, &HashSet::new(), true, 1, 12, 999);
        assert_eq!(page.total_count, 29);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 12);
    }

    #[test]
    fn favorites_mode_slices_client_side() {
        let remote: Vec<ProductView> = (1..=20)
            .map(|id| view(id, id % 2 == 0)) // 10 liked items
            .collect();
        let page = project(&[], &remote, &HashSet::new(), true, 1, 4, 999);
        assert_eq!(ids(&page), vec![2, 4, 6, 8]);
        let page2 = project(&[], &remote, &HashSet::new(), true, 2, 4, 999);
        assert_eq!(ids(&page2), vec![10, 12, 14, 16]);
    }

    #[test]
    fn out_of_range_favorites_page_is_empty_not_clamped() {
        let remote: Vec<ProductView> = (1..=5).map(|id| view(id, true)).collect();
        let page = project(&[], &remote, &HashSet::new(), true, 2, 12, 999);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn deleted_remote_id_is_excluded_after_remote_delete() {
        let deleted: HashSet<i64> = [7].into_iter().collect();
        let remote: Vec<ProductView> = (1..=12).map(|id| view(id, false)).collect();
        let page = project(&[], &remote, &deleted, false, 1, 12, 50);
        assert!(!ids(&page).contains(&7));
    }

    #[test]
    fn absurd_page_number_from_the_url_stays_an_empty_slice() {
        // `page` is user input via the query string and can be any usize.
        let remote: Vec<ProductView> = (1..=5).map(|id| view(id, true)).collect();
        let page = project(
            &[],
            &remote,
            &HashSet::new(),
            true,
            usize::MAX,
            12,
            999,
        );
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn empty_result_set_has_zero_pages() {
        let page = project(&[], &[], &HashSet::new(), false, 1, 12, 0);
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }
}
