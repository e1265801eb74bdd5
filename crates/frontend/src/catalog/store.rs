//! The catalog store: single owner of all catalog state.
//!
//! Every mutation goes through an action on [`CatalogStore`]; the store is
//! the only caller of the remote client and the persistence adapter. It is
//! constructed once at app start and shared through context.

use std::collections::HashSet;

use contracts::catalog::{CreateProductInput, Product, ProductPatch, ProductView, StoredCatalog};
use leptos::prelude::*;

use super::api::{self, ApiError};
use super::storage;

/// Fixed page size for every listing mode.
pub const ITEMS_PER_PAGE: usize = 12;

#[derive(Clone, Copy)]
pub struct CatalogStore {
    /// Current page's worth of server-sourced items; cleared and replaced
    /// on every fetch/search/filter.
    pub remote_items: RwSignal<Vec<ProductView>>,
    /// Locally created items, newest first. Persisted.
    pub custom_items: RwSignal<Vec<ProductView>>,
    /// Persisted.
    pub liked_ids: RwSignal<HashSet<i64>>,
    /// Remote ids hidden for good. Persisted. Never holds a negative id.
    pub deleted_ids: RwSignal<HashSet<i64>>,

    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,

    pub current_page: RwSignal<usize>,
    /// Server-reported total for the active remote query.
    pub total_count: RwSignal<usize>,

    pub search_text: RwSignal<String>,
    pub active_category: RwSignal<Option<String>>,
    pub liked_only: RwSignal<bool>,

    /// Next id for a locally created item. Strictly decreasing, never
    /// reused, even across delete/create sequences.
    next_custom_id: RwSignal<i64>,
    /// Generation counter for remote requests. A completion whose
    /// generation is no longer current lost the race to a newer request
    /// and is discarded instead of overwriting fresher state.
    fetch_seq: RwSignal<u64>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            remote_items: RwSignal::new(Vec::new()),
            custom_items: RwSignal::new(Vec::new()),
            liked_ids: RwSignal::new(HashSet::new()),
            deleted_ids: RwSignal::new(HashSet::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            current_page: RwSignal::new(1),
            total_count: RwSignal::new(0),
            search_text: RwSignal::new(String::new()),
            active_category: RwSignal::new(None),
            liked_only: RwSignal::new(false),
            next_custom_id: RwSignal::new(-1),
            fetch_seq: RwSignal::new(0),
        }
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Restore the persisted subset saved by a previous session.
    pub fn rehydrate(&self) {
        if cfg!(target_arch = "wasm32") {
            if let Some(snapshot) = storage::load() {
                self.apply_snapshot(snapshot);
            }
        }
    }

    pub fn snapshot(&self) -> StoredCatalog {
        StoredCatalog::new(
            &self.liked_ids.get_untracked(),
            &self.deleted_ids.get_untracked(),
            self.custom_items.get_untracked(),
        )
    }

    pub fn apply_snapshot(&self, snapshot: StoredCatalog) {
        let liked = snapshot.liked_set();
        let deleted = snapshot.deleted_set();
        let mut custom = snapshot.custom_items;
        for item in &mut custom {
            item.liked = liked.contains(&item.product.id);
            item.is_custom = true;
        }
        // Seed the id counter below every id seen so far, so restored and
        // freshly created items can never collide.
        let lowest = custom.iter().map(|p| p.product.id).min().unwrap_or(0);
        self.next_custom_id.set(lowest.min(0) - 1);

        self.liked_ids.set(liked);
        self.deleted_ids.set(deleted);
        self.custom_items.set(custom);
    }

    fn persist(&self) {
        if cfg!(target_arch = "wasm32") {
            storage::save(&self.snapshot());
        }
    }

    // ------------------------------------------------------------------
    // Remote listing actions
    // ------------------------------------------------------------------

    /// Fetch one server page of the unfiltered listing. The page number is
    /// reflected eagerly so the UI tracks the navigation while the request
    /// is in flight.
    pub async fn fetch_page(self, page: usize) {
        let seq = self.begin_request();
        self.current_page.set(page);
        let offset = page.saturating_sub(1).saturating_mul(ITEMS_PER_PAGE);

        match api::fetch_page(ITEMS_PER_PAGE, offset).await {
            Ok(result) if self.is_current(seq) => {
                self.total_count.set(result.total);
                self.remote_items.set(self.tag_remote(result.items));
                self.loading.set(false);
            }
            Err(e) if self.is_current(seq) => self.fail(e),
            _ => log::debug!("discarding superseded page fetch"),
        }
    }

    /// Title search. A blank query restores the unfiltered first page.
    /// Search results are unpaginated on the server side.
    pub async fn search(self, query: &str) {
        if query.trim().is_empty() {
            self.search_text.set(String::new());
            self.fetch_page(1).await;
            return;
        }

        self.search_text.set(query.to_string());
        let seq = self.begin_request();

        match api::search_by_title(query).await {
            Ok(items) if self.is_current(seq) => {
                self.total_count.set(items.len());
                self.remote_items.set(self.tag_remote(items));
                self.current_page.set(1);
                self.loading.set(false);
            }
            Err(e) if self.is_current(seq) => self.fail(e),
            _ => log::debug!("discarding superseded search"),
        }
    }

    /// Category filter. `None` restores the unfiltered listing; a slug the
    /// server does not know yields an empty result set, not an error.
    pub async fn filter_by_category(self, category: Option<String>, page: usize) {
        self.active_category.set(category.clone());

        let Some(slug) = category else {
            self.fetch_page(page).await;
            return;
        };

        let seq = self.begin_request();
        self.current_page.set(page);

        match api::fetch_by_category(&slug).await {
            Ok(items) if self.is_current(seq) => {
                self.total_count.set(items.len());
                self.remote_items.set(self.tag_remote(items));
                self.loading.set(false);
            }
            Err(e) if self.is_current(seq) => self.fail(e),
            _ => log::debug!("discarding superseded category fetch"),
        }
    }

    /// Page changes re-query the server, except in favorites mode where
    /// pagination is a pure client-side slice over what is already loaded.
    pub async fn set_current_page(self, page: usize) {
        if self.liked_only.get_untracked() {
            self.current_page.set(page);
        } else {
            self.fetch_page(page).await;
        }
    }

    // ------------------------------------------------------------------
    // Local mutations
    // ------------------------------------------------------------------

    /// Flip liked state for an id and re-tag both collections so every
    /// visible item agrees with the set. Cannot fail.
    pub fn toggle_liked(&self, id: i64) {
        self.liked_ids.update(|ids| {
            if !ids.insert(id) {
                ids.remove(&id);
            }
        });
        self.retag();
        self.persist();
    }

    /// Delete an item. Custom items are removed outright; remote items are
    /// deleted on the server first and hidden locally only on success.
    /// The error is propagated so the caller can decide how to present it.
    pub async fn delete_product(self, id: i64) -> Result<(), ApiError> {
        if id < 0 {
            self.remove_custom(id);
            return Ok(());
        }
        api::delete_by_id(id).await?;
        self.mark_remote_deleted(id);
        Ok(())
    }

    /// Create a custom item and return its freshly assigned negative id.
    pub fn create_product(&self, input: CreateProductInput) -> i64 {
        let id = self.next_custom_id.get_untracked();
        self.next_custom_id.set(id - 1);
        let view = input.into_view(id);
        self.custom_items.update(|items| items.insert(0, view));
        self.persist();
        id
    }

    /// Merge a partial update into the matching custom item; no-op when
    /// the id matches nothing.
    pub fn update_product(&self, id: i64, patch: ProductPatch) {
        self.custom_items.update(|items| {
            if let Some(item) = items.iter_mut().find(|p| p.product.id == id) {
                patch.apply(item);
            }
        });
        self.persist();
    }

    pub fn set_liked_only(&self, flag: bool) {
        self.liked_only.set(flag);
        self.current_page.set(1);
    }

    pub fn set_search_text(&self, text: String) {
        self.search_text.set(text);
    }

    pub fn set_selected_category(&self, category: Option<String>) {
        self.active_category.set(category);
    }

    pub fn find_custom(&self, id: i64) -> Option<ProductView> {
        self.custom_items
            .with_untracked(|items| items.iter().find(|p| p.product.id == id).cloned())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn begin_request(&self) -> u64 {
        let seq = self.fetch_seq.get_untracked() + 1;
        self.fetch_seq.set(seq);
        self.loading.set(true);
        self.error.set(None);
        self.remote_items.set(Vec::new());
        seq
    }

    fn is_current(&self, seq: u64) -> bool {
        self.fetch_seq.get_untracked() == seq
    }

    fn fail(&self, e: ApiError) {
        self.error.set(Some(e.to_string()));
        self.loading.set(false);
    }

    fn tag_remote(&self, items: Vec<Product>) -> Vec<ProductView> {
        let liked = self.liked_ids.get_untracked();
        items
            .into_iter()
            .map(|p| {
                let is_liked = liked.contains(&p.id);
                ProductView::remote(p, is_liked)
            })
            .collect()
    }

    fn retag(&self) {
        let liked = self.liked_ids.get_untracked();
        self.remote_items.update(|items| {
            for item in items.iter_mut() {
                item.liked = liked.contains(&item.product.id);
            }
        });
        self.custom_items.update(|items| {
            for item in items.iter_mut() {
                item.liked = liked.contains(&item.product.id);
            }
        });
    }

    fn remove_custom(&self, id: i64) {
        self.custom_items
            .update(|items| items.retain(|p| p.product.id != id));
        self.persist();
    }

    fn mark_remote_deleted(&self, id: i64) {
        self.deleted_ids.update(|ids| {
            ids.insert(id);
        });
        self.persist();
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
