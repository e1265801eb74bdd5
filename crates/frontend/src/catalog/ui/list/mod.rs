mod filter_panel;
mod product_card;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::projection::use_visible_page;
use crate::catalog::store::CatalogStore;
use crate::catalog::url_sync::use_url_sync;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::skeleton::CardGridSkeleton;

use filter_panel::FilterPanel;
use product_card::ProductCard;

#[component]
#[allow(non_snake_case)]
pub fn ProductsPage() -> impl IntoView {
    let store = use_context::<CatalogStore>().expect("CatalogStore not found in context");
    use_url_sync(store);

    let visible = use_visible_page(store);

    let on_search = Callback::new(move |query: String| {
        spawn_local(async move {
            store.search(&query).await;
        });
    });

    let on_page_change = Callback::new(move |page: usize| {
        spawn_local(async move {
            store.set_current_page(page).await;
        });
        if let Some(w) = web_sys::window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let on_like = Callback::new(move |id: i64| store.toggle_liked(id));

    let on_delete = Callback::new(move |id: i64| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this product?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            if let Err(e) = store.delete_product(id).await {
                // Deletion failures stay local to the action; the listing
                // itself is still valid.
                if let Some(w) = web_sys::window() {
                    let _ = w.alert_with_message(&format!("Failed to delete product: {e}"));
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Products"</h1>
                <SearchInput initial=store.search_text.get_untracked() on_search=on_search />
            </div>

            <FilterPanel />

            {move || {
                if let Some(e) = store.error.get() {
                    view! {
                        <div class="error-banner">
                            <span>"Error: "{e}</span>
                        </div>
                    }
                        .into_any()
                } else if store.loading.get() {
                    view! { <CardGridSkeleton /> }.into_any()
                } else if visible.get().items.is_empty() {
                    view! {
                        <EmptyState
                            title="No products found"
                            description="Try adjusting your filters or search query"
                        />
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {visible
                                .get()
                                .items
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <ProductCard item=item on_like=on_like on_delete=on_delete />
                                    }
                                })
                                .collect_view()}
                        </div>
                        <Show when=move || { visible.get().total_pages > 1 }>
                            <PaginationControls
                                current_page=Signal::derive(move || store.current_page.get())
                                total_pages=Signal::derive(move || visible.get().total_pages)
                                total_count=Signal::derive(move || visible.get().total_count)
                                on_page_change=on_page_change
                            />
                        </Show>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
