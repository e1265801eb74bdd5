use contracts::catalog::Category;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::api;
use crate::catalog::store::CatalogStore;

/// All/Favorites mode switch plus the remote category chip row.
#[component]
#[allow(non_snake_case)]
pub fn FilterPanel() -> impl IntoView {
    let store = use_context::<CatalogStore>().expect("CatalogStore not found in context");
    let (categories, set_categories) = signal(Vec::<Category>::new());

    spawn_local(async move {
        match api::fetch_categories().await {
            Ok(cats) => set_categories.set(cats),
            // The filter row simply stays empty; listing still works.
            Err(e) => log::warn!("failed to load categories: {e}"),
        }
    });

    let select_category = move |slug: Option<String>| {
        spawn_local(async move {
            store.filter_by_category(slug, 1).await;
        });
    };

    let mode_class = move |active: bool| {
        if active {
            "button button--primary"
        } else {
            "button button--secondary"
        }
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel__modes">
                <button
                    class=move || mode_class(!store.liked_only.get())
                    on:click=move |_| store.set_liked_only(false)
                >
                    "All Products"
                </button>
                <button
                    class=move || mode_class(store.liked_only.get())
                    on:click=move |_| store.set_liked_only(true)
                >
                    "Favorites"
                </button>
            </div>

            <Show when=move || !categories.get().is_empty()>
                <div class="filter-panel__categories">
                    <button
                        class=move || {
                            if store.active_category.get().is_none() { "chip chip--active" } else { "chip" }
                        }
                        on:click=move |_| select_category(None)
                    >
                        "All Categories"
                    </button>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|cat| {
                                let slug = cat.slug.clone();
                                let for_class = cat.clone();
                                view! {
                                    <button
                                        class=move || {
                                            let active = store
                                                .active_category
                                                .get()
                                                .is_some_and(|s| for_class.matches_slug(&s));
                                            if active { "chip chip--active" } else { "chip" }
                                        }
                                        on:click=move |_| select_category(Some(slug.clone()))
                                    >
                                        {cat.name}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
