use contracts::catalog::ProductView;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;
use wasm_bindgen_futures::spawn_local;

use crate::catalog::api;
use crate::catalog::store::CatalogStore;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::skeleton::PageLoader;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn ProductDetailPage() -> impl IntoView {
    let store = use_context::<CatalogStore>().expect("CatalogStore not found in context");
    let params = use_params_map();
    let navigate = use_navigate();

    let (product, set_product) = signal(None::<ProductView>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (image_index, set_image_index) = signal(0usize);

    // Load on mount and whenever the :id segment changes. Custom items are
    // resolved locally, everything else comes from the remote catalog.
    Effect::new(move |_| {
        let id = params.get().get("id").and_then(|v| v.parse::<i64>().ok());
        set_image_index.set(0);
        set_product.set(None);
        set_loading.set(true);
        set_error.set(None);

        let Some(id) = id else {
            set_error.set(Some("Product not found".to_string()));
            set_loading.set(false);
            return;
        };

        if id < 0 {
            match store.find_custom(id) {
                Some(item) => set_product.set(Some(item)),
                None => set_error.set(Some("Product not found".to_string())),
            }
            set_loading.set(false);
            return;
        }

        spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(p) => {
                    let liked = store.liked_ids.get_untracked().contains(&id);
                    set_product.set(Some(ProductView::remote(p, liked)));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_loading.set(false);
        });
    });

    let liked = Signal::derive(move || {
        product
            .get()
            .map(|p| store.liked_ids.get().contains(&p.id()))
            .unwrap_or(false)
    });

    let toggle_like = move |_| {
        if let Some(p) = product.get_untracked() {
            store.toggle_liked(p.id());
        }
    };

    let delete = move |_| {
        let Some(p) = product.get_untracked() else {
            return;
        };
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this product?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            match store.delete_product(p.id()).await {
                Ok(()) => navigate("/products", NavigateOptions::default()),
                Err(e) => {
                    if let Some(w) = web_sys::window() {
                        let _ = w.alert_with_message(&format!("Failed to delete product: {e}"));
                    }
                }
            }
        });
    };

    view! {
        <div class="page">
            <a href="/products" class="back-link">
                {icon("arrow-left")}
                <span>"Back to products"</span>
            </a>

            {move || {
                if loading.get() {
                    return view! { <PageLoader /> }.into_any();
                }
                if let Some(e) = error.get() {
                    return view! {
                        <EmptyState title="Product not found" description=e />
                    }
                        .into_any();
                }
                let Some(item) = product.get() else {
                    return view! { <PageLoader /> }.into_any();
                };

                let id = item.id();
                let images = item.product.images.clone();
                let fallback = item.product.thumbnail.clone();
                let main_image = move || {
                    images
                        .get(image_index.get())
                        .cloned()
                        .unwrap_or_else(|| fallback.clone())
                };
                let thumbs = item.product.images.clone();
                let thumb_count = thumbs.len();
                let price = item.product.price;
                let discount = item.product.discount_percentage;
                let final_price = price * (1.0 - discount / 100.0);

                view! {
                    <div class="detail">
                        <div class="detail__gallery">
                            <img class="detail__image" src=main_image alt=item.product.title.clone() />
                            <Show when=move || { thumb_count > 1 }>
                                <div class="detail__thumbs">
                                    {thumbs
                                        .iter()
                                        .enumerate()
                                        .map(|(i, src)| {
                                            let src = src.clone();
                                            view! {
                                                <img
                                                    class=move || {
                                                        if image_index.get() == i {
                                                            "detail__thumb detail__thumb--active"
                                                        } else {
                                                            "detail__thumb"
                                                        }
                                                    }
                                                    src=src
                                                    on:click=move |_| set_image_index.set(i)
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                        <div class="detail__info">
                            <div class="detail__meta">
                                <span class="badge">{item.product.category.clone()}</span>
                                {item
                                    .is_custom
                                    .then(|| view! { <span class="badge badge--custom">"Custom"</span> })}
                            </div>
                            <h1 class="detail__title">{item.product.title.clone()}</h1>
                            <div class="detail__rating">
                                {icon("star")}
                                <span>{format!("{:.1}", item.product.rating)}</span>
                                <span class="detail__stock">
                                    {format!("{} in stock", item.product.stock)}
                                </span>
                            </div>
                            <div class="detail__pricing">
                                <span class="detail__price">{format!("${final_price:.2}")}</span>
                                {(discount > 0.0)
                                    .then(|| {
                                        view! {
                                            <span class="detail__price-original">
                                                {format!("${price:.2}")}
                                            </span>
                                        }
                                    })}
                            </div>
                            {(!item.product.brand.is_empty())
                                .then(|| {
                                    view! {
                                        <p class="detail__brand">
                                            "Brand: "{item.product.brand.clone()}
                                        </p>
                                    }
                                })}
                            <p class="detail__description">{item.product.description.clone()}</p>
                            <div class="detail__actions">
                                <button
                                    class=move || {
                                        if liked.get() {
                                            "button button--secondary button--liked"
                                        } else {
                                            "button button--secondary"
                                        }
                                    }
                                    on:click=toggle_like
                                >
                                    {move || {
                                        if liked.get() { icon("heart-filled") } else { icon("heart") }
                                    }}
                                    <span>
                                        {move || {
                                            if liked.get() { "Remove from favorites" } else { "Add to favorites" }
                                        }}
                                    </span>
                                </button>
                                {item
                                    .is_custom
                                    .then(|| {
                                        view! {
                                            <a
                                                href=format!("/create-product?edit={id}")
                                                class="button button--secondary"
                                            >
                                                {icon("edit")}
                                                <span>"Edit"</span>
                                            </a>
                                        }
                                    })}
                                <button class="button button--danger" on:click=delete.clone()>
                                    {icon("trash")}
                                    <span>"Delete"</span>
                                </button>
                            </div>
                        </div>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
