use contracts::catalog::ProductView;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// One catalog card. Links to the detail page; the Router intercepts
/// same-origin anchor clicks, so plain `<a>` elements are enough here.
#[component]
#[allow(non_snake_case)]
pub fn ProductCard(
    item: ProductView,
    on_like: Callback<i64>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let id = item.id();
    let liked = item.liked;
    let price = item.product.price;
    let discount = item.product.discount_percentage;
    let final_price = price * (1.0 - discount / 100.0);
    let detail_href = format!("/products/{id}");

    view! {
        <div class="card">
            <a href=detail_href.clone() class="card__image-link">
                <img
                    class="card__image"
                    src=item.product.thumbnail.clone()
                    alt=item.product.title.clone()
                    loading="lazy"
                />
            </a>
            <div class="card__body">
                <div class="card__meta">
                    <span class="card__category">{item.product.category.clone()}</span>
                    {item
                        .is_custom
                        .then(|| view! { <span class="badge badge--custom">"Custom"</span> })}
                </div>
                <a href=detail_href class="card__title-link">
                    <h3 class="card__title">{item.product.title.clone()}</h3>
                </a>
                <div class="card__rating">
                    {icon("star")}
                    <span>{format!("{:.1}", item.product.rating)}</span>
                    <span class="card__stock">{format!("{} in stock", item.product.stock)}</span>
                </div>
                <div class="card__footer">
                    <span class="card__price">{format!("${final_price:.2}")}</span>
                    {(discount > 0.0)
                        .then(|| {
                            view! {
                                <span class="card__price-original">{format!("${price:.2}")}</span>
                            }
                        })}
                    <div class="card__actions">
                        <button
                            class=if liked { "icon-button icon-button--liked" } else { "icon-button" }
                            on:click=move |_| on_like.run(id)
                            title="Toggle favorite"
                        >
                            {if liked { icon("heart-filled") } else { icon("heart") }}
                        </button>
                        {item
                            .is_custom
                            .then(|| {
                                view! {
                                    <a
                                        href=format!("/create-product?edit={id}")
                                        class="icon-button"
                                        title="Edit"
                                    >
                                        {icon("edit")}
                                    </a>
                                }
                            })}
                        <button
                            class="icon-button icon-button--danger"
                            on:click=move |_| on_delete.run(id)
                            title="Delete"
                        >
                            {icon("trash")}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
