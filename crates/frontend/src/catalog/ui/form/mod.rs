mod validation;

use contracts::catalog::CreateProductInput;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::catalog::store::CatalogStore;

use validation::{validate, FieldErrors};

/// Create/edit form for custom items. Editing is driven by an `?edit=<id>`
/// query parameter pointing at an existing custom item.
#[component]
#[allow(non_snake_case)]
pub fn ProductFormPage() -> impl IntoView {
    let store = use_context::<CatalogStore>().expect("CatalogStore not found in context");
    let query = use_query_map();
    let navigate = use_navigate();

    // Only a negative id can refer to a custom item; anything else falls
    // back to create mode.
    let edit_id = query
        .get_untracked()
        .get("edit")
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|id| *id < 0);
    let existing = edit_id.and_then(|id| store.find_custom(id));
    let editing = existing.is_some();

    let (title, set_title) = signal(
        existing
            .as_ref()
            .map(|p| p.product.title.clone())
            .unwrap_or_default(),
    );
    let (description, set_description) = signal(
        existing
            .as_ref()
            .map(|p| p.product.description.clone())
            .unwrap_or_default(),
    );
    let (price, set_price) = signal(
        existing
            .as_ref()
            .map(|p| p.product.price.to_string())
            .unwrap_or_default(),
    );
    let (category, set_category) = signal(
        existing
            .as_ref()
            .map(|p| p.product.category.clone())
            .unwrap_or_default(),
    );
    let (brand, set_brand) = signal(
        existing
            .as_ref()
            .map(|p| p.product.brand.clone())
            .unwrap_or_default(),
    );
    let (thumbnail, set_thumbnail) = signal(
        existing
            .as_ref()
            .map(|p| p.product.thumbnail.clone())
            .unwrap_or_default(),
    );
    let (errors, set_errors) = signal(FieldErrors::default());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let input = CreateProductInput {
            title: title.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            price: price.get_untracked().trim().parse::<f64>().unwrap_or(0.0),
            category: category.get_untracked().trim().to_string(),
            brand: brand.get_untracked().trim().to_string(),
            thumbnail: thumbnail.get_untracked().trim().to_string(),
        };

        let field_errors = validate(&input);
        if !field_errors.is_empty() {
            set_errors.set(field_errors);
            return;
        }
        set_errors.set(FieldErrors::default());

        match edit_id {
            Some(id) => store.update_product(id, input.into()),
            None => {
                store.create_product(input);
            }
        }
        navigate("/products", NavigateOptions::default());
    };

    let field_error = move |get: fn(&FieldErrors) -> Option<String>| {
        move || {
            errors
                .with(get)
                .map(|msg| view! { <span class="form__error">{msg}</span> })
        }
    };

    view! {
        <div class="page page--narrow">
            <h1 class="page__title">
                {if editing { "Edit Product" } else { "Create Product" }}
            </h1>

            {(edit_id.is_some() && !editing)
                .then(|| {
                    view! {
                        <div class="error-banner">
                            <span>"The product you tried to edit no longer exists. Saving will create a new one."</span>
                        </div>
                    }
                })}

            <form class="form" on:submit=submit>
                <div class="form__field">
                    <label class="form__label" for="title">"Title"</label>
                    <input
                        id="title"
                        class="form__input"
                        type="text"
                        placeholder="Product title"
                        prop:value=title
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    {field_error(|e| e.title.clone())}
                </div>

                <div class="form__field">
                    <label class="form__label" for="description">"Description"</label>
                    <textarea
                        id="description"
                        class="form__input form__input--textarea"
                        placeholder="Describe the product"
                        prop:value=description
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                    {field_error(|e| e.description.clone())}
                </div>

                <div class="form__row">
                    <div class="form__field">
                        <label class="form__label" for="price">"Price"</label>
                        <input
                            id="price"
                            class="form__input"
                            type="number"
                            step="0.01"
                            min="0"
                            placeholder="0.00"
                            prop:value=price
                            on:input=move |ev| set_price.set(event_target_value(&ev))
                        />
                        {field_error(|e| e.price.clone())}
                    </div>

                    <div class="form__field">
                        <label class="form__label" for="category">"Category"</label>
                        <input
                            id="category"
                            class="form__input"
                            type="text"
                            placeholder="e.g. furniture"
                            prop:value=category
                            on:input=move |ev| set_category.set(event_target_value(&ev))
                        />
                        {field_error(|e| e.category.clone())}
                    </div>
                </div>

                <div class="form__field">
                    <label class="form__label" for="brand">"Brand"</label>
                    <input
                        id="brand"
                        class="form__input"
                        type="text"
                        placeholder="Brand name"
                        prop:value=brand
                        on:input=move |ev| set_brand.set(event_target_value(&ev))
                    />
                    {field_error(|e| e.brand.clone())}
                </div>

                <div class="form__field">
                    <label class="form__label" for="thumbnail">"Image URL"</label>
                    <input
                        id="thumbnail"
                        class="form__input"
                        type="text"
                        placeholder="https://..."
                        prop:value=thumbnail
                        on:input=move |ev| set_thumbnail.set(event_target_value(&ev))
                    />
                    {field_error(|e| e.thumbnail.clone())}
                </div>

                <div class="form__actions">
                    <a href="/products" class="button button--secondary">"Cancel"</a>
                    <button type="submit" class="button button--primary">
                        {if editing { "Save Changes" } else { "Create Product" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
