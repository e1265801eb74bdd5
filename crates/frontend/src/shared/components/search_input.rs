use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Quiet period before a keystroke becomes a search request.
const DEBOUNCE_MS: u32 = 500;

/// Debounced search box with a clear button. `on_search` fires only after
/// the input has been stable for the quiet period, never per keystroke.
#[component]
pub fn SearchInput(
    /// Initial value (e.g. restored from the URL)
    #[prop(optional, into)]
    initial: String,
    /// Callback with the settled query text
    #[prop(into)]
    on_search: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search products...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(initial);
    // Each keystroke bumps the generation; only the latest timer fires.
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let current = generation.get_value() + 1;
        generation.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() == current {
                on_search.run(new_value);
            }
        });
    };

    let clear = move |_| {
        set_input_value.set(String::new());
        generation.set_value(generation.get_value() + 1);
        on_search.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || {
                (!input_value.get().is_empty())
                    .then(|| {
                        view! {
                            <button class="search-input__clear" on:click=clear title="Clear">
                                {icon("x")}
                            </button>
                        }
                    })
            }}
        </div>
    }
}
