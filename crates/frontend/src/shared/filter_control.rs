use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// One include/exclude filter: a multi-select dropdown mirrored into a
/// plain text field, plus a clear action that empties both.
///
/// The text field is the source of truth read at request-build time;
/// the dropdown is only a convenience that writes into it.
#[component]
pub fn FilterControl(
    #[prop(into)] label: String,
    /// Options as (value, display) pairs.
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Comma-joined selection, owned by the page.
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let select_ref = NodeRef::<html::Select>::new();

    let mirror_selection = move |_| {
        if let Some(select) = select_ref.get() {
            value.set(selected_values(&select).join(","));
        }
    };

    let clear = move |_| {
        if let Some(select) = select_ref.get() {
            select.set_selected_index(-1);
        }
        value.set(String::new());
    };

    let input_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                multiple=true
                size="4"
                node_ref=select_ref
                on:change=mirror_selection
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=|(val, display)| {
                        view! { <option value=val>{display}</option> }
                    }
                />
            </select>
            <div class="form__mirror-row">
                <input
                    type="text"
                    class="form__input"
                    placeholder=input_placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button class="button button--secondary" type="button" on:click=clear>
                    "Clear"
                </button>
            </div>
        </div>
    }
}

fn selected_values(select: &web_sys::HtmlSelectElement) -> Vec<String> {
    let selected = select.selected_options();
    (0..selected.length())
        .filter_map(|index| selected.item(index))
        .filter_map(|element| element.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}
