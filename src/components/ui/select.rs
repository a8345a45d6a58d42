use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Native `<select>` bound to a string signal. Filter dropdowns carry
/// backend enum values ("" meaning no filter), so the binding stays a
/// plain string and call sites parse where needed.
#[component]
pub fn Select(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: String,
    #[prop(optional)] disabled: bool,
    #[prop(into)] bind_value: RwSignal<String>,
    children: Children,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "border-input h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-sm shadow-xs outline-none transition-[color,box-shadow] disabled:pointer-events-none disabled:opacity-50",
        "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2",
        class
    );

    let on_change = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
                bind_value.set(select.value());
            }
        }
    };

    view! {
        <select
            data-name="Select"
            class=merged_class
            id=id
            disabled=disabled
            prop:value=move || bind_value.get()
            on:change=on_change
        >
            {children()}
        </select>
    }
    .into_any()
}
