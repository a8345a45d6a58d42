use crate::state::{AppContext, ToastLevel};
use leptos::prelude::*;

/// Fixed-position toast stack. Toasts are pushed through
/// `AppState::toast_success` / `toast_error` and dismiss themselves.
#[component]
pub fn ToastHost() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let toasts = app_state.0.toasts;

    view! {
        <div class="pointer-events-none fixed bottom-4 right-4 z-50 flex w-80 flex-col gap-2">
            <For each=move || toasts.get() key=|t| t.id let:toast>
                {
                    let tone = match toast.level {
                        ToastLevel::Success => "border-emerald-200 bg-emerald-50 text-emerald-800",
                        ToastLevel::Error => "border-red-200 bg-red-50 text-red-800",
                    };
                    view! {
                        <div class=format!(
                            "pointer-events-auto rounded-lg border px-4 py-3 text-sm shadow-md {}",
                            tone,
                        )>{toast.message.clone()}</div>
                    }
                }
            </For>
        </div>
    }
}
