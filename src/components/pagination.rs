use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use leptos::prelude::*;

/// Prev / "Page x of y" / Next. `current` is the clamped page the
/// view-model actually rendered; stepping writes the requested page
/// signal, which the derivation clamps back into range.
#[component]
pub fn Pagination(
    page: RwSignal<usize>,
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
) -> impl IntoView {
    let on_prev = move |_| {
        page.set(current.get_untracked().saturating_sub(1).max(1));
    };

    let on_next = move |_: leptos::ev::MouseEvent| {
        let next = current.get_untracked() + 1;
        page.set(next.min(total_pages.get_untracked()));
    };

    view! {
        <div class="mt-4 flex items-center justify-center gap-2">
            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Sm
                attr:disabled=move || current.get() <= 1
                on:click=on_prev
            >
                "Previous"
            </Button>
            <span class="rounded-full bg-muted px-3 py-1 text-sm font-semibold">
                {move || format!("Page {} of {}", current.get(), total_pages.get())}
            </span>
            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Sm
                attr:disabled=move || current.get() >= total_pages.get()
                on:click=on_next
            >
                "Next"
            </Button>
        </div>
    }
}
