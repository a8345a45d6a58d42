use crate::components::ui::{Button, ButtonSize, ButtonVariant, Spinner};
use crate::models::Property;
use crate::state::AppContext;
use crate::util::format_vnd;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Saved stays. Removing one re-fetches the list so ordering and
/// membership always match the backend.
#[component]
pub fn WishlistPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let properties: RwSignal<Vec<Property>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let busy_id: RwSignal<Option<i64>> = RwSignal::new(None);

    let load = move || {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.list_wishlist().await {
                Ok(items) => properties.set(items),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let on_remove = move |id: i64| {
        let client = app_state.0.api_client.get_untracked();
        busy_id.set(Some(id));
        spawn_local(async move {
            match client.remove_from_wishlist(id).await {
                Ok(_) => {
                    app_state.0.toast_success("Removed from wishlist");
                    load();
                }
                Err(e) => app_state.0.report_error(&e),
            }
            busy_id.set(None);
        });
    };

    view! {
        <div class="space-y-4">
            <h1 class="text-xl font-semibold">"Wishlist"</h1>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading wishlist..."
                    </div>
                }
            >
                <Show
                    when=move || !properties.get().is_empty()
                    fallback=|| view! {
                        <div class="rounded-md border border-border bg-muted p-6 text-center text-sm text-muted-foreground">
                            "No saved stays yet. "
                            <a class="text-primary underline underline-offset-4" href="/">"Explore places"</a>
                        </div>
                    }
                >
                    <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        <For
                            each=move || properties.get()
                            key=|p| p.id
                            children=move |property| {
                                let id = property.id;
                                let href = format!("/properties/{}", id);
                                let image = property.images.first().cloned();
                                let busy = move || busy_id.get() == Some(id);

                                view! {
                                    <div class="overflow-hidden rounded-xl border border-border bg-card">
                                        <a href=href.clone() class="block aspect-[4/3] w-full bg-muted">
                                            {match image {
                                                Some(src) => view! {
                                                    <img
                                                        src=src
                                                        alt=property.title.clone()
                                                        class="h-full w-full object-cover"
                                                    />
                                                }
                                                .into_any(),
                                                None => view! {
                                                    <div class="flex h-full w-full items-center justify-center text-xs text-muted-foreground">
                                                        "No photo"
                                                    </div>
                                                }
                                                .into_any(),
                                            }}
                                        </a>
                                        <div class="space-y-2 p-4">
                                            <a href=href class="block truncate text-sm font-semibold hover:underline">
                                                {property.title.clone()}
                                            </a>
                                            <div class="truncate text-xs text-muted-foreground">
                                                {property.address.clone()}
                                            </div>
                                            <div class="flex items-center justify-between">
                                                <span class="text-sm font-semibold">
                                                    {format_vnd(property.price_per_night)}
                                                    <span class="font-normal text-muted-foreground">" / night"</span>
                                                </span>
                                                <Button
                                                    variant=ButtonVariant::Outline
                                                    size=ButtonSize::Sm
                                                    attr:disabled=busy
                                                    on:click=move |_| on_remove(id)
                                                >
                                                    "Remove"
                                                </Button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
