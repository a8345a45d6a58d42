use crate::components::ui::{Badge, Button, ButtonSize, ButtonVariant, Spinner};
use crate::models::Notification;
use crate::pages::notification_badge;
use crate::state::AppContext;
use crate::util::format_date;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ReadFilter {
    All,
    Unread,
    Read,
}

/// The signed-in user's notification feed with an unread counter.
/// Marking one read patches the local copy after the backend confirms,
/// instead of re-fetching the whole feed; it is a single boolean flip
/// and the counter must update instantly.
#[component]
pub fn NotificationsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let notifications: RwSignal<Vec<Notification>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let filter: RwSignal<ReadFilter> = RwSignal::new(ReadFilter::All);

    Effect::new(move |_| {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.list_notifications().await {
                Ok(items) => notifications.set(items),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    });

    let unread_count =
        Memo::new(move |_| notifications.get().iter().filter(|n| !n.is_read).count());

    let visible = Memo::new(move |_| {
        let wanted = filter.get();
        notifications
            .get()
            .into_iter()
            .filter(|n| match wanted {
                ReadFilter::All => true,
                ReadFilter::Unread => !n.is_read,
                ReadFilter::Read => n.is_read,
            })
            .collect::<Vec<_>>()
    });

    let on_mark_read = move |id: i64| {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.mark_notification_read(id).await {
                Ok(_) => {
                    notifications.update(|items| {
                        if let Some(n) = items.iter_mut().find(|n| n.id == id) {
                            n.is_read = true;
                        }
                    });
                }
                Err(e) => app_state.0.report_error(&e),
            }
        });
    };

    let tab_class = move |wanted: ReadFilter| {
        move || {
            if filter.get() == wanted {
                "rounded-full bg-primary px-3 py-1 text-xs font-medium text-primary-foreground"
            } else {
                "rounded-full bg-muted px-3 py-1 text-xs font-medium text-muted-foreground hover:text-foreground"
            }
        }
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-xl font-semibold">"Notifications"</h1>
                <span class="text-sm text-muted-foreground">
                    {move || format!("{} unread", unread_count.get())}
                </span>
            </div>

            <div class="flex gap-2">
                <button class=tab_class(ReadFilter::All) on:click=move |_| filter.set(ReadFilter::All)>
                    "All"
                </button>
                <button class=tab_class(ReadFilter::Unread) on:click=move |_| filter.set(ReadFilter::Unread)>
                    "Unread"
                </button>
                <button class=tab_class(ReadFilter::Read) on:click=move |_| filter.set(ReadFilter::Read)>
                    "Read"
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading notifications..."
                    </div>
                }
            >
                <Show
                    when=move || !visible.get().is_empty()
                    fallback=|| view! {
                        <div class="rounded-md border border-border bg-muted p-6 text-center text-sm text-muted-foreground">
                            "Nothing here."
                        </div>
                    }
                >
                    <div class="flex flex-col gap-2">
                        <For
                            each=move || visible.get()
                            key=|n| (n.id, n.is_read)
                            children=move |n| {
                                let id = n.id;
                                let is_read = n.is_read;
                                let tone = if is_read {
                                    "rounded-lg border border-border bg-background p-4"
                                } else {
                                    "rounded-lg border border-primary/30 bg-primary/5 p-4"
                                };

                                view! {
                                    <div class=tone>
                                        <div class="flex items-start justify-between gap-3">
                                            <div class="space-y-1">
                                                <div class="flex items-center gap-2">
                                                    <span class="text-sm font-semibold">{n.title.clone()}</span>
                                                    <Badge variant=notification_badge(n.kind) class="text-[10px]">
                                                        {n.kind.to_string()}
                                                    </Badge>
                                                </div>
                                                <p class="text-sm text-muted-foreground">{n.message.clone()}</p>
                                                <div class="text-xs text-muted-foreground">
                                                    {n.created_at.as_deref().map(format_date).unwrap_or_default()}
                                                </div>
                                            </div>

                                            <Show when=move || !is_read fallback=|| ().into_view()>
                                                <Button
                                                    variant=ButtonVariant::Outline
                                                    size=ButtonSize::Sm
                                                    on:click=move |_| on_mark_read(id)
                                                >
                                                    "Mark read"
                                                </Button>
                                            </Show>
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
