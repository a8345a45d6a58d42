use crate::components::pagination::Pagination;
use crate::components::ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, Label, Spinner, Textarea,
};
use crate::listing::{paginate, ListQuery};
use crate::models::{Booking, BookingStatus};
use crate::pages::booking_badge;
use crate::state::AppContext;
use crate::util::{format_date, format_vnd};
use leptos::prelude::*;
use leptos::task::spawn_local;

const STATUS_TABS: [(&str, &str); 5] = [
    ("", "All"),
    ("PENDING", "Pending"),
    ("CONFIRMED", "Confirmed"),
    ("COMPLETED", "Completed"),
    ("CANCELLED", "Cancelled"),
];

/// The signed-in guest's bookings, newest first, with pay and cancel
/// actions. Mutations re-fetch the collection; the backend is the only
/// source of truth for booking state.
#[component]
pub fn MyBookingsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let bookings: RwSignal<Vec<Booking>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let status: RwSignal<String> = RwSignal::new(String::new());
    let page: RwSignal<usize> = RwSignal::new(1);
    // Id of the booking with an action in flight, to disable its buttons.
    let busy_id: RwSignal<Option<i64>> = RwSignal::new(None);
    // Id of the completed booking being reviewed; Some opens the dialog.
    let review_for: RwSignal<Option<i64>> = RwSignal::new(None);

    let load = move || {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.list_my_bookings().await {
                // Backend response order is the display order.
                Ok(items) => bookings.set(items),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    Effect::new(move |prev: Option<(String, String)>| {
        let filters = (String::new(), status.get());
        if crate::listing::page_reset_required(prev.as_ref(), &filters) {
            page.set(1);
        }
        filters
    });

    let slice = Memo::new(move |_| {
        let query = ListQuery {
            search: String::new(),
            status: status.get(),
            page: page.get(),
        };
        paginate(&bookings.get(), &query, |_| vec![], |b| b.status.to_string())
    });

    let on_cancel = move |id: i64| {
        let client = app_state.0.api_client.get_untracked();
        busy_id.set(Some(id));
        spawn_local(async move {
            match client.cancel_booking(id).await {
                Ok(_) => {
                    app_state.0.toast_success("Booking cancelled");
                    load();
                }
                Err(e) => app_state.0.report_error(&e),
            }
            busy_id.set(None);
        });
    };

    let on_pay = move |id: i64| {
        let client = app_state.0.api_client.get_untracked();
        busy_id.set(Some(id));
        spawn_local(async move {
            match client.create_payment(id).await {
                Ok(_) => {
                    app_state.0.toast_success("Payment submitted");
                    load();
                }
                Err(e) => app_state.0.report_error(&e),
            }
            busy_id.set(None);
        });
    };

    view! {
        <div class="space-y-4">
            <h1 class="text-xl font-semibold">"My bookings"</h1>

            <div class="flex flex-wrap gap-2">
                {STATUS_TABS
                    .into_iter()
                    .map(|(value, label)| {
                        let active = move || status.get() == value;
                        view! {
                            <button
                                class=move || {
                                    if active() {
                                        "rounded-full bg-primary px-3 py-1 text-xs font-medium text-primary-foreground"
                                    } else {
                                        "rounded-full bg-muted px-3 py-1 text-xs font-medium text-muted-foreground hover:text-foreground"
                                    }
                                }
                                on:click=move |_| status.set(value.to_string())
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading bookings..."
                    </div>
                }
            >
                <Show
                    when=move || !slice.get().rows.is_empty()
                    fallback=|| view! {
                        <div class="rounded-md border border-border bg-muted p-6 text-center text-sm text-muted-foreground">
                            "No bookings here yet."
                        </div>
                    }
                >
                    <div class="flex flex-col gap-3">
                        {move || {
                            slice
                                .get()
                                .rows
                                .into_iter()
                                .map(|booking| {
                                    let id = booking.id;
                                    let title = booking
                                        .property
                                        .as_ref()
                                        .map(|p| p.title.clone())
                                        .unwrap_or_else(|| format!("Stay #{}", booking.property_id));
                                    let cancellable = matches!(
                                        booking.status,
                                        BookingStatus::Pending | BookingStatus::Confirmed
                                    );
                                    let payable = booking.status == BookingStatus::Pending;
                                    let reviewable = booking.status == BookingStatus::Completed
                                        && !booking.has_reviewed;
                                    let busy = move || busy_id.get() == Some(id);

                                    view! {
                                        <Card>
                                            <CardContent class="flex flex-wrap items-center justify-between gap-4 py-4">
                                                <div class="space-y-1">
                                                    <div class="text-sm font-semibold">{title}</div>
                                                    <div class="text-xs text-muted-foreground">
                                                        {format!(
                                                            "{} to {}, {} guests",
                                                            format_date(&booking.check_in),
                                                            format_date(&booking.check_out),
                                                            booking.guest_count,
                                                        )}
                                                    </div>
                                                    <div class="text-sm font-semibold">
                                                        {format_vnd(booking.total_price)}
                                                    </div>
                                                </div>

                                                <div class="flex items-center gap-2">
                                                    <Badge variant=booking_badge(booking.status)>
                                                        {booking.status.to_string()}
                                                    </Badge>

                                                    <Show when=move || payable fallback=|| ().into_view()>
                                                        <Button
                                                            size=ButtonSize::Sm
                                                            attr:disabled=busy
                                                            on:click=move |_| on_pay(id)
                                                        >
                                                            "Pay now"
                                                        </Button>
                                                    </Show>

                                                    <Show when=move || cancellable fallback=|| ().into_view()>
                                                        <Button
                                                            variant=ButtonVariant::Outline
                                                            size=ButtonSize::Sm
                                                            attr:disabled=busy
                                                            on:click=move |_| on_cancel(id)
                                                        >
                                                            "Cancel"
                                                        </Button>
                                                    </Show>

                                                    <Show when=move || reviewable fallback=|| ().into_view()>
                                                        <Button
                                                            variant=ButtonVariant::Secondary
                                                            size=ButtonSize::Sm
                                                            on:click=move |_| review_for.set(Some(id))
                                                        >
                                                            "Write a review"
                                                        </Button>
                                                    </Show>
                                                </div>
                                            </CardContent>
                                        </Card>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <Pagination
                    page
                    current=Signal::derive(move || slice.get().page)
                    total_pages=Signal::derive(move || slice.get().total_pages)
                />
            </Show>

            <ReviewDialog booking_id=review_for on_submitted=Callback::new(move |_| load()) />
        </div>
    }
}

/// Rating and comment dialog for a completed stay. Submitting posts the
/// review and re-fetches the list so the button disappears.
#[component]
fn ReviewDialog(
    booking_id: RwSignal<Option<i64>>,
    #[prop(into)] on_submitted: Callback<()>,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let rating: RwSignal<u32> = RwSignal::new(0);
    let comment: RwSignal<String> = RwSignal::new(String::new());
    let submitting: RwSignal<bool> = RwSignal::new(false);

    // Clear the fields whenever the dialog opens for another booking.
    Effect::new(move |_| {
        if booking_id.get().is_some() {
            rating.set(0);
            comment.set(String::new());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(id) = booking_id.get_untracked() else {
            return;
        };
        let stars = rating.get_untracked();
        if !(1..=5).contains(&stars) {
            app_state.0.toast_error("Pick a rating first");
            return;
        }
        let text = comment.get_untracked().trim().to_string();
        if text.is_empty() {
            app_state.0.toast_error("Tell other guests about your stay");
            return;
        }

        let client = app_state.0.api_client.get_untracked();
        submitting.set(true);
        spawn_local(async move {
            match client.create_review(id, stars, &text).await {
                Ok(_) => {
                    app_state.0.toast_success("Review submitted");
                    booking_id.set(None);
                    on_submitted.run(());
                }
                Err(e) => app_state.0.report_error(&e),
            }
            submitting.set(false);
        });
    };

    view! {
        <Show when=move || booking_id.get().is_some() fallback=|| ().into_view()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4">
                <Card class="w-full max-w-md">
                    <CardContent class="space-y-3 py-4">
                        <h2 class="text-lg font-semibold">"Rate your stay"</h2>

                        <form class="flex flex-col gap-3" on:submit=on_submit>
                            <div class="flex items-center gap-1">
                                {(1..=5u32)
                                    .map(|star| {
                                        view! {
                                            <button
                                                type="button"
                                                class=move || {
                                                    if rating.get() >= star {
                                                        "text-2xl text-amber-500"
                                                    } else {
                                                        "text-2xl text-muted-foreground hover:text-amber-400"
                                                    }
                                                }
                                                on:click=move |_| rating.set(star)
                                            >
                                                "★"
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="flex flex-col gap-1.5">
                                <Label html_for="review_comment" class="text-xs">"Your review"</Label>
                                <Textarea
                                    id="review_comment"
                                    bind_value=comment
                                    rows=4
                                    placeholder="How was the stay?"
                                    class="text-sm"
                                />
                            </div>

                            <div class="flex justify-end gap-2">
                                <button
                                    type="button"
                                    class="inline-flex h-8 items-center rounded-md border border-input px-3 text-sm font-medium hover:bg-accent"
                                    on:click=move |_| booking_id.set(None)
                                >
                                    "Close"
                                </button>
                                <Button size=ButtonSize::Sm attr:disabled=move || submitting.get()>
                                    {move || if submitting.get() { "Submitting..." } else { "Submit review" }}
                                </Button>
                            </div>
                        </form>
                    </CardContent>
                </Card>
            </div>
        </Show>
    }
}
