use crate::components::pagination::Pagination;
use crate::components::ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Input, Label, Spinner,
};
use crate::listing::{paginate, ListQuery};
use crate::models::{Property, PropertyStatus, Review};
use crate::pages::property_badge;
use crate::pricing::booking_estimate;
use crate::state::AppContext;
use crate::util::{average_rating, format_date, format_vnd};
use crate::api::CreateBookingRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params, use_query_map};
use leptos_router::params::Params;

/// Public landing page: the full active-property collection fetched
/// once, searched and paged client-side. The search box writes the
/// query into the URL so results are shareable.
#[component]
pub fn HomePage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let query_map = use_query_map();
    let navigate = StoredValue::new(use_navigate());

    let properties: RwSignal<Vec<Property>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let search: RwSignal<String> = RwSignal::new(String::new());
    let page: RwSignal<usize> = RwSignal::new(1);

    Effect::new(move |_| {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.list_properties().await {
                Ok(items) => properties.set(items),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    });

    // Seed the search box from `?q=`.
    Effect::new(move |_| {
        let q = query_map.get().get("q").unwrap_or_default();
        search.set(q);
    });

    Effect::new(move |prev: Option<(String, String)>| {
        let filters = (search.get(), String::new());
        if crate::listing::page_reset_required(prev.as_ref(), &filters) {
            page.set(1);
        }
        filters
    });

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let q = search.get_untracked();
        let target = if q.trim().is_empty() {
            "/".to_string()
        } else {
            format!("/?q={}", urlencoding::encode(q.trim()))
        };
        navigate.with_value(|nav| nav(&target, Default::default()));
    };

    let slice = Memo::new(move |_| {
        let query = ListQuery {
            search: search.get(),
            // Only live listings are bookable by the public.
            status: PropertyStatus::Active.to_string(),
            page: page.get(),
        };
        paginate(
            &properties.get(),
            &query,
            |p| vec![p.title.clone(), p.address.clone()],
            |p| p.status.to_string(),
        )
    });

    view! {
        <div class="space-y-6">
            <section class="rounded-2xl border border-border bg-muted/30 px-6 py-10">
                <h1 class="text-2xl font-semibold">"Find your next stay"</h1>
                <p class="mt-1 text-sm text-muted-foreground">
                    "Homestays, apartments and villas across Vietnam."
                </p>
                <form class="mt-4 flex max-w-lg gap-2" on:submit=on_search>
                    <Input
                        placeholder="Search by place or address..."
                        bind_value=search
                    />
                    <Button size=ButtonSize::Default>"Search"</Button>
                </form>
            </section>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading stays..."
                    </div>
                }
            >
                <div class="text-sm text-muted-foreground">
                    {move || format!("{} places", slice.get().filtered_count)}
                </div>

                <Show
                    when=move || !slice.get().rows.is_empty()
                    fallback=|| view! {
                        <div class="rounded-md border border-border bg-muted p-6 text-center text-sm text-muted-foreground">
                            "No places match your search."
                        </div>
                    }
                >
                    <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        {move || {
                            slice
                                .get()
                                .rows
                                .into_iter()
                                .map(|property| view! { <PropertyCard property /> })
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
        </div>
    }
}

#[component]
fn PropertyCard(property: Property) -> impl IntoView {
    let href = format!("/properties/{}", property.id);
    let image = property.images.first().cloned();
    let price = format_vnd(property.price_per_night);

    view! {
        <a
            href=href
            class="group overflow-hidden rounded-xl border border-border bg-card transition-shadow hover:shadow-md"
        >
            <div class="aspect-[4/3] w-full bg-muted">
                {match image {
                    Some(src) => view! {
                        <img
                            src=src
                            alt=property.title.clone()
                            class="h-full w-full object-cover transition-transform group-hover:scale-[1.02]"
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
            </div>
            <div class="space-y-1 p-4">
                <div class="truncate text-sm font-semibold">{property.title}</div>
                <div class="truncate text-xs text-muted-foreground">{property.address}</div>
                <div class="pt-1 text-sm font-semibold">
                    {price}
                    <span class="font-normal text-muted-foreground">" / night"</span>
                </div>
            </div>
        </a>
    }
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct PropertyRouteParams {
    pub id: Option<i64>,
}

#[component]
pub fn PropertyDetailPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = use_params::<PropertyRouteParams>();

    let property: RwSignal<Option<Property>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(true);

    let property_id = move || params.get().ok().and_then(|p| p.id).unwrap_or_default();

    Effect::new(move |_| {
        let id = property_id();
        if id <= 0 {
            loading.set(false);
            return;
        }
        let client = app_state.0.api_client.get_untracked();
        loading.set(true);
        spawn_local(async move {
            match client.get_property(id).await {
                Ok(p) => property.set(Some(p)),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    });

    view! {
        <Show
            when=move || property.get().is_some()
            fallback=move || view! {
                <div class="flex items-center gap-2 text-sm text-muted-foreground">
                    {move || if loading.get() {
                        view! { <Spinner /> " Loading..." }.into_any()
                    } else {
                        view! { "Stay not found." }.into_any()
                    }}
                </div>
            }
        >
            {move || {
                property.get().map(|p| {
                    let badge_variant = property_badge(p.status);
                    let status_text = p.status.to_string();
                    let image = p.images.first().cloned();
                    let sidebar_property = p.clone();

                    view! {
                        <div class="grid gap-8 lg:grid-cols-[1fr_360px]">
                            <div class="space-y-4">
                                <div class="aspect-[16/9] w-full overflow-hidden rounded-xl bg-muted">
                                    {match image {
                                        Some(src) => view! {
                                            <img src=src alt=p.title.clone() class="h-full w-full object-cover" />
                                        }
                                        .into_any(),
                                        None => view! {
                                            <div class="flex h-full w-full items-center justify-center text-sm text-muted-foreground">
                                                "No photo"
                                            </div>
                                        }
                                        .into_any(),
                                    }}
                                </div>

                                <div class="flex items-start justify-between gap-4">
                                    <div class="space-y-1">
                                        <h1 class="text-2xl font-semibold">{p.title.clone()}</h1>
                                        <p class="text-sm text-muted-foreground">{p.address.clone()}</p>
                                    </div>
                                    <Badge variant=badge_variant>{status_text}</Badge>
                                </div>

                                <div class="text-sm text-muted-foreground">
                                    {format!("Up to {} guests", p.max_guests)}
                                </div>

                                <Show when={
                                    let has_description = !p.description.trim().is_empty();
                                    move || has_description
                                } fallback=|| ().into_view()>
                                    <p class="whitespace-pre-line text-sm leading-relaxed">
                                        {p.description.clone()}
                                    </p>
                                </Show>

                                <PropertyReviews reviews=p.reviews.clone() />
                            </div>

                            <BookingSidebar property=sidebar_property />
                        </div>
                    }
                })
            }}
        </Show>
    }
}

/// Guest reviews embedded in the detail payload, with the mean rating
/// in the heading.
#[component]
fn PropertyReviews(reviews: Vec<Review>) -> impl IntoView {
    let average = average_rating(&reviews.iter().map(|r| r.rating).collect::<Vec<_>>());
    let count = reviews.len();

    view! {
        <section class="space-y-3 border-t border-border pt-4">
            <h2 class="text-lg font-semibold">
                "Reviews"
                {average.map(|avg| {
                    view! {
                        <span class="ml-2 text-sm font-normal text-muted-foreground">
                            {format!("★ {avg} ({count})")}
                        </span>
                    }
                })}
            </h2>

            {if reviews.is_empty() {
                view! {
                    <p class="text-sm text-muted-foreground">
                        "No reviews yet. Stay here and be the first."
                    </p>
                }
                .into_any()
            } else {
                reviews
                    .into_iter()
                    .map(|review| {
                        let name = review
                            .user
                            .as_ref()
                            .map(|u| u.full_name.clone())
                            .unwrap_or_else(|| "Guest".to_string());
                        let date = review.created_at.as_deref().map(format_date);
                        let stars = "★".repeat(review.rating.min(5) as usize);

                        view! {
                            <div class="space-y-1 rounded-md border border-border p-3">
                                <div class="flex items-center justify-between text-sm">
                                    <span class="font-medium">{name}</span>
                                    <span class="text-xs text-muted-foreground">{date}</span>
                                </div>
                                <div class="text-xs text-amber-500">{stars}</div>
                                <Show when={
                                    let has_comment = !review.comment.trim().is_empty();
                                    move || has_comment
                                } fallback=|| ().into_view()>
                                    <p class="text-sm leading-relaxed">{review.comment.clone()}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}

/// Reservation box with a live price estimate. The estimate mirrors the
/// backend formula but is advisory; the backend persists the
/// authoritative total when the booking is created.
#[component]
fn BookingSidebar(property: Property) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let navigate = StoredValue::new(use_navigate());

    let check_in: RwSignal<String> = RwSignal::new(String::new());
    let check_out: RwSignal<String> = RwSignal::new(String::new());
    let guest_count: RwSignal<String> = RwSignal::new("1".to_string());
    let reserving: RwSignal<bool> = RwSignal::new(false);
    let saving: RwSignal<bool> = RwSignal::new(false);

    let property = StoredValue::new(property);
    let nightly_rate = property.with_value(|p| p.price_per_night);
    let cleaning_fee = property.with_value(|p| p.cleaning_fee);
    let max_guests = property.with_value(|p| p.max_guests);

    let quote = Memo::new(move |_| {
        booking_estimate(nightly_rate, cleaning_fee, &check_in.get(), &check_out.get())
    });

    let on_reserve = move |_| {
        if !app_state.0.session.get_untracked().is_authenticated() {
            navigate.with_value(|nav| nav("/login", Default::default()));
            return;
        }

        let estimate = quote.get_untracked();
        if !estimate.is_payable() {
            app_state
                .0
                .toast_error("Select your check-in and check-out dates first");
            return;
        }

        let guests = guest_count
            .get_untracked()
            .trim()
            .parse::<u32>()
            .unwrap_or(1)
            .clamp(1, max_guests);

        let request = CreateBookingRequest {
            property_id: property.with_value(|p| p.id),
            check_in: check_in.get_untracked(),
            check_out: check_out.get_untracked(),
            guest_count: guests,
        };

        let client = app_state.0.api_client.get_untracked();
        reserving.set(true);

        spawn_local(async move {
            match client.create_booking(&request).await {
                Ok(_) => {
                    app_state
                        .0
                        .toast_success("Booking created. Please complete payment.");
                    navigate.with_value(|nav| nav("/my-bookings", Default::default()));
                }
                Err(e) => app_state.0.report_error(&e),
            }
            reserving.set(false);
        });
    };

    let on_save = move |_| {
        if !app_state.0.session.get_untracked().is_authenticated() {
            navigate.with_value(|nav| nav("/login", Default::default()));
            return;
        }

        let client = app_state.0.api_client.get_untracked();
        let id = property.with_value(|p| p.id);
        saving.set(true);

        spawn_local(async move {
            match client.add_to_wishlist(id).await {
                Ok(_) => app_state.0.toast_success("Saved to wishlist"),
                Err(e) => app_state.0.report_error(&e),
            }
            saving.set(false);
        });
    };

    view! {
        <Card class="h-fit lg:sticky lg:top-20">
            <CardHeader>
                <CardTitle class="text-lg">
                    {format_vnd(nightly_rate)}
                    <span class="text-sm font-normal text-muted-foreground">" / night"</span>
                </CardTitle>
                <CardDescription class="text-xs">
                    "Taxes not included."
                </CardDescription>
            </CardHeader>

            <CardContent class="flex flex-col gap-3">
                <div class="grid grid-cols-2 gap-2">
                    <div class="flex flex-col gap-1.5">
                        <Label html_for="check_in" class="text-xs">"Check-in"</Label>
                        <Input id="check_in" r#type="date" bind_value=check_in class="h-8 text-sm" />
                    </div>
                    <div class="flex flex-col gap-1.5">
                        <Label html_for="check_out" class="text-xs">"Check-out"</Label>
                        <Input id="check_out" r#type="date" bind_value=check_out class="h-8 text-sm" />
                    </div>
                </div>

                <div class="flex flex-col gap-1.5">
                    <Label html_for="guest_count" class="text-xs">
                        {format!("Guests (max {})", max_guests)}
                    </Label>
                    <Input
                        id="guest_count"
                        r#type="number"
                        min="1"
                        max=max_guests.to_string()
                        bind_value=guest_count
                        class="h-8 text-sm"
                    />
                </div>

                <Show when=move || quote.get().is_payable() fallback=|| ().into_view()>
                    {move || {
                        let q = quote.get();
                        view! {
                            <div class="space-y-2 border-t border-border pt-3 text-sm">
                                <div class="flex justify-between text-muted-foreground">
                                    <span>{format!("{} x {} nights", format_vnd(nightly_rate), q.nights)}</span>
                                    <span>{format_vnd(q.room_price)}</span>
                                </div>
                                <div class="flex justify-between text-muted-foreground">
                                    <span>"Service fee (10%)"</span>
                                    <span>{format_vnd(q.service_fee)}</span>
                                </div>
                                <div class="flex justify-between text-muted-foreground">
                                    <span>"Cleaning fee"</span>
                                    <span>{format_vnd(q.cleaning_fee)}</span>
                                </div>
                                <div class="flex justify-between border-t border-border pt-2 font-semibold">
                                    <span>"Total"</span>
                                    <span>{format_vnd(q.total)}</span>
                                </div>
                            </div>
                        }
                    }}
                </Show>

                <Button
                    class="w-full"
                    attr:disabled=move || reserving.get()
                    on:click=on_reserve
                >
                    <span class="inline-flex items-center gap-2">
                        <Show when=move || reserving.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {move || if reserving.get() { "Reserving..." } else { "Reserve" }}
                    </span>
                </Button>

                <Button
                    class="w-full"
                    size=ButtonSize::Sm
                    variant=ButtonVariant::Outline
                    attr:disabled=move || saving.get()
                    on:click=on_save
                >
                    "Save to wishlist"
                </Button>
            </CardContent>
        </Card>
    }
}
