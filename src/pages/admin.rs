use crate::api::SendNotificationRequest;
use crate::components::pagination::Pagination;
use crate::components::ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input,
    Label, Select, Spinner, Table, TableBody, TableCell, TableHead, TableHeader, TableRow,
    Textarea,
};
use crate::listing::{paginate, ListQuery, ListSlice};
use crate::models::{
    Booking, BookingStatus, DashboardStats, Notification, NotificationKind, Payment, PaymentStatus,
    Property, Report, Role, User,
};
use crate::pages::{
    booking_badge, notification_badge, payment_badge, property_badge, report_badge, role_badge,
};
use crate::state::AppContext;
use crate::util::{format_date, format_vnd};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::str::FromStr;

/// One set of list controls per admin table: free-text search, a status
/// dropdown carrying backend enum values, and the page signal the
/// controls reset on any filter change.
struct ListControls {
    search: RwSignal<String>,
    status: RwSignal<String>,
    page: RwSignal<usize>,
}

impl ListControls {
    fn new() -> Self {
        let controls = Self {
            search: RwSignal::new(String::new()),
            status: RwSignal::new(String::new()),
            page: RwSignal::new(1),
        };
        let (search, status, page) = (controls.search, controls.status, controls.page);
        Effect::new(move |prev: Option<(String, String)>| {
            let filters = (search.get(), status.get());
            if crate::listing::page_reset_required(prev.as_ref(), &filters) {
                page.set(1);
            }
            filters
        });
        controls
    }
}

#[component]
fn FilterBar(
    search: RwSignal<String>,
    status: RwSignal<String>,
    #[prop(into)] placeholder: String,
    /// (value, label) pairs for the status dropdown; "" is "all".
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-2">
            <div class="w-full max-w-xs">
                <Input placeholder=placeholder bind_value=search class="h-8 text-sm" />
            </div>
            <div class="w-44">
                <Select bind_value=status class="h-8 text-xs">
                    <option value="">"All"</option>
                    {options
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </Select>
            </div>
        </div>
    }
}

#[component]
fn ListStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] empty: Signal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div class="flex items-center gap-2 text-sm text-muted-foreground">
                    <Spinner />
                    "Loading..."
                </div>
            }
        >
            <Show
                when=move || !empty.get()
                fallback=|| view! {
                    <div class="rounded-md border border-border bg-muted p-6 text-center text-sm text-muted-foreground">
                        "No matching records."
                    </div>
                }
            >
                {move || children.with_value(|c| c())}
            </Show>
        </Show>
    }
}

// ----- dashboard -----

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let stats: RwSignal<DashboardStats> = RwSignal::new(DashboardStats::default());
    let loading: RwSignal<bool> = RwSignal::new(true);

    Effect::new(move |_| {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.admin_dashboard_stats().await {
                Ok(s) => stats.set(s),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    });

    let stat_card = |title: &'static str, value: Signal<String>| {
        view! {
            <Card>
                <CardHeader class="pb-2">
                    <CardTitle class="text-xs font-medium text-muted-foreground">{title}</CardTitle>
                </CardHeader>
                <CardContent>
                    <div class="text-2xl font-semibold">{move || value.get()}</div>
                </CardContent>
            </Card>
        }
    };

    view! {
        <div class="space-y-4">
            <h1 class="text-xl font-semibold">"Dashboard"</h1>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading stats..."
                    </div>
                }
            >
                <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                    {stat_card("Users", Signal::derive(move || stats.get().total_users.to_string()))}
                    {stat_card(
                        "Properties",
                        Signal::derive(move || stats.get().total_properties.to_string()),
                    )}
                    {stat_card(
                        "Bookings",
                        Signal::derive(move || stats.get().total_bookings.to_string()),
                    )}
                    {stat_card(
                        "Revenue",
                        Signal::derive(move || format_vnd(stats.get().total_revenue)),
                    )}
                </div>

                <nav class="flex flex-wrap gap-2 text-sm">
                    <a class="rounded-md border border-border px-3 py-1.5 hover:bg-muted" href="/admin/users">"Users"</a>
                    <a class="rounded-md border border-border px-3 py-1.5 hover:bg-muted" href="/admin/properties">"Properties"</a>
                    <a class="rounded-md border border-border px-3 py-1.5 hover:bg-muted" href="/admin/bookings">"Bookings"</a>
                    <a class="rounded-md border border-border px-3 py-1.5 hover:bg-muted" href="/admin/payments">"Payments"</a>
                    <a class="rounded-md border border-border px-3 py-1.5 hover:bg-muted" href="/admin/notifications">"Notifications"</a>
                    <a class="rounded-md border border-border px-3 py-1.5 hover:bg-muted" href="/admin/send-notification">"Send notification"</a>
                    <a class="rounded-md border border-border px-3 py-1.5 hover:bg-muted" href="/admin/reports">"Reports"</a>
                </nav>
            </Show>
        </div>
    }
}

// ----- users -----

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let users: RwSignal<Vec<User>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let busy_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let controls = ListControls::new();
    let (search, status, page) = (controls.search, controls.status, controls.page);

    let load = move || {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.admin_list_users().await {
                Ok(items) => users.set(items),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let slice: Memo<ListSlice<User>> = Memo::new(move |_| {
        let query = ListQuery {
            search: search.get(),
            status: status.get(),
            page: page.get(),
        };
        paginate(
            &users.get(),
            &query,
            |u| vec![u.full_name.clone(), u.email.clone()],
            |u| u.role.to_string(),
        )
    });

    let on_role_change = move |id: i64, value: String| {
        let Ok(role) = Role::from_str(&value) else {
            return;
        };
        let client = app_state.0.api_client.get_untracked();
        busy_id.set(Some(id));
        spawn_local(async move {
            match client.admin_set_user_role(id, role).await {
                Ok(_) => {
                    app_state.0.toast_success("Role updated");
                    load();
                }
                Err(e) => app_state.0.report_error(&e),
            }
            busy_id.set(None);
        });
    };

    let on_toggle_verified = move |id: i64, verified: bool| {
        let client = app_state.0.api_client.get_untracked();
        busy_id.set(Some(id));
        spawn_local(async move {
            match client.admin_set_user_verified(id, verified).await {
                Ok(_) => {
                    app_state.0.toast_success("User updated");
                    load();
                }
                Err(e) => app_state.0.report_error(&e),
            }
            busy_id.set(None);
        });
    };

    view! {
        <div class="space-y-4">
            <h1 class="text-xl font-semibold">"Users"</h1>

            <FilterBar
                search
                status
                placeholder="Search name or email..."
                options=vec![("GUEST", "Guest"), ("HOST", "Host"), ("ADMIN", "Admin")]
            />

            <ListStatus
                loading=Signal::derive(move || loading.get())
                empty=Signal::derive(move || slice.get().rows.is_empty())
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHead>"User"</TableHead>
                            <TableHead>"Role"</TableHead>
                            <TableHead>"Verified"</TableHead>
                            <TableHead class="text-right">"Actions"</TableHead>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            slice
                                .get()
                                .rows
                                .into_iter()
                                .map(|user| {
                                    let id = user.id;
                                    let verified = user.is_verified;
                                    let role_value = RwSignal::new(user.role.to_string());
                                    let busy = move || busy_id.get() == Some(id);

                                    Effect::new(move |prev: Option<()>| {
                                        let value = role_value.get();
                                        if prev.is_some() {
                                            on_role_change(id, value);
                                        }
                                    });

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <div class="space-y-0.5">
                                                    <div class="text-sm font-medium">{user.full_name.clone()}</div>
                                                    <div class="text-xs text-muted-foreground">{user.email.clone()}</div>
                                                </div>
                                            </TableCell>
                                            <TableCell>
                                                <div class="flex items-center gap-2">
                                                    <Badge variant=role_badge(user.role)>{user.role.to_string()}</Badge>
                                                    <Select bind_value=role_value disabled=busy() class="h-8 w-28 text-xs">
                                                        <option value="GUEST">"Guest"</option>
                                                        <option value="HOST">"Host"</option>
                                                        <option value="ADMIN">"Admin"</option>
                                                    </Select>
                                                </div>
                                            </TableCell>
                                            <TableCell>
                                                {if verified { "Yes" } else { "No" }}
                                            </TableCell>
                                            <TableCell class="text-right">
                                                <Button
                                                    variant=ButtonVariant::Outline
                                                    size=ButtonSize::Sm
                                                    attr:disabled=busy
                                                    on:click=move |_| on_toggle_verified(id, !verified)
                                                >
                                                    {if verified { "Revoke" } else { "Verify" }}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </ListStatus>

            <Pagination
                page
                current=Signal::derive(move || slice.get().page)
                total_pages=Signal::derive(move || slice.get().total_pages)
            />
        </div>
    }
}

// ----- bookings -----

#[component]
pub fn AdminBookingsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let bookings: RwSignal<Vec<Booking>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let busy_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let controls = ListControls::new();
    let (search, status, page) = (controls.search, controls.status, controls.page);

    let load = move || {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.admin_list_bookings().await {
                Ok(items) => bookings.set(items),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let slice: Memo<ListSlice<Booking>> = Memo::new(move |_| {
        let query = ListQuery {
            search: search.get(),
            status: status.get(),
            page: page.get(),
        };
        paginate(
            &bookings.get(),
            &query,
            |b| {
                vec![
                    b.id.to_string(),
                    b.guest
                        .as_ref()
                        .map(|g| g.full_name.clone())
                        .unwrap_or_default(),
                    b.property
                        .as_ref()
                        .map(|p| p.title.clone())
                        .unwrap_or_default(),
                ]
            },
            |b| b.status.to_string(),
        )
    });

    let on_set_status = move |id: i64, status: BookingStatus| {
        let client = app_state.0.api_client.get_untracked();
        busy_id.set(Some(id));
        spawn_local(async move {
            match client.admin_set_booking_status(id, status).await {
                Ok(_) => {
                    app_state.0.toast_success("Booking updated");
                    load();
                }
                Err(e) => app_state.0.report_error(&e),
            }
            busy_id.set(None);
        });
    };

    view! {
        <div class="space-y-4">
            <h1 class="text-xl font-semibold">"Bookings"</h1>

            <FilterBar
                search
                status
                placeholder="Search guest, stay or id..."
                options=vec![
                    ("PENDING", "Pending"),
                    ("CONFIRMED", "Confirmed"),
                    ("CANCELLED", "Cancelled"),
                    ("COMPLETED", "Completed"),
                    ("REFUNDED", "Refunded"),
                ]
            />

            <ListStatus
                loading=Signal::derive(move || loading.get())
                empty=Signal::derive(move || slice.get().rows.is_empty())
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHead>"Id"</TableHead>
                            <TableHead>"Guest"</TableHead>
                            <TableHead>"Stay"</TableHead>
                            <TableHead>"Dates"</TableHead>
                            <TableHead>"Total"</TableHead>
                            <TableHead>"Status"</TableHead>
                            <TableHead class="text-right">"Actions"</TableHead>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            slice
                                .get()
                                .rows
                                .into_iter()
                                .map(|booking| {
                                    let id = booking.id;
                                    let pending = booking.status == BookingStatus::Pending;
                                    let busy = move || busy_id.get() == Some(id);

                                    view! {
                                        <TableRow>
                                            <TableCell>{format!("#{id}")}</TableCell>
                                            <TableCell>
                                                {booking
                                                    .guest
                                                    .as_ref()
                                                    .map(|g| g.full_name.clone())
                                                    .unwrap_or_else(|| "-".to_string())}
                                            </TableCell>
                                            <TableCell>
                                                {booking
                                                    .property
                                                    .as_ref()
                                                    .map(|p| p.title.clone())
                                                    .unwrap_or_else(|| format!("#{}", booking.property_id))}
                                            </TableCell>
                                            <TableCell class="text-xs text-muted-foreground">
                                                {format!(
                                                    "{} to {}",
                                                    format_date(&booking.check_in),
                                                    format_date(&booking.check_out),
                                                )}
                                            </TableCell>
                                            <TableCell>{format_vnd(booking.total_price)}</TableCell>
                                            <TableCell>
                                                <Badge variant=booking_badge(booking.status)>
                                                    {booking.status.to_string()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell class="text-right">
                                                <Show when=move || pending fallback=|| ().into_view()>
                                                    <div class="flex justify-end gap-2">
                                                        <Button
                                                            size=ButtonSize::Sm
                                                            attr:disabled=busy
                                                            on:click=move |_| on_set_status(id, BookingStatus::Confirmed)
                                                        >
                                                            "Approve"
                                                        </Button>
                                                        <Button
                                                            variant=ButtonVariant::Outline
                                                            size=ButtonSize::Sm
                                                            attr:disabled=busy
                                                            on:click=move |_| on_set_status(id, BookingStatus::Cancelled)
                                                        >
                                                            "Cancel"
                                                        </Button>
                                                    </div>
                                                </Show>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </ListStatus>

            <Pagination
                page
                current=Signal::derive(move || slice.get().page)
                total_pages=Signal::derive(move || slice.get().total_pages)
            />
        </div>
    }
}

// ----- properties -----

#[component]
pub fn AdminPropertiesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let properties: RwSignal<Vec<Property>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let busy_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let controls = ListControls::new();
    let (search, status, page) = (controls.search, controls.status, controls.page);

    let load = move || {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.admin_list_properties().await {
                Ok(items) => properties.set(items),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let slice: Memo<ListSlice<Property>> = Memo::new(move |_| {
        let query = ListQuery {
            search: search.get(),
            status: status.get(),
            page: page.get(),
        };
        paginate(
            &properties.get(),
            &query,
            |p| {
                vec![
                    p.title.clone(),
                    p.address.clone(),
                    p.owner
                        .as_ref()
                        .map(|o| o.full_name.clone())
                        .unwrap_or_default(),
                ]
            },
            |p| p.status.to_string(),
        )
    });

    let on_delete = move |id: i64, title: String| {
        let confirmed = window()
            .confirm_with_message(&format!("Delete \"{title}\"? This cannot be undone."))
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let client = app_state.0.api_client.get_untracked();
        busy_id.set(Some(id));
        spawn_local(async move {
            match client.delete_property(id).await {
                Ok(_) => {
                    app_state.0.toast_success("Listing deleted");
                    load();
                }
                Err(e) => app_state.0.report_error(&e),
            }
            busy_id.set(None);
        });
    };

    view! {
        <div class="space-y-4">
            <h1 class="text-xl font-semibold">"Properties"</h1>

            <FilterBar
                search
                status
                placeholder="Search title, address or owner..."
                options=vec![
                    ("ACTIVE", "Active"),
                    ("INACTIVE", "Inactive"),
                    ("MAINTENANCE", "Maintenance"),
                ]
            />

            <ListStatus
                loading=Signal::derive(move || loading.get())
                empty=Signal::derive(move || slice.get().rows.is_empty())
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHead>"Listing"</TableHead>
                            <TableHead>"Owner"</TableHead>
                            <TableHead>"Price / night"</TableHead>
                            <TableHead>"Status"</TableHead>
                            <TableHead class="text-right">"Actions"</TableHead>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            slice
                                .get()
                                .rows
                                .into_iter()
                                .map(|property| {
                                    let id = property.id;
                                    let delete_title = property.title.clone();
                                    let busy = move || busy_id.get() == Some(id);

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <div class="space-y-0.5">
                                                    <a
                                                        href=format!("/properties/{id}")
                                                        class="text-sm font-medium hover:underline"
                                                    >
                                                        {property.title.clone()}
                                                    </a>
                                                    <div class="text-xs text-muted-foreground">
                                                        {property.address.clone()}
                                                    </div>
                                                </div>
                                            </TableCell>
                                            <TableCell>
                                                {property
                                                    .owner
                                                    .as_ref()
                                                    .map(|o| o.full_name.clone())
                                                    .unwrap_or_else(|| "-".to_string())}
                                            </TableCell>
                                            <TableCell>{format_vnd(property.price_per_night)}</TableCell>
                                            <TableCell>
                                                <Badge variant=property_badge(property.status)>
                                                    {property.status.to_string()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell class="text-right">
                                                <Button
                                                    variant=ButtonVariant::Destructive
                                                    size=ButtonSize::Sm
                                                    attr:disabled=busy
                                                    on:click=move |_| on_delete(id, delete_title.clone())
                                                >
                                                    "Delete"
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </ListStatus>

            <Pagination
                page
                current=Signal::derive(move || slice.get().page)
                total_pages=Signal::derive(move || slice.get().total_pages)
            />
        </div>
    }
}

// ----- payments -----

#[component]
pub fn AdminPaymentsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let payments: RwSignal<Vec<Payment>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let busy_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let controls = ListControls::new();
    let (search, status, page) = (controls.search, controls.status, controls.page);

    let load = move || {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.admin_list_payments().await {
                Ok(items) => payments.set(items),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let slice: Memo<ListSlice<Payment>> = Memo::new(move |_| {
        let query = ListQuery {
            search: search.get(),
            status: status.get(),
            page: page.get(),
        };
        paginate(
            &payments.get(),
            &query,
            |p| {
                vec![
                    p.id.to_string(),
                    p.booking_id.to_string(),
                    p.transaction_code.clone().unwrap_or_default(),
                ]
            },
            |p| p.status.to_string(),
        )
    });

    let on_refund = move |id: i64| {
        let confirmed = window()
            .confirm_with_message("Refund this payment?")
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let client = app_state.0.api_client.get_untracked();
        busy_id.set(Some(id));
        spawn_local(async move {
            match client.set_payment_status(id, PaymentStatus::Refunded).await {
                Ok(_) => {
                    app_state.0.toast_success("Payment refunded");
                    load();
                }
                Err(e) => app_state.0.report_error(&e),
            }
            busy_id.set(None);
        });
    };

    view! {
        <div class="space-y-4">
            <h1 class="text-xl font-semibold">"Payments"</h1>

            <FilterBar
                search
                status
                placeholder="Search id, booking or code..."
                options=vec![
                    ("PENDING", "Pending"),
                    ("SUCCESS", "Success"),
                    ("FAILED", "Failed"),
                    ("REFUNDED", "Refunded"),
                ]
            />

            <ListStatus
                loading=Signal::derive(move || loading.get())
                empty=Signal::derive(move || slice.get().rows.is_empty())
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHead>"Id"</TableHead>
                            <TableHead>"Booking"</TableHead>
                            <TableHead>"Amount"</TableHead>
                            <TableHead>"Provider"</TableHead>
                            <TableHead>"Date"</TableHead>
                            <TableHead>"Status"</TableHead>
                            <TableHead class="text-right">"Actions"</TableHead>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            slice
                                .get()
                                .rows
                                .into_iter()
                                .map(|payment| {
                                    let id = payment.id;
                                    let refundable = payment.status == PaymentStatus::Success;
                                    let busy = move || busy_id.get() == Some(id);

                                    view! {
                                        <TableRow>
                                            <TableCell>{format!("#{id}")}</TableCell>
                                            <TableCell>{format!("#{}", payment.booking_id)}</TableCell>
                                            <TableCell>{format_vnd(payment.amount)}</TableCell>
                                            <TableCell>{payment.provider.clone()}</TableCell>
                                            <TableCell class="text-xs text-muted-foreground">
                                                {payment
                                                    .payment_date
                                                    .as_deref()
                                                    .map(format_date)
                                                    .unwrap_or_else(|| "-".to_string())}
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=payment_badge(payment.status)>
                                                    {payment.status.to_string()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell class="text-right">
                                                <Show when=move || refundable fallback=|| ().into_view()>
                                                    <Button
                                                        variant=ButtonVariant::Outline
                                                        size=ButtonSize::Sm
                                                        attr:disabled=busy
                                                        on:click=move |_| on_refund(id)
                                                    >
                                                        "Refund"
                                                    </Button>
                                                </Show>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </ListStatus>

            <Pagination
                page
                current=Signal::derive(move || slice.get().page)
                total_pages=Signal::derive(move || slice.get().total_pages)
            />
        </div>
    }
}

// ----- notifications -----

#[component]
pub fn AdminNotificationsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let notifications: RwSignal<Vec<Notification>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let controls = ListControls::new();
    let (search, status, page) = (controls.search, controls.status, controls.page);

    Effect::new(move |_| {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.admin_list_notifications().await {
                Ok(items) => notifications.set(items),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    });

    let slice: Memo<ListSlice<Notification>> = Memo::new(move |_| {
        let query = ListQuery {
            search: search.get(),
            status: status.get(),
            page: page.get(),
        };
        paginate(
            &notifications.get(),
            &query,
            |n| {
                vec![
                    n.title.clone(),
                    n.message.clone(),
                    n.user
                        .as_ref()
                        .map(|u| u.full_name.clone())
                        .unwrap_or_default(),
                ]
            },
            |n| n.kind.to_string(),
        )
    });

    view! {
        <div class="space-y-4">
            <h1 class="text-xl font-semibold">"Notifications"</h1>

            <FilterBar
                search
                status
                placeholder="Search title, message or user..."
                options=vec![
                    ("SYSTEM", "System"),
                    ("BOOKING", "Booking"),
                    ("PAYMENT", "Payment"),
                ]
            />

            <ListStatus
                loading=Signal::derive(move || loading.get())
                empty=Signal::derive(move || slice.get().rows.is_empty())
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHead>"Title"</TableHead>
                            <TableHead>"Recipient"</TableHead>
                            <TableHead>"Type"</TableHead>
                            <TableHead>"Read"</TableHead>
                            <TableHead>"Date"</TableHead>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            slice
                                .get()
                                .rows
                                .into_iter()
                                .map(|n| {
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <div class="space-y-0.5">
                                                    <div class="text-sm font-medium">{n.title.clone()}</div>
                                                    <div class="max-w-md truncate text-xs text-muted-foreground">
                                                        {n.message.clone()}
                                                    </div>
                                                </div>
                                            </TableCell>
                                            <TableCell>
                                                {n.user
                                                    .as_ref()
                                                    .map(|u| u.full_name.clone())
                                                    .unwrap_or_else(|| "-".to_string())}
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=notification_badge(n.kind)>{n.kind.to_string()}</Badge>
                                            </TableCell>
                                            <TableCell>{if n.is_read { "Yes" } else { "No" }}</TableCell>
                                            <TableCell class="text-xs text-muted-foreground">
                                                {n.created_at.as_deref().map(format_date).unwrap_or_default()}
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </ListStatus>

            <Pagination
                page
                current=Signal::derive(move || slice.get().page)
                total_pages=Signal::derive(move || slice.get().total_pages)
            />
        </div>
    }
}

// ----- reports -----

#[component]
pub fn AdminReportsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let reports: RwSignal<Vec<Report>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let controls = ListControls::new();
    let (search, status, page) = (controls.search, controls.status, controls.page);

    Effect::new(move |_| {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.admin_list_reports().await {
                Ok(items) => reports.set(items),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    });

    let slice: Memo<ListSlice<Report>> = Memo::new(move |_| {
        let query = ListQuery {
            search: search.get(),
            status: status.get(),
            page: page.get(),
        };
        paginate(
            &reports.get(),
            &query,
            |r| {
                vec![
                    r.content.clone().unwrap_or_default(),
                    r.message.clone().unwrap_or_default(),
                    r.sender
                        .as_ref()
                        .map(|s| s.full_name.clone())
                        .unwrap_or_default(),
                ]
            },
            |r| r.kind.to_string(),
        )
    });

    view! {
        <div class="space-y-4">
            <h1 class="text-xl font-semibold">"Reports"</h1>

            <FilterBar
                search
                status
                placeholder="Search content or sender..."
                options=vec![
                    ("REPORT", "Report"),
                    ("COMPLAINT", "Complaint"),
                    ("VIOLATION", "Violation"),
                ]
            />

            <ListStatus
                loading=Signal::derive(move || loading.get())
                empty=Signal::derive(move || slice.get().rows.is_empty())
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHead>"Id"</TableHead>
                            <TableHead>"Type"</TableHead>
                            <TableHead>"Content"</TableHead>
                            <TableHead>"Sender"</TableHead>
                            <TableHead>"Date"</TableHead>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            slice
                                .get()
                                .rows
                                .into_iter()
                                .map(|report| {
                                    let body = report
                                        .content
                                        .clone()
                                        .or_else(|| report.message.clone())
                                        .unwrap_or_else(|| "-".to_string());

                                    view! {
                                        <TableRow>
                                            <TableCell>{format!("#{}", report.id)}</TableCell>
                                            <TableCell>
                                                <Badge variant=report_badge(report.kind)>{report.kind.to_string()}</Badge>
                                            </TableCell>
                                            <TableCell>
                                                <div class="max-w-md truncate text-sm">{body}</div>
                                            </TableCell>
                                            <TableCell>
                                                {report
                                                    .sender
                                                    .as_ref()
                                                    .map(|s| s.full_name.clone())
                                                    .unwrap_or_else(|| "-".to_string())}
                                            </TableCell>
                                            <TableCell class="text-xs text-muted-foreground">
                                                {report.created_at.as_deref().map(format_date).unwrap_or_default()}
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </ListStatus>

            <Pagination
                page
                current=Signal::derive(move || slice.get().page)
                total_pages=Signal::derive(move || slice.get().total_pages)
            />
        </div>
    }
}

// ----- send notification -----

/// Composes a SYSTEM notification to one host. Recipients come from the
/// user list filtered to the HOST role; the form clears after sending.
#[component]
pub fn AdminSendNotificationPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let hosts: RwSignal<Vec<User>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let recipient: RwSignal<String> = RwSignal::new(String::new());
    let title: RwSignal<String> = RwSignal::new(String::new());
    let message: RwSignal<String> = RwSignal::new(String::new());
    let sending: RwSignal<bool> = RwSignal::new(false);

    Effect::new(move |_| {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.admin_list_users().await {
                Ok(items) => {
                    hosts.set(items.into_iter().filter(|u| u.role == Role::Host).collect());
                }
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Ok(user_id) = recipient.get_untracked().parse::<i64>() else {
            app_state.0.toast_error("Pick a host to notify");
            return;
        };
        let subject = title.get_untracked().trim().to_string();
        if subject.is_empty() {
            app_state.0.toast_error("Title is required");
            return;
        }
        let body = message.get_untracked().trim().to_string();
        if body.is_empty() {
            app_state.0.toast_error("Message is required");
            return;
        }
        let Some(sender_id) = app_state.0.session.get_untracked().user().map(|u| u.id) else {
            return;
        };

        let request = SendNotificationRequest {
            user_id,
            sender_id,
            title: subject,
            message: body,
            kind: NotificationKind::System,
        };

        let client = app_state.0.api_client.get_untracked();
        sending.set(true);
        spawn_local(async move {
            match client.admin_send_notification(&request).await {
                Ok(_) => {
                    app_state.0.toast_success("Notification sent");
                    recipient.set(String::new());
                    title.set(String::new());
                    message.set(String::new());
                }
                Err(e) => app_state.0.report_error(&e),
            }
            sending.set(false);
        });
    };

    view! {
        <div class="mx-auto w-full max-w-xl space-y-4">
            <h1 class="text-xl font-semibold">"Send notification"</h1>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading hosts..."
                    </div>
                }
            >
                <Card>
                    <CardContent>
                        <form class="flex flex-col gap-3" on:submit=on_submit>
                            <div class="flex flex-col gap-1.5">
                                <Label html_for="recipient" class="text-xs">"Host"</Label>
                                <Select id="recipient" bind_value=recipient class="h-8 text-sm">
                                    <option value="">"Select a host..."</option>
                                    {move || {
                                        hosts
                                            .get()
                                            .into_iter()
                                            .map(|u| {
                                                view! {
                                                    <option value=u.id.to_string()>
                                                        {format!("{} ({})", u.full_name, u.email)}
                                                    </option>
                                                }
                                            })
                                            .collect_view()
                                    }}
                                </Select>
                            </div>

                            <div class="flex flex-col gap-1.5">
                                <Label html_for="notify_title" class="text-xs">"Title"</Label>
                                <Input
                                    id="notify_title"
                                    bind_value=title
                                    required=true
                                    class="h-8 text-sm"
                                />
                            </div>

                            <div class="flex flex-col gap-1.5">
                                <Label html_for="notify_message" class="text-xs">"Message"</Label>
                                <Textarea
                                    id="notify_message"
                                    bind_value=message
                                    required=true
                                    rows=5
                                    class="text-sm"
                                />
                            </div>

                            <Button class="w-full" size=ButtonSize::Sm attr:disabled=move || sending.get()>
                                <span class="inline-flex items-center gap-2">
                                    <Show when=move || sending.get() fallback=|| ().into_view()>
                                        <Spinner />
                                    </Show>
                                    {move || if sending.get() { "Sending..." } else { "Send" }}
                                </span>
                            </Button>
                        </form>
                    </CardContent>
                </Card>
            </Show>
        </div>
    }
}
