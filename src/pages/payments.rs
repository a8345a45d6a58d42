use crate::components::pagination::Pagination;
use crate::components::ui::{
    Badge, Card, CardContent, Spinner, Table, TableBody, TableCell, TableHead, TableHeader,
    TableRow,
};
use crate::listing::{paginate, ListQuery, ListSlice};
use crate::models::Payment;
use crate::pages::payment_badge;
use crate::state::AppContext;
use crate::util::{format_date, format_vnd};
use leptos::prelude::*;
use leptos::task::spawn_local;

const STATUS_TABS: [(&str, &str); 5] = [
    ("", "All"),
    ("PENDING", "Pending"),
    ("SUCCESS", "Success"),
    ("FAILED", "Failed"),
    ("REFUNDED", "Refunded"),
];

/// The signed-in guest's payment history with per-status totals. The
/// sums cover every matching payment, not just the visible page.
#[component]
pub fn MyPaymentsPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let payments: RwSignal<Vec<Payment>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let status: RwSignal<String> = RwSignal::new(String::new());
    let page: RwSignal<usize> = RwSignal::new(1);

    Effect::new(move |_| {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.list_my_payments().await {
                Ok(items) => payments.set(items),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    });

    Effect::new(move |prev: Option<(String, String)>| {
        let filters = (String::new(), status.get());
        if crate::listing::page_reset_required(prev.as_ref(), &filters) {
            page.set(1);
        }
        filters
    });

    let slice: Memo<ListSlice<Payment>> = Memo::new(move |_| {
        let query = ListQuery {
            search: String::new(),
            status: status.get(),
            page: page.get(),
        };
        paginate(&payments.get(), &query, |_| vec![], |p| p.status.to_string())
    });

    let overall = Memo::new(move |_| {
        let all = payments.get();
        (all.len(), all.iter().map(|p| p.amount).sum::<f64>())
    });

    let filtered = Memo::new(move |_| {
        let wanted = status.get();
        let sum = payments
            .get()
            .iter()
            .filter(|p| wanted.is_empty() || p.status.to_string() == wanted)
            .map(|p| p.amount)
            .sum::<f64>();
        (slice.get().filtered_count, sum)
    });

    view! {
        <div class="space-y-4">
            <h1 class="text-xl font-semibold">"My payments"</h1>

            <div class="grid gap-3 sm:grid-cols-2">
                <Card>
                    <CardContent class="space-y-1 py-4">
                        <div class="text-xs text-muted-foreground">"All payments"</div>
                        <div class="text-lg font-semibold">
                            {move || {
                                let (count, amount) = overall.get();
                                format!("{} ({count})", format_vnd(amount))
                            }}
                        </div>
                    </CardContent>
                </Card>
                <Card>
                    <CardContent class="space-y-1 py-4">
                        <div class="text-xs text-muted-foreground">"Current filter"</div>
                        <div class="text-lg font-semibold">
                            {move || {
                                let (count, amount) = filtered.get();
                                format!("{} ({count})", format_vnd(amount))
                            }}
                        </div>
                    </CardContent>
                </Card>
            </div>

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
                        "Loading payments..."
                    </div>
                }
            >
                <Show
                    when=move || !slice.get().rows.is_empty()
                    fallback=|| view! {
                        <div class="rounded-md border border-border bg-muted p-6 text-center text-sm text-muted-foreground">
                            "No payments here yet."
                        </div>
                    }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHead>"Booking"</TableHead>
                                <TableHead>"Amount"</TableHead>
                                <TableHead>"Provider"</TableHead>
                                <TableHead>"Status"</TableHead>
                                <TableHead>"Date"</TableHead>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                slice
                                    .get()
                                    .rows
                                    .into_iter()
                                    .map(|payment| {
                                        let stay = payment
                                            .booking
                                            .as_ref()
                                            .and_then(|b| b.property.as_ref())
                                            .map(|p| p.title.clone())
                                            .unwrap_or_else(|| format!("Booking #{}", payment.booking_id));

                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <div class="space-y-0.5">
                                                        <div class="text-sm font-medium">{stay}</div>
                                                        <div class="text-xs text-muted-foreground">
                                                            {payment
                                                                .transaction_code
                                                                .clone()
                                                                .unwrap_or_else(|| "-".to_string())}
                                                        </div>
                                                    </div>
                                                </TableCell>
                                                <TableCell class="font-medium">
                                                    {format_vnd(payment.amount)}
                                                </TableCell>
                                                <TableCell>{payment.provider.clone()}</TableCell>
                                                <TableCell>
                                                    <Badge variant=payment_badge(payment.status)>
                                                        {payment.status.to_string()}
                                                    </Badge>
                                                </TableCell>
                                                <TableCell class="text-xs text-muted-foreground">
                                                    {payment
                                                        .payment_date
                                                        .as_deref()
                                                        .map(format_date)
                                                        .unwrap_or_default()}
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
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
