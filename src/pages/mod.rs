mod admin;
mod auth;
mod bookings;
mod host;
mod notifications;
mod payments;
mod profile;
mod properties;
mod wishlist;

pub use admin::*;
pub use auth::*;
pub use bookings::*;
pub use host::*;
pub use notifications::*;
pub use payments::*;
pub use profile::*;
pub use properties::*;
pub use wishlist::*;

use crate::components::header::Header;
use crate::components::ui::BadgeVariant;
use crate::models::{BookingStatus, NotificationKind, PaymentStatus, PropertyStatus, ReportKind, Role};
use crate::state::AppContext;
use leptos::prelude::*;

#[component]
pub fn AppShell(children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);

    view! {
        <div class="min-h-screen bg-background">
            <Header />
            <main class="mx-auto w-full max-w-6xl px-4 py-8">
                {move || children.with_value(|c| c())}
            </main>
        </div>
    }
}

/// Gate for signed-in routes: anonymous sessions see the login page in
/// place.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let is_authenticated = move || app_state.0.session.get().is_authenticated();

    // Store children so the view macro sees an `Fn` (not an `FnOnce`).
    let children = StoredValue::new(children);

    view! {
        <Show when=is_authenticated fallback=move || view! { <LoginPage /> }>
            <AppShell>
                {move || children.with_value(|c| c())}
            </AppShell>
        </Show>
    }
}

/// Admin routes additionally require the ADMIN role. The profile loads
/// asynchronously after startup, so an unknown role renders a quiet
/// placeholder instead of flashing "not authorized".
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let role = move || app_state.0.session.get().role();
    let children = StoredValue::new(children);

    view! {
        <RequireAuth>
            {move || match role() {
                Some(Role::Admin) => children.with_value(|c| c()).into_any(),
                Some(_) => view! {
                    <div class="rounded-md border border-border bg-muted p-4 text-sm text-muted-foreground">
                        "You do not have access to the admin area."
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="text-sm text-muted-foreground">"Loading account..."</div>
                }
                .into_any(),
            }}
        </RequireAuth>
    }
}

/// Reads a picked file into memory for a multipart upload. `web_sys::File`
/// cannot live in a signal (not thread-safe), so callers store the bytes.
pub(crate) async fn read_file_bytes(file: &web_sys::File) -> Option<Vec<u8>> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .ok()?;
    Some(js_sys::Uint8Array::new(&buffer).to_vec())
}

// Status-to-badge mappings shared by guest and admin tables.

pub(crate) fn booking_badge(status: BookingStatus) -> BadgeVariant {
    match status {
        BookingStatus::Pending => BadgeVariant::Warning,
        BookingStatus::Confirmed => BadgeVariant::Success,
        BookingStatus::Cancelled => BadgeVariant::Destructive,
        BookingStatus::Completed => BadgeVariant::Accent,
        BookingStatus::Refunded => BadgeVariant::Info,
    }
}

pub(crate) fn payment_badge(status: PaymentStatus) -> BadgeVariant {
    match status {
        PaymentStatus::Pending => BadgeVariant::Warning,
        PaymentStatus::Success => BadgeVariant::Success,
        PaymentStatus::Failed => BadgeVariant::Destructive,
        PaymentStatus::Refunded => BadgeVariant::Info,
    }
}

pub(crate) fn property_badge(status: PropertyStatus) -> BadgeVariant {
    match status {
        PropertyStatus::Active => BadgeVariant::Success,
        PropertyStatus::Inactive => BadgeVariant::Default,
        PropertyStatus::Maintenance => BadgeVariant::Warning,
    }
}

pub(crate) fn role_badge(role: Role) -> BadgeVariant {
    match role {
        Role::Guest => BadgeVariant::Default,
        Role::Host => BadgeVariant::Info,
        Role::Admin => BadgeVariant::Accent,
    }
}

pub(crate) fn notification_badge(kind: NotificationKind) -> BadgeVariant {
    match kind {
        NotificationKind::System => BadgeVariant::Default,
        NotificationKind::Booking => BadgeVariant::Info,
        NotificationKind::Payment => BadgeVariant::Success,
    }
}

pub(crate) fn report_badge(kind: ReportKind) -> BadgeVariant {
    match kind {
        ReportKind::Report => BadgeVariant::Default,
        ReportKind::Complaint => BadgeVariant::Warning,
        ReportKind::Violation => BadgeVariant::Destructive,
    }
}
