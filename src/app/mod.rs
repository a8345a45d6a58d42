use crate::components::toast::ToastHost;
use crate::pages::{
    AdminBookingsPage, AdminDashboardPage, AdminNotificationsPage, AdminPaymentsPage,
    AdminPropertiesPage, AdminReportsPage, AdminSendNotificationPage, AdminUsersPage, AppShell,
    HomePage, LoginPage, MyBookingsPage, MyPaymentsPage, MyPropertiesPage, NotificationsPage,
    ProfilePage, PropertyCreatePage, PropertyDetailPage, PropertyEditPage, RegisterPage,
    RequireAdmin, RequireAuth, WishlistPage,
};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(AppContext(state));
    // A persisted token kicks off the profile fetch before any route
    // renders; anonymous startup makes no network call.
    state.init();

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("login") view=LoginPage />
                <Route path=path!("signup") view=RegisterPage />

                <Route path=path!("") view=move || view! {
                    <AppShell>
                        <HomePage />
                    </AppShell>
                } />
                <Route path=path!("properties/:id") view=move || view! {
                    <AppShell>
                        <PropertyDetailPage />
                    </AppShell>
                } />

                <Route path=path!("my-bookings") view=move || view! {
                    <RequireAuth>
                        <MyBookingsPage />
                    </RequireAuth>
                } />
                <Route path=path!("wishlist") view=move || view! {
                    <RequireAuth>
                        <WishlistPage />
                    </RequireAuth>
                } />
                <Route path=path!("notifications") view=move || view! {
                    <RequireAuth>
                        <NotificationsPage />
                    </RequireAuth>
                } />
                <Route path=path!("profile") view=move || view! {
                    <RequireAuth>
                        <ProfilePage />
                    </RequireAuth>
                } />
                <Route path=path!("my-payments") view=move || view! {
                    <RequireAuth>
                        <MyPaymentsPage />
                    </RequireAuth>
                } />
                <Route path=path!("my-properties") view=move || view! {
                    <RequireAuth>
                        <MyPropertiesPage />
                    </RequireAuth>
                } />
                <Route path=path!("my-properties/new") view=move || view! {
                    <RequireAuth>
                        <PropertyCreatePage />
                    </RequireAuth>
                } />
                <Route path=path!("my-properties/:id/edit") view=move || view! {
                    <RequireAuth>
                        <PropertyEditPage />
                    </RequireAuth>
                } />

                <Route path=path!("admin/dashboard") view=move || view! {
                    <RequireAdmin>
                        <AdminDashboardPage />
                    </RequireAdmin>
                } />
                <Route path=path!("admin/users") view=move || view! {
                    <RequireAdmin>
                        <AdminUsersPage />
                    </RequireAdmin>
                } />
                <Route path=path!("admin/properties") view=move || view! {
                    <RequireAdmin>
                        <AdminPropertiesPage />
                    </RequireAdmin>
                } />
                <Route path=path!("admin/bookings") view=move || view! {
                    <RequireAdmin>
                        <AdminBookingsPage />
                    </RequireAdmin>
                } />
                <Route path=path!("admin/payments") view=move || view! {
                    <RequireAdmin>
                        <AdminPaymentsPage />
                    </RequireAdmin>
                } />
                <Route path=path!("admin/notifications") view=move || view! {
                    <RequireAdmin>
                        <AdminNotificationsPage />
                    </RequireAdmin>
                } />
                <Route path=path!("admin/send-notification") view=move || view! {
                    <RequireAdmin>
                        <AdminSendNotificationPage />
                    </RequireAdmin>
                } />
                <Route path=path!("admin/reports") view=move || view! {
                    <RequireAdmin>
                        <AdminReportsPage />
                    </RequireAdmin>
                } />
            </Routes>
        </Router>
        <ToastHost />
    }
}
