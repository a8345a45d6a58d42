use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::models::Role;
use crate::state::AppContext;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Top navigation bar. Links are gated by role: hosts see their
/// property tools, admins see the admin area. Rendering is driven by
/// the session signal, so role changes after a profile refresh update
/// the nav without a reload.
#[component]
pub fn Header() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let session = app_state.0.session;
    let navigate = StoredValue::new(use_navigate());

    let is_authenticated = move || session.get().is_authenticated();
    let role = move || session.get().role();
    let display_name = move || {
        session
            .get()
            .user()
            .map(|u| {
                if u.full_name.trim().is_empty() {
                    u.email.clone()
                } else {
                    u.full_name.clone()
                }
            })
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        app_state.0.logout();
        navigate.with_value(|nav| nav("/login", Default::default()));
    };

    view! {
        <header class="sticky top-0 z-40 border-b border-border bg-background/95 backdrop-blur">
            <div class="mx-auto flex h-14 w-full max-w-6xl items-center justify-between gap-4 px-4">
                <div class="flex items-center gap-6">
                    <a href="/" class="text-sm font-semibold text-foreground">"Homestay"</a>

                    <nav class="hidden items-center gap-4 text-sm text-muted-foreground sm:flex">
                        <a class="hover:text-foreground" href="/">"Explore"</a>

                        <Show when=is_authenticated fallback=|| ().into_view()>
                            <a class="hover:text-foreground" href="/my-bookings">"My bookings"</a>
                            <a class="hover:text-foreground" href="/my-payments">"My payments"</a>
                            <a class="hover:text-foreground" href="/wishlist">"Wishlist"</a>
                            <a class="hover:text-foreground" href="/notifications">"Notifications"</a>
                        </Show>

                        <Show when=move || matches!(role(), Some(Role::Host)) fallback=|| ().into_view()>
                            <a class="hover:text-foreground" href="/my-properties">"My properties"</a>
                        </Show>

                        <Show when=move || matches!(role(), Some(Role::Admin)) fallback=|| ().into_view()>
                            <a class="hover:text-foreground" href="/admin/dashboard">"Admin"</a>
                        </Show>
                    </nav>
                </div>

                <div class="flex items-center gap-2">
                    <Show
                        when=is_authenticated
                        fallback=|| view! {
                            <Button size=ButtonSize::Sm href="/login">"Sign in"</Button>
                        }
                    >
                        <a
                            href="/profile"
                            class="max-w-40 truncate text-sm text-muted-foreground hover:text-foreground"
                        >
                            {display_name}
                        </a>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            on:click=on_logout
                        >
                            "Sign out"
                        </Button>
                    </Show>
                </div>
            </div>
        </header>
    }
}
