use crate::components::ui::{
    Badge, Button, ButtonSize, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    Label, Spinner,
};
use crate::pages::{read_file_bytes, role_badge};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// Profile editor. Email and role come from the backend and are not
/// editable here; name, phone and avatar go out as one multipart PATCH
/// and the session profile is re-fetched on success.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let full_name: RwSignal<String> = RwSignal::new(String::new());
    let phone: RwSignal<String> = RwSignal::new(String::new());
    // File contents are read into memory as soon as one is picked;
    // `web_sys::File` itself cannot live in a signal (not thread-safe).
    let avatar: RwSignal<Option<(String, Vec<u8>)>> = RwSignal::new(None);
    let saving: RwSignal<bool> = RwSignal::new(false);

    // Seed the form once the (possibly still loading) profile arrives.
    Effect::new(move |_| {
        if let Some(user) = app_state.0.session.get().user() {
            full_name.set(user.full_name.clone());
            phone.set(user.phone.clone().unwrap_or_default());
        }
    });

    let on_file_change = move |ev: web_sys::Event| {
        let picked = ev
            .target()
            .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().cloned())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Some(file) = picked else {
            avatar.set(None);
            return;
        };

        spawn_local(async move {
            match read_file_bytes(&file).await {
                Some(bytes) => avatar.set(Some((file.name(), bytes))),
                None => app_state.0.toast_error("Could not read the selected file"),
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name = full_name.get_untracked().trim().to_string();
        if name.is_empty() {
            app_state.0.toast_error("Full name is required");
            return;
        }

        let phone_val = phone.get_untracked().trim().to_string();
        let upload = avatar.get_untracked();
        let client = app_state.0.api_client.get_untracked();
        saving.set(true);

        spawn_local(async move {
            match client.update_profile(&name, &phone_val, upload).await {
                Ok(_) => {
                    app_state.0.toast_success("Profile updated");
                    avatar.set(None);
                    app_state.0.refresh_profile();
                }
                Err(e) => app_state.0.report_error(&e),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="mx-auto w-full max-w-xl space-y-4">
            <h1 class="text-xl font-semibold">"Profile"</h1>

            <Show
                when=move || app_state.0.session.get().user().is_some()
                fallback=|| view! {
                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading profile..."
                    </div>
                }
            >
                {move || {
                    app_state.0.session.get().user().cloned().map(|user| {
                        view! {
                            <Card>
                                <CardHeader>
                                    <div class="flex items-center gap-3">
                                        {match user.avatar.clone() {
                                            Some(src) => view! {
                                                <img
                                                    src=src
                                                    alt="Avatar"
                                                    class="h-12 w-12 rounded-full object-cover"
                                                />
                                            }
                                            .into_any(),
                                            None => view! {
                                                <div class="flex h-12 w-12 items-center justify-center rounded-full bg-muted text-sm font-semibold">
                                                    {user.full_name.chars().next().unwrap_or('?').to_string()}
                                                </div>
                                            }
                                            .into_any(),
                                        }}
                                        <div class="space-y-0.5">
                                            <CardTitle class="text-base">{user.email.clone()}</CardTitle>
                                            <CardDescription class="flex items-center gap-2 text-xs">
                                                <Badge variant=role_badge(user.role) class="text-[10px]">
                                                    {user.role.to_string()}
                                                </Badge>
                                                {if user.is_verified { "Verified" } else { "Not verified" }}
                                            </CardDescription>
                                        </div>
                                    </div>
                                </CardHeader>

                                <CardContent>
                                    <form class="flex flex-col gap-3" on:submit=on_submit>
                                        <div class="flex flex-col gap-1.5">
                                            <Label html_for="full_name" class="text-xs">"Full name"</Label>
                                            <Input
                                                id="full_name"
                                                bind_value=full_name
                                                required=true
                                                class="h-8 text-sm"
                                            />
                                        </div>

                                        <div class="flex flex-col gap-1.5">
                                            <Label html_for="phone" class="text-xs">"Phone"</Label>
                                            <Input
                                                id="phone"
                                                r#type="tel"
                                                placeholder="0900000000"
                                                bind_value=phone
                                                class="h-8 text-sm"
                                            />
                                        </div>

                                        <div class="flex flex-col gap-1.5">
                                            <Label html_for="avatar" class="text-xs">"Avatar"</Label>
                                            <input
                                                id="avatar"
                                                type="file"
                                                accept="image/*"
                                                class="text-sm text-muted-foreground file:mr-3 file:rounded-md file:border-0 file:bg-muted file:px-3 file:py-1.5 file:text-xs file:font-medium"
                                                on:change=on_file_change
                                            />
                                            {move || {
                                                avatar.get().map(|(file_name, _)| {
                                                    view! {
                                                        <span class="text-xs text-muted-foreground">
                                                            {format!("Selected: {file_name}")}
                                                        </span>
                                                    }
                                                })
                                            }}
                                        </div>

                                        <Button
                                            class="w-full"
                                            size=ButtonSize::Sm
                                            attr:disabled=move || saving.get()
                                        >
                                            <span class="inline-flex items-center gap-2">
                                                <Show when=move || saving.get() fallback=|| ().into_view()>
                                                    <Spinner />
                                                </Show>
                                                {move || if saving.get() { "Saving..." } else { "Save changes" }}
                                            </span>
                                        </Button>
                                    </form>
                                </CardContent>
                            </Card>
                        }
                    })
                }}
            </Show>
        </div>
    }
}
