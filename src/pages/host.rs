use crate::api::{PropertyForm, MAX_PROPERTY_IMAGES};
use crate::components::ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, Input, Label, Select, Spinner,
    Table, TableBody, TableCell, TableHead, TableHeader, TableRow, Textarea,
};
use crate::models::{Property, PropertyStatus};
use crate::pages::{property_badge, read_file_bytes, PropertyRouteParams};
use crate::state::AppContext;
use crate::util::format_vnd;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params};
use std::str::FromStr;
use wasm_bindgen::JsCast;

/// Host console: the owner's listings with status control and delete.
/// Status moves through the same enum the public page filters on, so
/// deactivating a listing removes it from search immediately after the
/// backend confirms.
#[component]
pub fn MyPropertiesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let properties: RwSignal<Vec<Property>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let busy_id: RwSignal<Option<i64>> = RwSignal::new(None);

    let load = move || {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.list_host_properties().await {
                Ok(items) => properties.set(items),
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let on_status_change = move |id: i64, value: String| {
        let Ok(status) = PropertyStatus::from_str(&value) else {
            return;
        };
        let client = app_state.0.api_client.get_untracked();
        busy_id.set(Some(id));
        spawn_local(async move {
            match client.set_property_status(id, status).await {
                Ok(_) => {
                    app_state.0.toast_success("Listing updated");
                    load();
                }
                Err(e) => app_state.0.report_error(&e),
            }
            busy_id.set(None);
        });
    };

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
            <div class="flex items-center justify-between">
                <h1 class="text-xl font-semibold">"My properties"</h1>
                <Button size=ButtonSize::Sm href="/my-properties/new">
                    "New listing"
                </Button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading listings..."
                    </div>
                }
            >
                <Show
                    when=move || !properties.get().is_empty()
                    fallback=|| view! {
                        <div class="rounded-md border border-border bg-muted p-6 text-center text-sm text-muted-foreground">
                            "You have no listings yet."
                        </div>
                    }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHead>"Listing"</TableHead>
                                <TableHead>"Price / night"</TableHead>
                                <TableHead>"Status"</TableHead>
                                <TableHead class="text-right">"Actions"</TableHead>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || properties.get()
                                key=|p| (p.id, p.status)
                                children=move |property| {
                                    let id = property.id;
                                    let title = property.title.clone();
                                    let delete_title = property.title.clone();
                                    let status_value = RwSignal::new(property.status.to_string());
                                    let busy = move || busy_id.get() == Some(id);

                                    Effect::new(move |prev: Option<()>| {
                                        let value = status_value.get();
                                        // Skip the initial run that merely reads the seed value.
                                        if prev.is_some() {
                                            on_status_change(id, value);
                                        }
                                    });

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <div class="space-y-0.5">
                                                    <a
                                                        href=format!("/properties/{id}")
                                                        class="text-sm font-medium hover:underline"
                                                    >
                                                        {title}
                                                    </a>
                                                    <div class="text-xs text-muted-foreground">
                                                        {property.address.clone()}
                                                    </div>
                                                </div>
                                            </TableCell>
                                            <TableCell>{format_vnd(property.price_per_night)}</TableCell>
                                            <TableCell>
                                                <div class="flex items-center gap-2">
                                                    <Badge variant=property_badge(property.status)>
                                                        {property.status.to_string()}
                                                    </Badge>
                                                    <Select
                                                        bind_value=status_value
                                                        disabled=busy()
                                                        class="h-8 w-36 text-xs"
                                                    >
                                                        <option value="ACTIVE">"Active"</option>
                                                        <option value="INACTIVE">"Inactive"</option>
                                                        <option value="MAINTENANCE">"Maintenance"</option>
                                                    </Select>
                                                </div>
                                            </TableCell>
                                            <TableCell class="text-right">
                                                <div class="inline-flex items-center gap-2">
                                                    <Button
                                                        variant=ButtonVariant::Outline
                                                        size=ButtonSize::Sm
                                                        href=format!("/my-properties/{id}/edit")
                                                    >
                                                        "Edit"
                                                    </Button>
                                                    <Button
                                                        variant=ButtonVariant::Destructive
                                                        size=ButtonSize::Sm
                                                        attr:disabled=busy
                                                        on:click=move |_| on_delete(id, delete_title.clone())
                                                    >
                                                        "Delete"
                                                    </Button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </Show>
            </Show>
        </div>
    }
}

/// Shared text fields of the listing form.
#[component]
fn ListingFields(
    title: RwSignal<String>,
    description: RwSignal<String>,
    address: RwSignal<String>,
    price_per_night: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-1.5">
            <Label html_for="listing_title" class="text-xs">"Title"</Label>
            <Input id="listing_title" bind_value=title required=true class="h-8 text-sm" />
        </div>

        <div class="flex flex-col gap-1.5">
            <Label html_for="listing_address" class="text-xs">"Address"</Label>
            <Input id="listing_address" bind_value=address required=true class="h-8 text-sm" />
        </div>

        <div class="flex flex-col gap-1.5">
            <Label html_for="listing_price" class="text-xs">"Price per night (VND)"</Label>
            <Input
                id="listing_price"
                r#type="number"
                min="0"
                bind_value=price_per_night
                required=true
                class="h-8 text-sm"
            />
        </div>

        <div class="flex flex-col gap-1.5">
            <Label html_for="listing_description" class="text-xs">"Description"</Label>
            <Textarea
                id="listing_description"
                bind_value=description
                required=true
                rows=5
                class="text-sm"
            />
        </div>
    }
}

/// Reads every picked file eagerly and appends it to `new_images`.
/// Clearing the input afterwards lets the same file be picked again
/// after a removal.
fn on_pick_images(
    app_state: AppContext,
    new_images: RwSignal<Vec<(String, Vec<u8>)>>,
) -> impl Fn(web_sys::Event) + Copy + 'static {
    move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_ref::<web_sys::HtmlInputElement>().cloned())
        else {
            return;
        };
        let Some(files) = input.files() else {
            return;
        };

        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                spawn_local(async move {
                    match read_file_bytes(&file).await {
                        Some(bytes) => new_images.update(|list| list.push((file.name(), bytes))),
                        None => app_state.0.toast_error("Could not read the selected file"),
                    }
                });
            }
        }
        input.set_value("");
    }
}

#[component]
fn PickedImages(images: RwSignal<Vec<(String, Vec<u8>)>>) -> impl IntoView {
    view! {
        <Show when=move || !images.get().is_empty() fallback=|| ().into_view()>
            <ul class="flex flex-col gap-1">
                {move || {
                    images
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, (name, bytes))| {
                            view! {
                                <li class="flex items-center justify-between rounded-md border border-border px-2 py-1 text-xs">
                                    <span>{format!("{} ({} KB)", name, bytes.len().div_ceil(1024))}</span>
                                    <button
                                        type="button"
                                        class="text-destructive hover:underline"
                                        on:click=move |_| {
                                            images.update(|list| {
                                                list.remove(index);
                                            })
                                        }
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}

/// New-listing form. Photos travel with the text fields in a single
/// multipart POST; the backend assigns ownership from the session.
#[component]
pub fn PropertyCreatePage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let navigate = StoredValue::new(use_navigate());

    let title: RwSignal<String> = RwSignal::new(String::new());
    let description: RwSignal<String> = RwSignal::new(String::new());
    let address: RwSignal<String> = RwSignal::new(String::new());
    let price_per_night: RwSignal<String> = RwSignal::new(String::new());
    let new_images: RwSignal<Vec<(String, Vec<u8>)>> = RwSignal::new(vec![]);
    let saving: RwSignal<bool> = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let form = PropertyForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            address: address.get_untracked(),
            price_per_night: price_per_night.get_untracked(),
        };
        let images = new_images.get_untracked();
        if let Err(message) = form.validate(images.len()) {
            app_state.0.toast_error(message);
            return;
        }

        let client = app_state.0.api_client.get_untracked();
        saving.set(true);
        spawn_local(async move {
            match client.create_property(&form, images).await {
                Ok(_) => {
                    app_state.0.toast_success("Listing created");
                    navigate.with_value(|nav| nav("/my-properties", Default::default()));
                }
                Err(e) => app_state.0.report_error(&e),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="mx-auto w-full max-w-xl space-y-4">
            <h1 class="text-xl font-semibold">"New listing"</h1>

            <Card>
                <CardContent>
                    <form class="flex flex-col gap-3" on:submit=on_submit>
                        <ListingFields title description address price_per_night />

                        <div class="flex flex-col gap-1.5">
                            <Label html_for="listing_photos" class="text-xs">
                                {format!("Photos (1 to {MAX_PROPERTY_IMAGES})")}
                            </Label>
                            <input
                                id="listing_photos"
                                type="file"
                                accept="image/*"
                                multiple=true
                                class="text-sm text-muted-foreground file:mr-3 file:rounded-md file:border-0 file:bg-muted file:px-3 file:py-1.5 file:text-xs file:font-medium"
                                on:change=on_pick_images(app_state, new_images)
                            />
                            <PickedImages images=new_images />
                        </div>

                        <Button class="w-full" size=ButtonSize::Sm attr:disabled=move || saving.get()>
                            <span class="inline-flex items-center gap-2">
                                <Show when=move || saving.get() fallback=|| ().into_view()>
                                    <Spinner />
                                </Show>
                                {move || if saving.get() { "Creating..." } else { "Create listing" }}
                            </span>
                        </Button>
                    </form>
                </CardContent>
            </Card>
        </div>
    }
}

/// Edit form for an existing listing, seeded from the detail endpoint.
/// Stored photos can be dropped individually and new ones added; the
/// kept URLs are sent back so the backend preserves them.
#[component]
pub fn PropertyEditPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = use_params::<PropertyRouteParams>();
    let navigate = StoredValue::new(use_navigate());

    let loading: RwSignal<bool> = RwSignal::new(true);
    let title: RwSignal<String> = RwSignal::new(String::new());
    let description: RwSignal<String> = RwSignal::new(String::new());
    let address: RwSignal<String> = RwSignal::new(String::new());
    let price_per_night: RwSignal<String> = RwSignal::new(String::new());
    let existing_images: RwSignal<Vec<String>> = RwSignal::new(vec![]);
    let new_images: RwSignal<Vec<(String, Vec<u8>)>> = RwSignal::new(vec![]);
    let saving: RwSignal<bool> = RwSignal::new(false);

    let property_id = Memo::new(move |_| params.get().ok().and_then(|p| p.id));

    Effect::new(move |_| {
        let Some(id) = property_id.get() else {
            loading.set(false);
            return;
        };
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.get_property(id).await {
                Ok(p) => {
                    title.set(p.title);
                    description.set(p.description);
                    address.set(p.address);
                    price_per_night.set(p.price_per_night.to_string());
                    existing_images.set(p.images);
                }
                Err(e) => app_state.0.report_error(&e),
            }
            loading.set(false);
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(id) = property_id.get_untracked() else {
            return;
        };

        let form = PropertyForm {
            title: title.get_untracked(),
            description: description.get_untracked(),
            address: address.get_untracked(),
            price_per_night: price_per_night.get_untracked(),
        };
        let kept = existing_images.get_untracked();
        let added = new_images.get_untracked();
        if let Err(message) = form.validate(kept.len() + added.len()) {
            app_state.0.toast_error(message);
            return;
        }

        let client = app_state.0.api_client.get_untracked();
        saving.set(true);
        spawn_local(async move {
            match client.update_property(id, &form, added, &kept).await {
                Ok(_) => {
                    app_state.0.toast_success("Listing updated");
                    navigate.with_value(|nav| nav("/my-properties", Default::default()));
                }
                Err(e) => app_state.0.report_error(&e),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="mx-auto w-full max-w-xl space-y-4">
            <h1 class="text-xl font-semibold">"Edit listing"</h1>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                        <Spinner />
                        "Loading listing..."
                    </div>
                }
            >
                <Card>
                    <CardContent>
                        <form class="flex flex-col gap-3" on:submit=on_submit>
                            <ListingFields title description address price_per_night />

                            <div class="flex flex-col gap-1.5">
                                <Label class="text-xs">"Current photos"</Label>
                                <Show
                                    when=move || !existing_images.get().is_empty()
                                    fallback=|| view! {
                                        <span class="text-xs text-muted-foreground">"No photos kept."</span>
                                    }
                                >
                                    <ul class="flex flex-col gap-1">
                                        {move || {
                                            existing_images
                                                .get()
                                                .into_iter()
                                                .enumerate()
                                                .map(|(index, url)| {
                                                    view! {
                                                        <li class="flex items-center justify-between gap-2 rounded-md border border-border px-2 py-1 text-xs">
                                                            <img
                                                                src=url
                                                                alt="Listing photo"
                                                                class="h-10 w-14 rounded object-cover"
                                                            />
                                                            <button
                                                                type="button"
                                                                class="text-destructive hover:underline"
                                                                on:click=move |_| {
                                                                    existing_images.update(|list| {
                                                                        list.remove(index);
                                                                    })
                                                                }
                                                            >
                                                                "Remove"
                                                            </button>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </ul>
                                </Show>
                            </div>

                            <div class="flex flex-col gap-1.5">
                                <Label html_for="listing_photos" class="text-xs">"Add photos"</Label>
                                <input
                                    id="listing_photos"
                                    type="file"
                                    accept="image/*"
                                    multiple=true
                                    class="text-sm text-muted-foreground file:mr-3 file:rounded-md file:border-0 file:bg-muted file:px-3 file:py-1.5 file:text-xs file:font-medium"
                                    on:change=on_pick_images(app_state, new_images)
                                />
                                <PickedImages images=new_images />
                            </div>

                            <Button class="w-full" size=ButtonSize::Sm attr:disabled=move || saving.get()>
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
            </Show>
        </div>
    }
}
