use leptos::prelude::*;
use leptos_ui::variants;

// Status pills for bookings, payments, roles etc. The variant is picked
// per backend enum value at the call site.
variants! {
    Badge {
        base: "inline-flex items-center rounded-full px-2.5 py-1 text-xs font-semibold whitespace-nowrap",
        variants: {
            variant: {
                Default: "bg-slate-100 text-slate-600",
                Success: "bg-emerald-100 text-emerald-700",
                Warning: "bg-amber-100 text-amber-700",
                Destructive: "bg-red-100 text-red-700",
                Info: "bg-cyan-100 text-cyan-700",
                Accent: "bg-violet-100 text-violet-700"
            }
        }
    }
}

// `variants!` only emits a component function when a size axis is present;
// this mirrors that arm of the macro for the variant-only case above.
#[component]
pub fn Badge(
    #[prop(into, optional)] variant: Signal<BadgeVariant>,
    #[prop(into, optional)] class: Signal<String>,
    #[prop(into, optional)] data_name: Option<String>,
    children: Children,
) -> impl IntoView {
    let computed_class = move || {
        let variant = variant.try_get().unwrap_or_default();
        let component_class = BadgeClass { variant };
        component_class.with_class(class.try_get().unwrap_or_default())
    };

    let data_name = data_name.unwrap_or_else(|| "Badge".to_string());

    view! {
        <span class=computed_class data-name=data_name>
            {children()}
        </span>
    }
}
