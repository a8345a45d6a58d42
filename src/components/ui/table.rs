use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Table, table, "min-w-full text-sm"}
    clx! {TableHeader, thead, "bg-muted/50 text-muted-foreground"}
    clx! {TableBody, tbody, ""}
    clx! {TableRow, tr, "border-t border-border transition-colors hover:bg-muted/30"}
    clx! {TableHead, th, "px-4 py-3 text-left font-semibold"}
    clx! {TableCell, td, "px-4 py-3 align-middle"}
}

#[allow(unused_imports)]
pub use components::*;
