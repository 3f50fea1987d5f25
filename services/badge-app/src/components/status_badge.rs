//! Status badge component

use leptos::prelude::*;

/// A rounded label coloured by status: Diproses (yellow), Diterima (green),
/// Ditolak (red), anything else (gray). Dark-mode variants are included.
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = status_badge::class_list(&status);

    view! {
        <div>
            <span class=class>{status}</span>
        </div>
    }
}
