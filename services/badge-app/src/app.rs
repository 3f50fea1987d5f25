//! Main App component

use crate::components::status_badge::StatusBadge;
use leptos::prelude::*;
use status_badge::sample_statuses;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="font-sans max-w-3xl mx-auto p-4">
            <h1 class="text-xl font-bold mb-4">"Status Badges"</h1>
            <ul>
                {sample_statuses()
                    .into_iter()
                    .map(|status| view! { <li class="mb-2"><StatusBadge status=status /></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </main>
    }
}
