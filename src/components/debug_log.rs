//! Debug Log Component
//!
//! Recent client log lines, shown when the page URL carries `?debug`.

use leptos::prelude::*;

#[component]
pub fn DebugLog() -> impl IntoView {
    let (lines, set_lines) = signal(console_logger::recent_lines());

    view! {
        <details class="debug-log max-w-2xl mx-auto p-4 text-xs text-gray-500">
            <summary on:click=move |_| set_lines.set(console_logger::recent_lines())>
                "Client log"
            </summary>
            <pre>{move || lines.get().join("\n")}</pre>
        </details>
    }
}
