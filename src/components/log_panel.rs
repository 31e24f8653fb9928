//! Log Panel Component
//!
//! Collapsible dump of the most recent log lines, refreshed on demand.

use console_logger::LogBuffer;
use leptos::prelude::*;

/// Lines shown per refresh
const PANEL_LINES: usize = 50;

#[component]
pub fn LogPanel(logs: LogBuffer) -> impl IntoView {
    let lines = RwSignal::new(Vec::<String>::new());

    let refresh = move |_| lines.set(logs.recent_lines(PANEL_LINES));

    view! {
        <details class="log-panel">
            <summary>"Debug log"</summary>
            <button class="log-panel__refresh" on:click=refresh>"Refresh"</button>
            <pre class="log-panel__lines">{move || lines.get().join("\n")}</pre>
        </details>
    }
}
