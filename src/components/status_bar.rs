//! Bottom status bar: entry count, spin phase, and transient toasts.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};
use crate::state::wheel::WheelState;

/// Status bar at the bottom of the page. Toasts dismiss on click.
#[component]
pub fn StatusBar() -> impl IntoView {
    let wheel = expect_context::<RwSignal<WheelState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let entry_count = move || wheel.with(WheelState::entry_count);
    let phase_label = move || {
        if wheel.with(WheelState::is_spinning) {
            "Spinning..."
        } else {
            "Ready"
        }
    };

    view! {
        <div class="status-bar">
            <span class="status-bar__entries">
                {move || format!("{} entries", entry_count())}
            </span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__phase">{phase_label}</span>
            <span class="status-bar__spacer"></span>
            <div class="status-bar__toasts">
                <For
                    each=move || ui.with(|u| u.toasts.clone())
                    key=|toast| toast.id.clone()
                    children=move |toast| {
                        let id = toast.id.clone();
                        let is_error = toast.kind == ToastKind::Error;
                        view! {
                            <span
                                class="status-bar__toast"
                                class:status-bar__toast--error=is_error
                                on:click=move |_| {
                                    let id = id.clone();
                                    ui.update(|u| u.dismiss_toast(&id));
                                }
                            >
                                {toast.text.clone()}
                            </span>
                        }
                    }
                />
            </div>
        </div>
    }
}
