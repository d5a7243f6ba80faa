//! Root application component and context providers.

use leptos::prelude::*;

use crate::components::{InputControls, StatusBar, Wheel, WinnerModal};
use crate::state::ui::UiState;
use crate::state::wheel::WheelState;

/// Root component.
///
/// Owns the two shared signals (`WheelState`, `UiState`) and provides
/// them as context for every child component.
#[component]
pub fn App() -> impl IntoView {
    let wheel = RwSignal::new(WheelState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(wheel);
    provide_context(ui);

    let has_entries = move || wheel.with(|w| w.entry_count() > 0);

    view! {
        <div class="app">
            <header class="app__header">
                <h1 class="app__title">"Lucky Wheel AI"</h1>
                <span class="app__badge">"Powered by Gemini"</span>
            </header>
            <main class="app__main">
                <section class="app__wheel-pane">
                    <Show
                        when=has_entries
                        fallback=|| {
                            view! {
                                <div class="app__empty">
                                    "Add some entries to build your wheel"
                                </div>
                            }
                        }
                    >
                        <Wheel/>
                    </Show>
                </section>
                <section class="app__input-pane">
                    <InputControls/>
                </section>
            </main>
            <StatusBar/>
            <WinnerModal/>
        </div>
    }
}
