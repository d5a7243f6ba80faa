//! Winner announcement modal with a confetti overlay.

use leptos::prelude::*;

use crate::components::random_unit;
use crate::state::wheel::WheelState;
use crate::util::confetti::{self, CONFETTI_PARTICLES};

/// Modal shown once a spin resolves; dismissing clears the winner so the
/// next spin starts clean.
#[component]
pub fn WinnerModal() -> impl IntoView {
    let wheel = expect_context::<RwSignal<WheelState>>();

    let winner = Memo::new(move |_| wheel.with(|w| w.winner().cloned()));
    let on_close = move |_| wheel.update(WheelState::dismiss_winner);

    view! {
        <Show when=move || winner.get().is_some()>
            <div class="winner-modal__backdrop" on:click=on_close>
                // Particles are laid out fresh each time the modal opens.
                <div class="confetti" aria-hidden="true">
                    {confetti::burst(CONFETTI_PARTICLES, random_unit)
                        .iter()
                        .map(|particle| {
                            view! {
                                <span
                                    class="confetti__piece"
                                    style=confetti::particle_style(particle)
                                ></span>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="winner-modal" on:click=|ev| ev.stop_propagation()>
                    <div class="winner-modal__trophy">"🏆"</div>
                    <h2 class="winner-modal__heading">"Winner!"</h2>
                    <div class="winner-modal__name">
                        {move || winner.get().map(|segment| segment.text).unwrap_or_default()}
                    </div>
                    <button class="btn btn--primary" on:click=on_close>
                        "Spin again"
                    </button>
                </div>
            </div>
        </Show>
    }
}
