//! The wheel itself: SVG slices, the fixed pointer, and the spin button.
//!
//! DESIGN
//! ======
//! The component never resolves winners on its own. Clicking SPIN asks
//! `WheelState::begin_spin` for a ticket; the CSS transition and a
//! matching timeout both run for `SPIN_DURATION_MS`, and the timeout
//! hands the ticket back to `complete_spin`. The ticket's snapshot is
//! what gets resolved, so a winner is reported for the slices the user
//! watched even though list mutations are already blocked meanwhile.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

use crate::components::random_unit;
use crate::state::wheel::WheelState;
use crate::util::segment::Segment;
use crate::util::wheel_math::{self, WHEEL_INNER_RADIUS, WHEEL_OUTER_RADIUS, WHEEL_VIEWBOX};

/// Spinning wheel with its centered SPIN button.
#[component]
pub fn Wheel() -> impl IntoView {
    let wheel = expect_context::<RwSignal<WheelState>>();

    // Dropping a Timeout cancels it, so the handle has to outlive the
    // spin. Local storage: the handle is not Send.
    #[cfg(feature = "csr")]
    let pending = StoredValue::new_local(None::<Timeout>);

    let slices = Memo::new(move |_| {
        wheel.with(|w| {
            let segments = w.segments();
            let count = segments.len();
            segments
                .into_iter()
                .enumerate()
                .map(|(index, segment)| (index, count, segment))
                .collect::<Vec<_>>()
        })
    });

    let rotor_style =
        move || wheel.with(|w| wheel_math::wheel_transform_style(w.rotation_deg(), w.is_spinning()));
    let spin_disabled = move || wheel.with(|w| w.is_spinning() || w.entry_count() == 0);

    let on_spin = move |_| {
        let delta = wheel_math::spin_delta_deg(random_unit(), random_unit());
        let mut started = None;
        wheel.update(|w| started = w.begin_spin(delta));
        let Some(ticket) = started else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let handle = Timeout::new(wheel_math::SPIN_DURATION_MS, move || {
                pending.set_value(None);
                wheel.update(|w| {
                    w.complete_spin(&ticket);
                });
            });
            pending.set_value(Some(handle));
        }
        #[cfg(not(feature = "csr"))]
        wheel.update(|w| {
            w.complete_spin(&ticket);
        });
    };

    let center = WHEEL_VIEWBOX / 2.0;

    view! {
        <div class="wheel">
            <div class="wheel__pointer">"▼"</div>
            <svg
                class="wheel__svg"
                viewBox=format!("0 0 {WHEEL_VIEWBOX} {WHEEL_VIEWBOX}")
                role="img"
                aria-label="Lucky wheel"
            >
                <g transform=format!("translate({center}, {center})")>
                    <g class="wheel__rotor" style=rotor_style>
                        <For
                            each=move || slices.get()
                            key=|(_, _, segment)| segment.id.clone()
                            children=move |(index, count, segment): (usize, usize, Segment)| {
                                let path = wheel_math::slice_path(
                                    index,
                                    count,
                                    WHEEL_OUTER_RADIUS,
                                    WHEEL_INNER_RADIUS,
                                );
                                let transform =
                                    wheel_math::label_transform(index, count, WHEEL_OUTER_RADIUS);
                                let label = wheel_math::truncate_label(&segment.text);
                                let font = wheel_math::label_font_px(count);
                                view! {
                                    <g class="wheel__slice">
                                        <path
                                            d=path
                                            fill=segment.color
                                            stroke="#ffffff"
                                            stroke-width="2"
                                        ></path>
                                        <text
                                            class="wheel__label"
                                            transform=transform
                                            font-size=font
                                            text-anchor="middle"
                                            dominant-baseline="middle"
                                        >
                                            {label}
                                        </text>
                                    </g>
                                }
                            }
                        />
                    </g>
                </g>
            </svg>
            <button
                class="wheel__spin-btn"
                disabled=spin_disabled
                on:click=on_spin
            >
                "SPIN"
            </button>
        </div>
    }
}
