//! Entry management panel: manual input, file import, AI generation, and
//! the entry list with selection.
//!
//! Destructive bulk actions (clear all, delete selected) go through a
//! confirmation strip driven by `UiState::pending_confirm` instead of
//! firing immediately. Single-row deletes are cheap to undo by retyping,
//! so those stay one click.

#[cfg(test)]
#[path = "input_controls_test.rs"]
mod input_controls_test;

use leptos::prelude::*;

use crate::services::gemini;
use crate::state::ui::{ConfirmAction, InputTab, ToastKind, UiState};
use crate::state::wheel::WheelState;
use crate::util::file_parser;

/// Read the chosen file into a flat entry list, honoring its format.
#[cfg(feature = "csr")]
async fn read_file_entries(file: &web_sys::File, name: &str) -> Result<Vec<String>, String> {
    use wasm_bindgen_futures::JsFuture;

    if file_parser::is_delimited_file(name, &file.type_()) {
        let text = JsFuture::from(file.text())
            .await
            .map_err(|_| "could not read file".to_owned())?;
        Ok(file_parser::parse_delimited_text(
            &text.as_string().unwrap_or_default(),
        ))
    } else {
        let buffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|_| "could not read file".to_owned())?;
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        file_parser::parse_workbook(&bytes)
    }
}

/// Fold a finished file import into app state. Entries append; a guard
/// rejection mid-spin adds nothing and stays quiet.
#[cfg(any(test, feature = "csr"))]
fn apply_import(entries: &[String], wheel: &mut WheelState, ui: &mut UiState) {
    if entries.is_empty() {
        ui.push_toast(ToastKind::Error, "No data found in file");
        return;
    }
    let added = wheel.append_entries(entries);
    if added > 0 {
        ui.push_toast(ToastKind::Info, format!("Imported {added} entries"));
    }
}

/// Fold a finished generation into app state. Generated entries append
/// to the existing list like every other input path; failures surface as
/// toasts and leave the list untouched. Returns whether the topic input
/// should reset.
fn apply_generation(
    outcome: Result<Vec<String>, String>,
    wheel: &mut WheelState,
    ui: &mut UiState,
) -> bool {
    ui.ai_loading = false;
    match outcome {
        Ok(items) if items.is_empty() => {
            ui.push_toast(ToastKind::Error, "The model returned no items");
            false
        }
        Ok(items) => {
            let added = wheel.append_entries(&items);
            if added > 0 {
                ui.push_toast(ToastKind::Info, format!("Generated {added} entries"));
            }
            added > 0
        }
        Err(err) => {
            ui.push_toast(ToastKind::Error, err);
            false
        }
    }
}

/// Input panel with Manual and AI tabs plus the current entry list.
#[component]
pub fn InputControls() -> impl IntoView {
    let wheel = expect_context::<RwSignal<WheelState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let draft = RwSignal::new(String::new());
    let topic = RwSignal::new(String::new());

    let locked = move || wheel.with(WheelState::is_spinning);
    let manual_active = move || ui.with(|u| u.input_tab == InputTab::Manual);
    let ai_active = move || ui.with(|u| u.input_tab == InputTab::Ai);
    let ai_loading = move || ui.with(|u| u.ai_loading);

    let on_add = move |_| {
        let lines = file_parser::parse_delimited_text(&draft.get());
        if lines.is_empty() {
            return;
        }
        let mut added = 0;
        wheel.update(|w| added = w.append_entries(&lines));
        if added > 0 {
            draft.set(String::new());
            ui.update(|u| u.push_toast(ToastKind::Info, format!("Added {added} entries")));
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            // Reset so re-picking the same file fires change again.
            input.set_value("");
            let name = file.name();
            leptos::task::spawn_local(async move {
                match read_file_entries(&file, &name).await {
                    Ok(entries) => wheel.update(|w| {
                        ui.update(|u| apply_import(&entries, w, u));
                    }),
                    Err(err) => ui.update(|u| {
                        u.push_toast(ToastKind::Error, format!("Import failed: {err}"));
                    }),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_generate = move |_| {
        let subject = topic.get().trim().to_owned();
        if subject.is_empty() || ui.with(|u| u.ai_loading) {
            return;
        }
        ui.update(|u| u.ai_loading = true);
        leptos::task::spawn_local(async move {
            let outcome = gemini::generate_wheel_list(&subject, gemini::DEFAULT_ITEM_COUNT).await;
            let mut reset_topic = false;
            wheel.update(|w| {
                ui.update(|u| reset_topic = apply_generation(outcome, w, u));
            });
            if reset_topic {
                topic.set(String::new());
            }
        });
    };

    let request_clear = move |_| {
        if wheel.with(|w| w.entry_count() == 0) {
            return;
        }
        ui.update(|u| u.pending_confirm = Some(ConfirmAction::ClearAll));
    };

    let request_delete_selected = move |_| {
        let count = wheel.with(|w| w.selection().len());
        if count == 0 {
            return;
        }
        ui.update(|u| u.pending_confirm = Some(ConfirmAction::DeleteSelected(count)));
    };

    let on_confirm = move |_| {
        let Some(action) = ui.with(|u| u.pending_confirm) else {
            return;
        };
        match action {
            ConfirmAction::ClearAll => wheel.update(WheelState::clear),
            ConfirmAction::DeleteSelected(_) => wheel.update(WheelState::delete_selected),
        }
        ui.update(|u| u.pending_confirm = None);
    };

    let on_cancel = move |_| ui.update(|u| u.pending_confirm = None);

    let confirm_message = move || {
        ui.with(|u| match u.pending_confirm {
            Some(ConfirmAction::ClearAll) => Some("Remove every entry from the wheel?".to_owned()),
            Some(ConfirmAction::DeleteSelected(count)) => {
                Some(format!("Delete {count} selected entries?"))
            }
            None => None,
        })
    };

    let selection_count = move || wheel.with(|w| w.selection().len());
    let all_selected =
        move || wheel.with(|w| w.entry_count() > 0 && w.selection().len() == w.entry_count());

    view! {
        <div class="input-controls" class:input-controls--locked=locked>
            <div class="input-controls__tabs">
                <button
                    class="input-controls__tab"
                    class:input-controls__tab--active=manual_active
                    on:click=move |_| ui.update(|u| u.input_tab = InputTab::Manual)
                >
                    "Manual"
                </button>
                <button
                    class="input-controls__tab"
                    class:input-controls__tab--active=ai_active
                    on:click=move |_| ui.update(|u| u.input_tab = InputTab::Ai)
                >
                    "AI Generate"
                </button>
            </div>

            <Show when=manual_active>
                <div class="input-controls__manual">
                    <textarea
                        class="input-controls__textarea"
                        placeholder="One entry per line"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        disabled=locked
                    ></textarea>
                    <div class="input-controls__row">
                        <button class="btn btn--primary" on:click=on_add disabled=locked>
                            "Add entries"
                        </button>
                        <label class="btn input-controls__import">
                            "Import file"
                            <input
                                class="input-controls__file"
                                type="file"
                                accept=".csv,.txt,.xlsx,.xls"
                                on:change=on_file_change
                                disabled=locked
                            />
                        </label>
                    </div>
                </div>
            </Show>

            <Show when=ai_active>
                <div class="input-controls__ai">
                    <input
                        class="input-controls__topic"
                        type="text"
                        placeholder="Topic, e.g. \"retro video games\""
                        prop:value=move || topic.get()
                        on:input=move |ev| topic.set(event_target_value(&ev))
                        disabled=move || locked() || ai_loading()
                    />
                    <button
                        class="btn btn--primary"
                        on:click=on_generate
                        disabled=move || locked() || ai_loading()
                    >
                        {move || if ai_loading() { "Generating..." } else { "Generate list" }}
                    </button>
                    {move || {
                        ai_loading()
                            .then(|| view! { <div class="input-controls__loading">"Asking Gemini..."</div> })
                    }}
                </div>
            </Show>

            {move || {
                confirm_message()
                    .map(|message| {
                        view! {
                            <div class="input-controls__confirm">
                                <span class="input-controls__confirm-text">{message}</span>
                                <button class="btn btn--danger" on:click=on_confirm>
                                    "Delete"
                                </button>
                                <button class="btn" on:click=on_cancel>
                                    "Cancel"
                                </button>
                            </div>
                        }
                    })
            }}

            <div class="entry-list">
                <div class="entry-list__header">
                    <button
                        class="entry-list__select-all"
                        on:click=move |_| wheel.update(WheelState::toggle_select_all)
                        disabled=move || locked() || wheel.with(|w| w.entry_count() == 0)
                    >
                        {move || if all_selected() { "Deselect all" } else { "Select all" }}
                    </button>
                    {move || {
                        (selection_count() > 0)
                            .then(|| {
                                view! {
                                    <button
                                        class="btn btn--danger entry-list__delete-selected"
                                        on:click=request_delete_selected
                                        disabled=locked
                                    >
                                        {move || format!("Delete selected ({})", selection_count())}
                                    </button>
                                }
                            })
                    }}
                    <button
                        class="btn entry-list__clear"
                        on:click=request_clear
                        disabled=move || locked() || wheel.with(|w| w.entry_count() == 0)
                    >
                        "Clear all"
                    </button>
                </div>
                <ul class="entry-list__rows">
                    <For
                        each=move || {
                            wheel.with(|w| {
                                w.entries().iter().cloned().enumerate().collect::<Vec<_>>()
                            })
                        }
                        key=|(index, text)| format!("{index}-{text}")
                        children=move |(index, text): (usize, String)| {
                            let selected =
                                move || wheel.with(|w| w.selection().contains(&index));
                            view! {
                                <li
                                    class="entry-list__row"
                                    class:entry-list__row--selected=selected
                                    on:click=move |_| {
                                        wheel.update(|w| w.toggle_selected(index));
                                    }
                                >
                                    <span class="entry-list__check">
                                        {move || if selected() { "☑" } else { "☐" }}
                                    </span>
                                    <span class="entry-list__ordinal">
                                        {format!("{}.", index + 1)}
                                    </span>
                                    <span class="entry-list__text">{text.clone()}</span>
                                    <button
                                        class="entry-list__delete"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            wheel.update(|w| w.delete_at(index));
                                        }
                                        disabled=locked
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </div>
    }
}
