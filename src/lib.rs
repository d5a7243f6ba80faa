//! # spinwheel
//!
//! Leptos + WASM "lucky wheel" widget. A user-maintained list of text
//! entries is rendered as a circular wheel of colored slices; a
//! fixed-duration spin animation selects one entry uniformly at random by
//! slice and reports it as the winner. Entries come from manual input,
//! spreadsheet/CSV import, or Gemini list generation.
//!
//! The crate splits browser wiring from logic: `components` render and
//! wire events, `state` owns the guarded application state, `util` holds
//! the pure wheel/import/confetti math, and `services` talks to Gemini.

pub mod app;
pub mod components;
pub mod services;
pub mod state;
pub mod util;
