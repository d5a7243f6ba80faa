//! Application state shared via Leptos context providers.
//!
//! DESIGN
//! ======
//! `wheel` owns the domain state (entries, spin lifecycle, winner) behind
//! guarded methods; `ui` keeps transient presentation chrome (tabs,
//! confirmations, toasts) out of the domain so the spin contract stays
//! independent of how results and errors are shown.

pub mod ui;
pub mod wheel;
