//! Leptos view components.

pub mod input_controls;
pub mod status_bar;
pub mod wheel;
pub mod winner_modal;

pub use input_controls::InputControls;
pub use status_bar::StatusBar;
pub use wheel::Wheel;
pub use winner_modal::WinnerModal;

/// Unit random sample for spin deltas and confetti layout. Browser
/// entropy in the bundle, a fixed midpoint elsewhere.
pub(crate) fn random_unit() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.5
    }
}
