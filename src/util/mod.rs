//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate geometry, parsing, and particle math from
//! component logic so the widget's contracts stay testable off-browser.

pub mod confetti;
pub mod file_parser;
pub mod segment;
pub mod wheel_math;
