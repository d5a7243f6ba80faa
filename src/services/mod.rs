//! External service adapters.

pub mod gemini;
