//! Segment model: derives display slices from raw entries.

#[cfg(test)]
#[path = "segment_test.rs"]
mod segment_test;

use crate::util::wheel_math::WHEEL_COLORS;

/// One rendered wheel slice derived from a raw entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub id: String,
    pub text: String,
    pub color: &'static str,
}

/// Derive one segment per entry, order-preserving, with
/// `color = palette[index % palette len]`.
///
/// `revision` is the entry-list revision counter. Baking it into the id
/// keeps segment identities from aliasing across list edits, so keyed
/// rendering never reuses DOM state for a slice whose position changed
/// meaning.
pub fn derive_segments(entries: &[String], revision: u64) -> Vec<Segment> {
    entries
        .iter()
        .enumerate()
        .map(|(index, text)| Segment {
            id: format!("seg-{index}-{revision}"),
            text: text.clone(),
            color: WHEEL_COLORS[index % WHEEL_COLORS.len()],
        })
        .collect()
}
