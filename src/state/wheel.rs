//! Wheel domain state: the entry list, spin lifecycle, and winner.
//!
//! DESIGN
//! ======
//! One struct owns everything the widget mutates, shared as an
//! `RwSignal<WheelState>` from the root component. List operations are
//! guarded methods here rather than ad hoc writes in views, so the
//! no-mutation-while-spinning rule holds everywhere by construction.
//! Guard rejections are silent no-ops; the UI disables the corresponding
//! controls, so a rejected call is never an error worth surfacing.

#[cfg(test)]
#[path = "wheel_test.rs"]
mod wheel_test;

use std::collections::HashSet;

use crate::util::segment::{Segment, derive_segments};
use crate::util::wheel_math::winning_index;

/// Spin lifecycle. Exactly one spin may be in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning,
}

/// Entries seeded on first load so the wheel is never blank on arrival.
pub const DEFAULT_ENTRIES: [&str; 6] = [
    "First prize",
    "Second prize",
    "Third prize",
    "Good luck",
    "Extra spin",
    "Mystery gift",
];

/// Snapshot captured at spin start. The completion callback resolves
/// against this, never live state, so the reported winner always matches
/// the slices that animated.
#[derive(Clone, Debug)]
pub struct SpinTicket {
    pub target_rotation_deg: f64,
    pub segments: Vec<Segment>,
}

#[derive(Clone, Debug)]
pub struct WheelState {
    entries: Vec<String>,
    revision: u64,
    phase: SpinPhase,
    rotation_deg: f64,
    winner: Option<Segment>,
    selection: HashSet<usize>,
}

impl Default for WheelState {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ENTRIES.iter().map(|entry| (*entry).to_owned()).collect(),
            revision: 0,
            phase: SpinPhase::Idle,
            rotation_deg: 0.0,
            winner: None,
            selection: HashSet::new(),
        }
    }
}

impl WheelState {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    /// Total rotation accumulated across spins; monotonically increasing,
    /// never reset, so repeated spins keep moving forward visually.
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    pub fn winner(&self) -> Option<&Segment> {
        self.winner.as_ref()
    }

    pub fn selection(&self) -> &HashSet<usize> {
        &self.selection
    }

    /// Current segments, one per entry in list order.
    pub fn segments(&self) -> Vec<Segment> {
        derive_segments(&self.entries, self.revision)
    }

    /// Append trimmed, non-blank lines. Returns how many were added;
    /// zero (list untouched) while a spin is in flight.
    pub fn append_entries<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.is_spinning() {
            return 0;
        }
        let before = self.entries.len();
        self.entries.extend(
            lines
                .into_iter()
                .map(|line| line.as_ref().trim().to_owned())
                .filter(|line| !line.is_empty()),
        );
        let added = self.entries.len() - before;
        if added > 0 {
            self.touch();
        }
        added
    }

    /// Remove exactly one entry; silent no-op out of range or while
    /// spinning.
    pub fn delete_at(&mut self, index: usize) {
        if self.is_spinning() || index >= self.entries.len() {
            return;
        }
        self.entries.remove(index);
        self.touch();
    }

    /// Remove every listed position, keeping survivor order.
    pub fn delete_indices(&mut self, indices: &HashSet<usize>) {
        if self.is_spinning() || indices.is_empty() {
            return;
        }
        let before = self.entries.len();
        let mut position = 0usize;
        self.entries.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });
        if self.entries.len() != before {
            self.touch();
        }
    }

    /// Remove the currently selected entries.
    pub fn delete_selected(&mut self) {
        if self.is_spinning() {
            return;
        }
        let selected = std::mem::take(&mut self.selection);
        self.delete_indices(&selected);
    }

    /// Replace the whole list; `replace_all` with nothing is "clear all".
    /// Destructive, so front ends gate it behind a confirmation step.
    pub fn replace_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.is_spinning() {
            return;
        }
        self.entries = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_owned())
            .filter(|line| !line.is_empty())
            .collect();
        self.touch();
    }

    pub fn clear(&mut self) {
        self.replace_all(std::iter::empty::<&str>());
    }

    pub fn toggle_selected(&mut self, index: usize) {
        if self.is_spinning() || index >= self.entries.len() {
            return;
        }
        if !self.selection.remove(&index) {
            self.selection.insert(index);
        }
    }

    /// Select every entry, or clear when everything is already selected.
    pub fn toggle_select_all(&mut self) {
        if self.is_spinning() {
            return;
        }
        if self.selection.len() == self.entries.len() {
            self.selection.clear();
        } else {
            self.selection = (0..self.entries.len()).collect();
        }
    }

    /// Start a spin: accumulate the rotation delta and capture the
    /// resolution snapshot. `None` when a spin is already in flight, the
    /// wheel is empty, or the delta is unusable.
    pub fn begin_spin(&mut self, delta_deg: f64) -> Option<SpinTicket> {
        if self.is_spinning() || self.entries.is_empty() || !delta_deg.is_finite() || delta_deg <= 0.0 {
            return None;
        }
        self.phase = SpinPhase::Spinning;
        self.rotation_deg += delta_deg;
        Some(SpinTicket {
            target_rotation_deg: self.rotation_deg,
            segments: self.segments(),
        })
    }

    /// Resolve the spin scheduled by `begin_spin`: pick the slice under
    /// the pointer from the snapshot, record it as winner, return to
    /// idle. `None` when no spin is in flight.
    pub fn complete_spin(&mut self, ticket: &SpinTicket) -> Option<Segment> {
        if self.phase != SpinPhase::Spinning {
            return None;
        }
        self.phase = SpinPhase::Idle;
        let index = winning_index(ticket.target_rotation_deg, ticket.segments.len())?;
        let segment = ticket.segments[index].clone();
        self.winner = Some(segment.clone());
        Some(segment)
    }

    pub fn dismiss_winner(&mut self) {
        self.winner = None;
    }

    /// Positional selections go stale on any list change; reset them all
    /// and bump the revision so segment identities roll over.
    fn touch(&mut self) {
        self.revision += 1;
        self.selection.clear();
    }
}
