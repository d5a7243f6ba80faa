use super::*;

fn state_with(entries: &[&str]) -> WheelState {
    let mut state = WheelState::default();
    state.replace_all(entries.iter().copied());
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_with_seed_entries() {
    let state = WheelState::default();
    assert!(!state.is_spinning());
    assert_eq!(state.entry_count(), DEFAULT_ENTRIES.len());
    assert_eq!(state.rotation_deg(), 0.0);
    assert!(state.winner().is_none());
    assert!(state.selection().is_empty());
}

#[test]
fn segments_match_entries_one_to_one() {
    let state = state_with(&["A", "B", "C"]);
    let segments = state.segments();
    assert_eq!(segments.len(), state.entry_count());
    let texts = segments.iter().map(|s| s.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, state.entries());
}

// =============================================================
// List operations
// =============================================================

#[test]
fn append_trims_and_drops_blanks() {
    let mut state = state_with(&["A"]);
    let added = state.append_entries(["  B  ", "", "   ", "C"]);
    assert_eq!(added, 2);
    assert_eq!(state.entries(), ["A", "B", "C"]);
}

#[test]
fn append_of_nothing_leaves_revision_alone() {
    let mut state = state_with(&["A"]);
    let revision = state.revision();
    assert_eq!(state.append_entries(["", "  "]), 0);
    assert_eq!(state.revision(), revision);
}

#[test]
fn delete_at_removes_exactly_one() {
    let mut state = state_with(&["A", "B", "C"]);
    state.delete_at(1);
    assert_eq!(state.entries(), ["A", "C"]);
}

#[test]
fn delete_at_out_of_range_is_a_no_op() {
    let mut state = state_with(&["A", "B"]);
    let revision = state.revision();
    state.delete_at(5);
    assert_eq!(state.entries(), ["A", "B"]);
    assert_eq!(state.revision(), revision);
}

#[test]
fn delete_indices_preserves_survivor_order() {
    let mut state = state_with(&["A", "B", "C", "D", "E"]);
    state.delete_indices(&[1, 3].into_iter().collect());
    assert_eq!(state.entries(), ["A", "C", "E"]);
}

#[test]
fn delete_single_index_roundtrip() {
    // deleteIndices({i}) then deriveSegments: N-1 segments, order kept.
    let mut state = state_with(&["A", "B", "C", "D"]);
    state.delete_indices(&std::iter::once(2).collect());
    let segments = state.segments();
    assert_eq!(segments.len(), 3);
    let texts = segments.iter().map(|s| s.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, ["A", "B", "D"]);
}

#[test]
fn replace_all_with_nothing_clears_the_list() {
    let mut state = state_with(&["A", "B"]);
    state.clear();
    assert_eq!(state.entry_count(), 0);
    assert!(state.segments().is_empty());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn toggle_selected_flips_membership() {
    let mut state = state_with(&["A", "B"]);
    state.toggle_selected(1);
    assert!(state.selection().contains(&1));
    state.toggle_selected(1);
    assert!(state.selection().is_empty());
}

#[test]
fn toggle_selected_ignores_out_of_range() {
    let mut state = state_with(&["A"]);
    state.toggle_selected(9);
    assert!(state.selection().is_empty());
}

#[test]
fn toggle_select_all_cycles() {
    let mut state = state_with(&["A", "B", "C"]);
    state.toggle_select_all();
    assert_eq!(state.selection().len(), 3);
    state.toggle_select_all();
    assert!(state.selection().is_empty());
}

#[test]
fn delete_selected_removes_marked_entries() {
    let mut state = state_with(&["A", "B", "C"]);
    state.toggle_selected(0);
    state.toggle_selected(2);
    state.delete_selected();
    assert_eq!(state.entries(), ["B"]);
    assert!(state.selection().is_empty());
}

#[test]
fn any_list_change_invalidates_selection() {
    // Positional indices go stale even on unrelated appends.
    let mut state = state_with(&["A", "B"]);
    state.toggle_selected(0);
    state.append_entries(["C"]);
    assert!(state.selection().is_empty());
}

#[test]
fn list_changes_roll_segment_identities() {
    let mut state = state_with(&["A", "B"]);
    let before = state.segments();
    state.append_entries(["C"]);
    let after = state.segments();
    assert_ne!(before[0].id, after[0].id);
}

// =============================================================
// Spin lifecycle
// =============================================================

#[test]
fn begin_spin_enters_spinning_and_accumulates_rotation() {
    let mut state = state_with(&["A", "B", "C", "D"]);
    let ticket = state.begin_spin(450.0).unwrap();
    assert!(state.is_spinning());
    assert_eq!(state.rotation_deg(), 450.0);
    assert_eq!(ticket.target_rotation_deg, 450.0);
    assert_eq!(ticket.segments.len(), 4);
}

#[test]
fn begin_spin_on_empty_wheel_is_rejected() {
    let mut state = state_with(&[]);
    assert!(state.begin_spin(1800.0).is_none());
    assert!(!state.is_spinning());
    assert_eq!(state.rotation_deg(), 0.0);
}

#[test]
fn begin_spin_while_spinning_is_rejected() {
    let mut state = state_with(&["A", "B"]);
    let first = state.begin_spin(1800.0);
    assert!(first.is_some());
    assert!(state.begin_spin(1800.0).is_none());
    assert_eq!(state.rotation_deg(), 1800.0);
}

#[test]
fn complete_spin_resolves_the_worked_example() {
    // ["A","B","C","D"], cumulative 450° → slice 3 → "D".
    let mut state = state_with(&["A", "B", "C", "D"]);
    let ticket = state.begin_spin(450.0).unwrap();
    let winner = state.complete_spin(&ticket).unwrap();
    assert_eq!(winner.text, "D");
    assert!(!state.is_spinning());
    assert_eq!(state.winner().map(|s| s.text.as_str()), Some("D"));
}

#[test]
fn complete_spin_winner_comes_from_the_snapshot() {
    let mut state = state_with(&["A", "B", "C"]);
    let ticket = state.begin_spin(1800.0).unwrap();
    let winner = state.complete_spin(&ticket).unwrap();
    assert!(ticket.segments.iter().any(|s| s.id == winner.id));
}

#[test]
fn complete_spin_without_a_spin_is_a_no_op() {
    let mut state = state_with(&["A", "B"]);
    let ticket = SpinTicket {
        target_rotation_deg: 450.0,
        segments: state.segments(),
    };
    assert!(state.complete_spin(&ticket).is_none());
    assert!(state.winner().is_none());
}

#[test]
fn rotation_accumulates_across_spins() {
    let mut state = state_with(&["A", "B"]);
    let first = state.begin_spin(450.0).unwrap();
    state.complete_spin(&first);
    let second = state.begin_spin(360.0).unwrap();
    assert_eq!(second.target_rotation_deg, 810.0);
    assert_eq!(state.rotation_deg(), 810.0);
}

#[test]
fn next_spin_is_allowed_before_winner_dismissal() {
    let mut state = state_with(&["A", "B"]);
    let first = state.begin_spin(1800.0).unwrap();
    state.complete_spin(&first);
    assert!(state.winner().is_some());
    let second = state.begin_spin(1800.0);
    assert!(second.is_some());
}

#[test]
fn dismiss_winner_clears_the_result() {
    let mut state = state_with(&["A"]);
    let ticket = state.begin_spin(1800.0).unwrap();
    state.complete_spin(&ticket);
    assert!(state.winner().is_some());
    state.dismiss_winner();
    assert!(state.winner().is_none());
}

// =============================================================
// Mutation guard while spinning
// =============================================================

#[test]
fn mutations_are_rejected_while_spinning() {
    let mut state = state_with(&["A", "B", "C"]);
    let ticket = state.begin_spin(1800.0).unwrap();

    assert_eq!(state.append_entries(["X"]), 0);
    state.delete_at(0);
    state.delete_indices(&std::iter::once(1).collect());
    state.replace_all(["Y"]);
    state.toggle_selected(0);
    state.toggle_select_all();

    assert_eq!(state.entries(), ["A", "B", "C"]);
    assert!(state.selection().is_empty());

    state.complete_spin(&ticket);
    assert_eq!(state.append_entries(["X"]), 1);
    assert_eq!(state.entries(), ["A", "B", "C", "X"]);
}
