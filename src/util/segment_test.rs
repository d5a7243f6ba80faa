use super::*;

fn entries(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_owned()).collect()
}

#[test]
fn derive_segments_is_one_to_one_and_ordered() {
    let input = entries(&["A", "B", "C"]);
    let segments = derive_segments(&input, 0);
    assert_eq!(segments.len(), 3);
    let texts = segments.iter().map(|s| s.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, ["A", "B", "C"]);
}

#[test]
fn derive_segments_empty_in_empty_out() {
    assert!(derive_segments(&[], 0).is_empty());
}

#[test]
fn colors_cycle_through_the_palette() {
    let input = entries(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
    let segments = derive_segments(&input, 0);
    for (index, segment) in segments.iter().enumerate() {
        assert_eq!(segment.color, WHEEL_COLORS[index % WHEEL_COLORS.len()]);
    }
    assert_eq!(segments[8].color, segments[0].color);
    assert_eq!(segments[9].color, segments[1].color);
}

#[test]
fn ids_are_unique_within_a_render() {
    let input = entries(&["dup", "dup", "dup"]);
    let segments = derive_segments(&input, 7);
    let mut ids = segments.iter().map(|s| s.id.as_str()).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn ids_do_not_alias_across_revisions() {
    let input = entries(&["A", "B"]);
    let before = derive_segments(&input, 1);
    let after = derive_segments(&input, 2);
    assert_ne!(before[0].id, after[0].id);
    assert_ne!(before[1].id, after[1].id);
}
