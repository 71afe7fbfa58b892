//! Unit tests for the reorder engine.

use crate::helpers::{id, item_labels, six_item_list};
use selector::reorder::reorder;
use selector::{Item, SelectorError};

fn items() -> Vec<Item<&'static str>> {
    six_item_list().items().to_vec()
}

#[test]
fn test_drag_left_inserts_before_target() {
    let result = reorder(&items(), &id("D"), &id("B")).unwrap();
    assert_eq!(item_labels(&result), ["A", "D", "B", "C", "E", "F"]);
}

#[test]
fn test_drag_right_inserts_after_target() {
    let result = reorder(&items(), &id("B"), &id("E")).unwrap();
    assert_eq!(item_labels(&result), ["A", "C", "D", "E", "B", "F"]);
}

#[test]
fn test_input_is_not_mutated() {
    let input = items();
    let _ = reorder(&input, &id("A"), &id("F")).unwrap();
    assert_eq!(item_labels(&input), ["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn test_same_source_and_target_is_identity() {
    let input = items();
    let once = reorder(&input, &id("C"), &id("C")).unwrap();
    let twice = reorder(&once, &id("C"), &id("C")).unwrap();
    assert_eq!(once, input);
    assert_eq!(twice, input);
}

#[test]
fn test_every_pair_is_a_single_relocation() {
    let input = items();
    let labels = item_labels(&input);

    for source in &labels {
        for target in &labels {
            if source == target {
                continue;
            }
            let result = reorder(&input, &id(source), &id(target)).unwrap();
            let result = item_labels(&result);

            // same length and same element set
            assert_eq!(result.len(), labels.len());
            let mut sorted = result.clone();
            sorted.sort();
            assert_eq!(sorted, labels);

            // source lands adjacent to the target on the side it came from
            let s = result.iter().position(|l| l == source).unwrap();
            let t = result.iter().position(|l| l == target).unwrap();
            let moved_left = labels.iter().position(|l| l == source) > labels.iter().position(|l| l == target);
            if moved_left {
                assert_eq!(s + 1, t, "{source} onto {target}: {result:?}");
            } else {
                assert_eq!(t + 1, s, "{source} onto {target}: {result:?}");
            }

            // every other pair keeps its relative order
            let others: Vec<_> = result.iter().filter(|l| *l != source).collect();
            let expected: Vec<_> = labels.iter().filter(|l| *l != source).collect();
            assert_eq!(others, expected);
        }
    }
}

#[test]
fn test_reverse_application() {
    // D left onto B, then B back right onto D
    let once = reorder(&items(), &id("D"), &id("B")).unwrap();
    assert_eq!(item_labels(&once), ["A", "D", "B", "C", "E", "F"]);
    let back = reorder(&once, &id("B"), &id("D")).unwrap();
    assert_eq!(item_labels(&back), ["A", "B", "D", "C", "E", "F"]);

    // B right onto E, then E back left onto B
    let once = reorder(&items(), &id("B"), &id("E")).unwrap();
    assert_eq!(item_labels(&once), ["A", "C", "D", "E", "B", "F"]);
    let back = reorder(&once, &id("E"), &id("B")).unwrap();
    assert_eq!(item_labels(&back), ["A", "C", "D", "B", "E", "F"]);

    // adjacent items restore the original order exactly
    let once = reorder(&items(), &id("C"), &id("D")).unwrap();
    let back = reorder(&once, &id("D"), &id("C")).unwrap();
    assert_eq!(item_labels(&back), ["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn test_unknown_ids_are_not_found() {
    let err = reorder(&items(), &id("Z"), &id("A")).unwrap_err();
    assert!(matches!(err, SelectorError::NotFound(ref missing) if missing == &id("Z")));
}
