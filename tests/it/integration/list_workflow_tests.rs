//! List Workflow Integration Tests

use crate::helpers::{drag_onto, id, labels, six_item_list, TestContainerBuilder};
use selector::constants::{DRAG_PAYLOAD_FORMAT, OUT_OF_SCOPE_MESSAGE};
use selector::input::{DropEvent, GestureOutcome};
use selector::notifications::ToastVariant;
use selector::types::ItemLayoutHint;
use selector::{
    DragDataBag, DragDataTransfer, FlowDirection, Point, SelectorConfig, SelectorContainer,
    SelectorError,
};

#[test]
fn test_drag_left_inserts_before_target() {
    let mut container = six_item_list();
    assert!(drag_onto(&mut container, "D", "B").unwrap());
    assert_eq!(labels(&container), ["A", "D", "B", "C", "E", "F"]);
    assert_eq!(container.last_outcome(), Some(GestureOutcome::Dropped));
}

#[test]
fn test_drag_right_inserts_after_target() {
    let mut container = six_item_list();
    assert!(drag_onto(&mut container, "B", "E").unwrap());
    assert_eq!(labels(&container), ["A", "C", "D", "E", "B", "F"]);
}

#[test]
fn test_drop_onto_self_keeps_order() {
    let mut container = six_item_list();
    let before = container.revision();
    assert!(drag_onto(&mut container, "C", "C").unwrap());
    assert_eq!(labels(&container), ["A", "B", "C", "D", "E", "F"]);
    // still a fresh collection
    assert!(container.revision() > before);
}

#[test]
fn test_horizontal_list_reorders_the_same_way() {
    let mut container = TestContainerBuilder::with_config(SelectorConfig::list(FlowDirection::Row))
        .with_items(&["A", "B", "C"])
        .build();
    drag_onto(&mut container, "A", "C").unwrap();
    assert_eq!(labels(&container), ["B", "C", "A"]);
}

#[test]
fn test_stale_source_aborts_with_toast() {
    let mut container = SelectorContainer::with_children(
        SelectorConfig::list(FlowDirection::Column),
        ["A", "B", "C"],
    );
    let stale = container.items()[0].id.clone();

    let mut bag = DragDataBag::new();
    container
        .on_item_drag_start(&stale, Point::ZERO, &mut bag)
        .unwrap();

    // the children are declared again while the drag is in flight
    container.set_children(["A", "B", "C"]);
    let target = container.items()[1].id.clone();

    let err = container
        .on_item_drop(&target, &mut DropEvent::new(Point::ZERO, &mut bag))
        .unwrap_err();

    assert!(matches!(err, SelectorError::NotFound(ref missing) if *missing == stale));
    assert_eq!(labels(&container), ["A", "B", "C"]);
    assert_eq!(container.toasts().count(), 1);
    let toast = container.toasts().latest().unwrap();
    assert_eq!(toast.message, OUT_OF_SCOPE_MESSAGE);
    assert_eq!(toast.variant, ToastVariant::Error);

    assert_eq!(container.on_drag_end(), Some(GestureOutcome::Cancelled));
}

#[test]
fn test_unknown_target_aborts_with_toast() {
    let mut container = six_item_list();
    let mut bag = DragDataBag::new();
    container
        .on_item_drag_start(&id("A"), Point::ZERO, &mut bag)
        .unwrap();

    let result = container.on_item_drop(&id("Z"), &mut DropEvent::new(Point::ZERO, &mut bag));
    assert!(matches!(result, Err(SelectorError::NotFound(_))));
    assert_eq!(labels(&container), ["A", "B", "C", "D", "E", "F"]);
    assert_eq!(container.toasts().count(), 1);
}

#[test]
fn test_foreign_drop_on_list_background_is_silent() {
    let mut container = six_item_list();
    let mut bag = DragDataBag::new();
    bag.set_data(
        DRAG_PAYLOAD_FORMAT,
        r#"{"source_id": "other", "pointer_offset": {"dx": 0, "dy": 0}}"#.to_string(),
    );

    let consumed = container
        .on_container_drop(&mut DropEvent::new(Point::new(5.0, 5.0), &mut bag))
        .unwrap();

    assert!(!consumed);
    assert_eq!(container.toasts().count(), 0);
    assert_eq!(labels(&container), ["A", "B", "C", "D", "E", "F"]);
    // left for whichever target does accept it
    assert!(bag.get_data(DRAG_PAYLOAD_FORMAT).is_some());
}

#[test]
fn test_rebuild_regenerates_ids() {
    let mut container = SelectorContainer::with_children(
        SelectorConfig::list(FlowDirection::Column),
        ["A", "B"],
    );
    let before: Vec<_> = container.collection().ids().cloned().collect();
    container.set_children(["A", "B"]);
    let after: Vec<_> = container.collection().ids().cloned().collect();

    assert_eq!(labels(&container), ["A", "B"]);
    assert!(before.iter().all(|old| !after.contains(old)));
}

#[test]
fn test_list_items_stretch() {
    let container = six_item_list();
    assert!(container.views().all(|view| view.hint == ItemLayoutHint::Stretch));
}
