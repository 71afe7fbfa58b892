//! Canvas Workflow Integration Tests

use crate::helpers::{drag_to_canvas, id, labels, TestContainerBuilder};
use selector::constants::DRAG_PAYLOAD_FORMAT;
use selector::input::{DropEvent, GestureOutcome};
use selector::types::ItemLayoutHint;
use selector::{DragDataBag, DragDataTransfer, Point, Rect, SelectorError};

#[test]
fn test_grab_point_stays_under_pointer() {
    let mut container = TestContainerBuilder::canvas(800.0, 500.0)
        .with_box("A", (50.0, 80.0), (100.0, 100.0))
        .build();

    assert!(drag_to_canvas(&mut container, "A", (60.0, 95.0), (300.0, 200.0)).unwrap());

    let item = container.get(&id("A")).unwrap();
    assert_eq!(item.position, Some(Point::new(290.0, 185.0)));
    assert_eq!(
        container.layout_of(&id("A")),
        Some(Rect::new(290.0, 185.0, 390.0, 285.0))
    );
    assert_eq!(container.last_outcome(), Some(GestureOutcome::Dropped));
}

#[test]
fn test_canvas_drop_keeps_order_and_other_items() {
    let mut container = TestContainerBuilder::canvas(800.0, 500.0)
        .with_box("A", (0.0, 0.0), (50.0, 50.0))
        .with_box("B", (100.0, 0.0), (50.0, 50.0))
        .build();

    drag_to_canvas(&mut container, "B", (110.0, 10.0), (410.0, 310.0)).unwrap();

    assert_eq!(labels(&container), ["A", "B"]);
    assert_eq!(container.get(&id("B")).unwrap().position, Some(Point::new(400.0, 300.0)));
    assert_eq!(container.get(&id("A")).unwrap().position, None);
}

#[test]
fn test_drop_onto_item_bubbles_to_container() {
    let mut container = TestContainerBuilder::canvas(800.0, 500.0)
        .with_box("A", (0.0, 0.0), (50.0, 50.0))
        .with_box("B", (200.0, 200.0), (50.0, 50.0))
        .build();

    let mut bag = DragDataBag::new();
    container
        .on_item_drag_start(&id("A"), Point::new(5.0, 5.0), &mut bag)
        .unwrap();
    let consumed = container
        .on_item_drop(&id("B"), &mut DropEvent::new(Point::new(210.0, 220.0), &mut bag))
        .unwrap();

    assert!(consumed);
    assert_eq!(labels(&container), ["A", "B"]);
    assert_eq!(container.get(&id("A")).unwrap().position, Some(Point::new(205.0, 215.0)));
    // drag data is cleared once the container accepts the drop
    assert!(bag.get_data(DRAG_PAYLOAD_FORMAT).is_none());
}

#[test]
fn test_drag_end_without_drop_cancels() {
    let mut container = TestContainerBuilder::canvas(800.0, 500.0)
        .with_box("A", (10.0, 10.0), (50.0, 50.0))
        .build();

    let mut bag = DragDataBag::new();
    container
        .on_item_drag_start(&id("A"), Point::new(20.0, 20.0), &mut bag)
        .unwrap();
    assert_eq!(container.gesture().dragged_item_id(), Some(&id("A")));

    assert_eq!(container.on_drag_end(), Some(GestureOutcome::Cancelled));
    assert!(container.gesture().is_idle());
    assert_eq!(container.get(&id("A")).unwrap().position, None);
}

#[test]
fn test_unlaid_item_is_grabbed_at_origin() {
    let mut container = TestContainerBuilder::canvas(800.0, 500.0)
        .with_items(&["A"])
        .build();

    drag_to_canvas(&mut container, "A", (40.0, 40.0), (120.0, 90.0)).unwrap();
    assert_eq!(container.get(&id("A")).unwrap().position, Some(Point::new(120.0, 90.0)));
}

#[test]
fn test_garbage_payload_is_ignored_quietly() {
    let mut container = TestContainerBuilder::canvas(800.0, 500.0)
        .with_box("A", (0.0, 0.0), (10.0, 10.0))
        .build();

    let mut bag = DragDataBag::new();
    bag.set_data(DRAG_PAYLOAD_FORMAT, "not json".to_string());
    let result = container.on_container_drop(&mut DropEvent::new(Point::new(5.0, 5.0), &mut bag));

    assert!(matches!(result, Err(SelectorError::InvalidGeometry(_))));
    assert_eq!(container.toasts().count(), 0);
    assert_eq!(container.get(&id("A")).unwrap().position, None);
}

#[test]
fn test_canvas_views_are_intrinsic_and_placed() {
    let mut container = TestContainerBuilder::canvas(800.0, 500.0)
        .with_box("A", (0.0, 0.0), (10.0, 10.0))
        .build();
    assert_eq!(container.views().next().unwrap().placement, None);

    drag_to_canvas(&mut container, "A", (0.0, 0.0), (30.0, 40.0)).unwrap();

    let view = container.views().next().unwrap();
    assert_eq!(view.hint, ItemLayoutHint::Intrinsic);
    assert_eq!(view.placement, Some(Point::new(30.0, 40.0)));
}
