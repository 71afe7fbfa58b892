//! Unit tests for spatial_index module.

use selector::spatial_index::SpatialIndex;
use selector::{ItemId, Point, Rect};

fn grid() -> SpatialIndex {
    // 5x5 grid of 20x20 boxes with 10px gaps
    let mut index = SpatialIndex::new();
    for row in 0..5 {
        for col in 0..5 {
            let x = col as f64 * 30.0;
            let y = row as f64 * 30.0;
            index.insert(ItemId::new(format!("{row}-{col}")), Rect::new(x, y, x + 20.0, y + 20.0));
        }
    }
    index
}

#[test]
fn test_contained_query_on_grid() {
    let index = grid();
    // strictly covers rows 1..=2 and cols 1..=2
    let mut hits = index.query_contained(Rect::new(25.0, 25.0, 85.0, 85.0));
    hits.sort();
    assert_eq!(
        hits,
        ["1-1", "1-2", "2-1", "2-2"].map(ItemId::new).to_vec()
    );
}

#[test]
fn test_contained_query_accepts_inverted_rect() {
    let index = grid();
    let hits = index.query_contained(Rect::new(55.0, 55.0, -5.0, -5.0));
    assert_eq!(hits.len(), 4);
}

#[test]
fn test_shared_edge_is_excluded() {
    let index = grid();
    // right edge of the selection equals the right edge of "0-0"
    let hits = index.query_contained(Rect::new(-1.0, -1.0, 20.0, 25.0));
    assert!(hits.is_empty());
}

#[test]
fn test_moved_box_is_found_at_new_origin() {
    let mut index = grid();
    assert!(index.move_to(&ItemId::new("0-0"), Point::new(200.0, 200.0)));
    assert_eq!(
        index.query_contained(Rect::new(195.0, 195.0, 225.0, 225.0)),
        vec![ItemId::new("0-0")]
    );
    assert!(!index.move_to(&ItemId::new("missing"), Point::ZERO));
}
