//! Headless demo: replays scripted gestures against the three demo
//! containers (vertical list, horizontal list, canvas) and logs the results.
//!
//! Pass a JSON config path to run the canvas demo with custom dimensions:
//!
//! ```sh
//! RUST_LOG=selector=debug selector-demo canvas.json
//! ```

use anyhow::{Context, Result};
use selector::input::{DropEvent, Modifiers, PointerEvent};
use selector::session::DragDataBag;
use selector::{FlowDirection, ItemId, Point, Rect, SelectorConfig, SelectorContainer};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("selector=info")),
        )
        .init();

    let canvas_config = match std::env::args().nth(1) {
        Some(path) => SelectorConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => SelectorConfig::canvas(800.0, 500.0),
    };

    vertical_list()?;
    horizontal_list()?;
    canvas(canvas_config)?;
    Ok(())
}

fn labels(container: &SelectorContainer<String>) -> Vec<&str> {
    container.items().iter().map(|item| item.content.as_str()).collect()
}

fn id_of(container: &SelectorContainer<String>, label: &str) -> Result<ItemId> {
    container
        .items()
        .iter()
        .find(|item| item.content == label)
        .map(|item| item.id.clone())
        .with_context(|| format!("no item labelled {label}"))
}

fn children(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

/// Drag `source` onto `target` in a list container
fn drag_onto(container: &mut SelectorContainer<String>, source: &str, target: &str) -> Result<()> {
    let source_id = id_of(container, source)?;
    let target_id = id_of(container, target)?;
    let mut bag = DragDataBag::new();

    container.on_item_drag_start(&source_id, Point::ZERO, &mut bag)?;
    container.on_item_drop(&target_id, &mut DropEvent::new(Point::ZERO, &mut bag))?;
    container.on_drag_end();
    Ok(())
}

fn vertical_list() -> Result<()> {
    let mut container = SelectorContainer::with_children(
        SelectorConfig::list(FlowDirection::Column),
        children(&["Item A", "Item B", "Item C", "Item D", "Item E", "Item F"]),
    );
    info!(order = ?labels(&container), "Vertical list");

    drag_onto(&mut container, "Item D", "Item B")?;
    info!(order = ?labels(&container), "Dragged D onto B");
    Ok(())
}

fn horizontal_list() -> Result<()> {
    let mut container = SelectorContainer::with_children(
        SelectorConfig::list(FlowDirection::Row),
        children(&["Item A", "Item B", "Item C", "Item D", "Item E", "Item F"]),
    );
    info!(order = ?labels(&container), "Horizontal list");

    drag_onto(&mut container, "Item B", "Item E")?;
    info!(order = ?labels(&container), "Dragged B onto E");
    Ok(())
}

fn canvas(config: SelectorConfig) -> Result<()> {
    let mut container = SelectorContainer::with_children(
        config,
        children(&["Item A", "Item B", "Item C", "Item D", "Item E", "Item F"]),
    );

    // lay the 100x100 boxes out in a row, as the rendering layer would
    let ids: Vec<ItemId> = container.items().iter().map(|item| item.id.clone()).collect();
    for (i, id) in ids.iter().enumerate() {
        let x = 20.0 + i as f64 * 120.0;
        container.report_layout(id, Rect::new(x, 20.0, x + 100.0, 120.0))?;
    }

    let source = id_of(&container, "Item A")?;
    let mut bag = DragDataBag::new();
    container.on_item_drag_start(&source, Point::new(30.0, 35.0), &mut bag)?;
    container
        .on_container_drop(&mut DropEvent::new(Point::new(300.0, 300.0), &mut bag))?;
    container.on_drag_end();
    if let Some(item) = container.get(&source) {
        info!(position = ?item.position, "Placed Item A");
    }

    let shift = Modifiers::shift();
    container.on_pointer_down(&PointerEvent::new(Point::new(10.0, 10.0)).with_modifiers(shift));
    container.on_pointer_move(&PointerEvent::new(Point::new(300.0, 150.0)));
    let selected = container
        .on_pointer_up(&PointerEvent::new(Point::new(400.0, 150.0)))
        .unwrap_or_default();
    let selected: Vec<&str> = container
        .items()
        .iter()
        .filter(|item| selected.contains(&item.id))
        .map(|item| item.content.as_str())
        .collect();
    info!(?selected, "Rubber-band selection");
    Ok(())
}
