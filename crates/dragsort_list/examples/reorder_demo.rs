//! Drag Reorder Demo
//!
//! Drives the sortable list engine through scripted pointer gestures:
//! - A row of five items rendered by the headless backend
//! - A drag that carries the first item across two slots
//! - Change notifications printed as the order updates
//! - An edge autoscroll pass inside a scrollable viewport
//!
//! Run with: cargo run -p dragsort_list --example reorder_demo

use dragsort_core::events::{ItemId, TrackEvent};
use dragsort_core::geometry::Rect;
use dragsort_list::headless::{HeadlessRenderer, HeadlessViewport};
use dragsort_list::{Result, SortableConfig, SortableList};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    row_reorder()?;
    edge_autoscroll()
}

/// Drag the first item of a row across two slots and settle.
fn row_reorder() -> Result<()> {
    let items: Vec<ItemId> = (0..5).map(ItemId).collect();
    let renderer = HeadlessRenderer::row(&items, 100.0, 50.0);
    let mut list = SortableList::new(renderer);
    list.attach(&items)?;

    list.on_items_changed(|order| println!("order changed: {order:?}"));
    list.on_sort_finished(|item| println!("sort finished, dragged {item:?}"));

    println!("initial order: {:?}", list.items());
    list.on_track(&TrackEvent::start([ItemId(0)]));
    for step in 1..=20 {
        let dx = step as f32 * 10.0;
        list.on_track(&TrackEvent::moved(dx, 0.0, 10.0, 0.0));
    }
    list.on_track(&TrackEvent::end());
    list.on_transition_end();
    println!("final order: {:?}\n", list.items());
    Ok(())
}

/// Hold an item at the bottom edge of a scrollable viewport and pump
/// frames until the scroll loop retires.
fn edge_autoscroll() -> Result<()> {
    let items: Vec<ItemId> = (0..12).map(ItemId).collect();
    let renderer = HeadlessRenderer::column(&items, 100.0, 100.0);
    let viewport = HeadlessViewport::new(Rect::new(0.0, 0.0, 100.0, 1200.0), 600.0);
    let mut list = SortableList::with_config(renderer, viewport, SortableConfig::with_scrolling())?;
    list.attach(&items)?;

    list.on_track(&TrackEvent::start([ItemId(0)]));
    list.on_track(&TrackEvent::moved(0.0, 540.0, 0.0, 6.0));
    while list.tick() {}
    println!(
        "autoscroll scrolled {}px over {} steps",
        list.viewport().scroll_offset(),
        list.viewport().scroll_log().len()
    );

    list.on_track(&TrackEvent::end());
    list.on_transition_end();
    println!("final order: {:?}", list.items());
    Ok(())
}
