//! Property-based invariant tests for the drag-reorder engine.
//!
//! These tests verify structural invariants of the widget and its parts:
//!
//! 1. Reordering preserves membership
//! 2. Out-of-range moves leave the sequence untouched
//! 3. Index lookups stay in agreement with positions
//! 4. Arbitrary gesture streams never panic and always settle to idle
//! 5. Identical gesture streams produce identical orders
//! 6. Overlap resolution never picks the dragged item
//! 7. A scroll loop covers its distance with bounded overshoot
//! 8. Live scroll steps move by exactly the configured speed
//! 9. Direction reversal confirms only on a full agreeing window

use dragsort_core::events::{ItemId, TrackEvent};
use dragsort_core::geometry::Rect;
use dragsort_list::headless::{HeadlessRenderer, HeadlessViewport};
use dragsort_list::order::OrderedItems;
use dragsort_list::{
    AutoScroll, DragPhase, GeometrySnapshot, SortableConfig, SortableList, VerticalDirection,
    Viewport, DIRECTION_WINDOW,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

const ITEM_COUNT: u64 = 6;

/// Gestures that can be fed to a sortable list.
#[derive(Debug, Clone)]
enum Gesture {
    Press(u8),
    Move { dx: i16, dy: i16, ddx: i8, ddy: i8 },
    Release,
    Settle,
    ContextMenu,
    Tick,
}

fn gesture_strategy() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        (0..ITEM_COUNT as u8).prop_map(Gesture::Press),
        (-700i16..700, -700i16..700, -8i8..8, -8i8..8)
            .prop_map(|(dx, dy, ddx, ddy)| Gesture::Move { dx, dy, ddx, ddy }),
        Just(Gesture::Release),
        Just(Gesture::Settle),
        Just(Gesture::ContextMenu),
        Just(Gesture::Tick),
    ]
}

fn move_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..12, 0usize..12)
}

fn direction_strategy() -> impl Strategy<Value = VerticalDirection> {
    prop_oneof![Just(VerticalDirection::Up), Just(VerticalDirection::Down)]
}

/// Six items in a horizontal row of 100x50 slots.
fn row_list() -> SortableList<HeadlessRenderer> {
    let items: Vec<ItemId> = (0..ITEM_COUNT).map(ItemId).collect();
    let renderer = HeadlessRenderer::row(&items, 100.0, 50.0);
    let mut list = SortableList::new(renderer);
    list.attach(&items).expect("distinct ids");
    list
}

/// Apply a gesture sequence to a list.
fn apply_gestures<V: Viewport>(list: &mut SortableList<HeadlessRenderer, V>, gestures: &[Gesture]) {
    for gesture in gestures {
        match gesture {
            Gesture::Press(slot) => {
                list.on_track(&TrackEvent::start([ItemId(u64::from(*slot))]));
            }
            Gesture::Move { dx, dy, ddx, ddy } => {
                list.on_track(&TrackEvent::moved(
                    f32::from(*dx),
                    f32::from(*dy),
                    f32::from(*ddx),
                    f32::from(*ddy),
                ));
            }
            Gesture::Release => list.on_track(&TrackEvent::end()),
            Gesture::Settle => list.on_transition_end(),
            Gesture::ContextMenu => list.on_context_menu(),
            Gesture::Tick => {
                list.tick();
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Reordering preserves membership
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn moves_preserve_membership(
        len in 1usize..8,
        moves in prop::collection::vec(move_strategy(), 0..100),
    ) {
        let initial: Vec<ItemId> = (0..len as u64).map(ItemId).collect();
        let mut items = OrderedItems::new();
        items.replace(&initial).expect("distinct ids");
        for (from, to) in moves {
            items.move_to(from, to);
        }

        let mut seen = items.as_slice().to_vec();
        seen.sort();
        prop_assert_eq!(seen, initial, "every move must keep the same member set");
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Out-of-range moves leave the sequence untouched
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn move_matches_remove_insert_model(
        len in 1usize..8,
        from in 0usize..12,
        to in 0usize..12,
    ) {
        let initial: Vec<ItemId> = (0..len as u64).map(ItemId).collect();
        let mut items = OrderedItems::new();
        items.replace(&initial).expect("distinct ids");
        items.move_to(from, to);

        let mut model = initial;
        if from != to && from < model.len() && to < model.len() {
            let item = model.remove(from);
            model.insert(to, item);
        }
        prop_assert_eq!(items.as_slice(), model.as_slice());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Index lookups stay in agreement with positions
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn index_of_agrees_with_position(
        len in 1usize..8,
        moves in prop::collection::vec(move_strategy(), 0..60),
    ) {
        let initial: Vec<ItemId> = (0..len as u64).map(ItemId).collect();
        let mut items = OrderedItems::new();
        items.replace(&initial).expect("distinct ids");
        for (from, to) in moves {
            items.move_to(from, to);
        }

        for index in 0..items.len() {
            let item = items.get(index).expect("index in range");
            prop_assert_eq!(
                items.index_of(item),
                Some(index),
                "index_of must invert get for {:?}", item
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Arbitrary gesture streams never panic and always settle to idle
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn gesture_stream_preserves_membership(
        gestures in prop::collection::vec(gesture_strategy(), 0..300),
    ) {
        let mut list = row_list();
        apply_gestures(&mut list, &gestures);

        let mut seen = list.items().to_vec();
        seen.sort();
        let expected: Vec<ItemId> = (0..ITEM_COUNT).map(ItemId).collect();
        prop_assert_eq!(seen, expected, "membership must stay a permutation");
    }

    #[test]
    fn gesture_stream_always_settles_to_idle(
        gestures in prop::collection::vec(gesture_strategy(), 0..300),
    ) {
        let mut list = row_list();
        apply_gestures(&mut list, &gestures);

        // Whatever state the stream left behind, a release plus the
        // settle signal must return the widget to idle.
        list.on_track(&TrackEvent::end());
        list.on_transition_end();
        prop_assert_eq!(list.phase(), DragPhase::Idle);
        prop_assert!(!list.is_dragging());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Identical gesture streams produce identical orders
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn identical_gestures_yield_identical_orders(
        gestures in prop::collection::vec(gesture_strategy(), 0..200),
    ) {
        let mut first = row_list();
        let mut second = row_list();

        apply_gestures(&mut first, &gestures);
        apply_gestures(&mut second, &gestures);

        prop_assert_eq!(first.items(), second.items(), "replicas must agree on order");
        prop_assert_eq!(first.phase(), second.phase());
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. Overlap resolution never picks the dragged item
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn overlap_never_resolves_to_the_dragged_item(
        target_slot in 0usize..6,
        x in -250f32..850f32,
        y in -80f32..130f32,
    ) {
        let items: Vec<ItemId> = (0..6).map(ItemId).collect();
        let renderer = HeadlessRenderer::row(&items, 100.0, 50.0);
        let snapshot = GeometrySnapshot::capture(&items, &renderer);
        let target = items[target_slot];

        let dragged = Rect::new(x, y, 100.0, 50.0);
        if let Some(over) = snapshot.resolve_overlap(dragged, &items, target) {
            prop_assert_ne!(over, target, "a slot never swaps with itself");
            prop_assert!(items.contains(&over), "resolved item must be a member");
        }
    }

    #[test]
    fn exact_slot_cover_resolves_to_that_slot(
        target_slot in 0usize..6,
        over_slot in 0usize..6,
    ) {
        prop_assume!(target_slot != over_slot);
        let items: Vec<ItemId> = (0..6).map(ItemId).collect();
        let renderer = HeadlessRenderer::row(&items, 100.0, 50.0);
        let snapshot = GeometrySnapshot::capture(&items, &renderer);

        let dragged = snapshot.slot(over_slot).expect("slot in range");
        prop_assert_eq!(
            snapshot.resolve_overlap(dragged, &items, items[target_slot]),
            Some(items[over_slot]),
            "a fully covered slot must win"
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 7. A scroll loop covers its distance with bounded overshoot
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_loop_overshoots_by_less_than_one_step(
        distance in 1u32..500,
        speed in 1u32..20,
        downward in any::<bool>(),
    ) {
        // Integer-valued floats keep the arithmetic exact.
        let distance = distance as f32;
        let speed = speed as f32;
        let signed = if downward { distance } else { -distance };

        let mut scroll = AutoScroll::new();
        prop_assert!(scroll.start(signed));

        let mut total = 0.0f32;
        let mut steps = 0u32;
        while let Some(delta) = scroll.step(speed) {
            if downward {
                prop_assert!(delta > 0.0, "downward loop must emit positive steps");
            } else {
                prop_assert!(delta < 0.0, "upward loop must emit negative steps");
            }
            prop_assert_eq!(delta.abs(), speed, "every step is one speed increment");
            total += delta.abs();
            steps += 1;
            prop_assert!(steps <= 1000, "loop must retire");
        }

        prop_assert!(!scroll.is_pending());
        prop_assert!(total >= distance, "loop must cover the requested distance");
        prop_assert!(total - distance < speed, "overshoot is bounded by one step");
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 8. Live scroll steps move by exactly the configured speed
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_steps_move_exactly_the_configured_speed(
        gestures in prop::collection::vec(gesture_strategy(), 0..200),
    ) {
        let items: Vec<ItemId> = (0..10).map(ItemId).collect();
        let renderer = HeadlessRenderer::column(&items, 100.0, 100.0);
        let viewport = HeadlessViewport::new(Rect::new(0.0, 0.0, 100.0, 1000.0), 600.0);
        let mut list =
            SortableList::with_config(renderer, viewport, SortableConfig::with_scrolling())
                .expect("valid config");
        list.attach(&items).expect("distinct ids");

        apply_gestures(&mut list, &gestures);

        let speed = list.config().scrolling_speed;
        for delta in list.viewport().scroll_log() {
            prop_assert_eq!(delta.abs(), speed, "scroll deltas come in fixed steps");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 9. Direction reversal confirms only on a full agreeing window
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn full_agreeing_window_confirms_after_any_prefix(
        prefix in prop::collection::vec(direction_strategy(), 0..40),
        reversal in direction_strategy(),
    ) {
        let mut scroll = AutoScroll::new();
        for direction in prefix {
            scroll.record_direction(direction);
        }
        for _ in 0..DIRECTION_WINDOW {
            scroll.record_direction(reversal);
        }

        prop_assert!(scroll.confirm_reversal(reversal), "a full agreeing window confirms");
        // Confirmation consumed the samples.
        prop_assert!(!scroll.confirm_reversal(reversal));
    }

    #[test]
    fn confirmation_matches_the_recorded_window(
        samples in prop::collection::vec(direction_strategy(), 0..60),
    ) {
        let mut scroll = AutoScroll::new();
        for direction in &samples {
            scroll.record_direction(*direction);
        }

        let window: Vec<VerticalDirection> =
            samples.iter().rev().take(DIRECTION_WINDOW).copied().collect();
        let expected = window.len() == DIRECTION_WINDOW
            && window.iter().all(|&direction| direction == VerticalDirection::Up);
        prop_assert_eq!(
            scroll.confirm_reversal(VerticalDirection::Up),
            expected,
            "confirmation must reflect exactly the last {} samples", DIRECTION_WINDOW
        );
    }
}
