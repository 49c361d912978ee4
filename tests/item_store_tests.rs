use std::sync::Arc;

use timeline_dnd::TimelineError;
use timeline_dnd::core::{
    DAY_MS, Item, ItemId, LaneId, LaneKey, Lane, MINUTE_MS, ResizeEdge, StyleTag, TimeRange,
};
use timeline_dnd::interaction::{DragPayload, DropResult};
use timeline_dnd::store::{ItemStore, Mutation, MutationRejection, StorePolicy};

const NOW: f64 = 1_715_681_220_000.0; // Tuesday 2024-05-14T10:07:00Z
const TUESDAY_8AM: f64 = 1_717_488_000_000.0; // 2024-06-04T08:00:00Z
const FRIDAY_10AM: f64 = 1_717_754_400_000.0; // 2024-06-07T10:00:00Z
const SATURDAY_10AM: f64 = 1_717_840_800_000.0; // 2024-06-08T10:00:00Z

fn lanes() -> Vec<Lane> {
    (1..=4)
        .map(|id| Lane::new(LaneId(id), id - 1, format!("group {id}")))
        .collect()
}

fn item(id: u64, lane: u32, start: f64, end: f64) -> Item {
    Item {
        id: ItemId(id),
        lane_id: LaneId(lane),
        range: TimeRange::new(start, end).expect("range"),
        title: format!("item {id}"),
        style: StyleTag::Default,
    }
}

fn store() -> ItemStore {
    ItemStore::seeded(
        StorePolicy::default(),
        lanes(),
        vec![item(0, 1, TUESDAY_8AM, TUESDAY_8AM + 9.0 * 60.0 * MINUTE_MS)],
    )
    .expect("seeded store")
}

fn drop_at(time: f64, row: u32) -> DropResult {
    DropResult {
        time,
        lane: LaneKey(row),
        payload: DragPayload::new("Drag & drop works"),
    }
}

fn committed(mutation: Mutation) -> Arc<timeline_dnd::store::TimelineSnapshot> {
    match mutation {
        Mutation::Committed(snapshot) => snapshot,
        Mutation::Rejected(reason) => panic!("mutation rejected: {reason:?}"),
    }
}

#[test]
fn drop_on_row_two_lands_in_lane_three_for_one_day() {
    let mut store = store();
    let created = store
        .create_from_drop(&drop_at(TUESDAY_8AM, 2))
        .expect("create");

    assert_eq!(created.id, ItemId(1));
    assert_eq!(created.lane_id, LaneId(3));
    assert_eq!(created.range.span(), 86_400_000.0);
    assert_eq!(created.title, "Drag & drop works");
    assert_eq!(store.snapshot().item(ItemId(1)), Some(&created));
}

#[test]
fn ids_increase_monotonically() {
    let mut store = store();
    let a = store.create_from_drop(&drop_at(TUESDAY_8AM, 0)).expect("a");
    let b = store.create_from_drop(&drop_at(TUESDAY_8AM, 1)).expect("b");
    assert!(b.id > a.id);
    assert_eq!(store.snapshot().next_id, b.id.0 + 1);
}

#[test]
fn drop_on_row_without_lane_is_rejected() {
    let mut store = store();
    let err = store
        .create_from_drop(&drop_at(TUESDAY_8AM, 9))
        .expect_err("row 9 has no lane");
    assert!(matches!(err, TimelineError::UnknownLane(LaneId(10))));
    assert_eq!(store.snapshot().item_count(), 1);
}

#[test]
fn weekend_style_is_derived_from_either_boundary() {
    let mut store = store();
    let saturday = store.create_from_drop(&drop_at(SATURDAY_10AM, 0)).expect("sat");
    assert_eq!(saturday.style, StyleTag::Weekend);

    let friday = store.create_from_drop(&drop_at(FRIDAY_10AM, 0)).expect("fri");
    assert_eq!(friday.style, StyleTag::Weekend);

    let tuesday = store.snapshot().item(ItemId(0)).cloned().expect("seeded");
    assert_eq!(tuesday.style, StyleTag::Default);
}

#[test]
fn move_keeps_duration_and_reassigns_lane() {
    let mut store = store();
    let before = store.item(ItemId(0)).cloned().expect("item");

    let snapshot = committed(
        store
            .move_item(ItemId(0), FRIDAY_10AM, LaneId(4), NOW)
            .expect("move"),
    );
    let moved = snapshot.item(ItemId(0)).expect("moved");
    assert_eq!(moved.range.start(), FRIDAY_10AM);
    assert_eq!(moved.range.span(), before.range.span());
    assert_eq!(moved.lane_id, LaneId(4));
}

#[test]
fn move_into_the_past_snaps_to_grid_after_now() {
    let mut store = store();
    let before = store.item(ItemId(0)).cloned().expect("item");

    let snapshot = committed(
        store
            .move_item(ItemId(0), NOW - DAY_MS, LaneId(1), NOW)
            .expect("move"),
    );
    let moved = snapshot.item(ItemId(0)).expect("moved");
    assert_eq!(moved.range.start(), NOW + 8.0 * MINUTE_MS);
    assert_eq!(moved.range.span(), before.range.span());
}

#[test]
fn move_and_resize_of_unknown_item_are_no_ops() {
    let mut store = store();
    let before = store.snapshot();

    let moved = store
        .move_item(ItemId(42), FRIDAY_10AM, LaneId(1), NOW)
        .expect("move");
    assert_eq!(moved, Mutation::Rejected(MutationRejection::UnknownItem(ItemId(42))));

    let resized = store
        .resize_item(ItemId(42), ResizeEdge::End, FRIDAY_10AM, NOW)
        .expect("resize");
    assert_eq!(resized, Mutation::Rejected(MutationRejection::UnknownItem(ItemId(42))));
    assert!(Arc::ptr_eq(&before, &store.snapshot()));
}

#[test]
fn move_to_unknown_lane_is_a_no_op() {
    let mut store = store();
    let moved = store
        .move_item(ItemId(0), FRIDAY_10AM, LaneId(99), NOW)
        .expect("move");
    assert_eq!(moved, Mutation::Rejected(MutationRejection::UnknownLane(LaneId(99))));
}

#[test]
fn resize_start_into_past_snaps_and_keeps_end() {
    let mut store = ItemStore::seeded(
        StorePolicy::default(),
        lanes(),
        vec![item(5, 2, NOW + 60.0 * MINUTE_MS, NOW + DAY_MS)],
    )
    .expect("store");

    let snapshot = committed(
        store
            .resize_item(ItemId(5), ResizeEdge::Start, NOW - 10.0 * MINUTE_MS, NOW)
            .expect("resize"),
    );
    let resized = snapshot.item(ItemId(5)).expect("item");
    assert_eq!(resized.range.start(), NOW + 8.0 * MINUTE_MS);
    assert_eq!(resized.range.end(), NOW + DAY_MS);
}

#[test]
fn resize_end_only_touches_end() {
    let mut store = store();
    let snapshot = committed(
        store
            .resize_item(ItemId(0), ResizeEdge::End, TUESDAY_8AM + DAY_MS, NOW)
            .expect("resize"),
    );
    let resized = snapshot.item(ItemId(0)).expect("item");
    assert_eq!(resized.range.start(), TUESDAY_8AM);
    assert_eq!(resized.range.end(), TUESDAY_8AM + DAY_MS);
}

#[test]
fn inverted_resize_is_rejected_and_range_kept() {
    let mut store = store();
    let before = store.item(ItemId(0)).cloned().expect("item");

    let mutation = store
        .resize_item(ItemId(0), ResizeEdge::End, TUESDAY_8AM - MINUTE_MS, NOW)
        .expect("resize");
    assert!(matches!(
        mutation,
        Mutation::Rejected(MutationRejection::InvertedRange { .. })
    ));
    assert_eq!(store.item(ItemId(0)), Some(&before));
}

#[test]
fn published_snapshots_are_never_mutated() {
    let mut store = store();
    let before = store.snapshot();

    store
        .move_item(ItemId(0), FRIDAY_10AM, LaneId(2), NOW)
        .expect("move");
    store
        .create_from_drop(&drop_at(FRIDAY_10AM, 0))
        .expect("create");

    assert_eq!(before.item_count(), 1);
    assert_eq!(before.item(ItemId(0)).expect("item").range.start(), TUESDAY_8AM);
    assert_eq!(store.snapshot().item_count(), 2);
}

#[test]
fn move_then_resize_apply_in_order() {
    let mut store = store();
    store
        .move_item(ItemId(0), FRIDAY_10AM, LaneId(1), NOW)
        .expect("move");
    let snapshot = committed(
        store
            .resize_item(ItemId(0), ResizeEdge::End, FRIDAY_10AM + 2.0 * DAY_MS, NOW)
            .expect("resize"),
    );
    let item = snapshot.item(ItemId(0)).expect("item");
    assert_eq!(item.range.start(), FRIDAY_10AM);
    assert_eq!(item.range.end(), FRIDAY_10AM + 2.0 * DAY_MS);
    assert_eq!(item.style, StyleTag::Weekend);
}

#[test]
fn seeding_validates_ids_and_lanes() {
    let duplicate_item = ItemStore::seeded(
        StorePolicy::default(),
        lanes(),
        vec![
            item(1, 1, TUESDAY_8AM, TUESDAY_8AM + DAY_MS),
            item(1, 2, TUESDAY_8AM, TUESDAY_8AM + DAY_MS),
        ],
    );
    assert!(matches!(duplicate_item, Err(TimelineError::DuplicateItemId(ItemId(1)))));

    let mut duplicate_lanes = lanes();
    duplicate_lanes.push(Lane::new(LaneId(2), 9, "again"));
    let duplicate_lane = ItemStore::seeded(StorePolicy::default(), duplicate_lanes, Vec::new());
    assert!(matches!(duplicate_lane, Err(TimelineError::DuplicateLaneId(LaneId(2)))));

    let orphan = ItemStore::seeded(
        StorePolicy::default(),
        lanes(),
        vec![item(0, 77, TUESDAY_8AM, TUESDAY_8AM + DAY_MS)],
    );
    assert!(matches!(orphan, Err(TimelineError::UnknownLane(LaneId(77)))));
}

#[test]
fn lanes_are_ordered_by_order_field() {
    let shuffled = vec![
        Lane::new(LaneId(10), 2, "c"),
        Lane::new(LaneId(20), 0, "a"),
        Lane::new(LaneId(30), 1, "b"),
    ];
    let store = ItemStore::seeded(StorePolicy::default(), shuffled, Vec::new()).expect("store");
    assert_eq!(store.lane_at_row(0), Some(LaneId(20)));
    assert_eq!(store.lane_at_row(2), Some(LaneId(10)));
    assert_eq!(store.lane_at_row(3), None);
}
