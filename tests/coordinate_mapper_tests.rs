use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use timeline_dnd::TimelineError;
use timeline_dnd::core::{DAY_MS, TimeRange, Viewport, pixel_at, time_at};

fn one_day_viewport(day_start: f64, pixel_width: f64) -> Viewport {
    let visible = TimeRange::new(day_start + DAY_MS, day_start + 2.0 * DAY_MS).expect("visible");
    Viewport::from_visible(visible, day_start, pixel_width, 3.0).expect("viewport")
}

#[test]
fn from_visible_spans_three_visible_windows() {
    let day_start = 1_717_200_000_000.0;
    let viewport = one_day_viewport(day_start, 900.0);

    assert_eq!(viewport.canvas().start(), day_start);
    assert_eq!(viewport.canvas().end(), day_start + 3.0 * DAY_MS);
    assert_eq!(viewport.canvas_pixel_width(), 2_700.0);
}

#[test]
fn canvas_midpoint_and_first_day_midpoint() {
    let day_start = 1_717_200_000_000.0;
    let viewport = one_day_viewport(day_start, 900.0);

    let canvas_mid = time_at(1_350.0, viewport).expect("time");
    assert_eq!(canvas_mid, day_start + 1.5 * DAY_MS);

    let first_day_noon = time_at(450.0, viewport).expect("time");
    assert_abs_diff_eq!(first_day_noon, day_start + 0.5 * DAY_MS, epsilon = 1e-3);
}

#[test]
fn pixel_at_inverts_time_at() {
    let viewport = one_day_viewport(0.0, 1_200.0);
    let time = time_at(777.0, viewport).expect("time");
    let px = pixel_at(time, viewport).expect("pixel");
    assert_abs_diff_eq!(px, 777.0, epsilon = 1e-6);
}

#[test]
fn viewport_rejects_non_positive_width() {
    let visible = TimeRange::new(0.0, DAY_MS).expect("visible");
    let err = Viewport::from_visible(visible, 0.0, 0.0, 3.0).expect_err("zero width must fail");
    assert!(matches!(err, TimelineError::InvalidViewport { .. }));

    let err = Viewport::from_visible(visible, 0.0, -10.0, 3.0).expect_err("negative width");
    assert!(matches!(err, TimelineError::InvalidViewport { .. }));
}

#[test]
fn viewport_rejects_canvas_not_covering_visible() {
    let visible = TimeRange::new(0.0, DAY_MS).expect("visible");
    let canvas = TimeRange::new(1.0, 3.0 * DAY_MS).expect("canvas");
    assert!(Viewport::new(visible, canvas, 900.0).is_err());
}

#[test]
fn time_at_rejects_non_finite_pixel() {
    let viewport = one_day_viewport(0.0, 900.0);
    assert!(time_at(f64::NAN, viewport).is_err());
}

#[test]
fn deserialization_rejects_inverted_ranges_and_detached_canvas() {
    assert!(serde_json::from_str::<TimeRange>(r#"{"start":10.0,"end":10.0}"#).is_err());

    let viewport = one_day_viewport(1_717_200_000_000.0, 900.0);
    let json = serde_json::to_string(&viewport).expect("json");
    let restored: Viewport = serde_json::from_str(&json).expect("viewport");
    assert_eq!(restored, viewport);

    let detached = r#"{
        "visible": {"start": 0.0, "end": 100.0},
        "canvas": {"start": 50.0, "end": 350.0},
        "pixel_width": 900.0,
        "canvas_factor": 3.0
    }"#;
    assert!(serde_json::from_str::<Viewport>(detached).is_err());
}

proptest! {
    #[test]
    fn boundaries_map_exactly_to_canvas_edges(
        canvas_start in 0i64..4_000_000_000_000,
        visible_span in 60_000i64..(90 * 86_400_000),
        pixel_width in 1u32..8_000
    ) {
        let canvas_start = canvas_start as f64;
        let visible_span = visible_span as f64;
        let pixel_width = f64::from(pixel_width);
        let visible = TimeRange::new(canvas_start + visible_span, canvas_start + 2.0 * visible_span)
            .expect("visible");
        let viewport = Viewport::from_visible(visible, canvas_start, pixel_width, 3.0)
            .expect("viewport");

        prop_assert_eq!(time_at(0.0, viewport).expect("left"), viewport.canvas().start());
        prop_assert_eq!(
            time_at(pixel_width * 3.0, viewport).expect("right"),
            viewport.canvas().end()
        );
    }

    #[test]
    fn time_is_monotonic_in_pixel(
        pixel_width in 1.0f64..4_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let visible = TimeRange::new(DAY_MS, 2.0 * DAY_MS).expect("visible");
        let viewport = Viewport::from_visible(visible, 0.0, pixel_width, 3.0).expect("viewport");
        let width = viewport.canvas_pixel_width();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let t_lo = time_at(lo * width, viewport).expect("lo");
        let t_hi = time_at(hi * width, viewport).expect("hi");
        prop_assert!(t_lo <= t_hi);
    }
}
