//! Integration tests for face-to-face snapping during translate drags.

use glam::Vec3;
use meshstage_lib::harness::TestHarness;
use meshstage_lib::state::AppSettings;

const EPS: f32 = 1e-4;

fn harness_with_threshold(threshold: f32) -> TestHarness {
    let mut settings = AppSettings::default();
    settings.snap.enabled = true;
    settings.snap.threshold = threshold;
    TestHarness::with_settings(settings)
}

#[test]
fn test_two_cubes_snap_to_exact_contact() {
    let mut h = harness_with_threshold(0.2);
    let a = h.add_box_at(1.0, 1.0, 1.0, 0.0, 0.0).unwrap();
    let b = h.add_box_at(1.0, 1.0, 1.0, 3.0, 0.0).unwrap();
    assert!(h.select(&b));

    // Gap of 0.15 after the move: inside the threshold
    assert!(h.drag_by(Vec3::new(-1.85, 0.0, 0.0), 1));

    let box_a = h.bounding_box(&a).unwrap();
    let box_b = h.bounding_box(&b).unwrap();
    assert!((box_b.min.x - box_a.max.x).abs() < EPS, "B.min.x = {}", box_b.min.x);
    // Other axes untouched
    assert!(box_b.min.y.abs() < EPS);
    assert!((box_b.center().z - 0.0).abs() < EPS);
}

#[test]
fn test_no_snap_outside_threshold() {
    let mut h = harness_with_threshold(0.2);
    let _a = h.add_box_at(1.0, 1.0, 1.0, 0.0, 0.0).unwrap();
    let b = h.add_box_at(1.0, 1.0, 1.0, 3.0, 0.0).unwrap();

    // Gap of 0.5 remains
    assert!(h.drag_by(Vec3::new(-1.5, 0.0, 0.0), 1));

    let box_b = h.bounding_box(&b).unwrap();
    assert!((box_b.min.x - 1.0).abs() < EPS);
}

#[test]
fn test_snap_ignores_boxes_not_overlapping_other_axes() {
    let mut h = harness_with_threshold(0.2);
    let _a = h.add_box_at(1.0, 1.0, 1.0, 0.0, 0.0).unwrap();
    // Off to the side on Z: X faces never face each other
    let b = h.add_box_at(1.0, 1.0, 1.0, 3.0, 5.0).unwrap();

    assert!(h.drag_by(Vec3::new(-1.85, 0.0, 0.0), 1));

    let box_b = h.bounding_box(&b).unwrap();
    assert!((box_b.min.x - 0.65).abs() < EPS);
}

#[test]
fn test_ground_snap_when_lifted_slightly() {
    let mut h = harness_with_threshold(0.2);
    let id = h.add_box(1.0, 1.0, 1.0).unwrap();

    // Lift well above ground, then come back down to within the threshold
    assert!(h.drag_by(Vec3::new(0.0, 2.0, 0.0), 1));
    assert!((h.bounding_box(&id).unwrap().min.y - 2.0).abs() < EPS);

    assert!(h.drag_by(Vec3::new(0.0, -1.9, 0.0), 1));
    assert!(h.bounding_box(&id).unwrap().min.y.abs() < EPS);
}

#[test]
fn test_snap_is_idempotent() {
    let mut h = harness_with_threshold(0.2);
    let a = h.add_box_at(1.0, 1.0, 1.0, 0.0, 0.0).unwrap();
    let b = h.add_box_at(1.0, 1.0, 1.0, 3.0, 0.0).unwrap();
    assert!(h.drag_by(Vec3::new(-1.85, 0.0, 0.0), 1));
    let first = h.bounding_box(&b).unwrap();

    // A zero move re-runs the snap on an already snapped box
    assert!(h.drag_by(Vec3::ZERO, 1));
    let second = h.bounding_box(&b).unwrap();
    assert!((first.min - second.min).length() < EPS);
    assert!((second.min.x - h.bounding_box(&a).unwrap().max.x).abs() < EPS);
}

#[test]
fn test_snap_disabled_in_settings() {
    let mut settings = AppSettings::default();
    settings.snap.enabled = false;
    let mut h = TestHarness::with_settings(settings);
    let _a = h.add_box_at(1.0, 1.0, 1.0, 0.0, 0.0).unwrap();
    let b = h.add_box_at(1.0, 1.0, 1.0, 3.0, 0.0).unwrap();

    assert!(h.drag_by(Vec3::new(-1.85, 0.0, 0.0), 1));
    assert!((h.bounding_box(&b).unwrap().min.x - 0.65).abs() < EPS);
}

#[test]
fn test_stepwise_approach_snaps_at_the_end() {
    let mut h = harness_with_threshold(0.2);
    let a = h.add_box_at(1.0, 1.0, 1.0, 0.0, 0.0).unwrap();
    let b = h.add_box_at(1.0, 1.0, 1.0, 3.0, 0.0).unwrap();

    // Unsnapped target leaves a 0.1 gap, inside the threshold
    assert!(h.drag_by(Vec3::new(-1.9, 0.0, 0.0), 20));

    let box_a = h.bounding_box(&a).unwrap();
    let box_b = h.bounding_box(&b).unwrap();
    assert!((box_b.min.x - box_a.max.x).abs() < EPS, "B.min.x = {}", box_b.min.x);
}

#[test]
fn test_small_steps_lift_object_off_the_ground() {
    let mut h = harness_with_threshold(0.2);
    let id = h.add_box(1.0, 1.0, 1.0).unwrap();

    // Each step is far below the threshold
    assert!(h.drag_by(Vec3::new(0.0, 1.0, 0.0), 50));
    let min_y = h.bounding_box(&id).unwrap().min.y;
    assert!((min_y - 1.0).abs() < EPS, "min.y = {min_y}");
}

#[test]
fn test_small_steps_pull_touching_objects_apart() {
    let mut h = harness_with_threshold(0.2);
    let a = h.add_box_at(1.0, 1.0, 1.0, 0.0, 0.0).unwrap();
    let b = h.add_box_at(1.0, 1.0, 1.0, 1.0, 0.0).unwrap();
    let gap = |h: &mut TestHarness| h.bounding_box(&b).unwrap().min.x - h.bounding_box(&a).unwrap().max.x;
    assert!(gap(&mut h).abs() < EPS);

    assert!(h.drag_by(Vec3::new(2.0, 0.0, 0.0), 100));
    let g = gap(&mut h);
    assert!((g - 2.0).abs() < EPS, "gap = {g}");
}

#[test]
fn test_snap_holds_until_drag_leaves_threshold() {
    let mut h = harness_with_threshold(0.2);
    let id = h.add_box(1.0, 1.0, 1.0).unwrap();

    assert!(h.begin_drag());
    assert!(h.drag_translate(Vec3::new(0.0, 0.1, 0.0)));
    assert!(h.bounding_box(&id).unwrap().min.y.abs() < EPS);
    assert!(h.drag_translate(Vec3::new(0.0, 0.15, 0.0)));
    assert!((h.bounding_box(&id).unwrap().min.y - 0.25).abs() < EPS);
    h.end_drag();
}
