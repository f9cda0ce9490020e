//! Proximity snapping of a moving box against other boxes and the ground plane.
//!
//! A single call corrects at most one axis. The editor calls it on every drag
//! move, so corrections on several axes accumulate over consecutive frames.

use glam::Vec3;
use shared::{Axis, ObjectId};

use crate::geometry::Aabb;

/// Alignments at or below this magnitude are already in contact
pub const CONTACT_EPSILON: f32 = 1e-6;

/// What the moving box was aligned to
#[derive(Debug, Clone, PartialEq)]
pub enum SnapTarget {
    Object(ObjectId),
    Ground,
}

/// Single-axis positional correction
#[derive(Debug, Clone, PartialEq)]
pub struct SnapCorrection {
    pub axis: Axis,
    pub delta: f32,
    pub target: SnapTarget,
}

impl SnapCorrection {
    /// Correction as a world-space translation
    pub fn offset(&self) -> Vec3 {
        let mut v = Vec3::ZERO;
        v[self.axis.index()] = self.delta;
        v
    }
}

/// Find the smallest face-to-face correction that brings `moving` into
/// contact with a candidate box or the ground plane (y = 0).
///
/// For each candidate and each axis two alignments are considered:
/// `candidate.min - moving.max` and `candidate.max - moving.min`. An alignment
/// is eligible only when the boxes overlap on the other two axes. Empty boxes
/// are ignored. Among eligible alignments with `|delta| < threshold` the
/// smallest wins; on exact ties the first one found is kept, with the ground
/// evaluated after every candidate.
pub fn find_snap(
    moving: &Aabb,
    candidates: &[(ObjectId, Aabb)],
    threshold: f32,
) -> Option<SnapCorrection> {
    if moving.is_empty() || threshold <= 0.0 {
        return None;
    }

    let mut best: Option<SnapCorrection> = None;
    let mut consider = |axis: Axis, delta: f32, target: &dyn Fn() -> SnapTarget| {
        let magnitude = delta.abs();
        if magnitude <= CONTACT_EPSILON || magnitude >= threshold {
            return;
        }
        if best.as_ref().is_none_or(|b| magnitude < b.delta.abs()) {
            best = Some(SnapCorrection {
                axis,
                delta,
                target: target(),
            });
        }
    };

    for (id, other) in candidates {
        if other.is_empty() {
            continue;
        }
        for axis in Axis::ALL {
            let [a, b] = axis.others();
            if !moving.overlaps_on(other, a) || !moving.overlaps_on(other, b) {
                continue;
            }
            let i = axis.index();
            let target = || SnapTarget::Object(id.clone());
            consider(axis, other.min[i] - moving.max[i], &target);
            consider(axis, other.max[i] - moving.min[i], &target);
        }
    }

    consider(Axis::Y, -moving.min.y, &|| SnapTarget::Ground);

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(x: f32, y: f32, z: f32) -> Aabb {
        Aabb::new(Vec3::new(x, y, z), Vec3::new(x + 1.0, y + 1.0, z + 1.0))
    }

    fn cand(id: &str, aabb: Aabb) -> (ObjectId, Aabb) {
        (id.to_string(), aabb)
    }

    #[test]
    fn test_snaps_left_face_to_right_face() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let moving = unit_box_at(1.15, 0.0, 0.0);
        let c = find_snap(&moving, &[cand("a", a)], 0.2).unwrap();
        assert_eq!(c.axis, Axis::X);
        assert!((c.delta + 0.15).abs() < 1e-6);
        assert_eq!(c.target, SnapTarget::Object("a".into()));

        let snapped = moving.translated(c.offset());
        assert!((snapped.min.x - a.max.x).abs() < 1e-6);
        assert_eq!(snapped.min.y, moving.min.y);
        assert_eq!(snapped.min.z, moving.min.z);
    }

    #[test]
    fn test_snaps_right_face_to_left_face() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let moving = unit_box_at(-1.1, 0.0, 0.0);
        let c = find_snap(&moving, &[cand("a", a)], 0.2).unwrap();
        assert!((c.delta - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_outside_threshold_is_noop() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let moving = unit_box_at(1.5, 0.0, 0.0);
        assert!(find_snap(&moving, &[cand("a", a)], 0.2).is_none());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let moving = unit_box_at(1.25, 0.0, 0.0);
        assert!(find_snap(&moving, &[cand("a", a)], 0.25).is_none());
    }

    #[test]
    fn test_requires_overlap_on_other_axes() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        // Close on X but beside A on Z
        let moving = unit_box_at(1.1, 0.0, 2.0);
        assert!(find_snap(&moving, &[cand("a", a)], 0.2).is_none());
    }

    #[test]
    fn test_edge_contact_does_not_count_as_overlap() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        // Touching A's Z face exactly, near on X
        let moving = unit_box_at(1.1, 0.0, 1.0);
        assert!(find_snap(&moving, &[cand("a", a)], 0.2).is_none());
    }

    #[test]
    fn test_ground_snap() {
        let moving = unit_box_at(5.0, 0.1, 5.0);
        let c = find_snap(&moving, &[], 0.2).unwrap();
        assert_eq!(c.target, SnapTarget::Ground);
        assert_eq!(c.axis, Axis::Y);
        assert!((moving.translated(c.offset()).min.y).abs() < 1e-6);
    }

    #[test]
    fn test_ground_snap_from_below() {
        let moving = unit_box_at(0.0, -0.05, 0.0);
        let c = find_snap(&moving, &[], 0.2).unwrap();
        assert!((c.delta - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_resting_on_ground_does_not_block_object_snap() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let moving = unit_box_at(1.15, 0.0, 0.0);
        let c = find_snap(&moving, &[cand("a", a)], 0.2).unwrap();
        assert_eq!(c.axis, Axis::X);
    }

    #[test]
    fn test_smallest_delta_wins() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        // Gap of 0.15 on X, floating 0.1 above ground
        let moving = unit_box_at(1.15, 0.1, 0.0);
        let c = find_snap(&moving, &[cand("a", a)], 0.2).unwrap();
        assert_eq!(c.target, SnapTarget::Ground);

        let moving = unit_box_at(1.05, 0.1, 0.0);
        let c = find_snap(&moving, &[cand("a", a)], 0.2).unwrap();
        assert_eq!(c.axis, Axis::X);
    }

    #[test]
    fn test_first_found_wins_on_tie() {
        let left = unit_box_at(-1.125, 0.0, 0.0);
        let right = unit_box_at(1.125, 0.0, 0.0);
        let moving = unit_box_at(0.0, 0.0, 0.0);
        let c = find_snap(&moving, &[cand("r", right), cand("l", left)], 0.2).unwrap();
        assert_eq!(c.target, SnapTarget::Object("r".into()));
    }

    #[test]
    fn test_empty_boxes_are_skipped() {
        let moving = unit_box_at(1.1, 0.0, 0.0);
        assert!(find_snap(&moving, &[cand("e", Aabb::EMPTY)], 0.2).is_none());
        assert!(find_snap(&Aabb::EMPTY, &[cand("a", unit_box_at(0.0, 0.0, 0.0))], 0.2).is_none());
    }

    #[test]
    fn test_idempotent() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let mut moving = unit_box_at(1.12, 0.0, 0.0);
        let c = find_snap(&moving, &[cand("a", a)], 0.2).unwrap();
        moving = moving.translated(c.offset());
        assert!(find_snap(&moving, &[cand("a", a)], 0.2).is_none());
    }
}
