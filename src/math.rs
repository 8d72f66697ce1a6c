//! Euler-angle helpers for the craft control law.
//!
//! The controllers reason about orientation in degrees, one angle per world
//! axis, and only convert to quaternions at the physics-body boundary.
//! [`Rotator`] is that degree-space representation; the free functions
//! implement the normalization and clamping rules shared by the steering
//! controller and the post-tick safety limiter.
//!
//! Axis conventions: right-handed, Y-up. The craft lives in the X-Y plane
//! with its forward axis on +Z, so the player-steered tilt is `roll` (about
//! +Z) and canonical down is -Y.

use glam::{EulerRot, Quat};

/// Rotation expressed as degrees about each world axis.
///
/// `pitch` rotates about X, `yaw` about Y, `roll` about Z. Conversion to and
/// from [`Quat`] applies the angles in yaw, pitch, roll order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub const IDENTITY: Rotator = Rotator {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Rotation about the craft's forward axis only.
    pub fn from_roll(roll: f32) -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            roll,
        }
    }

    /// All three angles mapped into `(-180, 180]`.
    pub fn normalized(self) -> Self {
        Self {
            pitch: normalize_axis(self.pitch),
            yaw: normalize_axis(self.yaw),
            roll: normalize_axis(self.roll),
        }
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    pub fn from_quat(q: Quat) -> Self {
        let (yaw, pitch, roll) = q.to_euler(EulerRot::YXZ);
        Self {
            pitch: pitch.to_degrees(),
            yaw: yaw.to_degrees(),
            roll: roll.to_degrees(),
        }
    }
}

/// Map an angle in degrees into `(-180, 180]`.
pub fn normalize_axis(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Normalize `deg` into `(-180, 180]`, then limit it to `[min_deg, max_deg]`.
///
/// The bounds are taken as given; see [`clamp_each_axis`] for the variant that
/// sanitizes them first.
pub fn clamp_angle(deg: f32, min_deg: f32, max_deg: f32) -> f32 {
    let angle = normalize_axis(deg);
    if angle < min_deg {
        min_deg
    } else if angle > max_deg {
        max_deg
    } else {
        angle
    }
}

/// Clamp each axis of `rot` independently into a symmetric-capable range.
///
/// `min_deg` is limited to `[-360, 360]` and `max_deg` to `[min_deg, 360]`
/// before use, so a caller that passes its bounds swapped gets a degenerate
/// exact-value clamp instead of a panic.
pub fn clamp_each_axis(rot: Rotator, min_deg: f32, max_deg: f32) -> Rotator {
    let min = min_deg.clamp(-360.0, 360.0);
    let max = max_deg.clamp(min, 360.0);
    Rotator {
        pitch: clamp_angle(rot.pitch, min, max),
        yaw: clamp_angle(rot.yaw, min, max),
        roll: clamp_angle(rot.roll, min, max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== NORMALIZE AXIS TESTS ====================

    #[test]
    fn test_normalize_axis_in_range_unchanged() {
        assert!(approx_eq(normalize_axis(45.0), 45.0));
        assert!(approx_eq(normalize_axis(-90.0), -90.0));
        assert!(approx_eq(normalize_axis(0.0), 0.0));
    }

    #[test]
    fn test_normalize_axis_wraps_over_180() {
        assert!(approx_eq(normalize_axis(190.0), -170.0));
        assert!(approx_eq(normalize_axis(270.0), -90.0));
        assert!(approx_eq(normalize_axis(360.0), 0.0));
        assert!(approx_eq(normalize_axis(540.0), 180.0));
    }

    #[test]
    fn test_normalize_axis_wraps_negative() {
        assert!(approx_eq(normalize_axis(-190.0), 170.0));
        assert!(approx_eq(normalize_axis(-360.0), 0.0));
        assert!(approx_eq(normalize_axis(-540.0), 180.0));
    }

    #[test]
    fn test_normalize_axis_half_turn_stays_positive() {
        assert!(approx_eq(normalize_axis(180.0), 180.0));
        assert!(approx_eq(normalize_axis(-180.0), 180.0));
    }

    // ==================== CLAMP ANGLE TESTS ====================

    #[test]
    fn test_clamp_angle_inside_range() {
        assert!(approx_eq(clamp_angle(30.0, -45.0, 45.0), 30.0));
    }

    #[test]
    fn test_clamp_angle_limits() {
        assert!(approx_eq(clamp_angle(60.0, -45.0, 45.0), 45.0));
        assert!(approx_eq(clamp_angle(-60.0, -45.0, 45.0), -45.0));
    }

    #[test]
    fn test_clamp_angle_normalizes_first() {
        // 350 degrees normalizes to -10 and is inside the range.
        assert!(approx_eq(clamp_angle(350.0, -45.0, 45.0), -10.0));
    }

    // ==================== CLAMP EACH AXIS TESTS ====================

    #[test]
    fn test_clamp_each_axis_limits_all_axes() {
        let rot = Rotator::new(100.0, -100.0, 10.0);
        let clamped = clamp_each_axis(rot, -45.0, 45.0);
        assert!(approx_eq(clamped.pitch, 45.0));
        assert!(approx_eq(clamped.yaw, -45.0));
        assert!(approx_eq(clamped.roll, 10.0));
    }

    #[test]
    fn test_clamp_each_axis_fixes_swapped_bounds() {
        // min=10 > max=5: max is lifted to min, producing an exact-value clamp.
        let rot = Rotator::new(0.0, 50.0, -50.0);
        let clamped = clamp_each_axis(rot, 10.0, 5.0);
        assert!(approx_eq(clamped.pitch, 10.0));
        assert!(approx_eq(clamped.yaw, 10.0));
        assert!(approx_eq(clamped.roll, 10.0));
    }

    #[test]
    fn test_clamp_each_axis_sanitizes_out_of_range_bounds() {
        let rot = Rotator::new(-400.0, 0.0, 400.0);
        let clamped = clamp_each_axis(rot, -720.0, 720.0);
        // Bounds collapse to [-360, 360]; angles are normalized first.
        assert!(approx_eq(clamped.pitch, -40.0));
        assert!(approx_eq(clamped.roll, 40.0));
    }

    // ==================== ROTATOR / QUAT TESTS ====================

    // Degree -> f32 radian -> degree roundtrips lose a little precision.
    const QUAT_EPSILON: f32 = 1e-3;

    #[test]
    fn test_rotator_roll_quat_roundtrip() {
        for roll in [-170.0f32, -90.0, -1.5, 0.0, 30.0, 90.0, 179.0] {
            let q = Rotator::from_roll(roll).to_quat();
            let back = Rotator::from_quat(q);
            assert!(
                (back.roll - roll).abs() < QUAT_EPSILON,
                "roll {} -> {}",
                roll,
                back.roll
            );
            assert!(back.pitch.abs() < QUAT_EPSILON);
            assert!(back.yaw.abs() < QUAT_EPSILON);
        }
    }

    #[test]
    fn test_rotator_roll_quats_compose_additively() {
        let a = Rotator::from_roll(20.0).to_quat();
        let b = Rotator::from_roll(25.0).to_quat();
        let back = Rotator::from_quat(a * b);
        assert!((back.roll - 45.0).abs() < QUAT_EPSILON);
    }

    #[test]
    fn test_rotator_normalized() {
        let rot = Rotator::new(190.0, -270.0, 540.0).normalized();
        assert!(approx_eq(rot.pitch, -170.0));
        assert!(approx_eq(rot.yaw, 90.0));
        assert!(approx_eq(rot.roll, 180.0));
    }
}
