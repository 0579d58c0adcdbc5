//! Movement domain: carrying a controller along with the body it stands on.
//!
//! The anchor remembers the supporting body's pose from the previous frame.
//! Comparing it with the current pose yields the translation and rotation the
//! platform underwent, which is replayed on the controller before its own
//! input-driven motion so both land in a single move.

use bevy::prelude::*;

/// Position and rotation snapshot of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<&Transform> for Pose {
    fn from(transform: &Transform) -> Self {
        Self::new(transform.translation, transform.rotation)
    }
}

/// Motion a platform imparts on its rider over one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlatformCarry {
    /// Translation to add to the rider's displacement.
    pub offset: Vec3,
    /// Rotation about world up to apply to the rider's orientation, in radians.
    pub yaw: f32,
}

/// Last known pose of the supporting body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlatformAnchor {
    contact: Pose,
}

impl PlatformAnchor {
    /// Start tracking from `pose`; the next carry against the same pose is zero.
    pub fn capture(pose: Pose) -> Self {
        Self { contact: pose }
    }

    /// Motion the platform underwent since the anchored pose, as seen by a
    /// rider at `rider_position`. The rotational part pivots about the
    /// platform's origin, not the rider.
    pub fn carry(&self, current: Pose, rider_position: Vec3) -> PlatformCarry {
        let mut offset = current.position - self.contact.position;
        let rotation_delta = current.rotation * self.contact.rotation.inverse();

        let local = rider_position - current.position;
        offset += rotation_delta * local - local;

        let (yaw, _, _) = rotation_delta.to_euler(EulerRot::YXZ);
        PlatformCarry { offset, yaw }
    }

    /// Linear velocity of the platform when the rider leaves it.
    /// Returns `None` for a zero-length frame.
    pub fn detach_velocity(&self, current: Pose, delta_seconds: f32) -> Option<Vec3> {
        (delta_seconds > 0.0).then(|| (current.position - self.contact.position) / delta_seconds)
    }

    /// Move the anchor to the platform's current pose.
    pub fn advance(&mut self, current: Pose) {
        self.contact = current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn captured_pose_yields_no_carry() {
        let pose = Pose::new(Vec3::new(3.0, 1.0, -2.0), Quat::from_rotation_y(0.7));
        let anchor = PlatformAnchor::capture(pose);
        let carry = anchor.carry(pose, Vec3::new(4.0, 2.0, -2.0));
        assert!(carry.offset.length() < 1e-6);
        assert!(carry.yaw.abs() < 1e-6);
    }

    #[test]
    fn translation_is_carried_exactly() {
        let anchor = PlatformAnchor::capture(Pose::new(Vec3::ZERO, Quat::IDENTITY));
        let current = Pose::new(Vec3::new(0.5, 0.0, -0.25), Quat::IDENTITY);
        let carry = anchor.carry(current, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(carry.offset, Vec3::new(0.5, 0.0, -0.25));
        assert_eq!(carry.yaw, 0.0);
    }

    #[test]
    fn rotation_pivots_about_platform_origin() {
        let anchor = PlatformAnchor::capture(Pose::IDENTITY);
        let current = Pose::new(Vec3::ZERO, Quat::from_rotation_y(FRAC_PI_2));
        // Rider standing 2m along +X from the platform centre.
        let carry = anchor.carry(current, Vec3::new(2.0, 1.0, 0.0));
        // A quarter turn about +Y takes +X to -Z.
        let expected = Vec3::new(0.0, 1.0, -2.0) - Vec3::new(2.0, 1.0, 0.0);
        assert!((carry.offset - expected).length() < 1e-5);
        assert!((carry.yaw - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn rider_at_pivot_only_turns() {
        let anchor = PlatformAnchor::capture(Pose::IDENTITY);
        let current = Pose::new(Vec3::ZERO, Quat::from_rotation_y(0.3));
        let carry = anchor.carry(current, Vec3::ZERO);
        assert!(carry.offset.length() < 1e-6);
        assert!((carry.yaw - 0.3).abs() < 1e-5);
    }

    #[test]
    fn detach_velocity_over_frame() {
        let anchor = PlatformAnchor::capture(Pose::IDENTITY);
        let current = Pose::new(Vec3::new(0.1, 0.0, 0.0), Quat::IDENTITY);
        let velocity = anchor.detach_velocity(current, 0.05).unwrap();
        assert!((velocity - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn detach_velocity_skips_zero_frame() {
        let anchor = PlatformAnchor::capture(Pose::IDENTITY);
        assert!(anchor.detach_velocity(Pose::IDENTITY, 0.0).is_none());
    }
}
