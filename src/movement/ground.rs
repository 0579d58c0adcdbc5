//! Movement domain: ground probe geometry and contact data.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::platform::Pose;

/// A body found under the controller by the ground probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    pub body: Entity,
    /// Pose of the body at the time of the probe.
    pub pose: Pose,
}

/// Sphere used to test for supporting geometry, expressed in the
/// controller's local frame.
#[derive(Component, Debug, Clone)]
pub struct ProbeShape {
    pub offset: Vec3,
    pub radius: f32,
    collider: Collider,
}

impl ProbeShape {
    pub fn new(offset: Vec3, radius: f32) -> Self {
        Self {
            offset,
            radius,
            collider: Collider::sphere(radius),
        }
    }

    /// Probe for an upright capsule: a sphere slightly wider than the capsule,
    /// sunk below its bottom cap by the skin width plus the ground tolerance.
    pub fn for_capsule(radius: f32, height: f32, skin_width: f32, tolerance: f32) -> Self {
        let offset = Vec3::Y * (height * -0.5 + radius - skin_width - tolerance);
        Self::new(offset, radius + skin_width)
    }

    /// World-space centre of the probe for a controller at `position`
    /// oriented by `rotation`.
    pub fn center(&self, position: Vec3, rotation: Quat) -> Vec3 {
        position + rotation * self.offset
    }

    pub fn collider(&self) -> &Collider {
        &self.collider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capsule_probe_sits_below_feet() {
        let probe = ProbeShape::for_capsule(0.5, 2.0, 0.08, 0.2);
        assert!((probe.offset.y - (-1.0 + 0.5 - 0.08 - 0.2)).abs() < 1e-6);
        assert_eq!(probe.offset.x, 0.0);
        assert_eq!(probe.offset.z, 0.0);
        assert!((probe.radius - 0.58).abs() < 1e-6);
    }

    #[test]
    fn probe_follows_controller_orientation() {
        let probe = ProbeShape::new(Vec3::new(0.0, -1.0, 0.0), 0.5);
        let upright = probe.center(Vec3::new(1.0, 5.0, 0.0), Quat::IDENTITY);
        assert_eq!(upright, Vec3::new(1.0, 4.0, 0.0));

        let flipped = probe.center(Vec3::ZERO, Quat::from_rotation_x(std::f32::consts::PI));
        assert!((flipped - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
    }
}
