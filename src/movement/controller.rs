//! Movement domain: the controller facade.
//!
//! [`PlayerController`] owns the movement state, the impulse scheduler, the
//! platform anchor and the stun timer, and runs them in a fixed order once per
//! frame:
//!
//! 1. ground contact (from the probe result)
//! 2. horizontal and vertical velocity
//! 3. platform carry, then the controller's own displacement
//! 4. state reclassification
//! 5. timers (impulse, stun recovery)
//!
//! The tick is pure: it takes the probe result and returns the motion to
//! apply, so it can be driven without a physics world.

use bevy::math::curve::EaseFunction;
use bevy::prelude::*;

use crate::movement::ground::GroundHit;
use crate::movement::impulse::{ImpulseRequest, ImpulseScheduler};
use crate::movement::platform::{PlatformAnchor, PlatformCarry, Pose};
use crate::movement::resources::CameraBasis;
use crate::movement::settings::{FACING_SPEED_SQ, MovementSettings};
use crate::movement::state::{ControllerSnapshot, MovementState, MovementStatus};
use crate::movement::velocity;

/// Everything the controller consumes in one frame.
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub camera: Option<CameraBasis>,
    /// Controller position at the start of the frame.
    pub position: Vec3,
    pub ground: Option<GroundHit>,
    /// Current pose of the body tracked last frame, if it still exists.
    pub tracked_pose: Option<Pose>,
    pub delta_seconds: f32,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            axis: Vec2::ZERO,
            jump_pressed: false,
            camera: None,
            position: Vec3::ZERO,
            ground: None,
            tracked_pose: None,
            delta_seconds: 0.0,
        }
    }
}

/// Motion requested by one frame of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutput {
    /// Motion inherited from the supporting platform.
    pub carry: PlatformCarry,
    /// The controller's own motion from its velocities.
    pub displacement: Vec3,
    /// Direction to turn toward, when moving fast enough.
    pub facing: Option<Vec3>,
}

impl TickOutput {
    /// Platform carry and own motion composed into one move.
    pub fn total(&self) -> Vec3 {
        self.carry.offset + self.displacement
    }
}

#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    settings: MovementSettings,
    state: MovementState,
    impulse: ImpulseScheduler,
    anchor: PlatformAnchor,
    platform_pose: Option<Pose>,
    stun_remaining: Option<f32>,
    jump_latched: bool,
    reported_status: MovementStatus,
}

impl PlayerController {
    pub fn new(settings: MovementSettings) -> Self {
        Self {
            settings,
            state: MovementState::default(),
            impulse: ImpulseScheduler::default(),
            anchor: PlatformAnchor::default(),
            platform_pose: None,
            stun_remaining: None,
            jump_latched: false,
            reported_status: MovementStatus::default(),
        }
    }

    pub fn settings(&self) -> &MovementSettings {
        &self.settings
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn status(&self) -> MovementStatus {
        self.state.status
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        self.state.snapshot()
    }

    pub fn impulse(&self) -> &ImpulseScheduler {
        &self.impulse
    }

    pub fn stun_remaining(&self) -> Option<f32> {
        self.stun_remaining
    }

    /// Run one frame.
    pub fn tick(&mut self, input: &TickInput) -> TickOutput {
        let dt = input.delta_seconds.max(0.0);

        if self.state.status == MovementStatus::Eliminated {
            return TickOutput::default();
        }

        self.latch_jump(input.jump_pressed);
        self.check_ground(input.ground, input.tracked_pose, dt);

        velocity::update_horizontal(
            &mut self.state,
            &self.settings,
            input.axis,
            input.camera.unwrap_or(CameraBasis::WORLD),
            dt,
        );
        velocity::update_vertical(&mut self.state, &self.settings, &mut self.jump_latched, dt);

        let carry = self.ride_platform(input.position);
        let displacement = velocity::displacement(&self.state, dt);
        let planar = self.state.planar_velocity();
        let facing = (planar.length_squared() > FACING_SPEED_SQ).then_some(planar);

        self.state.classify();

        if self.impulse.tick(&mut self.state, dt) {
            debug!("Extra force finished");
        }
        self.tick_stun(dt);

        TickOutput {
            carry,
            displacement,
            facing,
        }
    }

    /// Latch a jump press for this frame if the controller can jump.
    fn latch_jump(&mut self, pressed: bool) {
        self.jump_latched = pressed
            && self.state.grounded
            && !self.state.dead
            && self.state.status.allows_jump();
    }

    fn check_ground(&mut self, hit: Option<GroundHit>, tracked_pose: Option<Pose>, dt: f32) {
        self.state.grounded = hit.is_some();

        match hit {
            Some(hit) => {
                self.platform_pose = Some(hit.pose);
                if self.state.ground_body != Some(hit.body) {
                    debug!("Ground contact: {:?}", hit.body);
                    self.state.ground_body = Some(hit.body);
                    self.state.ground_velocity = Vec3::ZERO;
                    self.anchor = PlatformAnchor::capture(hit.pose);
                }
            }
            None => {
                if let (Some(body), Some(pose)) = (self.state.ground_body, tracked_pose) {
                    if let Some(velocity) = self.anchor.detach_velocity(pose, dt) {
                        debug!("Left {:?} with platform velocity {}", body, velocity);
                        self.state.ground_velocity = velocity;
                    }
                }
                self.state.ground_body = None;
                self.platform_pose = None;
            }
        }
    }

    fn ride_platform(&mut self, position: Vec3) -> PlatformCarry {
        let Some(pose) = self.platform_pose else {
            return PlatformCarry::default();
        };

        let carry = self.anchor.carry(pose, position);
        self.anchor.advance(pose);
        carry
    }

    fn tick_stun(&mut self, dt: f32) {
        let Some(remaining) = self.stun_remaining.as_mut() else {
            return;
        };

        *remaining -= dt;
        if *remaining <= 0.0 {
            self.stun_remaining = None;
            self.recover_from_stun();
        }
    }

    /// Apply or schedule an extra force. Dropped while eliminated or while
    /// another timed force is running.
    pub fn add_extra_force(
        &mut self,
        force: Vec3,
        suspend_gravity: bool,
        duration: f32,
        curve: Option<EaseFunction>,
    ) -> Option<ImpulseRequest> {
        if self.state.status == MovementStatus::Eliminated {
            debug!("Extra force ignored: controller eliminated");
            return None;
        }

        let outcome = self
            .impulse
            .request(&mut self.state, force, suspend_gravity, duration, curve);
        match outcome {
            ImpulseRequest::Busy => debug!("Extra force dropped: another one is running"),
            ImpulseRequest::Applied => debug!("Extra velocity set to {}", force),
            ImpulseRequest::Scheduled => {
                debug!("Extra force {} scheduled for {}s", force, duration)
            }
        }
        Some(outcome)
    }

    pub fn reset_extra_force(&mut self) {
        self.state.extra_velocity = Vec3::ZERO;
    }

    /// Stun for `duration` seconds, or until [`Self::recover_from_stun`] when
    /// the duration is not positive.
    pub fn stun(&mut self, duration: f32) {
        if self.state.status == MovementStatus::Eliminated {
            return;
        }

        self.state.status = MovementStatus::Stunned;
        self.state.halt();
        self.jump_latched = false;
        self.stun_remaining = (duration > 0.0).then_some(duration);
        debug!("Stunned for {:?}", self.stun_remaining);
    }

    pub fn recover_from_stun(&mut self) {
        if self.state.status == MovementStatus::Stunned {
            self.state.status = MovementStatus::Idle;
            self.stun_remaining = None;
            debug!("Recovered from stun");
        }
    }

    /// Terminal. Stops every motion source, including a running impulse and a
    /// pending stun recovery. Ground observation (`grounded`, `ground_body`)
    /// stops updating and keeps its value from this moment.
    pub fn eliminate(&mut self) {
        self.state.status = MovementStatus::Eliminated;
        self.state.halt();
        self.impulse.cancel(&mut self.state);
        self.state.extra_velocity = Vec3::ZERO;
        self.state.ground_velocity = Vec3::ZERO;
        self.stun_remaining = None;
        self.jump_latched = false;
        debug!("Eliminated");
    }

    pub fn pause(&mut self, paused: bool) {
        self.state.paused = paused;
    }

    /// Mark the controller dead. Input stops steering it until respawn.
    pub fn kill(&mut self) -> bool {
        if self.state.dead || self.state.status == MovementStatus::Eliminated {
            return false;
        }

        self.state.dead = true;
        self.state.halt();
        debug!("Killed");
        true
    }

    /// Bring a dead or live controller back to rest. Returns false when
    /// eliminated, in which case nothing changes.
    pub fn respawn(&mut self) -> bool {
        if self.state.status == MovementStatus::Eliminated {
            return false;
        }

        self.impulse.cancel(&mut self.state);
        self.state = MovementState {
            paused: self.state.paused,
            ..default()
        };
        self.anchor = PlatformAnchor::default();
        self.platform_pose = None;
        self.stun_remaining = None;
        self.jump_latched = false;
        debug!("Respawned");
        true
    }

    /// Status change since the last call, if any.
    pub fn take_transition(&mut self) -> Option<(MovementStatus, MovementStatus)> {
        let current = self.state.status;
        if current == self.reported_status {
            return None;
        }

        let previous = std::mem::replace(&mut self.reported_status, current);
        Some((previous, current))
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(MovementSettings::default())
    }
}

/// Orientation after applying the platform's yaw and turning toward the
/// direction of travel.
pub fn orient(
    rotation: Quat,
    output: &TickOutput,
    rotation_speed: f32,
    delta_seconds: f32,
) -> Quat {
    let mut rotation = Quat::from_rotation_y(output.carry.yaw) * rotation;

    if let Some(direction) = output.facing {
        let target = Transform::IDENTITY.looking_to(direction, Vec3::Y).rotation;
        let t = (rotation_speed * delta_seconds).clamp(0.0, 1.0);
        rotation = rotation.slerp(target, t);
    }

    rotation.normalize()
}
