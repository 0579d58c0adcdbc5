//! Movement domain: timed extra-force effects.
//!
//! A controller holds at most one running impulse. The scheduler is ticked
//! once per frame after the controller has moved and rewrites the extra
//! velocity from the elapsed fraction of the task, optionally remapped by an
//! easing curve.

use bevy::math::curve::{Curve, EaseFunction};
use bevy::prelude::*;

use crate::movement::state::MovementState;

/// A running extra-force effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseTask {
    pub force: Vec3,
    pub duration: f32,
    pub curve: Option<EaseFunction>,
    pub suspends_gravity: bool,
    pub elapsed: f32,
}

impl ImpulseTask {
    /// Completed fraction of the task in [0, 1].
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Extra velocity at the current elapsed time.
    pub fn velocity(&self) -> Vec3 {
        let t = self.progress();
        let eased = match self.curve {
            Some(curve) => curve.sample_clamped(t),
            None => t,
        };
        self.force * eased
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Outcome of an extra-force request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpulseRequest {
    /// The force was written as a permanent extra velocity.
    Applied,
    /// A timed task was started.
    Scheduled,
    /// Another task is running; the request was dropped.
    Busy,
}

/// Single-slot scheduler for timed extra forces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImpulseScheduler {
    active: Option<ImpulseTask>,
}

impl ImpulseScheduler {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ImpulseTask> {
        self.active.as_ref()
    }

    /// Apply or schedule a force. A non-positive duration writes the force as
    /// a permanent extra velocity that the caller must reset.
    pub fn request(
        &mut self,
        state: &mut MovementState,
        force: Vec3,
        suspend_gravity: bool,
        duration: f32,
        curve: Option<EaseFunction>,
    ) -> ImpulseRequest {
        if self.active.is_some() {
            return ImpulseRequest::Busy;
        }

        if duration <= 0.0 {
            state.extra_velocity = force;
            return ImpulseRequest::Applied;
        }

        let task = ImpulseTask {
            force,
            duration,
            curve,
            suspends_gravity: suspend_gravity,
            elapsed: 0.0,
        };
        if suspend_gravity {
            state.gravity_suspended = true;
        }
        state.extra_velocity = task.velocity();
        self.active = Some(task);
        ImpulseRequest::Scheduled
    }

    /// Advance the running task. Returns true on the frame it completes.
    pub fn tick(&mut self, state: &mut MovementState, delta_seconds: f32) -> bool {
        let Some(task) = self.active.as_mut() else {
            return false;
        };

        task.elapsed += delta_seconds;
        if task.is_finished() {
            self.finish(state);
            return true;
        }

        state.extra_velocity = task.velocity();
        false
    }

    /// Stop the running task, clearing its extra velocity and lifting any
    /// gravity suspension it holds.
    pub fn cancel(&mut self, state: &mut MovementState) {
        if self.active.is_some() {
            self.finish(state);
        }
    }

    fn finish(&mut self, state: &mut MovementState) {
        if let Some(task) = self.active.take() {
            if task.suspends_gravity {
                state.gravity_suspended = false;
            }
            state.extra_velocity = Vec3::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRING: Vec3 = Vec3::new(0.0, 10.0, 0.0);

    #[test]
    fn non_positive_duration_sets_permanent_velocity() {
        let mut scheduler = ImpulseScheduler::default();
        let mut state = MovementState::default();

        let outcome = scheduler.request(&mut state, SPRING, true, 0.0, None);
        assert_eq!(outcome, ImpulseRequest::Applied);
        assert_eq!(state.extra_velocity, SPRING);
        assert!(!state.gravity_suspended);
        assert!(!scheduler.is_active());

        scheduler.tick(&mut state, 1.0);
        assert_eq!(state.extra_velocity, SPRING);
    }

    #[test]
    fn linear_task_ramps_then_resets() {
        let mut scheduler = ImpulseScheduler::default();
        let mut state = MovementState::default();

        scheduler.request(&mut state, SPRING, true, 0.4, Some(EaseFunction::Linear));
        assert!(state.gravity_suspended);
        assert_eq!(state.extra_velocity, Vec3::ZERO);

        assert!(!scheduler.tick(&mut state, 0.2));
        assert!((state.extra_velocity - Vec3::new(0.0, 5.0, 0.0)).length() < 1e-4);
        assert!(state.gravity_suspended);

        assert!(scheduler.tick(&mut state, 0.2));
        assert_eq!(state.extra_velocity, Vec3::ZERO);
        assert!(!state.gravity_suspended);
        assert!(!scheduler.is_active());
    }

    #[test]
    fn missing_curve_is_identity() {
        let mut scheduler = ImpulseScheduler::default();
        let mut state = MovementState::default();

        scheduler.request(&mut state, Vec3::X * 8.0, false, 1.0, None);
        scheduler.tick(&mut state, 0.25);
        assert!((state.extra_velocity - Vec3::X * 2.0).length() < 1e-5);
        assert!(!state.gravity_suspended);
    }

    #[test]
    fn second_request_is_dropped() {
        let mut scheduler = ImpulseScheduler::default();
        let mut state = MovementState::default();

        scheduler.request(&mut state, SPRING, false, 1.0, None);
        scheduler.tick(&mut state, 0.5);
        let before = (scheduler.clone(), state.clone());

        let outcome = scheduler.request(&mut state, Vec3::X * 100.0, true, 3.0, None);
        assert_eq!(outcome, ImpulseRequest::Busy);
        assert_eq!((scheduler, state), before);
    }

    #[test]
    fn cancel_lifts_suspension() {
        let mut scheduler = ImpulseScheduler::default();
        let mut state = MovementState::default();

        scheduler.request(&mut state, SPRING, true, 1.0, Some(EaseFunction::SmoothStep));
        scheduler.tick(&mut state, 0.5);
        scheduler.cancel(&mut state);

        assert!(!scheduler.is_active());
        assert!(!state.gravity_suspended);
        assert_eq!(state.extra_velocity, Vec3::ZERO);
    }

    #[test]
    fn eased_curve_remaps_progress() {
        let mut scheduler = ImpulseScheduler::default();
        let mut state = MovementState::default();

        scheduler.request(&mut state, SPRING, false, 1.0, Some(EaseFunction::QuadraticIn));
        scheduler.tick(&mut state, 0.5);
        assert!((state.extra_velocity.y - 2.5).abs() < 1e-4);
    }
}
