//! Core domain: session-wide resources.

use bevy::prelude::*;

/// The one controller driven by player input and targeted by
/// [`ControllerCommand`](crate::core::ControllerCommand)s.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActiveController(Option<Entity>);

impl ActiveController {
    pub fn get(&self) -> Option<Entity> {
        self.0
    }

    pub fn is(&self, entity: Entity) -> bool {
        self.0 == Some(entity)
    }

    /// Register `entity` as the active controller. Refused while another
    /// controller holds the slot; re-claiming by the holder succeeds.
    pub fn claim(&mut self, entity: Entity) -> bool {
        match self.0 {
            Some(current) if current != entity => false,
            _ => {
                self.0 = Some(entity);
                true
            }
        }
    }

    /// Free the slot if `entity` holds it.
    pub fn release(&mut self, entity: Entity) -> bool {
        if self.0 == Some(entity) {
            self.0 = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_refused() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();

        let mut active = ActiveController::default();
        assert!(active.claim(first));
        assert!(!active.claim(second));
        assert!(active.claim(first));
        assert_eq!(active.get(), Some(first));
    }

    #[test]
    fn release_only_by_holder() {
        let mut world = World::new();
        let first = world.spawn_empty().id();
        let second = world.spawn_empty().id();

        let mut active = ActiveController::default();
        active.claim(first);
        assert!(!active.release(second));
        assert!(active.is(first));
        assert!(active.release(first));
        assert_eq!(active.get(), None);
        assert!(active.claim(second));
    }
}
