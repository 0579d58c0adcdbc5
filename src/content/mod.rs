//! Content domain: data-driven player profile loaded from RON.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{BodyDef, MovementDef, PlayerProfile};
pub use loader::{ContentLoadError, load_player_profile, parse_single};
pub use validation::{ValidationError, validate_profile};

use bevy::prelude::*;
use std::path::Path;

/// Directory holding the RON content files.
pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Load and validate the player profile, falling back to defaults on any
/// failure so startup never aborts on bad content.
fn load_content(mut commands: Commands) {
    commands.insert_resource(resolve_profile(Path::new(CONTENT_DIR)));
}

pub(crate) fn resolve_profile(base_path: &Path) -> PlayerProfile {
    let profile = match load_player_profile(base_path) {
        Ok(profile) => profile,
        Err(e) => {
            warn!("{}; using default player profile", e);
            return PlayerProfile::default();
        }
    };

    let errors = validate_profile(&profile);
    if !errors.is_empty() {
        for error in &errors {
            error!("Invalid player profile: {}", error);
        }
        warn!(
            "{} validation error(s); using default player profile",
            errors.len()
        );
        return PlayerProfile::default();
    }

    info!("Loaded player profile from {}", base_path.display());
    profile
}
