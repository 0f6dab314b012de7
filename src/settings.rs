//! Player settings and preferences
//!
//! Persisted separately from the save record, as JSON under
//! [`SETTINGS_KEY`](crate::persistence::SETTINGS_KEY).

use serde::{Deserialize, Serialize};

use crate::persistence::{SETTINGS_KEY, Storage, StorageError};
use crate::sim::ActorVariant;

/// Player settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preferred actor colour
    pub variant: ActorVariant,

    // === Audio ===
    /// Sound cues on/off
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    // === Debug ===
    /// Outline collision boxes
    pub show_collision_boxes: bool,
    /// Speed/gap/interval readout
    pub show_difficulty_info: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: ActorVariant::Yellow,

            // Audio
            sound_enabled: true,
            master_volume: 0.8,

            // Debug overlays off
            show_collision_boxes: false,
            show_difficulty_info: false,
        }
    }
}

impl Settings {
    /// Volume actually sent to the audio sink
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Load settings, `None` if nothing was stored yet
    pub fn load(storage: &dyn Storage) -> Result<Option<Self>, StorageError> {
        let Some(json) = storage.get(SETTINGS_KEY)? else {
            return Ok(None);
        };
        let mut settings: Settings = serde_json::from_str(&json)?;
        settings.master_volume = settings.master_volume.clamp(0.0, 1.0);
        log::info!("Loaded settings");
        Ok(Some(settings))
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(storage: &dyn Storage) -> Self {
        match Self::load(storage) {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not load settings ({e}); using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)?;
        storage.set(SETTINGS_KEY, &json)?;
        log::debug!("Settings saved");
        Ok(())
    }
}
