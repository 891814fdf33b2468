//! Persisted audio settings: music and effects volume.
//!
//! Stored as pretty JSON in the platform config directory. A missing or
//! unreadable file falls back to the defaults.

use crate::core::constants::{DEFAULT_MUSIC_VOLUME, DEFAULT_SFX_VOLUME, SETTINGS_FILE_NAME};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    music_volume: f32,
    sfx_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_volume: DEFAULT_MUSIC_VOLUME,
            sfx_volume: DEFAULT_SFX_VOLUME,
        }
    }
}

fn clamp_volume(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl AudioSettings {
    pub fn new(music_volume: f32, sfx_volume: f32) -> Self {
        Self {
            music_volume: clamp_volume(music_volume),
            sfx_volume: clamp_volume(sfx_volume),
        }
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    pub fn sfx_volume(&self) -> f32 {
        self.sfx_volume
    }

    pub fn set_music_volume(&mut self, value: f32) {
        self.music_volume = clamp_volume(value);
    }

    pub fn set_sfx_volume(&mut self, value: f32) {
        self.sfx_volume = clamp_volume(value);
    }

    /// Re-clamps values that came from a hand-edited file.
    fn sanitized(self) -> Self {
        Self::new(self.music_volume, self.sfx_volume)
    }
}

/// Loads and saves [`AudioSettings`] at a fixed path.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Uses the platform config directory, creating it if needed.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "numbers-wrath").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            path: config_dir.join(SETTINGS_FILE_NAME),
        })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> io::Result<AudioSettings> {
        let json = fs::read_to_string(&self.path)?;
        let settings: AudioSettings = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(settings.sanitized())
    }

    pub fn load_or_default(&self) -> AudioSettings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "ignoring unreadable settings"
                    );
                }
                AudioSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &AudioSettings) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}
