use std::sync::Arc;

use parking_lot::RwLock;
use turfbook_core::settings::SettingsProvider;

use super::{InvalidPlatformSettings, PlatformSettings};

/// Platform settings that are loaded at startup and may be
/// replaced at runtime, e.g. after the configuration file changed.
#[derive(Debug, Clone, Default)]
pub struct SharedSettings(Arc<RwLock<PlatformSettings>>);

impl SharedSettings {
    pub fn new(settings: PlatformSettings) -> Result<Self, InvalidPlatformSettings> {
        settings.validate()?;
        Ok(Self(Arc::new(RwLock::new(settings))))
    }

    pub fn current(&self) -> PlatformSettings {
        self.0.read().clone()
    }

    /// Replaces the current settings if the new settings are valid.
    pub fn replace(&self, settings: PlatformSettings) -> Result<(), InvalidPlatformSettings> {
        settings.validate()?;
        info!("Replacing platform settings: {settings:?}");
        *self.0.write() = settings;
        Ok(())
    }
}

impl SettingsProvider for SharedSettings {
    fn platform_settings(&self) -> PlatformSettings {
        self.current()
    }
}
