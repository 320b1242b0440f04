use crate::entities::settings::PlatformSettings;

/// Read access to the current platform settings.
pub trait SettingsProvider {
    fn platform_settings(&self) -> PlatformSettings;
}

impl SettingsProvider for PlatformSettings {
    fn platform_settings(&self) -> PlatformSettings {
        self.clone()
    }
}
