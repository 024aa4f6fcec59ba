//! Factory settings
//!
//! `register_all` is called once during startup, before any command is
//! dispatched. A name registered twice is an authoring error in this
//! file and surfaces as `SettingError::DuplicateRegistration`.

use crate::settings::{Setting, SettingError, SettingsRegistry};

/// Registers every factory setting into `registry`.
pub fn register_all(registry: &mut SettingsRegistry) -> Result<(), SettingError> {
    let settings = [
        // General
        Setting::bool("shuffle", false),
        Setting::bool("startup_library", true),
        Setting::string("style", "default"),
        Setting::int("history_limit", 100),
        // Image
        Setting::float("image.overzoom", 1.0),
        // Library
        Setting::float("library.width", 0.3),
        Setting::bool("library.show_hidden", false),
        // Thumbnail
        Setting::thumbnail_size("thumbnail.size", 128)?,
        // Slideshow
        Setting::float("slideshow.delay", 2.0),
        Setting::string("slideshow.indicator", "slideshow:"),
        // Statusbar
        Setting::bool("statusbar.show", true),
        Setting::int("statusbar.message_timeout", 5000),
        // Completion and search
        Setting::bool("completion.fuzzy", false),
        Setting::bool("search.ignore_case", true),
        Setting::bool("search.incremental", true),
    ];

    for setting in settings {
        registry.register(setting)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{SettingKind, Value};

    #[test]
    fn test_register_all_populates_registry() {
        let mut registry = SettingsRegistry::new();
        register_all(&mut registry).unwrap();

        assert_eq!(registry.len(), 15);
        assert!(registry.iter().all(Setting::is_default));
    }

    #[test]
    fn test_register_all_twice_is_fatal() {
        let mut registry = SettingsRegistry::new();
        register_all(&mut registry).unwrap();

        let result = register_all(&mut registry);
        assert!(matches!(result, Err(SettingError::DuplicateRegistration(_))));
    }

    #[test]
    fn test_factory_thumbnail_size() {
        let mut registry = SettingsRegistry::new();
        register_all(&mut registry).unwrap();

        let setting = registry.get_setting("thumbnail.size").unwrap();
        assert_eq!(setting.kind(), SettingKind::ThumbnailSize);
        assert_eq!(setting.value(), &Value::ThumbnailSize(128));
    }
}
