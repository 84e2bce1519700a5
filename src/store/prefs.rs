use crate::io::kv::KvStore;
use crate::model::config::AppConfig;
use crate::model::theme::{
    detect_system_scheme, theme_label, SystemScheme, ThemeColor, ThemeMode,
};

/// Owns the theme preference pair. Choices persist under
/// `{storage_key}-mode` and `{storage_key}-color`; a missing or
/// unrecognized stored value falls back to the configured default.
#[derive(Debug)]
pub struct PreferenceStore {
    mode: ThemeMode,
    color: ThemeColor,
    storage_key: String,
    kv: KvStore,
}

impl PreferenceStore {
    pub fn load(config: &AppConfig, kv: KvStore) -> PreferenceStore {
        let storage_key = config.storage.theme_key.clone();
        let mode = read_pref(&kv, &format!("{}-mode", storage_key))
            .unwrap_or(config.theme.default_mode);
        let color = read_pref(&kv, &format!("{}-color", storage_key))
            .unwrap_or(config.theme.default_color);
        PreferenceStore {
            mode,
            color,
            storage_key,
            kv,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn color(&self) -> ThemeColor {
        self.color
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.persist("mode", mode.as_str());
    }

    pub fn set_color(&mut self, color: ThemeColor) {
        self.color = color;
        self.persist("color", color.as_str());
    }

    /// The class label for a given platform scheme.
    pub fn label(&self, system: SystemScheme) -> String {
        theme_label(self.mode.resolve(system), self.color)
    }

    /// The class label with the platform scheme probed now.
    pub fn current_label(&self) -> String {
        self.label(detect_system_scheme())
    }

    fn persist(&self, suffix: &str, value: &str) {
        let key = format!("{}-{}", self.storage_key, suffix);
        if let Err(e) = self.kv.set(&key, value) {
            log::warn!("failed to persist theme preference '{}': {}", key, e);
        }
    }
}

fn read_pref<T: std::str::FromStr>(kv: &KvStore, key: &str) -> Option<T> {
    let raw = kv.get(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("unrecognized value '{}' under key '{}'", raw, key);
            None
        }
    }
}
