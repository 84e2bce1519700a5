use serde::{Deserialize, Serialize};

/// Theme mode preference. `System` defers to the platform's current
/// light/dark preference at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Collapse to a concrete light/dark scheme, using the given platform
    /// scheme when the mode is `System`.
    pub fn resolve(self, system: SystemScheme) -> SystemScheme {
        match self {
            ThemeMode::Light => SystemScheme::Light,
            ThemeMode::Dark => SystemScheme::Dark,
            ThemeMode::System => system,
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!(
                "invalid theme mode '{}' (expected light, dark, or system)",
                other
            )),
        }
    }
}

/// Theme accent color preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Default,
    Purple,
    Blue,
}

impl ThemeColor {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeColor::Default => "default",
            ThemeColor::Purple => "purple",
            ThemeColor::Blue => "blue",
        }
    }
}

impl std::str::FromStr for ThemeColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(ThemeColor::Default),
            "purple" => Ok(ThemeColor::Purple),
            "blue" => Ok(ThemeColor::Blue),
            other => Err(format!(
                "invalid theme color '{}' (expected default, purple, or blue)",
                other
            )),
        }
    }
}

/// A concrete light/dark scheme, after `system` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemScheme {
    Light,
    Dark,
}

impl SystemScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            SystemScheme::Light => "light",
            SystemScheme::Dark => "dark",
        }
    }
}

/// The class label handed to the rendering layer: the resolved mode alone
/// for the default color, `"{mode}-{color}"` otherwise.
pub fn theme_label(resolved: SystemScheme, color: ThemeColor) -> String {
    match color {
        ThemeColor::Default => resolved.as_str().to_string(),
        color => format!("{}-{}", resolved.as_str(), color.as_str()),
    }
}

/// Probe the platform for its current light/dark preference.
///
/// Terminals advertising their palette set `COLORFGBG` (e.g. `"15;0"`); a
/// background index of 0-6 or 8 means a dark background. Absent or
/// unparseable values resolve to light. Probed on every call, never cached.
pub fn detect_system_scheme() -> SystemScheme {
    match std::env::var("COLORFGBG") {
        Ok(value) => scheme_from_colorfgbg(&value),
        Err(_) => SystemScheme::Light,
    }
}

fn scheme_from_colorfgbg(value: &str) -> SystemScheme {
    let background = value.rsplit(';').next().and_then(|s| s.parse::<u8>().ok());
    match background {
        Some(n) if matches!(n, 0..=6 | 8) => SystemScheme::Dark,
        _ => SystemScheme::Light,
    }
}
