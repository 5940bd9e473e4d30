use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub fn config_file() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".snap-engine.toml"))
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    snapping: SnapSettings,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct Config {
    pub snapping: SnapSettings,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct SnapSettings {
    #[serde(default = "yes")]
    pub enabled: bool,
    /// Distance from each screen edge to the dead zone, in points.
    #[serde(default)]
    pub margins: EdgeMargins,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            margins: EdgeMargins::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct EdgeMargins {
    #[serde(default = "default_margin")]
    pub top: f64,
    #[serde(default = "default_margin")]
    pub left: f64,
    #[serde(default = "default_margin")]
    pub bottom: f64,
    #[serde(default = "default_margin")]
    pub right: f64,
}

impl Default for EdgeMargins {
    fn default() -> Self {
        Self {
            top: default_margin(),
            left: default_margin(),
            bottom: default_margin(),
            right: default_margin(),
        }
    }
}

impl SnapSettings {
    pub fn validate(&self) -> Vec<String> { self.margins.validate() }

    pub fn auto_fix_values(&mut self) -> usize { self.margins.auto_fix_values() }
}

impl EdgeMargins {
    fn edges(&self) -> [(&'static str, f64); 4] {
        [("top", self.top), ("left", self.left), ("bottom", self.bottom), ("right", self.right)]
    }

    fn edges_mut(&mut self) -> [&mut f64; 4] {
        [&mut self.top, &mut self.left, &mut self.bottom, &mut self.right]
    }

    /// Validates margin values and returns a list of issues found.
    pub fn validate(&self) -> Vec<String> {
        self.edges()
            .into_iter()
            .filter(|&(_, value)| !is_valid_margin(value))
            .map(|(name, value)| {
                format!("snapping.margins.{name} must be a non-negative number, got {value}")
            })
            .collect()
    }

    /// Resets invalid margins to the default. Returns the number of fixes applied.
    pub fn auto_fix_values(&mut self) -> usize {
        let mut fixes = 0;
        for value in self.edges_mut() {
            if !is_valid_margin(*value) {
                *value = default_margin();
                fixes += 1;
            }
        }
        fixes
    }
}

fn is_valid_margin(value: f64) -> bool { value.is_finite() && value >= 0.0 }

fn yes() -> bool { true }

fn default_margin() -> f64 { 20.0 }

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Config> {
        let buf = std::fs::read_to_string(path)?;
        Self::parse(&buf)
    }

    pub fn default() -> Config {
        Self::parse(include_str!("../../snap.default.toml")).unwrap_or_else(|_| Config {
            snapping: SnapSettings::default(),
        })
    }

    /// Save the current config to a file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let config_file = ConfigFile { snapping: self.snapping.clone() };

        let toml_string = toml::to_string_pretty(&config_file)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, toml_string.as_bytes())?;

        Ok(())
    }

    /// Validates the entire configuration and returns a list of issues found.
    pub fn validate(&self) -> Vec<String> { self.snapping.validate() }

    /// Attempts to fix configuration values automatically.
    /// Returns the number of fixes applied.
    pub fn auto_fix_values(&mut self) -> usize { self.snapping.auto_fix_values() }

    pub fn parse(buf: &str) -> anyhow::Result<Config> {
        let c: ConfigFile = toml::from_str(buf)?;
        Ok(Config { snapping: c.snapping })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_parses() {
        let parsed = Config::parse(include_str!("../../snap.default.toml")).unwrap();
        assert_eq!(parsed, Config::default());
        assert!(parsed.snapping.enabled);
        assert_eq!(parsed.snapping.margins, EdgeMargins::default());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.snapping, SnapSettings::default());

        let config = Config::parse(
            r#"
            [snapping.margins]
            top = 5.0
            "#,
        )
        .unwrap();
        assert_eq!(config.snapping.margins.top, 5.0);
        assert_eq!(config.snapping.margins.left, 20.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Config::parse("[snapping]\nsensitivity = 3").is_err());
        assert!(Config::parse("[radial_menu]\nenabled = true").is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_empty());

        config.snapping.margins.left = -4.0;
        config.snapping.margins.bottom = f64::NAN;
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("snapping.margins.left must be a non-negative number"));
        assert!(issues[1].contains("snapping.margins.bottom"));

        let fixes = config.auto_fix_values();
        assert_eq!(fixes, 2);
        assert_eq!(config.snapping.margins.left, 20.0);
        assert_eq!(config.snapping.margins.bottom, 20.0);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn save_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("snap.toml");

        let mut config = Config::default();
        config.snapping.enabled = false;
        config.snapping.margins.right = 48.0;
        config.save(&path).unwrap();

        assert_eq!(Config::read(&path).unwrap(), config);
    }
}
