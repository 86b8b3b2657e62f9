//! Configuration file loading and environment variable handling.
//!
//! Precedence: CLI args > Environment vars > Config file > Defaults

use korstr_core::TimeZoneSetting;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Default config file content for `--config-init`.
pub const DEFAULT_CONFIG: &str = r#"# KorStr configuration
# See: korstr --help for all options

# Time zone for datetime/date/time: "local", "utc" or an offset like "+09:00"
timezone = "local"

# Join segments without spaces (1만2345 instead of 1만 2345)
no_space = false

# Disable colored output
no_color = false
"#;

/// Configuration loaded from file and environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timezone: Option<String>,
    pub no_space: Option<bool>,
    pub no_color: Option<bool>,
}

impl Config {
    /// Get the config file path.
    ///
    /// - Linux: `~/.config/korstr/config.toml`
    /// - macOS: `~/Library/Application Support/korstr/config.toml`
    /// - Windows: `%APPDATA%\korstr\config.toml`
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("korstr").join("config.toml"))
    }

    /// Load config from file. Returns default if file doesn't exist.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };

        let Ok(contents) = fs::read_to_string(&path) else {
            return Self::default();
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Read an environment variable.
    fn env_raw(name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    /// Get timezone and where it came from, with precedence: env > config > default.
    pub fn timezone(&self) -> (TimeZoneSetting, &'static str) {
        let env = Self::env_raw("KORSTR_TZ");
        resolve_timezone(env.as_deref(), self.timezone.as_deref())
    }

    /// Get no_space and where it came from, with precedence: env > config > default.
    pub fn no_space(&self) -> (bool, &'static str) {
        let env = Self::env_raw("KORSTR_NO_SPACE");
        resolve_no_space(env.as_deref(), self.no_space)
    }

    /// Get no_color with precedence: env > config > default.
    ///
    /// Respects the `NO_COLOR` standard (https://no-color.org/).
    pub fn no_color(&self) -> bool {
        if std::env::var("NO_COLOR").is_ok() {
            return true;
        }
        if std::env::var("KORSTR_NO_COLOR").is_ok() {
            return true;
        }
        self.no_color.unwrap_or(false)
    }
}

/// Resolve the time zone from an env value and a config value.
///
/// Invalid values are reported and skipped so a typo in one layer falls
/// through to the next.
pub fn resolve_timezone(env: Option<&str>, file: Option<&str>) -> (TimeZoneSetting, &'static str) {
    let layers = [(env, "env KORSTR_TZ"), (file, "config file")];
    for (raw, source) in layers {
        let Some(raw) = raw else {
            continue;
        };
        match raw.parse::<TimeZoneSetting>() {
            Ok(tz) => return (tz, source),
            Err(e) => eprintln!("Warning: ignoring {}: {}", source, e),
        }
    }
    (TimeZoneSetting::default(), "default")
}

/// Parse a boolean flag value from the environment.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Resolve no_space from an env value and a config value.
pub fn resolve_no_space(env: Option<&str>, file: Option<bool>) -> (bool, &'static str) {
    if let Some(raw) = env {
        match parse_flag(raw) {
            Some(value) => return (value, "env KORSTR_NO_SPACE"),
            None => eprintln!(
                "Warning: ignoring env KORSTR_NO_SPACE: '{}' is not a boolean (use true/false or 1/0)",
                raw
            ),
        }
    }
    match file {
        Some(value) => (value, "config file"),
        None => (false, "default"),
    }
}

/// Create a default config file at the standard location.
pub fn init_config() -> Result<PathBuf, String> {
    let path = Config::path().ok_or("Cannot determine config directory")?;

    if path.exists() {
        return Err(format!("Config file already exists: {}", path.display()));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create directory: {}", e))?;
    }

    fs::write(&path, DEFAULT_CONFIG).map_err(|e| format!("Failed to write config: {}", e))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_valid_toml() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("DEFAULT_CONFIG should parse");
        assert_eq!(config.timezone.as_deref(), Some("local"));
        assert_eq!(config.no_space, Some(false));
        assert_eq!(config.no_color, Some(false));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
timezone = "+09:00"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.timezone.as_deref(), Some("+09:00"));
        assert_eq!(config.no_space, None);
    }

    #[test]
    fn test_timezone_precedence() {
        assert_eq!(
            resolve_timezone(Some("+09:00"), Some("utc")),
            (TimeZoneSetting::kst(), "env KORSTR_TZ")
        );
        assert_eq!(
            resolve_timezone(None, Some("utc")),
            (TimeZoneSetting::Utc, "config file")
        );
        assert_eq!(resolve_timezone(None, None), (TimeZoneSetting::Local, "default"));
    }

    #[test]
    fn test_invalid_timezone_falls_through() {
        assert_eq!(
            resolve_timezone(Some("bogus"), Some("utc")),
            (TimeZoneSetting::Utc, "config file")
        );
        assert_eq!(
            resolve_timezone(Some("bogus"), Some("Asia/Seoul")),
            (TimeZoneSetting::Local, "default")
        );
    }

    #[test]
    fn test_no_space_accepts_numeric_flags() {
        assert_eq!(resolve_no_space(Some("1"), None), (true, "env KORSTR_NO_SPACE"));
        assert_eq!(resolve_no_space(Some("TRUE"), Some(false)), (true, "env KORSTR_NO_SPACE"));
        assert_eq!(resolve_no_space(Some("0"), Some(true)), (false, "env KORSTR_NO_SPACE"));
    }

    #[test]
    fn test_invalid_no_space_falls_through() {
        assert_eq!(resolve_no_space(Some("maybe"), Some(true)), (true, "config file"));
        assert_eq!(resolve_no_space(Some("maybe"), None), (false, "default"));
        assert_eq!(resolve_no_space(None, None), (false, "default"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        // Unknown keys are ignored; wrong types fail to parse
        assert!(toml::from_str::<Config>("extra = 1").is_ok());
        assert!(toml::from_str::<Config>("no_space = \"yes\"").is_err());
    }
}
