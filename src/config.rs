use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::merge::DEFAULT_SEPARATOR;

// ── Custom class groups ───────────────────────────────────────────────────────

/// A project-specific utility family that should merge like a built-in one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomGroup {
    /// Group id, referenced by other groups' `conflicts`.
    pub id: String,
    /// Exact class names in this group (`btn-sm`, `btn-lg`).
    #[serde(default)]
    pub classes: Vec<String>,
    /// Prefixes whose `prefix-<anything>` classes belong to the group.
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Group ids this group overrides when it appears later.
    #[serde(default)]
    pub conflicts: Vec<String>,
}

// ── Profile ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Tailwind `prefix` option (e.g. "tw-"). Empty when unprefixed.
    #[serde(default)]
    pub prefix: String,
    /// Variant separator between modifiers and the utility.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Extra class groups merged on top of the built-in Tailwind table.
    #[serde(default)]
    pub groups: Vec<CustomGroup>,
    /// Status labels for tools outside the built-in set.
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            separator: default_separator(),
            groups: Vec::new(),
            labels: HashMap::new(),
        }
    }
}

// ── Config file ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Which profile to use when none is specified
    #[serde(default = "default_profile_name")]
    pub default_profile: String,

    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

fn default_profile_name() -> String {
    "default".to_string()
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            default_profile: default_profile_name(),
            profiles: HashMap::new(),
        }
    }
}

impl ConfigFile {
    /// Load from the user config path, or defaults if there is no file yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let file: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;
        info!(path = %path.display(), profiles = file.profiles.len(), "loaded config");
        Ok(file)
    }

    /// Write a starter config file to disk (only if it doesn't exist).
    pub fn write_default_if_missing() -> Result<PathBuf> {
        let path = config_path();
        Self::write_default_to(&path)?;
        Ok(path)
    }

    pub fn write_default_to(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Resolve the active profile given an optional override name.
    pub fn resolve_profile(&self, name: Option<&str>) -> Option<&Profile> {
        let key = name.unwrap_or(&self.default_profile);
        self.profiles.get(key)
    }
}

// ── Resolved runtime config (after merging file + CLI overrides) ──────────────

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Profile name that was resolved (for display)
    pub profile_name: String,
    pub prefix: String,
    pub separator: String,
    pub groups: Vec<CustomGroup>,
    pub labels: HashMap<String, String>,
}

impl ResolvedConfig {
    /// Merge config file profile with CLI overrides.
    /// Priority: CLI args > env vars (handled by clap) > config file profile > built-in defaults
    pub fn resolve(
        file: &ConfigFile,
        profile_override: Option<&str>,
        prefix_override: Option<&str>,
        separator_override: Option<&str>,
    ) -> Self {
        let profile_name = profile_override
            .unwrap_or(&file.default_profile)
            .to_string();

        let base = file
            .resolve_profile(profile_override)
            .cloned()
            .unwrap_or_default();

        Self {
            profile_name,
            prefix: prefix_override
                .map(str::to_string)
                .unwrap_or(base.prefix),
            separator: separator_override
                .map(str::to_string)
                .unwrap_or(base.separator),
            groups: base.groups,
            labels: base.labels,
        }
    }
}

// ── Paths ─────────────────────────────────────────────────────────────────────

pub fn config_path() -> PathBuf {
    dirs_config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("uicue")
        .join("config.toml")
}

fn dirs_config_dir() -> Option<PathBuf> {
    // XDG_CONFIG_HOME or ~/.config on Linux/macOS
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

// ── Default config template written by `uicue init` ───────────────────────────

const DEFAULT_CONFIG_TOML: &str = r#"# uicue configuration
# Run `uicue init` to regenerate this file.

default_profile = "default"

# ── Plain Tailwind (default) ─────────────────────────────────────────────────
[profiles.default]
prefix    = ""
separator = ":"

# ── Status labels for extra tools ────────────────────────────────────────────
# The file-edit and file-manager tools always use their built-in labels.
# [profiles.default.labels]
# bash       = "Running command..."
# web_search = "Searching the web..."

# ── Custom class groups ──────────────────────────────────────────────────────
# Teach the merger about component classes so later ones replace earlier ones.
# [[profiles.default.groups]]
# id        = "btn-size"
# classes   = ["btn-sm", "btn-md", "btn-lg"]
# prefixes  = []
# conflicts = []

# ── Prefixed Tailwind ────────────────────────────────────────────────────────
# [profiles.prefixed]
# prefix    = "tw-"
# separator = ":"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = ConfigFile::load_from(&dir.path().join("nope.toml")).unwrap();
        assert!(file.profiles.is_empty());
        let resolved = ResolvedConfig::resolve(&file, None, None, None);
        assert_eq!(resolved.profile_name, "default");
        assert_eq!(resolved.separator, ":");
        assert!(resolved.prefix.is_empty());
    }

    #[test]
    fn test_default_template_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uicue").join("config.toml");
        ConfigFile::write_default_to(&path).unwrap();
        let file = ConfigFile::load_from(&path).unwrap();
        assert_eq!(file.default_profile, "default");
        assert_eq!(file.profiles["default"], Profile::default());
    }

    #[test]
    fn test_write_default_keeps_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_profile = \"mine\"\n").unwrap();
        ConfigFile::write_default_to(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "default_profile = \"mine\"\n");
    }

    #[test]
    fn test_profiles_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
default_profile = "app"

[profiles.app]
prefix = "tw-"

[profiles.app.labels]
bash = "Running command..."

[[profiles.app.groups]]
id = "btn-size"
classes = ["btn-sm", "btn-lg"]
"#,
        )
        .unwrap();
        let file = ConfigFile::load_from(&path).unwrap();

        let resolved = ResolvedConfig::resolve(&file, None, None, None);
        assert_eq!(resolved.profile_name, "app");
        assert_eq!(resolved.prefix, "tw-");
        assert_eq!(resolved.separator, ":");
        assert_eq!(resolved.groups.len(), 1);
        assert_eq!(resolved.groups[0].classes, vec!["btn-sm", "btn-lg"]);
        assert_eq!(resolved.labels["bash"], "Running command...");

        let overridden = ResolvedConfig::resolve(&file, None, Some(""), Some("__"));
        assert_eq!(overridden.prefix, "");
        assert_eq!(overridden.separator, "__");

        let other = ResolvedConfig::resolve(&file, Some("missing"), None, None);
        assert_eq!(other.profile_name, "missing");
        assert!(other.groups.is_empty());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "profiles = 3").unwrap();
        let err = ConfigFile::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("Failed to parse config file"));
    }
}
