//! Optional per-template manifest (`<template>/template.yaml`)

use crate::error::{Error, Result};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

pub const MANIFEST_FILE: &str = "template.yaml";

/// Pre-flight settings for a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateManifest {
    /// Executables that must be on PATH before scaffolding
    #[serde(default)]
    pub requires: Vec<String>,

    /// Minimum CLI version the template was written for
    #[serde(default)]
    pub version: Option<String>,
}

impl TemplateManifest {
    /// Load the manifest from a template directory. A missing file yields the default.
    pub fn load(template_dir: &Path) -> Result<Self> {
        let path = template_dir.join(MANIFEST_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(Error::Discovery { path, source }),
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).map_err(|source| Error::Manifest { path, source })
    }

    /// Warning text when the running CLI is older than the template expects
    pub fn compatibility_warning(&self, cli_version: &str, upgrade_command: &str) -> Option<String> {
        let wanted = self.version.as_deref()?;
        check_compatibility(cli_version, wanted, upgrade_command)
    }
}

/// Compare CLI version against template version.
/// Returns a warning message if the CLI is older than the template expects.
pub fn check_compatibility(
    cli_version: &str,
    template_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = parse_version(cli_version)?;
    let template_ver = parse_version(template_version)?;

    if cli_ver < template_ver {
        Some(format!(
            "This template was designed for CLI version {} or newer. \
             You are running version {}. Consider updating: {}",
            template_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}

fn parse_version(version: &str) -> Option<Version> {
    let cleaned = version.trim();
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);
    Version::parse(cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_manifest_is_default() {
        let dir = TempDir::new().unwrap();
        let manifest = TemplateManifest::load(dir.path()).unwrap();
        assert_eq!(manifest, TemplateManifest::default());
    }

    #[test]
    fn test_load_requires_and_version() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILE),
            "requires:\n  - node\n  - npx\nversion: 0.2.0\n",
        )
        .unwrap();

        let manifest = TemplateManifest::load(dir.path()).unwrap();
        assert_eq!(manifest.requires, vec!["node", "npx"]);
        assert_eq!(manifest.version.as_deref(), Some("0.2.0"));
    }

    #[test]
    fn test_malformed_manifest() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(MANIFEST_FILE), "requires: [node\n").unwrap();

        let err = TemplateManifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Manifest { .. }));
    }

    #[test]
    fn test_cli_older_than_template() {
        let warning = check_compatibility("0.1.0", "0.2.0", "cargo install authkit-cli --force");
        assert!(warning.unwrap().contains("0.2.0"));
    }

    #[test]
    fn test_cli_same_or_newer_than_template() {
        assert!(check_compatibility("0.1.0", "0.1.0", "upgrade").is_none());
        assert!(check_compatibility("0.2.0", "v0.1.0", "upgrade").is_none());
    }

    #[test]
    fn test_invalid_versions() {
        assert!(check_compatibility("invalid", "0.1.0", "upgrade").is_none());
        let manifest = TemplateManifest {
            version: Some("latest".to_string()),
            ..Default::default()
        };
        assert!(manifest.compatibility_warning("0.1.0", "upgrade").is_none());
    }
}
