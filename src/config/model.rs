use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};
use url::Url;

use super::language::{Language, SHARED_SOURCE_FILE};

/// One language's listing source, as read from `source.<lang>.json`.
///
/// An explicit `null` is treated the same as a missing field.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceConfig {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub url: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub banner_url: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub author: Author,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub info_link: InfoLink,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub packages: Vec<PackageSource>,
}

/// Passed through to the presentation records exactly as written.
pub type Author = JsonMap<String, JsonValue>;

pub type InfoLink = JsonMap<String, JsonValue>;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PackageSource {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub name: String,
    /// Oldest first; the last entry is the current release.
    #[serde(deserialize_with = "deserialize_null_default")]
    pub releases: Vec<String>,
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl PackageSource {
    pub fn latest_release(&self) -> Option<&str> {
        self.releases.last().map(String::as_str)
    }
}

impl SourceConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read source file {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| invalid_json_message(path))
    }

    /// Loads `source.<lang>.json` from `root`, falling back to the shared
    /// `source.json`. Returns the path that was actually read.
    pub fn load_for_language(root: &Path, language: Language) -> Result<(PathBuf, Self)> {
        let specific = root.join(language.source_file());
        if specific.exists() {
            let config = Self::load(&specific)?;
            return Ok((specific, config));
        }

        let shared = root.join(SHARED_SOURCE_FILE);
        if shared.exists() {
            let config = Self::load(&shared)?;
            return Ok((shared, config));
        }

        bail!(
            "no source for language '{}': expected {} or {}",
            language,
            specific.display(),
            shared.display()
        );
    }

    pub fn url_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        check_url("url", &self.url, &mut warnings);
        // A relative banner is served from the copied assets.
        if !is_relative_reference(&self.banner_url) {
            check_url("bannerUrl", &self.banner_url, &mut warnings);
        }
        for package in &self.packages {
            for release in &package.releases {
                check_url(
                    &format!("release of {}", package.name),
                    release,
                    &mut warnings,
                );
            }
        }
        warnings
    }
}

fn invalid_json_message(path: &Path) -> String {
    format!("{}: invalid JSON", path.display())
}

fn is_relative_reference(value: &str) -> bool {
    matches!(
        Url::parse(value.trim()),
        Err(url::ParseError::RelativeUrlWithoutBase)
    )
}

fn check_url(field: &str, value: &str, warnings: &mut Vec<String>) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return;
    }
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => warnings.push(format!(
            "{field} '{trimmed}' uses unsupported scheme '{}'",
            url.scheme()
        )),
        Err(err) => warnings.push(format!("{field} '{trimmed}' is not an absolute URL ({err})")),
    }
}
