use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use slidekit_model::CarouselOptions;

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "SLIDEKIT_CONFIG_PATH";
/// Environment variable holding inline JSON config.
pub const CONFIG_JSON_ENV: &str = "SLIDEKIT_CONFIG_JSON";

/// Source that produced the carousel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OptionsSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Page-wide carousel settings.
///
/// ```toml
/// [defaults]
/// autoplay = true
/// delay_ms = 4000
///
/// [carousels.hero]
/// layout = "portrait-one"
/// initial = "center"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SlidekitConfig {
    /// Options for carousels without an entry of their own.
    pub defaults: CarouselOptions,
    /// Per-carousel options keyed by carousel id. An entry replaces the
    /// defaults as a whole; fields it omits take the built-in defaults.
    pub carousels: BTreeMap<String, CarouselOptions>,
}

impl SlidekitConfig {
    pub fn options_for(&self, key: &str) -> CarouselOptions {
        self.carousels.get(key).copied().unwrap_or(self.defaults)
    }

    /// Load configuration using environment variables.
    /// Evaluation order:
    /// 1) `$SLIDEKIT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$SLIDEKIT_CONFIG_JSON` (inline JSON),
    /// 3) `slidekit.toml`, `slidekit.json` or `config/slidekit.toml` in the
    ///    working directory,
    /// 4) defaults if none of the above exist.
    pub fn load_from_env() -> anyhow::Result<(Self, OptionsSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// Same resolution as [`SlidekitConfig::load_from_env`], reading
    /// variables through `lookup` and default files relative to `root`.
    pub fn load_with<F>(
        lookup: F,
        root: &Path,
    ) -> anyhow::Result<(Self, OptionsSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, OptionsSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, OptionsSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(root) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, OptionsSource::File(path)));
        }

        Ok((Self::default(), OptionsSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read carousel config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid carousel config {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid carousel config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse carousel config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid carousel config json: {err}"))
    }

    fn find_default_file(root: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] =
            &["slidekit.toml", "slidekit.json", "config/slidekit.toml"];

        CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}
