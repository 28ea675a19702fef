//! Render configuration and its deep-merge overrides.

use anyhow::{Context, Result, anyhow};
use super::Hue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use super::{ColorToken, Severity};
use crate::error::ConfigError;

/// Frame rate used when no override is given
pub const DEFAULT_FRAMES_PER_SECOND: u32 = 20;

/// Effective configuration of one animation run.
///
/// Built by merging [`RenderOverrides`] over [`RenderConfig::default`] and
/// never mutated while the animation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub frames_per_second: u32,
    pub colors: BTreeMap<Severity, ColorToken>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let colors = BTreeMap::from([
            (Severity::Success, ColorToken::bright(Hue::Green)),
            (Severity::Warning, ColorToken::bright(Hue::Yellow)),
            (Severity::Error, ColorToken::bright(Hue::Red)),
            (Severity::Info, ColorToken::bright(Hue::Blue)),
        ]);
        Self {
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            colors,
        }
    }
}

impl RenderConfig {
    /// Defaults with `overrides` applied key by key.
    pub fn with_overrides(overrides: &RenderOverrides) -> Self {
        Self::default().merge(overrides)
    }

    /// Apply overrides on top of this config.
    ///
    /// Nested color entries override independently; unset entries keep
    /// their current value.
    pub fn merge(mut self, overrides: &RenderOverrides) -> Self {
        if let Some(fps) = overrides.frames_per_second {
            self.frames_per_second = fps;
        }
        for (severity, token) in overrides.colors.entries() {
            self.colors.insert(severity, token);
        }
        self
    }

    /// Check the config covers every severity and has a usable frame rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frames_per_second == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        for severity in Severity::ALL {
            self.color_for(severity)?;
        }
        Ok(())
    }

    /// Color token configured for `mode`.
    pub fn color_for(&self, mode: Severity) -> Result<ColorToken, ConfigError> {
        self.colors
            .get(&mode)
            .copied()
            .ok_or(ConfigError::UnknownSeverity(mode))
    }

    /// Delay between ticks: `1000 / fps` milliseconds, never below 1 ms.
    pub fn frame_interval(&self) -> Duration {
        let fps = u64::from(self.frames_per_second.max(1));
        Duration::from_millis((1000 / fps).max(1))
    }
}

/// Partial render configuration supplied per start.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOverrides {
    pub frames_per_second: Option<u32>,
    pub colors: ColorOverrides,
}

/// Per-severity color overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub success: Option<ColorToken>,
    pub warning: Option<ColorToken>,
    pub error: Option<ColorToken>,
    pub info: Option<ColorToken>,
}

impl ColorOverrides {
    fn slot(&mut self, severity: Severity) -> &mut Option<ColorToken> {
        match severity {
            Severity::Success => &mut self.success,
            Severity::Warning => &mut self.warning,
            Severity::Error => &mut self.error,
            Severity::Info => &mut self.info,
        }
    }

    /// Severities that carry an override, with their tokens.
    pub fn entries(&self) -> impl Iterator<Item = (Severity, ColorToken)> + '_ {
        [
            (Severity::Success, self.success),
            (Severity::Warning, self.warning),
            (Severity::Error, self.error),
            (Severity::Info, self.info),
        ]
        .into_iter()
        .filter_map(|(severity, token)| token.map(|t| (severity, t)))
    }
}

impl RenderOverrides {
    pub fn frames_per_second(mut self, fps: u32) -> Self {
        self.frames_per_second = Some(fps);
        self
    }

    pub fn color(mut self, severity: Severity, token: ColorToken) -> Self {
        *self.colors.slot(severity) = Some(token);
        self
    }

    /// Overlay `other` on top of these overrides (values in `other` win).
    pub fn merge(mut self, other: &RenderOverrides) -> Self {
        if other.frames_per_second.is_some() {
            self.frames_per_second = other.frames_per_second;
        }
        for (severity, token) in other.colors.entries() {
            *self.colors.slot(severity) = Some(token);
        }
        self
    }

    /// Load overrides from a YAML or JSON file, chosen by extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display())),
            _ => Err(anyhow!(
                "Unsupported config format (expected .json, .yaml or .yml): {}",
                path.display()
            )),
        }
    }
}

/// Parse a `<severity>=<color>` pair as given on the command line.
pub fn parse_color_override(raw: &str) -> Result<(Severity, ColorToken)> {
    let (mode, color) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected <severity>=<color>, got '{}'", raw))?;
    let severity = mode.parse::<Severity>().map_err(|e| anyhow!(e))?;
    let token = color.parse::<ColorToken>()?;
    Ok((severity, token))
}
