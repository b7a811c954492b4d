//! Rendering settings: defaults, optional TOML file, then CLI flags.
//!
//! File shape (all keys optional):
//!   label_style = "space"     # or "dash"
//!   margin = 40
//!   highlight_fill = "#afa"
//!   full = false

use crate::Result;
use crate::diagnostics;
use crate::model::LabelStyle;
use crate::viewport::DEFAULT_MARGIN;

use anyhow::{Context, bail};
use regex::Regex;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub label_style: Option<LabelStyle>,
    pub margin: Option<f64>,
    pub highlight_fill: Option<String>,
    pub full: Option<bool>,
}

/// Flags given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub label_style: Option<LabelStyle>,
    pub margin: Option<f64>,
    pub full: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub label_style: LabelStyle,
    pub margin: f64,
    pub highlight_fill: HighlightFill,
    /// Enable pan/zoom in the HTML page.
    pub full: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label_style: LabelStyle::default(),
            margin: DEFAULT_MARGIN,
            highlight_fill: HighlightFill::default(),
            full: false,
        }
    }
}

/// CSS hex color used to fill the selected version's node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightFill(String);

impl Default for HighlightFill {
    fn default() -> Self {
        Self("#afa".to_string())
    }
}

impl HighlightFill {
    pub fn parse(value: &str) -> Result<Self> {
        let re = Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")?;
        let value = value.trim();
        if !re.is_match(value) {
            bail!(
                "{}",
                diagnostics::error_message(format!(
                    "highlight_fill must be #rgb or #rrggbb, got {:?}",
                    value
                ))
            );
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    /// As written, e.g. `#afa`.
    pub fn css(&self) -> &str {
        &self.0
    }

    /// Six-digit form, e.g. `#aaffaa`. Graphviz only accepts this one.
    pub fn rrggbb(&self) -> String {
        let digits = &self.0[1..];
        if digits.len() == 3 {
            let mut out = String::with_capacity(7);
            out.push('#');
            for c in digits.chars() {
                out.push(c);
                out.push(c);
            }
            out
        } else {
            self.0.clone()
        }
    }
}

impl FileConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| diagnostics::error_message(format!("read config file {}", path)))?;
        Self::from_toml_str(&text)
            .with_context(|| diagnostics::error_message(format!("parse config file {}", path)))
    }
}

impl Config {
    /// Merge defaults < file < flags and validate the result.
    pub fn resolve(file: FileConfig, flags: Overrides) -> Result<Self> {
        let defaults = Config::default();

        let highlight_fill = match file.highlight_fill {
            Some(raw) => HighlightFill::parse(&raw)?,
            None => defaults.highlight_fill,
        };

        let margin = flags.margin.or(file.margin).unwrap_or(defaults.margin);
        if !margin.is_finite() || margin < 0.0 {
            bail!(
                "{}",
                diagnostics::error_message(format!("margin must be >= 0, got {}", margin))
            );
        }

        Ok(Config {
            label_style: flags
                .label_style
                .or(file.label_style)
                .unwrap_or(defaults.label_style),
            margin,
            highlight_fill,
            full: flags.full.or(file.full).unwrap_or(defaults.full),
        })
    }

    pub fn load(path: Option<&str>, flags: Overrides) -> Result<Self> {
        let file = match path {
            Some(p) => FileConfig::load(p)?,
            None => FileConfig::default(),
        };
        Self::resolve(file, flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_without_file_or_flags() {
        let cfg = Config::load(None, Overrides::default()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.margin, 40.0);
        assert_eq!(cfg.label_style, LabelStyle::Space);
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig::from_toml_str(
            r##"
            label_style = "dash"
            margin = 10
            highlight_fill = "#00FF00"
            full = true
            "##,
        )
        .unwrap();

        let cfg = Config::resolve(
            file.clone(),
            Overrides {
                label_style: Some(LabelStyle::Space),
                margin: None,
                full: None,
            },
        )
        .unwrap();
        assert_eq!(cfg.label_style, LabelStyle::Space);
        assert_eq!(cfg.margin, 10.0);
        assert_eq!(cfg.highlight_fill.css(), "#00ff00");
        assert!(cfg.full);

        let cfg = Config::resolve(file, Overrides::default()).unwrap();
        assert_eq!(cfg.label_style, LabelStyle::Dash);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml_str("colour = \"red\"").is_err());
    }

    #[test]
    fn bad_fill_and_margin_fail() {
        let file = FileConfig {
            highlight_fill: Some("green".to_string()),
            ..FileConfig::default()
        };
        assert!(Config::resolve(file, Overrides::default()).is_err());

        let flags = Overrides {
            margin: Some(-1.0),
            ..Overrides::default()
        };
        assert!(Config::resolve(FileConfig::default(), flags).is_err());
    }

    #[test]
    fn short_hex_expands_for_graphviz() {
        assert_eq!(HighlightFill::default().rrggbb(), "#aaffaa");
        assert_eq!(HighlightFill::parse("#12abEF").unwrap().rrggbb(), "#12abef");
    }
}
