//! Declarative theme config
//!
//! Themes can be authored as TOML documents and fed through the staged
//! builder. This is an in-memory convenience over strings; reading files
//! or watching them stays with the host.

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::schema::{ClassProps, DefaultClasses, StyleSchema, StyleStructure};
use crate::tokens::{StyleValue, ThemeTokens};

/// Error parsing a theme config document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid style config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleConfig {
    colors: IndexMap<String, String>,
    spacing: IndexMap<String, StyleValue>,
    border_radii: IndexMap<String, f64>,
    base_classes: IndexMap<String, ClassProps>,
    defaults: DefaultClasses,
    views: IndexMap<String, StyleStructure>,
}

/// Build a [`StyleSchema`] from a TOML document.
///
/// ```
/// let schema = weft_style::schema_from_toml(r##"
///     [colors]
///     ink = "#1a1a2e"
///
///     [spacing]
///     small = 4
///
///     [base_classes.panel]
///     padding = "small"
///     color = "ink"
///
///     [defaults]
///     view = ["panel"]
///
///     [views]
///     card = ["panel", { borderRadius = 8 }]
/// "##).unwrap();
/// assert!(schema.base_names().contains("panel"));
/// ```
pub fn schema_from_toml(input: &str) -> Result<StyleSchema, ConfigError> {
    let config: StyleConfig = toml::from_str(input)?;
    let tokens = ThemeTokens {
        colors: config.colors,
        spacing: config.spacing,
        border_radii: config.border_radii,
    };
    Ok(StyleSchema::builder(tokens)
        .base_classes(config.base_classes)
        .defaults(config.defaults)
        .views(config.views))
}
