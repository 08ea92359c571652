//! Configuration for javagen (`javagen.toml`).
//!
//! Every key is optional; an empty file yields [`GeneratorConfig::default`].

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod logging;
mod schema;

pub use logging::{init_tracing, LoggingConfig, JAVAGEN_TARGET};
pub use schema::json_schema;

/// The package every Java compilation unit sees without importing it.
pub const DEFAULT_IMPLICIT_PACKAGE: &str = "java.lang";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub imports: ImportsConfig,
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct ImportsConfig {
    /// Packages whose classes are in scope without an import line (e.g. `java.lang`).
    ///
    /// Emitters leave out import lines for classes in these packages.
    #[serde(default = "ImportsConfig::default_implicit_packages")]
    pub implicit_packages: Vec<String>,

    /// Refer to classes whose simple name was claimed by an earlier import by their fully
    /// qualified name.
    #[serde(default = "ImportsConfig::default_qualify_conflicts")]
    pub qualify_conflicts: bool,
}

impl ImportsConfig {
    fn default_implicit_packages() -> Vec<String> {
        vec![DEFAULT_IMPLICIT_PACKAGE.to_owned()]
    }

    fn default_qualify_conflicts() -> bool {
        true
    }

    pub fn is_implicit(&self, package: &str) -> bool {
        self.implicit_packages.iter().any(|p| p == package)
    }
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            implicit_packages: Self::default_implicit_packages(),
            qualify_conflicts: Self::default_qualify_conflicts(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    Spaces,
    Tabs,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct FormatConfig {
    /// Width of one indentation level when `indent_style = "spaces"`.
    #[serde(default = "FormatConfig::default_indent_width")]
    #[schemars(range(min = 1))]
    pub indent_width: usize,

    #[serde(default = "FormatConfig::default_indent_style")]
    pub indent_style: IndentStyle,

    /// Separate class members with an empty line.
    #[serde(default = "FormatConfig::default_blank_line_between_members")]
    pub blank_line_between_members: bool,
}

impl FormatConfig {
    fn default_indent_width() -> usize {
        4
    }

    fn default_indent_style() -> IndentStyle {
        IndentStyle::Spaces
    }

    fn default_blank_line_between_members() -> bool {
        true
    }

    /// One level of indentation.
    pub fn indent_unit(&self) -> String {
        match self.indent_style {
            IndentStyle::Spaces => " ".repeat(self.indent_width.max(1)),
            IndentStyle::Tabs => "\t".to_owned(),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: Self::default_indent_width(),
            indent_style: Self::default_indent_style(),
            blank_line_between_members: Self::default_blank_line_between_members(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // `Display` for `toml::de::Error` embeds a source snippet; keep just the message.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl GeneratorConfig {
    /// Load a config file from TOML.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_str(&text)
    }

    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = toml::from_str(text)?;
        tracing::debug!(
            target: "javagen.config",
            implicit_packages = ?config.imports.implicit_packages,
            indent_width = config.format.indent_width,
            "loaded config"
        );
        Ok(config)
    }
}
