//! Viewer configuration embedded in pako links.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Default,
    /// Reads best for refinement graphs.
    #[default]
    Neutral,
    Forest,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Neutral => "neutral",
            Theme::Forest => "forest",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "default" => Some(Theme::Default),
            "neutral" => Some(Theme::Neutral),
            "forest" => Some(Theme::Forest),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `mermaid` object of a link payload.
///
/// Every `default()` call builds a fresh `{"theme": "neutral"}`; there is no shared instance
/// for a caller to mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MermaidConfig(Value);

impl Default for MermaidConfig {
    fn default() -> Self {
        Self::empty_object().with_theme(Theme::default())
    }
}

impl MermaidConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.insert("theme", Value::String(theme.as_str().to_string()));
        self
    }

    /// `None` when unset or not one of the known themes.
    pub fn theme(&self) -> Option<Theme> {
        self.get("theme")?.as_str().and_then(Theme::parse)
    }

    /// A top-level key of the `mermaid` object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object()?.get(key)
    }

    /// Sets a top-level key. A config holding something other than an object is replaced by
    /// one, since the viewer only reads objects.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        match &mut self.0 {
            Value::Object(map) => {
                map.insert(key.into(), value);
            }
            other => {
                let mut map = Map::new();
                map.insert(key.into(), value);
                *other = Value::Object(map);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    #[default]
    View,
    Edit,
}

impl LinkMode {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkMode::View => "view",
            LinkMode::Edit => "edit",
        }
    }
}

impl fmt::Display for LinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_HOST: &str = "https://mermaid.live";

#[derive(Debug, Clone, PartialEq)]
pub struct LinkOptions {
    pub mode: LinkMode,
    /// Scheme and authority without a trailing slash.
    pub host: String,
    pub config: MermaidConfig,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            mode: LinkMode::default(),
            host: DEFAULT_HOST.to_string(),
            config: MermaidConfig::default(),
        }
    }
}

impl LinkOptions {
    pub fn edit() -> Self {
        Self {
            mode: LinkMode::Edit,
            ..Self::default()
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.config = self.config.with_theme(theme);
        self
    }
}
