use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selector::{Selector, SelectorError};

/// Errors that can occur while loading options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read options file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid options: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User-facing options.
///
/// Every field is optional when deserialized; missing fields take their
/// defaults and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Items start collapsed.
    pub hide_by_default: bool,
    /// The first item of each group stays expanded even when
    /// `hide_by_default` is set.
    pub hide_except_first: bool,
    /// At most one expanded item per group.
    pub singular_mode: bool,
    /// Clicking an expanded item collapses it.
    pub singular_allow_hide: bool,
    /// Annotate items with FAQ `itemprop` markup.
    pub use_schema: bool,
    /// Settle animations instantly.
    pub reduced_motion: bool,
    pub class_group: String,
    pub class_item: String,
    pub class_panel: String,
    pub class_button: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hide_by_default: true,
            hide_except_first: true,
            singular_mode: false,
            singular_allow_hide: true,
            use_schema: false,
            reduced_motion: false,
            class_group: ".accordion__group".into(),
            class_item: ".accordion".into(),
            class_panel: ".accordion__panel".into(),
            class_button: ".accordion__button".into(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn hide_by_default(mut self, enabled: bool) -> Self {
        self.hide_by_default = enabled;
        self
    }

    pub fn hide_except_first(mut self, enabled: bool) -> Self {
        self.hide_except_first = enabled;
        self
    }

    /// Restrict each group to one expanded item.
    pub fn singular(mut self) -> Self {
        self.singular_mode = true;
        self
    }

    pub fn singular_allow_hide(mut self, enabled: bool) -> Self {
        self.singular_allow_hide = enabled;
        self
    }

    pub fn use_schema(mut self, enabled: bool) -> Self {
        self.use_schema = enabled;
        self
    }

    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    pub fn selectors(
        mut self,
        group: impl Into<String>,
        item: impl Into<String>,
        panel: impl Into<String>,
        button: impl Into<String>,
    ) -> Self {
        self.class_group = group.into();
        self.class_item = item.into();
        self.class_panel = panel.into();
        self.class_button = button.into();
        self
    }
}

/// Parsed, immutable configuration shared by every component.
#[derive(Debug, Clone)]
pub struct Config {
    pub hide_by_default: bool,
    pub hide_except_first: bool,
    pub singular_mode: bool,
    pub singular_allow_hide: bool,
    pub use_schema: bool,
    pub reduced_motion: bool,
    pub group: Selector,
    pub item: Selector,
    pub panel: Selector,
    pub button: Selector,
}

impl Config {
    pub fn from_options(options: &Options) -> Result<Self, SelectorError> {
        Ok(Self {
            hide_by_default: options.hide_by_default,
            hide_except_first: options.hide_except_first,
            singular_mode: options.singular_mode,
            singular_allow_hide: options.singular_allow_hide,
            use_schema: options.use_schema,
            reduced_motion: options.reduced_motion,
            group: Selector::parse(&options.class_group)?,
            item: Selector::parse(&options.class_item)?,
            panel: Selector::parse(&options.class_panel)?,
            button: Selector::parse(&options.class_button)?,
        })
    }

    /// Whether the item at `index` within its group starts expanded.
    pub fn starts_expanded(&self, index: usize) -> bool {
        !self.hide_by_default || (self.hide_except_first && index == 0)
    }
}

impl TryFrom<Options> for Config {
    type Error = SelectorError;

    fn try_from(options: Options) -> Result<Self, Self::Error> {
        Self::from_options(&options)
    }
}
