//! Load a keymap written with AFNOR names from `keymap.toml`.
//!
//! ```toml
//! [layout]
//! rows = 1
//! cols = 3
//!
//! [aliases]
//! euro = "ALGR(FR_E)"
//!
//! [[layer]]
//! name = "base"
//! keys = "FR_A S(FR_EACU) @euro"
//! ```

use std::collections::HashMap;
use std::path::Path;

use afnor::types::action::KeyAction;
use log::info;
use serde_derive::Deserialize;
use serde_inline_default::serde_inline_default;

pub mod error;
pub mod keycode_alias;
pub mod layout;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use keycode_alias::{KEYCODE_ALIAS, keycode_from_name};

/// Contents of `keymap.toml`.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeymapTomlConfig {
    pub layout: LayoutTomlConfig,
    /// `name = "key expressions"`, used as `@name` in layers
    #[serde(default)]
    pub aliases: HashMap<String, String>,
    #[serde(default)]
    pub layer: Vec<LayerTomlConfig>,
}

/// The `[layout]` section
#[serde_inline_default]
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutTomlConfig {
    pub rows: u8,
    pub cols: u8,
    /// Number of keymap layers, those without a `[[layer]]` entry are transparent
    #[serde_inline_default(4)]
    pub layers: u8,
}

/// One `[[layer]]` entry
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerTomlConfig {
    /// Optional name, usable as `MO(name)`
    pub name: Option<String>,
    /// Key expressions in row-major order, separated by whitespace
    pub keys: String,
}

/// A resolved keymap: `keymap[layer][row][col]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeymapConfig {
    pub rows: u8,
    pub cols: u8,
    /// Names of the `[[layer]]` entries, in order
    pub layer_names: Vec<Option<String>>,
    pub keymap: Vec<Vec<Vec<KeyAction>>>,
}

impl KeymapConfig {
    /// Read, validate and resolve a `keymap.toml` file.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let keymap = Self::parse(&content, &path.display().to_string())?;
        info!(
            "Loaded {}: {} layers of {}x{} keys",
            path.display(),
            keymap.keymap.len(),
            keymap.rows,
            keymap.cols
        );
        Ok(keymap)
    }

    /// Validate and resolve `keymap.toml` contents.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, origin: &str) -> ConfigResult<Self> {
        let config: KeymapTomlConfig = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: origin.to_string(),
            message: e.message().to_string(),
        })?;
        validation::validate_config(&config)?;
        let keymap = config.get_keymap_config()?;
        validation::validate_layer_targets(&keymap)?;
        Ok(keymap)
    }

    /// Action at a position, `None` when out of range
    pub fn get(&self, layer: usize, row: usize, col: usize) -> Option<KeyAction> {
        self.keymap.get(layer)?.get(row)?.get(col).copied()
    }

    /// Name of a layer, or its number when unnamed
    pub fn layer_label(&self, layer: usize) -> String {
        match self.layer_names.get(layer) {
            Some(Some(name)) => name.clone(),
            _ => layer.to_string(),
        }
    }
}
