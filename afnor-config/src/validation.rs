//! Checks of a parsed `keymap.toml` before its layers are resolved.

use std::collections::HashSet;

use afnor::types::action::{Action, KeyAction};

use crate::error::{ConfigError, ConfigResult};
use crate::layout::ALIAS_DELIMITERS;
use crate::{KeymapConfig, KeymapTomlConfig};

/// Upper bound of `layout.rows * layout.cols`
pub const MAX_KEYS_PER_LAYER: usize = 256;

pub fn validate_config(config: &KeymapTomlConfig) -> ConfigResult<()> {
    validate_layout_section(config)?;
    validate_aliases(config)?;
    validate_layers(config)?;
    Ok(())
}

fn validate_layout_section(config: &KeymapTomlConfig) -> ConfigResult<()> {
    let layout = &config.layout;
    if layout.rows == 0 || layout.cols == 0 {
        return Err(ConfigError::InvalidValue {
            field: "layout.rows/cols".to_string(),
            value: format!("{}x{}", layout.rows, layout.cols),
            expected: "at least one row and one column".to_string(),
        });
    }
    if layout.rows as usize * layout.cols as usize > MAX_KEYS_PER_LAYER {
        return Err(ConfigError::InvalidValue {
            field: "layout.rows/cols".to_string(),
            value: format!("{}x{}", layout.rows, layout.cols),
            expected: format!("at most {} keys", MAX_KEYS_PER_LAYER),
        });
    }
    Ok(())
}

fn validate_aliases(config: &KeymapTomlConfig) -> ConfigResult<()> {
    for key in config.aliases.keys() {
        if key.is_empty()
            || key
                .chars()
                .any(|c| c.is_whitespace() || c == '@' || ALIAS_DELIMITERS.contains(&c))
        {
            return Err(ConfigError::Validation {
                field: format!("aliases.{}", key),
                message: "Alias names must be non-empty and must not contain whitespace, '@', '(', ')', ',' or '|'"
                    .to_string(),
            });
        }
    }
    Ok(())
}

fn validate_layers(config: &KeymapTomlConfig) -> ConfigResult<()> {
    if config.layer.is_empty() {
        return Err(ConfigError::MissingField {
            field: "layer".to_string(),
        });
    }
    if config.layer.len() > config.layout.layers as usize {
        return Err(ConfigError::Validation {
            field: "layer".to_string(),
            message: format!(
                "{} [[layer]] entries but layout.layers is {}",
                config.layer.len(),
                config.layout.layers
            ),
        });
    }

    let mut names = HashSet::new();
    for name in config.layer.iter().filter_map(|l| l.name.as_ref()) {
        if !names.insert(name) {
            return Err(ConfigError::Validation {
                field: "layer.name".to_string(),
                message: format!("Duplicate layer name '{}'", name),
            });
        }
    }
    Ok(())
}

/// Every `MO(n)` of the resolved keymap must reach an existing layer
pub fn validate_layer_targets(keymap: &KeymapConfig) -> ConfigResult<()> {
    for (number, layer) in keymap.keymap.iter().enumerate() {
        for action in layer.iter().flatten() {
            if let KeyAction::Single(Action::LayerOn(target)) = action {
                if *target as usize >= keymap.keymap.len() {
                    return Err(ConfigError::InvalidValue {
                        field: format!("layer.{}.keys", keymap.layer_label(number)),
                        value: format!("MO({})", target),
                        expected: format!("a layer below {}", keymap.keymap.len()),
                    });
                }
            }
        }
    }
    Ok(())
}
