use std::collections::HashMap;

use afnor::lookup::by_name;
use afnor::table::ShadowReason;
use afnor::types::action::{Action, KeyAction};
use afnor::types::modifier::ModifierCombination;
use afnor::SHADOWED;
use log::{debug, warn};
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::error::{ConfigError, ConfigResult};
use crate::keycode_alias::keycode_from_name;
use crate::{KeymapConfig, KeymapTomlConfig};

// Pest parser using the grammar file
#[derive(Parser)]
#[grammar = "keymap.pest"]
struct KeymapParser;

// Max alias resolution depth to prevent infinite loops
const MAX_ALIAS_RESOLUTION_DEPTH: usize = 10;

impl KeymapTomlConfig {
    /// Resolve every `[[layer]]` into key actions, filling missing keys and layers with `No`/`_`
    pub fn get_keymap_config(&self) -> ConfigResult<KeymapConfig> {
        let layout = &self.layout;
        let keys_per_layer = layout.rows as usize * layout.cols as usize;

        let mut layer_names = HashMap::<String, u8>::new();
        for (number, layer) in self.layer.iter().enumerate() {
            if let Some(name) = &layer.name {
                layer_names.insert(name.clone(), number as u8);
            }
        }

        let mut keymap = Vec::with_capacity(layout.layers as usize);
        for (number, layer) in self.layer.iter().enumerate() {
            let label = layer.name.clone().unwrap_or_else(|| number.to_string());
            let keys = alias_resolver(&layer.keys, &self.aliases).map_err(|message| ConfigError::Validation {
                field: format!("layer.{}.keys", label),
                message,
            })?;
            let actions = keymap_parser(&keys, &label, &layer_names)?;
            if actions.len() > keys_per_layer {
                return Err(ConfigError::Validation {
                    field: format!("layer.{}.keys", label),
                    message: format!(
                        "{} keys for a {}x{} layout",
                        actions.len(),
                        layout.rows,
                        layout.cols
                    ),
                });
            }
            if actions.len() < keys_per_layer {
                warn!(
                    "Layer {} has {} of {} keys, the rest are No",
                    label,
                    actions.len(),
                    keys_per_layer
                );
            }
            keymap.push(to_grid(actions, layout.rows, layout.cols, KeyAction::No));
        }

        // Layers declared in `layout.layers` without a `[[layer]]` entry
        for _ in self.layer.len()..layout.layers as usize {
            keymap.push(to_grid(Vec::new(), layout.rows, layout.cols, KeyAction::Transparent));
        }

        debug!("Resolved {} layers of {}x{} keys", keymap.len(), layout.rows, layout.cols);
        Ok(KeymapConfig {
            rows: layout.rows,
            cols: layout.cols,
            layer_names: self.layer.iter().map(|l| l.name.clone()).collect(),
            keymap,
        })
    }
}

fn to_grid(actions: Vec<KeyAction>, rows: u8, cols: u8, fill: KeyAction) -> Vec<Vec<KeyAction>> {
    let mut actions = actions.into_iter();
    (0..rows)
        .map(|_| (0..cols).map(|_| actions.next().unwrap_or(fill)).collect())
        .collect()
}

/// Characters that end an `@alias` reference, besides whitespace
pub(crate) const ALIAS_DELIMITERS: [char; 4] = ['(', ')', ',', '|'];

/// Replace each `@alias` with its value until none is left.
///
/// A reference may appear anywhere in an expression, `S(@euro)` included.
pub(crate) fn alias_resolver(keys: &str, aliases: &HashMap<String, String>) -> Result<String, String> {
    let mut current = keys.to_string();

    for _ in 0..MAX_ALIAS_RESOLUTION_DEPTH {
        if !current.contains('@') {
            return Ok(current);
        }
        let mut next = String::with_capacity(current.len());
        let mut rest = current.as_str();
        while let Some(at) = rest.find('@') {
            next.push_str(&rest[..at]);
            let after = &rest[at + 1..];
            let end = after
                .find(|c: char| c.is_whitespace() || ALIAS_DELIMITERS.contains(&c))
                .unwrap_or(after.len());
            let alias = &after[..end];
            if alias.is_empty() {
                return Err(format!("Empty alias name in '{}'", keys));
            }
            match aliases.get(alias) {
                Some(value) => next.push_str(value),
                None => return Err(format!("Undefined alias: {}", alias)),
            }
            rest = &after[end..];
        }
        next.push_str(rest);
        current = next;
    }

    Err(format!(
        "Alias resolution exceeded maximum depth ({}), potential infinite loop detected in '{}'",
        MAX_ALIAS_RESOLUTION_DEPTH, keys
    ))
}

fn keymap_parser(layer_keys: &str, layer: &str, layer_names: &HashMap<String, u8>) -> ConfigResult<Vec<KeyAction>> {
    let pairs = KeymapParser::parse(Rule::key_map, layer_keys).map_err(|e| ConfigError::Validation {
        field: format!("layer.{}.keys", layer),
        message: format!("Invalid keymap format: {}", e),
    })?;

    let mut key_action_sequence = Vec::new();
    for pair in pairs {
        // Should only be one pair matching Rule::key_map
        if pair.as_rule() == Rule::key_map {
            for inner_pair in pair.into_inner() {
                if inner_pair.as_rule() != Rule::EOI {
                    key_action_sequence.push(parse_action(inner_pair, layer, layer_names)?);
                }
            }
        }
    }
    Ok(key_action_sequence)
}

fn parse_action(pair: Pair<Rule>, layer: &str, layer_names: &HashMap<String, u8>) -> ConfigResult<KeyAction> {
    let text = pair.as_str().to_string();
    match pair.as_rule() {
        Rule::no_action => Ok(KeyAction::No),
        Rule::transparent_action => Ok(KeyAction::Transparent),
        Rule::fr_name => parse_fr_name(&text, layer),
        Rule::simple_keycode => keycode_from_name(&text)
            .map(|k| KeyAction::Single(Action::Key(k)))
            .ok_or(ConfigError::UnknownKey {
                layer: layer.to_string(),
                key: text,
            }),
        Rule::shifted_action | Rule::altgr_action => {
            let rule = pair.as_rule();
            let inner = first_inner(pair, layer)?;
            let action = key_only(parse_action(inner, layer, layer_names)?, &text, layer)?;
            Ok(if rule == Rule::shifted_action {
                action.shifted()
            } else {
                action.altgr()
            })
        }
        Rule::wm_action => {
            let mut inner = pair.into_inner();
            let (Some(action), Some(modifiers)) = (inner.next(), inner.next()) else {
                return Err(invalid_key(&text, layer, "WM(key, modifiers)"));
            };
            let action = key_only(parse_action(action, layer, layer_names)?, &text, layer)?;
            let modifiers = parse_modifiers(modifiers, layer)?;
            Ok(action.with_modifier(modifiers))
        }
        Rule::mo_action => {
            let target = first_inner(pair, layer)?;
            let number = match target.as_rule() {
                Rule::layer_name => *layer_names
                    .get(target.as_str())
                    .ok_or_else(|| invalid_key(&text, layer, "a layer number or the name of a [[layer]]"))?,
                _ => target
                    .as_str()
                    .parse::<u8>()
                    .map_err(|_| invalid_key(&text, layer, "a layer number from 0 to 255"))?,
            };
            Ok(KeyAction::Single(Action::LayerOn(number)))
        }
        rule => Err(ConfigError::Validation {
            field: format!("layer.{}.keys", layer),
            message: format!("Unexpected rule encountered during layer.keys processing: {:?}", rule),
        }),
    }
}

fn parse_fr_name(name: &str, layer: &str) -> ConfigResult<KeyAction> {
    if let Some(key) = by_name(name) {
        return Ok(key.action);
    }
    match SHADOWED.iter().find(|s| s.name == name) {
        Some(s) if s.reason == ShadowReason::Canonical => {
            let digit = name.trim_start_matches("FR_");
            Err(invalid_key(
                name,
                layer,
                &format!("the keycode Kc{}, {} is not on this layout and Shift on that key prints {}", digit, name, s.glyph),
            ))
        }
        _ => Err(ConfigError::UnknownKey {
            layer: layer.to_string(),
            key: name.to_string(),
        }),
    }
}

fn parse_modifiers(pair: Pair<Rule>, layer: &str) -> ConfigResult<ModifierCombination> {
    let mut combination = ModifierCombination::new();
    let mut sides = (false, false);
    for modifier in pair.into_inner() {
        let name = modifier.as_str();
        let keycode = keycode_from_name(name)
            .filter(|k| k.is_modifier())
            .ok_or_else(|| invalid_key(name, layer, "a modifier such as LShift or RAlt"))?;
        let m = keycode.to_modifier();
        if m.right() {
            sides.1 = true;
        } else {
            sides.0 = true;
        }
        combination = combination | m;
    }
    if sides.0 && sides.1 {
        warn!(
            "Layer {}: left and right modifiers can't be mixed, all of {:?} are sent as right modifiers",
            layer, combination
        );
    }
    Ok(combination)
}

fn first_inner<'a>(pair: Pair<'a, Rule>, layer: &str) -> ConfigResult<Pair<'a, Rule>> {
    let text = pair.as_str().to_string();
    pair.into_inner()
        .next()
        .ok_or_else(|| invalid_key(&text, layer, "an argument"))
}

/// Only keys take modifiers: `S(_)` or `S(MO(1))` have no meaning
fn key_only(action: KeyAction, text: &str, layer: &str) -> ConfigResult<KeyAction> {
    match action.keycode() {
        Some(_) => Ok(action),
        None => Err(invalid_key(text, layer, "a key inside the modifier wrapper")),
    }
}

fn invalid_key(value: &str, layer: &str, expected: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: format!("layer.{}.keys", layer),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

#[cfg(test)]
mod test {
    use afnor::types::keycode::HidKeyCode;
    use afnor::types::modifier::{ALTGR, SHIFT};
    use afnor::*;

    use super::*;

    fn parse(keys: &str) -> ConfigResult<Vec<KeyAction>> {
        let layer_names = HashMap::from([("symbols".to_string(), 1)]);
        keymap_parser(keys, "base", &layer_names)
    }

    #[test]
    fn test_parse_fr_names_and_keycodes() {
        let actions = parse("FR_A FR_EACU A KC_GRV spc").unwrap();
        assert_eq!(
            actions,
            [
                FR_A,
                FR_EACU,
                KeyAction::Single(Action::Key(HidKeyCode::A)),
                KeyAction::Single(Action::Key(HidKeyCode::Grave)),
                KeyAction::Single(Action::Key(HidKeyCode::Space)),
            ]
        );
    }

    #[test]
    fn test_parse_wrappers() {
        let actions = parse("S(FR_AROB) ALGR(FR_E) S(ALGR(FR_T)) WM(Kc4, RShift | RAlt)").unwrap();
        assert_eq!(
            actions,
            [
                FR_HASH,
                FR_EURO,
                FR_TM,
                KeyAction::WithModifier(Action::Key(HidKeyCode::Kc4), SHIFT | ALTGR),
            ]
        );
    }

    #[test]
    fn test_parse_special_actions() {
        let actions = parse("_ __ Trns No NonusHash MO(2) MO(symbols)").unwrap();
        assert_eq!(
            actions,
            [
                KeyAction::Transparent,
                KeyAction::Transparent,
                KeyAction::Transparent,
                KeyAction::No,
                KeyAction::Single(Action::Key(HidKeyCode::NonusHash)),
                KeyAction::Single(Action::LayerOn(2)),
                KeyAction::Single(Action::LayerOn(1)),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse("FR_A FR_NOPE"),
            Err(ConfigError::UnknownKey {
                layer: "base".to_string(),
                key: "FR_NOPE".to_string()
            })
        );
        assert_eq!(
            parse("FR_1"),
            Err(ConfigError::InvalidValue {
                field: "layer.base.keys".to_string(),
                value: "FR_1".to_string(),
                expected: "the keycode Kc1, FR_1 is not on this layout and Shift on that key prints À".to_string(),
            })
        );
        assert!(matches!(parse("S(_)"), Err(ConfigError::InvalidValue { .. })));
        assert!(matches!(parse("WM(A, Space)"), Err(ConfigError::InvalidValue { .. })));
        assert!(matches!(parse("MO(numbers)"), Err(ConfigError::InvalidValue { .. })));
        assert!(matches!(parse("S(FR_A"), Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_alias_resolver() {
        let aliases = HashMap::from([
            ("euro".to_string(), "ALGR(FR_E)".to_string()),
            ("money".to_string(), "@euro FR_DLR".to_string()),
            ("loop".to_string(), "@loop".to_string()),
        ]);
        assert_eq!(alias_resolver("FR_A @money", &aliases).unwrap(), "FR_A ALGR(FR_E) FR_DLR");
        assert!(alias_resolver("@loop", &aliases).is_err());
        assert_eq!(alias_resolver("@nope", &aliases), Err("Undefined alias: nope".to_string()));
    }

    #[test]
    fn test_alias_inside_wrappers() {
        let aliases = HashMap::from([
            ("euro".to_string(), "ALGR(FR_E)".to_string()),
            ("key".to_string(), "Kc4".to_string()),
            ("mods".to_string(), "RShift | RAlt".to_string()),
            ("sym".to_string(), "symbols".to_string()),
        ]);
        assert_eq!(alias_resolver("S(@euro)", &aliases).unwrap(), "S(ALGR(FR_E))");
        assert_eq!(alias_resolver("WM(@key, RAlt)", &aliases).unwrap(), "WM(Kc4, RAlt)");
        assert_eq!(alias_resolver("WM(@key,@mods)", &aliases).unwrap(), "WM(Kc4,RShift | RAlt)");
        assert_eq!(alias_resolver("MO(@sym)", &aliases).unwrap(), "MO(symbols)");
        assert_eq!(alias_resolver("WM(A, LShift|@nope)", &aliases), Err("Undefined alias: nope".to_string()));
        assert!(alias_resolver("S(@)", &aliases).is_err());

        let actions = parse(&alias_resolver("S(@euro) WM(@key, RAlt) MO(@sym)", &aliases).unwrap()).unwrap();
        assert_eq!(
            actions,
            [
                FR_EURO.shifted(),
                KeyAction::WithModifier(Action::Key(HidKeyCode::Kc4), ALTGR),
                KeyAction::Single(Action::LayerOn(1)),
            ]
        );
    }
}
