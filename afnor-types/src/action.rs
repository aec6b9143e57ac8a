//! Key actions.
//!
//! A [`KeyAction`] is what a keymap position holds. The layout constants are
//! all either a plain key or a key with a modifier combination, which is how
//! QMK's `S(kc)` and `ALGR(kc)` wrappers are expressed here.

use serde::{Deserialize, Serialize};

use crate::keycode::HidKeyCode;
use crate::modifier::{ALTGR, ModifierCombination, SHIFT};

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
    /// An action with a modifier combination held while it is active.
    WithModifier(Action, ModifierCombination),
}

impl KeyAction {
    /// Add `modifiers` to the action, merging with the modifiers it already carries.
    ///
    /// Nesting is commutative: `a.shifted().altgr() == a.altgr().shifted()`.
    /// `No` and `Transparent` are returned unchanged.
    pub const fn with_modifier(self, modifiers: ModifierCombination) -> Self {
        match self {
            KeyAction::Single(a) => KeyAction::WithModifier(a, modifiers),
            KeyAction::WithModifier(a, m) => KeyAction::WithModifier(a, m.union(modifiers)),
            other => other,
        }
    }

    pub const fn shifted(self) -> Self {
        self.with_modifier(SHIFT)
    }

    pub const fn altgr(self) -> Self {
        self.with_modifier(ALTGR)
    }

    /// Convert `KeyAction` to the internal `Action`.
    /// Returns `Action::No` for `No` and `Transparent`.
    pub const fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) | KeyAction::WithModifier(a, _) => a,
            _ => Action::No,
        }
    }

    /// The physical key, if the action triggers one
    pub const fn keycode(self) -> Option<HidKeyCode> {
        match self.to_action() {
            Action::Key(k) => Some(k),
            _ => None,
        }
    }

    /// Modifiers carried by the action, empty for a plain action
    pub const fn modifiers(self) -> ModifierCombination {
        match self {
            KeyAction::WithModifier(_, m) => m,
            _ => ModifierCombination::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }
}

impl Default for KeyAction {
    fn default() -> Self {
        KeyAction::No
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// A normal key stroke.
    Key(HidKeyCode),
    /// Activate a layer while held.
    LayerOn(u8),
}
