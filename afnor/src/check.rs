//! Consistency checks of the layout table.

use core::fmt;

use crate::fr::{AFNOR_KEYS, SHADOWED};
use crate::layer::Layer;
use crate::table::{AfnorKey, ShadowReason, Shadowed};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// Two active rows share a name
    DuplicateName(&'static str),
    /// A non-base row sits on a key with no base-layer row
    MissingBase(&'static str),
    /// A row sits on a key whose legend doesn't depend on the layout
    NonPrintingKey(&'static str),
    /// The row's modifiers don't select the row's layer
    LayerMismatch { name: &'static str, layer: Layer },
    /// Two active rows bind the same key in the same layer
    ConflictingBinding(&'static str, &'static str),
    /// A shadowed definition whose recorded reason doesn't hold
    ShadowReason { name: &'static str, reason: ShadowReason },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::DuplicateName(name) => write!(f, "{} is defined twice", name),
            LayoutError::MissingBase(name) => write!(f, "{} is on a key without a base-layer binding", name),
            LayoutError::NonPrintingKey(name) => write!(f, "{} is on a key that prints the same on every layout", name),
            LayoutError::LayerMismatch { name, layer } => {
                write!(f, "{} is in the {} layer but its modifiers select another one", name, layer.name())
            }
            LayoutError::ConflictingBinding(a, b) => write!(f, "{} and {} bind the same key", a, b),
            LayoutError::ShadowReason { name, reason } => {
                write!(f, "{} is shadowed as {:?} but nothing collides with it", name, reason)
            }
        }
    }
}

/// Check the built-in layout.
pub fn check_layout() -> Result<(), LayoutError> {
    check_table(AFNOR_KEYS, SHADOWED)?;
    debug!("Layout checked: {} bindings, {} shadowed", AFNOR_KEYS.len(), SHADOWED.len());
    Ok(())
}

/// Check a layout table and its shadowed definitions, stopping at the first error.
pub fn check_table(keys: &[AfnorKey], shadowed: &[Shadowed]) -> Result<(), LayoutError> {
    for (i, key) in keys.iter().enumerate() {
        if Layer::of(key.action.modifiers()) != Some(key.layer) {
            return Err(LayoutError::LayerMismatch {
                name: key.name,
                layer: key.layer,
            });
        }

        let code = key.action.keycode().ok_or(LayoutError::MissingBase(key.name))?;
        if !code.is_printable() {
            return Err(LayoutError::NonPrintingKey(key.name));
        }
        if key.layer != Layer::Base
            && !keys
                .iter()
                .any(|k| k.layer == Layer::Base && k.action.keycode() == Some(code))
        {
            return Err(LayoutError::MissingBase(key.name));
        }

        for other in &keys[i + 1..] {
            if other.name == key.name {
                return Err(LayoutError::DuplicateName(key.name));
            }
            if other.layer == key.layer && other.action.keycode() == Some(code) {
                return Err(LayoutError::ConflictingBinding(key.name, other.name));
            }
        }
    }

    for s in shadowed {
        if !shadow_reason_holds(keys, s) {
            return Err(LayoutError::ShadowReason {
                name: s.name,
                reason: s.reason,
            });
        }
    }
    Ok(())
}

/// The shadowed position must be free, so its glyph is what the host prints there.
fn shadow_reason_holds(keys: &[AfnorKey], s: &Shadowed) -> bool {
    let position_taken = keys.iter().any(|k| {
        k.action.keycode() == s.action.keycode() && Layer::of(k.action.modifiers()) == Layer::of(s.action.modifiers())
    });
    if position_taken {
        return false;
    }
    let active = keys.iter().find(|k| k.name == s.name);
    match s.reason {
        ShadowReason::Canonical => active.is_none() && names_canonical_key(s.name),
        ShadowReason::NameTaken => active.is_some_and(|k| k.action != s.action),
        ShadowReason::CharTaken => active.is_none() && keys.iter().any(|k| k.glyph == s.glyph),
    }
}

/// `FR_1` reads like the canonical `KC_1`
fn names_canonical_key(name: &str) -> bool {
    name.strip_prefix("FR_")
        .is_some_and(|digit| digit.len() == 1 && digit.as_bytes()[0].is_ascii_digit())
}
