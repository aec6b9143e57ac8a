//! Rows of the layout table.

use core::fmt;

use crate::layer::Layer;
use crate::types::action::KeyAction;

/// What a binding prints.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// A printing key
    Char(char),
    /// A dead key, with the accent or label engraved on the keycap.
    /// It prints nothing alone and modifies the next keystroke.
    Dead(&'static str),
}

impl Glyph {
    pub fn as_char(self) -> Option<char> {
        match self {
            Glyph::Char(c) => Some(c),
            Glyph::Dead(_) => None,
        }
    }

    pub fn is_dead(self) -> bool {
        matches!(self, Glyph::Dead(_))
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Char(c) => write!(f, "{}", c),
            Glyph::Dead(label) => write!(f, "{} (dead)", label),
        }
    }
}

/// One active binding: a symbolic name for a physical key in a shift state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AfnorKey {
    pub name: &'static str,
    pub layer: Layer,
    pub action: KeyAction,
    pub glyph: Glyph,
}

/// Why a binding is left out of the active table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShadowReason {
    /// The name reads like a canonical keycode name (`FR_1` vs `KC_1`)
    /// while the key prints something else.
    Canonical,
    /// An active binding in another layer already owns the name.
    NameTaken,
    /// An active binding already prints the same character.
    CharTaken,
}

/// A binding that is deliberately inactive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Shadowed {
    pub name: &'static str,
    pub action: KeyAction,
    pub glyph: Glyph,
    pub reason: ShadowReason,
}

/// Declare the layout: one `pub const` per binding, plus the `AFNOR_KEYS` table.
///
/// Every name becomes a constant, so a duplicated name fails to compile.
macro_rules! afnor_layout {
    ($(
        $layer:ident {
            $($(#[$meta:meta])* $name:ident = $action:expr => $kind:ident($glyph:expr);)*
        }
    )*) => {
        $($(
            $(#[$meta])*
            pub const $name: $crate::types::action::KeyAction = $action;
        )*)*

        /// All active bindings, grouped by layer in declaration order.
        pub static AFNOR_KEYS: &[$crate::table::AfnorKey] = &[
            $($(
                $crate::table::AfnorKey {
                    name: stringify!($name),
                    layer: $crate::layer::Layer::$layer,
                    action: $name,
                    glyph: $crate::table::Glyph::$kind($glyph),
                },
            )*)*
        ];
    };
}

pub(crate) use afnor_layout;
