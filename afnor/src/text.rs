//! Turn text into the keystrokes that type it on an AFNOR host.
//!
//! Characters without a key of their own are composed through a dead key:
//! `ê` is the circumflex dead key followed by `e`, and a spacing accent like
//! `^` is the dead key followed by space.

use core::fmt;
use core::str::Chars;

use heapless::Vec;

use crate::fr::{AFNOR_KEYS, FR_ACIR, FR_ACUT, FR_GRV, FR_TILD, FR_TREM};
use crate::layer::Layer;
use crate::lookup::from_char;
use crate::table::Glyph;
use crate::types::action::KeyAction;
use crate::types::keycode::HidKeyCode;
use crate::types::modifier::{HidModifiers, ModifierCombination};

/// Most strokes a single character needs: dead key, then base letter
pub const MAX_STROKES_PER_CHAR: usize = 2;

/// One key press with the modifiers held during it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyStroke {
    pub key: HidKeyCode,
    pub modifiers: HidModifiers,
}

impl KeyStroke {
    pub fn new(key: HidKeyCode, modifiers: HidModifiers) -> Self {
        Self { key, modifiers }
    }

    /// Stroke for a key action, `None` if the action presses no key
    pub fn from_action(action: KeyAction) -> Option<Self> {
        let key = action.keycode()?;
        Some(Self::new(key, action.modifiers().to_hid_modifiers()))
    }

    /// Shift state the held modifiers select, `None` with Ctrl, GUI or left Alt held
    pub fn layer(&self) -> Option<Layer> {
        Layer::of(ModifierCombination::from_hid_modifiers(self.modifiers))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextError {
    /// No key or dead key sequence produces the character
    Unmappable(char),
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::Unmappable(c) => write!(f, "no key sequence types {:?} (U+{:04X})", c, *c as u32),
        }
    }
}

/// A dead key and what it makes of each base letter: `bases[i]` becomes `composed[i]`.
struct Composition {
    dead: KeyAction,
    bases: &'static str,
    composed: &'static str,
}

const COMPOSITIONS: &[Composition] = &[
    Composition {
        dead: FR_ACIR,
        bases: "aeiouyAEIOUY",
        composed: "âêîôûŷÂÊÎÔÛŶ",
    },
    Composition {
        dead: FR_TREM,
        bases: "aeiouyAEIOUY",
        composed: "äëïöüÿÄËÏÖÜŸ",
    },
    Composition {
        dead: FR_ACUT,
        bases: "aeiouyAEIOUY",
        composed: "áéíóúýÁÉÍÓÚÝ",
    },
    Composition {
        dead: FR_GRV,
        bases: "aeiouAEIOU",
        composed: "àèìòùÀÈÌÒÙ",
    },
    Composition {
        dead: FR_TILD,
        bases: "anoANO",
        composed: "ãñõÃÑÕ",
    },
];

/// Accents typed as dead key then space
const SPACING_ACCENTS: &str = "^¨´`~¸˘¯˚ˇ˙˝˛";

/// Keystrokes typing `c`.
pub fn char_to_strokes(c: char) -> Result<Vec<KeyStroke, MAX_STROKES_PER_CHAR>, TextError> {
    let mut strokes = Vec::new();
    if let Some(stroke) = from_char(c).and_then(KeyStroke::from_action) {
        push(&mut strokes, stroke, c)?;
        return Ok(strokes);
    }

    if let Some((dead, base)) = decompose(c) {
        let dead = KeyStroke::from_action(dead).ok_or(TextError::Unmappable(c))?;
        let base = from_char(base)
            .and_then(KeyStroke::from_action)
            .ok_or(TextError::Unmappable(c))?;
        push(&mut strokes, dead, c)?;
        push(&mut strokes, base, c)?;
        return Ok(strokes);
    }

    if SPACING_ACCENTS.contains(c) {
        if let Some(dead) = dead_key_for(c).and_then(KeyStroke::from_action) {
            push(&mut strokes, dead, c)?;
            push(&mut strokes, KeyStroke::new(HidKeyCode::Space, HidModifiers::new()), c)?;
            return Ok(strokes);
        }
    }

    warn!("No key sequence for {}", c);
    Err(TextError::Unmappable(c))
}

/// Iterate over the keystrokes typing `text`.
///
/// An unmappable character yields one `Err` and the iteration goes on with the next one.
pub fn strokes(text: &str) -> Strokes<'_> {
    Strokes {
        chars: text.chars(),
        pending: Vec::new(),
        next: 0,
    }
}

pub struct Strokes<'a> {
    chars: Chars<'a>,
    pending: Vec<KeyStroke, MAX_STROKES_PER_CHAR>,
    next: usize,
}

impl Iterator for Strokes<'_> {
    type Item = Result<KeyStroke, TextError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(stroke) = self.pending.get(self.next) {
                self.next += 1;
                return Some(Ok(*stroke));
            }
            let c = self.chars.next()?;
            match char_to_strokes(c) {
                Ok(pending) => {
                    self.pending = pending;
                    self.next = 0;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Every sequence is a dead key and a base at most, so a full buffer can't happen.
fn push(strokes: &mut Vec<KeyStroke, MAX_STROKES_PER_CHAR>, stroke: KeyStroke, c: char) -> Result<(), TextError> {
    strokes.push(stroke).map_err(|_| TextError::Unmappable(c))
}

/// Dead key and base letter composing `c`
fn decompose(c: char) -> Option<(KeyAction, char)> {
    COMPOSITIONS.iter().find_map(|comp| {
        comp.composed
            .chars()
            .position(|composed| composed == c)
            .and_then(|i| comp.bases.chars().nth(i))
            .map(|base| (comp.dead, base))
    })
}

/// Dead key engraved with the accent `c`
fn dead_key_for(c: char) -> Option<KeyAction> {
    AFNOR_KEYS.iter().find_map(|k| match k.glyph {
        Glyph::Dead(label) if label.chars().eq(core::iter::once(c)) => Some(k.action),
        _ => None,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fr::*;

    fn stroke(action: KeyAction) -> KeyStroke {
        KeyStroke::from_action(action).unwrap()
    }

    #[test]
    fn test_direct_char() {
        let strokes = char_to_strokes('é').unwrap();
        assert_eq!(strokes.as_slice(), &[stroke(FR_EACU)]);
        assert_eq!(strokes[0].key, HidKeyCode::Kc2);
        assert_eq!(strokes[0].modifiers, HidModifiers::new());
    }

    #[test]
    fn test_composed_char() {
        let strokes = char_to_strokes('ê').unwrap();
        assert_eq!(strokes.as_slice(), &[stroke(FR_ACIR), stroke(FR_E)]);

        let strokes = char_to_strokes('Ñ').unwrap();
        assert_eq!(strokes.as_slice(), &[stroke(FR_TILD), stroke(FR_N.shifted())]);
    }

    #[test]
    fn test_spacing_accent() {
        let strokes = char_to_strokes('^').unwrap();
        assert_eq!(strokes[0], stroke(FR_ACIR));
        assert_eq!(strokes[1].key, HidKeyCode::Space);
    }

    #[test]
    fn test_stroke_layer() {
        assert_eq!(stroke(FR_E).layer(), Some(Layer::Base));
        assert_eq!(stroke(FR_N.shifted()).layer(), Some(Layer::Shift));
        assert_eq!(stroke(FR_EURO).layer(), Some(Layer::AltGr));
        assert_eq!(stroke(FR_TM).layer(), Some(Layer::ShiftAltGr));
        let ctrl = HidModifiers::new().with_left_ctrl(true);
        assert_eq!(KeyStroke::new(HidKeyCode::C, ctrl).layer(), None);
        let left_alt = HidModifiers::new().with_left_alt(true);
        assert_eq!(KeyStroke::new(HidKeyCode::E, left_alt).layer(), None);
    }

    #[test]
    fn test_every_composition_is_typable() {
        for c in COMPOSITIONS.iter().flat_map(|c| c.composed.chars()) {
            assert!(char_to_strokes(c).is_ok(), "{}", c);
        }
    }

    #[test]
    fn test_unmappable() {
        assert_eq!(char_to_strokes('1'), Err(TextError::Unmappable('1')));
        assert_eq!(char_to_strokes('中'), Err(TextError::Unmappable('中')));
    }

    #[test]
    fn test_strokes_iterator() {
        let mut it = strokes("Où ê1");
        assert_eq!(it.next(), Some(Ok(stroke(FR_O.shifted()))));
        assert_eq!(it.next(), Some(Ok(stroke(FR_UGRV))));
        assert_eq!(it.next().map(|s| s.map(|s| s.key)), Some(Ok(HidKeyCode::Space)));
        assert_eq!(it.next(), Some(Ok(stroke(FR_ACIR))));
        assert_eq!(it.next(), Some(Ok(stroke(FR_E))));
        assert_eq!(it.next(), Some(Err(TextError::Unmappable('1'))));
        assert_eq!(it.next(), None);
    }
}
