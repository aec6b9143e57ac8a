//! 16-bit QMK keycodes, as used by VIA-compatible host configurators.
//!
//! The numbers are an interchange encoding, not part of the layout. They can
//! change between firmware versions, so keep them at the host boundary.

use crate::types::action::{Action, KeyAction};
use crate::types::keycode::HidKeyCode;
use crate::types::modifier::ModifierCombination;

const QK_TRANSPARENT: u16 = 0x0001;
const QK_MODS: u16 = 0x0100;
const QK_MODS_MAX: u16 = 0x1FFF;
const QK_MOMENTARY: u16 = 0x5100;
const QK_MOMENTARY_MAX: u16 = 0x51FF;

pub fn to_qmk_keycode(key_action: KeyAction) -> u16 {
    match key_action {
        KeyAction::No => 0x0000,
        KeyAction::Transparent => QK_TRANSPARENT,
        KeyAction::Single(a) => match a {
            Action::Key(k) => k as u16,
            Action::LayerOn(l) => QK_MOMENTARY | l as u16,
            Action::No => 0x0000,
        },
        KeyAction::WithModifier(a, m) => match a {
            // Modifier bits sit right above the basic keycode: S(kc) = 0x0200 | kc, ALGR(kc) = 0x1400 | kc
            Action::Key(k) => (((m.into_bits() & 0x1F) as u16) << 8) | k as u16,
            _ => {
                warn!("Only keys can be sent with modifiers in QMK keycodes");
                0x0000
            }
        },
    }
}

pub fn from_qmk_keycode(qmk_keycode: u16) -> KeyAction {
    match qmk_keycode {
        0x0000 => KeyAction::No,
        QK_TRANSPARENT => KeyAction::Transparent,
        0x0002..=0x00FF => match HidKeyCode::from(qmk_keycode as u8) {
            HidKeyCode::No => KeyAction::No,
            k => KeyAction::Single(Action::Key(k)),
        },
        QK_MODS..=QK_MODS_MAX => {
            let modifiers = ModifierCombination::from_bits((qmk_keycode >> 8) as u8 & 0x1F);
            match HidKeyCode::from((qmk_keycode & 0xFF) as u8) {
                HidKeyCode::No => KeyAction::No,
                k => KeyAction::WithModifier(Action::Key(k), modifiers),
            }
        }
        QK_MOMENTARY..=QK_MOMENTARY_MAX => KeyAction::Single(Action::LayerOn((qmk_keycode & 0xFF) as u8)),
        _ => {
            warn!("QMK keycode {:#06X} is not supported", qmk_keycode);
            KeyAction::No
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fr::*;
    use crate::mo;

    #[test]
    fn test_to_qmk_keycode() {
        // KC_GRV
        assert_eq!(to_qmk_keycode(FR_AROB), 0x0035);
        // S(KC_GRV)
        assert_eq!(to_qmk_keycode(FR_HASH), 0x0235);
        // RALT(KC_E)
        assert_eq!(to_qmk_keycode(FR_EURO), 0x1408);
        // S(RALT(KC_T))
        assert_eq!(to_qmk_keycode(FR_TM), 0x1617);
        assert_eq!(to_qmk_keycode(mo!(2)), 0x5102);
        assert_eq!(to_qmk_keycode(KeyAction::Transparent), 0x0001);
    }

    #[test]
    fn test_from_qmk_keycode() {
        assert_eq!(from_qmk_keycode(0x0014), FR_A);
        assert_eq!(from_qmk_keycode(0x1408), FR_EURO);
        assert_eq!(from_qmk_keycode(0x1617), FR_TM);
        assert_eq!(from_qmk_keycode(0x5103), mo!(3));
        // Unknown basic keycode and unsupported ranges
        assert_eq!(from_qmk_keycode(0x00A5), KeyAction::No);
        assert_eq!(from_qmk_keycode(0x7C00), KeyAction::No);
    }

    #[test]
    fn test_every_binding_survives_encoding() {
        for key in AFNOR_KEYS {
            assert_eq!(from_qmk_keycode(to_qmk_keycode(key.action)), key.action, "{}", key.name);
        }
    }
}
