//! HID keyboard page usages.
//!
//! Variants are named after the US legend of the physical key, which is how
//! the HID usage tables name them. On an AFNOR layout the printed character
//! differs: `Grave` prints `@`, `Q` prints `a`, `Semicolon` prints `m`.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr, IntoStaticStr};

use crate::modifier::ModifierCombination;

/// Keycodes of the HID keyboard/keypad page used by the layout.
#[repr(u8)]
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord, FromRepr, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no key.
    No = 0x00,
    A = 0x04,
    B = 0x05,
    C = 0x06,
    D = 0x07,
    E = 0x08,
    F = 0x09,
    G = 0x0A,
    H = 0x0B,
    I = 0x0C,
    J = 0x0D,
    K = 0x0E,
    L = 0x0F,
    M = 0x10,
    N = 0x11,
    O = 0x12,
    P = 0x13,
    Q = 0x14,
    R = 0x15,
    S = 0x16,
    T = 0x17,
    U = 0x18,
    V = 0x19,
    W = 0x1A,
    X = 0x1B,
    Y = 0x1C,
    Z = 0x1D,
    Kc1 = 0x1E,
    Kc2 = 0x1F,
    Kc3 = 0x20,
    Kc4 = 0x21,
    Kc5 = 0x22,
    Kc6 = 0x23,
    Kc7 = 0x24,
    Kc8 = 0x25,
    Kc9 = 0x26,
    Kc0 = 0x27,
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    /// Right of `0` on the number row
    Minus = 0x2D,
    /// Left of `Backspace`
    Equal = 0x2E,
    /// Right of `P`
    LeftBracket = 0x2F,
    RightBracket = 0x30,
    /// ANSI only, above `Enter`
    Backslash = 0x31,
    /// ISO only, left of `Enter` on the home row
    NonusHash = 0x32,
    /// Right of `L`
    Semicolon = 0x33,
    Quote = 0x34,
    /// Left of `1`
    Grave = 0x35,
    Comma = 0x36,
    Dot = 0x37,
    Slash = 0x38,
    CapsLock = 0x39,
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    Right = 0x4F,
    Left = 0x50,
    Down = 0x51,
    Up = 0x52,
    /// ISO only, right of left shift
    NonusBackslash = 0x64,
    Application = 0x65,
    LCtrl = 0xE0,
    LShift = 0xE1,
    LAlt = 0xE2,
    LGui = 0xE3,
    RCtrl = 0xE4,
    RShift = 0xE5,
    /// AltGr on ISO layouts
    RAlt = 0xE6,
    RGui = 0xE7,
}

impl HidKeyCode {
    /// Returns `true` if the keycode is one of the eight modifier keys
    pub fn is_modifier(self) -> bool {
        HidKeyCode::LCtrl <= self && self <= HidKeyCode::RGui
    }

    /// Returns `true` for the keys whose legend changes between layouts
    pub fn is_printable(self) -> bool {
        (HidKeyCode::A <= self && self <= HidKeyCode::Kc0)
            || (HidKeyCode::Minus <= self && self <= HidKeyCode::Slash)
            || self == HidKeyCode::NonusBackslash
    }

    /// Modifier bits held down by a modifier key, empty for other keys.
    pub fn to_modifier(self) -> ModifierCombination {
        match self {
            HidKeyCode::LCtrl => ModifierCombination::new_from(false, false, false, false, true),
            HidKeyCode::LShift => ModifierCombination::new_from(false, false, false, true, false),
            HidKeyCode::LAlt => ModifierCombination::new_from(false, false, true, false, false),
            HidKeyCode::LGui => ModifierCombination::new_from(false, true, false, false, false),
            HidKeyCode::RCtrl => ModifierCombination::new_from(true, false, false, false, true),
            HidKeyCode::RShift => ModifierCombination::new_from(true, false, false, true, false),
            HidKeyCode::RAlt => ModifierCombination::new_from(true, false, true, false, false),
            HidKeyCode::RGui => ModifierCombination::new_from(true, true, false, false, false),
            _ => ModifierCombination::new(),
        }
    }

    /// Name of the keycode in QMK's `KC_*` enumeration
    pub fn qmk_name(self) -> &'static str {
        match self {
            HidKeyCode::No => "KC_NO",
            HidKeyCode::A => "KC_A",
            HidKeyCode::B => "KC_B",
            HidKeyCode::C => "KC_C",
            HidKeyCode::D => "KC_D",
            HidKeyCode::E => "KC_E",
            HidKeyCode::F => "KC_F",
            HidKeyCode::G => "KC_G",
            HidKeyCode::H => "KC_H",
            HidKeyCode::I => "KC_I",
            HidKeyCode::J => "KC_J",
            HidKeyCode::K => "KC_K",
            HidKeyCode::L => "KC_L",
            HidKeyCode::M => "KC_M",
            HidKeyCode::N => "KC_N",
            HidKeyCode::O => "KC_O",
            HidKeyCode::P => "KC_P",
            HidKeyCode::Q => "KC_Q",
            HidKeyCode::R => "KC_R",
            HidKeyCode::S => "KC_S",
            HidKeyCode::T => "KC_T",
            HidKeyCode::U => "KC_U",
            HidKeyCode::V => "KC_V",
            HidKeyCode::W => "KC_W",
            HidKeyCode::X => "KC_X",
            HidKeyCode::Y => "KC_Y",
            HidKeyCode::Z => "KC_Z",
            HidKeyCode::Kc1 => "KC_1",
            HidKeyCode::Kc2 => "KC_2",
            HidKeyCode::Kc3 => "KC_3",
            HidKeyCode::Kc4 => "KC_4",
            HidKeyCode::Kc5 => "KC_5",
            HidKeyCode::Kc6 => "KC_6",
            HidKeyCode::Kc7 => "KC_7",
            HidKeyCode::Kc8 => "KC_8",
            HidKeyCode::Kc9 => "KC_9",
            HidKeyCode::Kc0 => "KC_0",
            HidKeyCode::Enter => "KC_ENT",
            HidKeyCode::Escape => "KC_ESC",
            HidKeyCode::Backspace => "KC_BSPC",
            HidKeyCode::Tab => "KC_TAB",
            HidKeyCode::Space => "KC_SPC",
            HidKeyCode::Minus => "KC_MINS",
            HidKeyCode::Equal => "KC_EQL",
            HidKeyCode::LeftBracket => "KC_LBRC",
            HidKeyCode::RightBracket => "KC_RBRC",
            HidKeyCode::Backslash => "KC_BSLS",
            HidKeyCode::NonusHash => "KC_NUHS",
            HidKeyCode::Semicolon => "KC_SCLN",
            HidKeyCode::Quote => "KC_QUOT",
            HidKeyCode::Grave => "KC_GRV",
            HidKeyCode::Comma => "KC_COMM",
            HidKeyCode::Dot => "KC_DOT",
            HidKeyCode::Slash => "KC_SLSH",
            HidKeyCode::CapsLock => "KC_CAPS",
            HidKeyCode::F1 => "KC_F1",
            HidKeyCode::F2 => "KC_F2",
            HidKeyCode::F3 => "KC_F3",
            HidKeyCode::F4 => "KC_F4",
            HidKeyCode::F5 => "KC_F5",
            HidKeyCode::F6 => "KC_F6",
            HidKeyCode::F7 => "KC_F7",
            HidKeyCode::F8 => "KC_F8",
            HidKeyCode::F9 => "KC_F9",
            HidKeyCode::F10 => "KC_F10",
            HidKeyCode::F11 => "KC_F11",
            HidKeyCode::F12 => "KC_F12",
            HidKeyCode::PrintScreen => "KC_PSCR",
            HidKeyCode::ScrollLock => "KC_SCRL",
            HidKeyCode::Pause => "KC_PAUS",
            HidKeyCode::Insert => "KC_INS",
            HidKeyCode::Home => "KC_HOME",
            HidKeyCode::PageUp => "KC_PGUP",
            HidKeyCode::Delete => "KC_DEL",
            HidKeyCode::End => "KC_END",
            HidKeyCode::PageDown => "KC_PGDN",
            HidKeyCode::Right => "KC_RGHT",
            HidKeyCode::Left => "KC_LEFT",
            HidKeyCode::Down => "KC_DOWN",
            HidKeyCode::Up => "KC_UP",
            HidKeyCode::NonusBackslash => "KC_NUBS",
            HidKeyCode::Application => "KC_APP",
            HidKeyCode::LCtrl => "KC_LCTL",
            HidKeyCode::LShift => "KC_LSFT",
            HidKeyCode::LAlt => "KC_LALT",
            HidKeyCode::LGui => "KC_LGUI",
            HidKeyCode::RCtrl => "KC_RCTL",
            HidKeyCode::RShift => "KC_RSFT",
            HidKeyCode::RAlt => "KC_RALT",
            HidKeyCode::RGui => "KC_RGUI",
        }
    }
}

impl ::postcard::experimental::max_size::MaxSize for HidKeyCode {
    const POSTCARD_MAX_SIZE: usize = 1usize;
}

impl From<u8> for HidKeyCode {
    fn from(value: u8) -> Self {
        Self::from_repr(value).unwrap_or(HidKeyCode::No)
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_from_u8() {
        assert_eq!(HidKeyCode::from(0x35), HidKeyCode::Grave);
        assert_eq!(HidKeyCode::from(0x64), HidKeyCode::NonusBackslash);
        // Usages outside the subset fall back to `No`
        assert_eq!(HidKeyCode::from(0x68), HidKeyCode::No);
        assert_eq!(HidKeyCode::from(0xFF), HidKeyCode::No);
    }

    #[test]
    fn test_modifier_keys() {
        assert!(HidKeyCode::RAlt.is_modifier());
        assert!(!HidKeyCode::Application.is_modifier());
        let altgr = HidKeyCode::RAlt.to_modifier();
        assert!(altgr.alt() && altgr.right());
        assert_eq!(HidKeyCode::A.to_modifier(), ModifierCombination::new());
    }

    #[test]
    fn test_qmk_names_are_unique() {
        for (i, a) in HidKeyCode::iter().enumerate() {
            assert!(a.qmk_name().starts_with("KC_"));
            for b in HidKeyCode::iter().skip(i + 1) {
                assert_ne!(a.qmk_name(), b.qmk_name(), "{:?} and {:?} share a name", a, b);
            }
        }
    }

    #[test]
    fn test_printable() {
        assert!(HidKeyCode::Grave.is_printable());
        assert!(HidKeyCode::NonusHash.is_printable());
        assert!(!HidKeyCode::Enter.is_printable());
        assert!(!HidKeyCode::F1.is_printable());
    }
}
