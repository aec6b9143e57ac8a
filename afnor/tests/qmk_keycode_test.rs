pub mod common;

use afnor::qmk::{from_qmk_keycode, to_qmk_keycode};
use afnor::types::action::KeyAction;
use afnor::*;
use afnor::{a, k, mo};

#[test]
fn test_keymap_to_via() {
    let keymap = [FR_A, FR_HASH, FR_EURO, FR_TM, mo!(1), a!(Transparent), a!(No)];
    let encoded: Vec<u16> = keymap.iter().map(|a| to_qmk_keycode(*a)).collect();
    assert_eq!(encoded, [0x0014, 0x0235, 0x1408, 0x1617, 0x5101, 0x0001, 0x0000]);

    let decoded: Vec<KeyAction> = encoded.into_iter().map(from_qmk_keycode).collect();
    assert_eq!(decoded, keymap);
}

#[test]
fn test_left_alt_is_not_altgr() {
    // LALT(KC_E) has the alt bit without the right bit
    let lalt_e = from_qmk_keycode(0x0408);
    assert_ne!(lalt_e, FR_EURO);
    assert_eq!(lalt_e.keycode(), FR_E.keycode());
    assert_eq!(afnor::lookup::glyph_of(lalt_e), None);
    assert_eq!(to_qmk_keycode(k!(E)), 0x0008);
}
