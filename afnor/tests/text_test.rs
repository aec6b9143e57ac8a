pub mod common;

use afnor::text::{TextError, char_to_strokes, strokes};
use afnor::types::keycode::HidKeyCode;

use crate::common::{KC_LSHIFT, KC_RALT, KC_RSHIFT, stroke};

#[test]
fn test_type_sentence() {
    let typed: Result<Vec<_>, _> = strokes("Ça coûte 5€.").collect();
    // Digit 5 is not on the layout without the canonical keycode
    assert_eq!(typed, Err(TextError::Unmappable('5')));

    let typed: Vec<_> = strokes("Ça coûte €.").collect::<Result<_, _>>().unwrap();
    assert_eq!(
        typed,
        [
            stroke(HidKeyCode::Kc7, KC_LSHIFT),
            stroke(HidKeyCode::Q, 0),
            stroke(HidKeyCode::Space, 0),
            stroke(HidKeyCode::C, 0),
            stroke(HidKeyCode::O, 0),
            // û: circumflex dead key then u
            stroke(HidKeyCode::Equal, 0),
            stroke(HidKeyCode::U, 0),
            stroke(HidKeyCode::T, 0),
            stroke(HidKeyCode::E, 0),
            stroke(HidKeyCode::Space, 0),
            stroke(HidKeyCode::E, KC_RALT),
            stroke(HidKeyCode::M, 0),
        ]
    );
}

#[test]
fn test_shift_altgr_char() {
    // Shift is sent on the right side along with AltGr
    assert_eq!(
        char_to_strokes('™').unwrap().as_slice(),
        &[stroke(HidKeyCode::T, KC_RSHIFT | KC_RALT)]
    );
}

#[test]
fn test_composed_with_diaeresis() {
    // ¨ is Shift on the circumflex key
    assert_eq!(
        char_to_strokes('ï').unwrap().as_slice(),
        &[stroke(HidKeyCode::Equal, KC_LSHIFT), stroke(HidKeyCode::I, 0)]
    );
}

#[test]
fn test_iterator_continues_after_error() {
    let results: Vec<_> = strokes("a中b").collect();
    assert_eq!(
        results,
        [
            Ok(stroke(HidKeyCode::Q, 0)),
            Err(TextError::Unmappable('中')),
            Ok(stroke(HidKeyCode::B, 0)),
        ]
    );
}
