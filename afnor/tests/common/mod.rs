use afnor::text::KeyStroke;
use afnor::types::keycode::HidKeyCode;
use afnor::types::modifier::HidModifiers;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub(crate) const KC_LSHIFT: u8 = 1 << 1;
pub(crate) const KC_RSHIFT: u8 = 1 << 5;
pub(crate) const KC_RALT: u8 = 1 << 6;

/// Stroke with a raw HID modifier byte
pub fn stroke(key: HidKeyCode, modifiers: u8) -> KeyStroke {
    KeyStroke::new(key, HidModifiers::from_bits(modifiers))
}
