//! Text rendering of key actions.

use afnor::AFNOR_KEYS;
use afnor::layer::Layer;
use afnor::table::AfnorKey;
use afnor::types::action::{Action, KeyAction};
use afnor::types::keycode::HidKeyCode;
use serde::Serialize;

/// QMK C expression of an action: `KC_A`, `S(ALGR(KC_T))`, `MO(1)`
pub fn qmk_expr(action: KeyAction) -> String {
    match action {
        KeyAction::No => "KC_NO".to_string(),
        KeyAction::Transparent => "KC_TRNS".to_string(),
        KeyAction::Single(a) => action_expr(a),
        KeyAction::WithModifier(a, m) => {
            let inner = action_expr(a);
            match Layer::of(m) {
                Some(Layer::Base) => inner,
                Some(Layer::Shift) => format!("S({})", inner),
                Some(Layer::AltGr) => format!("ALGR({})", inner),
                Some(Layer::ShiftAltGr) => format!("S(ALGR({}))", inner),
                None => format!("WM({}, {:#04x})", inner, m.into_bits()),
            }
        }
    }
}

fn action_expr(action: Action) -> String {
    match action {
        Action::No => "KC_NO".to_string(),
        Action::Key(k) => k.qmk_name().to_string(),
        Action::LayerOn(n) => format!("MO({})", n),
    }
}

/// `FR_*` name of an action, else its QMK expression
pub fn action_name(action: KeyAction) -> String {
    AFNOR_KEYS
        .iter()
        .find(|k| k.action == action)
        .map(|k| k.name.to_string())
        .unwrap_or_else(|| qmk_expr(action))
}

/// One table row as printed by `show --json`
#[derive(Debug, Serialize)]
pub struct RowJson {
    pub name: &'static str,
    pub layer: Layer,
    pub qmk: String,
    pub keycode: u16,
    pub glyph: String,
    pub dead: bool,
}

impl From<&AfnorKey> for RowJson {
    fn from(key: &AfnorKey) -> Self {
        Self {
            name: key.name,
            layer: key.layer,
            qmk: qmk_expr(key.action),
            keycode: afnor::qmk::to_qmk_keycode(key.action),
            glyph: match key.glyph {
                afnor::Glyph::Char(c) => c.to_string(),
                afnor::Glyph::Dead(label) => label.to_string(),
            },
            dead: key.glyph.is_dead(),
        }
    }
}

/// Fixed-width text row: name, layer, QMK expression, glyph
pub fn row_text(key: &AfnorKey) -> String {
    format!(
        "{:<8} {:<12} {:<18} {}",
        key.name,
        key.layer.name(),
        qmk_expr(key.action),
        printable(&key.glyph.to_string())
    )
}

/// Escape control characters and combining marks so they show up in a terminal
pub fn printable(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\n' => "\\n".to_string(),
            '\t' => "\\t".to_string(),
            '\u{300}'..='\u{36F}' => format!("◌{}", c),
            c => c.to_string(),
        })
        .collect()
}

pub fn key_name(key: HidKeyCode) -> &'static str {
    key.into()
}
