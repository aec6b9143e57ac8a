//! Forward and reverse lookups over [`AFNOR_KEYS`].

use crate::fr::{AFNOR_KEYS, SHADOWED};
use crate::layer::Layer;
use crate::table::{AfnorKey, Glyph};
use crate::types::action::{Action, KeyAction};
use crate::types::keycode::HidKeyCode;

/// Find a binding by its `FR_*` name.
pub fn by_name(name: &str) -> Option<&'static AfnorKey> {
    AFNOR_KEYS.iter().find(|k| k.name == name)
}

/// All bindings of one layer, in declaration order
pub fn entries(layer: Layer) -> impl Iterator<Item = &'static AfnorKey> {
    AFNOR_KEYS.iter().filter(move |k| k.layer == layer)
}

/// The binding of a physical key in a layer
pub fn binding(key: HidKeyCode, layer: Layer) -> Option<&'static AfnorKey> {
    AFNOR_KEYS
        .iter()
        .find(|k| k.layer == layer && k.action.keycode() == Some(key))
}

/// What the host prints for `action`.
///
/// Positions without an active binding fall back to their [`SHADOWED`]
/// definition, then to the capital of a base-layer letter when Shift is held,
/// then to the whitespace keys, which are the same on every layout.
pub fn glyph_of(action: KeyAction) -> Option<Glyph> {
    let key = action.keycode()?;
    let layer = Layer::of(action.modifiers())?;
    if let Some(k) = binding(key, layer) {
        return Some(k.glyph);
    }
    if let Some(s) = SHADOWED
        .iter()
        .find(|s| s.action.keycode() == Some(key) && Layer::of(s.action.modifiers()) == Some(layer))
    {
        return Some(s.glyph);
    }
    match layer {
        Layer::Base => whitespace_char(key).map(Glyph::Char),
        Layer::Shift => binding(key, Layer::Base)
            .and_then(|k| k.glyph.as_char())
            .and_then(single_uppercase)
            .map(Glyph::Char),
        _ => None,
    }
}

/// The key action that prints `c`, the reverse of [`glyph_of`].
///
/// When two keys print the same character, the first declared wins. Dead keys
/// are never returned: they print nothing on their own.
pub fn from_char(c: char) -> Option<KeyAction> {
    if let Some(k) = AFNOR_KEYS.iter().find(|k| k.glyph == Glyph::Char(c)) {
        return Some(k.action);
    }
    if let Some(lower) = single_lowercase(c) {
        if let Some(k) = binding_for_char(lower, Layer::Base) {
            return Some(k.action.shifted());
        }
    }
    whitespace_key(c).map(|k| KeyAction::Single(Action::Key(k)))
}

fn binding_for_char(c: char, layer: Layer) -> Option<&'static AfnorKey> {
    entries(layer).find(|k| k.glyph == Glyph::Char(c))
}

/// Capital of a lowercase letter, when it is a single char
fn single_uppercase(c: char) -> Option<char> {
    if !c.is_lowercase() {
        return None;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if u != c => Some(u),
        _ => None,
    }
}

fn single_lowercase(c: char) -> Option<char> {
    if !c.is_uppercase() {
        return None;
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l != c => Some(l),
        _ => None,
    }
}

fn whitespace_char(key: HidKeyCode) -> Option<char> {
    match key {
        HidKeyCode::Space => Some(' '),
        HidKeyCode::Enter => Some('\n'),
        HidKeyCode::Tab => Some('\t'),
        _ => None,
    }
}

fn whitespace_key(c: char) -> Option<HidKeyCode> {
    match c {
        ' ' => Some(HidKeyCode::Space),
        '\n' => Some(HidKeyCode::Enter),
        '\t' => Some(HidKeyCode::Tab),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fr::*;
    use crate::k;

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("FR_EACU").map(|k| k.action), Some(FR_EACU));
        assert_eq!(by_name("FR_1"), None);
        assert_eq!(by_name("fr_eacu"), None);
    }

    #[test]
    fn test_glyph_of() {
        assert_eq!(glyph_of(FR_AROB), Some(Glyph::Char('@')));
        assert_eq!(glyph_of(FR_ACIR), Some(Glyph::Dead("^")));
        assert_eq!(glyph_of(FR_QRTR), Some(Glyph::Char('¼')));
        assert_eq!(glyph_of(k!(Space)), Some(Glyph::Char(' ')));
    }

    #[test]
    fn test_shifted_letters_are_capitals() {
        assert_eq!(glyph_of(FR_A.shifted()), Some(Glyph::Char('A')));
        assert_eq!(glyph_of(FR_EACU.shifted()), Some(Glyph::Char('É')));
        assert_eq!(glyph_of(FR_CCED.shifted()), Some(Glyph::Char('Ç')));
        // Named Shift bindings take precedence
        assert_eq!(glyph_of(FR_RSQU.shifted()), Some(Glyph::Char('8')));
        // Not a letter
        assert_eq!(glyph_of(FR_LPRN.shifted()), Some(Glyph::Char('[')));
        assert_eq!(glyph_of(FR_SLSH.shifted().altgr().shifted()), Some(Glyph::Char('√')));
        assert_eq!(glyph_of(FR_M.altgr().shifted()), None);
    }

    #[test]
    fn test_shadowed_positions_print_their_glyph() {
        for s in SHADOWED {
            assert_eq!(glyph_of(s.action), Some(s.glyph), "{}", s.name);
        }
        assert_eq!(glyph_of(FR_DQUO.shifted()), Some(Glyph::Char('…')));
        assert_eq!(glyph_of(FR_AGRV.shifted()), Some(Glyph::Char('À')));
        assert_eq!(glyph_of(FR_C.altgr()), Some(Glyph::Char('ç')));
        // Active bindings come first
        assert_eq!(from_char('ç'), Some(FR_CCED));
        assert_eq!(from_char('…'), Some(FR_3PTS));
    }

    #[test]
    fn test_from_char() {
        assert_eq!(from_char('a'), Some(FR_A));
        assert_eq!(from_char('A'), Some(FR_A.shifted()));
        assert_eq!(from_char('È'), Some(FR_EGRV.shifted()));
        assert_eq!(from_char('™'), Some(FR_TM));
        assert_eq!(from_char('\n'), Some(k!(Enter)));
        // `{` is on two keys, the first declared wins
        assert_eq!(from_char('{'), Some(FR_LACL));
        // Dead key labels are not characters
        assert_eq!(from_char('^'), None);
        assert_eq!(from_char('1'), None);
    }

    #[test]
    fn test_entries() {
        assert!(entries(Layer::Shift).all(|k| k.action.modifiers().has_shift()));
        assert_eq!(entries(Layer::Base).next().map(|k| k.name), Some("FR_AROB"));
    }
}
