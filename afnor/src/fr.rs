//! French AZERTY, AFNOR NF Z71-300 ("frgo" variant).
//!
//! Each `FR_*` constant is the key action that prints the named character
//! when the host OS is set to the AFNOR layout. The physical key is the
//! HID usage, named after its US legend, so `FR_A` is `k!(Q)`.
//!
//! Base layer, by row:
//!
//! | row | keys |
//! | --- | --- |
//! | 1 | `@ à é è & ( ) ç ’ « » ' ^` |
//! | 2 | `a z e r t y u i o p - +` |
//! | 3 | `q s d f g h j k l m / *` |
//! | 4 | `< w x c v b n . , " =` |
//!
//! Letters and the accented letters of row 1 give their capital with Shift,
//! which is not a named binding. Digits `1` to `7` are not on this layout:
//! Shift on `à é è ç` types `À É È Ç`, see [`SHADOWED`].

use crate::table::{Glyph, ShadowReason, Shadowed, afnor_layout};
use crate::{altgr, k, shifted};

afnor_layout! {
    Base {
        // Row 1
        FR_AROB = k!(Grave) => Char('@');
        FR_AGRV = k!(Kc1) => Char('à');
        FR_EACU = k!(Kc2) => Char('é');
        FR_EGRV = k!(Kc3) => Char('è');
        FR_ESPR = k!(Kc4) => Char('&');
        FR_LPRN = k!(Kc5) => Char('(');
        FR_RPRN = k!(Kc6) => Char(')');
        FR_CCED = k!(Kc7) => Char('ç');
        /// Typographic apostrophe
        FR_RSQU = k!(Kc8) => Char('’');
        FR_LDAQ = k!(Kc9) => Char('«');
        FR_RDAQ = k!(Kc0) => Char('»');
        FR_APOS = k!(Minus) => Char('\'');
        /// Circumflex
        FR_ACIR = k!(Equal) => Dead("^");
        // Row 2
        FR_A = k!(Q) => Char('a');
        FR_Z = k!(W) => Char('z');
        FR_E = k!(E) => Char('e');
        FR_R = k!(R) => Char('r');
        FR_T = k!(T) => Char('t');
        FR_Y = k!(Y) => Char('y');
        FR_U = k!(U) => Char('u');
        FR_I = k!(I) => Char('i');
        FR_O = k!(O) => Char('o');
        FR_P = k!(P) => Char('p');
        FR_MOIN = k!(LeftBracket) => Char('-');
        FR_PLUS = k!(RightBracket) => Char('+');
        // Row 3
        FR_Q = k!(A) => Char('q');
        FR_S = k!(S) => Char('s');
        FR_D = k!(D) => Char('d');
        FR_F = k!(F) => Char('f');
        FR_G = k!(G) => Char('g');
        FR_H = k!(H) => Char('h');
        FR_J = k!(J) => Char('j');
        FR_K = k!(K) => Char('k');
        FR_L = k!(L) => Char('l');
        FR_M = k!(Semicolon) => Char('m');
        FR_SLSH = k!(Quote) => Char('/');
        FR_ASTX = k!(NonusHash) => Char('*');
        // Row 4
        FR_INF = k!(NonusBackslash) => Char('<');
        FR_W = k!(Z) => Char('w');
        FR_X = k!(X) => Char('x');
        FR_C = k!(C) => Char('c');
        FR_V = k!(V) => Char('v');
        FR_B = k!(B) => Char('b');
        FR_N = k!(N) => Char('n');
        FR_POIN = k!(M) => Char('.');
        FR_VIRG = k!(Comma) => Char(',');
        FR_DQUO = k!(Dot) => Char('"');
        FR_EGAL = k!(Slash) => Char('=');
    }

    Shift {
        // Row 1
        FR_HASH = shifted!(FR_AROB) => Char('#');
        FR_DEG = shifted!(FR_ESPR) => Char('°');
        FR_LBKT = shifted!(FR_LPRN) => Char('[');
        FR_RBKT = shifted!(FR_RPRN) => Char(']');
        FR_8 = shifted!(FR_RSQU) => Char('8');
        FR_9 = shifted!(FR_LDAQ) => Char('9');
        FR_0 = shifted!(FR_RDAQ) => Char('0');
        FR_QUES = shifted!(FR_APOS) => Char('?');
        /// Diaeresis
        FR_TREM = shifted!(FR_ACIR) => Dead("¨");
        // Row 2
        /// En dash
        FR_NDSH = shifted!(FR_MOIN) => Char('–');
        FR_PLMN = shifted!(FR_PLUS) => Char('±');
        // Row 3
        FR_BSLS = shifted!(FR_SLSH) => Char('\\');
        FR_HALF = shifted!(FR_ASTX) => Char('½');
        // Row 4
        FR_SUP = shifted!(FR_INF) => Char('>');
        FR_2PTS = shifted!(FR_POIN) => Char(':');
        FR_EXLM = shifted!(FR_VIRG) => Char('!');
        FR_DIFF = shifted!(FR_EGAL) => Char('≠');
    }

    AltGr {
        // Row 1
        FR_BREV = altgr!(FR_AROB) => Dead("˘");
        FR_SECT = altgr!(FR_AGRV) => Char('§');
        FR_ACUT = altgr!(FR_EACU) => Dead("´");
        FR_GRV = altgr!(FR_EGRV) => Dead("`");
        FR_LACL = altgr!(FR_LPRN) => Char('{');
        FR_RACL = altgr!(FR_RPRN) => Char('}');
        FR_MACR = altgr!(FR_CCED) => Dead("¯");
        FR_UNDS = altgr!(FR_RSQU) => Char('_');
        FR_LDQU = altgr!(FR_LDAQ) => Char('“');
        FR_RDQU = altgr!(FR_RDAQ) => Char('”');
        /// Ring above
        FR_RNGA = altgr!(FR_APOS) => Dead("˚");
        /// Caron
        FR_CARN = altgr!(FR_ACIR) => Dead("ˇ");
        // Row 2
        FR_AE = altgr!(FR_A) => Char('æ');
        FR_PND = altgr!(FR_Z) => Char('£');
        FR_EURO = altgr!(FR_E) => Char('€');
        FR_REGD = altgr!(FR_R) => Char('®');
        FR_LCBR = altgr!(FR_T) => Char('{');
        FR_RCBR = altgr!(FR_Y) => Char('}');
        FR_UGRV = altgr!(FR_U) => Char('ù');
        /// Dot above
        FR_DOTA = altgr!(FR_I) => Dead("˙");
        FR_OE = altgr!(FR_O) => Char('œ');
        FR_PERC = altgr!(FR_P) => Char('%');
        /// Minus sign, U+2212
        FR_MMNS = altgr!(FR_MOIN) => Char('−');
        FR_DAGG = altgr!(FR_PLUS) => Char('†');
        // Row 3
        FR_THET = altgr!(FR_Q) => Char('θ');
        FR_SS = altgr!(FR_S) => Char('ß');
        FR_DLR = altgr!(FR_D) => Char('$');
        /// Currency dead key
        FR_CURR = altgr!(FR_F) => Dead("¤");
        /// Greek dead key
        FR_DGRK = altgr!(FR_G) => Dead("µ");
        /// European letters dead key
        FR_EU = altgr!(FR_H) => Dead("Eu");
        /// Stroke through the next letter
        FR_DSLS = altgr!(FR_K) => Dead("∕");
        FR_PIPE = altgr!(FR_L) => Char('|');
        FR_INFN = altgr!(FR_M) => Char('∞');
        FR_DIV = altgr!(FR_SLSH) => Char('÷');
        FR_MUL = altgr!(FR_ASTX) => Char('×');
        // Row 4
        FR_LEQL = altgr!(FR_INF) => Char('≤');
        FR_EZH = altgr!(FR_W) => Char('ʒ');
        FR_COPY = altgr!(FR_X) => Char('©');
        FR_CEDL = altgr!(FR_V) => Dead("¸");
        /// Horizontal stroke through the next letter
        FR_DMNS = altgr!(FR_B) => Dead("−");
        FR_TILD = altgr!(FR_N) => Dead("~");
        FR_3PTS = altgr!(FR_POIN) => Char('…');
        FR_PVIR = altgr!(FR_VIRG) => Char(';');
        FR_MDDT = altgr!(FR_DQUO) => Char('·');
        FR_AEQL = altgr!(FR_EGAL) => Char('≃');
    }

    ShiftAltGr {
        // Row 1
        /// Inverted breve
        FR_IBRV = shifted!(altgr!(FR_AROB)) => Dead("\u{311}");
        /// Double acute
        FR_DACU = shifted!(altgr!(FR_LPRN)) => Dead("˝");
        /// Double grave
        FR_DGRV = shifted!(altgr!(FR_RPRN)) => Dead("\u{30F}");
        /// Em dash
        FR_MDSH = shifted!(altgr!(FR_RSQU)) => Char('—');
        FR_LSAQ = shifted!(altgr!(FR_LDAQ)) => Char('‹');
        FR_RSAQ = shifted!(altgr!(FR_RDAQ)) => Char('›');
        FR_IQUE = shifted!(altgr!(FR_APOS)) => Char('¿');
        // Row 2
        FR_TM = shifted!(altgr!(FR_T)) => Char('™');
        /// Dot below
        FR_DOTB = shifted!(altgr!(FR_I)) => Dead("\u{323}");
        FR_PERM = shifted!(altgr!(FR_P)) => Char('‰');
        /// Non-breaking hyphen
        FR_NBHY = shifted!(altgr!(FR_MOIN)) => Char('‑');
        FR_DDAG = shifted!(altgr!(FR_PLUS)) => Char('‡');
        // Row 3
        /// Macron below
        FR_MACB = shifted!(altgr!(FR_H)) => Dead("ˍ");
        FR_SQRT = shifted!(altgr!(FR_SLSH)) => Char('√');
        FR_QRTR = shifted!(altgr!(FR_ASTX)) => Char('¼');
        // Row 4
        FR_GEQL = shifted!(altgr!(FR_INF)) => Char('≥');
        FR_OGON = shifted!(altgr!(FR_V)) => Dead("˛");
        FR_IEXL = shifted!(altgr!(FR_VIRG)) => Char('¡');
    }
}

/// Bindings kept out of [`AFNOR_KEYS`], with the collision each one avoids.
///
/// The glyph is what the host prints for the action. `FR_1` would read like
/// `KC_1`, yet Shift on that key prints `À`.
pub static SHADOWED: &[Shadowed] = &[
    Shadowed {
        name: "FR_1",
        action: shifted!(FR_AGRV),
        glyph: Glyph::Char('À'),
        reason: ShadowReason::Canonical,
    },
    Shadowed {
        name: "FR_2",
        action: shifted!(FR_EACU),
        glyph: Glyph::Char('É'),
        reason: ShadowReason::Canonical,
    },
    Shadowed {
        name: "FR_3",
        action: shifted!(FR_EGRV),
        glyph: Glyph::Char('È'),
        reason: ShadowReason::Canonical,
    },
    Shadowed {
        name: "FR_7",
        action: shifted!(FR_CCED),
        glyph: Glyph::Char('Ç'),
        reason: ShadowReason::Canonical,
    },
    Shadowed {
        name: "FR_3PTS",
        action: shifted!(FR_DQUO),
        glyph: Glyph::Char('…'),
        reason: ShadowReason::NameTaken,
    },
    Shadowed {
        name: "FR_AMPR",
        action: altgr!(FR_ESPR),
        glyph: Glyph::Char('&'),
        reason: ShadowReason::CharTaken,
    },
    Shadowed {
        name: "FR_CCED",
        action: altgr!(FR_C),
        glyph: Glyph::Char('ç'),
        reason: ShadowReason::NameTaken,
    },
    Shadowed {
        name: "FR_NEQL",
        action: shifted!(altgr!(FR_EGAL)),
        glyph: Glyph::Char('≠'),
        reason: ShadowReason::CharTaken,
    },
];

#[cfg(test)]
mod test {
    use super::*;
    use crate::layer::Layer;
    use crate::types::keycode::HidKeyCode;
    use crate::types::modifier::{ALTGR, SHIFT};
    use crate::wm;

    #[test]
    fn test_base_keys_are_swapped_letters() {
        assert_eq!(FR_A, k!(Q));
        assert_eq!(FR_Q, k!(A));
        assert_eq!(FR_Z, k!(W));
        assert_eq!(FR_W, k!(Z));
        assert_eq!(FR_M, k!(Semicolon));
    }

    #[test]
    fn test_nested_wrappers() {
        assert_eq!(FR_HASH, wm!(Grave, SHIFT));
        assert_eq!(FR_EURO, wm!(E, ALTGR));
        assert_eq!(FR_TM, wm!(T, SHIFT | ALTGR));
        assert_eq!(FR_IEXL.keycode(), Some(HidKeyCode::Comma));
    }

    #[test]
    fn test_table_follows_constants() {
        let tm = AFNOR_KEYS.iter().find(|k| k.name == "FR_TM").unwrap();
        assert_eq!(tm.action, FR_TM);
        assert_eq!(tm.layer, Layer::ShiftAltGr);
        assert_eq!(tm.glyph, Glyph::Char('™'));
    }

    #[test]
    fn test_table_size() {
        let count = |layer| AFNOR_KEYS.iter().filter(|k| k.layer == layer).count();
        assert_eq!(count(Layer::Base), 48);
        assert_eq!(count(Layer::Shift), 17);
        assert_eq!(count(Layer::AltGr), 45);
        assert_eq!(count(Layer::ShiftAltGr), 18);
    }
}
