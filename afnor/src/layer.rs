use serde::{Deserialize, Serialize};

use crate::types::modifier::{ALTGR, ModifierCombination, SHIFT};

/// The four shift states of the layout.
///
/// These are mutually exclusive, so one physical key carries at most one
/// binding per layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Base,
    Shift,
    AltGr,
    ShiftAltGr,
}

impl Layer {
    pub const ALL: [Layer; 4] = [Layer::Base, Layer::Shift, Layer::AltGr, Layer::ShiftAltGr];

    /// Layer reached by holding `modifiers`.
    ///
    /// Returns `None` when ctrl, gui or left alt is held: those combinations
    /// don't print anything on this layout.
    pub const fn of(modifiers: ModifierCombination) -> Option<Layer> {
        if modifiers.ctrl() || modifiers.gui() || (modifiers.alt() && !modifiers.right()) {
            return None;
        }
        Some(match (modifiers.has_shift(), modifiers.has_altgr()) {
            (false, false) => Layer::Base,
            (true, false) => Layer::Shift,
            (false, true) => Layer::AltGr,
            (true, true) => Layer::ShiftAltGr,
        })
    }

    /// Modifiers to hold for this layer
    pub const fn modifiers(self) -> ModifierCombination {
        match self {
            Layer::Base => ModifierCombination::new(),
            Layer::Shift => SHIFT,
            Layer::AltGr => ALTGR,
            Layer::ShiftAltGr => SHIFT.union(ALTGR),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Layer::Base => "base",
            Layer::Shift => "shift",
            Layer::AltGr => "altgr",
            Layer::ShiftAltGr => "shift+altgr",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_layer_roundtrip() {
        for layer in Layer::ALL {
            assert_eq!(Layer::of(layer.modifiers()), Some(layer));
        }
    }

    #[test]
    fn test_right_shift_is_shift_layer() {
        let rshift = ModifierCombination::new_from(true, false, false, true, false);
        assert_eq!(Layer::of(rshift), Some(Layer::Shift));
    }

    #[test]
    fn test_no_layer_for_shortcuts() {
        let ctrl = ModifierCombination::new().with_ctrl(true);
        let lalt = ModifierCombination::new().with_alt(true);
        assert_eq!(Layer::of(ctrl), None);
        assert_eq!(Layer::of(lalt | SHIFT), None);
    }
}
