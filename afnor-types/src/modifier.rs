use core::ops::BitOr;

use bitfield_struct::bitfield;
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// A combination of modifiers, in 5 bits.
/// 1 bit for Left/Right, 4 bits for the modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
///
/// AltGr is `ALT` with the `right` bit set.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, MaxSize, Eq, PartialEq, Hash)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const ALTGR: ModifierCombination = ModifierCombination::new().with_alt(true).with_right(true);

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl ModifierCombination {
    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    /// `|` usable in const context
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.into_bits() | other.into_bits())
    }

    pub const fn is_empty(self) -> bool {
        self.into_bits() & 0x0F == 0
    }

    /// Shift is held
    pub const fn has_shift(self) -> bool {
        self.shift()
    }

    /// AltGr, which is right alt, is held
    pub const fn has_altgr(self) -> bool {
        self.alt() && self.right()
    }

    pub fn from_hid_modifiers(modifiers: HidModifiers) -> Self {
        Self::new_from(
            modifiers.right_shift() || modifiers.right_ctrl() || modifiers.right_alt() || modifiers.right_gui(),
            modifiers.left_gui() || modifiers.right_gui(),
            modifiers.left_alt() || modifiers.right_alt(),
            modifiers.left_shift() || modifiers.right_shift(),
            modifiers.left_ctrl() || modifiers.right_ctrl(),
        )
    }

    /// Get the modifier byte of a HID report.
    ///
    /// The combination carries a single L/R bit, so Shift+AltGr is sent as right shift plus right alt.
    pub fn to_hid_modifiers(self) -> HidModifiers {
        if !self.right() {
            HidModifiers::new()
                .with_left_ctrl(self.ctrl())
                .with_left_shift(self.shift())
                .with_left_alt(self.alt())
                .with_left_gui(self.gui())
        } else {
            HidModifiers::new()
                .with_right_ctrl(self.ctrl())
                .with_right_shift(self.shift())
                .with_right_alt(self.alt())
                .with_right_gui(self.gui())
        }
    }
}

/// The modifier byte of a boot keyboard report
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, MaxSize, Eq, PartialEq, Hash)]
pub struct HidModifiers {
    #[bits(1)]
    pub left_ctrl: bool,
    #[bits(1)]
    pub left_shift: bool,
    #[bits(1)]
    pub left_alt: bool,
    #[bits(1)]
    pub left_gui: bool,
    #[bits(1)]
    pub right_ctrl: bool,
    #[bits(1)]
    pub right_shift: bool,
    #[bits(1)]
    pub right_alt: bool,
    #[bits(1)]
    pub right_gui: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_union() {
        let both = SHIFT | ALTGR;
        assert!(both.has_shift());
        assert!(both.has_altgr());
        assert_eq!(both, ALTGR.union(SHIFT));
        assert!(ModifierCombination::new().is_empty());
        // The side bit alone is not a modifier
        assert!(ModifierCombination::new().with_right(true).is_empty());
    }

    #[test]
    fn test_left_alt_is_not_altgr() {
        let lalt = ModifierCombination::new().with_alt(true);
        assert!(!lalt.has_altgr());
    }

    #[test]
    fn test_hid_modifiers() {
        assert_eq!(SHIFT.to_hid_modifiers().into_bits(), 0b0000_0010);
        assert_eq!(ALTGR.to_hid_modifiers().into_bits(), 0b0100_0000);
        assert_eq!((SHIFT | ALTGR).to_hid_modifiers().into_bits(), 0b0110_0000);

        let report = HidModifiers::new().with_right_alt(true);
        assert_eq!(ModifierCombination::from_hid_modifiers(report), ALTGR);
    }
}
