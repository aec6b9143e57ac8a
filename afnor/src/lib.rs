//! Keycode aliases for the French AZERTY layout AFNOR NF Z71-300.
//!
//! Firmware sends physical key positions; the host's layout decides what they
//! print. The `FR_*` constants name each position by what an AFNOR host prints
//! for it, in all four shift states, so a keymap can say `FR_EURO` instead of
//! `wm!(E, ALTGR)`.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
pub(crate) mod fmt;

pub use afnor_types as types;

pub mod check;
pub mod fr;
pub mod layer;
pub mod layout_macro;
pub mod lookup;
pub mod qmk;
pub mod table;
pub mod text;

pub use check::{LayoutError, check_layout};
pub use fr::*;
pub use layer::Layer;
pub use table::{AfnorKey, Glyph, ShadowReason, Shadowed};
