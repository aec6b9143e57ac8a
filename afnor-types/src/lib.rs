//! # AFNOR types
//!
//! Fundamental types shared by the AFNOR keymap crates.
//!
//! - [`keycode`] - HID keyboard page usages, named after the US legend of each physical key
//! - [`modifier`] - Modifier combinations and the HID report modifier byte
//! - [`action`] - Key actions stored at keymap positions
//!
//! The layout table in `afnor` is made of these types, `afnor-config` produces
//! them when it parses a keymap.

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
