#![no_std]
//! Definitions shared by the keymap firmware and the host tool.

pub mod boards;
pub mod keycodes;
pub mod keymap;
pub mod raw_hid;
