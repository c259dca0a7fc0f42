//! Hooks for the boards whose tables live in [`oledpad_common::boards`].

pub mod macropad;
pub mod mokapad;
pub mod sofle;
