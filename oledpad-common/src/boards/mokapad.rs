//! A nine key numpad on the macropad matrix.

use crate::{
    boards::macropad::{COLS, ROWS},
    keycodes::usage::*,
    keymap::{Action::Key, Keymap},
};

/// Holding this key reboots the board.
pub const REBOOT_KEY: u8 = P0;

pub const KEYMAP: Keymap<1, ROWS, COLS> = Keymap::new(
    [macropad_layout!(
        Key(REBOOT_KEY),
        Key(P7), Key(P8), Key(P9),
        Key(P4), Key(P5), Key(P6),
        Key(P1), Key(P2), Key(P3),
    )],
    &[],
);
const _: () = assert!(KEYMAP.check().is_ok());
