use crate::{
    keycodes::usage::*,
    keymap::{
        Action::{Bootloader, Key, LayerTo},
        Keymap,
    },
};

use super::{COLS, ROWS};

pub const BASE: u8 = 0;
pub const TEST: u8 = 1;

pub const KEYMAP: Keymap<2, ROWS, COLS> = Keymap::new(
    [
        macropad_layout!(
            Key(N0),
            Key(N7), Key(N8), Key(N9),
            Key(N4), Key(N5), Key(N6),
            Key(N1), Key(N2), LayerTo(TEST),
        ),
        macropad_layout!(
            Bootloader,
            Key(N7), Key(N8), Key(N9),
            Key(N4), Key(N5), Key(N6),
            Key(N1), LayerTo(BASE), Key(N3),
        ),
    ],
    &[],
);
const _: () = assert!(KEYMAP.check().is_ok());

#[cfg(test)]
#[path = "raw_hid_example_test.rs"]
mod test;
