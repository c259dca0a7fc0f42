use crate::{
    keycodes::usage::*,
    keymap::{Action::Key, Keymap},
};

use super::{COLS, ROWS};

pub const KEYMAP: Keymap<1, ROWS, COLS> = Keymap::new(
    [macropad_layout!(
        Key(N0),
        Key(N7), Key(N8), Key(N9),
        Key(N4), Key(N5), Key(N6),
        Key(N1), Key(N2), Key(N3),
    )],
    &[],
);
const _: () = assert!(KEYMAP.check().is_ok());
