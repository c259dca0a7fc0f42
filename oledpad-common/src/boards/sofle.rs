//! Split keyboard with one RGB key per half.

use crate::keymap::{
    Action::{self, Rgb},
    Keymap, RgbStep,
};

pub const ROWS: usize = 10;
pub const COLS: usize = 6;

pub const DEBUG: u8 = 0;

const X: Action = Action::No;

/// Rows 0..5 are the left half, 5..10 the right half. The key between the halves on the bottom
/// letter row sits in the last column of the thumb row.
pub const KEYMAP: Keymap<1, ROWS, COLS> = Keymap::new(
    [[
        [X, X, X, X, X, X],
        [X, X, X, X, X, X],
        [X, X, X, X, X, X],
        [X, X, X, X, X, X],
        [Rgb(RgbStep::ModeSwirl), X, X, X, X, Rgb(RgbStep::NextMode)],
        [X, X, X, X, X, X],
        [X, X, X, X, X, X],
        [X, X, X, X, X, X],
        [X, X, X, X, X, X],
        [X, X, X, X, X, Rgb(RgbStep::ModeSwirl)],
    ]],
    &[],
);
const _: () = assert!(KEYMAP.check().is_ok());

#[cfg(test)]
#[path = "sofle_test.rs"]
mod test;
