//! The 3x3 macropad with a knob and a 128x32 OLED.

pub mod debug;
pub mod kevinpanaro;
pub mod raw_hid_example;

pub const ROWS: usize = 4;
pub const COLS: usize = 3;
