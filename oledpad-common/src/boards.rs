//! Keymap tables for the supported boards. The firmware adds each board's hooks on top of these.

use crate::{keymap::KeymapView, raw_hid::Variant};

/// One knob on top, then a 3x3 grid. The knob sits in column 0 of the first row.
macro_rules! macropad_layout {
    ($knob:expr,
     $k1:expr, $k2:expr, $k3:expr,
     $k4:expr, $k5:expr, $k6:expr,
     $k7:expr, $k8:expr, $k9:expr $(,)?) => {
        [
            [$knob, $crate::keymap::Action::No, $crate::keymap::Action::No],
            [$k1, $k2, $k3],
            [$k4, $k5, $k6],
            [$k7, $k8, $k9],
        ]
    };
}

pub mod macropad;
pub mod mokapad;
pub mod sofle;

pub struct Board {
    pub name: &'static str,
    pub keymap: &'static dyn KeymapView,
    pub layer_names: &'static [&'static str],
    /// The display protocol dialect, if the board speaks it.
    pub protocol: Option<Variant>,
}

pub static BOARDS: &[Board] = &[
    Board {
        name: "macropad/debug",
        keymap: &macropad::debug::KEYMAP,
        layer_names: &["base"],
        protocol: None,
    },
    Board {
        name: "macropad/raw_hid_example",
        keymap: &macropad::raw_hid_example::KEYMAP,
        layer_names: &["base", "test"],
        protocol: Some(Variant::Extended),
    },
    Board {
        name: "macropad/kevinpanaro",
        keymap: &macropad::kevinpanaro::KEYMAP,
        layer_names: macropad::kevinpanaro::LAYER_NAMES,
        protocol: Some(Variant::Compact),
    },
    Board {
        name: "mokapad/default",
        keymap: &mokapad::KEYMAP,
        layer_names: &["numpad"],
        protocol: None,
    },
    Board {
        name: "sofle/rgb_matrix_debug",
        keymap: &sofle::KEYMAP,
        layer_names: &["debug"],
        protocol: None,
    },
];

/// Look up a board by its full name or by the keymap part alone when that is unique.
pub fn find(name: &str) -> Option<&'static Board> {
    BOARDS.iter().find(|b| b.name == name).or_else(|| {
        let mut it = BOARDS
            .iter()
            .filter(|b| b.name.rsplit('/').next() == Some(name));
        match (it.next(), it.next()) {
            (Some(b), None) => Some(b),
            _ => None,
        }
    })
}

#[cfg(test)]
#[path = "boards_test.rs"]
mod test;
