//! USB HID keyboard page usage ids and their short names.

pub mod usage {
    pub const NO: u8 = 0x00;

    pub const A: u8 = 0x04;
    pub const B: u8 = 0x05;
    pub const C: u8 = 0x06;
    pub const D: u8 = 0x07;
    pub const E: u8 = 0x08;
    pub const F: u8 = 0x09;
    pub const G: u8 = 0x0a;
    pub const H: u8 = 0x0b;
    pub const I: u8 = 0x0c;
    pub const J: u8 = 0x0d;
    pub const K: u8 = 0x0e;
    pub const L: u8 = 0x0f;
    pub const M: u8 = 0x10;
    pub const N: u8 = 0x11;
    pub const O: u8 = 0x12;
    pub const P: u8 = 0x13;
    pub const Q: u8 = 0x14;
    pub const R: u8 = 0x15;
    pub const S: u8 = 0x16;
    pub const T: u8 = 0x17;
    pub const U: u8 = 0x18;
    pub const V: u8 = 0x19;
    pub const W: u8 = 0x1a;
    pub const X: u8 = 0x1b;
    pub const Y: u8 = 0x1c;
    pub const Z: u8 = 0x1d;

    pub const N1: u8 = 0x1e;
    pub const N2: u8 = 0x1f;
    pub const N3: u8 = 0x20;
    pub const N4: u8 = 0x21;
    pub const N5: u8 = 0x22;
    pub const N6: u8 = 0x23;
    pub const N7: u8 = 0x24;
    pub const N8: u8 = 0x25;
    pub const N9: u8 = 0x26;
    pub const N0: u8 = 0x27;

    pub const ENTER: u8 = 0x28;
    pub const ESCAPE: u8 = 0x29;
    pub const BACKSPACE: u8 = 0x2a;
    pub const TAB: u8 = 0x2b;
    pub const SPACE: u8 = 0x2c;
    pub const MINUS: u8 = 0x2d;
    pub const EQUAL: u8 = 0x2e;
    pub const DOT: u8 = 0x37;

    pub const F1: u8 = 0x3a;
    pub const F2: u8 = 0x3b;
    pub const F3: u8 = 0x3c;
    pub const F4: u8 = 0x3d;
    pub const F5: u8 = 0x3e;
    pub const F6: u8 = 0x3f;
    pub const F7: u8 = 0x40;
    pub const F8: u8 = 0x41;
    pub const F9: u8 = 0x42;
    pub const F10: u8 = 0x43;
    pub const F11: u8 = 0x44;
    pub const F12: u8 = 0x45;

    pub const PAGE_UP: u8 = 0x4b;
    pub const PAGE_DOWN: u8 = 0x4e;

    pub const P1: u8 = 0x59;
    pub const P2: u8 = 0x5a;
    pub const P3: u8 = 0x5b;
    pub const P4: u8 = 0x5c;
    pub const P5: u8 = 0x5d;
    pub const P6: u8 = 0x5e;
    pub const P7: u8 = 0x5f;
    pub const P8: u8 = 0x60;
    pub const P9: u8 = 0x61;
    pub const P0: u8 = 0x62;

    pub const F13: u8 = 0x68;
    pub const F14: u8 = 0x69;
    pub const F15: u8 = 0x6a;
    pub const F16: u8 = 0x6b;
    pub const F17: u8 = 0x6c;
    pub const F18: u8 = 0x6d;
    pub const F19: u8 = 0x6e;
    pub const F20: u8 = 0x6f;

    pub const VOLUME_UP: u8 = 0x80;
    pub const VOLUME_DOWN: u8 = 0x81;

    pub const LEFT_CTRL: u8 = 0xe0;
    pub const LEFT_SHIFT: u8 = 0xe1;
    pub const LEFT_ALT: u8 = 0xe2;
    pub const LEFT_GUI: u8 = 0xe3;
}

/// Modifier bit masks as found in byte 0 of a boot keyboard report.
pub mod modifier {
    pub const LCTRL: u8 = 0x01;
    pub const LSHIFT: u8 = 0x02;
    pub const LALT: u8 = 0x04;
    pub const LGUI: u8 = 0x08;
    pub const RCTRL: u8 = 0x10;
    pub const RSHIFT: u8 = 0x20;
    pub const RALT: u8 = 0x40;
    pub const RGUI: u8 = 0x80;

    pub const MEH: u8 = LCTRL | LSHIFT | LALT;
    pub const CTRL_MASK: u8 = LCTRL | RCTRL;
    pub const SHIFT_MASK: u8 = LSHIFT | RSHIFT;
}

#[rustfmt::skip]
const KEY_NAMES: &[(&str, u8)] = &[
    ("a", 0x04), ("b", 0x05), ("c", 0x06), ("d", 0x07), ("e", 0x08), ("f", 0x09),
    ("g", 0x0a), ("h", 0x0b), ("i", 0x0c), ("j", 0x0d), ("k", 0x0e), ("l", 0x0f),
    ("m", 0x10), ("n", 0x11), ("o", 0x12), ("p", 0x13), ("q", 0x14), ("r", 0x15),
    ("s", 0x16), ("t", 0x17), ("u", 0x18), ("v", 0x19), ("w", 0x1a), ("x", 0x1b),
    ("y", 0x1c), ("z", 0x1d),
    ("1", 0x1e), ("2", 0x1f), ("3", 0x20), ("4", 0x21), ("5", 0x22),
    ("6", 0x23), ("7", 0x24), ("8", 0x25), ("9", 0x26), ("0", 0x27),
    ("enter", 0x28), ("esc", 0x29), ("bksp", 0x2a), ("tab", 0x2b), ("space", 0x2c),
    ("-", 0x2d), ("=", 0x2e), ("[", 0x2f), ("]", 0x30), ("\\", 0x31), (";", 0x33),
    ("'", 0x34), ("`", 0x35), (",", 0x36), (".", 0x37), ("/", 0x38), ("capslock", 0x39),
    ("f1", 0x3a), ("f2", 0x3b), ("f3", 0x3c), ("f4", 0x3d), ("f5", 0x3e), ("f6", 0x3f),
    ("f7", 0x40), ("f8", 0x41), ("f9", 0x42), ("f10", 0x43), ("f11", 0x44), ("f12", 0x45),
    ("print", 0x46), ("scrolllock", 0x47), ("pause", 0x48), ("insert", 0x49),
    ("home", 0x4a), ("pgup", 0x4b), ("delete", 0x4c), ("end", 0x4d), ("pgdn", 0x4e),
    ("right", 0x4f), ("left", 0x50), ("down", 0x51), ("up", 0x52), ("numlock", 0x53),
    ("p/", 0x54), ("p*", 0x55), ("p-", 0x56), ("p+", 0x57), ("pent", 0x58),
    ("p1", 0x59), ("p2", 0x5a), ("p3", 0x5b), ("p4", 0x5c), ("p5", 0x5d),
    ("p6", 0x5e), ("p7", 0x5f), ("p8", 0x60), ("p9", 0x61), ("p0", 0x62), ("p.", 0x63),
    ("f13", 0x68), ("f14", 0x69), ("f15", 0x6a), ("f16", 0x6b), ("f17", 0x6c),
    ("f18", 0x6d), ("f19", 0x6e), ("f20", 0x6f), ("f21", 0x70), ("f22", 0x71),
    ("f23", 0x72), ("f24", 0x73),
    ("mute", 0x7f), ("volu", 0x80), ("vold", 0x81),
    ("lctl", 0xe0), ("lsft", 0xe1), ("lalt", 0xe2), ("lgui", 0xe3),
    ("rctl", 0xe4), ("rsft", 0xe5), ("ralt", 0xe6), ("rgui", 0xe7),
];

/// The short name of a usage id.
///
/// ```
/// use oledpad_common::keycodes::{key_name, usage};
///
/// assert_eq!(key_name(usage::P0), Some("p0"));
/// assert_eq!(key_name(0xa5), None);
/// ```
pub fn key_name(code: u8) -> Option<&'static str> {
    KEY_NAMES
        .iter()
        .find_map(|&(name, c)| (c == code).then_some(name))
}

/// The usage id for a short name. Case is ignored; `_` and `-` separators are ignored when no
/// name matches exactly.
pub fn key_code(name: &str) -> Option<u8> {
    KEY_NAMES
        .iter()
        .find_map(|&(n, c)| n.eq_ignore_ascii_case(name).then_some(c))
        .or_else(|| {
            KEY_NAMES
                .iter()
                .find_map(|&(n, c)| same_name(n, name).then_some(c))
        })
}

/// All known `(name, usage)` pairs in usage order.
pub fn keycodes_iter() -> impl Iterator<Item = (&'static str, u8)> {
    KEY_NAMES.iter().copied()
}

fn same_name(known: &str, given: &str) -> bool {
    let mut given = given
        .bytes()
        .filter(|b| *b != b'_' && *b != b'-')
        .map(|b| b.to_ascii_lowercase());
    known.bytes().all(|b| given.next() == Some(b)) && given.next().is_none()
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
