//! Seven layers cycled with the knob and game chat macros.

use crate::{
    keycodes::{modifier, usage::*},
    keymap::{
        self,
        Action::{self, Key, ModTap, Modified, TapDance, User},
        Keymap,
    },
};

use super::{COLS, ROWS};

pub const BASE: u8 = 0;
pub const DISCORD: u8 = 1;
pub const VALORANT: u8 = 2;
pub const NUMPAD: u8 = 3;
pub const HASS: u8 = 4;
pub const COD: u8 = 5;
pub const SPOTIFY: u8 = 6;
pub const LAYER_COUNT: u8 = 7;

pub const LAYER_NAMES: &[&str] = &[
    "default",
    "discord",
    "valorant",
    "numpad",
    "home assistant",
    "call of duty",
    "spotify",
];

pub mod kc {
    pub const MOVE_HOME: u8 = 0;
    pub const VAL_YES: u8 = 1;
    pub const VAL_NO: u8 = 2;
    pub const VAL_ULT: u8 = 3;
    pub const VAL_COMMEND: u8 = 4;
    pub const VAL_VOTE_YES: u8 = 5;
    pub const VAL_VOTE_NO: u8 = 6;
    pub const VAL_NO_TIME: u8 = 7;
}

pub const TD_1_0: u8 = 0;

pub const COMBO_RESET: u8 = 0;
/// The keys of the reset combo: bottom right, top left and the knob of the base layer.
pub const RESET_COMBO: [u8; 3] = [I, A, NO];

const NO_KEY: Action = Action::No;
/// The knob on every layer but the base one.
pub const HOME: Action = User(kc::MOVE_HOME);

pub const KEYMAP: Keymap<{ LAYER_COUNT as usize }, ROWS, COLS> = Keymap::new(
    [
        macropad_layout!(
            NO_KEY,
            Key(A), Key(B), Key(C),
            Key(D), Key(E), Key(F),
            Key(G), Key(H), Key(I),
        ),
        macropad_layout!(
            HOME,
            Modified(modifier::MEH, F1), Key(T), Key(U),
            Key(V), Key(W), Key(X),
            Key(Y), Key(Z), Key(R),
        ),
        macropad_layout!(
            HOME,
            Modified(modifier::MEH, F1), Key(T), Key(U),
            User(kc::VAL_NO_TIME), Key(W), User(kc::VAL_COMMEND),
            User(kc::VAL_ULT), User(kc::VAL_NO), User(kc::VAL_YES),
        ),
        macropad_layout!(
            HOME,
            Key(N7), Key(N8), Key(N9),
            Key(N4), Key(N5), Key(N6),
            TapDance(TD_1_0), Key(N2), Key(N3),
        ),
        macropad_layout!(
            HOME,
            NO_KEY, NO_KEY, NO_KEY,
            NO_KEY, NO_KEY, NO_KEY,
            Key(F19), NO_KEY, NO_KEY,
        ),
        macropad_layout!(
            HOME,
            Modified(modifier::MEH, F1), Key(F8), Key(F7),
            NO_KEY, NO_KEY, NO_KEY,
            NO_KEY, NO_KEY, Key(F10),
        ),
        macropad_layout!(
            HOME,
            Modified(modifier::LALT, F20), Key(F20), Modified(modifier::LCTRL, F20),
            ModTap(modifier::LSHIFT, NO), NO_KEY, NO_KEY,
            NO_KEY, NO_KEY, NO_KEY,
        ),
    ],
    &[keymap::TapDance {
        single: N1,
        double: N0,
    }],
);
const _: () = assert!(KEYMAP.check().is_ok());

#[cfg(test)]
#[path = "kevinpanaro_test.rs"]
mod test;
