//! Split keyboard debug keymap: status on the master OLED, logo on the other half, RGB on the
//! encoders.

use oledpad_common::{
    boards::sofle::DEBUG,
    keycodes::{modifier, usage::*},
};

use crate::{
    display::Rotation,
    host::RgbStep,
    keymap::{Context, KeymapHooks},
};

/// Delay between press and release for media keys.
pub const MEDIA_KEY_DELAY: u16 = 10;

/// Four pages of 128 columns, one byte per 8 pixel column.
#[rustfmt::skip]
pub static LOGO: [u8; 512] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 128, 128, 128, 128, 128, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 8, 28, 20, 20, 20, 28, 4, 4, 4, 4, 4, 12,
    24, 224, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 60, 96, 64, 128, 128, 128,
    129, 129, 129, 129, 193, 97, 63, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 62, 32, 32, 32, 28, 32, 32, 32, 32, 63, 0, 0, 0,
    0, 0, 0, 16, 32, 33, 33, 33, 17, 27, 14, 0, 0, 0, 0, 4,
    6, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 192, 96, 32, 48, 16, 48, 96, 192, 128,
    192, 96, 32, 16, 16, 16, 16, 0, 0, 0, 0, 0, 60, 195, 1, 1,
    1, 3, 30, 3, 1, 1, 1, 3, 6, 252, 0, 0, 0, 0, 0, 0,
    224, 56, 8, 8, 12, 4, 4, 4, 4, 12, 24, 240, 0, 0, 0, 0,
    24, 252, 6, 2, 6, 60, 24, 8, 8, 8, 8, 200, 120, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 7, 4, 4, 4, 4, 4, 4, 4, 7,
    4, 4, 4, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 1, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 5, 0, 0, 0, 0, 0, 0,
    3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 0, 0, 0,
    0, 1, 1, 2, 2, 2, 2, 2, 3, 1, 1, 1, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

pub struct SofleDebug {
    /// Take the shift branch of the encoder handler whatever modifiers are held.
    pub force_shift: bool,
}

impl Default for SofleDebug {
    fn default() -> Self {
        Self { force_shift: true }
    }
}

fn status_narrow(cx: &mut Context<'_>) {
    let display = &mut *cx.display;
    display.write("Sofle");
    display.write("\n\n\n");
    match cx.host.default_layer() {
        DEBUG => display.write_ln("DEBUG"),
        _ => display.write("Undef"),
    }
    display.write("\n\n");
    display.write_ln("Layer");
    match cx.host.highest_layer() {
        DEBUG => display.write("rgbdebug\n"),
        _ => display.write_ln("Undef"),
    }
    display.write("\n\n");
}

impl KeymapHooks for SofleDebug {
    fn oled_init(&mut self, cx: &mut Context<'_>, _rotation: Rotation) -> Rotation {
        if cx.host.is_master() {
            Rotation::R270
        } else {
            Rotation::R180
        }
    }

    fn oled_task(&mut self, cx: &mut Context<'_>) -> bool {
        if cx.host.is_master() {
            status_narrow(cx);
        } else {
            cx.display.write_raw(&LOGO);
        }
        false
    }

    fn encoder_update(&mut self, cx: &mut Context<'_>, index: u8, clockwise: bool) -> bool {
        let host = &mut *cx.host;
        let mods = host.mods() | host.oneshot_mods();
        let shift = self.force_shift || mods & modifier::SHIFT_MASK != 0;
        let ctrl = mods & modifier::CTRL_MASK != 0;

        let step = match (shift, ctrl, index, clockwise) {
            (true, _, 0, true) => Some(RgbStep::IncreaseHue),
            (true, _, 0, false) => Some(RgbStep::DecreaseHue),
            (true, _, 1, true) => Some(RgbStep::DecreaseVal),
            (true, _, 1, false) => Some(RgbStep::IncreaseVal),
            (false, true, 0, true) => Some(RgbStep::IncreaseVal),
            (false, true, 0, false) => Some(RgbStep::DecreaseVal),
            (false, true, 1, true) => Some(RgbStep::IncreaseSpeed),
            (false, true, 1, false) => Some(RgbStep::DecreaseSpeed),
            (false, false, 1, true) => {
                host.tap_code(PAGE_UP);
                None
            }
            (false, false, 1, false) => {
                host.tap_code(PAGE_DOWN);
                None
            }
            (false, false, 0, true) => {
                host.tap_code_delay(VOLUME_DOWN, MEDIA_KEY_DELAY);
                None
            }
            (false, false, 0, false) => {
                host.tap_code_delay(VOLUME_UP, MEDIA_KEY_DELAY);
                None
            }
            _ => None,
        };
        if let Some(step) = step {
            host.rgb(step);
        }
        true
    }
}

#[cfg(test)]
#[path = "sofle_test.rs"]
mod test;
