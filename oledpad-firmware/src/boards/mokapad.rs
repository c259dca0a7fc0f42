//! A nine key numpad. Holding keypad 0 reboots the board.

use embassy_time::Instant;
use oledpad_common::boards::mokapad::REBOOT_KEY;

use crate::{
    host::KeyEvent,
    keymap::{Action, Action::Key, Context, KeymapHooks},
    reboot_hold::{render_shutdown, RebootHold},
    status::LayerStatus,
};

const STATUS: LayerStatus = LayerStatus {
    newline: false,
    ..LayerStatus::named("Layer: ", &["0"])
};

#[derive(Debug, Default)]
pub struct Mokapad {
    reboot: RebootHold,
}

impl KeymapHooks for Mokapad {
    fn process_record(&mut self, cx: &mut Context<'_>, action: Action, event: KeyEvent) -> bool {
        if action != Key(REBOOT_KEY) {
            return true;
        }
        if event.pressed {
            self.reboot.press(event.time);
        } else {
            self.reboot.release(cx.host, cx.display, REBOOT_KEY);
        }
        false
    }

    fn matrix_scan(&mut self, cx: &mut Context<'_>, now: Instant) {
        self.reboot.scan(now, cx.display);
    }

    fn oled_task(&mut self, cx: &mut Context<'_>) -> bool {
        if self.reboot.is_holding() {
            return false;
        }
        cx.display.set_cursor(0, 0);
        STATUS.render(cx.display, cx.host.highest_layer());
        false
    }

    fn shutdown(&mut self, cx: &mut Context<'_>, bootloader: bool) -> bool {
        render_shutdown(cx.display, bootloader);
        false
    }
}

#[cfg(test)]
#[path = "mokapad_test.rs"]
mod test;
