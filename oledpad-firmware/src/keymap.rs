use embassy_time::Instant;

use crate::{
    display::{Display, Rotation},
    host::{Host, KeyEvent, ReportSender},
};

pub use oledpad_common::keymap::{Action, Keymap, KeymapError, KeymapView, TapDance};

/// The collaborators a hook may use.
pub struct Context<'a> {
    pub host: &'a mut dyn Host,
    pub display: &'a mut dyn Display,
    pub sender: &'a mut dyn ReportSender,
}

/// Callbacks the framework makes into a board. Returning `false` from a `bool` hook stops the
/// framework's own handling of that event.
pub trait KeymapHooks {
    fn post_init(&mut self, _cx: &mut Context<'_>) {}

    fn process_record(&mut self, _cx: &mut Context<'_>, _action: Action, _event: KeyEvent) -> bool {
        true
    }

    fn matrix_scan(&mut self, _cx: &mut Context<'_>, _now: Instant) {}

    fn encoder_update(&mut self, _cx: &mut Context<'_>, _index: u8, _clockwise: bool) -> bool {
        true
    }

    fn oled_init(&mut self, _cx: &mut Context<'_>, rotation: Rotation) -> Rotation {
        rotation
    }

    fn oled_task(&mut self, _cx: &mut Context<'_>) -> bool {
        true
    }

    fn raw_hid_receive(&mut self, _cx: &mut Context<'_>, _data: &[u8]) {}

    fn layer_state_set(&mut self, _cx: &mut Context<'_>, layer: u8) -> u8 {
        layer
    }

    fn process_combo_event(&mut self, _cx: &mut Context<'_>, _index: u8, _pressed: bool) {}

    fn shutdown(&mut self, _cx: &mut Context<'_>, _bootloader: bool) -> bool {
        true
    }
}

#[cfg(test)]
#[path = "keymap_test.rs"]
mod test;
