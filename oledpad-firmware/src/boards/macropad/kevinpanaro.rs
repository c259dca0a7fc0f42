//! Seven layers cycled with the knob, game chat macros and the compact display protocol.

use core::num::NonZeroU8;

use oledpad_common::{
    boards::macropad::kevinpanaro::{kc, BASE, COMBO_RESET, LAYER_COUNT, LAYER_NAMES},
    keycodes::usage::*,
    raw_hid::Variant,
};

use crate::{
    dispatcher::Dispatcher,
    host::KeyEvent,
    keymap::{
        Action::{self, User},
        Context, KeymapHooks,
    },
    layers,
    status::LayerStatus,
};

const KNOB_LAYERS: NonZeroU8 = match NonZeroU8::new(LAYER_COUNT) {
    Some(n) => n,
    None => panic!("the knob needs at least one layer"),
};

const STATUS: LayerStatus = LayerStatus::named("layer: ", LAYER_NAMES);

#[derive(Debug)]
pub struct Kevinpanaro {
    dispatcher: Dispatcher,
}

impl Default for Kevinpanaro {
    fn default() -> Self {
        Self {
            dispatcher: Dispatcher::new(Variant::Compact),
        }
    }
}

impl KeymapHooks for Kevinpanaro {
    fn process_record(&mut self, cx: &mut Context<'_>, action: Action, event: KeyEvent) -> bool {
        let User(id) = action else {
            return true;
        };
        if !event.pressed {
            return !matches!(
                id,
                kc::MOVE_HOME
                    | kc::VAL_YES
                    | kc::VAL_NO
                    | kc::VAL_ULT
                    | kc::VAL_COMMEND
                    | kc::VAL_NO_TIME
            );
        }
        let host = &mut *cx.host;
        match id {
            kc::MOVE_HOME => host.layer_move(BASE),
            kc::VAL_YES => host.send_string(".33"),
            kc::VAL_NO => host.send_string(".34"),
            kc::VAL_ULT => host.send_string(".15"),
            kc::VAL_COMMEND => host.send_string(".32"),
            kc::VAL_NO_TIME => {
                host.register_code(LEFT_SHIFT);
                host.tap_code(ENTER);
                host.unregister_code(LEFT_SHIFT);
                host.send_string("NO TIME");
                host.tap_code(ENTER);
            }
            _ => return true,
        }
        false
    }

    fn encoder_update(&mut self, cx: &mut Context<'_>, _index: u8, clockwise: bool) -> bool {
        layers::cycle(cx.host, KNOB_LAYERS, clockwise);
        true
    }

    fn oled_task(&mut self, cx: &mut Context<'_>) -> bool {
        STATUS.render(cx.display, cx.host.highest_layer());
        if cx.host.led_state().caps_lock {
            cx.display.write(" caps ");
        }
        false
    }

    fn raw_hid_receive(&mut self, cx: &mut Context<'_>, data: &[u8]) {
        let layer = cx.host.highest_layer();
        self.dispatcher.receive(data, cx.display, layer, cx.sender);
    }

    fn process_combo_event(&mut self, cx: &mut Context<'_>, index: u8, pressed: bool) {
        if index == COMBO_RESET && pressed {
            cx.host.bootloader_reset();
        }
    }
}

#[cfg(test)]
#[path = "kevinpanaro_test.rs"]
mod test;
