//! Two layers and the full display protocol. Layer changes are pushed to a connected host.

use oledpad_common::{boards::macropad::raw_hid_example::TEST, raw_hid::Variant};

use crate::{
    dispatcher::Dispatcher,
    keymap::{Context, KeymapHooks},
    status::LayerStatus,
};

const STATUS: LayerStatus = LayerStatus::numbered("layer: ");

#[derive(Debug)]
pub struct RawHidExample {
    dispatcher: Dispatcher,
}

impl Default for RawHidExample {
    fn default() -> Self {
        Self {
            dispatcher: Dispatcher::new(Variant::Extended),
        }
    }
}

impl RawHidExample {
    pub fn is_connected(&self) -> bool {
        self.dispatcher.is_connected()
    }
}

impl KeymapHooks for RawHidExample {
    fn layer_state_set(&mut self, cx: &mut Context<'_>, layer: u8) -> u8 {
        self.dispatcher.layer_changed(layer, cx.sender);
        layer
    }

    fn oled_task(&mut self, cx: &mut Context<'_>) -> bool {
        let layer = cx.host.highest_layer();
        if layer <= TEST {
            STATUS.render(cx.display, layer);
        } else {
            cx.display.write("layer: ");
        }
        false
    }

    fn raw_hid_receive(&mut self, cx: &mut Context<'_>, data: &[u8]) {
        let layer = cx.host.highest_layer();
        self.dispatcher.receive(data, cx.display, layer, cx.sender);
    }
}

#[cfg(test)]
#[path = "raw_hid_example_test.rs"]
mod test;
