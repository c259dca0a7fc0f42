//! Logs every key event to the console.

use core::fmt;

use crate::{
    host::KeyEvent,
    keymap::{Action, Context, KeymapHooks},
};

/// The console line for one key event. Actions are not numeric keycodes, so `kc` is the
/// action's name.
pub struct KeyLog {
    pub action: Action,
    pub event: KeyEvent,
}

impl fmt::Display for KeyLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.event;
        write!(
            f,
            "KL: kc: {}, col: {}, row: {}, pressed: {}, time: {}, interrupt: {}, count: {}",
            self.action,
            e.col,
            e.row,
            e.pressed,
            e.time.as_millis(),
            e.interrupted,
            e.tap_count
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for KeyLog {
    fn format(&self, f: defmt::Formatter) {
        let e = &self.event;
        defmt::write!(
            f,
            "KL: kc: {}, col: {}, row: {}, pressed: {}, time: {}, interrupt: {}, count: {}",
            self.action,
            e.col,
            e.row,
            e.pressed,
            e.time.as_millis(),
            e.interrupted,
            e.tap_count
        )
    }
}

#[derive(Debug, Default)]
pub struct DebugKeymap;

impl KeymapHooks for DebugKeymap {
    fn post_init(&mut self, cx: &mut Context<'_>) {
        cx.host.set_debug(true, true);
    }

    fn process_record(&mut self, _cx: &mut Context<'_>, action: Action, event: KeyEvent) -> bool {
        crate::info!("{}", KeyLog { action, event });
        true
    }
}

#[cfg(test)]
#[path = "debug_test.rs"]
mod test;
