//! Services the firmware framework offers to keymap code.

use embassy_time::Instant;
use oledpad_common::raw_hid::REPORT_LEN;

pub use oledpad_common::keymap::RgbStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedState {
    pub num_lock: bool,
    pub caps_lock: bool,
    pub scroll_lock: bool,
}

/// One physical key transition as delivered by the matrix scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
    pub time: Instant,
    /// Another key went down while this tap-hold key was pending.
    pub interrupted: bool,
    /// Consecutive taps of this key so far.
    pub tap_count: u8,
}
impl KeyEvent {
    pub fn press(row: u8, col: u8, time: Instant) -> Self {
        Self {
            row,
            col,
            pressed: true,
            time,
            interrupted: false,
            tap_count: 0,
        }
    }

    pub fn release(row: u8, col: u8, time: Instant) -> Self {
        Self {
            pressed: false,
            ..Self::press(row, col, time)
        }
    }

    pub fn with_tap(self, interrupted: bool, tap_count: u8) -> Self {
        Self {
            interrupted,
            tap_count,
            ..self
        }
    }
}

pub trait Host {
    /// Index of the highest active layer.
    fn highest_layer(&self) -> u8;
    /// Index of the highest default layer.
    fn default_layer(&self) -> u8;
    /// Turn off every layer except `layer`.
    fn layer_move(&mut self, layer: u8);

    fn tap_code(&mut self, usage: u8);
    fn tap_code_delay(&mut self, usage: u8, delay_ms: u16);
    fn register_code(&mut self, usage: u8);
    fn unregister_code(&mut self, usage: u8);
    /// Type `text` as a sequence of taps.
    fn send_string(&mut self, text: &str);

    fn soft_reset(&mut self);
    fn bootloader_reset(&mut self);

    fn led_state(&self) -> LedState;
    fn is_master(&self) -> bool;
    fn mods(&self) -> u8;
    fn oneshot_mods(&self) -> u8;
    fn rgb(&mut self, step: RgbStep);
    fn set_debug(&mut self, enable: bool, matrix: bool);
}

/// The sending half of the raw HID channel.
pub trait ReportSender {
    fn send(&mut self, report: &[u8; REPORT_LEN]);
}

impl<S: ReportSender + ?Sized> ReportSender for &mut S {
    fn send(&mut self, report: &[u8; REPORT_LEN]) {
        (**self).send(report)
    }
}
