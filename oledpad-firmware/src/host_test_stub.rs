extern crate std;

use std::{string::String, vec::Vec};

use oledpad_common::raw_hid::REPORT_LEN;

use crate::host::{Host, LedState, ReportSender, RgbStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    LayerMove(u8),
    Tap(u8),
    TapDelay(u8, u16),
    Register(u8),
    Unregister(u8),
    SendString(String),
    SoftReset,
    BootloaderReset,
    Rgb(RgbStep),
    Debug(bool, bool),
}

/// A framework stand-in. `layer_move` updates `layer` so cycling can be followed.
#[derive(Default)]
pub struct TestHost {
    pub calls: Vec<HostCall>,
    pub layer: u8,
    pub default_layer: u8,
    pub leds: LedState,
    pub master: bool,
    pub mods: u8,
    pub oneshot_mods: u8,
}

impl TestHost {
    pub fn count(&self, call: &HostCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl Host for TestHost {
    fn highest_layer(&self) -> u8 {
        self.layer
    }

    fn default_layer(&self) -> u8 {
        self.default_layer
    }

    fn layer_move(&mut self, layer: u8) {
        self.layer = layer;
        self.calls.push(HostCall::LayerMove(layer));
    }

    fn tap_code(&mut self, usage: u8) {
        self.calls.push(HostCall::Tap(usage));
    }

    fn tap_code_delay(&mut self, usage: u8, delay_ms: u16) {
        self.calls.push(HostCall::TapDelay(usage, delay_ms));
    }

    fn register_code(&mut self, usage: u8) {
        self.calls.push(HostCall::Register(usage));
    }

    fn unregister_code(&mut self, usage: u8) {
        self.calls.push(HostCall::Unregister(usage));
    }

    fn send_string(&mut self, text: &str) {
        self.calls.push(HostCall::SendString(text.into()));
    }

    fn soft_reset(&mut self) {
        self.calls.push(HostCall::SoftReset);
    }

    fn bootloader_reset(&mut self) {
        self.calls.push(HostCall::BootloaderReset);
    }

    fn led_state(&self) -> LedState {
        self.leds
    }

    fn is_master(&self) -> bool {
        self.master
    }

    fn mods(&self) -> u8 {
        self.mods
    }

    fn oneshot_mods(&self) -> u8 {
        self.oneshot_mods
    }

    fn rgb(&mut self, step: RgbStep) {
        self.calls.push(HostCall::Rgb(step));
    }

    fn set_debug(&mut self, enable: bool, matrix: bool) {
        self.calls.push(HostCall::Debug(enable, matrix));
    }
}

#[derive(Default)]
pub struct TestSender {
    pub reports: Vec<[u8; REPORT_LEN]>,
}

impl ReportSender for TestSender {
    fn send(&mut self, report: &[u8; REPORT_LEN]) {
        self.reports.push(*report);
    }
}
