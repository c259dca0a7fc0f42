extern crate std;

use std::{string::String, vec::Vec};

use crate::display::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    SetCursor(u8, u8),
    Write(String),
    WriteRaw(usize),
    Pixel(u8, u8, bool),
    Clear,
    AdvancePage(bool),
    RenderDirty(bool),
    ScrollOff,
    ScrollLeft,
    ScrollRight,
    ScrollSpeed(u8),
    ScrollArea(u8, u8),
    SetBrightness(u8),
    On,
    Off,
}

/// Records every mutating call; getters answer from plain fields.
pub struct TestDisplay {
    pub calls: Vec<DisplayCall>,
    pub on: bool,
    pub brightness: u8,
    pub max_chars: u8,
    pub max_lines: u8,
}

impl Default for TestDisplay {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            on: true,
            brightness: 128,
            max_chars: 21,
            max_lines: 8,
        }
    }
}

impl TestDisplay {
    /// All text written since the last call, concatenated.
    pub fn take_text(&mut self) -> String {
        let text = self
            .calls
            .iter()
            .filter_map(|c| match c {
                DisplayCall::Write(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        self.calls.clear();
        text
    }
}

impl Display for TestDisplay {
    fn set_cursor(&mut self, col: u8, row: u8) {
        self.calls.push(DisplayCall::SetCursor(col, row));
    }

    fn write(&mut self, text: &str) {
        self.calls.push(DisplayCall::Write(text.into()));
    }

    fn write_raw(&mut self, data: &[u8]) {
        self.calls.push(DisplayCall::WriteRaw(data.len()));
    }

    fn write_pixel(&mut self, x: u8, y: u8, on: bool) {
        self.calls.push(DisplayCall::Pixel(x, y, on));
    }

    fn clear(&mut self) {
        self.calls.push(DisplayCall::Clear);
    }

    fn advance_page(&mut self, clear_page: bool) {
        self.calls.push(DisplayCall::AdvancePage(clear_page));
    }

    fn render_dirty(&mut self, all: bool) {
        self.calls.push(DisplayCall::RenderDirty(all));
    }

    fn scroll_off(&mut self) {
        self.calls.push(DisplayCall::ScrollOff);
    }

    fn scroll_left(&mut self) {
        self.calls.push(DisplayCall::ScrollLeft);
    }

    fn scroll_right(&mut self) {
        self.calls.push(DisplayCall::ScrollRight);
    }

    fn scroll_set_speed(&mut self, speed: u8) {
        self.calls.push(DisplayCall::ScrollSpeed(speed));
    }

    fn scroll_set_area(&mut self, start_line: u8, end_line: u8) {
        self.calls.push(DisplayCall::ScrollArea(start_line, end_line));
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
        self.calls.push(DisplayCall::SetBrightness(level));
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn is_on(&self) -> bool {
        self.on
    }

    fn on(&mut self) {
        self.on = true;
        self.calls.push(DisplayCall::On);
    }

    fn off(&mut self) {
        self.on = false;
        self.calls.push(DisplayCall::Off);
    }

    fn max_chars(&self) -> u8 {
        self.max_chars
    }

    fn max_lines(&self) -> u8 {
        self.max_lines
    }
}
