//! Layer status lines for the OLED.

use core::fmt::Write as _;

use heapless::String;

use crate::display::Display;

/// How a board labels its layers.
#[derive(Debug, Clone, Copy)]
pub struct LayerStatus {
    pub label: &'static str,
    /// Names by layer index. Empty means layers are shown as numbers.
    pub names: &'static [&'static str],
    /// Shown for a layer with no name.
    pub unknown: &'static str,
    pub newline: bool,
}

impl LayerStatus {
    pub const fn numbered(label: &'static str) -> Self {
        Self {
            label,
            names: &[],
            unknown: "undefined",
            newline: true,
        }
    }

    pub const fn named(label: &'static str, names: &'static [&'static str]) -> Self {
        Self {
            label,
            names,
            unknown: "undefined",
            newline: true,
        }
    }

    pub fn render<D: Display + ?Sized>(&self, display: &mut D, layer: u8) {
        display.write(self.label);
        if self.names.is_empty() {
            display.write(&layer_number(layer));
        } else {
            display.write(self.names.get(layer as usize).unwrap_or(&self.unknown));
        }
        if self.newline {
            display.write("\n");
        }
    }
}

/// `layer` as decimal text.
pub fn layer_number(layer: u8) -> String<3> {
    let mut text = String::new();
    // a u8 never needs more than three digits
    let _ = write!(text, "{layer}");
    text
}

#[cfg(test)]
#[path = "status_test.rs"]
mod test;
