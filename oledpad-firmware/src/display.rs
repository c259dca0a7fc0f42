//! The OLED driver as seen from keymap code.
//!
//! The pixel buffer, fonts and the bus to the panel belong to the firmware framework; keymaps only
//! call these primitives. Cursor positions are in characters, pixel positions in pixels.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

pub trait Display {
    fn set_cursor(&mut self, col: u8, row: u8);
    /// Write text at the cursor, wrapping at the end of a line. `\n` moves to the next line.
    fn write(&mut self, text: &str);
    /// Write text followed by a line advance.
    fn write_ln(&mut self, text: &str) {
        self.write(text);
        self.advance_page(true);
    }
    /// Copy `data` straight into the pixel buffer from its start.
    fn write_raw(&mut self, data: &[u8]);
    fn write_pixel(&mut self, x: u8, y: u8, on: bool);
    fn clear(&mut self);
    /// Move the cursor to the start of the next line, optionally blanking the rest of this one.
    fn advance_page(&mut self, clear_page: bool);
    /// Push the buffer to the panel now rather than at the next render tick.
    fn render_dirty(&mut self, all: bool);

    fn scroll_off(&mut self);
    fn scroll_left(&mut self);
    fn scroll_right(&mut self);
    fn scroll_set_speed(&mut self, speed: u8);
    fn scroll_set_area(&mut self, start_line: u8, end_line: u8);

    fn set_brightness(&mut self, level: u8);
    fn brightness(&self) -> u8;

    fn is_on(&self) -> bool;
    fn on(&mut self);
    fn off(&mut self);

    fn max_chars(&self) -> u8;
    fn max_lines(&self) -> u8;
}
