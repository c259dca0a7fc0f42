//! Turns raw HID reports into display primitive calls.

use oledpad_common::raw_hid::{answer, ClearOp, Command, Query, ScrollOp, Variant};

use crate::{display::Display, host::ReportSender};

/// Raw HID receive state for one board.
#[derive(Debug, Default)]
pub struct Dispatcher {
    variant: Variant,
    connected: bool,
}

impl Dispatcher {
    pub const fn new(variant: Variant) -> Self {
        Self {
            variant,
            connected: false,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// True once any report has arrived from the host.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Handle one inbound report. `layer` is the current highest layer, used to answer
    /// [Query::Layer]. Reports that do not decode are dropped without an answer.
    pub fn receive<D, S>(&mut self, data: &[u8], display: &mut D, layer: u8, sender: &mut S)
    where
        D: Display + ?Sized,
        S: ReportSender + ?Sized,
    {
        self.connected = true;
        match Command::decode(data, self.variant) {
            Some(cmd) => dispatch(&cmd, display, layer, sender),
            None => crate::debug!(
                "ignoring raw hid report {:?}",
                data.get(..2).unwrap_or(data)
            ),
        }
    }

    /// Tell a connected host about a layer change.
    pub fn layer_changed<S: ReportSender + ?Sized>(&self, layer: u8, sender: &mut S) {
        if self.connected {
            sender.send(&answer(layer));
        }
    }
}

/// Apply a decoded command. Queries with an answer send exactly one report.
pub fn dispatch<D, S>(cmd: &Command<'_>, display: &mut D, layer: u8, sender: &mut S)
where
    D: Display + ?Sized,
    S: ReportSender + ?Sized,
{
    match *cmd {
        Command::Write { row, text } => {
            display.set_cursor(0, row);
            display.write(text_str(text));
        }
        Command::Pixels { on, .. } => {
            for (x, y) in cmd.pixels() {
                display.write_pixel(x, y, on);
            }
        }
        Command::Scroll(op) => match op {
            ScrollOp::Off => display.scroll_off(),
            ScrollOp::Left => display.scroll_left(),
            ScrollOp::Right => display.scroll_right(),
            ScrollOp::Speed(speed) => display.scroll_set_speed(speed),
            ScrollOp::Area { start, end } => display.scroll_set_area(start, end),
        },
        Command::Brightness(level) => display.set_brightness(level),
        Command::Query(query) => {
            let value = match query {
                Query::PowerState => display.is_on() as u8,
                Query::PowerOn => return display.on(),
                Query::PowerOff => return display.off(),
                Query::Layer => layer,
                Query::Brightness => display.brightness(),
                Query::MaxChars => display.max_chars(),
                Query::MaxLines => display.max_lines(),
            };
            sender.send(&answer(value));
        }
        Command::Clear(ClearOp::All) => display.clear(),
        Command::Clear(ClearOp::Line(row)) => {
            display.set_cursor(0, row);
            display.advance_page(true);
        }
    }
}

/// The longest valid UTF-8 prefix of `text`.
fn text_str(text: &[u8]) -> &str {
    match core::str::from_utf8(text) {
        Ok(s) => s,
        Err(err) => core::str::from_utf8(&text[..err.valid_up_to()]).unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod test;
