//! The raw HID display protocol.
//!
//! Every report is [REPORT_LEN] bytes. Byte 0 selects the command and the remaining bytes are
//! command arguments. There is no framing, acknowledgement or sequencing; a report that does not
//! decode is ignored by the keyboard.
//!
//! Two dialects exist. [Variant::Extended] carries an on/off flag for pixel runs, brightness and
//! queries. [Variant::Compact] always turns pixels on, numbers its scroll sub-commands from zero
//! and knows nothing of brightness or queries.

pub const REPORT_LEN: usize = 32;

/// The vendor usage page the raw HID interface declares in its report descriptor.
pub const RAW_USAGE_PAGE: u16 = 0xff60;
/// The usage of the raw HID application collection.
pub const RAW_USAGE: u16 = 0x61;

pub const WRITE: u8 = 1;
pub const PIXEL: u8 = 2;
pub const SCROLL: u8 = 3;
pub const BRIGHTNESS: u8 = 4;
pub const QUERY: u8 = 5;
pub const CLEAR: u8 = 8;

/// Terminates a run of pixel pairs when found in the x position.
pub const PIXEL_END: u8 = 0xff;
/// [CLEAR] argument that wipes the whole display; any other value clears that line.
pub const CLEAR_ALL: u8 = 8;

/// How many pixel pairs the host packs into one extended report, leaving room for the sentinel.
pub const PIXELS_PER_REPORT: usize = REPORT_LEN / 2 - 2;

/// Extended scroll sub-command ids. Compact ids are one less.
pub mod scroll {
    pub const OFF: u8 = 1;
    pub const ON: u8 = 2;
    pub const RIGHT: u8 = 3;
    pub const LEFT: u8 = 4;
    pub const SPEED: u8 = 5;
    pub const AREA: u8 = 6;
}

pub mod query {
    pub const POWER_STATE: u8 = 1;
    pub const POWER_ON: u8 = 2;
    pub const POWER_OFF: u8 = 3;
    pub const LAYER: u8 = 4;
    pub const BRIGHTNESS: u8 = 5;
    pub const MAX_CHARS: u8 = 6;
    pub const MAX_LINES: u8 = 7;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    #[default]
    Extended,
    Compact,
}
impl Variant {
    fn pixel_start(self) -> usize {
        match self {
            Variant::Extended => 2,
            Variant::Compact => 1,
        }
    }

    fn scroll_id(self, extended_id: u8) -> u8 {
        match self {
            Variant::Extended => extended_id,
            Variant::Compact => extended_id - 1,
        }
    }

    fn extended_scroll_id(self, id: u8) -> Option<u8> {
        match self {
            Variant::Extended => Some(id),
            Variant::Compact => id.checked_add(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollOp {
    Off,
    Left,
    Right,
    Speed(u8),
    Area { start: u8, end: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Query {
    PowerState,
    PowerOn,
    PowerOff,
    Layer,
    Brightness,
    MaxChars,
    MaxLines,
}
impl Query {
    pub fn from_u8(id: u8) -> Option<Self> {
        Some(match id {
            query::POWER_STATE => Self::PowerState,
            query::POWER_ON => Self::PowerOn,
            query::POWER_OFF => Self::PowerOff,
            query::LAYER => Self::Layer,
            query::BRIGHTNESS => Self::Brightness,
            query::MAX_CHARS => Self::MaxChars,
            query::MAX_LINES => Self::MaxLines,
            _ => return None,
        })
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::PowerState => query::POWER_STATE,
            Self::PowerOn => query::POWER_ON,
            Self::PowerOff => query::POWER_OFF,
            Self::Layer => query::LAYER,
            Self::Brightness => query::BRIGHTNESS,
            Self::MaxChars => query::MAX_CHARS,
            Self::MaxLines => query::MAX_LINES,
        }
    }

    /// True if the keyboard answers this query with a report.
    pub fn has_answer(self) -> bool {
        !matches!(self, Self::PowerOn | Self::PowerOff)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClearOp {
    All,
    Line(u8),
}

/// A decoded report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Move the cursor to column 0 of `row` and write `text`.
    Write { row: u8, text: &'a [u8] },
    /// Set (or clear) every pixel in `coords`; see [Command::pixels].
    Pixels { on: bool, coords: &'a [u8] },
    Scroll(ScrollOp),
    Brightness(u8),
    Query(Query),
    Clear(ClearOp),
}

impl<'a> Command<'a> {
    /// Decode a report. Reports longer than [REPORT_LEN] are truncated; missing argument bytes
    /// read as zero. Returns `None` for an unknown command or sub-command.
    ///
    /// ```
    /// use oledpad_common::raw_hid::*;
    ///
    /// let report = [WRITE, 2, b'H', b'I', 0, 0];
    /// assert_eq!(
    ///     Command::decode(&report, Variant::Extended),
    ///     Some(Command::Write { row: 2, text: b"HI" })
    /// );
    /// assert_eq!(Command::decode(&[99, 1, 2], Variant::Extended), None);
    /// ```
    pub fn decode(data: &'a [u8], variant: Variant) -> Option<Self> {
        let data = &data[..data.len().min(REPORT_LEN)];
        let arg = |i: usize| data.get(i).copied().unwrap_or(0);

        match *data.first()? {
            WRITE => {
                let text = data.get(2..).unwrap_or_default();
                let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
                Some(Self::Write {
                    row: arg(1),
                    text: &text[..end],
                })
            }
            PIXEL => Some(Self::Pixels {
                on: match variant {
                    Variant::Extended => arg(1) != 0,
                    Variant::Compact => true,
                },
                coords: data.get(variant.pixel_start()..).unwrap_or_default(),
            }),
            SCROLL => {
                let op = match variant.extended_scroll_id(arg(1))? {
                    scroll::OFF => ScrollOp::Off,
                    scroll::ON | scroll::LEFT => ScrollOp::Left,
                    scroll::RIGHT => ScrollOp::Right,
                    scroll::SPEED => ScrollOp::Speed(arg(2)),
                    scroll::AREA => ScrollOp::Area {
                        start: arg(2),
                        end: arg(3),
                    },
                    _ => return None,
                };
                Some(Self::Scroll(op))
            }
            BRIGHTNESS if variant == Variant::Extended => Some(Self::Brightness(arg(1))),
            QUERY if variant == Variant::Extended => Query::from_u8(arg(1)).map(Self::Query),
            CLEAR => Some(Self::Clear(match arg(1) {
                CLEAR_ALL => ClearOp::All,
                line => ClearOp::Line(line),
            })),
            _ => None,
        }
    }

    /// Iterate the (x, y) pairs of a [Command::Pixels]; empty for any other command.
    ///
    /// Iteration stops at [PIXEL_END] in the x position or when a whole pair no longer fits in
    /// the report. Without a sentinel any trailing bytes are treated as pairs.
    pub fn pixels(&self) -> PixelIter<'a> {
        match self {
            Self::Pixels { coords, .. } => PixelIter(coords),
            _ => PixelIter(&[]),
        }
    }

    /// Encode into a zero padded report. Text and pixel runs that do not fit are truncated.
    /// Returns `None` if `variant` has no encoding for this command.
    pub fn encode(&self, variant: Variant) -> Option<[u8; REPORT_LEN]> {
        let mut report = [0; REPORT_LEN];
        match *self {
            Self::Write { row, text } => {
                report[0] = WRITE;
                report[1] = row;
                let n = text.len().min(REPORT_LEN - 2);
                report[2..2 + n].copy_from_slice(&text[..n]);
            }
            Self::Pixels { on, coords } => {
                report[0] = PIXEL;
                let start = variant.pixel_start();
                if variant == Variant::Extended {
                    report[1] = on as u8;
                }
                let n = coords.len().min(REPORT_LEN - start - 1) & !1;
                report[start..start + n].copy_from_slice(&coords[..n]);
                report[start + n] = PIXEL_END;
            }
            Self::Scroll(op) => {
                report[0] = SCROLL;
                let (id, a, b) = match op {
                    ScrollOp::Off => (scroll::OFF, 0, 0),
                    ScrollOp::Left => (scroll::LEFT, 0, 0),
                    ScrollOp::Right => (scroll::RIGHT, 0, 0),
                    ScrollOp::Speed(speed) => (scroll::SPEED, speed, 0),
                    ScrollOp::Area { start, end } => (scroll::AREA, start, end),
                };
                report[1] = variant.scroll_id(id);
                report[2] = a;
                report[3] = b;
            }
            Self::Brightness(level) if variant == Variant::Extended => {
                report[0] = BRIGHTNESS;
                report[1] = level;
            }
            Self::Query(q) if variant == Variant::Extended => {
                report[0] = QUERY;
                report[1] = q.as_u8();
            }
            Self::Brightness(_) | Self::Query(_) => return None,
            Self::Clear(op) => {
                report[0] = CLEAR;
                report[1] = match op {
                    ClearOp::All => CLEAR_ALL,
                    ClearOp::Line(line) => line,
                };
            }
        }
        Some(report)
    }
}

#[derive(Debug, Clone)]
pub struct PixelIter<'a>(&'a [u8]);

impl Iterator for PixelIter<'_> {
    type Item = (u8, u8);

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.0;
        match *data {
            [x, y, ref rest @ ..] if x != PIXEL_END => {
                self.0 = rest;
                Some((x, y))
            }
            _ => {
                self.0 = &[];
                None
            }
        }
    }
}

/// A one byte answer padded to a full report.
pub fn answer(value: u8) -> [u8; REPORT_LEN] {
    let mut report = [0; REPORT_LEN];
    report[0] = value;
    report
}

/// The usage page and usage declared ahead of the first collection of a HID report descriptor.
///
/// ```
/// use oledpad_common::raw_hid::{report_usage, RAW_USAGE, RAW_USAGE_PAGE};
///
/// let desc = [0x06, 0x60, 0xff, 0x09, 0x61, 0xa1, 0x01, 0xc0];
/// assert_eq!(report_usage(&desc), Some((RAW_USAGE_PAGE, RAW_USAGE)));
/// ```
pub fn report_usage(desc: &[u8]) -> Option<(u16, u16)> {
    let mut page = None;
    let mut usage = None;
    let mut i = 0;
    while let Some(&prefix) = desc.get(i) {
        if prefix == 0xfe {
            // long item: data size in the next byte, then its tag
            i += 3 + *desc.get(i + 1)? as usize;
            continue;
        }
        let size = match prefix & 0x03 {
            3 => 4,
            n => n as usize,
        };
        let data = desc.get(i + 1..i + 1 + size)?;
        let value = data
            .iter()
            .rev()
            .fold(0u32, |acc, b| (acc << 8) | *b as u32);
        match prefix & 0xfc {
            // usage page
            0x04 => page = Some(value as u16),
            // usage; four data bytes carry their own page
            0x08 if usage.is_none() => {
                if size == 4 {
                    page = Some((value >> 16) as u16);
                }
                usage = Some(value as u16);
            }
            // collection
            0xa0 => break,
            _ => {}
        }
        i += 1 + size;
    }
    Some((page?, usage?))
}

#[cfg(test)]
#[path = "raw_hid_test.rs"]
mod test;
