use std::{
    sync::{
        mpsc::{self, RecvTimeoutError},
        Arc, Mutex,
    },
    thread::sleep,
    time::Duration,
};

use anyhow::{anyhow, Result};
use futures_lite::future::block_on;
use log::{debug, info, warn};
use nusb::transfer::{Control, ControlType, Direction, EndpointType, Recipient, RequestBuffer};
use oledpad_common::raw_hid::{
    report_usage, ClearOp, Command, Query, ScrollOp, Variant, PIXELS_PER_REPORT, RAW_USAGE,
    RAW_USAGE_PAGE, REPORT_LEN,
};

const HID_CLASS: u8 = 3;
const GET_DESCRIPTOR: u8 = 0x06;
const HID_REPORT_DESCRIPTOR: u8 = 0x22;
const REPORT_DESCRIPTOR_MAX: usize = 1024;
const CONTROL_TIMEOUT: Duration = Duration::from_millis(500);
const ANSWER_TIMEOUT: Duration = Duration::from_millis(200);
const POWER_ON_SETTLE: Duration = Duration::from_millis(500);
const POWER_OFF_SETTLE: Duration = Duration::from_millis(200);

pub trait KeyboardInterface {
    fn interrupt_out(&self, endpoint: u8, buf: Vec<u8>) -> Result<()>;
    fn interrupt_in(&self, endpoint: u8, max_len: u16) -> Result<Vec<u8>>;
    /// The HID report descriptor of `interface`.
    fn report_descriptor(&self, interface: u8) -> Result<Vec<u8>>;
}

/// A HID interface with interrupt endpoints both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HidCandidate {
    pub interface: u8,
    pub epout: u8,
    pub epin: u8,
}

/// Which HID interface carries the display commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHidMatch {
    /// Only consider this interface number.
    pub interface: Option<u8>,
    pub usage_page: u16,
    pub usage: u16,
}

impl Default for RawHidMatch {
    fn default() -> Self {
        Self {
            interface: None,
            usage_page: RAW_USAGE_PAGE,
            usage: RAW_USAGE,
        }
    }
}

pub trait HidDevice {
    type Interface: KeyboardInterface;

    fn hid_candidates(&self) -> Vec<HidCandidate>;
    fn claim(&self, interface: u8) -> Result<Self::Interface>;
}

impl HidDevice for nusb::Device {
    type Interface = nusb::Interface;

    fn hid_candidates(&self) -> Vec<HidCandidate> {
        let mut found = Vec::new();
        for config in self.configurations() {
            for group in config.interfaces() {
                let candidate = group
                    .alt_settings()
                    .filter(|a| a.class() == HID_CLASS)
                    .find_map(|a| {
                        let mut epout = None;
                        let mut epin = None;
                        for ep in a
                            .endpoints()
                            .filter(|ep| ep.transfer_type() == EndpointType::Interrupt)
                        {
                            match ep.direction() {
                                Direction::Out => epout = Some(ep.address()),
                                Direction::In => epin = Some(ep.address()),
                            }
                        }
                        Some(HidCandidate {
                            interface: a.interface_number(),
                            epout: epout?,
                            epin: epin?,
                        })
                    });
                found.extend(candidate);
            }
        }
        found
    }

    fn claim(&self, interface: u8) -> Result<nusb::Interface> {
        Ok(self.detach_and_claim_interface(interface)?)
    }
}

impl KeyboardInterface for nusb::Interface {
    fn interrupt_out(&self, endpoint: u8, buf: Vec<u8>) -> Result<()> {
        block_on((self as &nusb::Interface).interrupt_out(endpoint, buf))
            .into_result()
            .map_err(|err| anyhow!("USB comms error: {}", err))?;
        Ok(())
    }

    fn interrupt_in(&self, endpoint: u8, max_len: u16) -> Result<Vec<u8>> {
        block_on(
            (self as &nusb::Interface).interrupt_in(endpoint, RequestBuffer::new(max_len as usize)),
        )
        .into_result()
        .map_err(|err| anyhow!("USB comms error: {}", err))
    }

    fn report_descriptor(&self, interface: u8) -> Result<Vec<u8>> {
        let mut buf = vec![0; REPORT_DESCRIPTOR_MAX];
        let len = self
            .control_in_blocking(
                Control {
                    control_type: ControlType::Standard,
                    recipient: Recipient::Interface,
                    request: GET_DESCRIPTOR,
                    value: (HID_REPORT_DESCRIPTOR as u16) << 8,
                    index: interface as u16,
                },
                &mut buf,
                CONTROL_TIMEOUT,
            )
            .map_err(|err| anyhow!("USB comms error: {}", err))?;
        buf.truncate(len);
        Ok(buf)
    }
}

pub type AnswerSender = mpsc::Sender<Vec<u8>>;

pub struct AnswerReceiver(mpsc::Receiver<Vec<u8>>);
impl AnswerReceiver {
    fn recv(&mut self) -> std::result::Result<Vec<u8>, RecvTimeoutError> {
        self.0.recv_timeout(ANSWER_TIMEOUT)
    }
}

/// Sends display commands to a keyboard and collects its answers.
///
/// Answers carry no id so only one query may wait at a time. Reports that arrive while nothing
/// waits are layer changes pushed by the keyboard.
pub struct DisplayCtl<I: KeyboardInterface> {
    intf: I,
    epout: u8,
    epin: u8,
    variant: Variant,
    waiting: Arc<Mutex<Option<AnswerSender>>>,
}

impl<I: KeyboardInterface> DisplayCtl<I> {
    pub fn new(intf: I, epout: u8, epin: u8, variant: Variant) -> Self {
        Self {
            intf,
            epout,
            epin,
            variant,
            waiting: Default::default(),
        }
    }

    /// Claim the first HID interface whose report descriptor declares the wanted usage page
    /// and usage.
    pub fn find_raw_hid_interface<D: HidDevice<Interface = I>>(
        dev: &D,
        want: &RawHidMatch,
        variant: Variant,
    ) -> Result<Self> {
        for c in dev.hid_candidates() {
            if want.interface.is_some_and(|n| n != c.interface) {
                continue;
            }
            let intf = match dev.claim(c.interface) {
                Ok(intf) => intf,
                Err(err) => {
                    debug!("interface {}: {err}", c.interface);
                    continue;
                }
            };
            match intf.report_descriptor(c.interface) {
                Ok(desc) => match report_usage(&desc) {
                    Some((page, usage)) if page == want.usage_page && usage == want.usage => {
                        debug!(
                            "raw hid interface {} out: {:#04x} in: {:#04x}",
                            c.interface, c.epout, c.epin
                        );
                        return Ok(DisplayCtl::new(intf, c.epout, c.epin, variant));
                    }
                    found => debug!("interface {} usage {found:x?}", c.interface),
                },
                Err(err) => debug!("interface {} report descriptor: {err}", c.interface),
            }
        }
        Err(anyhow!(
            "Raw HID interface not found (usage page {:#06x}, usage {:#04x})",
            want.usage_page,
            want.usage
        ))
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn clear(&self) -> Result<()> {
        self.send(Command::Clear(ClearOp::All))
    }

    pub fn clear_line(&self, line: u8) -> Result<()> {
        self.send(Command::Clear(ClearOp::Line(line)))
    }

    /// Write `text` at the start of `line`. Text that does not fit one report is cut short.
    pub fn write(&self, line: u8, text: &str) -> Result<()> {
        self.send(Command::Write {
            row: line,
            text: text.as_bytes(),
        })
    }

    /// Clear `line` then write `text` to it.
    pub fn write_line(&self, line: u8, text: &str) -> Result<()> {
        self.clear_line(line)?;
        self.write(line, text)
    }

    /// Turn a set of pixels on or off, as many reports as it takes.
    pub fn pixels(&self, on: bool, pixels: impl IntoIterator<Item = (u8, u8)>) -> Result<()> {
        if !on && self.variant == Variant::Compact {
            return Err(anyhow!("The compact protocol can only turn pixels on"));
        }
        let coords: Vec<u8> = pixels.into_iter().flat_map(|(x, y)| [x, y]).collect();
        for chunk in coords.chunks(PIXELS_PER_REPORT * 2) {
            self.send(Command::Pixels { on, coords: chunk })?;
        }
        Ok(())
    }

    pub fn scroll(&self, op: ScrollOp) -> Result<()> {
        self.send(Command::Scroll(op))
    }

    pub fn brightness(&self, level: u8) -> Result<()> {
        self.send(Command::Brightness(level))
    }

    pub fn on(&self) -> Result<()> {
        self.send(Command::Query(Query::PowerOn))?;
        sleep(POWER_ON_SETTLE);
        Ok(())
    }

    pub fn off(&self) -> Result<()> {
        self.send(Command::Query(Query::PowerOff))?;
        sleep(POWER_OFF_SETTLE);
        Ok(())
    }

    /// Ask the keyboard for a value. Fails if no answer arrives within 200ms.
    pub fn query(&self, query: Query) -> Result<u8> {
        if !query.has_answer() {
            return Err(anyhow!("{query:?} has no answer"));
        }

        let mut receiver = self.expect_answer()?;

        if let Err(err) = self.send(Command::Query(query)) {
            self.stop_waiting();
            return Err(err);
        }

        match receiver.recv() {
            Ok(data) => data
                .first()
                .copied()
                .ok_or_else(|| anyhow!("Empty answer to {query:?}")),
            Err(err) => {
                self.stop_waiting();
                Err(anyhow!("No answer to {query:?}: {err}"))
            }
        }
    }

    /// Show `frames` one after another on `line`.
    pub fn scroll_text<S: AsRef<str>>(
        &self,
        line: u8,
        frames: impl IntoIterator<Item = S>,
        delay: Duration,
    ) -> Result<()> {
        for frame in frames {
            self.write_line(line, frame.as_ref())?;
            sleep(delay);
        }
        Ok(())
    }

    /// Read reports forever handing answers to the waiting query.
    pub fn listen(&self) {
        loop {
            match self.intf.interrupt_in(self.epin, REPORT_LEN as u16) {
                Ok(msg) if !msg.is_empty() => {
                    let waiting = match self.waiting.lock() {
                        Ok(mut guard) => guard.take(),
                        Err(_) => return,
                    };
                    match waiting {
                        Some(sender) => {
                            if let Err(err) = sender.send(msg) {
                                warn!("{err:?}");
                            }
                        }
                        None => info!("keyboard moved to layer {}", msg[0]),
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    warn!("{err:?}");
                }
            }
        }
    }

    fn send(&self, command: Command) -> Result<()> {
        let report = command
            .encode(self.variant)
            .ok_or_else(|| anyhow!("{command:?} is not supported by the {:?} protocol", self.variant))?;
        self.intf.interrupt_out(self.epout, report.to_vec())
    }

    fn expect_answer(&self) -> Result<AnswerReceiver> {
        let mut guard = self
            .waiting
            .lock()
            .map_err(|_| anyhow!("Answer listener failed"))?;

        if guard.is_some() {
            return Err(anyhow!("Already waiting for an answer"));
        }
        let (sender, receiver) = mpsc::channel();
        *guard = Some(sender);
        Ok(AnswerReceiver(receiver))
    }

    fn stop_waiting(&self) {
        if let Ok(mut guard) = self.waiting.lock() {
            guard.take();
        }
    }
}

/// The successive views of `text` scrolling through a line `columns` characters wide.
///
/// Short text is padded to one more than the line width and long text gets five trailing
/// spaces, so the text leaves the line before it wraps. The last frame repeats the first.
pub fn marquee_frames(text: &str, columns: usize, left: bool) -> Vec<String> {
    let mut chars: Vec<char> = text.chars().collect();
    let width = if chars.len() < columns {
        columns + 1
    } else {
        chars.len() + 5
    };
    chars.resize(width, ' ');

    let mut frames = Vec::with_capacity(width + 1);
    frames.push(chars.iter().take(columns).collect());
    for _ in 0..width {
        if left {
            chars.rotate_left(1);
        } else {
            chars.rotate_right(1);
        }
        frames.push(chars.iter().take(columns).collect());
    }
    frames
}

#[cfg(test)]
#[path = "display_coms_test.rs"]
mod test;
