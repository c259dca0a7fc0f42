//! The vendor raw HID interface that carries display commands.

use core::{
    mem::MaybeUninit,
    sync::atomic::{AtomicUsize, Ordering},
};
use embassy_futures::select::{select, Either};
use embassy_sync::{blocking_mutex::raw::NoopRawMutex, channel::Channel};
use embassy_usb::{
    class::hid::ReadError,
    control::{InResponse, OutResponse, Recipient, Request, RequestType},
    driver::Driver,
    types::InterfaceNumber,
    Builder, Config, Handler,
};
use oledpad_common::raw_hid::REPORT_LEN;

use crate::{
    hid::{HidReader, HidWriter},
    host::ReportSender,
};

const HID_DESC_DESCTYPE_HID: u8 = 0x21;
const HID_DESC_DESCTYPE_HID_REPORT: u8 = 0x22;
const HID_DESC_SPEC_1_11: [u8; 2] = [0x11, 0x01];
const HID_DESC_COUNTRY_UNSPEC: u8 = 0x00;

const HID_REQ_SET_IDLE: u8 = 0x0a;
const HID_REQ_GET_IDLE: u8 = 0x02;
const HID_REQ_GET_PROTOCOL: u8 = 0x03;
const HID_REQ_SET_PROTOCOL: u8 = 0x0b;

#[rustfmt::skip]
pub const RAW_HID_REPORT_DESC: [u8; 34] = [
    0x06, 0x60, 0xFF, // (GLOBAL) USAGE_PAGE         0xFF60 Vendor Defined
    0x09, 0x61,       // (LOCAL)  USAGE              0xFF600061
    0xA1, 0x01,       // (MAIN)   COLLECTION         0x01 Application
    0x09, 0x62,       //   (LOCAL)  USAGE              0xFF600062 data in
    0x15, 0x00,       //   (GLOBAL) LOGICAL_MINIMUM    0x00 (0)
    0x26, 0xFF, 0x00, //   (GLOBAL) LOGICAL_MAXIMUM    0x00FF (255)
    0x95, 0x20,       //   (GLOBAL) REPORT_COUNT       0x20 (32) Number of fields
    0x75, 0x08,       //   (GLOBAL) REPORT_SIZE        0x08 (8) Number of bits per field
    0x81, 0x02,       //   (MAIN)   INPUT              0x00000002 Data Variable Absolute
    0x09, 0x63,       //   (LOCAL)  USAGE              0xFF600063 data out
    0x15, 0x00,       //   (GLOBAL) LOGICAL_MINIMUM    0x00 (0)
    0x26, 0xFF, 0x00, //   (GLOBAL) LOGICAL_MAXIMUM    0x00FF (255)
    0x95, 0x20,       //   (GLOBAL) REPORT_COUNT       0x20 (32) Number of fields
    0x75, 0x08,       //   (GLOBAL) REPORT_SIZE        0x08 (8) Number of bits per field
    0x91, 0x02,       //   (MAIN)   OUTPUT             0x00000002 Data Variable Absolute
    0xC0,             // (MAIN)   END_COLLECTION     Application
];

/// Internal state for the raw HID interface.
pub struct State<'d> {
    control: MaybeUninit<Control<'d>>,
    out_report_offset: AtomicUsize,
}
impl Default for State<'_> {
    fn default() -> Self {
        Self::new()
    }
}
impl State<'_> {
    pub const fn new() -> Self {
        State {
            control: MaybeUninit::uninit(),
            out_report_offset: AtomicUsize::new(0),
        }
    }
}

const CONFIG_SIZE: usize = 128;
const BOS_SIZE: usize = 32;
const MSOS_SIZE: usize = 0;
const CONTROL_SIZE: usize = 64;

pub struct UsbBuffers {
    config_descriptor_buf: [u8; CONFIG_SIZE],
    bos_descriptor_buf: [u8; BOS_SIZE],
    msos_descriptor_buf: [u8; MSOS_SIZE],
    control_buf: [u8; CONTROL_SIZE],
}

impl Default for UsbBuffers {
    fn default() -> Self {
        Self {
            config_descriptor_buf: [0; CONFIG_SIZE],
            bos_descriptor_buf: [0; BOS_SIZE],
            msos_descriptor_buf: [0; MSOS_SIZE],
            control_buf: [0; CONTROL_SIZE],
        }
    }
}

pub struct Configurator<'d> {
    device_config: Option<Config<'d>>,
    poll_ms: u8,
}

impl<'d> Configurator<'d> {
    pub fn new(device_config: Config<'d>) -> Self {
        Self {
            device_config: Some(device_config),
            poll_ms: 1,
        }
    }

    /// Builder for a board that owns the whole USB device. Boards whose framework already has a
    /// builder skip this and call [Self::add_raw_hid_iface] on theirs.
    pub fn usb_builder<D: Driver<'d>>(
        &mut self,
        driver: D,
        buffers: &'d mut UsbBuffers,
    ) -> Option<Builder<'d, D>> {
        self.device_config.take().map(|device_config| {
            Builder::new(
                driver,
                device_config,
                &mut buffers.config_descriptor_buf,
                &mut buffers.bos_descriptor_buf,
                &mut buffers.msos_descriptor_buf,
                &mut buffers.control_buf,
            )
        })
    }

    /// Add the raw HID interface with one interrupt endpoint each way.
    pub fn add_raw_hid_iface<D: Driver<'d>>(
        &self,
        builder: &mut Builder<'d, D>,
        state: &'d mut State<'d>,
    ) -> RawHidPort<'d, D> {
        let mut func = builder.function(3, 0, 0);
        let mut iface = func.interface();
        let if_num = iface.interface_number();
        let mut alt = iface.alt_setting(3, 0, 0, None);

        let control = Control::new(if_num, &RAW_HID_REPORT_DESC, &state.out_report_offset);
        alt.descriptor(HID_DESC_DESCTYPE_HID, &control.hid_descriptor[2..]);

        let ep_in = alt.endpoint_interrupt_in(REPORT_LEN as u16, self.poll_ms);
        let ep_out = alt.endpoint_interrupt_out(REPORT_LEN as u16, self.poll_ms);

        drop(func);

        let control = state.control.write(control);
        builder.handler(control);
        RawHidPort::new(
            HidReader::new(ep_out, &state.out_report_offset),
            HidWriter::new(ep_in),
        )
    }
}

struct Control<'d> {
    if_num: InterfaceNumber,
    report_descriptor: &'d [u8],
    out_report_offset: &'d AtomicUsize,
    idle_ms: u32,
    hid_descriptor: [u8; 9],
}
impl<'d> Control<'d> {
    fn new(
        if_num: InterfaceNumber,
        report_descriptor: &'d [u8],
        out_report_offset: &'d AtomicUsize,
    ) -> Self {
        Control {
            if_num,
            report_descriptor,
            out_report_offset,
            idle_ms: u32::MAX,
            hid_descriptor: [
                9,                                           // Length of buf inclusive of size prefix
                HID_DESC_DESCTYPE_HID,                       // Descriptor type
                HID_DESC_SPEC_1_11[0],                       // HID Class spec version
                HID_DESC_SPEC_1_11[1],                       //
                HID_DESC_COUNTRY_UNSPEC,                     // Country code not supported
                1,                                           // Number of following descriptors
                HID_DESC_DESCTYPE_HID_REPORT,                // Report descriptor follows
                (report_descriptor.len() & 0xFF) as u8,      // Report descriptor size
                (report_descriptor.len() >> 8 & 0xFF) as u8, //
            ],
        }
    }
}
impl Handler for Control<'_> {
    fn reset(&mut self) {
        self.out_report_offset.store(0, Ordering::Release);
    }

    fn control_out(&mut self, req: Request, _data: &[u8]) -> Option<OutResponse> {
        if (req.request_type, req.recipient, req.index)
            != (
                RequestType::Class,
                Recipient::Interface,
                self.if_num.0 as u16,
            )
        {
            return None;
        }

        match req.request {
            HID_REQ_SET_IDLE => {
                let dur = u32::from(req.value >> 8);
                self.idle_ms = if dur == 0 { u32::MAX } else { 4 * dur };
                Some(OutResponse::Accepted)
            }
            HID_REQ_SET_PROTOCOL if req.value == 1 => Some(OutResponse::Accepted),
            _ => Some(OutResponse::Rejected),
        }
    }

    fn control_in<'a>(&'a mut self, req: Request, buf: &'a mut [u8]) -> Option<InResponse<'a>> {
        if req.index != self.if_num.0 as u16 {
            return None;
        }

        match (req.request_type, req.recipient) {
            (RequestType::Standard, Recipient::Interface) => match req.request {
                Request::GET_DESCRIPTOR => match (req.value >> 8) as u8 {
                    HID_DESC_DESCTYPE_HID_REPORT => {
                        Some(InResponse::Accepted(self.report_descriptor))
                    }
                    HID_DESC_DESCTYPE_HID => Some(InResponse::Accepted(&self.hid_descriptor)),
                    _ => Some(InResponse::Rejected),
                },
                _ => Some(InResponse::Rejected),
            },
            (RequestType::Class, Recipient::Interface) => match req.request {
                HID_REQ_GET_IDLE => {
                    buf[0] = u8::try_from(self.idle_ms / 4).unwrap_or(0);
                    Some(InResponse::Accepted(&buf[0..1]))
                }
                HID_REQ_GET_PROTOCOL => {
                    buf[0] = 1;
                    Some(InResponse::Accepted(&buf[0..1]))
                }
                _ => Some(InResponse::Rejected),
            },
            _ => None,
        }
    }
}

/// Answers waiting to go to the host. Callbacks fill it synchronously; the port drains it.
pub type ReportQueue<const N: usize> = Channel<NoopRawMutex, [u8; REPORT_LEN], N>;

/// [ReportSender] that queues onto a [ReportQueue], dropping reports when it is full.
pub struct QueueSender<'q, const N: usize>(pub &'q ReportQueue<N>);

impl<const N: usize> ReportSender for QueueSender<'_, N> {
    fn send(&mut self, report: &[u8; REPORT_LEN]) {
        if self.0.try_send(*report).is_err() {
            crate::warn!("raw hid queue full, dropping report {}", report[0]);
        }
    }
}

pub struct RawHidPort<'d, D: Driver<'d>> {
    reader: HidReader<'d, D, REPORT_LEN>,
    writer: HidWriter<'d, D, REPORT_LEN>,
}

impl<'d, D: Driver<'d>> RawHidPort<'d, D> {
    pub fn new(reader: HidReader<'d, D, REPORT_LEN>, writer: HidWriter<'d, D, REPORT_LEN>) -> Self {
        Self { reader, writer }
    }

    /// Wait for the next inbound report or queued answer. An answer is written out and `None`
    /// returned; an inbound report is left in `buf` and its length returned.
    ///
    /// Keep passing the same `buf`: a read cut short by a queued answer finishes on the next
    /// call.
    pub async fn step<const N: usize>(
        &mut self,
        queue: &ReportQueue<N>,
        buf: &mut [u8; REPORT_LEN],
    ) -> Option<usize> {
        match select(self.reader.read(buf), queue.receive()).await {
            Either::First(Ok(len)) => Some(len),
            Either::First(Err(ReadError::Sync(range))) => Some(range.end),
            Either::First(Err(ReadError::BufferOverflow)) => {
                crate::warn!(
                    "host sent a report longer than {} bytes",
                    REPORT_LEN
                );
                None
            }
            Either::First(Err(ReadError::Disabled)) => {
                self.reader.wait_enabled().await;
                None
            }
            Either::Second(report) => {
                if let Err(err) = self.writer.write(&report).await {
                    crate::warn!("raw hid write failed {:?}", err);
                }
                None
            }
        }
    }

    /// Serve the interface forever, handing each inbound report to `receive`.
    pub async fn run<const N: usize>(
        mut self,
        queue: &ReportQueue<N>,
        mut receive: impl FnMut(&[u8], &mut QueueSender<'_, N>),
    ) -> ! {
        let mut buf = [0; REPORT_LEN];
        loop {
            if let Some(len) = self.step(queue, &mut buf).await {
                let report = &mut buf[..len.min(REPORT_LEN)];
                receive(report, &mut QueueSender(queue));
                report.fill(0);
            }
        }
    }
}

#[cfg(test)]
#[path = "usb_test.rs"]
mod test;
