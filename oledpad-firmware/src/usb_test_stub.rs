extern crate std;
use core::cmp::min;
use embassy_sync::{blocking_mutex::raw::NoopRawMutex, channel::Channel};
use embassy_usb::driver::{
    Bus, ControlPipe, Driver, Endpoint, EndpointAddress, EndpointAllocError, EndpointError,
    EndpointIn, EndpointInfo, EndpointOut, EndpointType, Event, Unsupported,
};
use std::{cell::RefCell, rc::Rc};
use std::vec::Vec;

/// Packets passed between a test and a stub endpoint.
#[derive(Clone)]
pub struct PacketChannel(Rc<Channel<NoopRawMutex, Vec<u8>, 10>>);
impl PacketChannel {
    pub async fn send(&self, packet: Vec<u8>) {
        self.0.send(packet).await;
    }

    pub fn push(&self, packet: &[u8]) {
        if self.0.try_send(Vec::from(packet)).is_err() {
            panic!("packet channel full");
        }
    }

    pub fn try_get(&self) -> Option<Vec<u8>> {
        self.0.try_receive().ok()
    }

    pub async fn receive(&self) -> Vec<u8> {
        self.0.receive().await
    }
}

impl Default for PacketChannel {
    fn default() -> Self {
        Self(Rc::new(Channel::new()))
    }
}

fn info(ep_type: EndpointType, max_packet_size: u16, interval_ms: u8) -> EndpointInfo {
    EndpointInfo {
        addr: EndpointAddress::from(0),
        ep_type,
        max_packet_size,
        interval_ms,
    }
}

pub struct StubEndpointIn {
    pub packets: PacketChannel,
    pub info: EndpointInfo,
}
impl StubEndpointIn {
    pub fn new(max_packet_size: u16) -> Self {
        Self {
            packets: PacketChannel::default(),
            info: info(EndpointType::Interrupt, max_packet_size, 1),
        }
    }
}
impl Endpoint for StubEndpointIn {
    fn info(&self) -> &EndpointInfo {
        &self.info
    }

    async fn wait_enabled(&mut self) {}
}
impl EndpointIn for StubEndpointIn {
    async fn write(&mut self, buf: &[u8]) -> Result<(), EndpointError> {
        self.packets.send(Vec::from(buf)).await;
        Ok(())
    }
}

pub struct StubEndpointOut {
    pub packets: PacketChannel,
    pub info: EndpointInfo,
}
impl StubEndpointOut {
    pub fn new(max_packet_size: u16) -> Self {
        Self {
            packets: PacketChannel::default(),
            info: info(EndpointType::Interrupt, max_packet_size, 1),
        }
    }
}
impl Endpoint for StubEndpointOut {
    fn info(&self) -> &EndpointInfo {
        &self.info
    }

    async fn wait_enabled(&mut self) {}
}
impl EndpointOut for StubEndpointOut {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, EndpointError> {
        let packet = self.packets.receive().await;
        if packet.len() > buf.len() {
            return Err(EndpointError::BufferOverflow);
        }
        let n = min(buf.len(), packet.len());
        buf[..n].copy_from_slice(&packet[..n]);
        Ok(n)
    }
}

pub struct StubBus;
impl Bus for StubBus {
    async fn enable(&mut self) {}

    async fn disable(&mut self) {}

    async fn poll(&mut self) -> Event {
        unimplemented!()
    }

    fn endpoint_set_enabled(&mut self, _ep_addr: EndpointAddress, _enabled: bool) {}

    fn endpoint_set_stalled(&mut self, _ep_addr: EndpointAddress, _stalled: bool) {}

    fn endpoint_is_stalled(&mut self, _ep_addr: EndpointAddress) -> bool {
        false
    }

    async fn remote_wakeup(&mut self) -> Result<(), Unsupported> {
        Err(Unsupported)
    }
}

pub struct StubControlPipe;
impl ControlPipe for StubControlPipe {
    fn max_packet_size(&self) -> usize {
        64
    }

    async fn setup(&mut self) -> [u8; 8] {
        unimplemented!()
    }

    async fn data_out(
        &mut self,
        _buf: &mut [u8],
        _first: bool,
        _last: bool,
    ) -> Result<usize, EndpointError> {
        unimplemented!()
    }

    async fn data_in(&mut self, _data: &[u8], _first: bool, _last: bool) -> Result<(), EndpointError> {
        unimplemented!()
    }

    async fn accept(&mut self) {}

    async fn reject(&mut self) {}

    async fn accept_set_address(&mut self, _addr: u8) {}
}

/// Hands out stub endpoints and remembers their packet channels. Clone it before handing it to
/// a builder to keep access to the endpoints.
#[derive(Default, Clone)]
pub struct StubDriver {
    pub ins: Rc<RefCell<Vec<PacketChannel>>>,
    pub outs: Rc<RefCell<Vec<PacketChannel>>>,
}
impl Driver<'_> for StubDriver {
    type EndpointOut = StubEndpointOut;

    type EndpointIn = StubEndpointIn;

    type ControlPipe = StubControlPipe;

    type Bus = StubBus;

    fn alloc_endpoint_out(
        &mut self,
        _ep_type: EndpointType,
        max_packet_size: u16,
        _interval_ms: u8,
    ) -> Result<Self::EndpointOut, EndpointAllocError> {
        let ep = StubEndpointOut::new(max_packet_size);
        self.outs.borrow_mut().push(ep.packets.clone());
        Ok(ep)
    }

    fn alloc_endpoint_in(
        &mut self,
        _ep_type: EndpointType,
        max_packet_size: u16,
        _interval_ms: u8,
    ) -> Result<Self::EndpointIn, EndpointAllocError> {
        let ep = StubEndpointIn::new(max_packet_size);
        self.ins.borrow_mut().push(ep.packets.clone());
        Ok(ep)
    }

    fn start(self, _control_max_packet_size: u16) -> (Self::Bus, Self::ControlPipe) {
        (StubBus, StubControlPipe)
    }
}
