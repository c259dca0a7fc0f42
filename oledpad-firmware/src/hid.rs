use core::sync::atomic::{AtomicUsize, Ordering};
use embassy_usb::{
    class::hid::ReadError,
    driver::{Driver, Endpoint, EndpointError, EndpointIn, EndpointOut},
};

/// Interrupt IN half of a raw HID interface. Reports are `N` bytes.
pub struct HidWriter<'d, D: Driver<'d>, const N: usize> {
    ep_in: D::EndpointIn,
}

impl<'d, D: Driver<'d>, const N: usize> HidWriter<'d, D, N> {
    pub fn new(ep_in: D::EndpointIn) -> Self {
        Self { ep_in }
    }

    pub fn max_packet_size(&self) -> u16 {
        self.ep_in.info().max_packet_size
    }

    /// Write one full report, split into packets. No zero length packet follows.
    pub async fn write(&mut self, report: &[u8; N]) -> Result<(), EndpointError> {
        let max_packet_size = usize::from(self.max_packet_size()).max(1);
        for chunk in report.chunks(max_packet_size) {
            self.ep_in.write(chunk).await?;
        }
        Ok(())
    }
}

/// Interrupt OUT half of a raw HID interface.
pub struct HidReader<'d, D: Driver<'d>, const N: usize> {
    ep_out: D::EndpointOut,
    offset: &'d AtomicUsize,
}

impl<'d, D: Driver<'d>, const N: usize> HidReader<'d, D, N> {
    pub fn new(ep_out: D::EndpointOut, offset: &'d AtomicUsize) -> Self {
        Self { ep_out, offset }
    }

    pub async fn wait_enabled(&mut self) {
        self.ep_out.wait_enabled().await
    }

    /// Read one report into `buf`, returning its length.
    ///
    /// Reports longer than a packet arrive in pieces. If the future is dropped part way the
    /// next call finishes the same report and returns [ReadError::Sync] with the range it
    /// filled; callers that reuse `buf` then hold the whole report.
    pub async fn read(&mut self, buf: &mut [u8; N]) -> Result<usize, ReadError> {
        let max_packet_size = usize::from(self.ep_out.info().max_packet_size).max(1);
        let starting_offset = self.offset.load(Ordering::Acquire);
        let mut total = starting_offset;
        loop {
            for chunk in buf[starting_offset..].chunks_mut(max_packet_size) {
                match self.ep_out.read(chunk).await {
                    Ok(size) => {
                        total += size;
                        if size < max_packet_size || total == N {
                            self.offset.store(0, Ordering::Release);
                            break;
                        }
                        self.offset.store(total, Ordering::Release);
                    }
                    Err(err) => {
                        self.offset.store(0, Ordering::Release);
                        return Err(err.into());
                    }
                }
            }

            // hosts may send ZLPs between reports
            if total > 0 {
                break;
            }
        }

        if starting_offset > 0 {
            Err(ReadError::Sync(starting_offset..total))
        } else {
            Ok(total)
        }
    }
}
