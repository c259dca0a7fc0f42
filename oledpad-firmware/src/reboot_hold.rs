//! Hold a key to reboot the board, hold longer to reboot into the bootloader.
//!
//! A tap still sends the key. While the key is held the display counts down; releasing after
//! the soft-reset threshold reboots and releasing after the bootloader threshold jumps to the
//! bootloader.

use embassy_time::{Duration, Instant};

use crate::{display::Display, host::Host};

/// Stages in the order they are reached, each with the hold time it must exceed.
const STAGES: [(u64, Stage); 5] = [
    (4500, Stage::Bootloader),
    (2500, Stage::Rebooting),
    (2000, Stage::Count(1)),
    (1500, Stage::Count(2)),
    (1000, Stage::Count(3)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    Count(u8),
    Rebooting,
    Bootloader,
}

impl Stage {
    pub fn text(self) -> &'static str {
        match self {
            Stage::Count(3) => "Rebooting 3",
            Stage::Count(2) => "Rebooting 2",
            Stage::Count(_) => "Rebooting 1",
            Stage::Rebooting => "Rebooting   ",
            Stage::Bootloader => "Awaiting New Firmware",
        }
    }

    fn at(held: Duration) -> Option<Self> {
        let ms = held.as_millis();
        STAGES
            .iter()
            .find(|(threshold, _)| ms > *threshold)
            .map(|(_, stage)| *stage)
    }
}

/// What a release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Tap,
    SoftReset,
    Bootloader,
}

#[derive(Debug, Default)]
pub struct RebootHold {
    pressed_at: Option<Instant>,
    stage: Option<Stage>,
    rebooting: bool,
    to_bootloader: bool,
}

impl RebootHold {
    pub const fn new() -> Self {
        Self {
            pressed_at: None,
            stage: None,
            rebooting: false,
            to_bootloader: false,
        }
    }

    pub fn is_holding(&self) -> bool {
        self.pressed_at.is_some()
    }

    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }

    pub fn press(&mut self, now: Instant) {
        self.pressed_at = Some(now);
    }

    /// Called once per matrix scan. Shows the countdown and arms the resets.
    pub fn scan<D: Display + ?Sized>(&mut self, now: Instant, display: &mut D) {
        let Some(pressed_at) = self.pressed_at else {
            return;
        };
        let Some(stage) = Stage::at(now.saturating_duration_since(pressed_at)) else {
            return;
        };
        match stage {
            Stage::Bootloader => self.to_bootloader = true,
            Stage::Rebooting => self.rebooting = true,
            Stage::Count(_) => {}
        }
        if self.stage != Some(stage) {
            crate::debug!("reboot hold {:?}", stage);
            self.stage = Some(stage);
            display.set_cursor(0, 0);
            display.write(stage.text());
        }
    }

    /// Release the key. Without an armed reset `usage` is tapped instead.
    pub fn release<H, D>(&mut self, host: &mut H, display: &mut D, usage: u8) -> Outcome
    where
        H: Host + ?Sized,
        D: Display + ?Sized,
    {
        let outcome = if self.to_bootloader {
            host.bootloader_reset();
            Outcome::Bootloader
        } else if self.rebooting {
            host.soft_reset();
            Outcome::SoftReset
        } else {
            Outcome::Tap
        };
        *self = Self::new();
        display.clear();
        if outcome == Outcome::Tap {
            host.tap_code(usage);
        }
        outcome
    }
}

/// Last frame before the board goes down.
pub fn render_shutdown<D: Display + ?Sized>(display: &mut D, bootloader: bool) {
    display.clear();
    display.write(if bootloader {
        Stage::Bootloader.text()
    } else {
        "Rebooting"
    });
    display.render_dirty(true);
}

#[cfg(test)]
#[path = "reboot_hold_test.rs"]
mod test;
