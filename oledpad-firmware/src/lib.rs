#![no_std]
pub mod boards;
pub mod dispatcher;
pub mod display;
pub mod hid;
pub mod host;
pub mod keymap;
pub mod layers;
pub mod reboot_hold;
pub mod status;
pub mod usb;

#[cfg(any(test, feature = "test-utils"))]
pub mod display_test_stub;
#[cfg(any(test, feature = "test-utils"))]
pub mod host_test_stub;
#[cfg(any(test, feature = "test-utils"))]
pub mod usb_test_stub;

#[macro_use]
mod macros;
