//! Cycling through layers with an encoder.

use core::num::NonZeroU8;

use crate::host::Host;

/// The layer after `current`, wrapping to 0.
pub const fn next_layer(current: u8, count: NonZeroU8) -> u8 {
    let count = count.get() as u16;
    ((current as u16 + 1) % count) as u8
}

/// The layer before `current`, wrapping to `count - 1`.
pub const fn previous_layer(current: u8, count: NonZeroU8) -> u8 {
    let count = count.get() as u16;
    ((current as u16 + count - 1) % count) as u8
}

/// Move to the neighbouring layer in the given direction and return it.
pub fn cycle<H: Host + ?Sized>(host: &mut H, count: NonZeroU8, clockwise: bool) -> u8 {
    let current = host.highest_layer();
    let layer = if clockwise {
        next_layer(current, count)
    } else {
        previous_layer(current, count)
    };
    crate::debug!("layer {} -> {}", current, layer);
    host.layer_move(layer);
    layer
}

#[cfg(test)]
#[path = "layers_test.rs"]
mod test;
