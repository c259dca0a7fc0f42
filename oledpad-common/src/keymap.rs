//! Keymap tables: what each key does on each layer. The firmware resolves keys through them
//! and the host tool prints them.

use core::fmt;

use crate::keycodes::{key_name, modifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbStep {
    NextMode,
    IncreaseHue,
    DecreaseHue,
    IncreaseVal,
    DecreaseVal,
    IncreaseSpeed,
    DecreaseSpeed,
    /// Jump to the swirl animation.
    ModeSwirl,
}

/// What a key position does on one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    #[default]
    No,
    /// Use the action from the next lower layer.
    Transparent,
    Key(u8),
    /// Key sent with the given modifier bits held.
    Modified(u8, u8),
    /// Modifiers when held, key when tapped.
    ModTap(u8, u8),
    /// Turn off every other layer.
    LayerTo(u8),
    Bootloader,
    /// Index into the keymap's tap dance table.
    TapDance(u8),
    Rgb(RgbStep),
    /// A board specific keycode handled by its hooks.
    User(u8),
}

impl Action {
    pub const fn usage(self) -> Option<u8> {
        match self {
            Action::Key(u) | Action::Modified(_, u) | Action::ModTap(_, u) => Some(u),
            _ => None,
        }
    }
}

struct Mods(u8);

impl fmt::Display for Mods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == modifier::MEH {
            return f.write_str("MEH");
        }
        let mut sep = "";
        for (bit, name) in [
            (modifier::LCTRL, "LCTL"),
            (modifier::LSHIFT, "LSFT"),
            (modifier::LALT, "LALT"),
            (modifier::LGUI, "LGUI"),
            (modifier::RCTRL, "RCTL"),
            (modifier::RSHIFT, "RSFT"),
            (modifier::RALT, "RALT"),
            (modifier::RGUI, "RGUI"),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{sep}{name}")?;
                sep = "|";
            }
        }
        Ok(())
    }
}

struct Key(u8);

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match key_name(self.0) {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:02x}", self.0),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Action::No => f.write_str("NO"),
            Action::Transparent => f.write_str("TRNS"),
            Action::Key(u) => write!(f, "{}", Key(u)),
            Action::Modified(m, u) => write!(f, "{}({})", Mods(m), Key(u)),
            Action::ModTap(m, u) => write!(f, "MT({}, {})", Mods(m), Key(u)),
            Action::LayerTo(l) => write!(f, "TO({l})"),
            Action::Bootloader => f.write_str("BOOT"),
            Action::TapDance(i) => write!(f, "TD({i})"),
            Action::Rgb(step) => f.write_str(match step {
                RgbStep::NextMode => "RGB_MOD",
                RgbStep::IncreaseHue => "RGB_HUI",
                RgbStep::DecreaseHue => "RGB_HUD",
                RgbStep::IncreaseVal => "RGB_VAI",
                RgbStep::DecreaseVal => "RGB_VAD",
                RgbStep::IncreaseSpeed => "RGB_SPI",
                RgbStep::DecreaseSpeed => "RGB_SPD",
                RgbStep::ModeSwirl => "RGB_M_SW",
            }),
            Action::User(id) => write!(f, "USER({id})"),
        }
    }
}

/// Keys sent for a single and a double tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDance {
    pub single: u8,
    pub double: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    NoLayers,
    LayerOutOfRange { layer: u8, row: u8, col: u8 },
    TapDanceOutOfRange { layer: u8, row: u8, col: u8 },
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KeymapError::NoLayers => f.write_str("keymap has no layers"),
            KeymapError::LayerOutOfRange { layer, row, col } => write!(
                f,
                "layer {layer} row {row} col {col}: layer target out of range"
            ),
            KeymapError::TapDanceOutOfRange { layer, row, col } => write!(
                f,
                "layer {layer} row {row} col {col}: tap dance index out of range"
            ),
        }
    }
}

pub struct Keymap<const LAYERS: usize, const ROWS: usize, const COLS: usize> {
    layers: [[[Action; COLS]; ROWS]; LAYERS],
    tap_dances: &'static [TapDance],
}

impl<const LAYERS: usize, const ROWS: usize, const COLS: usize> Keymap<LAYERS, ROWS, COLS> {
    pub const fn new(
        layers: [[[Action; COLS]; ROWS]; LAYERS],
        tap_dances: &'static [TapDance],
    ) -> Self {
        Self { layers, tap_dances }
    }

    /// Every layer target and tap dance index must point inside the keymap. Boards call this
    /// from a `const` assertion so a bad table fails the build.
    pub const fn check(&self) -> Result<(), KeymapError> {
        if LAYERS == 0 {
            return Err(KeymapError::NoLayers);
        }
        let mut l = 0;
        while l < LAYERS {
            let mut r = 0;
            while r < ROWS {
                let mut c = 0;
                while c < COLS {
                    let (layer, row, col) = (l as u8, r as u8, c as u8);
                    match self.layers[l][r][c] {
                        Action::LayerTo(n) if n as usize >= LAYERS => {
                            return Err(KeymapError::LayerOutOfRange { layer, row, col })
                        }
                        Action::TapDance(i) if i as usize >= self.tap_dances.len() => {
                            return Err(KeymapError::TapDanceOutOfRange { layer, row, col })
                        }
                        _ => {}
                    }
                    c += 1;
                }
                r += 1;
            }
            l += 1;
        }
        Ok(())
    }

    /// The action at a position on one layer, `Transparent` included.
    pub fn get(&self, layer: u8, row: usize, col: usize) -> Action {
        self.layers
            .get(layer as usize)
            .and_then(|l| l.get(row))
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or_default()
    }

    /// The effective action with `layer` active, falling through transparent keys.
    pub fn resolve(&self, layer: u8, row: usize, col: usize) -> Action {
        let top = (layer as usize).min(LAYERS.saturating_sub(1));
        (0..=top)
            .rev()
            .map(|l| self.get(l as u8, row, col))
            .find(|a| *a != Action::Transparent)
            .unwrap_or_default()
    }

    pub fn tap_dance(&self, index: u8) -> Option<TapDance> {
        self.tap_dances.get(index as usize).copied()
    }
}

/// Read access to a keymap without its dimensions in the type.
pub trait KeymapView: Sync {
    fn layer_count(&self) -> usize;
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn action(&self, layer: u8, row: usize, col: usize) -> Action;
    fn tap_dances(&self) -> &'static [TapDance];
    fn validate(&self) -> Result<(), KeymapError>;
}

impl<const LAYERS: usize, const ROWS: usize, const COLS: usize> KeymapView
    for Keymap<LAYERS, ROWS, COLS>
{
    fn layer_count(&self) -> usize {
        LAYERS
    }

    fn rows(&self) -> usize {
        ROWS
    }

    fn cols(&self) -> usize {
        COLS
    }

    fn action(&self, layer: u8, row: usize, col: usize) -> Action {
        self.get(layer, row, col)
    }

    fn tap_dances(&self) -> &'static [TapDance] {
        self.tap_dances
    }

    fn validate(&self) -> Result<(), KeymapError> {
        self.check()
    }
}

#[cfg(test)]
#[path = "keymap_test.rs"]
mod test;
