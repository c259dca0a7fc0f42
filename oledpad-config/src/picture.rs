//! One bit pictures stored as text: every `1` is a lit pixel, anything else is dark. Line `n`
//! of the file is pixel row `n`.

use std::{fs, path::Path};

use oledpad_common::raw_hid::PIXEL_END;

use crate::ConfigError;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Picture {
    pixels: Vec<(usize, usize)>,
}

impl Picture {
    pub fn parse(src: &str) -> Self {
        let pixels = src
            .lines()
            .enumerate()
            .flat_map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .filter(|(_, c)| *c == '1')
                    .map(move |(x, _)| (x, y))
            })
            .collect();
        Self { pixels }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        fs::read_to_string(path)
            .map(|src| Self::parse(&src))
            .map_err(|err| ConfigError::new(err.to_string(), path))
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The lit pixels moved by `origin`. Pixels that land past the addressable area are dropped.
    pub fn pixels_at(&self, origin: (u8, u8)) -> impl Iterator<Item = (u8, u8)> + '_ {
        let (ox, oy) = (origin.0 as usize, origin.1 as usize);
        self.pixels.iter().filter_map(move |&(x, y)| {
            let x = u8::try_from(x + ox).ok().filter(|x| *x != PIXEL_END)?;
            let y = u8::try_from(y + oy).ok()?;
            Some((x, y))
        })
    }
}

#[cfg(test)]
#[path = "picture_test.rs"]
mod test;
