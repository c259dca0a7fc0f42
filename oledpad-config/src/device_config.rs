//! The optional `oledpad.toml` that describes which device to talk to and its display.
//!
//! ```toml
//! [device]
//! vendor_id = "0xfeed"
//! product_id = "0x0001"
//! columns = 21
//! rows = 4
//! protocol = "compact"
//! usage_page = "0xff60"
//! usage = "0x61"
//! ```

use std::{fs, path::Path};

use oledpad_common::raw_hid::{Variant, REPORT_LEN};
use serde::{de, Deserialize};

use crate::{display_coms::RawHidMatch, ConfigError};

/// Protocol dialect spoken by a keymap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Extended,
    Compact,
}

impl From<Protocol> for Variant {
    fn from(value: Protocol) -> Self {
        match value {
            Protocol::Extended => Variant::Extended,
            Protocol::Compact => Variant::Compact,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceFile {
    #[serde(default)]
    pub device: DeviceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    #[serde(default, deserialize_with = "parse_hex_id")]
    pub vendor_id: Option<u16>,
    #[serde(default, deserialize_with = "parse_hex_id")]
    pub product_id: Option<u16>,
    /// Only use this interface number. Any interface declaring the usage will do when absent.
    pub interface: Option<u8>,
    /// Usage page of the raw HID report descriptor, `0xff60` when absent.
    #[serde(default, deserialize_with = "parse_hex_id")]
    pub usage_page: Option<u16>,
    /// Usage of the raw HID report descriptor, `0x61` when absent.
    #[serde(default, deserialize_with = "parse_hex_id")]
    pub usage: Option<u16>,
    #[serde(default = "default_report_len")]
    pub report_len: usize,
    #[serde(default = "default_columns")]
    pub columns: u8,
    #[serde(default = "default_rows")]
    pub rows: u8,
    #[serde(default)]
    pub protocol: Protocol,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            vendor_id: None,
            product_id: None,
            interface: None,
            usage_page: None,
            usage: None,
            report_len: default_report_len(),
            columns: default_columns(),
            rows: default_rows(),
            protocol: Protocol::default(),
        }
    }
}

fn default_report_len() -> usize {
    REPORT_LEN
}

fn default_columns() -> u8 {
    21
}

fn default_rows() -> u8 {
    8
}

impl DeviceConfig {
    pub fn parse(src: &str) -> Result<Self, ConfigError> {
        let file: DeviceFile = toml::from_str(src).map_err(|err| ConfigError {
            message: err.message().to_owned(),
            source: None,
        })?;
        let config = file.device;
        if config.report_len != REPORT_LEN {
            return Err(ConfigError {
                message: format!(
                    "report_len must be {REPORT_LEN}, found {}",
                    config.report_len
                ),
                source: None,
            });
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path).map_err(|err| ConfigError::new(err.to_string(), path))?;
        Self::parse(&src).map_err(|err| err.in_file(path))
    }

    pub fn variant(&self) -> Variant {
        self.protocol.into()
    }

    pub fn raw_hid_match(&self) -> RawHidMatch {
        let default = RawHidMatch::default();
        RawHidMatch {
            interface: self.interface,
            usage_page: self.usage_page.unwrap_or(default.usage_page),
            usage: self.usage.unwrap_or(default.usage),
        }
    }
}

/// Parse a 4 digit hex number with an optional `0x` prefix.
pub fn parse_hex(v: Option<&str>) -> Result<Option<u16>, ConfigError> {
    if let Some(v) = v {
        let digits = if v.to_lowercase().starts_with("0x") {
            &v[2..]
        } else {
            v
        };
        u16::from_str_radix(digits, 16)
            .map(Some)
            .map_err(|_| ConfigError::from("Invalid hex number"))
    } else {
        Ok(None)
    }
}

/// Ids may be written as a hex string or as a plain integer.
fn parse_hex_id<'de, D: de::Deserializer<'de>>(deserializer: D) -> Result<Option<u16>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Hex(String),
        Int(u16),
    }

    match Id::deserialize(deserializer)? {
        Id::Hex(s) => parse_hex(Some(&s)).map_err(de::Error::custom),
        Id::Int(n) => Ok(Some(n)),
    }
}

#[cfg(test)]
#[path = "device_config_test.rs"]
mod test;
