use std::path::{Path, PathBuf};

pub mod device_config;
pub mod display_coms;
pub mod keymap_table;
pub mod picture;

#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
    pub source: Option<PathBuf>,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Some(path) => write!(f, "{}\n    in: {}", &self.message, path.display()),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self {
            message: err.to_string(),
            source: None,
        }
    }
}

impl From<&str> for ConfigError {
    fn from(err: &str) -> Self {
        Self {
            message: err.to_string(),
            source: None,
        }
    }
}

impl ConfigError {
    pub fn new(message: String, source: &Path) -> Self {
        Self {
            message,
            source: Some(source.to_owned()),
        }
    }

    /// Attach the file the error came from unless one is already known.
    pub fn in_file(mut self, source: &Path) -> Self {
        if self.source.is_none() {
            self.source = Some(source.to_owned());
        }
        self
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;
