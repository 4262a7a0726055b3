// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Mask(MaskError),
    Diagnostics(String),
    Runtime(String),
}

/// Problems with an input mask pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The mask string is empty.
    Empty,
    /// The mask contains literals only, so no input can ever be placed.
    NoSlots,
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::Empty => write!(f, "mask is empty"),
            MaskError::NoSlots => write!(f, "mask has no input slots"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Mask(e) => write!(f, "Mask Error: {}", e),
            Error::Diagnostics(e) => write!(f, "Diagnostics Error: {}", e),
            Error::Runtime(e) => write!(f, "Runtime Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<MaskError> for Error {
    fn from(err: MaskError) -> Self {
        Error::Mask(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Diagnostics(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
