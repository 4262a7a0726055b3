// SPDX-License-Identifier: MPL-2.0
//! Styling backend selection.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How component styles are expressed.
///
/// Resolved once when a component tree is built; renderers match on the
/// tag instead of probing style props at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleBackend {
    /// Utility class names merged with [`cn`](super::cn).
    #[default]
    Utility,
    /// Inline style objects built from design tokens.
    Stylesheet,
}

impl StyleBackend {
    /// Parses a backend name (`utility` / `stylesheet`), case-insensitive.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utility" | "classes" => Some(Self::Utility),
            "stylesheet" | "inline" => Some(Self::Stylesheet),
            _ => None,
        }
    }
}

impl FromStr for StyleBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::Config(format!("unknown style backend '{s}'")))
    }
}
