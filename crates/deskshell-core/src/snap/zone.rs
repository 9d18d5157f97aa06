//! Snap zone identifiers

use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use crate::error::ShellError;

/// Tiling zone a window can be snapped into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapZone {
    /// Left half of the work area
    Left,
    /// Right half of the work area
    Right,
    /// Top-left quarter
    TopLeft,
    /// Top-right quarter
    TopRight,
    /// Bottom-left quarter
    BottomLeft,
    /// Bottom-right quarter
    BottomRight,
}

impl SnapZone {
    /// All zones, halves first
    pub const ALL: [SnapZone; 6] = [
        SnapZone::Left,
        SnapZone::Right,
        SnapZone::TopLeft,
        SnapZone::TopRight,
        SnapZone::BottomLeft,
        SnapZone::BottomRight,
    ];

    /// Host-facing name of the zone
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapZone::Left => "left",
            SnapZone::Right => "right",
            SnapZone::TopLeft => "top-left",
            SnapZone::TopRight => "top-right",
            SnapZone::BottomLeft => "bottom-left",
            SnapZone::BottomRight => "bottom-right",
        }
    }
}

impl FromStr for SnapZone {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SnapZone::ALL
            .into_iter()
            .find(|zone| zone.as_str() == s)
            .ok_or_else(|| ShellError::UnknownSnapZone(s.to_string()))
    }
}

/// Result of edge-proximity detection during a drag
///
/// The top edge on its own is not a tiling zone: releasing there maximizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeZone {
    /// Snap into a tiling zone on release
    Tile(SnapZone),
    /// Maximize on release
    Maximize,
}

impl EdgeZone {
    /// Host-facing name (`"maximize"` or the tile's name)
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeZone::Tile(zone) => zone.as_str(),
            EdgeZone::Maximize => "maximize",
        }
    }
}

impl Serialize for EdgeZone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for EdgeZone {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "maximize" {
            return Ok(EdgeZone::Maximize);
        }
        s.parse().map(EdgeZone::Tile)
    }
}
