//! Window regions for hit testing

use std::str::FromStr;

use serde::{Serialize, Serializer};
use crate::error::ShellError;

/// One of the eight resize handles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    /// Handle name used by the host ("n", "se", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeEdge::North => "n",
            ResizeEdge::South => "s",
            ResizeEdge::East => "e",
            ResizeEdge::West => "w",
            ResizeEdge::NorthEast => "ne",
            ResizeEdge::NorthWest => "nw",
            ResizeEdge::SouthEast => "se",
            ResizeEdge::SouthWest => "sw",
        }
    }

    /// Handle drags the top edge
    #[inline]
    pub fn north(&self) -> bool {
        matches!(self, ResizeEdge::North | ResizeEdge::NorthEast | ResizeEdge::NorthWest)
    }

    /// Handle drags the bottom edge
    #[inline]
    pub fn south(&self) -> bool {
        matches!(self, ResizeEdge::South | ResizeEdge::SouthEast | ResizeEdge::SouthWest)
    }

    /// Handle drags the right edge
    #[inline]
    pub fn east(&self) -> bool {
        matches!(self, ResizeEdge::East | ResizeEdge::NorthEast | ResizeEdge::SouthEast)
    }

    /// Handle drags the left edge
    #[inline]
    pub fn west(&self) -> bool {
        matches!(self, ResizeEdge::West | ResizeEdge::NorthWest | ResizeEdge::SouthWest)
    }
}

impl Serialize for ResizeEdge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for ResizeEdge {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeEdge::ALL
            .into_iter()
            .find(|edge| edge.as_str() == s)
            .ok_or_else(|| ShellError::UnknownResizeEdge(s.to_string()))
    }
}

/// Region of a window for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "region", content = "edge", rename_all = "camelCase")]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Content area (handled by the app)
    Content,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Maximize button
    MaximizeButton,
    /// Resize handle
    Resize(ResizeEdge),
}

impl WindowRegion {
    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar | WindowRegion::Content => "default",
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton => "pointer",
            WindowRegion::Resize(edge) => match edge {
                ResizeEdge::North | ResizeEdge::South => "ns-resize",
                ResizeEdge::East | ResizeEdge::West => "ew-resize",
                ResizeEdge::NorthEast | ResizeEdge::SouthWest => "nesw-resize",
                ResizeEdge::NorthWest | ResizeEdge::SouthEast => "nwse-resize",
            },
        }
    }
}
