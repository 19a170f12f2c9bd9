//! Indeterminate time markers.
//!
//! Two closed vocabularies: the base indeterminate positions (plus the
//! `template`/`first`/`latest` additions used by observation requests), and the
//! protocol-specific extension that is carried alongside them.

use serde::{Deserialize, Serialize};

/// Symbolic time reference carried instead of, or next to, a concrete timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndeterminateMarker {
    /// Time is not known.
    Unknown,
    /// The current instant, resolved through a clock.
    Now,
    /// Some instant before the accompanying timestamp.
    Before,
    /// Some instant after the accompanying timestamp.
    After,
    /// Placeholder to be filled in by the receiver.
    Template,
    /// Earliest instant available in the dataset.
    First,
    /// Most recent instant available in the dataset.
    Latest,
}

impl IndeterminateMarker {
    /// Wire name of this marker.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Now => "now",
            Self::Before => "before",
            Self::After => "after",
            Self::Template => "template",
            Self::First => "first",
            Self::Latest => "latest",
        }
    }

    /// Parse from the wire name.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "unknown" => Some(Self::Unknown),
            "now" => Some(Self::Now),
            "before" => Some(Self::Before),
            "after" => Some(Self::After),
            "template" => Some(Self::Template),
            "first" => Some(Self::First),
            "latest" => Some(Self::Latest),
            _ => None,
        }
    }

    pub fn all() -> &'static [IndeterminateMarker] {
        &[
            Self::Unknown,
            Self::Now,
            Self::Before,
            Self::After,
            Self::Template,
            Self::First,
            Self::Latest,
        ]
    }
}

impl std::fmt::Display for IndeterminateMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Protocol-specific indeterminate time, independent of [`IndeterminateMarker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtendedMarker {
    First,
    Latest,
}

impl ExtendedMarker {
    /// Wire name of this marker.
    pub fn name(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Latest => "latest",
        }
    }

    /// Parse from the wire name.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "first" => Some(Self::First),
            "latest" => Some(Self::Latest),
            _ => None,
        }
    }

    pub fn all() -> &'static [ExtendedMarker] {
        &[Self::First, Self::Latest]
    }
}

impl std::fmt::Display for ExtendedMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Either kind of marker, as handed to a [`crate::ResolutionPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "marker", rename_all = "snake_case")]
pub enum Marker {
    Indeterminate(IndeterminateMarker),
    Extended(ExtendedMarker),
}

impl Marker {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Indeterminate(m) => m.name(),
            Self::Extended(m) => m.name(),
        }
    }
}

impl From<IndeterminateMarker> for Marker {
    fn from(marker: IndeterminateMarker) -> Self {
        Self::Indeterminate(marker)
    }
}

impl From<ExtendedMarker> for Marker {
    fn from(marker: ExtendedMarker) -> Self {
        Self::Extended(marker)
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Indeterminate(m) => write!(f, "{m}"),
            Self::Extended(m) => write!(f, "extended:{m}"),
        }
    }
}
