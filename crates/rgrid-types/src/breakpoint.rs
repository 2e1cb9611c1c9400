//! Named width breakpoints and width-to-breakpoint resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Container width classes, ordered from narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Breakpoint {
    /// `[0, 375)`: small phones.
    Xs,
    /// `[375, 414)`: standard phones.
    Sm,
    /// `[414, 768)`: large phones and small tablets.
    Md,
    /// `[768, 1024)`: portrait tablets.
    Lg,
    /// `[1024, 1366)`: landscape tablets and small desktops.
    Xl,
    /// `[1366, inf)`: desktops.
    Xxl,
}

impl Breakpoint {
    /// All breakpoints in ascending width order.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Lowercase name as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "xxl",
        }
    }

    /// Position in [`Breakpoint::ALL`].
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// The standard width range for this breakpoint.
    pub const fn range(self) -> BreakpointRange {
        STANDARD_RANGES[self.ordinal()]
    }

    /// Resolve `width` against the standard ranges.
    pub fn for_width(width: f32) -> Breakpoint {
        BreakpointResolver::default().resolve(width)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .iter()
            .copied()
            .find(|bp| bp.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GridError::Config(format!("unknown breakpoint '{s}'")))
    }
}

impl TryFrom<String> for Breakpoint {
    type Error = GridError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Breakpoint> for &'static str {
    fn from(bp: Breakpoint) -> Self {
        bp.name()
    }
}

/// Half-open width range `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointRange {
    pub low: f32,
    /// `f32::INFINITY` for the unbounded top range.
    pub high: f32,
}

impl BreakpointRange {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Range with no upper bound.
    pub const fn from_low(low: f32) -> Self {
        Self {
            low,
            high: f32::INFINITY,
        }
    }

    pub fn contains(&self, width: f32) -> bool {
        width >= self.low && width < self.high
    }
}

const STANDARD_RANGES: [BreakpointRange; 6] = [
    BreakpointRange::new(0.0, 375.0),
    BreakpointRange::new(375.0, 414.0),
    BreakpointRange::new(414.0, 768.0),
    BreakpointRange::new(768.0, 1024.0),
    BreakpointRange::new(1024.0, 1366.0),
    BreakpointRange::from_low(1366.0),
];

/// Maps a container width to a [`Breakpoint`].
///
/// Ranges are scanned in ascending breakpoint order and the first match
/// wins. Resolution never fails: negative widths map to [`Breakpoint::Xs`],
/// and a width no range covers (NaN, or a gap in a custom range set) maps to
/// [`Breakpoint::Xxl`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointResolver {
    ranges: [BreakpointRange; 6],
}

impl Default for BreakpointResolver {
    fn default() -> Self {
        Self::new(STANDARD_RANGES)
    }
}

impl BreakpointResolver {
    /// Create a resolver from one range per breakpoint, in [`Breakpoint::ALL`] order.
    pub const fn new(ranges: [BreakpointRange; 6]) -> Self {
        Self { ranges }
    }

    /// The range configured for `bp`.
    pub fn range(&self, bp: Breakpoint) -> BreakpointRange {
        self.ranges[bp.ordinal()]
    }

    pub fn resolve(&self, width: f32) -> Breakpoint {
        if width < 0.0 {
            return Breakpoint::Xs;
        }
        Breakpoint::ALL
            .iter()
            .copied()
            .find(|bp| self.range(*bp).contains(width))
            .unwrap_or_else(|| {
                log::debug!("no breakpoint range contains width {width}, using xxl");
                Breakpoint::Xxl
            })
    }
}
