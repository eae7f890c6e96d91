//! # Gallery Model
//!
//! The input and output representation for the arrangement engine. A gallery
//! is a flat list of pictures plus arrangement options; the result is a wall
//! with overall dimensions and one placement per picture. This is designed to
//! be easily produced by the surrounding web service (which owns users,
//! uploads, and persistence) or by direct JSON construction.
//!
//! All coordinates in [`Placement`] are in the same unit system as the input
//! picture dimensions. The padded, rounded plane the engine works in
//! internally never leaks out.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default gap between pictures on the wall, in wall units.
pub const DEFAULT_MARGIN: i64 = 2;

/// A single picture to hang: its identity and true dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    pub id: u64,
    /// Width in wall units. Must be positive; fractional values are fine.
    pub width: f64,
    /// Height in wall units. Must be positive; fractional values are fine.
    pub height: f64,
}

impl Picture {
    pub const fn new(id: u64, width: f64, height: f64) -> Self {
        Self { id, width, height }
    }
}

/// A gallery document ready for arrangement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    pub pictures: Vec<Picture>,

    /// Arrangement configuration. Defaults apply when omitted.
    #[serde(default)]
    pub options: ArrangeOptions,
}

/// Arrangement configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangeOptions {
    /// Uniform gap between pictures, split evenly on each side of each
    /// picture. Must be a non-negative integer.
    #[serde(default = "default_margin")]
    pub margin: i64,

    /// Which layout strategy places the pictures.
    #[serde(default)]
    pub strategy: Strategy,

    /// Fixed RNG seed. Same gallery + same seed = same wall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_margin() -> i64 {
    DEFAULT_MARGIN
}

impl Default for ArrangeOptions {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            strategy: Strategy::default(),
            seed: None,
        }
    }
}

/// Layout strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Single horizontal strip, vertically centered, with small and large
    /// pictures alternating.
    #[default]
    Linear,
    /// Random distinct cells of a near-square grid, expanded into concrete
    /// column/row tracks.
    Grid,
    /// Vertical columns seeded by extremal picks, filled shortest-first.
    Columns,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Strategy::Linear),
            "grid" => Ok(Strategy::Grid),
            "columns" => Ok(Strategy::Columns),
            other => Err(format!(
                "unknown strategy '{}' (expected linear, grid, or columns)",
                other
            )),
        }
    }
}

/// Final position of one picture, in the original (unpadded) unit system.
///
/// `x`/`y` locate the picture's top-left corner on the wall, with the margin
/// and rounding slack already paid back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
}

/// The arranged wall: overall dimensions plus per-picture placements.
///
/// `width`/`height` bound all placed (padded) rectangles, so they are the
/// dimensions the wall display should reserve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrangedWall {
    pub width: i64,
    pub height: i64,
    pub placements: BTreeMap<u64, Placement>,
}
