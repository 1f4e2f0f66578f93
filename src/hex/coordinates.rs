//! Cube coordinates for hex cells.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::direction::HexDirection;
use super::metrics::{INNER_RADIUS, OUTER_RADIUS};
use crate::core::Vec3;

/// Cube coordinate `(x, y, z)` with `x + y + z == 0`.
///
/// Only `x` and `z` are stored; `y` is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoordinates {
    x: i32,
    z: i32,
}

impl HexCoordinates {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        -self.x - self.z
    }

    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Convert rectangular offset indices. Every second row shifts one column
    /// so the grid fills a rectangle.
    pub const fn from_offset(col: i32, row: i32) -> Self {
        Self::new(col - row / 2, row)
    }

    /// Inverse of [`HexCoordinates::from_offset`], returns `(col, row)`.
    pub const fn to_offset(&self) -> (i32, i32) {
        (self.x + self.z / 2, self.z)
    }

    /// Cell containing a position given in grid-local space.
    ///
    /// `None` for non-finite positions or ones too far out for `i32` axes.
    pub fn from_position(position: Vec3) -> Option<Self> {
        let mut x = position.x / (INNER_RADIUS * 2.0);
        let mut y = -x;

        // Every two rows shift a full unit to the left
        let offset = position.z / (OUTER_RADIUS * 3.0);
        x -= offset;
        y -= offset;
        let z = -x - y;

        let mut ix = round_axis(x)?;
        let iy = round_axis(y)?;
        let mut iz = round_axis(z)?;

        if ix + iy + iz != 0 {
            // Rebuild the axis that was rounded the furthest
            let dx = (x - ix as f32).abs();
            let dy = (y - iy as f32).abs();
            let dz = (z - iz as f32).abs();

            if dx > dy && dx > dz {
                ix = -iy - iz;
            } else if dz > dy {
                iz = -ix - iy;
            }
            // Otherwise y is off, and y is never stored
        }

        Some(Self::new(i32::try_from(ix).ok()?, i32::try_from(iz).ok()?))
    }

    /// Grid-local center of the cell at these coordinates (Y = 0).
    pub fn to_position(&self) -> Vec3 {
        Vec3::new(
            (self.x as f32 + self.z as f32 * 0.5) * (INNER_RADIUS * 2.0),
            0.0,
            self.z as f32 * (OUTER_RADIUS * 1.5),
        )
    }

    /// Coordinates of the adjacent cell in `direction`.
    pub const fn neighbor(&self, direction: HexDirection) -> Self {
        match direction {
            HexDirection::NE => Self::new(self.x, self.z + 1),
            HexDirection::E => Self::new(self.x + 1, self.z),
            HexDirection::SE => Self::new(self.x + 1, self.z - 1),
            HexDirection::SW => Self::new(self.x, self.z - 1),
            HexDirection::W => Self::new(self.x - 1, self.z),
            HexDirection::NW => Self::new(self.x - 1, self.z + 1),
        }
    }

    /// Number of cell steps between two coordinates.
    pub fn distance_to(&self, other: &HexCoordinates) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y() - other.y()).unsigned_abs();
        let dz = (self.z - other.z).unsigned_abs();
        (dx + dy + dz) / 2
    }

    /// Label text with one axis per line.
    pub fn to_string_on_separate_lines(&self) -> String {
        format!("{}\n{}\n{}", self.x, self.y(), self.z)
    }
}

impl fmt::Display for HexCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y(), self.z)
    }
}

/// Round one continuous axis, widened so the zero-sum repair cannot overflow.
fn round_axis(value: f32) -> Option<i64> {
    if !value.is_finite() || value.abs() >= 2_147_483_648.0 {
        return None;
    }
    Some(value.round_ties_even() as i64)
}
