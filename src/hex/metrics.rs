//! Hexagon geometry table: fixed metrics and the pure functions built on them.
//!
//! Cells are pointy-top hexagons laid out in the XZ plane with Y up. Each cell
//! is split into an inner *solid* hexagon (scaled by [`SOLID_FACTOR`]) that
//! keeps the cell's own color, and an outer *bridge* region where geometry
//! blends toward the neighbor.

use serde::{Deserialize, Serialize};

use super::direction::HexDirection;
use super::noise::NoiseSource;
use crate::core::{Color, Vec3, Vec4};

/// Ratio between the inner (edge-midpoint) and outer (corner) radius: sqrt(3)/2.
pub const OUTER_TO_INNER: f32 = 0.866025404;
pub const INNER_TO_OUTER: f32 = 1.0 / OUTER_TO_INNER;

/// Center-to-corner distance
pub const OUTER_RADIUS: f32 = 10.0;
/// Center-to-edge-midpoint distance
pub const INNER_RADIUS: f32 = OUTER_RADIUS * OUTER_TO_INNER;

/// Fraction of the cell occupied by the flat, single-color hexagon
pub const SOLID_FACTOR: f32 = 0.8;
pub const BLEND_FACTOR: f32 = 1.0 - SOLID_FACTOR;

/// World height of one elevation level
pub const ELEVATION_STEP: f32 = 3.0;

pub const TERRACES_PER_SLOPE: i32 = 2;
/// Interpolation steps across a terraced slope (flat runs plus risers)
pub const TERRACE_STEPS: i32 = TERRACES_PER_SLOPE * 2 + 1;
pub const HORIZONTAL_TERRACE_STEP_SIZE: f32 = 1.0 / TERRACE_STEPS as f32;
pub const VERTICAL_TERRACE_STEP_SIZE: f32 = 1.0 / (TERRACES_PER_SLOPE + 1) as f32;

/// Stream bed depth in elevation levels, constant across cells
pub const STREAM_BED_ELEVATION_OFFSET: f32 = -1.75;
pub const RIVER_SURFACE_ELEVATION_OFFSET: f32 = -0.5;

/// Maximum horizontal vertex offset from perturbation
pub const CELL_PERTURB_STRENGTH: f32 = 3.0;
/// World-to-texture scale for noise sampling
pub const NOISE_SCALE: f32 = 0.003;
/// Maximum vertical offset applied per cell on top of its elevation
pub const ELEVATION_PERTURB_STRENGTH: f32 = 1.5;

/// Corner offsets from the cell center, clockwise from north. The seventh
/// entry repeats the first so `direction + 1` never leaves the table.
const CORNERS: [Vec3; 7] = [
    Vec3::new(0.0, 0.0, OUTER_RADIUS),
    Vec3::new(INNER_RADIUS, 0.0, 0.5 * OUTER_RADIUS),
    Vec3::new(INNER_RADIUS, 0.0, -0.5 * OUTER_RADIUS),
    Vec3::new(0.0, 0.0, -OUTER_RADIUS),
    Vec3::new(-INNER_RADIUS, 0.0, -0.5 * OUTER_RADIUS),
    Vec3::new(-INNER_RADIUS, 0.0, 0.5 * OUTER_RADIUS),
    Vec3::new(0.0, 0.0, OUTER_RADIUS),
];

/// Relationship between the elevations of two adjacent cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeType {
    Flat,
    Slope,
    Cliff,
}

/// The two raw corners bounding the edge in `direction`.
pub fn corner_offsets(direction: HexDirection) -> (Vec3, Vec3) {
    (first_corner(direction), second_corner(direction))
}

pub fn first_corner(direction: HexDirection) -> Vec3 {
    CORNERS[direction.index()]
}

pub fn second_corner(direction: HexDirection) -> Vec3 {
    CORNERS[direction.index() + 1]
}

pub fn first_solid_corner(direction: HexDirection) -> Vec3 {
    CORNERS[direction.index()] * SOLID_FACTOR
}

pub fn second_solid_corner(direction: HexDirection) -> Vec3 {
    CORNERS[direction.index() + 1] * SOLID_FACTOR
}

/// Midpoint of the solid hexagon's edge in `direction`.
pub fn solid_edge_middle(direction: HexDirection) -> Vec3 {
    (CORNERS[direction.index()] + CORNERS[direction.index() + 1]) * (0.5 * SOLID_FACTOR)
}

/// Offset spanning the bridge region from a solid edge to the neighbor's solid edge.
pub fn bridge(direction: HexDirection) -> Vec3 {
    (CORNERS[direction.index()] + CORNERS[direction.index() + 1]) * BLEND_FACTOR
}

/// Position `step` terrace steps from `a` toward `b`.
///
/// Horizontal progress is linear per step. Vertical progress only advances on
/// odd steps, so every pair of steps forms one flat run plus one riser.
pub fn terrace_lerp(a: Vec3, b: Vec3, step: i32) -> Vec3 {
    let h = step as f32 * HORIZONTAL_TERRACE_STEP_SIZE;
    let v = ((step + 1) / 2) as f32 * VERTICAL_TERRACE_STEP_SIZE;
    Vec3::new(
        a.x + (b.x - a.x) * h,
        a.y + (b.y - a.y) * v,
        a.z + (b.z - a.z) * h,
    )
}

/// Color counterpart of [`terrace_lerp`]; colors only follow the horizontal progress.
pub fn terrace_lerp_color(a: Color, b: Color, step: i32) -> Color {
    a.lerp(b, step as f32 * HORIZONTAL_TERRACE_STEP_SIZE)
}

/// Classify the connection between two elevations.
pub fn edge_type(elevation1: i32, elevation2: i32) -> EdgeType {
    match (elevation2 as i64 - elevation1 as i64).abs() {
        0 => EdgeType::Flat,
        1 => EdgeType::Slope,
        _ => EdgeType::Cliff,
    }
}

/// Sample the noise source at a world position (XZ plane).
pub fn sample_noise(noise: &dyn NoiseSource, position: Vec3) -> Vec4 {
    noise.sample_bilinear(position.x * NOISE_SCALE, position.z * NOISE_SCALE)
}

/// Offset a vertex horizontally by noise. Y is left untouched so cell tops stay flat.
pub fn perturb(noise: &dyn NoiseSource, position: Vec3) -> Vec3 {
    let sample = sample_noise(noise, position);
    Vec3::new(
        position.x + (sample.x * 2.0 - 1.0) * CELL_PERTURB_STRENGTH,
        position.y,
        position.z + (sample.z * 2.0 - 1.0) * CELL_PERTURB_STRENGTH,
    )
}

/// Per-cell vertical jitter added on top of `elevation * ELEVATION_STEP`.
pub fn elevation_perturbation(noise: &dyn NoiseSource, position: Vec3) -> f32 {
    (sample_noise(noise, position).y * 2.0 - 1.0) * ELEVATION_PERTURB_STRENGTH
}
