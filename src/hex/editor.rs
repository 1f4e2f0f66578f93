//! Headless brush editing of a [`HexGrid`].
//!
//! The caller resolves pointer input to a world-space hit point; the editor
//! turns a stream of hits into cell edits, detecting drags between adjacent
//! cells so rivers can be drawn by dragging downhill.

use serde::{Deserialize, Serialize};

use super::cell::CellId;
use super::coordinates::HexCoordinates;
use super::direction::HexDirection;
use super::grid::HexGrid;
use crate::core::{Color, Vec3};

/// Three-way switch for optional edit features
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionalToggle {
    #[default]
    Ignore,
    Yes,
    No,
}

/// What an edit applies to each cell under the brush.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditSettings {
    /// Color to paint, `None` leaves colors alone
    pub active_color: Option<Color>,
    pub active_elevation: i32,
    pub apply_elevation: bool,
    /// Brush radius in cells; 0 edits only the center cell
    pub brush_size: u32,
    /// `Yes` draws rivers while dragging, `No` erases them
    pub river_mode: OptionalToggle,
}

impl Default for EditSettings {
    fn default() -> Self {
        Self {
            active_color: None,
            active_elevation: 0,
            apply_elevation: true,
            brush_size: 0,
            river_mode: OptionalToggle::Ignore,
        }
    }
}

/// Applies [`EditSettings`] to the cells under successive input hits.
#[derive(Debug, Default)]
pub struct HexMapEditor {
    settings: EditSettings,
    previous_cell: Option<CellId>,
    /// Direction from the previous cell to the current one during a drag
    drag_direction: Option<HexDirection>,
}

impl HexMapEditor {
    pub fn new(settings: EditSettings) -> Self {
        Self {
            settings,
            previous_cell: None,
            drag_direction: None,
        }
    }

    pub fn settings(&self) -> &EditSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut EditSettings {
        &mut self.settings
    }

    pub fn drag_direction(&self) -> Option<HexDirection> {
        self.drag_direction
    }

    /// Feed one frame of input. `hit` is the world point under the pointer
    /// while the edit button is held, `None` otherwise.
    ///
    /// Returns the cell that was edited, if any.
    pub fn handle_input(&mut self, grid: &mut HexGrid, hit: Option<Vec3>) -> Option<CellId> {
        let Some(current) = hit.and_then(|point| grid.cell_at_position(point)) else {
            self.release();
            return None;
        };

        match self.previous_cell {
            Some(previous) if previous != current => self.validate_drag(grid, previous, current),
            _ => self.drag_direction = None,
        }

        self.edit_cells(grid, current);
        self.previous_cell = Some(current);
        Some(current)
    }

    /// End the current stroke.
    pub fn release(&mut self) {
        self.previous_cell = None;
        self.drag_direction = None;
    }

    /// A drag is valid only between adjacent cells.
    fn validate_drag(&mut self, grid: &HexGrid, previous: CellId, current: CellId) {
        self.drag_direction = HexDirection::ALL
            .into_iter()
            .find(|&d| grid.neighbor(previous, d) == Some(current));
    }

    /// Edit every cell within the brush radius of `center`.
    pub fn edit_cells(&self, grid: &mut HexGrid, center: CellId) {
        let Some(cell) = grid.cell(center) else {
            return;
        };
        let targets = brush_cells(grid, cell.coordinates(), self.settings.brush_size);
        log::debug!(
            "Editing {} cells around {}",
            targets.len(),
            cell.coordinates()
        );
        for id in targets {
            self.edit_cell(grid, id);
        }
    }

    fn edit_cell(&self, grid: &mut HexGrid, id: CellId) {
        if let Some(color) = self.settings.active_color {
            grid.set_color(id, color);
        }
        if self.settings.apply_elevation {
            grid.set_elevation(id, self.settings.active_elevation);
        }
        match (self.settings.river_mode, self.drag_direction) {
            (OptionalToggle::No, _) => {
                grid.remove_river(id);
            }
            (OptionalToggle::Yes, Some(direction)) => {
                if let Some(source) = grid.neighbor(id, direction.opposite()) {
                    grid.set_outgoing_river(source, direction);
                }
            }
            _ => {}
        }
    }
}

/// Cells within `radius` steps of `center` that exist on the grid, row by row.
///
/// The radius is clamped to the grid's extent, so oversized brushes cover the
/// whole map instead of overflowing.
pub fn brush_cells(grid: &HexGrid, center: HexCoordinates, radius: u32) -> Vec<CellId> {
    let extent = grid.cell_count_x() as i64 + grid.cell_count_z() as i64;
    let radius = (radius as i64).min(extent);
    let (cx, cz) = (center.x() as i64, center.z() as i64);
    let mut cells = Vec::new();
    let mut visit = |x: i64, z: i64| {
        if let (Ok(x), Ok(z)) = (i32::try_from(x), i32::try_from(z)) {
            cells.extend(grid.cell_at_coordinates(HexCoordinates::new(x, z)));
        }
    };

    // Bottom half up to and including the center row
    for (r, z) in (cz - radius..=cz).enumerate() {
        for x in cx - r as i64..=cx + radius {
            visit(x, z);
        }
    }
    // Top half, walking down from the furthest row
    for (r, z) in (cz + 1..=cz + radius).rev().enumerate() {
        for x in cx - radius..=cx + r as i64 {
            visit(x, z);
        }
    }
    cells
}
