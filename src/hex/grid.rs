//! The hex grid container: builds cells and chunks, wires adjacency, and
//! answers position and coordinate lookups.

use crate::core::{Color, Result, Vec3};

use super::cell::{CellGraph, CellId, HexCell};
use super::chunk::{ChunkCoord, ChunkId, HexGridChunk};
use super::config::GridConfig;
use super::coordinates::HexCoordinates;
use super::direction::HexDirection;
use super::metrics::{EdgeType, INNER_RADIUS, OUTER_RADIUS};
use super::noise::{NoiseSource, NoiseTexture};

/// A rectangular hex map split into chunks.
///
/// Cells are stored row-major (`col + row * cell_count_x`), chunks likewise in
/// chunk units. Edits made through the grid mark chunks dirty; drain them with
/// [`HexGrid::take_dirty_chunks`] and rebuild those chunks' meshes.
pub struct HexGrid {
    config: GridConfig,
    cell_count_x: u32,
    cell_count_z: u32,
    cells: CellGraph,
    chunks: Vec<HexGridChunk>,
    noise: Box<dyn NoiseSource>,
}

impl HexGrid {
    /// Build the grid described by `config`, perturbed by `noise`.
    pub fn new(config: GridConfig, noise: Box<dyn NoiseSource>) -> Result<Self> {
        config.validate()?;

        let cell_count_x = config.cell_count_x();
        let cell_count_z = config.cell_count_z();
        let mut grid = Self {
            cells: CellGraph::with_capacity((cell_count_x * cell_count_z) as usize),
            chunks: Vec::with_capacity((config.chunk_count_x * config.chunk_count_z) as usize),
            config,
            cell_count_x,
            cell_count_z,
            noise,
        };

        grid.create_chunks();
        grid.create_cells();

        log::info!(
            "Built hex grid: {}x{} cells in {}x{} chunks",
            cell_count_x,
            cell_count_z,
            grid.config.chunk_count_x,
            grid.config.chunk_count_z
        );
        Ok(grid)
    }

    /// Build the grid with a noise texture generated from `config.noise`.
    pub fn with_generated_noise(config: GridConfig) -> Result<Self> {
        let noise = NoiseTexture::generate(&config.noise);
        Self::new(config, Box::new(noise))
    }

    fn create_chunks(&mut self) {
        for z in 0..self.config.chunk_count_z {
            for x in 0..self.config.chunk_count_x {
                let id = ChunkId(self.chunks.len());
                self.chunks.push(HexGridChunk::new(
                    id,
                    ChunkCoord { x, z },
                    self.config.chunk_size_x,
                    self.config.chunk_size_z,
                ));
            }
        }
    }

    fn create_cells(&mut self) {
        for z in 0..self.cell_count_z {
            for x in 0..self.cell_count_x {
                self.create_cell(x, z);
            }
        }
    }

    fn create_cell(&mut self, x: u32, z: u32) {
        let width = self.cell_count_x as usize;
        let (col, row) = (x as i32, z as i32);

        // Odd rows shift half a cell east; subtracting row / 2 keeps the
        // grid rectangular instead of drifting as rows are added.
        let position = Vec3::new(
            (col as f32 + row as f32 * 0.5 - (row / 2) as f32) * (INNER_RADIUS * 2.0),
            0.0,
            row as f32 * (OUTER_RADIUS * 1.5),
        );
        let coordinates = HexCoordinates::from_offset(col, row);
        let id = self
            .cells
            .push(HexCell::new(coordinates, position, self.config.default_color));
        let i = id.0;

        // West link within the row, south links back into the previous row.
        // Each pair is linked exactly once.
        if x > 0 {
            self.cells.set_neighbor(id, HexDirection::W, CellId(i - 1));
        }
        if z > 0 {
            if z & 1 == 0 {
                self.cells.set_neighbor(id, HexDirection::SE, CellId(i - width));
                if x > 0 {
                    self.cells.set_neighbor(id, HexDirection::SW, CellId(i - width - 1));
                }
            } else {
                self.cells.set_neighbor(id, HexDirection::SW, CellId(i - width));
                if x < self.cell_count_x - 1 {
                    self.cells.set_neighbor(id, HexDirection::SE, CellId(i - width + 1));
                }
            }
        }

        self.add_cell_to_chunk(x, z, id);
        self.cells.set_elevation(id, 0, self.noise.as_ref());
    }

    fn add_cell_to_chunk(&mut self, x: u32, z: u32, cell: CellId) {
        let chunk_x = x / self.config.chunk_size_x;
        let chunk_z = z / self.config.chunk_size_z;
        let chunk = ChunkId((chunk_x + chunk_z * self.config.chunk_count_x) as usize);

        let local_x = x - chunk_x * self.config.chunk_size_x;
        let local_z = z - chunk_z * self.config.chunk_size_z;
        self.chunks[chunk.0].add_cell((local_x + local_z * self.config.chunk_size_x) as usize, cell);
        self.cells.assign_chunk(cell, chunk);
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn cell_count_x(&self) -> u32 {
        self.cell_count_x
    }

    pub fn cell_count_z(&self) -> u32 {
        self.cell_count_z
    }

    pub fn noise(&self) -> &dyn NoiseSource {
        self.noise.as_ref()
    }

    /// Read access to every cell and its links.
    pub fn cells(&self) -> &CellGraph {
        &self.cells
    }

    pub fn cell(&self, id: CellId) -> Option<&HexCell> {
        self.cells.get(id)
    }

    pub fn chunks(&self) -> &[HexGridChunk] {
        &self.chunks
    }

    pub fn chunk(&self, id: ChunkId) -> Option<&HexGridChunk> {
        self.chunks.get(id.0)
    }

    /// Cell under a world-space position, or `None` outside the grid or for
    /// non-finite positions.
    pub fn cell_at_position(&self, position: Vec3) -> Option<CellId> {
        if !position.is_finite() {
            return None;
        }
        let local = position - self.config.origin();
        HexCoordinates::from_position(local).and_then(|c| self.cell_at_coordinates(c))
    }

    /// Cell with the given cube coordinates, or `None` outside the grid.
    pub fn cell_at_coordinates(&self, coordinates: HexCoordinates) -> Option<CellId> {
        let row = coordinates.z();
        if row < 0 || row >= self.cell_count_z as i32 {
            return None;
        }
        let col = coordinates.x().checked_add(row / 2)?;
        if col < 0 || col >= self.cell_count_x as i32 {
            return None;
        }
        Some(CellId((col + row * self.cell_count_x as i32) as usize))
    }

    pub fn cell_at_offset(&self, col: i32, row: i32) -> Option<CellId> {
        self.cell_at_coordinates(HexCoordinates::from_offset(col, row))
    }

    /// Toggle the coordinate label overlay on every chunk.
    pub fn show_ui(&mut self, visible: bool) {
        for chunk in &mut self.chunks {
            chunk.show_ui(visible);
        }
    }

    pub fn neighbor(&self, id: CellId, direction: HexDirection) -> Option<CellId> {
        self.cells.neighbor(id, direction)
    }

    pub fn set_elevation(&mut self, id: CellId, elevation: i32) -> bool {
        self.cells.set_elevation(id, elevation, self.noise.as_ref())
    }

    pub fn set_color(&mut self, id: CellId, color: Color) -> bool {
        self.cells.set_color(id, color)
    }

    pub fn set_outgoing_river(&mut self, id: CellId, direction: HexDirection) -> bool {
        self.cells.set_outgoing_river(id, direction)
    }

    pub fn remove_outgoing_river(&mut self, id: CellId) -> bool {
        self.cells.remove_outgoing_river(id)
    }

    pub fn remove_incoming_river(&mut self, id: CellId) -> bool {
        self.cells.remove_incoming_river(id)
    }

    pub fn remove_river(&mut self, id: CellId) -> bool {
        self.cells.remove_river(id)
    }

    pub fn edge_type(&self, id: CellId, direction: HexDirection) -> Option<EdgeType> {
        self.cells.edge_type(id, direction)
    }

    pub fn edge_type_between(&self, id: CellId, other: CellId) -> EdgeType {
        self.cells.edge_type_between(id, other)
    }

    /// Drain the chunks that need rebuilding, in ascending order.
    pub fn take_dirty_chunks(&mut self) -> Vec<ChunkId> {
        let dirty = self.cells.invalidator_mut().take_dirty_chunks();
        if !dirty.is_empty() {
            log::debug!("Draining {} dirty chunks", dirty.len());
        }
        dirty
    }

    pub fn is_chunk_dirty(&self, chunk: ChunkId) -> bool {
        self.cells.invalidator().is_chunk_dirty(chunk)
    }

    /// Number of dirty-marks a chunk has received since the grid was built.
    pub fn chunk_generation(&self, chunk: ChunkId) -> u32 {
        self.cells.invalidator().generation(chunk)
    }
}
