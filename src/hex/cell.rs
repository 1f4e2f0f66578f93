//! Hex cells and the adjacency graph that links them.
//!
//! A [`HexCell`] holds the editable state of one hexagon. All mutation goes
//! through [`CellGraph`], which owns every cell, keeps neighbor links
//! symmetric, enforces the river rules, and turns each effective edit into
//! chunk dirty-marks. Nothing here rebuilds geometry; the chunk scheduler
//! drains the dirty set and does that later.
//!
//! Rivers only flow downhill: a cell may send a river to a neighbor whose
//! elevation is not above its own. Each cell has at most one incoming and one
//! outgoing river, and every river endpoint is mirrored on the neighbor.

use crate::core::{Color, Vec2, Vec3};

use super::chunk::{ChunkId, ChunkInvalidator};
use super::coordinates::HexCoordinates;
use super::direction::HexDirection;
use super::metrics::{self, EdgeType};
use super::noise::NoiseSource;

/// Index of a cell in its graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

/// Coordinate label shown over a cell when the chunk UI is visible.
#[derive(Clone, Debug, PartialEq)]
pub struct CellLabel {
    /// Anchor on the grid canvas (cell center x, z)
    pub anchor: Vec2,
    /// Canvas depth, kept at `-position.y` so the label rides with the cell
    pub depth: f32,
    pub text: String,
}

/// Editable state of a single hexagon.
#[derive(Clone, Debug)]
pub struct HexCell {
    coordinates: HexCoordinates,
    /// Grid-local center; y follows elevation plus jitter
    position: Vec3,
    color: Color,
    /// `None` until the first assignment, so that one always counts as a change
    elevation: Option<i32>,
    chunk: Option<ChunkId>,
    neighbors: [Option<CellId>; 6],
    incoming_river: Option<HexDirection>,
    outgoing_river: Option<HexDirection>,
    label: CellLabel,
}

impl HexCell {
    pub fn new(coordinates: HexCoordinates, position: Vec3, color: Color) -> Self {
        Self {
            coordinates,
            position,
            color,
            elevation: None,
            chunk: None,
            neighbors: [None; 6],
            incoming_river: None,
            outgoing_river: None,
            label: CellLabel {
                anchor: Vec2::new(position.x, position.z),
                depth: -position.y,
                text: coordinates.to_string_on_separate_lines(),
            },
        }
    }

    pub fn coordinates(&self) -> HexCoordinates {
        self.coordinates
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Current elevation, 0 if never assigned.
    pub fn elevation(&self) -> i32 {
        self.elevation.unwrap_or(0)
    }

    pub fn is_elevation_set(&self) -> bool {
        self.elevation.is_some()
    }

    pub fn chunk(&self) -> Option<ChunkId> {
        self.chunk
    }

    pub fn neighbor(&self, direction: HexDirection) -> Option<CellId> {
        self.neighbors[direction.index()]
    }

    /// Existing neighbors with their directions.
    pub fn neighbors(&self) -> impl Iterator<Item = (HexDirection, CellId)> + '_ {
        HexDirection::ALL
            .into_iter()
            .filter_map(|d| self.neighbors[d.index()].map(|n| (d, n)))
    }

    pub fn label(&self) -> &CellLabel {
        &self.label
    }

    pub fn has_incoming_river(&self) -> bool {
        self.incoming_river.is_some()
    }

    pub fn has_outgoing_river(&self) -> bool {
        self.outgoing_river.is_some()
    }

    pub fn incoming_river(&self) -> Option<HexDirection> {
        self.incoming_river
    }

    pub fn outgoing_river(&self) -> Option<HexDirection> {
        self.outgoing_river
    }

    pub fn has_river(&self) -> bool {
        self.incoming_river.is_some() || self.outgoing_river.is_some()
    }

    /// Source or mouth: exactly one river endpoint.
    pub fn has_river_begin_or_end(&self) -> bool {
        self.incoming_river.is_some() != self.outgoing_river.is_some()
    }

    pub fn has_river_through_edge(&self, direction: HexDirection) -> bool {
        self.incoming_river == Some(direction) || self.outgoing_river == Some(direction)
    }

    /// Height of the river channel floor.
    pub fn stream_bed_y(&self) -> f32 {
        (self.elevation() as f32 + metrics::STREAM_BED_ELEVATION_OFFSET) * metrics::ELEVATION_STEP
    }

    /// Height of the water surface in the channel.
    pub fn river_surface_y(&self) -> f32 {
        (self.elevation() as f32 + metrics::RIVER_SURFACE_ELEVATION_OFFSET) * metrics::ELEVATION_STEP
    }
}

/// Owner of all cells: adjacency, edit rules and invalidation routing.
///
/// Ids index straight into the arena; passing an id this graph did not hand
/// out panics.
#[derive(Debug, Default)]
pub struct CellGraph {
    cells: Vec<HexCell>,
    invalidator: ChunkInvalidator,
}

impl CellGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            invalidator: ChunkInvalidator::new(),
        }
    }

    /// Add a cell and return its id. Cells are never removed individually.
    pub fn push(&mut self, cell: HexCell) -> CellId {
        self.cells.push(cell);
        CellId(self.cells.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, id: CellId) -> Option<&HexCell> {
        self.cells.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellId, &HexCell)> {
        self.cells.iter().enumerate().map(|(i, c)| (CellId(i), c))
    }

    pub fn invalidator(&self) -> &ChunkInvalidator {
        &self.invalidator
    }

    pub fn invalidator_mut(&mut self) -> &mut ChunkInvalidator {
        &mut self.invalidator
    }

    /// Set the chunk that `id` reports its edits to.
    pub fn assign_chunk(&mut self, id: CellId, chunk: ChunkId) {
        self.cells[id.0].chunk = Some(chunk);
    }

    pub fn neighbor(&self, id: CellId, direction: HexDirection) -> Option<CellId> {
        self.cells[id.0].neighbor(direction)
    }

    /// Link `id` and `other` across `direction`, updating both sides.
    ///
    /// Any link either cell previously had on those sides is cut on both ends,
    /// so the graph stays symmetric. Linking the same pair again is a no-op.
    pub fn set_neighbor(&mut self, id: CellId, direction: HexDirection, other: CellId) {
        if id == other {
            log::warn!("Refusing to link cell {:?} to itself", id);
            return;
        }
        let back = direction.opposite();

        if let Some(previous) = self.cells[id.0].neighbors[direction.index()] {
            if previous != other && self.cells[previous.0].neighbors[back.index()] == Some(id) {
                self.cells[previous.0].neighbors[back.index()] = None;
            }
        }
        if let Some(previous) = self.cells[other.0].neighbors[back.index()] {
            if previous != id && self.cells[previous.0].neighbors[direction.index()] == Some(other) {
                self.cells[previous.0].neighbors[direction.index()] = None;
            }
        }

        self.cells[id.0].neighbors[direction.index()] = Some(other);
        self.cells[other.0].neighbors[back.index()] = Some(id);
    }

    /// Change a cell's elevation. Returns false if it already had that elevation.
    ///
    /// Moves the cell (and its label) to the new height, detaches any river
    /// that would now flow uphill, then invalidates the cell's neighborhood.
    pub fn set_elevation(&mut self, id: CellId, elevation: i32, noise: &dyn NoiseSource) -> bool {
        let cell = &mut self.cells[id.0];
        if cell.elevation == Some(elevation) {
            return false;
        }
        cell.elevation = Some(elevation);

        let mut position = cell.position;
        position.y = elevation as f32 * metrics::ELEVATION_STEP;
        position.y += metrics::elevation_perturbation(noise, position);
        cell.position = position;
        cell.label.depth = -position.y;

        if let Some(direction) = self.cells[id.0].outgoing_river {
            let downhill = self
                .neighbor(id, direction)
                .is_some_and(|n| elevation >= self.cells[n.0].elevation());
            if !downhill {
                self.remove_outgoing_river(id);
            }
        }
        if let Some(direction) = self.cells[id.0].incoming_river {
            let downhill = self
                .neighbor(id, direction)
                .is_some_and(|n| elevation <= self.cells[n.0].elevation());
            if !downhill {
                self.remove_incoming_river(id);
            }
        }

        self.refresh(id);
        true
    }

    /// Change a cell's color. Returns false if unchanged.
    pub fn set_color(&mut self, id: CellId, color: Color) -> bool {
        let cell = &mut self.cells[id.0];
        if cell.color == color {
            return false;
        }
        cell.color = color;
        self.refresh(id);
        true
    }

    /// Start a river from `id` toward its neighbor in `direction`.
    ///
    /// Ignored (returns false) when the river is already there, when there is
    /// no neighbor in that direction, or when the neighbor is higher. Replaces
    /// the cell's previous outgoing river, drops an incoming river arriving
    /// through the same edge, and replaces the neighbor's incoming river.
    pub fn set_outgoing_river(&mut self, id: CellId, direction: HexDirection) -> bool {
        let cell = &self.cells[id.0];
        if cell.outgoing_river == Some(direction) {
            return false;
        }
        let Some(neighbor) = cell.neighbor(direction) else {
            return false;
        };
        if cell.elevation() < self.cells[neighbor.0].elevation() {
            return false;
        }

        self.remove_outgoing_river(id);
        if self.cells[id.0].incoming_river == Some(direction) {
            self.remove_incoming_river(id);
        }

        self.cells[id.0].outgoing_river = Some(direction);
        self.refresh_self_only(id);

        self.remove_incoming_river(neighbor);
        self.cells[neighbor.0].incoming_river = Some(direction.opposite());
        self.refresh_self_only(neighbor);

        log::trace!(
            "River {} -> {} ({:?})",
            self.cells[id.0].coordinates,
            self.cells[neighbor.0].coordinates,
            direction
        );
        true
    }

    /// Detach the outgoing river and the matching incoming end on the neighbor.
    pub fn remove_outgoing_river(&mut self, id: CellId) -> bool {
        let Some(direction) = self.cells[id.0].outgoing_river.take() else {
            return false;
        };
        self.refresh_self_only(id);

        if let Some(neighbor) = self.neighbor(id, direction) {
            self.cells[neighbor.0].incoming_river = None;
            self.refresh_self_only(neighbor);
        }
        log::trace!("Removed outgoing river of {}", self.cells[id.0].coordinates);
        true
    }

    /// Detach the incoming river and the matching outgoing end on the neighbor.
    pub fn remove_incoming_river(&mut self, id: CellId) -> bool {
        let Some(direction) = self.cells[id.0].incoming_river.take() else {
            return false;
        };
        self.refresh_self_only(id);

        if let Some(neighbor) = self.neighbor(id, direction) {
            self.cells[neighbor.0].outgoing_river = None;
            self.refresh_self_only(neighbor);
        }
        log::trace!("Removed incoming river of {}", self.cells[id.0].coordinates);
        true
    }

    /// Detach both river endpoints. Returns true if anything was removed.
    pub fn remove_river(&mut self, id: CellId) -> bool {
        let outgoing = self.remove_outgoing_river(id);
        let incoming = self.remove_incoming_river(id);
        outgoing || incoming
    }

    /// Edge type toward the neighbor in `direction`, if there is one.
    pub fn edge_type(&self, id: CellId, direction: HexDirection) -> Option<EdgeType> {
        self.neighbor(id, direction)
            .map(|n| self.edge_type_between(id, n))
    }

    /// Edge type between any two cells.
    pub fn edge_type_between(&self, id: CellId, other: CellId) -> EdgeType {
        metrics::edge_type(self.cells[id.0].elevation(), self.cells[other.0].elevation())
    }

    /// Mark the cell's chunk dirty, plus every distinct chunk that owns a neighbor,
    /// since the geometry of shared edges spans both.
    fn refresh(&mut self, id: CellId) {
        let cell = &self.cells[id.0];
        let own = cell.chunk;
        let mut chunks: Vec<ChunkId> = Vec::with_capacity(4);
        if let Some(chunk) = own {
            chunks.push(chunk);
        }
        for neighbor in cell.neighbors.iter().flatten() {
            if let Some(chunk) = self.cells[neighbor.0].chunk {
                if Some(chunk) != own && !chunks.contains(&chunk) {
                    chunks.push(chunk);
                }
            }
        }
        for chunk in chunks {
            self.invalidator.mark_chunk_dirty(chunk);
        }
    }

    /// Mark only the cell's own chunk dirty.
    fn refresh_self_only(&mut self, id: CellId) {
        if let Some(chunk) = self.cells[id.0].chunk {
            self.invalidator.mark_chunk_dirty(chunk);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::noise::UniformNoise;

    /// A row of `n` cells linked west to east, all in chunk 0.
    fn row(n: usize) -> (CellGraph, Vec<CellId>) {
        let mut graph = CellGraph::new();
        let mut ids = Vec::new();
        for col in 0..n as i32 {
            let coords = HexCoordinates::from_offset(col, 0);
            let id = graph.push(HexCell::new(coords, coords.to_position(), Color::WHITE));
            graph.assign_chunk(id, ChunkId(0));
            if let Some(&west) = ids.last() {
                graph.set_neighbor(id, HexDirection::W, west);
            }
            ids.push(id);
        }
        let noise = UniformNoise::neutral();
        for &id in &ids {
            graph.set_elevation(id, 0, &noise);
        }
        graph.invalidator_mut().clear();
        (graph, ids)
    }

    fn assert_rivers_downhill(graph: &CellGraph) {
        for (id, cell) in graph.iter() {
            if let Some(d) = cell.outgoing_river() {
                let n = graph.neighbor(id, d).expect("outgoing river without neighbor");
                let other = graph.get(n).unwrap();
                assert!(cell.elevation() >= other.elevation());
                assert_eq!(other.incoming_river(), Some(d.opposite()));
            }
            if let Some(d) = cell.incoming_river() {
                let n = graph.neighbor(id, d).expect("incoming river without neighbor");
                let other = graph.get(n).unwrap();
                assert!(cell.elevation() <= other.elevation());
                assert_eq!(other.outgoing_river(), Some(d.opposite()));
            }
        }
    }

    #[test]
    fn test_set_neighbor_symmetric() {
        let (graph, ids) = row(3);
        assert_eq!(graph.neighbor(ids[1], HexDirection::W), Some(ids[0]));
        assert_eq!(graph.neighbor(ids[0], HexDirection::E), Some(ids[1]));
        assert_eq!(graph.neighbor(ids[0], HexDirection::W), None);
    }

    #[test]
    fn test_set_neighbor_idempotent() {
        let (mut graph, ids) = row(2);
        graph.set_neighbor(ids[1], HexDirection::W, ids[0]);
        assert_eq!(graph.neighbor(ids[1], HexDirection::W), Some(ids[0]));
        assert_eq!(graph.neighbor(ids[0], HexDirection::E), Some(ids[1]));
    }

    #[test]
    fn test_relink_cuts_stale_back_link() {
        let (mut graph, ids) = row(3);
        // Point cell 2's west side at cell 0 instead of cell 1
        graph.set_neighbor(ids[2], HexDirection::W, ids[0]);
        assert_eq!(graph.neighbor(ids[0], HexDirection::E), Some(ids[2]));
        assert_eq!(graph.neighbor(ids[1], HexDirection::E), None);
        assert_eq!(graph.neighbor(ids[1], HexDirection::W), None);
    }

    #[test]
    fn test_first_elevation_counts_as_change() {
        let mut graph = CellGraph::new();
        let id = graph.push(HexCell::new(HexCoordinates::new(0, 0), Vec3::ZERO, Color::WHITE));
        assert!(!graph.get(id).unwrap().is_elevation_set());
        assert!(graph.set_elevation(id, 0, &UniformNoise::neutral()));
        assert!(graph.get(id).unwrap().is_elevation_set());
        assert!(!graph.set_elevation(id, 0, &UniformNoise::neutral()));
    }

    #[test]
    fn test_set_elevation_moves_cell_and_label() {
        let (mut graph, ids) = row(1);
        graph.set_elevation(ids[0], 4, &UniformNoise::neutral());
        let cell = graph.get(ids[0]).unwrap();
        assert_eq!(cell.elevation(), 4);
        assert!((cell.position().y - 4.0 * metrics::ELEVATION_STEP).abs() < 1e-5);
        assert!((cell.label().depth + cell.position().y).abs() < 1e-5);
    }

    #[test]
    fn test_set_elevation_applies_vertical_jitter() {
        let (mut graph, ids) = row(1);
        let noise = UniformNoise(crate::core::Vec4::new(0.5, 1.0, 0.5, 0.5));
        graph.set_elevation(ids[0], 1, &noise);
        let y = graph.get(ids[0]).unwrap().position().y;
        assert!((y - (metrics::ELEVATION_STEP + metrics::ELEVATION_PERTURB_STRENGTH)).abs() < 1e-5);
    }

    #[test]
    fn test_set_color_no_op_when_unchanged() {
        let (mut graph, ids) = row(1);
        assert!(!graph.set_color(ids[0], Color::WHITE));
        assert!(!graph.invalidator().has_dirty());
        assert!(graph.set_color(ids[0], Color::BLUE));
        assert_eq!(graph.get(ids[0]).unwrap().color(), Color::BLUE);
        assert!(graph.invalidator().is_chunk_dirty(ChunkId(0)));
    }

    #[test]
    fn test_set_outgoing_river() {
        let (mut graph, ids) = row(2);
        assert!(graph.set_outgoing_river(ids[0], HexDirection::E));

        let source = graph.get(ids[0]).unwrap();
        let target = graph.get(ids[1]).unwrap();
        assert_eq!(source.outgoing_river(), Some(HexDirection::E));
        assert_eq!(target.incoming_river(), Some(HexDirection::W));
        assert!(source.has_river_begin_or_end());
        assert!(source.has_river_through_edge(HexDirection::E));
        assert!(target.has_river_through_edge(HexDirection::W));
        assert_rivers_downhill(&graph);
    }

    #[test]
    fn test_set_outgoing_river_idempotent() {
        let (mut graph, ids) = row(2);
        assert!(graph.set_outgoing_river(ids[0], HexDirection::E));
        let generation = graph.invalidator().generation(ChunkId(0));
        // Both endpoints refresh their own chunk once
        assert_eq!(generation, 2);

        assert!(!graph.set_outgoing_river(ids[0], HexDirection::E));
        assert_eq!(graph.invalidator().generation(ChunkId(0)), generation);
    }

    #[test]
    fn test_river_rejected_uphill() {
        let (mut graph, ids) = row(2);
        let noise = UniformNoise::neutral();
        graph.set_elevation(ids[0], 1, &noise);
        graph.set_elevation(ids[1], 3, &noise);
        graph.invalidator_mut().clear();

        assert!(!graph.set_outgoing_river(ids[0], HexDirection::E));
        assert!(!graph.get(ids[0]).unwrap().has_river());
        assert!(!graph.get(ids[1]).unwrap().has_river());
        assert!(!graph.invalidator().has_dirty());
    }

    #[test]
    fn test_river_rejected_without_neighbor() {
        let (mut graph, ids) = row(1);
        assert!(!graph.set_outgoing_river(ids[0], HexDirection::NE));
        assert!(!graph.get(ids[0]).unwrap().has_river());
    }

    #[test]
    fn test_river_allowed_flat_and_downhill() {
        let (mut graph, ids) = row(3);
        let noise = UniformNoise::neutral();
        graph.set_elevation(ids[0], 2, &noise);
        graph.set_elevation(ids[1], 2, &noise);
        assert!(graph.set_outgoing_river(ids[0], HexDirection::E));
        assert!(graph.set_outgoing_river(ids[1], HexDirection::E));
        let middle = graph.get(ids[1]).unwrap();
        assert!(middle.has_incoming_river() && middle.has_outgoing_river());
        assert!(!middle.has_river_begin_or_end());
        assert_rivers_downhill(&graph);
    }

    #[test]
    fn test_reversing_river_drops_incoming_on_same_edge() {
        let (mut graph, ids) = row(2);
        assert!(graph.set_outgoing_river(ids[0], HexDirection::E));
        // Send it back the other way
        assert!(graph.set_outgoing_river(ids[1], HexDirection::W));

        let a = graph.get(ids[0]).unwrap();
        let b = graph.get(ids[1]).unwrap();
        assert_eq!(a.outgoing_river(), None);
        assert_eq!(a.incoming_river(), Some(HexDirection::E));
        assert_eq!(b.outgoing_river(), Some(HexDirection::W));
        assert_eq!(b.incoming_river(), None);
        assert_rivers_downhill(&graph);
    }

    #[test]
    fn test_new_river_replaces_neighbor_incoming() {
        let (mut graph, ids) = row(3);
        assert!(graph.set_outgoing_river(ids[0], HexDirection::E));
        // Cell 2 now also drains into cell 1 from the east
        assert!(graph.set_outgoing_river(ids[2], HexDirection::W));

        assert_eq!(graph.get(ids[0]).unwrap().outgoing_river(), None);
        assert_eq!(graph.get(ids[1]).unwrap().incoming_river(), Some(HexDirection::E));
        assert_rivers_downhill(&graph);
    }

    #[test]
    fn test_raising_target_tears_down_river() {
        let (mut graph, ids) = row(2);
        let noise = UniformNoise::neutral();
        assert!(graph.set_outgoing_river(ids[0], HexDirection::E));

        // Target becomes higher than the source: its incoming end is uphill
        graph.set_elevation(ids[1], 2, &noise);
        assert!(!graph.get(ids[0]).unwrap().has_river());
        assert!(!graph.get(ids[1]).unwrap().has_river());
    }

    #[test]
    fn test_lowering_source_tears_down_river() {
        let (mut graph, ids) = row(2);
        let noise = UniformNoise::neutral();
        assert!(graph.set_outgoing_river(ids[0], HexDirection::E));
        graph.set_elevation(ids[0], -1, &noise);
        assert!(!graph.get(ids[0]).unwrap().has_river());
        assert!(!graph.get(ids[1]).unwrap().has_river());
    }

    #[test]
    fn test_raising_source_keeps_river() {
        let (mut graph, ids) = row(2);
        let noise = UniformNoise::neutral();
        assert!(graph.set_outgoing_river(ids[0], HexDirection::E));
        graph.set_elevation(ids[0], 5, &noise);
        assert_eq!(graph.get(ids[0]).unwrap().outgoing_river(), Some(HexDirection::E));
        assert_rivers_downhill(&graph);
    }

    #[test]
    fn test_remove_river() {
        let (mut graph, ids) = row(3);
        graph.set_outgoing_river(ids[0], HexDirection::E);
        graph.set_outgoing_river(ids[1], HexDirection::E);
        graph.invalidator_mut().clear();

        assert!(graph.remove_river(ids[1]));
        for id in &ids {
            assert!(!graph.get(*id).unwrap().has_river());
        }
        assert!(graph.invalidator().is_chunk_dirty(ChunkId(0)));
        assert!(!graph.remove_river(ids[1]));
    }

    #[test]
    fn test_river_change_only_dirties_own_chunks() {
        let (mut graph, ids) = row(3);
        graph.assign_chunk(ids[2], ChunkId(1));
        graph.set_outgoing_river(ids[0], HexDirection::E);
        // Cells 0 and 1 live in chunk 0; the neighbor chunk is left alone
        assert!(graph.invalidator().is_chunk_dirty(ChunkId(0)));
        assert!(!graph.invalidator().is_chunk_dirty(ChunkId(1)));
    }

    #[test]
    fn test_elevation_change_dirties_neighbor_chunks_once() {
        let (mut graph, ids) = row(3);
        graph.assign_chunk(ids[0], ChunkId(1));
        graph.assign_chunk(ids[2], ChunkId(1));
        graph.set_elevation(ids[1], 2, &UniformNoise::neutral());

        assert_eq!(graph.invalidator().generation(ChunkId(0)), 1);
        // Two neighbors share chunk 1, it is still marked once
        assert_eq!(graph.invalidator().generation(ChunkId(1)), 1);
    }

    #[test]
    fn test_edge_types() {
        let (mut graph, ids) = row(2);
        let noise = UniformNoise::neutral();
        graph.set_elevation(ids[0], 2, &noise);
        graph.set_elevation(ids[1], 2, &noise);
        assert_eq!(graph.edge_type(ids[0], HexDirection::E), Some(EdgeType::Flat));
        graph.set_elevation(ids[1], 3, &noise);
        assert_eq!(graph.edge_type(ids[0], HexDirection::E), Some(EdgeType::Slope));
        graph.set_elevation(ids[1], 5, &noise);
        assert_eq!(graph.edge_type_between(ids[0], ids[1]), EdgeType::Cliff);
        assert_eq!(graph.edge_type_between(ids[1], ids[0]), EdgeType::Cliff);
        assert_eq!(graph.edge_type(ids[0], HexDirection::W), None);
    }

    #[test]
    fn test_river_heights() {
        let (mut graph, ids) = row(1);
        graph.set_elevation(ids[0], 2, &UniformNoise::neutral());
        let cell = graph.get(ids[0]).unwrap();
        assert!((cell.stream_bed_y() - 0.75).abs() < 1e-5);
        assert!((cell.river_surface_y() - 4.5).abs() < 1e-5);
    }

    #[test]
    fn test_label_text() {
        let cell = HexCell::new(HexCoordinates::new(1, 2), Vec3::new(3.0, 0.0, 4.0), Color::WHITE);
        assert_eq!(cell.label().text, "1\n-3\n2");
        assert_eq!(cell.label().anchor, Vec2::new(3.0, 4.0));
    }
}
