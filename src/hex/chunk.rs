//! Chunk partition of the grid and dirty tracking for chunk rebuilds.
//!
//! Chunks are fixed-size rectangular blocks of cells that share one mesh
//! region. The grid owns them; cells refer back to their chunk only by
//! [`ChunkId`], and only to route invalidation.

use std::collections::{HashMap, HashSet};

use super::cell::CellId;

/// Index of a chunk in the grid's chunk array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId(pub usize);

/// Position of a chunk in chunk-grid units
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: u32,
    pub z: u32,
}

/// A rectangular block of cells rendered as one mesh region.
#[derive(Clone, Debug)]
pub struct HexGridChunk {
    id: ChunkId,
    coord: ChunkCoord,
    /// Cells by local index `local_x + local_z * size_x`
    cells: Vec<Option<CellId>>,
    ui_visible: bool,
}

impl HexGridChunk {
    pub fn new(id: ChunkId, coord: ChunkCoord, size_x: u32, size_z: u32) -> Self {
        Self {
            id,
            coord,
            cells: vec![None; (size_x * size_z) as usize],
            ui_visible: false,
        }
    }

    pub fn id(&self) -> ChunkId {
        self.id
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Register a cell under its local slot. Returns false if the slot is out of range.
    pub fn add_cell(&mut self, local_index: usize, cell: CellId) -> bool {
        match self.cells.get_mut(local_index) {
            Some(slot) => {
                *slot = Some(cell);
                true
            }
            None => {
                log::warn!(
                    "Chunk {:?}: local index {} out of range ({} slots)",
                    self.id,
                    local_index,
                    self.cells.len()
                );
                false
            }
        }
    }

    pub fn cell(&self, local_index: usize) -> Option<CellId> {
        self.cells.get(local_index).copied().flatten()
    }

    /// Registered cells in local index order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().filter_map(|c| *c)
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Toggle the coordinate label overlay.
    pub fn show_ui(&mut self, visible: bool) {
        self.ui_visible = visible;
    }

    pub fn is_ui_visible(&self) -> bool {
        self.ui_visible
    }
}

/// Tracks which chunks need their geometry rebuilt after edits.
///
/// Marking is cheap and idempotent per frame; the scheduler drains the dirty
/// set once and rebuilds each chunk at most once.
#[derive(Debug)]
pub struct ChunkInvalidator {
    /// Chunks needing rebuild
    dirty_chunks: HashSet<ChunkId>,
    /// Dirty-mark counters per chunk, never reset by draining
    generations: HashMap<ChunkId, u32>,
}

impl ChunkInvalidator {
    /// Create a new chunk invalidator with empty state.
    pub fn new() -> Self {
        Self {
            dirty_chunks: HashSet::new(),
            generations: HashMap::new(),
        }
    }

    /// Mark a chunk as dirty and increment its generation.
    pub fn mark_chunk_dirty(&mut self, chunk: ChunkId) {
        self.dirty_chunks.insert(chunk);
        let generation = self.generations.entry(chunk).or_insert(0);
        *generation = generation.wrapping_add(1);
    }

    /// Take all dirty chunks in ascending order and clear the dirty list.
    pub fn take_dirty_chunks(&mut self) -> Vec<ChunkId> {
        let mut chunks: Vec<ChunkId> = self.dirty_chunks.drain().collect();
        chunks.sort_unstable();
        chunks
    }

    /// Number of times a chunk has been marked dirty.
    pub fn generation(&self, chunk: ChunkId) -> u32 {
        self.generations.get(&chunk).copied().unwrap_or(0)
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty_chunks.is_empty()
    }

    pub fn is_chunk_dirty(&self, chunk: ChunkId) -> bool {
        self.dirty_chunks.contains(&chunk)
    }

    /// Clear all dirty state and reset generation counters.
    pub fn clear(&mut self) {
        self.dirty_chunks.clear();
        self.generations.clear();
    }

    pub fn dirty_chunk_count(&self) -> usize {
        self.dirty_chunks.len()
    }
}

impl Default for ChunkInvalidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_add_cell() {
        let mut chunk = HexGridChunk::new(ChunkId(0), ChunkCoord { x: 0, z: 0 }, 2, 2);
        assert_eq!(chunk.capacity(), 4);
        assert!(chunk.add_cell(3, CellId(7)));
        assert!(!chunk.add_cell(4, CellId(8)));
        assert_eq!(chunk.cell(3), Some(CellId(7)));
        assert_eq!(chunk.cell(0), None);
        assert_eq!(chunk.cells().collect::<Vec<_>>(), vec![CellId(7)]);
    }

    #[test]
    fn test_chunk_show_ui() {
        let mut chunk = HexGridChunk::new(ChunkId(1), ChunkCoord { x: 1, z: 0 }, 5, 5);
        assert!(!chunk.is_ui_visible());
        chunk.show_ui(true);
        assert!(chunk.is_ui_visible());
    }

    #[test]
    fn test_new_invalidator() {
        let invalidator = ChunkInvalidator::new();
        assert!(!invalidator.has_dirty());
        assert_eq!(invalidator.dirty_chunk_count(), 0);
    }

    #[test]
    fn test_mark_chunk_dirty_multiple_times() {
        let mut invalidator = ChunkInvalidator::new();
        let chunk = ChunkId(3);

        invalidator.mark_chunk_dirty(chunk);
        assert!(invalidator.is_chunk_dirty(chunk));
        assert_eq!(invalidator.generation(chunk), 1);

        invalidator.mark_chunk_dirty(chunk);
        assert_eq!(invalidator.generation(chunk), 2);
        assert_eq!(invalidator.dirty_chunk_count(), 1);
    }

    #[test]
    fn test_take_dirty_chunks_sorted() {
        let mut invalidator = ChunkInvalidator::new();
        invalidator.mark_chunk_dirty(ChunkId(5));
        invalidator.mark_chunk_dirty(ChunkId(1));
        invalidator.mark_chunk_dirty(ChunkId(3));

        assert_eq!(
            invalidator.take_dirty_chunks(),
            vec![ChunkId(1), ChunkId(3), ChunkId(5)]
        );
        assert!(!invalidator.has_dirty());
        // Generations survive draining
        assert_eq!(invalidator.generation(ChunkId(5)), 1);
    }

    #[test]
    fn test_clear() {
        let mut invalidator = ChunkInvalidator::default();
        invalidator.mark_chunk_dirty(ChunkId(0));
        invalidator.clear();
        assert!(!invalidator.has_dirty());
        assert_eq!(invalidator.generation(ChunkId(0)), 0);
    }
}
