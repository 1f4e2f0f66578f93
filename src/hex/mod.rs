//! Hex grid model: coordinates, metrics, cells, chunks and editing

pub mod direction;
pub mod coordinates;
pub mod metrics;
pub mod noise;
pub mod edge;
pub mod cell;
pub mod chunk;
pub mod config;
pub mod grid;
pub mod editor;

pub use direction::HexDirection;
pub use coordinates::HexCoordinates;
pub use metrics::EdgeType;
pub use noise::{NoiseParams, NoiseSource, NoiseTexture, UniformNoise};
pub use edge::EdgeVertices;
pub use cell::{CellGraph, CellId, CellLabel, HexCell};
pub use chunk::{ChunkCoord, ChunkId, ChunkInvalidator, HexGridChunk};
pub use config::GridConfig;
pub use grid::HexGrid;
pub use editor::{EditSettings, HexMapEditor, OptionalToggle};
