//! Mesh buffers and pooled construction

pub mod pool;
pub mod builder;

pub use pool::{ListPool, MeshPools, PoolStats};
pub use builder::{HexMesh, MeshBuilder, MeshData, MeshSettings};
