//! Grid configuration, persisted as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::noise::NoiseParams;
use crate::core::{Color, Error, Result, Vec3};

/// Dimensions and defaults for building a [`HexGrid`](super::grid::HexGrid).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Chunks along X (columns)
    pub chunk_count_x: u32,
    /// Chunks along Z (rows)
    pub chunk_count_z: u32,
    /// Cells per chunk along X. Larger chunks mean fewer, bigger meshes.
    pub chunk_size_x: u32,
    /// Cells per chunk along Z
    pub chunk_size_z: u32,
    /// Color every cell starts with
    pub default_color: Color,
    /// Grid translation in world space; lookups subtract it
    pub origin: [f32; 3],
    /// Procedural perturbation noise
    pub noise: NoiseParams,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            chunk_count_x: 4,
            chunk_count_z: 3,
            chunk_size_x: 5,
            chunk_size_z: 5,
            default_color: Color::WHITE,
            origin: [0.0, 0.0, 0.0],
            noise: NoiseParams::default(),
        }
    }
}

impl GridConfig {
    /// Total cells along X
    pub fn cell_count_x(&self) -> u32 {
        self.chunk_count_x * self.chunk_size_x
    }

    /// Total cells along Z
    pub fn cell_count_z(&self) -> u32 {
        self.chunk_count_z * self.chunk_size_z
    }

    pub fn origin(&self) -> Vec3 {
        Vec3::from_array(self.origin)
    }

    /// Reject configurations that would produce an empty or oversized grid.
    pub fn validate(&self) -> Result<()> {
        let dims = [
            ("chunk_count_x", self.chunk_count_x),
            ("chunk_count_z", self.chunk_count_z),
            ("chunk_size_x", self.chunk_size_x),
            ("chunk_size_z", self.chunk_size_z),
        ];
        for (name, value) in dims {
            if value == 0 {
                return Err(Error::Config(format!("{name} must be at least 1")));
            }
        }

        let cells_x = self.chunk_count_x as u64 * self.chunk_size_x as u64;
        let cells_z = self.chunk_count_z as u64 * self.chunk_size_z as u64;
        if cells_x > i32::MAX as u64 || cells_z > i32::MAX as u64 || cells_x * cells_z > i32::MAX as u64 {
            return Err(Error::Config(format!(
                "grid of {}x{} chunks of {}x{} cells is too large",
                self.chunk_count_x, self.chunk_count_z, self.chunk_size_x, self.chunk_size_z
            )));
        }
        Ok(())
    }

    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate a config. Missing fields take their defaults.
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: GridConfig = serde_json::from_str(&json)?;
        if let Err(e) = config.validate() {
            log::warn!("Rejected grid config {}: {}", path.display(), e);
            return Err(e);
        }
        Ok(config)
    }
}
