//! Mesh buffer construction for hex chunk geometry.
//!
//! A [`HexMesh`] is the render target for one chunk layer (terrain, rivers,
//! ...). Each rebuild calls [`HexMesh::clear`] to get a [`MeshBuilder`] that
//! borrows empty buffers from [`MeshPools`], emits triangles and quads into
//! them, and finishes with [`MeshBuilder::apply`]. The buffers go back to the
//! pool on `apply`, or when the builder is dropped early.

use serde::{Deserialize, Serialize};

use super::pool::MeshPools;
use crate::core::{Color, Vec2, Vec3};
use crate::hex::metrics;
use crate::hex::noise::NoiseSource;

/// Which optional buffers a mesh tracks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshSettings {
    /// Keep a copy of the mesh for collision queries
    pub use_collider: bool,
    pub use_colors: bool,
    pub use_uv_coordinates: bool,
}

/// Finished geometry as handed to the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vec3>,
    pub colors: Vec<Color>,
    pub uvs: Vec<Vec2>,
    /// Three indices per triangle
    pub triangles: Vec<u32>,
    pub normals: Vec<Vec3>,
}

impl MeshData {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.colors.clear();
        self.uvs.clear();
        self.triangles.clear();
        self.normals.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Area-weighted vertex normals from the triangle list.
    pub fn recalculate_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.vertices.len(), Vec3::ZERO);

        for tri in self.triangles.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            if a >= self.vertices.len() || b >= self.vertices.len() || c >= self.vertices.len() {
                continue;
            }
            let face = (self.vertices[b] - self.vertices[a]).cross(self.vertices[c] - self.vertices[a]);
            self.normals[a] += face;
            self.normals[b] += face;
            self.normals[c] += face;
        }

        for n in &mut self.normals {
            *n = n.normalize_or_zero();
        }
    }
}

/// Render target for one layer of a chunk.
#[derive(Clone, Debug)]
pub struct HexMesh {
    name: String,
    settings: MeshSettings,
    mesh: MeshData,
    collider: Option<MeshData>,
}

impl HexMesh {
    pub fn new(name: impl Into<String>, settings: MeshSettings) -> Self {
        Self {
            name: name.into(),
            settings,
            mesh: MeshData::default(),
            collider: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settings(&self) -> MeshSettings {
        self.settings
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Collision copy from the last `apply`, if this mesh uses a collider.
    pub fn collider(&self) -> Option<&MeshData> {
        self.collider.as_ref()
    }

    /// Reset the mesh and start a rebuild with buffers borrowed from `pools`.
    pub fn clear<'a>(
        &'a mut self,
        pools: &'a mut MeshPools,
        noise: &'a dyn NoiseSource,
    ) -> MeshBuilder<'a> {
        self.mesh.clear();
        let settings = self.settings;

        let vertices = pools.vertices.get();
        let colors = if settings.use_colors { pools.colors.get() } else { Vec::new() };
        let uvs = if settings.use_uv_coordinates { pools.uvs.get() } else { Vec::new() };
        let triangles = pools.triangles.get();

        MeshBuilder {
            target: self,
            pools,
            noise,
            settings,
            vertices,
            colors,
            uvs,
            triangles,
            released: false,
        }
    }
}

/// Accumulates one rebuild's geometry for a [`HexMesh`].
///
/// Vertices passed to `add_triangle`/`add_quad` are perturbed by noise; the
/// `_unperturbed` variants keep them exactly on the regular grid. Color and UV
/// calls must follow their geometry call in the same vertex order, and are
/// ignored when the mesh does not track that buffer.
pub struct MeshBuilder<'a> {
    target: &'a mut HexMesh,
    pools: &'a mut MeshPools,
    noise: &'a dyn NoiseSource,
    settings: MeshSettings,
    vertices: Vec<Vec3>,
    colors: Vec<Color>,
    uvs: Vec<Vec2>,
    triangles: Vec<u32>,
    released: bool,
}

impl MeshBuilder<'_> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.triangles.len()
    }

    fn next_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn push_triangle_indices(&mut self, i: u32) {
        self.triangles.extend_from_slice(&[i, i + 1, i + 2]);
    }

    fn push_quad_indices(&mut self, i: u32) {
        self.triangles
            .extend_from_slice(&[i, i + 2, i + 1, i + 1, i + 2, i + 3]);
    }

    pub fn add_triangle(&mut self, v1: Vec3, v2: Vec3, v3: Vec3) {
        let i = self.next_index();
        let noise = self.noise;
        self.vertices.extend([v1, v2, v3].map(|v| metrics::perturb(noise, v)));
        self.push_triangle_indices(i);
    }

    pub fn add_triangle_unperturbed(&mut self, v1: Vec3, v2: Vec3, v3: Vec3) {
        let i = self.next_index();
        self.vertices.extend([v1, v2, v3]);
        self.push_triangle_indices(i);
    }

    /// Quad with `v1, v2` on one side and `v3, v4` on the opposite side.
    pub fn add_quad(&mut self, v1: Vec3, v2: Vec3, v3: Vec3, v4: Vec3) {
        let i = self.next_index();
        let noise = self.noise;
        self.vertices.extend([v1, v2, v3, v4].map(|v| metrics::perturb(noise, v)));
        self.push_quad_indices(i);
    }

    pub fn add_quad_unperturbed(&mut self, v1: Vec3, v2: Vec3, v3: Vec3, v4: Vec3) {
        let i = self.next_index();
        self.vertices.extend([v1, v2, v3, v4]);
        self.push_quad_indices(i);
    }

    fn push_colors<const N: usize>(&mut self, colors: [Color; N]) {
        if self.settings.use_colors {
            self.colors.extend(colors);
        }
    }

    fn push_uvs<const N: usize>(&mut self, uvs: [Vec2; N]) {
        if self.settings.use_uv_coordinates {
            self.uvs.extend(uvs);
        }
    }

    /// One color for the whole triangle.
    pub fn add_triangle_color(&mut self, color: Color) {
        self.push_colors([color; 3]);
    }

    pub fn add_triangle_colors(&mut self, c1: Color, c2: Color, c3: Color) {
        self.push_colors([c1, c2, c3]);
    }

    /// One color for the whole quad.
    pub fn add_quad_color(&mut self, color: Color) {
        self.push_colors([color; 4]);
    }

    /// `c1` for the first side (`v1, v2`), `c2` for the opposite side.
    pub fn add_quad_color2(&mut self, c1: Color, c2: Color) {
        self.push_colors([c1, c1, c2, c2]);
    }

    pub fn add_quad_colors(&mut self, c1: Color, c2: Color, c3: Color, c4: Color) {
        self.push_colors([c1, c2, c3, c4]);
    }

    pub fn add_triangle_uv(&mut self, uv1: Vec2, uv2: Vec2, uv3: Vec2) {
        self.push_uvs([uv1, uv2, uv3]);
    }

    pub fn add_quad_uv(&mut self, uv1: Vec2, uv2: Vec2, uv3: Vec2, uv4: Vec2) {
        self.push_uvs([uv1, uv2, uv3, uv4]);
    }

    /// UVs spanning a rectangle, in quad vertex order.
    pub fn add_quad_uv_rect(&mut self, u_min: f32, u_max: f32, v_min: f32, v_max: f32) {
        self.push_uvs([
            Vec2::new(u_min, v_min),
            Vec2::new(u_max, v_min),
            Vec2::new(u_min, v_max),
            Vec2::new(u_max, v_max),
        ]);
    }

    /// Copy the buffers into the target mesh, recompute normals, refresh the
    /// collider, and return the buffers to the pool.
    pub fn apply(mut self) {
        let mesh = &mut self.target.mesh;
        mesh.vertices.extend_from_slice(&self.vertices);
        if self.settings.use_colors {
            mesh.colors.extend_from_slice(&self.colors);
        }
        if self.settings.use_uv_coordinates {
            mesh.uvs.extend_from_slice(&self.uvs);
        }
        mesh.triangles.extend_from_slice(&self.triangles);
        mesh.recalculate_normals();

        if self.settings.use_collider {
            self.target.collider = Some(self.target.mesh.clone());
        }

        log::trace!(
            "Applied mesh '{}': {} vertices, {} triangles",
            self.target.name,
            self.target.mesh.vertices.len(),
            self.target.mesh.triangle_count()
        );
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.pools.vertices.add(std::mem::take(&mut self.vertices));
        if self.settings.use_colors {
            self.pools.colors.add(std::mem::take(&mut self.colors));
        }
        if self.settings.use_uv_coordinates {
            self.pools.uvs.add(std::mem::take(&mut self.uvs));
        }
        self.pools.triangles.add(std::mem::take(&mut self.triangles));
        self.released = true;
    }
}

impl Drop for MeshBuilder<'_> {
    fn drop(&mut self) {
        self.release();
    }
}
