//! Hexmap - headless grid demo
//!
//! Usage: cargo run --release -- [--config <PATH>] [--brush <N>]
//!
//! Builds a grid, raises a hill with the brush editor, drags a river down its
//! side, then rebuilds a solid-hexagon preview mesh for every dirty chunk.

use std::path::PathBuf;
use std::time::Instant;

use hexmap::core::{logging, Color, Result};
use hexmap::hex::{
    metrics, ChunkId, EditSettings, GridConfig, HexDirection, HexGrid, HexMapEditor,
    OptionalToggle,
};
use hexmap::mesh::{HexMesh, MeshPools, MeshSettings};

fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let config = match parse_str_arg(&args, "--config") {
        Some(path) => GridConfig::load_sync(&PathBuf::from(path))?,
        None => GridConfig::default(),
    };
    let brush = parse_u32_arg(&args, "--brush").unwrap_or(1);

    println!("=== Hexmap ===");
    println!(
        "Grid:  {}x{} cells ({}x{} chunks)",
        config.cell_count_x(),
        config.cell_count_z(),
        config.chunk_count_x,
        config.chunk_count_z
    );
    println!();

    let start = Instant::now();
    let mut grid = HexGrid::with_generated_noise(config)?;
    println!("Built grid in {:.1?}", start.elapsed());

    let mut pools = MeshPools::new();
    let mut meshes: Vec<HexMesh> = (0..grid.chunks().len())
        .map(|i| {
            HexMesh::new(
                format!("Terrain {i}"),
                MeshSettings {
                    use_collider: true,
                    use_colors: true,
                    use_uv_coordinates: false,
                },
            )
        })
        .collect();

    let rebuilt = rebuild_dirty(&mut grid, &mut meshes, &mut pools);
    println!("Initial build: {} chunks", rebuilt);

    // Hill in the middle of the map
    let center_col = grid.cell_count_x() as i32 / 2;
    let center_row = grid.cell_count_z() as i32 / 2;
    let mut editor = HexMapEditor::new(EditSettings {
        active_color: Some(Color::GREEN),
        active_elevation: 2,
        brush_size: brush,
        ..Default::default()
    });
    if let Some(center) = grid.cell_at_offset(center_col, center_row) {
        let hit = grid.cell(center).map(|c| c.position());
        editor.handle_input(&mut grid, hit);
        editor.release();
    }
    let rebuilt = rebuild_dirty(&mut grid, &mut meshes, &mut pools);
    println!("After hill: {} chunks rebuilt", rebuilt);

    // River dragged eastward from the hilltop
    *editor.settings_mut() = EditSettings {
        apply_elevation: false,
        river_mode: OptionalToggle::Yes,
        ..Default::default()
    };
    let mut cell = grid.cell_at_offset(center_col, center_row);
    for _ in 0..4 {
        let Some(id) = cell else { break };
        let hit = grid.cell(id).map(|c| c.position());
        editor.handle_input(&mut grid, hit);
        cell = grid.neighbor(id, HexDirection::E);
    }
    editor.release();
    let rebuilt = rebuild_dirty(&mut grid, &mut meshes, &mut pools);
    println!("After river: {} chunks rebuilt", rebuilt);

    let rivers = grid.cells().iter().filter(|(_, c)| c.has_river()).count();
    let triangles: usize = meshes.iter().map(|m| m.mesh().triangle_count()).sum();
    let stats = pools.vertices.stats();
    println!();
    println!("River cells: {}", rivers);
    println!("Triangles:   {}", triangles);
    println!(
        "Vertex pool: {} hits, {} misses, {} free",
        stats.hits, stats.misses, stats.available
    );
    Ok(())
}

/// Rebuild the preview mesh of every dirty chunk. Returns how many were rebuilt.
fn rebuild_dirty(grid: &mut HexGrid, meshes: &mut [HexMesh], pools: &mut MeshPools) -> usize {
    let dirty = grid.take_dirty_chunks();
    for &ChunkId(index) in &dirty {
        let (Some(chunk), Some(mesh)) = (grid.chunk(ChunkId(index)), meshes.get_mut(index)) else {
            continue;
        };
        let mut builder = mesh.clear(pools, grid.noise());
        for id in chunk.cells() {
            let Some(cell) = grid.cell(id) else { continue };
            let center = cell.position();
            for d in HexDirection::ALL {
                builder.add_triangle(
                    center,
                    center + metrics::first_solid_corner(d),
                    center + metrics::second_solid_corner(d),
                );
                builder.add_triangle_color(cell.color());
            }
        }
        builder.apply();
        log::debug!("Rebuilt {}", mesh.name());
    }
    dirty.len()
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
