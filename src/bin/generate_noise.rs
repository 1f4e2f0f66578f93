//! Noise texture generator: writes the RGBA perturbation texture to disk.
//!
//! Usage: cargo run --release --bin generate_noise -- [OPTIONS]
//!
//! Options:
//!   --size <PIXELS>     Texture width and height (default: 512)
//!   --seed <SEED>       Random seed (default: 12345)
//!   --frequency <F>     Base noise frequency across the texture (default: 8.0)
//!   --octaves <N>       FBM octaves (default: 4)
//!   --out <PATH>        Output image (default: "assets/noise.png")

use std::path::PathBuf;
use std::time::Instant;

use hexmap::hex::{NoiseParams, NoiseTexture};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let args: Vec<String> = std::env::args().collect();
    let defaults = NoiseParams::default();
    let params = NoiseParams {
        size: parse_u32_arg(&args, "--size").unwrap_or(defaults.size),
        seed: parse_u32_arg(&args, "--seed").unwrap_or(defaults.seed),
        frequency: parse_f64_arg(&args, "--frequency").unwrap_or(defaults.frequency),
        octaves: parse_usize_arg(&args, "--octaves").unwrap_or(defaults.octaves),
    };
    let out = PathBuf::from(
        parse_str_arg(&args, "--out").unwrap_or_else(|| "assets/noise.png".to_string()),
    );

    println!("=== Hexmap Noise Generator ===");
    println!("Size:      {}x{}", params.size, params.size);
    println!("Seed:      {}", params.seed);
    println!("Frequency: {}, Octaves: {}", params.frequency, params.octaves);
    println!("Output:    {}", out.display());
    println!();

    let start = Instant::now();
    let texture = NoiseTexture::generate(&params);
    println!("Generated in {:.1?}", start.elapsed());

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("Failed to create {}: {}", parent.display(), e);
            std::process::exit(1);
        }
    }
    if let Err(e) = texture.save(&out) {
        log::error!("Failed to write {}: {}", out.display(), e);
        std::process::exit(1);
    }
    println!("Wrote {}", out.display());
}

fn parse_f64_arg(args: &[String], flag: &str) -> Option<f64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_u32_arg(args: &[String], flag: &str) -> Option<u32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_usize_arg(args: &[String], flag: &str) -> Option<usize> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
