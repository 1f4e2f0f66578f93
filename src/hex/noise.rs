//! Noise sources sampled by the perturbation math.
//!
//! The grid only needs a 2D sampler returning four channels in `[0, 1]` at a
//! continuous `(u, v)`. [`NoiseTexture`] provides one backed by an RGBA image
//! (generated procedurally or loaded from disk); [`UniformNoise`] returns a
//! constant sample and is handy wherever perturbation must be switched off.

use std::path::Path;

use image::{Rgba, RgbaImage};
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{Result, Vec4};

/// A 2D sampler returning a 4-component sample in `[0, 1]`.
pub trait NoiseSource {
    /// Bilinearly filtered sample at normalized texture coordinates.
    /// Coordinates outside `[0, 1)` wrap.
    fn sample_bilinear(&self, u: f32, v: f32) -> Vec4;
}

/// Constant sampler. `UniformNoise::neutral()` yields zero perturbation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformNoise(pub Vec4);

impl UniformNoise {
    /// Sample of 0.5 on every channel: `(0.5 * 2 - 1) == 0`, so nothing moves.
    pub fn neutral() -> Self {
        Self(Vec4::splat(0.5))
    }
}

impl NoiseSource for UniformNoise {
    fn sample_bilinear(&self, _u: f32, _v: f32) -> Vec4 {
        self.0
    }
}

/// Parameters for procedural noise texture generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    pub seed: u32,
    /// Texture width and height in pixels
    pub size: u32,
    /// Noise frequency across the whole texture
    pub frequency: f64,
    /// FBM octaves
    pub octaves: usize,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: 12345,
            size: 512,
            frequency: 8.0,
            octaves: 4,
        }
    }
}

/// RGBA noise image sampled with repeat wrapping.
#[derive(Clone, Debug)]
pub struct NoiseTexture {
    image: RgbaImage,
}

impl NoiseTexture {
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Generate a texture whose four channels come from independently seeded
    /// FBM Perlin fields.
    pub fn generate(params: &NoiseParams) -> Self {
        let size = params.size.max(1);
        let channels: Vec<Fbm<Perlin>> = (0..4)
            .map(|c| {
                Fbm::<Perlin>::new(params.seed.wrapping_add(c))
                    .set_octaves(params.octaves.max(1))
                    .set_persistence(0.5)
                    .set_lacunarity(2.0)
            })
            .collect();

        let row_len = size as usize * 4;
        let mut pixels = vec![0u8; row_len * size as usize];
        pixels
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, out)| {
                let ny = row as f64 / size as f64 * params.frequency;
                for col in 0..size as usize {
                    let nx = col as f64 / size as f64 * params.frequency;
                    for (c, fbm) in channels.iter().enumerate() {
                        // Fbm output is roughly [-1, 1]
                        let value = (fbm.get([nx, ny]) + 1.0) * 0.5;
                        out[col * 4 + c] = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
                    }
                }
            });

        log::info!(
            "Generated {}x{} noise texture (seed {}, {} octaves)",
            size,
            size,
            params.seed,
            params.octaves
        );

        // Buffer length is exactly size * size * 4
        let image = RgbaImage::from_raw(size, size, pixels)
            .unwrap_or_else(|| RgbaImage::new(size, size));
        Self { image }
    }

    /// Load a noise texture from any image format the `image` crate reads.
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)?.to_rgba8();
        log::debug!(
            "Loaded noise texture {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self { image })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    fn texel(&self, x: i64, y: i64) -> Vec4 {
        let w = self.image.width() as i64;
        let h = self.image.height() as i64;
        let Rgba([r, g, b, a]) = *self
            .image
            .get_pixel(x.rem_euclid(w) as u32, y.rem_euclid(h) as u32);
        Vec4::new(r as f32, g as f32, b as f32, a as f32) / 255.0
    }
}

impl NoiseSource for NoiseTexture {
    fn sample_bilinear(&self, u: f32, v: f32) -> Vec4 {
        if self.image.width() == 0 || self.image.height() == 0 {
            return Vec4::splat(0.5);
        }

        // Texel centers sit at (i + 0.5) / size
        let x = u * self.image.width() as f32 - 0.5;
        let y = v * self.image.height() as f32 - 0.5;
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let (ix, iy) = (x0 as i64, y0 as i64);

        let s00 = self.texel(ix, iy);
        let s10 = self.texel(ix + 1, iy);
        let s01 = self.texel(ix, iy + 1);
        let s11 = self.texel(ix + 1, iy + 1);

        let s0 = s00.lerp(s10, fx);
        let s1 = s01.lerp(s11, fx);
        s0.lerp(s1, fy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> NoiseTexture {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        image.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
        image.put_pixel(0, 1, Rgba([255, 255, 255, 255]));
        image.put_pixel(1, 1, Rgba([0, 0, 0, 0]));
        NoiseTexture::from_image(image)
    }

    #[test]
    fn test_uniform_noise() {
        let noise = UniformNoise::neutral();
        assert_eq!(noise.sample_bilinear(12.0, -3.0), Vec4::splat(0.5));
    }

    #[test]
    fn test_sample_at_texel_center() {
        let tex = checker();
        // Center of texel (1, 0)
        let s = tex.sample_bilinear(0.75, 0.25);
        assert!((s.x - 1.0).abs() < 1e-5);
        let s = tex.sample_bilinear(0.25, 0.25);
        assert!(s.x.abs() < 1e-5);
    }

    #[test]
    fn test_sample_between_texels_blends() {
        let tex = checker();
        // Exactly between all four texels
        let s = tex.sample_bilinear(0.5, 0.5);
        assert!((s.x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_sample_wraps() {
        let tex = checker();
        let a = tex.sample_bilinear(0.75, 0.25);
        let b = tex.sample_bilinear(1.75, -0.75);
        assert!((a - b).abs().max_element() < 1e-4);
    }

    #[test]
    fn test_generate_in_range_and_deterministic() {
        let params = NoiseParams { size: 16, ..Default::default() };
        let a = NoiseTexture::generate(&params);
        let b = NoiseTexture::generate(&params);
        assert_eq!(a.width(), 16);
        assert_eq!(a.height(), 16);
        for i in 0..10 {
            let u = i as f32 * 0.173;
            let s = a.sample_bilinear(u, u * 0.5);
            assert!(s.min_element() >= 0.0 && s.max_element() <= 1.0);
            assert_eq!(s, b.sample_bilinear(u, u * 0.5));
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.png");
        let tex = NoiseTexture::generate(&NoiseParams { size: 8, ..Default::default() });
        tex.save(&path).unwrap();

        let loaded = NoiseTexture::load(&path).unwrap();
        assert_eq!(loaded.width(), 8);
        assert_eq!(tex.sample_bilinear(0.3, 0.6), loaded.sample_bilinear(0.3, 0.6));
    }
}
