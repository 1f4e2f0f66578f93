//! Hexmap - A chunked hexagonal terrain grid

pub mod core;
pub mod hex;
pub mod mesh;
