//! # Export
//!
//! Serialization of meshes into portable asset formats.

pub mod glb;

pub use glb::{write_glb, write_glb_with, GlbOptions};
