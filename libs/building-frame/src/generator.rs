//! # Frame Generator
//!
//! Turns a [`FrameRequest`] into a merged, material-tagged mesh and exports
//! it as GLB bytes or a GLB file.
//!
//! ## Pipeline
//!
//! ```text
//! FrameRequest ─clamp→ FrameParams ─layout→ [Primitive] ─mesh+concat→ Mesh
//!                                                                       │
//!                           FrameMaterial (lookup) ──────────────→ BuildingMesh
//!                                                                       │
//!                                              write_glb → Bytes | File (static/…)
//! ```
//!
//! The generator holds only immutable configuration, so one instance can
//! serve concurrent calls.

use std::error::Error as _;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use config::constants::{
    FrameDimensions, DEFAULT_OUTPUT_DIR, MAX_TRIANGLES, MAX_VERTICES, OUTPUT_EXTENSION,
    OUTPUT_PREFIX,
};
use frame_mesh::export::{write_glb_with, GlbOptions};
use frame_mesh::{Mesh, MeshError};

use crate::error::GenerationError;
use crate::layout::{frame_mesh_size, layout_frame, Primitive, UnitCounts};
use crate::material::{FrameMaterial, MaterialPolicy};
use crate::request::{FrameParams, FrameRequest};

/// Attempts at finding a free filename before giving up.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Where generated GLB data goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Return the serialized buffer.
    #[default]
    Bytes,
    /// Write a file under the output directory and return its path.
    File,
}

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedAsset {
    Bytes(Vec<u8>),
    File(PathBuf),
}

impl GeneratedAsset {
    /// The buffer, in bytes mode.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            Self::File(_) => None,
        }
    }

    /// The written path, in file mode.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Bytes(_) => None,
            Self::File(path) => Some(path),
        }
    }
}

/// Settings shared by every call of a [`FrameGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Fixed frame dimensions.
    pub dimensions: FrameDimensions,
    /// Directory file-mode output is written into.
    pub output_dir: PathBuf,
    /// Treatment of unrecognized material keys.
    pub material_policy: MaterialPolicy,
}

impl GeneratorConfig {
    /// Replaces the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Replaces the material policy.
    pub fn with_material_policy(mut self, material_policy: MaterialPolicy) -> Self {
        self.material_policy = material_policy;
        self
    }

    /// Replaces the frame dimensions.
    pub fn with_dimensions(mut self, dimensions: FrameDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            dimensions: FrameDimensions::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            material_policy: MaterialPolicy::default(),
        }
    }
}

/// A merged frame mesh with its single material.
#[derive(Debug, Clone)]
pub struct BuildingMesh {
    params: FrameParams,
    material: FrameMaterial,
    primitives: Vec<Primitive>,
    mesh: Mesh,
}

impl BuildingMesh {
    /// The clamped parameters the frame was built from.
    pub fn params(&self) -> &FrameParams {
        &self.params
    }

    /// The material attached to the whole mesh.
    pub fn material(&self) -> FrameMaterial {
        self.material
    }

    /// Boxes as laid out, before merging.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Primitive counts per structural role.
    pub fn unit_counts(&self) -> UnitCounts {
        UnitCounts::of(&self.primitives)
    }

    /// The merged mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Serializes mesh and material to GLB.
    pub fn to_glb(&self) -> Result<Vec<u8>, MeshError> {
        let options = GlbOptions {
            mesh_name: "building_frame".to_string(),
            generator: concat!("building-frame ", env!("CARGO_PKG_VERSION")).to_string(),
        };
        write_glb_with(&self.mesh, &self.material.to_pbr(), &options)
    }
}

/// Building frame generator.
///
/// # Example
///
/// ```rust
/// use building_frame::{FrameGenerator, FrameRequest, OutputMode};
///
/// let generator = FrameGenerator::default();
/// let building = generator.build(&FrameRequest::new("steel", 3, 0.2)).unwrap();
/// assert_eq!(building.primitives().len(), 27);
///
/// let asset = generator.generate(&FrameRequest::default(), OutputMode::Bytes).unwrap();
/// assert_eq!(&asset.as_bytes().unwrap()[0..4], b"glTF");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameGenerator {
    config: GeneratorConfig,
}

impl FrameGenerator {
    /// Creates a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Resolves a material key under the configured policy.
    pub fn resolve_material(&self, key: &str) -> Result<FrameMaterial, GenerationError> {
        match (FrameMaterial::lookup(key), self.config.material_policy) {
            (Some(material), _) => Ok(material),
            (None, MaterialPolicy::Permissive) => {
                log::warn!("unknown material '{key}', using default appearance");
                Ok(FrameMaterial::Default)
            }
            (None, MaterialPolicy::Strict) => Err(GenerationError::UnknownMaterial(key.to_string())),
        }
    }

    /// Lays out, meshes and merges a frame without exporting it.
    ///
    /// # Errors
    ///
    /// Fails when the frame would exceed the mesh limits, a box has
    /// degenerate extents (slab thickness reaching the story height), the
    /// merged mesh does not validate, or strict mode rejects the material.
    pub fn build(&self, request: &FrameRequest) -> Result<BuildingMesh, GenerationError> {
        let params = FrameParams::from_request(request);
        let material = self.resolve_material(&params.material)?;

        let (vertices, triangles) = frame_mesh_size(params.num_floors);
        if vertices > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertices,
                max: MAX_VERTICES,
            }
            .into());
        }
        if triangles > MAX_TRIANGLES {
            return Err(MeshError::TooManyTriangles {
                count: triangles,
                max: MAX_TRIANGLES,
            }
            .into());
        }

        let primitives = layout_frame(&params, &self.config.dimensions);
        let parts = primitives
            .iter()
            .map(Primitive::to_mesh)
            .collect::<Result<Vec<_>, _>>()?;

        let mesh = Mesh::concatenate(&parts);
        mesh.check_limits()?;
        mesh.validate()?;

        Ok(BuildingMesh {
            params,
            material,
            primitives,
            mesh,
        })
    }

    /// Generates a frame, reporting the cause on failure.
    pub fn try_generate(
        &self,
        request: &FrameRequest,
        mode: OutputMode,
    ) -> Result<GeneratedAsset, GenerationError> {
        let building = self.build(request)?;
        let glb = building.to_glb()?;

        let asset = match mode {
            OutputMode::Bytes => GeneratedAsset::Bytes(glb),
            OutputMode::File => GeneratedAsset::File(self.write_file(&building, &glb)?),
        };

        let counts = building.unit_counts();
        log::info!(
            "generated {} frame: {} floors ({} slabs, {} columns, {} beams), {} vertices, {} triangles ({mode:?})",
            building.material(),
            building.params().num_floors,
            counts.slabs,
            counts.columns,
            counts.beams,
            building.mesh().vertex_count(),
            building.mesh().triangle_count(),
        );
        Ok(asset)
    }

    /// Generates a frame. Returns `None` on any failure after logging it.
    pub fn generate(&self, request: &FrameRequest, mode: OutputMode) -> Option<GeneratedAsset> {
        match self.try_generate(request, mode) {
            Ok(asset) => Some(asset),
            Err(err) => {
                log::error!("Error generating GLB model for {request:?}: {err}");
                let mut cause = err.source();
                while let Some(inner) = cause {
                    log::error!("  caused by: {inner}");
                    cause = inner.source();
                }
                None
            }
        }
    }

    /// Writes GLB bytes under the output directory without replacing
    /// existing files.
    fn write_file(&self, building: &BuildingMesh, glb: &[u8]) -> Result<PathBuf, GenerationError> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|e| GenerationError::io(dir, e))?;

        let params = building.params();
        let stem = output_file_stem(&params.material, params.num_floors, chrono::Utc::now().timestamp());

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = match attempt {
                0 => format!("{stem}.{OUTPUT_EXTENSION}"),
                n => format!("{stem}-{n}.{OUTPUT_EXTENSION}"),
            };
            let path = dir.join(name);
            match create_and_fill(&path, |file| file.write_all(glb)) {
                Ok(()) => {
                    log::debug!("wrote {} bytes to {}", glb.len(), path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(GenerationError::io(path, e)),
            }
        }

        Err(GenerationError::io(
            dir.join(format!("{stem}.{OUTPUT_EXTENSION}")),
            std::io::Error::new(ErrorKind::AlreadyExists, "no free output filename"),
        ))
    }
}

/// Creates `path` (which must not exist yet) and fills it.
///
/// A file that fails to fill or sync is removed again, so no truncated
/// output is left behind.
fn create_and_fill(
    path: &Path,
    fill: impl FnOnce(&mut fs::File) -> std::io::Result<()>,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    let result = fill(&mut file).and_then(|()| file.sync_all());
    if result.is_err() {
        drop(file);
        if let Err(e) = fs::remove_file(path) {
            log::warn!("could not remove partial output {}: {e}", path.display());
        }
    }
    result
}

/// Filename (without extension) for a generated frame:
/// `building_{material}_{num_floors}_floors_{timestamp}`.
///
/// Characters outside `[A-Za-z0-9_-]` in the material key are replaced by
/// `-` so the key can never escape the output directory.
///
/// # Example
///
/// ```rust
/// use building_frame::generator::output_file_stem;
///
/// assert_eq!(output_file_stem("wood", 3, 1700000000), "building_wood_3_floors_1700000000");
/// assert_eq!(output_file_stem("unknown_material", 2, 5), "building_unknown_material_2_floors_5");
/// assert_eq!(output_file_stem("../x", 1, 5), "building_---x_1_floors_5");
/// ```
pub fn output_file_stem(material: &str, num_floors: u32, timestamp: i64) -> String {
    let key: String = material
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '-',
        })
        .collect();
    format!("{OUTPUT_PREFIX}{key}_{num_floors}_floors_{timestamp}")
}
