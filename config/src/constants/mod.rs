//! Centralized configuration values shared across the building frame workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Minimum triangle area (as cross-product length) below which a triangle is
/// treated as degenerate during mesh validation.
///
/// # Examples
/// ```
/// use config::constants::AREA_EPSILON;
/// assert!(AREA_EPSILON > 0.0 && AREA_EPSILON < 1.0e-6);
/// ```
pub const AREA_EPSILON: f64 = 1e-8;

// =============================================================================
// FRAME DIMENSIONS
// =============================================================================

/// Width of a floor slab along the X axis.
pub const FLOOR_WIDTH: f64 = 4.0;

/// Depth of a floor slab along the Y axis.
pub const FLOOR_DEPTH: f64 = 4.0;

/// Side length of the square column cross-section.
///
/// # Examples
/// ```
/// use config::constants::{COLUMN_DIM, FLOOR_WIDTH};
/// // Columns sit inside the slab footprint
/// let corner_offset = FLOOR_WIDTH / 2.0 - COLUMN_DIM / 2.0;
/// assert!(corner_offset > 0.0);
/// ```
pub const COLUMN_DIM: f64 = 0.3;

/// Vertical size of a beam.
pub const BEAM_HEIGHT: f64 = 0.3;

/// Horizontal cross-section size of a beam.
pub const BEAM_WIDTH: f64 = 0.3;

/// Vertical distance from one slab bottom to the next.
///
/// # Examples
/// ```
/// use config::constants::STORY_HEIGHT;
/// let third_floor_bottom = 2.0 * STORY_HEIGHT;
/// assert_eq!(third_floor_bottom, 6.0);
/// ```
pub const STORY_HEIGHT: f64 = 3.0;

// =============================================================================
// REQUEST DEFAULTS AND CLAMPING
// =============================================================================

/// Slab thickness used when the caller does not supply one.
pub const DEFAULT_SLAB_THICKNESS: f64 = 0.2;

/// Smallest slab thickness the generator accepts. Thinner requests are
/// raised to this value rather than rejected.
///
/// # Examples
/// ```
/// use config::constants::MIN_SLAB_THICKNESS;
/// let requested: f64 = -1.0;
/// assert_eq!(requested.max(MIN_SLAB_THICKNESS), 0.05);
/// ```
pub const MIN_SLAB_THICKNESS: f64 = 0.05;

/// Smallest floor count the generator accepts.
///
/// # Examples
/// ```
/// use config::constants::MIN_FLOORS;
/// let requested: i64 = 0;
/// assert_eq!(requested.max(MIN_FLOORS as i64), 1);
/// ```
pub const MIN_FLOORS: u32 = 1;

/// Floor count used when the caller does not supply one.
pub const DEFAULT_FLOORS: u32 = 1;

/// Material key used when the caller does not supply one.
pub const DEFAULT_MATERIAL: &str = "wood";

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Directory that file-mode output is written into.
pub const DEFAULT_OUTPUT_DIR: &str = "static";

/// Filename prefix of generated assets.
pub const OUTPUT_PREFIX: &str = "building_";

/// Filename extension of generated assets.
pub const OUTPUT_EXTENSION: &str = "glb";

/// Maximum number of generated buffers an asset store keeps before evicting
/// the least recently used one.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_ASSET_CAPACITY;
/// assert!(DEFAULT_ASSET_CAPACITY >= 1);
/// ```
pub const DEFAULT_ASSET_CAPACITY: usize = 16;

/// Number of generated files kept on disk when retention is applied.
pub const DEFAULT_FILES_TO_KEEP: usize = 2;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Keeps index buffers within `u32` range and bounds memory use.
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// FRAME DIMENSIONS SNAPSHOT
// =============================================================================

/// Immutable snapshot of the frame dimensions used by the layout.
///
/// # Examples
/// ```
/// use config::constants::FrameDimensions;
/// let dims = FrameDimensions::default();
/// assert_eq!(dims.story_height, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDimensions {
    /// Slab extent along X.
    pub floor_width: f64,
    /// Slab extent along Y.
    pub floor_depth: f64,
    /// Square column cross-section.
    pub column_dim: f64,
    /// Beam extent along Z.
    pub beam_height: f64,
    /// Beam cross-section extent perpendicular to its span.
    pub beam_width: f64,
    /// Slab-bottom to slab-bottom distance.
    pub story_height: f64,
}

impl FrameDimensions {
    /// Builds a dimension set, rejecting values that cannot form a frame.
    ///
    /// # Examples
    /// ```
    /// use config::constants::FrameDimensions;
    /// let dims = FrameDimensions::new(6.0, 5.0, 0.4, 0.5, 0.3, 3.5).expect("valid");
    /// assert_eq!(dims.floor_depth, 5.0);
    /// assert!(FrameDimensions::new(0.0, 5.0, 0.4, 0.5, 0.3, 3.5).is_err());
    /// ```
    pub fn new(
        floor_width: f64,
        floor_depth: f64,
        column_dim: f64,
        beam_height: f64,
        beam_width: f64,
        story_height: f64,
    ) -> Result<Self, ConfigError> {
        let named = [
            ("floor_width", floor_width),
            ("floor_depth", floor_depth),
            ("column_dim", column_dim),
            ("beam_height", beam_height),
            ("beam_width", beam_width),
            ("story_height", story_height),
        ];
        for (name, value) in named {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }
        if column_dim >= floor_width.min(floor_depth) {
            return Err(ConfigError::ColumnTooWide {
                column_dim,
                footprint: floor_width.min(floor_depth),
            });
        }
        if beam_height + MIN_SLAB_THICKNESS >= story_height {
            return Err(ConfigError::StoryTooLow {
                story_height,
                beam_height,
            });
        }
        Ok(Self {
            floor_width,
            floor_depth,
            column_dim,
            beam_height,
            beam_width,
            story_height,
        })
    }

    /// Offset of column centers from the slab center along X.
    #[inline]
    pub fn column_offset_x(&self) -> f64 {
        self.floor_width / 2.0 - self.column_dim / 2.0
    }

    /// Offset of column centers from the slab center along Y.
    #[inline]
    pub fn column_offset_y(&self) -> f64 {
        self.floor_depth / 2.0 - self.column_dim / 2.0
    }
}

impl Default for FrameDimensions {
    fn default() -> Self {
        Self {
            floor_width: FLOOR_WIDTH,
            floor_depth: FLOOR_DEPTH,
            column_dim: COLUMN_DIM,
            beam_height: BEAM_HEIGHT,
            beam_width: BEAM_WIDTH,
            story_height: STORY_HEIGHT,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a dimension is zero, negative or not finite.
    NonPositiveDimension { name: &'static str, value: f64 },
    /// Raised when columns would not fit inside the slab footprint.
    ColumnTooWide { column_dim: f64, footprint: f64 },
    /// Raised when the story cannot hold a minimum slab and a beam.
    StoryTooLow { story_height: f64, beam_height: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveDimension { name, value } => {
                write!(f, "{name} must be positive and finite: {value}")
            }
            ConfigError::ColumnTooWide {
                column_dim,
                footprint,
            } => {
                write!(
                    f,
                    "column_dim {column_dim} does not fit a {footprint} wide footprint"
                )
            }
            ConfigError::StoryTooLow {
                story_height,
                beam_height,
            } => {
                write!(
                    f,
                    "story_height {story_height} cannot hold a minimum slab and a {beam_height} beam"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
