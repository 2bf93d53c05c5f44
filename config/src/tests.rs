//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_area_epsilon_is_small_and_positive() {
    assert!(AREA_EPSILON > 0.0, "AREA_EPSILON must be positive");
    // Smallest real face: a 0.3 wide column side over the thinnest column
    assert!(AREA_EPSILON < COLUMN_DIM * 0.01);
}

// =============================================================================
// DIMENSION TESTS
// =============================================================================

#[test]
fn test_dimensions_are_positive() {
    for value in [
        FLOOR_WIDTH,
        FLOOR_DEPTH,
        COLUMN_DIM,
        BEAM_HEIGHT,
        BEAM_WIDTH,
        STORY_HEIGHT,
    ] {
        assert!(value > 0.0);
    }
}

#[test]
fn test_columns_fit_inside_slab() {
    assert!(COLUMN_DIM < FLOOR_WIDTH);
    assert!(COLUMN_DIM < FLOOR_DEPTH);
}

#[test]
fn test_default_slab_leaves_room_for_columns() {
    // Column height = STORY_HEIGHT - slab must stay positive
    assert!(STORY_HEIGHT - DEFAULT_SLAB_THICKNESS > BEAM_HEIGHT);
}

// =============================================================================
// CLAMPING TESTS
// =============================================================================

#[test]
fn test_min_slab_thickness_is_positive() {
    assert!(MIN_SLAB_THICKNESS > 0.0);
    assert!(MIN_SLAB_THICKNESS <= DEFAULT_SLAB_THICKNESS);
}

#[test]
fn test_min_floors_is_one() {
    assert_eq!(MIN_FLOORS, 1);
    assert!(DEFAULT_FLOORS >= MIN_FLOORS);
}

#[test]
fn test_default_material_is_wood() {
    assert_eq!(DEFAULT_MATERIAL, "wood");
}

// =============================================================================
// OUTPUT AND LIMIT TESTS
// =============================================================================

#[test]
fn test_output_names() {
    assert_eq!(OUTPUT_PREFIX, "building_");
    assert_eq!(OUTPUT_EXTENSION, "glb");
    assert!(!DEFAULT_OUTPUT_DIR.is_empty());
}

#[test]
fn test_retention_and_store_bounds() {
    assert!(DEFAULT_ASSET_CAPACITY >= 1);
    assert!(DEFAULT_FILES_TO_KEEP >= 1);
}

#[test]
fn test_limits_fit_u32_indices() {
    assert!(MAX_VERTICES <= u32::MAX as usize);
    assert!(MAX_TRIANGLES >= 1_000_000);
}
