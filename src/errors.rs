//! Validation and export errors.

use csgrs::float_types::Real;

/// Parameter-set rejections, raised before any geometry is built.
///
/// A spec that validates is guaranteed to produce a well-formed cut list:
/// every pocket stays inside its host body and the slot/bore cutouts leave
/// material behind.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpecError {
    /// A dimension that must be positive is zero or negative.
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: Real },

    /// A feature count that must be at least one is zero.
    #[error("{name} must be at least 1")]
    ZeroCount { name: &'static str },

    /// Magnet pockets would pierce the host body.
    #[error("magnet pockets are {pocket_depth} deep but only {available} of material is available")]
    PocketTooDeep { pocket_depth: Real, available: Real },

    /// The magnet grid runs past the edge of the host body.
    #[error("magnet grid extends to {grid_extent} but the body only reaches {body_extent}")]
    GridExceedsBody { grid_extent: Real, body_extent: Real },

    /// The arm slots would consume the whole short side of the jig.
    #[error("arm gap geometry ({gap_extent}) does not fit the {total_y} slab")]
    ArmGapExceedsBody { gap_extent: Real, total_y: Real },

    /// An arm slot would cut into the magnet grid.
    #[error("arm slot inner edge at {slot_edge} overlaps the magnet grid extending to {grid_extent}")]
    SlotCutsPocketGrid { slot_edge: Real, grid_extent: Real },

    /// The center bore is at least as large as the pulley body.
    #[error("center hole ({center_hole_d}) must be smaller than the pulley body ({pulley_body_od})")]
    BoreExceedsBody { center_hole_d: Real, pulley_body_od: Real },

    /// A pocket floor would break through into the center bore.
    #[error("pocket floors at radius {pocket_floor} reach into the bore of radius {bore_radius}")]
    PocketBreaksIntoBore { pocket_floor: Real, bore_radius: Real },

    /// Dot columns of neighbouring cells would overlap on the circumference.
    #[error("dot pitch ({dot_pitch_x}) must be smaller than the cell pitch ({cell_pitch_x})")]
    DotColumnsExceedCell { dot_pitch_x: Real, cell_pitch_x: Real },
}

/// `Ok` when `value` is strictly positive, [`SpecError::NonPositive`]
/// otherwise.
pub(crate) fn positive(name: &'static str, value: Real) -> Result<(), SpecError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SpecError::NonPositive { name, value })
    }
}

/// Failures while writing a finished part to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dxf serialization failed: {0}")]
    Dxf(String),
}
