//! Flat pattern engine: the assembly jig.
//!
//! The jig is a rectangular slab with a braille grid of cylindrical magnet
//! pockets carved into its top face, and two full-height slots near the long
//! edges that turn the outer strips into a pair of mounting arms.

use csgrs::float_types::Real;
use nalgebra::Vector3;
use serde::Serialize;

use crate::errors::{SpecError, positive};
use crate::spacing::evenly_space;
use crate::{CUT_OVERSHOOT, Solid};

/// Fixed clear border around the magnet grid, applied on both axes.
pub const GRID_MARGIN: Real = 10.0;

/// Wall resolution of the cylindrical pockets.
const POCKET_SEGMENTS: usize = 32;

/// Specification for the assembly jig. All lengths in millimetres.
///
/// The slab footprint is derived, not specified: the grid of
/// `cell_count_x × cell_count_y` braille cells plus [`GRID_MARGIN`] fixes the
/// inner body, and the arm geometry widens the long axis. See
/// [`JigSpec::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct JigSpec {
    /// Magnet pocket diameter.
    pub magnet_d: Real,
    /// Magnet pocket depth, carved down from the top face.
    pub magnet_h: Real,

    // Braille layout.
    pub dot_pitch_x: Real,
    pub dot_pitch_y: Real,
    pub cell_pitch_x: Real,
    pub cell_pitch_y: Real,
    pub cell_count_x: usize,
    pub cell_count_y: usize,

    /// Slab height.
    pub total_z: Real,

    // Mounting arms. Each long side keeps a strip `arm_width_on_long_side`
    // wide, separated from the body by a slot `arm_gap_width` wide; the slot
    // stops `arm_width_along_short_gap` short of each short edge.
    pub arm_width_on_long_side: Real,
    pub arm_gap_width: Real,
    pub arm_width_along_short_gap: Real,
}

impl Default for JigSpec {
    fn default() -> Self {
        Self {
            magnet_d: 2.0,
            magnet_h: 0.6,
            dot_pitch_x: 2.5,
            dot_pitch_y: 2.5,
            cell_pitch_x: 6.0,
            cell_pitch_y: 10.0,
            cell_count_x: 4,
            cell_count_y: 2,
            total_z: 3.0,
            arm_width_on_long_side: 3.0,
            arm_gap_width: 2.0,
            arm_width_along_short_gap: 3.0,
        }
    }
}

/// Quantities derived from a [`JigSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JigMetrics {
    /// Slab extent along the long (cell-row) axis.
    pub total_x: Real,
    /// Slab extent along the short axis.
    pub total_y: Real,
}

impl JigSpec {
    /// Check every invariant and return the derived slab footprint.
    ///
    /// Fails before any geometry is built when a dimension is non-positive,
    /// a pocket would pierce the slab, the grid runs off the body, or the
    /// arm slots would cut into the grid or consume the whole short side.
    pub fn validate(&self) -> Result<JigMetrics, SpecError> {
        positive("magnet_d", self.magnet_d)?;
        positive("magnet_h", self.magnet_h)?;
        positive("dot_pitch_x", self.dot_pitch_x)?;
        positive("dot_pitch_y", self.dot_pitch_y)?;
        positive("cell_pitch_x", self.cell_pitch_x)?;
        positive("cell_pitch_y", self.cell_pitch_y)?;
        positive("total_z", self.total_z)?;
        positive("arm_width_on_long_side", self.arm_width_on_long_side)?;
        positive("arm_gap_width", self.arm_gap_width)?;
        positive("arm_width_along_short_gap", self.arm_width_along_short_gap)?;
        if self.cell_count_x == 0 {
            return Err(SpecError::ZeroCount { name: "cell_count_x" });
        }
        if self.cell_count_y == 0 {
            return Err(SpecError::ZeroCount { name: "cell_count_y" });
        }

        let metrics = self.metrics();

        if self.magnet_h >= self.total_z {
            return Err(SpecError::PocketTooDeep {
                pocket_depth: self.magnet_h,
                available: self.total_z,
            });
        }

        let grid_half_y = (self.cell_count_y as Real - 1.0) / 2.0 * self.cell_pitch_y
            + self.dot_pitch_y
            + self.magnet_d / 2.0;
        if grid_half_y >= metrics.total_y / 2.0 {
            return Err(SpecError::GridExceedsBody {
                grid_extent: grid_half_y,
                body_extent: metrics.total_y / 2.0,
            });
        }

        let gap_extent = 2.0 * self.arm_width_along_short_gap;
        if gap_extent >= metrics.total_y {
            return Err(SpecError::ArmGapExceedsBody {
                gap_extent,
                total_y: metrics.total_y,
            });
        }

        let grid_half_x = (self.cell_count_x as Real - 1.0) / 2.0 * self.cell_pitch_x
            + self.dot_pitch_x / 2.0
            + self.magnet_d / 2.0;
        let slot_edge =
            metrics.total_x / 2.0 - self.arm_width_on_long_side - self.arm_gap_width;
        if slot_edge < grid_half_x {
            return Err(SpecError::SlotCutsPocketGrid {
                slot_edge,
                grid_extent: grid_half_x,
            });
        }

        Ok(metrics)
    }

    fn metrics(&self) -> JigMetrics {
        JigMetrics {
            total_x: self.cell_count_x as Real * self.cell_pitch_x
                + GRID_MARGIN
                + 2.0 * (self.arm_width_on_long_side + self.arm_gap_width),
            total_y: self.cell_count_y as Real * self.cell_pitch_y + GRID_MARGIN,
        }
    }
}

/// Center of every magnet pocket, in slab coordinates (origin at the slab
/// center, x along the long axis).
///
/// The cartesian product of cell centers and the 2×3 dot offsets within each
/// cell, both from [`evenly_space`].
pub fn pocket_centers(spec: &JigSpec) -> Vec<[Real; 2]> {
    let mut centers = Vec::with_capacity(spec.cell_count_x * spec.cell_count_y * 6);
    for &cell_x in &evenly_space(spec.cell_count_x, spec.cell_pitch_x, 0.0) {
        for &cell_y in &evenly_space(spec.cell_count_y, spec.cell_pitch_y, 0.0) {
            for &dot_x in &evenly_space(2, spec.dot_pitch_x, cell_x) {
                for &dot_y in &evenly_space(3, spec.dot_pitch_y, cell_y) {
                    centers.push([dot_x, dot_y]);
                }
            }
        }
    }
    centers
}

/// Build the assembly jig.
///
/// The slab is centered in XY with its bottom face on z = 0. Pockets are cut
/// down from the top face, then the two arm slots are cut through the full
/// height.
pub fn assembly_jig(spec: &JigSpec) -> Result<Solid, SpecError> {
    let metrics = spec.validate()?;

    let mut p = Solid::cube(metrics.total_x, metrics.total_y, spec.total_z, None)
        .translate(Vector3::new(-metrics.total_x / 2.0, -metrics.total_y / 2.0, 0.0));

    // Magnet pockets. The tool overshoots the top face so the cut never
    // leaves a coincident boundary face behind.
    let pocket = Solid::cylinder(
        spec.magnet_d / 2.0,
        spec.magnet_h + CUT_OVERSHOOT,
        POCKET_SEGMENTS,
        None,
    );
    for [x, y] in pocket_centers(spec) {
        p = p.difference(&pocket.translate(Vector3::new(x, y, spec.total_z - spec.magnet_h)));
    }

    // Arm slots, one inboard of each long side, overshooting both the top
    // and bottom faces.
    let slot_len = metrics.total_y - 2.0 * spec.arm_width_along_short_gap;
    let slot = Solid::cube(
        spec.arm_gap_width,
        slot_len,
        spec.total_z + 2.0 * CUT_OVERSHOOT,
        None,
    )
    .translate(Vector3::new(-spec.arm_gap_width / 2.0, -slot_len / 2.0, -CUT_OVERSHOOT));
    let slot_center_x =
        metrics.total_x / 2.0 - spec.arm_width_on_long_side - spec.arm_gap_width / 2.0;
    for x in [-slot_center_x, slot_center_x] {
        p = p.difference(&slot.translate(Vector3::new(x, 0.0, 0.0)));
    }

    Ok(p)
}
