//! Curved pattern engine: the magnetic drive pulley.
//!
//! The pulley's axle runs along Z. The braille layout is generated flat,
//! then wrapped around the body: a dot's circumferential offset becomes a
//! rotation about the axis, its axial offset stays a translation. Hexagonal
//! pockets are sunk radially into the curved face so magnets sit flush under
//! the tape; flange rings at both ends keep the tape tracking.

use csgrs::float_types::{PI, Real};
use nalgebra::Vector3;
use serde::Serialize;

use crate::errors::{SpecError, positive};
use crate::spacing::{circumference_to_degrees, evenly_space};
use crate::{CUT_OVERSHOOT, Solid};

/// Radial clearance between a magnet and its hexagonal pocket, measured
/// across the flats.
pub const POCKET_CLEARANCE: Real = 0.1;

/// Wall resolution of the body, flanges and bore.
const BODY_SEGMENTS: usize = 64;

/// Specification for the magnetic pulley. All lengths in millimetres.
///
/// The body diameter is derived, not specified: the circumference must hold
/// exactly `cell_count_around_circumference` cells at `cell_pitch_x`, so the
/// tape advances one cell per `cell_pitch_x` of rotation. See
/// [`PulleySpec::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct PulleySpec {
    /// Magnet diameter; pockets are cut [`POCKET_CLEARANCE`] under this.
    pub magnet_d: Real,
    /// Radial pocket depth into the curved face.
    pub magnet_h: Real,

    // Braille layout.
    pub dot_pitch_x: Real,
    pub dot_pitch_y: Real,
    /// Cell pitch along the circumference.
    pub cell_pitch_x: Real,
    pub cell_count_around_circumference: usize,

    /// Axial body length; matches the width of the tape.
    pub pulley_body_length: Real,
    /// Radial height of the flange rings past the body surface.
    pub flange_lip_height: Real,
    /// Axle bore diameter.
    pub center_hole_d: Real,
}

impl Default for PulleySpec {
    fn default() -> Self {
        Self {
            magnet_d: 2.0,
            magnet_h: 0.6,
            dot_pitch_x: 2.5,
            dot_pitch_y: 2.5,
            cell_pitch_x: 6.0,
            cell_count_around_circumference: 3,
            pulley_body_length: 8.5,
            flange_lip_height: 1.2,
            center_hole_d: 2.0,
        }
    }
}

/// Quantities derived from a [`PulleySpec`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PulleyMetrics {
    /// Circumference of the body surface the tape rides on.
    pub pulley_body_circumference: Real,
    /// Body outer diameter.
    pub pulley_body_od: Real,
}

impl PulleySpec {
    /// Circumference of the pulley body: one cell pitch per cell.
    pub fn pulley_body_circumference(&self) -> Real {
        self.cell_count_around_circumference as Real * self.cell_pitch_x
    }

    /// Body outer diameter.
    pub fn pulley_body_od(&self) -> Real {
        self.pulley_body_circumference() / PI
    }

    /// Convert a distance along the body circumference into degrees of
    /// rotation about the axle.
    pub fn circumference_to_angle(&self, mm: Real) -> Real {
        circumference_to_degrees(mm, self.pulley_body_circumference())
    }

    /// Check every invariant and return the derived body dimensions.
    ///
    /// Fails before any geometry is built when a dimension is non-positive,
    /// the bore would not fit inside the body, a pocket would pierce the
    /// wall or break into the bore, or the dot layout would not fit its cell
    /// or the body length.
    pub fn validate(&self) -> Result<PulleyMetrics, SpecError> {
        positive("magnet_d", self.magnet_d)?;
        positive("magnet_h", self.magnet_h)?;
        positive("dot_pitch_x", self.dot_pitch_x)?;
        positive("dot_pitch_y", self.dot_pitch_y)?;
        positive("cell_pitch_x", self.cell_pitch_x)?;
        positive("pulley_body_length", self.pulley_body_length)?;
        positive("flange_lip_height", self.flange_lip_height)?;
        positive("center_hole_d", self.center_hole_d)?;
        positive(
            "pocket across-flats radius",
            self.magnet_d / 2.0 - POCKET_CLEARANCE,
        )?;
        if self.cell_count_around_circumference == 0 {
            return Err(SpecError::ZeroCount {
                name: "cell_count_around_circumference",
            });
        }

        let metrics = self.metrics();
        let body_radius = metrics.pulley_body_od / 2.0;

        if self.center_hole_d >= metrics.pulley_body_od {
            return Err(SpecError::BoreExceedsBody {
                center_hole_d: self.center_hole_d,
                pulley_body_od: metrics.pulley_body_od,
            });
        }
        if self.magnet_h >= body_radius {
            return Err(SpecError::PocketTooDeep {
                pocket_depth: self.magnet_h,
                available: body_radius,
            });
        }
        // Pocket floors must stay clear of the bore wall.
        let pocket_floor = body_radius - self.magnet_h;
        if pocket_floor < self.center_hole_d / 2.0 {
            return Err(SpecError::PocketBreaksIntoBore {
                pocket_floor,
                bore_radius: self.center_hole_d / 2.0,
            });
        }
        if self.dot_pitch_x >= self.cell_pitch_x {
            return Err(SpecError::DotColumnsExceedCell {
                dot_pitch_x: self.dot_pitch_x,
                cell_pitch_x: self.cell_pitch_x,
            });
        }
        // Three dot rows, outermost centered at ±dot_pitch_y, plus the
        // pocket extent, must stay on the body.
        let rows_extent = 2.0 * self.dot_pitch_y + self.magnet_d;
        if rows_extent > self.pulley_body_length {
            return Err(SpecError::GridExceedsBody {
                grid_extent: rows_extent,
                body_extent: self.pulley_body_length,
            });
        }

        Ok(metrics)
    }

    fn metrics(&self) -> PulleyMetrics {
        let pulley_body_circumference = self.pulley_body_circumference();
        PulleyMetrics {
            pulley_body_circumference,
            pulley_body_od: pulley_body_circumference / PI,
        }
    }
}

/// Angular/axial placement of one magnet pocket on the curved face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPlacement {
    /// Absolute rotation about the axle, in degrees. Angles are never
    /// wrapped to [0, 360): each dot carries the angle computed from its own
    /// offset, so no dot can be claimed by two cells.
    pub angle_deg: Real,
    /// Axial position, zero at the body mid-plane.
    pub z: Real,
}

/// Placement of every magnet pocket around the body.
///
/// Each cell gets a base angle of `cell_idx * 360 / cell_count`; within a
/// cell the 2×3 dot offsets come from [`evenly_space`] centered on zero, and
/// circumferential offsets are mapped to angles with
/// [`circumference_to_degrees`].
pub fn pocket_placements(spec: &PulleySpec) -> Vec<DotPlacement> {
    let circumference = spec.pulley_body_circumference();
    let cells = spec.cell_count_around_circumference;
    let mut placements = Vec::with_capacity(cells * 6);
    for cell_idx in 0..cells {
        let base_angle = cell_idx as Real * 360.0 / cells as Real;
        for &dot_x in &evenly_space(2, spec.dot_pitch_x, 0.0) {
            for &dot_z in &evenly_space(3, spec.dot_pitch_y, 0.0) {
                placements.push(DotPlacement {
                    angle_deg: base_angle + circumference_to_degrees(dot_x, circumference),
                    z: dot_z,
                });
            }
        }
    }
    placements
}

/// Build the magnetic pulley.
///
/// The body is centered on the z = 0 mid-plane with the axle along Z.
/// Pockets are cut first, then the flanges are added, then the bore is cut
/// through the whole stack.
pub fn magnetic_pulley(spec: &PulleySpec) -> Result<Solid, SpecError> {
    let metrics = spec.validate()?;
    let radius = metrics.pulley_body_od / 2.0;
    let length = spec.pulley_body_length;

    let mut p = Solid::cylinder(radius, length, BODY_SEGMENTS, None)
        .translate(Vector3::new(0.0, 0.0, -length / 2.0));

    // Hexagonal pocket tool. `regular_ngon` takes the circumscribed radius;
    // the magnet seats against the flats, so convert from across-flats. The
    // prism is long enough to clear the far side of the wall at any
    // parameter combination.
    let flat_r = spec.magnet_d / 2.0 - POCKET_CLEARANCE;
    let hex = Solid::regular_ngon(6, flat_r / (PI / 6.0).cos(), None)
        .extrude(metrics.pulley_body_od);

    // Orient the prism radially (+Z to +X), push it out to pocket depth at
    // the dot's axial position, then swing it to the dot's angle. The three
    // transforms do not commute.
    for dot in pocket_placements(spec) {
        let pocket = hex
            .rotate(0.0, 90.0, 0.0)
            .translate(Vector3::new(radius - spec.magnet_h, 0.0, dot.z))
            .rotate(0.0, 0.0, dot.angle_deg);
        p = p.difference(&pocket);
    }

    // Flange rings at both ends, anchored outward from the body faces. Each
    // ring overlaps the body axially so the joint never sits on an
    // exactly-coincident face.
    let flange = Solid::cylinder(
        radius + spec.flange_lip_height,
        spec.flange_lip_height + CUT_OVERSHOOT,
        BODY_SEGMENTS,
        None,
    );
    p = p.union(&flange.translate(Vector3::new(0.0, 0.0, length / 2.0 - CUT_OVERSHOOT)));
    p = p.union(&flange.translate(Vector3::new(0.0, 0.0, -length / 2.0 - spec.flange_lip_height)));

    // Center bore through the whole stack, flanges included.
    let bore_h = length + 2.0 * spec.flange_lip_height + 2.0 * CUT_OVERSHOOT;
    let bore = Solid::cylinder(spec.center_hole_d / 2.0, bore_h, BODY_SEGMENTS, None)
        .translate(Vector3::new(0.0, 0.0, -bore_h / 2.0));
    p = p.difference(&bore);

    Ok(p)
}
