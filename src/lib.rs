//! Parametric solid models for braille-cell magnet tooling, built around
//! Boolean operations on [csgrs] solids.
//!
//! Two part families are produced:
//! - an **assembly jig**: a flat slab carrying a grid of cylindrical magnet
//!   pockets plus two slots that form a pair of mounting arms, and
//! - a **magnetic pulley**: a flanged cylinder with hexagonal magnet pockets
//!   sunk into its curved face and a center bore for the axle.
//!
//! Both parts place their pockets in a braille-cell layout: cells of 2×3 dot
//! positions, repeated at a cell pitch. The jig lays cells out on a plane;
//! the pulley wraps the same flat layout around its circumference by mapping
//! circumferential offsets to rotation angles.
//!
//! The geometry kernel is [csgrs]. This crate only derives coordinates,
//! validates parameter sets, and composes kernel primitives with `union` and
//! `difference`; it never looks inside a solid.

#![forbid(unsafe_code)]

pub mod errors;
pub mod export;
pub mod jig;
pub mod pulley;
pub mod spacing;

/// Solid produced by the pattern engines. The kernel's generic metadata
/// channel is unused here.
pub type Solid = csgrs::csg::CSG<()>;

/// How far cutting tools reach past the faces they open onto, and how far
/// joined solids overlap. Keeps Boolean inputs off exactly-coincident faces.
pub(crate) const CUT_OVERSHOOT: csgrs::float_types::Real = 0.01;

pub use errors::{ExportError, SpecError};
pub use jig::{JigMetrics, JigSpec, assembly_jig};
pub use pulley::{PulleyMetrics, PulleySpec, magnetic_pulley};
