mod support;

use braillecad::pulley::{PulleySpec, pocket_placements};
use braillecad::{SpecError, magnetic_pulley};
use csgrs::float_types::PI;

use crate::support::{approx_eq, bounds};

#[test]
fn derived_body_dimensions() {
    let spec = PulleySpec::default();
    let m = spec.validate().unwrap();

    // Three cells of 6.0 wrap into an 18.0 circumference.
    assert!(approx_eq(m.pulley_body_circumference, 18.0, 1e-12));
    assert!(approx_eq(m.pulley_body_od, 18.0 / PI, 1e-12));
    assert!(approx_eq(m.pulley_body_od, 5.730, 1e-3));
}

#[test]
fn circumferential_distance_maps_to_rotation() {
    let spec = PulleySpec::default();
    assert!(approx_eq(spec.circumference_to_angle(18.0), 360.0, 1e-12));
    assert!(approx_eq(spec.circumference_to_angle(9.0), 180.0, 1e-12));
    assert!(approx_eq(spec.circumference_to_angle(-1.25), -25.0, 1e-12));
}

#[test]
fn placements_cover_every_cell_without_overlap() {
    let spec = PulleySpec::default();
    let placements = pocket_placements(&spec);
    assert_eq!(placements.len(), 3 * 6);

    // Dot columns sit 1.25 off each cell center, i.e. 25 degrees on an 18.0
    // circumference; cells start 120 degrees apart.
    let mut angles: Vec<f64> = placements.iter().map(|d| d.angle_deg).collect();
    angles.sort_by(f64::total_cmp);
    angles.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
    assert_eq!(angles.len(), 6);
    for (angle, expected) in angles.iter().zip([-25.0, 25.0, 95.0, 145.0, 215.0, 265.0]) {
        assert!(approx_eq(*angle, expected, 1e-9));
    }

    // Axially the rows stay on the body, pocket extent included.
    for dot in &placements {
        assert!(dot.z.abs() + spec.magnet_d / 2.0 < spec.pulley_body_length / 2.0);
    }
}

#[test]
fn single_cell_spans_the_whole_circumference() {
    // One cell needs a thin axle to leave wall for the pockets.
    let spec = PulleySpec {
        cell_count_around_circumference: 1,
        center_hole_d: 0.5,
        ..PulleySpec::default()
    };
    let placements = pocket_placements(&spec);
    assert_eq!(placements.len(), 6);

    // Both dot columns belong to the one cell based at zero; their angular
    // span stays well under a full turn.
    for dot in &placements {
        assert!(approx_eq(dot.angle_deg.abs(), 75.0, 1e-9));
    }

    let pulley = magnetic_pulley(&spec).unwrap();
    assert!(!pulley.polygons.is_empty());
}

#[test]
fn rejects_invalid_parameters() {
    let spec = PulleySpec {
        center_hole_d: 10.0,
        ..PulleySpec::default()
    };
    assert!(matches!(spec.validate(), Err(SpecError::BoreExceedsBody { .. })));

    // Deeper than the wall itself.
    let spec = PulleySpec {
        magnet_h: 3.0,
        ..PulleySpec::default()
    };
    assert!(matches!(spec.validate(), Err(SpecError::PocketTooDeep { .. })));

    // Shallower than the wall but inside the bore's keep-out.
    let spec = PulleySpec {
        magnet_h: 2.0,
        ..PulleySpec::default()
    };
    assert!(matches!(spec.validate(), Err(SpecError::PocketBreaksIntoBore { .. })));

    let spec = PulleySpec {
        dot_pitch_x: 6.0,
        ..PulleySpec::default()
    };
    assert!(matches!(spec.validate(), Err(SpecError::DotColumnsExceedCell { .. })));

    // Rows plus pocket extent longer than the body.
    let spec = PulleySpec {
        dot_pitch_y: 4.0,
        ..PulleySpec::default()
    };
    assert!(matches!(spec.validate(), Err(SpecError::GridExceedsBody { .. })));

    // No across-flats radius left after clearance.
    let spec = PulleySpec {
        magnet_d: 0.15,
        ..PulleySpec::default()
    };
    assert!(matches!(spec.validate(), Err(SpecError::NonPositive { .. })));
}

#[test]
fn default_pulley_fills_its_envelope() {
    let spec = PulleySpec::default();
    let m = spec.validate().unwrap();
    let pulley = magnetic_pulley(&spec).unwrap();

    assert!(!pulley.polygons.is_empty());

    // Flanges set the radial extent, flange lips the axial extent.
    let flange_r = m.pulley_body_od / 2.0 + spec.flange_lip_height;
    let half_length = spec.pulley_body_length / 2.0 + spec.flange_lip_height;
    let bb = bounds(&pulley);
    assert!(approx_eq(bb[0], -flange_r, 1e-6));
    assert!(approx_eq(bb[1], -flange_r, 1e-6));
    assert!(approx_eq(bb[2], -half_length, 1e-6));
    assert!(approx_eq(bb[3], flange_r, 1e-6));
    assert!(approx_eq(bb[4], flange_r, 1e-6));
    assert!(approx_eq(bb[5], half_length, 1e-6));
}

#[test]
fn same_spec_builds_congruent_solids() {
    let spec = PulleySpec::default();
    let first = magnetic_pulley(&spec).unwrap();
    let second = magnetic_pulley(&spec).unwrap();

    assert_eq!(first.polygons.len(), second.polygons.len());
    let (a, b) = (bounds(&first), bounds(&second));
    for i in 0..6 {
        assert!(approx_eq(a[i], b[i], 1e-12));
    }
}

#[test]
fn derived_metrics_serialize_for_logging() {
    let m = PulleySpec::default().validate().unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert!(json.contains("pulley_body_od"));
}
