use braillecad::spacing::{circumference_to_degrees, evenly_space};
use csgrs::float_types::Real;

#[test]
fn returns_count_values_spaced_by_pitch() {
    for count in 1..=9 {
        let xs = evenly_space(count, 2.5, 0.0);
        assert_eq!(xs.len(), count);
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - 2.5).abs() < 1e-12);
        }
    }
}

#[test]
fn symmetric_about_center() {
    for count in 1..=9 {
        for center in [0.0, -4.0, 7.25] {
            let xs = evenly_space(count, 3.0, center);
            let mean: Real = xs.iter().sum::<Real>() / count as Real;
            assert!((mean - center).abs() < 1e-9);
            // Mirror pairs sit equally far from the center.
            for (a, b) in xs.iter().zip(xs.iter().rev()) {
                assert!(((a - center) + (b - center)).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn zero_and_one_counts() {
    assert!(evenly_space(0, 2.0, 0.0).is_empty());
    assert_eq!(evenly_space(1, 2.0, 5.0), vec![5.0]);
}

#[test]
fn two_dot_columns_straddle_the_center() {
    assert_eq!(evenly_space(2, 2.5, 0.0), vec![-1.25, 1.25]);
}

#[test]
fn angle_mapping_is_linear() {
    let circumference = 18.0;
    assert!((circumference_to_degrees(circumference, circumference) - 360.0).abs() < 1e-12);

    let one = circumference_to_degrees(1.7, circumference);
    let two = circumference_to_degrees(3.4, circumference);
    assert!((two - 2.0 * one).abs() < 1e-12);
}

#[test]
fn angle_mapping_keeps_sign() {
    // Offsets are signed; a quarter turn backwards maps to -90 degrees.
    assert!((circumference_to_degrees(-4.5, 18.0) + 90.0).abs() < 1e-12);
}
