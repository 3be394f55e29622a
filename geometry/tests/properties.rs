use approx::{abs_diff_eq, relative_eq};
use proptest::prelude::*;
use raycast_geometry::{Point, matrix};

fn coordinate() -> impl Strategy<Value = f64> {
    -1e6..1e6f64
}

fn point() -> impl Strategy<Value = Point> {
    (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| Point::new(x, y, z))
}

fn small_point() -> impl Strategy<Value = Point> {
    (-1e3..1e3f64, -1e3..1e3f64, -1e3..1e3f64).prop_map(|(x, y, z)| Point::new(x, y, z))
}

fn nonzero_scale() -> impl Strategy<Value = f64> {
    prop_oneof![-1e3..-1e-3f64, 1e-3..1e3f64]
}

proptest! {
    #[test]
    fn between_matches_subtraction_bitwise(a in point(), b in point()) {
        let between = Point::between(a, b).to_array().map(f64::to_bits);
        let manual = (b - a).to_array().map(f64::to_bits);
        prop_assert_eq!(between, manual);
    }

    #[test]
    fn scaling_round_trips(p in point(), d in nonzero_scale()) {
        prop_assert!(relative_eq!((p * d) / d, p, max_relative = 1e-12));
    }

    #[test]
    fn dot_commutes(a in point(), b in point()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn cross_anticommutes(a in point(), b in point()) {
        prop_assert_eq!(a.cross(b), -(b.cross(a)));
        prop_assert_eq!(a.cross(a), Point::ZERO);
    }

    #[test]
    fn cross_is_orthogonal(a in small_point(), b in small_point()) {
        let c = a.cross(b);
        let tolerance = 1e-12 * a.norm2() * b.norm2() * (a.norm2() + b.norm2());
        prop_assert!(c.dot(a).abs() <= tolerance);
        prop_assert!(c.dot(b).abs() <= tolerance);
    }

    #[test]
    fn norms_are_ordered(p in point()) {
        prop_assert!(p.norm2() >= p.norm_inf());
        prop_assert!(p.norm_inf() <= p.norm1());
    }

    #[test]
    fn identity_transform_is_noop(p in point()) {
        prop_assert_eq!(p.transformed(&matrix::IDENTITY), p);
        prop_assert_eq!(p.transformed_direction(&matrix::IDENTITY), p);
    }

    #[test]
    fn translated_origin_is_translation_column(t in point()) {
        prop_assert_eq!(Point::ZERO.transformed(&matrix::translation(t)), t);
    }

    #[test]
    fn directions_are_not_translated(p in point(), t in point()) {
        prop_assert_eq!(p.transformed_direction(&matrix::translation(t)), p);
    }

    #[test]
    fn transforms_compose(
        p in small_point(),
        t in small_point(),
        angle in -6.3..6.3f64,
    ) {
        let rotate = matrix::rotation_y(angle);
        let translate = matrix::translation(t);
        let step_by_step = p.transformed(&rotate).transformed(&translate);
        let combined = p.transformed(&matrix::multiply(&translate, &rotate));
        prop_assert!(abs_diff_eq!(step_by_step, combined, epsilon = 1e-9));
    }

    #[test]
    fn index_mirrors_accessors(p in point()) {
        prop_assert_eq!(p[0], p.x());
        prop_assert_eq!(p[1], p.y());
        prop_assert_eq!(p[2], p.z());
    }

    #[test]
    fn glam_matrices_survive_conversion(t in small_point(), angle in -6.3..6.3f64) {
        let m = matrix::multiply(&matrix::translation(t), &matrix::rotation_x(angle));
        prop_assert_eq!(matrix::from_dmat4(matrix::to_dmat4(&m)), m);
    }
}

#[test]
fn documented_examples() {
    assert_eq!(
        Point::new(1.0, 2.0, 3.0) + Point::new(4.0, 5.0, 6.0),
        Point::new(5.0, 7.0, 9.0)
    );
    assert_eq!(
        Point::new(1.0, 0.0, 0.0).cross(Point::new(0.0, 1.0, 0.0)),
        Point::new(0.0, 0.0, 1.0)
    );
    assert_eq!(Point::new(3.0, 4.0, 0.0).norm2(), 5.0);
}
