use approx::assert_relative_eq;
use coldet3d::math::Point;
use coldet3d::query::PointQuery;
use coldet3d::shape::Triangle;
use coldet3d::utils::point_in_triangle;

#[test]
fn point_in_triangle_prism() {
    let a = Point::new(0.0, 0.0, 0.0);
    let b = Point::new(2.0, 0.0, 0.0);
    let c = Point::new(0.0, 2.0, 0.0);

    assert!(point_in_triangle(&Point::new(0.5, 0.5, 0.0), &a, &b, &c));
    assert!(!point_in_triangle(&Point::new(3.0, 3.0, 0.0), &a, &b, &c));

    // The prism test ignores the distance to the plane.
    assert!(point_in_triangle(&Point::new(0.5, 0.5, 7.0), &a, &b, &c));

    let triangle = Triangle::new(a, b, c).unwrap();
    assert_eq!(
        triangle.closest_point(&Point::new(0.5, 0.5, 7.0)),
        Point::new(0.5, 0.5, 0.0)
    );
    assert_relative_eq!(
        triangle.closest_point(&Point::new(3.0, 3.0, 0.0)),
        Point::new(1.0, 1.0, 0.0),
        epsilon = 1.0e-12
    );
}
