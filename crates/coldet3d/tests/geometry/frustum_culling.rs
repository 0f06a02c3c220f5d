use coldet3d::math::{Point, Vector};
use coldet3d::shape::{Cuboid, Frustum, Volume};
use core::f64::consts::FRAC_PI_2;

fn unit_box(z: f64) -> Volume {
    Cuboid::new(Point::new(0.0, 0.0, z), Vector::repeat(1.0))
        .unwrap()
        .into()
}

#[test]
fn box_against_perspective_frustum() {
    let frustum = Volume::from(Frustum::perspective(FRAC_PI_2, 1.0, 1.0, 10.0).unwrap());

    assert!(unit_box(5.0).overlaps(&frustum));
    assert!(frustum.overlaps(&unit_box(5.0)));
    assert!(!unit_box(50.0).overlaps(&frustum));
    assert!(!unit_box(-5.0).overlaps(&frustum));
}

#[test]
fn degenerate_frustum_is_rejected() {
    assert!(Frustum::perspective(FRAC_PI_2, 1.0, 10.0, 1.0).is_err());
    assert!(Frustum::perspective(0.0, 1.0, 1.0, 10.0).is_err());
}
