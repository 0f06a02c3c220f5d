use approx::assert_relative_eq;
use coldet3d::math::{Point, Vector};
use coldet3d::shape::{Sphere, Volume};

fn sweep_spheres(target_x: f64) -> Option<(f64, Vector<f64>)> {
    let moving = Volume::from(Sphere::new(Point::origin(), 1.0));
    let target = Volume::from(Sphere::new(Point::new(target_x, 0.0, 0.0), 1.0));

    moving
        .sweep(&target, &Vector::new(2.0, 0.0, 0.0))
        .map(|hit| (hit.time_of_impact, hit.normal.unwrap().into_inner()))
}

#[test]
fn sphere_sweep_hits_halfway() {
    let (toi, normal) = sweep_spheres(3.0).unwrap();
    assert_relative_eq!(toi, 0.5, epsilon = 1.0e-9);
    assert_relative_eq!(normal, -Vector::x(), epsilon = 1.0e-9);
}

#[test]
fn sphere_sweep_falls_short() {
    assert_eq!(sweep_spheres(5.0), None);

    let moving = Volume::from(Sphere::new(Point::origin(), 1.0));
    let target = Volume::from(Sphere::new(Point::new(5.0, 0.0, 0.0), 1.0));
    assert_eq!(moving.time_of_impact(&target, &Vector::new(2.0, 0.0, 0.0)), 1.0);
}
