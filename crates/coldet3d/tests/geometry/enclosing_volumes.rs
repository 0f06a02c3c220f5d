use crate::volume_pairs::{random_point, random_volume};
use coldet3d::math::{Point, Real};
use coldet3d::shape::Volume;
use oorandom::Rand64;

const EPS: Real = 1.0e-9;

/// Points sampled on the surface of `volume`.
fn surface_samples(volume: &Volume, rng: &mut Rand64) -> Vec<Point<Real>> {
    let mut samples = Vec::new();

    match volume {
        Volume::Sphere(s) => {
            for _ in 0..16 {
                let dir = random_point(rng, 1.0).coords;
                if let Some(dir) = dir.try_normalize(EPS) {
                    samples.push(s.center + dir * s.radius());
                }
            }
        }
        Volume::Box(b) => samples.extend(b.corners()),
        Volume::Cylinder(c) => {
            let side = c.basis().axis(0);
            let other_side = c.basis().axis(2);
            for dir in [side, -side, other_side, -other_side] {
                samples.push(c.top_center() + dir * c.top_radius());
                samples.push(c.bottom_center() + dir * c.bottom_radius());
            }
        }
        Volume::Capsule(c) => {
            let axis = c.axis();
            let side = c.basis().axis(0);
            samples.push(c.top_center() + axis * c.top_radius());
            samples.push(c.bottom_center() - axis * c.bottom_radius());
            samples.push(c.top_center() + side * c.top_radius());
            samples.push(c.bottom_center() - side * c.bottom_radius());
        }
        Volume::Triangle(t) => samples.extend(t.corners().iter().copied()),
        Volume::Frustum(f) => samples.extend(f.corners().unwrap()),
    }

    samples
}

#[test]
fn enclosing_volumes_contain_the_surface() {
    let mut rng = Rand64::new(2024);

    for k in 0..300 {
        let volume = random_volume(&mut rng, k);
        let sphere = volume.enclosing_sphere();
        let cuboid = volume.enclosing_box();
        assert!(!cuboid.is_oriented());

        for pt in surface_samples(&volume, &mut rng) {
            let radius = sphere.radius() * (1.0 + EPS) + EPS;
            assert!(
                coldet3d::na::distance(&pt, &sphere.center) <= radius,
                "{:?} escapes the enclosing sphere of {:?}",
                pt,
                volume
            );

            let local = pt - cuboid.center;
            let half = cuboid.half_size();
            assert!(
                (0..3).all(|i| local[i].abs() <= half[i] + 1.0e-6),
                "{:?} escapes the enclosing box of {:?}",
                pt,
                volume
            );
        }
    }
}
