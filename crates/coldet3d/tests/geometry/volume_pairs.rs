use coldet3d::math::{Point, Real, Rotation, Vector};
use coldet3d::shape::{
    Capsule, Cuboid, Cylinder, Frustum, Sphere, Triangle, Volume, VolumeType,
};
use oorandom::Rand64;

pub fn random_point(rng: &mut Rand64, extent: Real) -> Point<Real> {
    Point::new(
        (rng.rand_float() * 2.0 - 1.0) * extent,
        (rng.rand_float() * 2.0 - 1.0) * extent,
        (rng.rand_float() * 2.0 - 1.0) * extent,
    )
}

pub fn random_rotation(rng: &mut Rand64) -> Rotation<Real> {
    Rotation::from_euler_angles(
        rng.rand_float() * 6.0,
        rng.rand_float() * 6.0,
        rng.rand_float() * 6.0,
    )
}

fn random_size(rng: &mut Rand64) -> Real {
    0.2 + rng.rand_float() * 1.5
}

/// A random volume of the given kind, near the origin.
pub fn random_volume(rng: &mut Rand64, kind: usize) -> Volume {
    let center = random_point(rng, 2.0);

    match kind % 6 {
        0 => Sphere::new(center, random_size(rng)).into(),
        1 => {
            let half = Vector::new(random_size(rng), random_size(rng), random_size(rng));
            Cuboid::with_orientation(center, half, random_rotation(rng))
                .unwrap()
                .into()
        }
        2 => Cylinder::new(center, random_size(rng), random_size(rng))
            .with_orientation(random_rotation(rng))
            .into(),
        3 => Capsule::new(center, random_size(rng), random_size(rng))
            .with_orientation(random_rotation(rng))
            .into(),
        4 => {
            let rot = random_rotation(rng);
            let s = random_size(rng);
            Triangle::new(
                center + rot * Vector::new(s, 0.0, 0.0),
                center + rot * Vector::new(0.0, s, 0.0),
                center + rot * Vector::new(-s, -s, 0.0),
            )
            .unwrap()
            .into()
        }
        _ => {
            let mut frustum = Frustum::perspective(1.2, 1.0, 0.5, 3.0).unwrap();
            frustum.move_by(&center.coords);
            frustum.into()
        }
    }
}

fn random_pairs(seed: u128, count: usize) -> Vec<(Volume, Volume)> {
    let mut rng = Rand64::new(seed);
    let mut pairs = Vec::new();

    for _ in 0..count {
        for i in 0..6 {
            for j in 0..6 {
                pairs.push((random_volume(&mut rng, i), random_volume(&mut rng, j)));
            }
        }
    }

    pairs
}

#[test]
fn overlap_is_symmetric() {
    for (a, b) in random_pairs(42, 20) {
        assert_eq!(a.overlaps(&b), b.overlaps(&a), "{:?} vs {:?}", a, b);
    }
}

#[test]
fn overlapping_volumes_hit_immediately() {
    let mut rng = Rand64::new(7);

    for (a, b) in random_pairs(1234, 20) {
        if a.overlaps(&b) {
            let displacement = random_point(&mut rng, 5.0).coords;
            assert_eq!(a.time_of_impact(&b, &displacement), 0.0);
        }
    }
}

#[test]
fn still_volumes_hit_only_if_overlapping() {
    for (a, b) in random_pairs(99, 20) {
        let expected = if a.overlaps(&b) { 0.0 } else { 1.0 };
        assert_eq!(a.time_of_impact(&b, &Vector::zeros()), expected);
    }
}

/// Pairings with a dedicated sweep, as opposed to the ones only reporting an initial overlap.
fn has_swept_routine(a: VolumeType, b: VolumeType) -> bool {
    use VolumeType::*;

    match (a, b) {
        (Sphere, Sphere | Box | Cylinder | Capsule | Triangle) => true,
        (Box | Cylinder | Capsule | Triangle, Sphere) => true,
        (Box, Box | Triangle) | (Triangle, Box) => true,
        _ => false,
    }
}

fn moved(volume: &Volume, displacement: &Vector<Real>, s: Real) -> Volume {
    let mut result = *volume;
    result.move_by(&(displacement * s));
    result
}

#[test]
fn sweeps_find_the_first_contact_along_the_motion() {
    const SAMPLES: usize = 100;
    let mut rng = Rand64::new(2024);
    let mut checked = 0;

    for (a, b) in random_pairs(31337, 60) {
        if !has_swept_routine(a.volume_type(), b.volume_type()) || a.overlaps(&b) {
            continue;
        }

        let displacement = random_point(&mut rng, 6.0).coords;
        let toi = a.time_of_impact(&b, &displacement);

        let first_overlap = (1..SAMPLES)
            .map(|i| i as Real / SAMPLES as Real)
            .find(|s| moved(&a, &displacement, *s).overlaps(&b));

        if let Some(s) = first_overlap {
            assert!(toi < 1.0, "{:?} swept by {:?} misses {:?}", a, displacement, b);
            assert!(toi <= s + 1.0e-6, "{:?} swept by {:?} hits {:?} late", a, displacement, b);
            checked += 1;
        }

        if toi > 1.0e-2 && toi < 1.0 {
            let before = moved(&a, &displacement, toi - 1.0e-2);
            assert!(!before.overlaps(&b), "{:?} swept by {:?} hits {:?} early", a, displacement, b);
        }
    }

    assert!(checked > 0);
}

#[test]
fn missing_pairings_never_collide() {
    let cylinder = Volume::from(Cylinder::new(Point::origin(), 1.0, 1.0));
    let other = Volume::from(Cylinder::new(Point::new(0.5, 0.0, 0.0), 1.0, 1.0));

    assert!(!cylinder.overlaps(&other));
    assert_eq!(cylinder.time_of_impact(&other, &Vector::x()), 1.0);
}
