use coldet3d::bridge::{
    BoxShape, ClosestConvexResultCallback, CollisionObjectWrapper, CompoundShape, LocalShapeInfo,
    NoFallback, ShapeCollision, SolverShape, SphereShape,
};
use coldet3d::math::{Isometry, Real, Vector};

fn row_of_boxes() -> Vec<(Isometry<Real>, Box<dyn SolverShape>)> {
    (1..=3)
        .map(|i| {
            let pos = Isometry::translation(i as Real * 4.0, 0.0, 0.0);
            let cube = BoxShape::new(Vector::repeat(0.5)).unwrap();
            let shape: Box<dyn SolverShape> = Box::new(cube);
            (pos, shape)
        })
        .collect()
}

fn cast_against(compound: &CompoundShape, y: Real) -> ClosestConvexResultCallback {
    let ball = SphereShape::new(0.5).unwrap();
    let target = CollisionObjectWrapper::new(11, compound, Isometry::identity());
    let mut callback = ClosestConvexResultCallback::new();

    ShapeCollision::new(NoFallback).shape_cast(
        &ball,
        &Isometry::translation(0.0, y, 0.0),
        &Isometry::translation(20.0, y, 0.0),
        &target,
        &mut callback,
        0.0,
    );

    callback
}

#[test]
fn compound_cast_reports_nearest_child() {
    for compound in [
        CompoundShape::new(row_of_boxes()),
        CompoundShape::without_tree(row_of_boxes()),
    ] {
        let hit = cast_against(&compound, 0.0).closest.unwrap();
        assert_eq!(hit.object_id, 11);
        assert!((hit.hit_fraction - 0.15).abs() < 1.0e-9);
        assert!((hit.hit_point.x - 3.0).abs() < 1.0e-9);
        assert_eq!(
            hit.local_shape_info,
            Some(LocalShapeInfo {
                shape_part: -1,
                triangle_index: 0
            })
        );
    }
}

#[test]
fn compound_cast_can_miss() {
    let compound = CompoundShape::new(row_of_boxes());
    assert!(!cast_against(&compound, 3.0).has_hit());
}
