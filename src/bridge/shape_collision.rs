use crate::bridge::{
    BoxShape, CapsuleShape, CollisionObjectWrapper, CompoundShape, ConeShape, ConvexCastFallback,
    ConvexPolyhedronShape, ConvexResultCallback, CylinderShape, LocalConvexResult,
    LocalInfoAdder, MultiSphereShape, NoFallback, SolverShape, SolverShapeType, SphereShape,
};
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{Cuboid, Sphere, Volume};
use crate::utils::{IsometryOps, FLOAT_SAFE_EPSILON};
use alloc::vec::Vec;

/// Routes convex casts of the rigid-body solver to the analytic volume queries when possible.
///
/// Box and sphere casts against box and sphere targets, without rotation along the cast, are
/// answered by [`Volume::sweep`]. Compound targets are split into their children. Everything
/// else goes to the solver's generic convex cast, the fallback `F`.
#[derive(Clone, Debug, Default)]
pub struct ShapeCollision<F = NoFallback> {
    fallback: F,
}

impl<F: ConvexCastFallback> ShapeCollision<F> {
    /// Creates a bridge deferring unspecialized casts to `fallback`.
    pub fn new(fallback: F) -> Self {
        Self { fallback }
    }

    /// The generic convex cast used for unspecialized pairings.
    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    /// Mutable reference to the generic convex cast.
    pub fn fallback_mut(&mut self) -> &mut F {
        &mut self.fallback
    }

    /// Casts `cast_shape` from `from` to `to` against `target`.
    pub fn shape_cast(
        &mut self,
        cast_shape: &dyn SolverShape,
        from: &Isometry<Real>,
        to: &Isometry<Real>,
        target: &CollisionObjectWrapper,
        callback: &mut dyn ConvexResultCallback,
        allowed_penetration: Real,
    ) {
        if !callback.needs_collision(target.object_id) {
            return;
        }

        let shape_type = target.shape.shape_type();

        if shape_type == SolverShapeType::Compound {
            if let Some(compound) = target.shape.as_shape::<CompoundShape>() {
                self.shape_cast_compound(
                    cast_shape,
                    from,
                    to,
                    target,
                    compound,
                    callback,
                    allowed_penetration,
                );
                return;
            }
        } else if shape_type.is_convex() {
            self.shape_cast_convex(cast_shape, from, to, target, callback, allowed_penetration);
            return;
        }

        self.fallback.object_query_single(
            cast_shape,
            from,
            to,
            target,
            callback,
            allowed_penetration,
        );
    }

    fn shape_cast_compound(
        &mut self,
        cast_shape: &dyn SolverShape,
        from: &Isometry<Real>,
        to: &Isometry<Real>,
        target: &CollisionObjectWrapper,
        compound: &CompoundShape,
        callback: &mut dyn ConvexResultCallback,
        allowed_penetration: Real,
    ) {
        let children = compound.children();

        if children.is_empty() {
            return;
        }

        // With a single child the compound bounds are the child bounds.
        let candidates: Vec<usize> = if compound.tree().is_some() && children.len() > 1 {
            let inv_pos = target.world_transform.inverse();
            let swept = cast_shape
                .compute_aabb(&(inv_pos * from))
                .merged(&cast_shape.compute_aabb(&(inv_pos * to)));
            compound.children_intersecting(&swept)
        } else {
            (0..children.len()).collect()
        };

        for i in candidates {
            if callback.closest_hit_fraction() == 0.0 {
                break;
            }

            let (child_pos, child_shape) = &children[i];
            let child = CollisionObjectWrapper::new(
                target.object_id,
                &**child_shape,
                target.world_transform * child_pos,
            );
            let mut adder = LocalInfoAdder::new(i as i32, &mut *callback);
            self.shape_cast(cast_shape, from, to, &child, &mut adder, allowed_penetration);
        }
    }

    fn shape_cast_convex(
        &mut self,
        cast_shape: &dyn SolverShape,
        from: &Isometry<Real>,
        to: &Isometry<Real>,
        target: &CollisionObjectWrapper,
        callback: &mut dyn ConvexResultCallback,
        allowed_penetration: Real,
    ) {
        if !has_transform_rotation(from, to) {
            let cast_volume = volume_from_shape(cast_shape, from);
            let hit_volume = volume_from_shape(target.shape, &target.world_transform);

            if let (Some(cast_volume), Some(hit_volume)) = (cast_volume, hit_volume) {
                volume_cast_volume(&cast_volume, &hit_volume, target, from, to, callback);
                return;
            }
        }

        self.fallback.object_query_single(
            cast_shape,
            from,
            to,
            target,
            callback,
            allowed_penetration,
        );
    }
}

/// Does the rotation change between `from` and `to`?
pub fn has_transform_rotation(from: &Isometry<Real>, to: &Isometry<Real>) -> bool {
    to.rotation_differs(from, FLOAT_SAFE_EPSILON)
}

/// Builds the analytic volume of a box or sphere solver shape placed at `pos`.
pub fn volume_from_shape(shape: &dyn SolverShape, pos: &Isometry<Real>) -> Option<Volume> {
    let center = Point::from(pos.translation.vector);

    match shape.shape_type() {
        SolverShapeType::Box => {
            let shape = shape.as_shape::<BoxShape>()?;
            Cuboid::with_orientation(center, shape.half_extents, pos.rotation)
                .ok()
                .map(Volume::Box)
        }
        SolverShapeType::Sphere => {
            let shape = shape.as_shape::<SphereShape>()?;
            Some(Volume::Sphere(Sphere::new(center, shape.radius)))
        }
        _ => None,
    }
}

/// Sweeps `cast_volume` from `from` to `to` against `hit_volume`, reporting the contact to
/// `callback` if it is closer than any previous one.
///
/// The reported hit point is the cast origin translated to the time of impact.
pub fn volume_cast_volume(
    cast_volume: &Volume,
    hit_volume: &Volume,
    target: &CollisionObjectWrapper,
    from: &Isometry<Real>,
    to: &Isometry<Real>,
    callback: &mut dyn ConvexResultCallback,
) {
    let displacement = to.translation.vector - from.translation.vector;

    if let Some(hit) = cast_volume.sweep(hit_volume, &displacement) {
        let toi = hit.time_of_impact;

        if toi < 1.0 && toi < callback.closest_hit_fraction() {
            let mut result = LocalConvexResult {
                object_id: target.object_id,
                local_shape_info: None,
                hit_normal: hit.normal.map(|n| n.into_inner()).unwrap_or_else(Vector::zeros),
                hit_point: Point::from(from.translation.vector + displacement * toi),
                hit_fraction: toi,
            };
            let _ = callback.add_single_result(&mut result, true);
        }
    }
}

/// Tests whether the world-space `point` lies inside the collision object `target`.
pub fn point_inside(target: &CollisionObjectWrapper, point: &Point<Real>) -> bool {
    point_inside_shape(
        target.shape,
        &target.world_transform.inverse_transform_point(point),
    )
}

/// Tests whether `point`, expressed in the local frame of `shape`, lies inside it.
///
/// Unsupported shape kinds log a warning and are treated as empty.
pub fn point_inside_shape(shape: &dyn SolverShape, point: &Point<Real>) -> bool {
    let shape_type = shape.shape_type();

    match shape_type {
        SolverShapeType::Compound => {
            if let Some(compound) = shape.as_shape::<CompoundShape>() {
                return compound.children().iter().any(|(pos, child)| {
                    point_inside_shape(&**child, &pos.inverse_transform_point(point))
                });
            }
        }
        SolverShapeType::Box => {
            if let Some(b) = shape.as_shape::<BoxShape>() {
                let local = point.coords.abs();
                return local.iter().zip(b.half_extents.iter()).all(|(p, h)| p <= h);
            }
        }
        SolverShapeType::Sphere => {
            if let Some(s) = shape.as_shape::<SphereShape>() {
                return point.coords.norm_squared() <= s.radius * s.radius;
            }
        }
        SolverShapeType::Capsule => {
            if let Some(c) = shape.as_shape::<CapsuleShape>() {
                let axis = c.up_axis.index();
                let mut on_axis = Point::origin();
                on_axis[axis] = point[axis].clamp(-c.half_height, c.half_height);
                return na::distance_squared(point, &on_axis) <= c.radius * c.radius;
            }
        }
        SolverShapeType::Cone => {
            if let Some(c) = shape.as_shape::<ConeShape>() {
                return point_inside_cone(c, point);
            }
        }
        SolverShapeType::MultiSphere => {
            if let Some(m) = shape.as_shape::<MultiSphereShape>() {
                return point_inside_multi_sphere(m, point);
            }
        }
        SolverShapeType::Cylinder => {
            if let Some(c) = shape.as_shape::<CylinderShape>() {
                let axis = c.up_axis.index();
                let mut radial = point.coords;
                radial[axis] = 0.0;
                return point[axis].abs() <= c.half_height
                    && radial.norm_squared() <= c.radius * c.radius;
            }
        }
        SolverShapeType::ConvexPolyhedron => {
            if let Some(p) = shape.as_shape::<ConvexPolyhedronShape>() {
                return p
                    .planes()
                    .iter()
                    .all(|(normal, distance)| normal.dot(&point.coords) + distance <= 0.0);
            }
        }
        SolverShapeType::Custom => {}
    }

    warn_once!("point_inside does not support shape type {:?}", shape_type);
    false
}

fn point_inside_cone(cone: &ConeShape, point: &Point<Real>) -> bool {
    if cone.height < FLOAT_SAFE_EPSILON {
        return false;
    }

    let axis = cone.up_axis.index();
    // Distance from the apex, measured along the axis toward the base.
    let depth = cone.height * 0.5 - point[axis];
    if depth < 0.0 || depth > cone.height {
        return false;
    }

    let mut radial = point.coords;
    radial[axis] = 0.0;
    let radius = cone.radius * depth / cone.height;
    radial.norm_squared() <= radius * radius
}

fn point_inside_multi_sphere(shape: &MultiSphereShape, point: &Point<Real>) -> bool {
    match shape.spheres() {
        [] => false,
        [(center, radius)] => na::distance_squared(point, center) <= radius * radius,
        [(center1, radius1), (center2, radius2)] => {
            let line = center2 - center1;
            let length = line.norm();

            if length < FLOAT_SAFE_EPSILON {
                let radius = radius1.max(*radius2);
                return na::distance_squared(point, center1) <= radius * radius;
            }

            let t = (line.dot(&(point - center1)) / (length * length)).clamp(0.0, 1.0);
            let radius = radius1 * (1.0 - t) + radius2 * t;
            na::distance_squared(point, &(center1 + line * t)) <= radius * radius
        }
        _ => {
            warn_once!("point_inside is not supported on multi-spheres with more than 2 spheres");
            false
        }
    }
}
