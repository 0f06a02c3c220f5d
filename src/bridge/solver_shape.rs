//! Shapes handed to the rigid-body solver.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::VolumeError;
use alloc::boxed::Box;
use alloc::vec::Vec;
use downcast_rs::{impl_downcast, DowncastSync};
use num_derive::FromPrimitive;
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::RTree;
use smallvec::SmallVec;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
/// Enum representing the kind of a solver shape.
pub enum SolverShapeType {
    /// A sphere centered at the origin.
    Sphere = 0,
    /// A box centered at the origin.
    Box,
    /// A capsule aligned with one of the coordinate axes.
    Capsule,
    /// A cone aligned with one of the coordinate axes.
    Cone,
    /// A cylinder aligned with one of the coordinate axes.
    Cylinder,
    /// The convex hull of a set of spheres.
    MultiSphere,
    /// A convex polyhedron described by its vertices and face planes.
    ConvexPolyhedron,
    /// A set of child shapes, each with its own local transform.
    Compound,
    /// A shape kind only known to the solver.
    Custom,
}

impl SolverShapeType {
    /// Is this kind of shape convex?
    pub fn is_convex(self) -> bool {
        !matches!(self, SolverShapeType::Compound | SolverShapeType::Custom)
    }
}

/// One of the three coordinate axes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UpAxis {
    /// The `x` axis.
    X,
    /// The `y` axis.
    #[default]
    Y,
    /// The `z` axis.
    Z,
}

impl UpAxis {
    /// The index of this axis in a vector.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            UpAxis::X => 0,
            UpAxis::Y => 1,
            UpAxis::Z => 2,
        }
    }
}

/// Trait implemented by every shape the rigid-body solver knows about.
pub trait SolverShape: DowncastSync {
    /// The kind of this shape.
    fn shape_type(&self) -> SolverShapeType;

    /// The bounds of this shape in its own local frame.
    fn local_aabb(&self) -> Aabb;

    /// The bounds of this shape placed at `pos`.
    fn compute_aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.local_aabb().transform_by(pos)
    }
}

impl_downcast!(sync SolverShape);

impl dyn SolverShape {
    /// Converts this abstract shape to the given concrete shape, if it is one.
    pub fn as_shape<T: SolverShape>(&self) -> Option<&T> {
        self.downcast_ref()
    }
}

fn check_non_negative(name: &'static str, value: Real) -> Result<Real, VolumeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(VolumeError::InvalidParameter { name, value })
    }
}

fn axis_aligned_extents(up_axis: UpAxis, half_height: Real, radius: Real) -> Vector<Real> {
    let mut extents = Vector::repeat(radius);
    extents[up_axis.index()] = half_height;
    extents
}

/// A sphere centered at the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereShape {
    /// The sphere radius.
    pub radius: Real,
}

impl SphereShape {
    /// Creates a sphere shape, rejecting negative radii.
    pub fn new(radius: Real) -> Result<Self, VolumeError> {
        Ok(Self {
            radius: check_non_negative("radius", radius)?,
        })
    }
}

impl SolverShape for SphereShape {
    fn shape_type(&self) -> SolverShapeType {
        SolverShapeType::Sphere
    }

    fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), Vector::repeat(self.radius))
    }
}

/// A box centered at the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxShape {
    /// The half extents of the box along each local axis.
    pub half_extents: Vector<Real>,
}

impl BoxShape {
    /// Creates a box shape, rejecting negative half extents.
    pub fn new(half_extents: Vector<Real>) -> Result<Self, VolumeError> {
        for value in half_extents.iter() {
            let _ = check_non_negative("half_extents", *value)?;
        }
        Ok(Self { half_extents })
    }
}

impl SolverShape for BoxShape {
    fn shape_type(&self) -> SolverShapeType {
        SolverShapeType::Box
    }

    fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), self.half_extents)
    }
}

/// A capsule centered at the origin and aligned with `up_axis`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CapsuleShape {
    /// The radius of the hemispherical caps.
    pub radius: Real,
    /// Half the distance between the two cap centers.
    pub half_height: Real,
    /// The axis the capsule is aligned with.
    pub up_axis: UpAxis,
}

impl CapsuleShape {
    /// Creates a capsule shape, rejecting negative dimensions.
    pub fn new(radius: Real, half_height: Real, up_axis: UpAxis) -> Result<Self, VolumeError> {
        Ok(Self {
            radius: check_non_negative("radius", radius)?,
            half_height: check_non_negative("half_height", half_height)?,
            up_axis,
        })
    }
}

impl SolverShape for CapsuleShape {
    fn shape_type(&self) -> SolverShapeType {
        SolverShapeType::Capsule
    }

    fn local_aabb(&self) -> Aabb {
        let extents = axis_aligned_extents(
            self.up_axis,
            self.half_height + self.radius,
            self.radius,
        );
        Aabb::from_half_extents(Point::origin(), extents)
    }
}

/// A cone centered at the origin, with its apex toward `+up_axis`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConeShape {
    /// The radius of the base.
    pub radius: Real,
    /// The distance between the base and the apex.
    pub height: Real,
    /// The axis the cone is aligned with.
    pub up_axis: UpAxis,
}

impl ConeShape {
    /// Creates a cone shape, rejecting negative dimensions.
    pub fn new(radius: Real, height: Real, up_axis: UpAxis) -> Result<Self, VolumeError> {
        Ok(Self {
            radius: check_non_negative("radius", radius)?,
            height: check_non_negative("height", height)?,
            up_axis,
        })
    }
}

impl SolverShape for ConeShape {
    fn shape_type(&self) -> SolverShapeType {
        SolverShapeType::Cone
    }

    fn local_aabb(&self) -> Aabb {
        let extents = axis_aligned_extents(self.up_axis, self.height * 0.5, self.radius);
        Aabb::from_half_extents(Point::origin(), extents)
    }
}

/// A cylinder centered at the origin and aligned with `up_axis`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CylinderShape {
    /// The radius of the cylinder.
    pub radius: Real,
    /// Half the height of the cylinder.
    pub half_height: Real,
    /// The axis the cylinder is aligned with.
    pub up_axis: UpAxis,
}

impl CylinderShape {
    /// Creates a cylinder shape, rejecting negative dimensions.
    pub fn new(radius: Real, half_height: Real, up_axis: UpAxis) -> Result<Self, VolumeError> {
        Ok(Self {
            radius: check_non_negative("radius", radius)?,
            half_height: check_non_negative("half_height", half_height)?,
            up_axis,
        })
    }
}

impl SolverShape for CylinderShape {
    fn shape_type(&self) -> SolverShapeType {
        SolverShapeType::Cylinder
    }

    fn local_aabb(&self) -> Aabb {
        let extents = axis_aligned_extents(self.up_axis, self.half_height, self.radius);
        Aabb::from_half_extents(Point::origin(), extents)
    }
}

/// The convex hull of a set of spheres.
///
/// Two spheres of different radii are the usual way of describing a tapered capsule.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiSphereShape {
    spheres: SmallVec<[(Point<Real>, Real); 2]>,
}

impl MultiSphereShape {
    /// Creates a multi-sphere from `(center, radius)` pairs, rejecting negative radii.
    pub fn new(
        spheres: impl IntoIterator<Item = (Point<Real>, Real)>,
    ) -> Result<Self, VolumeError> {
        let spheres = spheres
            .into_iter()
            .map(|(center, radius)| Ok((center, check_non_negative("radius", radius)?)))
            .collect::<Result<_, VolumeError>>()?;
        Ok(Self { spheres })
    }

    /// The `(center, radius)` pairs of this multi-sphere.
    pub fn spheres(&self) -> &[(Point<Real>, Real)] {
        &self.spheres
    }
}

impl SolverShape for MultiSphereShape {
    fn shape_type(&self) -> SolverShapeType {
        SolverShapeType::MultiSphere
    }

    fn local_aabb(&self) -> Aabb {
        let mut aabb = Aabb::new_invalid();
        for (center, radius) in &self.spheres {
            aabb.merge(&Aabb::from_half_extents(*center, Vector::repeat(*radius)));
        }
        aabb
    }
}

/// A convex polyhedron given by its vertices and its outward face planes.
///
/// A point `p` lies inside the polyhedron if `n · p + d <= 0` for every face plane `(n, d)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexPolyhedronShape {
    vertices: Vec<Point<Real>>,
    planes: Vec<(Vector<Real>, Real)>,
}

impl ConvexPolyhedronShape {
    /// Creates a convex polyhedron. The plane normals are normalized.
    pub fn new(
        vertices: Vec<Point<Real>>,
        planes: impl IntoIterator<Item = (Vector<Real>, Real)>,
    ) -> Result<Self, VolumeError> {
        let planes = planes
            .into_iter()
            .map(|(normal, distance)| {
                let norm = normal.norm();
                if norm > crate::math::DEFAULT_EPSILON && distance.is_finite() {
                    Ok((normal / norm, distance / norm))
                } else {
                    Err(VolumeError::InvalidParameter {
                        name: "plane",
                        value: norm,
                    })
                }
            })
            .collect::<Result<_, VolumeError>>()?;
        Ok(Self { vertices, planes })
    }

    /// The vertices of this polyhedron.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The outward face planes of this polyhedron.
    pub fn planes(&self) -> &[(Vector<Real>, Real)] {
        &self.planes
    }
}

impl SolverShape for ConvexPolyhedronShape {
    fn shape_type(&self) -> SolverShapeType {
        SolverShapeType::ConvexPolyhedron
    }

    fn local_aabb(&self) -> Aabb {
        Aabb::from_points(&self.vertices)
    }
}

/// The entry type of the spatial index of a compound shape: a child AABB tagged with the
/// child index.
pub type CompoundChildEnvelope = GeomWithData<Rectangle<[Real; 3]>, usize>;

/// A shape made of several child shapes, each with its own local transform.
pub struct CompoundShape {
    children: Vec<(Isometry<Real>, Box<dyn SolverShape>)>,
    tree: Option<RTree<CompoundChildEnvelope>>,
    aabb: Aabb,
}

impl CompoundShape {
    /// Builds a compound shape and the R-tree indexing the bounds of its children.
    pub fn new(children: Vec<(Isometry<Real>, Box<dyn SolverShape>)>) -> Self {
        let mut result = Self::without_tree(children);
        let envelopes = result
            .children
            .iter()
            .enumerate()
            .map(|(i, (pos, shape))| {
                let aabb = shape.compute_aabb(pos);
                GeomWithData::new(Rectangle::from_corners(aabb.mins.into(), aabb.maxs.into()), i)
            })
            .collect();
        result.tree = Some(RTree::bulk_load(envelopes));
        result
    }

    /// Builds a compound shape without any spatial index.
    ///
    /// Casts against such a compound test every child.
    pub fn without_tree(children: Vec<(Isometry<Real>, Box<dyn SolverShape>)>) -> Self {
        let mut aabb = Aabb::new_invalid();
        for (pos, shape) in &children {
            aabb.merge(&shape.compute_aabb(pos));
        }

        Self {
            children,
            tree: None,
            aabb,
        }
    }

    /// The children of this compound, with their transforms relative to the compound.
    pub fn children(&self) -> &[(Isometry<Real>, Box<dyn SolverShape>)] {
        &self.children
    }

    /// The spatial index over the children bounds, if any.
    pub fn tree(&self) -> Option<&RTree<CompoundChildEnvelope>> {
        self.tree.as_ref()
    }

    /// Indices of the children whose bounds intersect `aabb`, in increasing order.
    ///
    /// Without a spatial index, every child is returned.
    pub fn children_intersecting(&self, aabb: &Aabb) -> Vec<usize> {
        match &self.tree {
            Some(tree) => {
                let mut indices: Vec<usize> = tree
                    .locate_in_envelope_intersecting(&aabb.to_envelope())
                    .map(|entry| entry.data)
                    .collect();
                indices.sort_unstable();
                indices
            }
            None => (0..self.children.len()).collect(),
        }
    }
}

impl SolverShape for CompoundShape {
    fn shape_type(&self) -> SolverShapeType {
        SolverShapeType::Compound
    }

    fn local_aabb(&self) -> Aabb {
        self.aabb
    }
}
