// SPDX-License-Identifier: Apache-2.0

//! Geometric primitives: surfaces, edges, bounding boxes, overlap tests,
//! tessellation and glyph seams

pub mod bbox;
pub mod edge;
pub mod overlap;
pub mod surface;
pub mod tessellate;
pub mod text;

pub use bbox::BoundingBox;
pub use edge::{sort_into_loop, EdgeEntity, SpatialEdgeKey};
pub use overlap::{surface_pair_overlap, surfaces_overlap, OverlapOutcome};
pub use surface::{PlanarSurface, Polyline, Transformable};
pub use tessellate::{
    surfaces_from_triangles, tessellate, tessellate_with, FanTessellator, Tessellator,
};
pub use text::{GlyphSource, SegmentFont};

use nalgebra::{UnitQuaternion, Vector3};

/// Spatial coincidence tolerance shared by edge matching, hinge lookup and
/// orientation checks
pub const TOLERANCE: f64 = 1e-4;

/// Shortest rotation taking `normal` onto +Z.
///
/// `rotation_between` returns `None` for exactly opposite vectors; any
/// half turn about an in-plane axis works there.
pub fn rotation_to_z(normal: &Vector3<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::rotation_between(normal, &Vector3::z()).unwrap_or_else(|| {
        let axis = nalgebra::Unit::new_normalize(perpendicular_to(normal));
        UnitQuaternion::from_axis_angle(&axis, std::f64::consts::PI)
    })
}

/// Inverse of [`rotation_to_z`]: takes +Z onto `normal`
pub fn rotation_from_z(normal: &Vector3<f64>) -> UnitQuaternion<f64> {
    rotation_to_z(normal).inverse()
}

fn perpendicular_to(v: &Vector3<f64>) -> Vector3<f64> {
    let helper = if v.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    v.cross(&helper)
}
