// SPDX-License-Identifier: Apache-2.0

//! Hinge rotation: making a face coplanar with its fold parent
//!
//! The rotation angle comes from the dihedral between the two face
//! normals, sign-corrected by an orientation consistency check. The check
//! compares, on each face, the winding of the hinge against an adjacent
//! boundary edge and the face normal, so faces with flipped normals still
//! fold outward instead of onto their parent.

use crate::error::{Error, Result};
use crate::geometry::{EdgeEntity, PlanarSurface, TOLERANCE};
use crate::topology::face::FaceEntity;
use nalgebra::{Isometry3, Point3, Translation3, Unit, UnitQuaternion, Vector3};

/// Find the boundary edge adjoining the hinge at `at` and return its
/// unit direction oriented away from `at`
fn edge_vector_from(
    edges: &[EdgeEntity],
    at: &Point3<f64>,
    hinge: &EdgeEntity,
    face: usize,
) -> Result<Vector3<f64>> {
    for edge in edges {
        if !edge.touches(at) || edge.spatially_equals(hinge) {
            continue;
        }
        let direction = if (edge.start - at).norm() < TOLERANCE {
            edge.end - edge.start
        } else {
            edge.start - edge.end
        };
        return Ok(direction.normalize());
    }
    Err(Error::BrokenBoundary { face })
}

/// Orientation sign for the fold: +1.0 when both faces wind consistently
/// with their normals around the hinge, otherwise the product of the two
/// per-face signs.
pub fn normal_consistency(
    rotate: &FaceEntity,
    reference: &FaceEntity,
    hinge: &EdgeEntity,
) -> Result<f64> {
    let ab = hinge.direction().normalize();

    let ad = edge_vector_from(&rotate.edges, &hinge.start, hinge, rotate.id)?;
    let rot_cross = ab.cross(&ad).normalize();
    let rot_ok = if (rot_cross.dot(&rotate.normal()) - 1.0).abs() < TOLERANCE {
        1.0
    } else {
        -1.0
    };

    let ac = edge_vector_from(&reference.edges, &hinge.start, hinge, reference.id)?;
    let ref_cross = ac.cross(&ab).normalize();
    let ref_ok = if (ref_cross.dot(&reference.normal()) - 1.0).abs() < TOLERANCE {
        1.0
    } else {
        -1.0
    };

    Ok(rot_ok * ref_ok)
}

/// Rigid motion that rotates `rotate`'s surfaces around the hinge into
/// the reference face's plane, on the side away from the reference.
///
/// Returns the rotated surfaces together with the motion that produced
/// them.
pub fn coplanar_rotation(
    consistency: f64,
    rotate: &FaceEntity,
    reference: &FaceEntity,
    hinge: &EdgeEntity,
) -> (Vec<PlanarSurface>, Isometry3<f64>) {
    let rot_normal = rotate.normal();
    let ref_normal = reference.normal();

    let axis_vector = ref_normal.cross(&rot_normal);
    let s = axis_vector.norm() * -consistency;
    let c = rot_normal.dot(&ref_normal) * -consistency;
    let angle = std::f64::consts::PI - s.atan2(c);

    // parallel normals leave the axis degenerate; the hinge line itself
    // is the rotation axis then
    let axis = Unit::try_new(axis_vector, TOLERANCE * TOLERANCE)
        .unwrap_or_else(|| Unit::new_normalize(hinge.direction()));

    let rotation = UnitQuaternion::from_axis_angle(&axis, angle);
    let origin = hinge.end;
    let motion = Isometry3::from_parts(
        Translation3::from(origin.coords - rotation * origin.coords),
        rotation,
    );

    let surfaces = rotate
        .surfaces
        .iter()
        .map(|surface| surface.transformed(&motion))
        .collect();
    (surfaces, motion)
}
