// SPDX-License-Identifier: Apache-2.0

//! Coplanar overlap detection for fold-state probing
//!
//! After a trial rotation, the candidate branch lies in the same plane as
//! the surfaces already placed there. The merge decision needs to know
//! whether the branch claims any interior area that is already taken.
//! Sharing the hinge edge (or any boundary contact) is expected and must
//! NOT count as overlap, so every test here is strict-interior.

use crate::geometry::surface::{PlanarSurface, Transformable};
use nalgebra::{Point2, Point3, Vector3};
use rayon::prelude::*;

/// Tolerance for the strict-interior 2-D predicates
const EPS: f64 = 1e-6;

/// Result of probing a candidate placement against occupied area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapOutcome {
    /// Interiors are disjoint; the merge may proceed
    NoOverlap,
    /// Interiors intersect
    Overlap,
    /// The probe could not be evaluated (non-finite geometry)
    Indeterminate,
}

impl OverlapOutcome {
    /// Whether this outcome forbids merging. `Indeterminate` blocks,
    /// failing safe toward an extra island rather than a bad layout.
    pub fn blocks_merge(&self) -> bool {
        !matches!(self, OverlapOutcome::NoOverlap)
    }
}

/// Probe a candidate surface group against already-placed surfaces.
///
/// Every candidate/placed pair is tested independently; the scan runs in
/// parallel and stops at the first blocking pair.
pub fn surfaces_overlap(candidate: &[PlanarSurface], placed: &[PlanarSurface]) -> OverlapOutcome {
    candidate
        .par_iter()
        .flat_map_iter(|c| placed.iter().map(move |p| (c, p)))
        .map(|(c, p)| surface_pair_overlap(c, p))
        .find_any(OverlapOutcome::blocks_merge)
        .unwrap_or(OverlapOutcome::NoOverlap)
}

/// Strict-interior overlap between two coplanar surfaces
pub fn surface_pair_overlap(a: &PlanarSurface, b: &PlanarSurface) -> OverlapOutcome {
    if !is_finite(a) || !is_finite(b) {
        return OverlapOutcome::Indeterminate;
    }
    if !a.bounding_box().intersects(&b.bounding_box()) {
        return OverlapOutcome::NoOverlap;
    }

    // both lie in one plane; project onto a 2-D basis of that plane
    let normal = a.normal();
    let (u, v) = plane_basis(&normal);
    let origin = a.polygon_center();
    let project = |p: &Point3<f64>| -> Point2<f64> {
        let d = p - origin;
        Point2::new(d.dot(&u), d.dot(&v))
    };

    let tris_a: Vec<[Point2<f64>; 3]> = a
        .triangles()
        .iter()
        .map(|t| [project(&t[0]), project(&t[1]), project(&t[2])])
        .collect();
    let tris_b: Vec<[Point2<f64>; 3]> = b
        .triangles()
        .iter()
        .map(|t| [project(&t[0]), project(&t[1]), project(&t[2])])
        .collect();

    for ta in &tris_a {
        for tb in &tris_b {
            if triangles_overlap_2d(ta, tb) {
                return OverlapOutcome::Overlap;
            }
        }
    }
    OverlapOutcome::NoOverlap
}

fn is_finite(surface: &PlanarSurface) -> bool {
    surface
        .boundary()
        .iter()
        .all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite())
}

/// Orthonormal in-plane basis for a unit normal
fn plane_basis(normal: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>) {
    let helper = if normal.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let u = normal.cross(&helper).normalize();
    let v = normal.cross(&u);
    (u, v)
}

fn cross_2d(o: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Strictly inside: on boundary does not count
fn point_strictly_in_triangle(p: &Point2<f64>, tri: &[Point2<f64>; 3]) -> bool {
    let d1 = cross_2d(&tri[0], &tri[1], p);
    let d2 = cross_2d(&tri[1], &tri[2], p);
    let d3 = cross_2d(&tri[2], &tri[0], p);
    (d1 > EPS && d2 > EPS && d3 > EPS) || (d1 < -EPS && d2 < -EPS && d3 < -EPS)
}

/// Proper crossing only; touching or collinear overlap does not count
fn segments_cross_2d(
    a1: &Point2<f64>,
    a2: &Point2<f64>,
    b1: &Point2<f64>,
    b2: &Point2<f64>,
) -> bool {
    let d1 = cross_2d(b1, b2, a1);
    let d2 = cross_2d(b1, b2, a2);
    let d3 = cross_2d(a1, a2, b1);
    let d4 = cross_2d(a1, a2, b2);
    d1 * d2 < -EPS && d3 * d4 < -EPS
}

fn centroid(tri: &[Point2<f64>; 3]) -> Point2<f64> {
    Point2::new(
        (tri[0].x + tri[1].x + tri[2].x) / 3.0,
        (tri[0].y + tri[1].y + tri[2].y) / 3.0,
    )
}

/// Interior overlap between two triangles
fn triangles_overlap_2d(a: &[Point2<f64>; 3], b: &[Point2<f64>; 3]) -> bool {
    for p in a {
        if point_strictly_in_triangle(p, b) {
            return true;
        }
    }
    for p in b {
        if point_strictly_in_triangle(p, a) {
            return true;
        }
    }
    for i in 0..3 {
        for j in 0..3 {
            if segments_cross_2d(&a[i], &a[(i + 1) % 3], &b[j], &b[(j + 1) % 3]) {
                return true;
            }
        }
    }
    // containment with all vertices on edges falls through to centroids
    point_strictly_in_triangle(&centroid(a), b) || point_strictly_in_triangle(&centroid(b), a)
}
