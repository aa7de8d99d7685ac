// SPDX-License-Identifier: Apache-2.0

//! Planar polygon surfaces and open polylines
//!
//! `PlanarSurface` is the geometric currency of the whole crate: faces,
//! fold states, tabs and flattened layouts are all lists of these. The
//! boundary is an ordered point loop, counter-clockwise with respect to
//! the surface normal.

use crate::geometry::bbox::BoundingBox;
use crate::geometry::edge::EdgeEntity;
use nalgebra::{Isometry3, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Anything that can be carried through a chain of rigid motions
pub trait Transformable {
    fn apply(&mut self, motion: &Isometry3<f64>);
    fn bounding_box(&self) -> BoundingBox;
}

/// A planar polygon defined by its ordered boundary loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanarSurface {
    boundary: Vec<Point3<f64>>,
}

/// Minimum polygon area below which input is considered degenerate
const MIN_AREA: f64 = 1e-10;

impl PlanarSurface {
    /// Build a surface from an ordered boundary loop.
    ///
    /// Returns `None` for degenerate input: fewer than three points,
    /// non-finite coordinates, or near-zero area. Callers skip such
    /// input silently.
    pub fn new(boundary: Vec<Point3<f64>>) -> Option<Self> {
        if boundary.len() < 3 {
            return None;
        }
        if boundary
            .iter()
            .any(|p| !p.x.is_finite() || !p.y.is_finite() || !p.z.is_finite())
        {
            return None;
        }
        let surface = Self { boundary };
        if surface.area() < MIN_AREA {
            return None;
        }
        Some(surface)
    }

    pub fn from_triangle(triangle: &[Point3<f64>; 3]) -> Option<Self> {
        Self::new(triangle.to_vec())
    }

    pub fn boundary(&self) -> &[Point3<f64>] {
        &self.boundary
    }

    /// Newell-method area vector: normal direction scaled by twice the area
    fn area_vector(&self) -> Vector3<f64> {
        let mut v = Vector3::zeros();
        let n = self.boundary.len();
        for i in 0..n {
            let a = &self.boundary[i];
            let b = &self.boundary[(i + 1) % n];
            v.x += (a.y - b.y) * (a.z + b.z);
            v.y += (a.z - b.z) * (a.x + b.x);
            v.z += (a.x - b.x) * (a.y + b.y);
        }
        v
    }

    /// Unit normal, following the boundary winding (right-hand rule)
    pub fn normal(&self) -> Vector3<f64> {
        let v = self.area_vector();
        let norm = v.norm();
        if norm > 0.0 {
            v / norm
        } else {
            Vector3::z()
        }
    }

    pub fn area(&self) -> f64 {
        self.area_vector().norm() / 2.0
    }

    /// Average of the boundary points
    pub fn polygon_center(&self) -> Point3<f64> {
        let sum = self
            .boundary
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p.coords);
        Point3::from(sum / self.boundary.len() as f64)
    }

    /// Boundary edges in winding order
    pub fn perimeter_edges(&self) -> Vec<EdgeEntity> {
        let n = self.boundary.len();
        (0..n)
            .map(|i| EdgeEntity::new(self.boundary[i], self.boundary[(i + 1) % n]))
            .collect()
    }

    /// Fan triangulation from the first boundary point
    pub fn triangles(&self) -> Vec<[Point3<f64>; 3]> {
        let n = self.boundary.len();
        (1..n - 1)
            .map(|i| [self.boundary[0], self.boundary[i], self.boundary[i + 1]])
            .collect()
    }

    pub fn transformed(&self, motion: &Isometry3<f64>) -> Self {
        Self {
            boundary: self.boundary.iter().map(|p| motion * p).collect(),
        }
    }
}

impl Transformable for PlanarSurface {
    fn apply(&mut self, motion: &Isometry3<f64>) {
        for p in &mut self.boundary {
            *p = motion * *p;
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.boundary)
    }
}

/// An open curve, used for label strokes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point3<f64>>,
}

impl Polyline {
    pub fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }
}

impl Transformable for Polyline {
    fn apply(&mut self, motion: &Isometry3<f64>) {
        for p in &mut self.points {
            *p = motion * *p;
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.points)
    }
}
