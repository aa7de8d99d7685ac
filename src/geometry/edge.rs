// SPDX-License-Identifier: Apache-2.0

//! Boundary edge entities with spatial equality
//!
//! Two faces of a solid each carry their own boundary curve along a shared
//! edge; the curves are distinct objects but geometrically coincident. All
//! edge comparison here is therefore spatial (within [`TOLERANCE`]) and
//! direction-independent, never identity-based.

use crate::error::{Error, Result};
use crate::geometry::TOLERANCE;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A straight boundary curve between two endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeEntity {
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

/// Hashable key identifying an edge by its quantized endpoint positions.
///
/// Endpoints are snapped onto a `TOLERANCE`-sized grid and sorted, so the
/// reversed twin of an edge maps to the same key and can be used to
/// deduplicate shared physical edges in hash maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpatialEdgeKey {
    a: (i64, i64, i64),
    b: (i64, i64, i64),
}

fn quantize(point: &Point3<f64>) -> (i64, i64, i64) {
    (
        (point.x / TOLERANCE).round() as i64,
        (point.y / TOLERANCE).round() as i64,
        (point.z / TOLERANCE).round() as i64,
    )
}

pub(crate) fn points_coincide(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    (a - b).norm() < TOLERANCE
}

impl EdgeEntity {
    pub fn new(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self { start, end }
    }

    pub fn direction(&self) -> Vector3<f64> {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    pub fn midpoint(&self) -> Point3<f64> {
        self.point_at(0.5)
    }

    /// Point at normalized parameter `t` in [0, 1]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.start + self.direction() * t
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }

    /// Geometric coincidence within tolerance, independent of direction
    pub fn spatially_equals(&self, other: &EdgeEntity) -> bool {
        (points_coincide(&self.start, &other.start) && points_coincide(&self.end, &other.end))
            || (points_coincide(&self.start, &other.end)
                && points_coincide(&self.end, &other.start))
    }

    /// Direction-independent hash key for spatial deduplication
    pub fn spatial_key(&self) -> SpatialEdgeKey {
        let s = quantize(&self.start);
        let e = quantize(&self.end);
        if s <= e {
            SpatialEdgeKey { a: s, b: e }
        } else {
            SpatialEdgeKey { a: e, b: s }
        }
    }

    /// Check whether either endpoint coincides with `point`
    pub fn touches(&self, point: &Point3<f64>) -> bool {
        points_coincide(&self.start, point) || points_coincide(&self.end, point)
    }
}

/// Reorder (and reorient) edges into one contiguous loop.
///
/// Walks the list matching each edge's end point to the start point of a
/// following edge, reversing edges as needed. Fails if the edges do not
/// chain up.
pub fn sort_into_loop(edges: &[EdgeEntity]) -> Result<Vec<EdgeEntity>> {
    let mut sorted: Vec<EdgeEntity> = edges.to_vec();
    let n = sorted.len();

    for i in 0..n {
        let end = sorted[i].end;
        let mut found = i + 1 >= n;

        for j in (i + 1)..n {
            if points_coincide(&end, &sorted[j].start) {
                sorted.swap(i + 1, j);
                found = true;
                break;
            }
            if points_coincide(&end, &sorted[j].end) {
                sorted[j] = sorted[j].reversed();
                sorted.swap(i + 1, j);
                found = true;
                break;
            }
        }
        if !found {
            return Err(Error::NonContiguousBoundary);
        }
    }

    // the walk ends where it started for a closed boundary
    if n >= 2 && !points_coincide(&sorted[n - 1].end, &sorted[0].start) {
        return Err(Error::NonContiguousBoundary);
    }
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_spatial_equality_ignores_direction() {
        let e1 = EdgeEntity::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let e2 = EdgeEntity::new(p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0));
        assert!(e1.spatially_equals(&e2));
        assert_eq!(e1.spatial_key(), e2.spatial_key());
    }

    #[test]
    fn test_spatial_equality_within_tolerance() {
        let e1 = EdgeEntity::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let e2 = EdgeEntity::new(p(0.0, 0.00001, 0.0), p(1.0, 0.0, 0.00001));
        let e3 = EdgeEntity::new(p(0.0, 0.01, 0.0), p(1.0, 0.0, 0.0));
        assert!(e1.spatially_equals(&e2));
        assert!(!e1.spatially_equals(&e3));
    }

    #[test]
    fn test_distinct_edges_have_distinct_keys() {
        let e1 = EdgeEntity::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let e2 = EdgeEntity::new(p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0));
        assert_ne!(e1.spatial_key(), e2.spatial_key());
    }

    #[test]
    fn test_sort_into_loop() {
        // square boundary, shuffled and with one edge reversed
        let edges = vec![
            EdgeEntity::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)),
            EdgeEntity::new(p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0)), // reversed
            EdgeEntity::new(p(0.0, 1.0, 0.0), p(0.0, 0.0, 0.0)),
            EdgeEntity::new(p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)),
        ];
        let sorted = sort_into_loop(&edges).unwrap();
        assert_eq!(sorted.len(), 4);
        for i in 0..4 {
            assert!(points_coincide(
                &sorted[i].end,
                &sorted[(i + 1) % 4].start
            ));
        }
    }

    #[test]
    fn test_sort_into_loop_rejects_gaps() {
        let edges = vec![
            EdgeEntity::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)),
            EdgeEntity::new(p(5.0, 5.0, 0.0), p(6.0, 5.0, 0.0)),
        ];
        assert!(sort_into_loop(&edges).is_err());
    }
}
