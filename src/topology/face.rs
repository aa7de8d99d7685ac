// SPDX-License-Identifier: Apache-2.0

//! Face inputs and the fold-state entity
//!
//! `Face` is the input adapter: a planar surface plus the boundary edges
//! the host model reports for it. `FaceEntity` is what the unfolder works
//! on; after merges it represents a whole coplanar group, carrying every
//! surface and the ordered id set of the faces it absorbed.

use crate::error::{Error, Result};
use crate::geometry::{sort_into_loop, EdgeEntity, PlanarSurface};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A solid face handed in by the caller
#[derive(Debug, Clone)]
pub struct Face {
    pub surface: PlanarSurface,
    pub edges: Vec<EdgeEntity>,
}

impl Face {
    pub fn new(surface: PlanarSurface, edges: Vec<EdgeEntity>) -> Self {
        Self { surface, edges }
    }

    /// Bare surface input; boundary edges come from the perimeter
    pub fn from_surface(surface: PlanarSurface) -> Self {
        let edges = surface.perimeter_edges();
        Self { surface, edges }
    }

    /// Build a face from unordered boundary edges by chaining them into
    /// a contiguous loop first. Fails when the edges do not close into a
    /// usable polygon.
    pub fn from_boundary_edges(edges: Vec<EdgeEntity>) -> Result<Self> {
        let sorted = sort_into_loop(&edges)?;
        let boundary: Vec<Point3<f64>> = sorted.iter().map(|e| e.start).collect();
        let surface = PlanarSurface::new(boundary).ok_or(Error::NonContiguousBoundary)?;
        Ok(Self {
            surface,
            edges: sorted,
        })
    }
}

/// A face (or merged group of faces) as tracked through the unfolding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceEntity {
    /// Id of the face this entity started as
    pub id: usize,
    /// Ordered id set of every face merged into this entity, beginning
    /// with `id` itself
    pub ids: Vec<usize>,
    /// Surfaces of the group, representative first, append-only
    pub surfaces: Vec<PlanarSurface>,
    /// Boundary edges of every member surface
    pub edges: Vec<EdgeEntity>,
}

impl FaceEntity {
    pub fn new(id: usize, face: Face) -> Self {
        Self {
            id,
            ids: vec![id],
            edges: face.edges,
            surfaces: vec![face.surface],
        }
    }

    /// Build a merged group entity; edges are recomputed from the member
    /// surfaces' perimeters
    pub fn composite(id: usize, ids: Vec<usize>, surfaces: Vec<PlanarSurface>) -> Self {
        let edges = surfaces.iter().flat_map(|s| s.perimeter_edges()).collect();
        Self {
            id,
            ids,
            surfaces,
            edges,
        }
    }

    /// The surface this entity started as
    pub fn representative(&self) -> &PlanarSurface {
        &self.surfaces[0]
    }

    pub fn normal(&self) -> Vector3<f64> {
        self.representative().normal()
    }

    pub fn polygon_center(&self) -> Point3<f64> {
        self.representative().polygon_center()
    }
}

/// Order-preserving set union on id lists
pub fn union_ids(into: &mut Vec<usize>, from: &[usize]) {
    for &id in from {
        if !into.contains(&id) {
            into.push(id);
        }
    }
}

/// Assign sequential ids to usable faces. Degenerate faces were already
/// filtered out at surface construction.
pub fn entities_from_faces(faces: Vec<Face>) -> Vec<FaceEntity> {
    faces
        .into_iter()
        .enumerate()
        .map(|(id, face)| FaceEntity::new(id, face))
        .collect()
}

/// Assign sequential ids to bare surfaces
pub fn entities_from_surfaces(surfaces: Vec<PlanarSurface>) -> Vec<FaceEntity> {
    entities_from_faces(surfaces.into_iter().map(Face::from_surface).collect())
}
