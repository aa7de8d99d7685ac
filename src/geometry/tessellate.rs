// SPDX-License-Identifier: Apache-2.0

//! Surface tessellation seam
//!
//! Unfolding only needs triangles, not the surface representation they
//! came from. Curved-surface tessellation lives behind the [`Tessellator`]
//! trait; the built-in [`FanTessellator`] handles the planar polygons this
//! crate produces itself.

use crate::geometry::surface::PlanarSurface;
use nalgebra::Point3;

/// Converts surfaces into triangle soup
pub trait Tessellator {
    /// `tolerance` bounds chordal deviation and `max_grid_lines` caps the
    /// parameter-space grid; planar implementations may ignore both.
    fn triangulate(
        &self,
        surfaces: &[PlanarSurface],
        tolerance: f64,
        max_grid_lines: u32,
    ) -> Vec<[Point3<f64>; 3]>;
}

/// Fan triangulation of planar boundary loops
#[derive(Debug, Default, Clone, Copy)]
pub struct FanTessellator;

impl Tessellator for FanTessellator {
    fn triangulate(
        &self,
        surfaces: &[PlanarSurface],
        _tolerance: f64,
        _max_grid_lines: u32,
    ) -> Vec<[Point3<f64>; 3]> {
        surfaces.iter().flat_map(|s| s.triangles()).collect()
    }
}

/// Tessellate with the default planar tessellator
pub fn tessellate(
    surfaces: &[PlanarSurface],
    tolerance: f64,
    max_grid_lines: u32,
) -> Vec<[Point3<f64>; 3]> {
    tessellate_with(&FanTessellator, surfaces, tolerance, max_grid_lines)
}

/// Tessellate with a caller-supplied tessellator
pub fn tessellate_with<T: Tessellator + ?Sized>(
    tessellator: &T,
    surfaces: &[PlanarSurface],
    tolerance: f64,
    max_grid_lines: u32,
) -> Vec<[Point3<f64>; 3]> {
    tessellator.triangulate(surfaces, tolerance, max_grid_lines)
}

/// Lift triangle soup back into one surface per triangle, dropping
/// degenerate triangles
pub fn surfaces_from_triangles(triangles: &[[Point3<f64>; 3]]) -> Vec<PlanarSurface> {
    triangles
        .iter()
        .filter_map(PlanarSurface::from_triangle)
        .collect()
}
