// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for the integration suites

use foldnet::PlanarSurface;
use nalgebra::Point3;

fn surface(points: &[[f64; 3]]) -> PlanarSurface {
    PlanarSurface::new(
        points
            .iter()
            .map(|p| Point3::new(p[0], p[1], p[2]))
            .collect(),
    )
    .expect("fixture surface is non-degenerate")
}

/// Unit cube faces, each wound for an outward normal
pub fn unit_cube() -> Vec<PlanarSurface> {
    vec![
        // bottom, normal -z
        surface(&[[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [1.0, 0.0, 0.0]]),
        // top, normal +z
        surface(&[[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]]),
        // x = 0, normal -x
        surface(&[[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]]),
        // x = 1, normal +x
        surface(&[[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]]),
        // y = 0, normal -y
        surface(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]]),
        // y = 1, normal +y
        surface(&[[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]]),
    ]
}

/// A row of `n` coplanar unit squares sharing vertical edges
#[allow(dead_code)]
pub fn face_strip(n: usize) -> Vec<PlanarSurface> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            surface(&[
                [x, 0.0, 0.0],
                [x + 1.0, 0.0, 0.0],
                [x + 1.0, 1.0, 0.0],
                [x, 1.0, 0.0],
            ])
        })
        .collect()
}
