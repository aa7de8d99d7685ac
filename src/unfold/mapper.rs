// SPDX-License-Identifier: Apache-2.0

//! Replaying recorded fold motions onto arbitrary geometry
//!
//! Anything `Transformable` can ride along with a face: replay the
//! records whose id set contains that face and the geometry lands where
//! the face landed. "Direct" replay assumes the geometry already sits at
//! the face's starting placement; "fresh" replay first centers it on the
//! face's recorded starting center.

use crate::error::Result;
use crate::geometry::bbox::BoundingBox;
use crate::geometry::surface::Transformable;
use crate::unfold::record::UnfoldingResult;
use nalgebra::Isometry3;

/// Replay the motion chain of `id` onto geometry already positioned at
/// the face's starting placement
pub fn map_geometry_direct<G: Transformable + Clone>(
    unfolding: &UnfoldingResult,
    geometry: &[G],
    id: usize,
) -> Result<Vec<G>> {
    let chain = unfolding.records_for(id)?;
    Ok(geometry
        .iter()
        .map(|item| {
            let mut moved = item.clone();
            for record in &chain {
                moved.apply(&record.motion);
            }
            moved
        })
        .collect())
}

/// Center fresh geometry on the face's starting center, then replay the
/// motion chain of `id`
pub fn map_geometry_fresh<G: Transformable + Clone>(
    unfolding: &UnfoldingResult,
    geometry: &[G],
    id: usize,
) -> Result<Vec<G>> {
    let chain = unfolding.records_for(id)?;
    if geometry.is_empty() {
        return Ok(Vec::new());
    }

    let mut bbox = BoundingBox::empty();
    for item in geometry {
        bbox = bbox.union(&item.bounding_box());
    }
    let offset = unfolding.starting_centers[&id] - bbox.center();
    let pre = Isometry3::translation(offset.x, offset.y, offset.z);

    Ok(geometry
        .iter()
        .map(|item| {
            let mut moved = item.clone();
            moved.apply(&pre);
            for record in &chain {
                moved.apply(&record.motion);
            }
            moved
        })
        .collect())
}
