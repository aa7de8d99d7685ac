// SPDX-License-Identifier: Apache-2.0

//! Sheet layout: flattening islands onto z = 0 and packing them
//!
//! Unfolded islands each lie in their own plane somewhere in space. For
//! fabrication they are first rotated down onto the z = 0 plane (keeping
//! the x, y of their representative center), then placed onto a sheet by
//! a [`BinPacker`]. Both motions are recorded, so mapped geometry
//! follows its island onto the sheet.

use crate::error::{Error, Result};
use crate::geometry::bbox::BoundingBox;
use crate::geometry::rotation_to_z;
use crate::topology::face::FaceEntity;
use crate::unfold::record::{TransformRecord, UnfoldingResult};
use log::debug;
use nalgebra::{Isometry3, Point2, Point3, Translation3, Vector3};

/// 2-D footprint of one island
#[derive(Debug, Clone, Copy)]
pub struct Extent2 {
    pub width: f64,
    pub height: f64,
}

/// Places rectangles on a sheet.
///
/// Returns the center position for each extent it managed to place, in
/// input order. Returning fewer placements than extents signals that
/// the sheet ran out of room; the caller decides whether that is fatal.
pub trait BinPacker {
    fn pack(&self, extents: &[Extent2], width: f64, height: f64, gap: f64) -> Vec<Point2<f64>>;
}

/// First-fit shelf packer: fills rows left to right in input order,
/// opening a new row when the current one is full
#[derive(Debug, Default, Clone, Copy)]
pub struct ShelfPacker;

impl BinPacker for ShelfPacker {
    fn pack(&self, extents: &[Extent2], width: f64, height: f64, gap: f64) -> Vec<Point2<f64>> {
        let mut placements = Vec::new();
        let mut x = gap;
        let mut y = gap;
        let mut row_height = 0.0_f64;

        for extent in extents {
            if x + extent.width + gap > width && x > gap {
                x = gap;
                y += row_height + gap;
                row_height = 0.0;
            }
            if x + extent.width + gap > width || y + extent.height + gap > height {
                break;
            }
            placements.push(Point2::new(x + extent.width / 2.0, y + extent.height / 2.0));
            x += extent.width + gap;
            row_height = row_height.max(extent.height);
        }
        placements
    }
}

/// Rigid motion laying `state`'s plane onto z = 0, keeping the x, y of
/// its representative center
fn flatten_motion(state: &FaceEntity) -> Isometry3<f64> {
    let center = state.polygon_center();
    let rotation = rotation_to_z(&state.normal());
    let target = Point3::new(center.x, center.y, 0.0);
    Isometry3::from_parts(
        Translation3::from(target.coords - rotation * center.coords),
        rotation,
    )
}

fn island_bbox(state: &FaceEntity) -> BoundingBox {
    let mut bbox = BoundingBox::empty();
    for surface in &state.surfaces {
        for p in surface.boundary() {
            bbox.expand_to_include(p);
        }
    }
    bbox
}

/// Pack with the built-in shelf packer
pub fn pack(
    unfolding: &UnfoldingResult,
    width: f64,
    height: f64,
    gap: f64,
) -> Result<UnfoldingResult> {
    pack_with(&ShelfPacker, unfolding, width, height, gap)
}

/// Flatten every island onto z = 0, delegate placement to `packer` and
/// translate each island to its spot.
///
/// The returned result carries the full record history: the original
/// fold records, one flatten record per island, one placement record per
/// island. Fails with [`Error::SheetTooSmall`] when the packer cannot
/// place every island; nothing is silently dropped.
pub fn pack_with<P: BinPacker + ?Sized>(
    packer: &P,
    unfolding: &UnfoldingResult,
    width: f64,
    height: f64,
    gap: f64,
) -> Result<UnfoldingResult> {
    let mut states: Vec<FaceEntity> = unfolding.unfolded_faces.clone();
    let mut records = unfolding.records.clone();

    for state in &mut states {
        let motion = flatten_motion(state);
        for surface in &mut state.surfaces {
            *surface = surface.transformed(&motion);
        }
        records.push(TransformRecord::new(motion, state.ids.clone()));
    }

    let boxes: Vec<BoundingBox> = states.iter().map(island_bbox).collect();
    let extents: Vec<Extent2> = boxes
        .iter()
        .map(|b| Extent2 {
            width: b.size().x,
            height: b.size().y,
        })
        .collect();

    let placements = packer.pack(&extents, width, height, gap);
    if placements.len() < states.len() {
        return Err(Error::SheetTooSmall {
            islands: states.len(),
            placed: placements.len(),
        });
    }
    debug!(
        "packed {} islands onto {} x {} sheet",
        placements.len(),
        width,
        height
    );

    for ((state, bbox), place) in states.iter_mut().zip(&boxes).zip(&placements) {
        let center = bbox.center();
        let offset = Vector3::new(place.x - center.x, place.y - center.y, 0.0);
        let motion = Isometry3::translation(offset.x, offset.y, offset.z);
        for surface in &mut state.surfaces {
            *surface = surface.transformed(&motion);
        }
        records.push(TransformRecord::new(motion, state.ids.clone()));
    }

    let flattened = states.iter().map(|s| s.surfaces.clone()).collect();
    Ok(UnfoldingResult::new(
        unfolding.starting_faces.clone(),
        flattened,
        records,
        states,
        unfolding.original_graph.clone(),
    ))
}
