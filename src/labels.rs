// SPDX-License-Identifier: Apache-2.0

//! Face-id labels on the flattened layout
//!
//! Each face gets its id rendered as stroke geometry, aligned onto the
//! face at its starting placement, and replayed through the face's
//! motion chain so the label lands on the right spot of the net. The
//! aligned strokes are what gets replayed; raw strokes drawn in the XY
//! plane would tilt out of a side face's plane during the folds.

use crate::error::Result;
use crate::geometry::text::{GlyphSource, SegmentFont};
use crate::geometry::{rotation_from_z, Polyline, Transformable};
use crate::geometry::bbox::BoundingBox;
use crate::unfold::mapper::map_geometry_fresh;
use crate::unfold::record::UnfoldingResult;
use nalgebra::{Isometry3, Translation3};

pub const DEFAULT_LABEL_SCALE: f64 = 1.0;

/// Label geometry for one face at each stage of its journey
#[derive(Debug, Clone)]
pub struct FaceLabel {
    pub id: usize,
    pub text: String,
    /// Strokes as the glyph source produced them, in the XY plane
    pub raw: Vec<Polyline>,
    /// Strokes centered on the face at its starting placement
    pub aligned: Vec<Polyline>,
    /// Strokes on the flattened layout
    pub flattened: Vec<Polyline>,
}

/// Generate labels with the built-in segment font at the default scale
pub fn generate_labels(unfolding: &UnfoldingResult) -> Result<Vec<FaceLabel>> {
    generate_labels_with(unfolding, &SegmentFont, DEFAULT_LABEL_SCALE)
}

/// Generate one label per starting face
pub fn generate_labels_with<G: GlyphSource + ?Sized>(
    unfolding: &UnfoldingResult,
    glyphs: &G,
    scale: f64,
) -> Result<Vec<FaceLabel>> {
    unfolding
        .starting_faces
        .iter()
        .map(|face| {
            let text = face.id.to_string();
            let raw = glyphs.strokes(&text, scale);
            let aligned = align_to_face(&raw, face.polygon_center(), &face.normal());
            let flattened = map_geometry_fresh(unfolding, &aligned, face.id)?;
            Ok(FaceLabel {
                id: face.id,
                text,
                raw,
                aligned,
                flattened,
            })
        })
        .collect()
}

/// Center the strokes on the origin, then carry them into the face's
/// plane at its center
fn align_to_face(
    raw: &[Polyline],
    center: nalgebra::Point3<f64>,
    normal: &nalgebra::Vector3<f64>,
) -> Vec<Polyline> {
    if raw.is_empty() {
        return Vec::new();
    }
    let mut bbox = BoundingBox::empty();
    for stroke in raw {
        bbox = bbox.union(&stroke.bounding_box());
    }
    let recenter = Isometry3::translation(
        -bbox.center().x,
        -bbox.center().y,
        -bbox.center().z,
    );
    let onto_face = Isometry3::from_parts(
        Translation3::from(center.coords),
        rotation_from_z(normal),
    );
    raw.iter()
        .map(|stroke| {
            let mut moved = stroke.clone();
            moved.apply(&recenter);
            moved.apply(&onto_face);
            moved
        })
        .collect()
}
