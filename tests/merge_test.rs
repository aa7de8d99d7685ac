// SPDX-License-Identifier: Apache-2.0

//! Combining independent unfoldings into one result

mod common;

use anyhow::Result;
use common::{face_strip, unit_cube};
use foldnet::{map_geometry_direct, merge_unfoldings, unfold_surfaces};

#[test]
fn merge_concatenates_and_offsets() -> Result<()> {
    let cube = unfold_surfaces(unit_cube())?;
    let strip = unfold_surfaces(face_strip(3))?;
    let cube_records = cube.records.len();
    let strip_records = strip.records.len();

    let merged = merge_unfoldings(vec![cube, strip]);

    assert_eq!(merged.face_count(), 9);
    assert_eq!(merged.island_count(), 2);
    assert_eq!(merged.records.len(), cube_records + strip_records);

    // ids are renumbered without collisions
    let mut ids: Vec<usize> = merged.starting_faces.iter().map(|f| f.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..9).collect::<Vec<_>>());

    // strip face 0 is now id 6 and still has a replayable chain
    let face = &merged.starting_faces[6];
    assert_eq!(face.id, 6);
    let mapped = map_geometry_direct(&merged, &[face.representative().clone()], 6)?;
    assert_eq!(mapped.len(), 1);

    // merged results drop the graph
    assert!(merged.original_graph.is_none());
    Ok(())
}

#[test]
fn merge_preserves_island_geometry() -> Result<()> {
    let a = unfold_surfaces(face_strip(2))?;
    let b = unfold_surfaces(face_strip(4))?;
    let flat_a = a.flattened.clone();
    let flat_b = b.flattened.clone();

    let merged = merge_unfoldings(vec![a, b]);
    assert_eq!(merged.flattened.len(), 2);
    assert_eq!(merged.flattened[0].len(), flat_a[0].len());
    assert_eq!(merged.flattened[1].len(), flat_b[0].len());
    Ok(())
}

#[test]
fn merging_one_unfolding_is_identity_shaped() -> Result<()> {
    let cube = unfold_surfaces(unit_cube())?;
    let faces = cube.face_count();
    let records = cube.records.len();

    let merged = merge_unfoldings(vec![cube]);
    assert_eq!(merged.face_count(), faces);
    assert_eq!(merged.records.len(), records);
    let ids: Vec<usize> = merged.starting_faces.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    Ok(())
}
