// SPDX-License-Identifier: Apache-2.0

//! Crate error type

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The fold tree names a parent-child pair with no shared hinge edge.
    #[error("no hinge edge between face {child} and its parent {parent}")]
    MissingHinge { child: usize, parent: usize },

    /// A face boundary has no adjacent edge at the hinge start point.
    #[error("face {face} has a broken boundary loop at the fold hinge")]
    BrokenBoundary { face: usize },

    /// Perimeter edges do not chain into a single closed loop.
    #[error("boundary edges do not form a contiguous closed loop")]
    NonContiguousBoundary,

    /// No transform record mentions the requested face id.
    #[error("face id {0} is not part of this unfolding")]
    UnknownFaceId(usize),

    /// The bin packer could not place every island on the sheet.
    #[error("sheet too small: placed {placed} of {islands} islands")]
    SheetTooSmall { islands: usize, placed: usize },

    /// The result carries no adjacency graph (merged results drop it).
    #[error("no topology available for this result")]
    NoTopology,
}
