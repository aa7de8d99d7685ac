// SPDX-License-Identifier: Apache-2.0

//! Fold engine, alignment math, transform records and replay

pub mod align;
pub mod engine;
pub mod mapper;
pub mod record;

pub use engine::planar_unfold;
pub use mapper::{map_geometry_direct, map_geometry_fresh};
pub use record::{merge_unfoldings, TransformRecord, UnfoldingResult};
