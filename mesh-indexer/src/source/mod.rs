//! Collaborator seams feeding the indexer
//!
//! The indexer never walks a scene graph itself. A [`GeometrySource`] hands it
//! fully resolved per-corner attributes (axis flips and mapping/reference
//! modes already applied), and an optional [`SkinSource`] hands it bone
//! influences per control point.
//!
//! [`IndexedSoup`] and [`SkinBinding`] are in-memory implementations of both.

mod binding;
mod layer;
mod soup;

pub use binding::SkinBinding;
pub use layer::{LayerElement, MappingMode, ReferenceMode};
pub use soup::{IndexedSoup, MaterialMapping};

use anyhow::Result;

use crate::mesh::Channels;
use crate::skin::BoneInfluence;
use crate::vertex::VertexAttributes;

/// One resolved polygon corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    /// Control point the corner references (used for skin lookups)
    pub control_point: usize,
    pub attributes: VertexAttributes,
}

/// Triangulated geometry with resolved per-corner attributes
pub trait GeometrySource {
    /// Number of triangles
    fn polygon_count(&self) -> usize;

    /// Declared material slots (0 is treated as one slot)
    fn material_count(&self) -> usize;

    /// Declared attribute channels. The skin flag is ignored; skinning is on
    /// whenever a [`SkinSource`] is supplied.
    fn channels(&self) -> Channels;

    /// Material slot of a polygon
    fn polygon_material(&self, polygon: usize) -> Result<u32>;

    /// Corner `corner` (0..3) of a polygon
    fn corner(&self, polygon: usize, corner: usize) -> Result<Corner>;
}

/// Per-control-point bone influences from a skin deformer
pub trait SkinSource {
    /// Total bone count, also used as the "unused slot" sentinel bone index
    fn bone_count(&self) -> u32;

    /// Ordered influences on a control point (may be empty)
    fn influences(&self, control_point: usize) -> &[BoneInfluence];
}
