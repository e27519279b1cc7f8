//! Error types for mesh indexing

use thiserror::Error;

/// Errors raised while welding, packing or reading mesh data
#[derive(Error, Debug)]
pub enum MeshError {
    /// A bone index (or the padding sentinel) does not fit the 8-bit pack slot.
    #[error(
        "Bone index {bone} in influence slot {slot} exceeds maximum {max} for u8 storage. \
        Reduce skeleton bone count to 255 or fewer.",
        max = crate::skin::MAX_PACKED_BONE
    )]
    BoneIndexOverflow { bone: u32, slot: usize },

    #[error("Material slot {material} out of range (mesh has {slots} slots)")]
    MaterialOutOfRange { material: u32, slots: usize },

    /// A triangle references a local vertex its submesh never welded.
    #[error("Vertex index {index} out of range in material {material} (submesh has {len} vertices)")]
    VertexOutOfRange { material: u32, index: u32, len: usize },

    /// Layer element lookup fell outside its index or direct array.
    #[error("{channel} lookup index {index} out of range (length {len})")]
    AttributeOutOfRange {
        channel: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}
