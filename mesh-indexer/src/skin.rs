//! Skin influence packing
//!
//! Per vertex, up to [`MAX_INFLUENCES`] (bone, weight) pairs are stored as:
//! - one u32 word of four byte-sized bone indices: `b3 << 24 | b2 << 16 | b1 << 8 | b0`
//! - one weight vector `[w0, w1, w2, 1 - w0 - w1 - w2]`
//!
//! The fourth weight is always derived from the first three so the weights
//! close to 1.0. A fourth weight supplied by the source is discarded.

use crate::error::MeshError;

/// Influences kept per vertex
pub const MAX_INFLUENCES: usize = 4;

/// Maximum bone index for u8 storage (255)
pub const MAX_PACKED_BONE: u32 = u8::MAX as u32;

/// One bone influence on a control point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoneInfluence {
    pub bone: u32,
    pub weight: f32,
}

impl BoneInfluence {
    pub fn new(bone: u32, weight: f32) -> Self {
        Self { bone, weight }
    }
}

/// Packed per-vertex skin data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackedSkin {
    pub indices: u32,
    pub weights: [f32; 4],
}

/// Fill the four influence slots from a control point's influence list
///
/// Takes the first four influences in provider order. Unused slots get the
/// sentinel bone `bone_count` with weight 0.
pub fn pad_influences(influences: &[BoneInfluence], bone_count: u32) -> ([u32; 4], [f32; 4]) {
    let mut bones = [bone_count; MAX_INFLUENCES];
    let mut weights = [0.0; MAX_INFLUENCES];
    for (slot, influence) in influences.iter().take(MAX_INFLUENCES).enumerate() {
        bones[slot] = influence.bone;
        weights[slot] = influence.weight;
    }
    (bones, weights)
}

/// Check every bone index fits one byte
pub fn validate_bone_indices(bones: &[u32; 4]) -> Result<(), MeshError> {
    match bones.iter().position(|&b| b > MAX_PACKED_BONE) {
        Some(slot) => Err(MeshError::BoneIndexOverflow {
            bone: bones[slot],
            slot,
        }),
        None => Ok(()),
    }
}

/// Pack four bone indices into one word, rejecting indices above 255
pub fn pack_bone_indices(bones: [u32; 4]) -> Result<u32, MeshError> {
    validate_bone_indices(&bones)?;
    Ok(pack_bone_word(bones))
}

/// Pack indices already checked by [`validate_bone_indices`]
pub(crate) fn pack_bone_word(bones: [u32; 4]) -> u32 {
    debug_assert!(bones.iter().all(|&b| b <= MAX_PACKED_BONE));
    (bones[3] << 24) | (bones[2] << 16) | (bones[1] << 8) | bones[0]
}

/// Derive the fourth weight so the vector sums to 1.0
#[inline]
pub fn pack_bone_weights(weights: [f32; 4]) -> [f32; 4] {
    let [w0, w1, w2, _] = weights;
    [w0, w1, w2, 1.0 - w0 - w1 - w2]
}

/// Pad, validate and pack one control point's influences
pub fn pack_skin(influences: &[BoneInfluence], bone_count: u32) -> Result<PackedSkin, MeshError> {
    let (bones, weights) = pad_influences(influences, bone_count);
    Ok(PackedSkin {
        indices: pack_bone_indices(bones)?,
        weights: pack_bone_weights(weights),
    })
}
