//! In-memory skin binding

use super::SkinSource;
use crate::skin::BoneInfluence;

/// Bone influences per control point, in the order they were added
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkinBinding {
    bone_count: u32,
    influences: Vec<Vec<BoneInfluence>>,
}

impl SkinBinding {
    pub fn new(bone_count: u32, control_point_count: usize) -> Self {
        Self {
            bone_count,
            influences: vec![Vec::new(); control_point_count],
        }
    }

    /// Append an influence, growing the table if the control point is new
    pub fn add_influence(&mut self, control_point: usize, bone: u32, weight: f32) {
        if control_point >= self.influences.len() {
            self.influences.resize_with(control_point + 1, Vec::new);
        }
        self.influences[control_point].push(BoneInfluence::new(bone, weight));
    }
}

impl SkinSource for SkinBinding {
    fn bone_count(&self) -> u32 {
        self.bone_count
    }

    fn influences(&self, control_point: usize) -> &[BoneInfluence] {
        self.influences
            .get(control_point)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
