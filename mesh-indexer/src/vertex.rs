//! Per-corner vertex attributes and the composite welding key
//!
//! A [`VertexKey`] compares every attribute exactly, in a fixed field order:
//! position → normal → uv → uv2 → color → bone indices → bone weights.
//! There is no epsilon. Two corners weld only if every component matches.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Full attribute set of one polygon corner
///
/// Channels the source mesh does not declare are left at their zero default.
/// Bone indices and weights stay all-zero when the mesh has no skin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VertexAttributes {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub uv2: [f32; 2],
    /// RGBA
    pub color: [f32; 4],
    pub bone_indices: [u32; 4],
    pub bone_weights: [f32; 4],
}

impl VertexAttributes {
    /// Corner with only a position set
    pub fn at(position: [f32; 3]) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_normal(mut self, normal: [f32; 3]) -> Self {
        self.normal = normal;
        self
    }

    pub fn with_uv(mut self, uv: [f32; 2]) -> Self {
        self.uv = uv;
        self
    }

    pub fn with_uv2(mut self, uv2: [f32; 2]) -> Self {
        self.uv2 = uv2;
        self
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn with_skin(mut self, bone_indices: [u32; 4], bone_weights: [f32; 4]) -> Self {
        self.bone_indices = bone_indices;
        self.bone_weights = bone_weights;
        self
    }
}

/// Immutable, totally ordered welding key built from [`VertexAttributes`]
///
/// Floats are compared with [`f32::total_cmp`] after folding `-0.0` into `0.0`,
/// so keys that compare numerically equal also hash equal. NaN components
/// only match a NaN with the same bit pattern.
#[derive(Debug, Clone, Copy)]
pub struct VertexKey(VertexAttributes);

impl VertexKey {
    pub fn new(attributes: VertexAttributes) -> Self {
        let mut a = attributes;
        canonicalize(&mut a.position);
        canonicalize(&mut a.normal);
        canonicalize(&mut a.uv);
        canonicalize(&mut a.uv2);
        canonicalize(&mut a.color);
        canonicalize(&mut a.bone_weights);
        Self(a)
    }

    /// Attributes as stored in the key (signed zeros folded)
    pub fn attributes(&self) -> &VertexAttributes {
        &self.0
    }
}

impl From<VertexAttributes> for VertexKey {
    fn from(attributes: VertexAttributes) -> Self {
        Self::new(attributes)
    }
}

fn canonicalize(values: &mut [f32]) {
    for v in values {
        if *v == 0.0 {
            *v = 0.0;
        }
    }
}

fn cmp_floats(a: &[f32], b: &[f32]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.total_cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn hash_floats<H: Hasher>(values: &[f32], state: &mut H) {
    for v in values {
        state.write_u32(v.to_bits());
    }
}

impl Ord for VertexKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (&self.0, &other.0);
        cmp_floats(&a.position, &b.position)
            .then_with(|| cmp_floats(&a.normal, &b.normal))
            .then_with(|| cmp_floats(&a.uv, &b.uv))
            .then_with(|| cmp_floats(&a.uv2, &b.uv2))
            .then_with(|| cmp_floats(&a.color, &b.color))
            .then_with(|| a.bone_indices.cmp(&b.bone_indices))
            .then_with(|| cmp_floats(&a.bone_weights, &b.bone_weights))
    }
}

impl PartialOrd for VertexKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VertexKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VertexKey {}

impl Hash for VertexKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let a = &self.0;
        hash_floats(&a.position, state);
        hash_floats(&a.normal, state);
        hash_floats(&a.uv, state);
        hash_floats(&a.uv2, state);
        hash_floats(&a.color, state);
        a.bone_indices.hash(state);
        hash_floats(&a.bone_weights, state);
    }
}
