//! Types shared by the mesh builder and flattener

use serde::Serialize;

/// Attribute channels the source mesh declares
///
/// Positions are always present. A channel that is off is emitted as an
/// empty array, never a partially filled one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Channels {
    pub normals: bool,
    pub uvs: bool,
    pub uvs2: bool,
    pub colors: bool,
    pub skin: bool,
}

impl Channels {
    pub const POSITIONS_ONLY: Self = Self {
        normals: false,
        uvs: false,
        uvs2: false,
        colors: false,
        skin: false,
    };

    pub const ALL: Self = Self {
        normals: true,
        uvs: true,
        uvs2: true,
        colors: true,
        skin: true,
    };
}

/// Contiguous range of the flattened buffers sharing one material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submesh {
    pub material_index: u32,
    #[serde(rename = "verticesStart")]
    pub vertex_start: u32,
    #[serde(rename = "verticesCount")]
    pub vertex_count: u32,
    pub index_start: u32,
    pub index_count: u32,
}

impl Submesh {
    pub fn vertex_range(&self) -> std::ops::Range<u32> {
        self.vertex_start..self.vertex_start + self.vertex_count
    }

    pub fn index_range(&self) -> std::ops::Range<usize> {
        self.index_start as usize..(self.index_start + self.index_count) as usize
    }
}

/// Result of flattening all submeshes into global buffers
///
/// Indices are global (already re-based by each submesh's vertex start).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenedMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub uvs2: Vec<[f32; 2]>,
    pub colors: Vec<[f32; 4]>,
    /// Four byte-sized bone indices per vertex
    pub bone_index_words: Vec<u32>,
    pub bone_weights: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
    pub submeshes: Vec<Submesh>,
}

impl FlattenedMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Global indices belonging to one submesh
    pub fn submesh_indices(&self, submesh: &Submesh) -> &[u32] {
        &self.indices[submesh.index_range()]
    }
}

/// Counters gathered during one conversion pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Source polygons visited
    pub polygons: usize,
    /// Corners welded
    pub corners: usize,
    /// Triangles kept
    pub triangles: usize,
    /// Triangles dropped as exact duplicates
    pub duplicate_triangles: usize,
}

impl BuildStats {
    /// Count one visited polygon as kept or dropped
    pub fn record_triangle(&mut self, accepted: bool) {
        self.polygons += 1;
        if accepted {
            self.triangles += 1;
        } else {
            self.duplicate_triangles += 1;
        }
    }

    pub fn merge(&mut self, other: &BuildStats) {
        self.polygons += other.polygons;
        self.corners += other.corners;
        self.triangles += other.triangles;
        self.duplicate_triangles += other.duplicate_triangles;
    }
}
