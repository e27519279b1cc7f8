//! Serializable export shape of a flattened mesh
//!
//! Attributes are flattened to plain float arrays (3 per position/normal,
//! 2 per uv, 4 per color and weight vector). Empty arrays are left out of
//! the serialized document. The text encoding itself belongs to the caller.

use bytemuck::cast_slice;
use serde::Serialize;

use crate::mesh::{FlattenedMesh, Submesh};

/// Document-ready view of a [`FlattenedMesh`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedMesh {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub normals: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uvs: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub uvs2: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub indices: Vec<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matrices_indices: Vec<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matrices_weights: Vec<f32>,
    pub sub_meshes: Vec<Submesh>,
}

impl ExportedMesh {
    /// Build the export view, optionally flipping triangle winding
    ///
    /// Flipping swaps the 2nd and 3rd index of every triangle; the flattened
    /// mesh itself is left untouched.
    pub fn new(mesh: &FlattenedMesh, flip_winding: bool) -> Self {
        Self {
            positions: cast_slice(&mesh.positions).to_vec(),
            normals: cast_slice(&mesh.normals).to_vec(),
            uvs: cast_slice(&mesh.uvs).to_vec(),
            uvs2: cast_slice(&mesh.uvs2).to_vec(),
            colors: cast_slice(&mesh.colors).to_vec(),
            indices: export_indices(&mesh.indices, flip_winding),
            matrices_indices: mesh.bone_index_words.clone(),
            matrices_weights: cast_slice(&mesh.bone_weights).to_vec(),
            sub_meshes: mesh.submeshes.clone(),
        }
    }
}

fn export_indices(indices: &[u32], flip_winding: bool) -> Vec<u32> {
    indices
        .chunks_exact(3)
        .flat_map(|t| {
            if flip_winding {
                [t[0], t[2], t[1]]
            } else {
                [t[0], t[1], t[2]]
            }
        })
        .collect()
}
