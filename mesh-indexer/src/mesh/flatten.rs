//! Merge per-material submeshes into one vertex buffer and one index buffer

use super::builder::SubmeshBuilder;
use super::types::{Channels, FlattenedMesh, Submesh};
use crate::skin::{pack_bone_weights, pack_bone_word};
use crate::vertex::VertexAttributes;

/// Concatenates submesh buffers in the order given, re-basing local indices
///
/// Only channels switched on in [`Channels`] are copied out, so every
/// attribute array is either full length or empty.
#[derive(Debug, Clone, Copy)]
pub struct MeshFlattener {
    channels: Channels,
}

impl MeshFlattener {
    pub fn new(channels: Channels) -> Self {
        Self { channels }
    }

    pub fn flatten(&self, builders: Vec<SubmeshBuilder>) -> FlattenedMesh {
        let vertex_total: usize = builders.iter().map(|b| b.vertex_count()).sum();
        let index_total: usize = builders.iter().map(|b| b.index_count()).sum();
        let mut mesh = self.with_capacity(vertex_total, index_total);

        for builder in builders {
            let material_index = builder.material();
            let (vertices, indices) = builder.into_parts();

            let vertex_start = mesh.positions.len() as u32;
            let index_start = mesh.indices.len() as u32;

            for vertex in &vertices {
                self.push_vertex(&mut mesh, vertex);
            }
            mesh.indices
                .extend(indices.iter().map(|&i| i + vertex_start));

            let submesh = Submesh {
                material_index,
                vertex_start,
                vertex_count: vertices.len() as u32,
                index_start,
                index_count: indices.len() as u32,
            };
            tracing::debug!(
                "Flattened submesh {}: vertices {}..{}, indices {}..{}",
                material_index,
                submesh.vertex_start,
                submesh.vertex_start + submesh.vertex_count,
                submesh.index_start,
                submesh.index_start + submesh.index_count
            );
            mesh.submeshes.push(submesh);
        }

        mesh
    }

    fn with_capacity(&self, vertices: usize, indices: usize) -> FlattenedMesh {
        let sized = |on: bool| if on { vertices } else { 0 };
        FlattenedMesh {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(sized(self.channels.normals)),
            uvs: Vec::with_capacity(sized(self.channels.uvs)),
            uvs2: Vec::with_capacity(sized(self.channels.uvs2)),
            colors: Vec::with_capacity(sized(self.channels.colors)),
            bone_index_words: Vec::with_capacity(sized(self.channels.skin)),
            bone_weights: Vec::with_capacity(sized(self.channels.skin)),
            indices: Vec::with_capacity(indices),
            submeshes: Vec::new(),
        }
    }

    fn push_vertex(&self, mesh: &mut FlattenedMesh, v: &VertexAttributes) {
        mesh.positions.push(v.position);
        if self.channels.normals {
            mesh.normals.push(v.normal);
        }
        if self.channels.uvs {
            mesh.uvs.push(v.uv);
        }
        if self.channels.uvs2 {
            mesh.uvs2.push(v.uv2);
        }
        if self.channels.colors {
            mesh.colors.push(v.color);
        }
        if self.channels.skin {
            // SubmeshBuilder::add_corner only welds corners whose bones fit a byte
            mesh.bone_index_words.push(pack_bone_word(v.bone_indices));
            mesh.bone_weights.push(pack_bone_weights(v.bone_weights));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_builder(material: u32, offset: f32) -> SubmeshBuilder {
        let mut b = SubmeshBuilder::new(material);
        let v = |x: f32, y: f32| VertexAttributes::at([x + offset, y, 0.0]).with_normal([0.0, 0.0, 1.0]);
        b.add_polygon(&[v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0)]).unwrap();
        b.add_polygon(&[v(0.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)]).unwrap();
        b
    }

    #[test]
    fn test_rebases_indices_per_submesh() {
        let channels = Channels {
            normals: true,
            ..Channels::POSITIONS_ONLY
        };
        let mesh = MeshFlattener::new(channels).flatten(vec![quad_builder(0, 0.0), quad_builder(1, 5.0)]);

        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
        assert_eq!(
            mesh.submeshes[1],
            Submesh {
                material_index: 1,
                vertex_start: 4,
                vertex_count: 4,
                index_start: 6,
                index_count: 6,
            }
        );
        assert_eq!(mesh.normals.len(), 8);
    }

    #[test]
    fn test_absent_channels_stay_empty() {
        let mesh = MeshFlattener::new(Channels::POSITIONS_ONLY).flatten(vec![quad_builder(0, 0.0)]);
        assert_eq!(mesh.positions.len(), 4);
        assert!(mesh.normals.is_empty());
        assert!(mesh.uvs.is_empty());
        assert!(mesh.uvs2.is_empty());
        assert!(mesh.colors.is_empty());
        assert!(mesh.bone_index_words.is_empty());
        assert!(mesh.bone_weights.is_empty());
    }

    #[test]
    fn test_empty_builder_contributes_nothing() {
        let mesh = MeshFlattener::new(Channels::POSITIONS_ONLY).flatten(vec![
            quad_builder(0, 0.0),
            SubmeshBuilder::new(1),
            quad_builder(2, 5.0),
        ]);
        assert_eq!(mesh.submeshes.len(), 3);
        assert_eq!(mesh.submeshes[1].vertex_count, 0);
        assert_eq!(mesh.submeshes[1].vertex_start, 4);
        assert_eq!(mesh.submeshes[1].index_start, 6);
        assert_eq!(mesh.submeshes[2].vertex_start, 4);
        assert_eq!(mesh.submesh_indices(&mesh.submeshes[2]), &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_skin_is_packed() {
        let channels = Channels {
            skin: true,
            ..Channels::POSITIONS_ONLY
        };
        let mut b = SubmeshBuilder::new(0);
        let v = VertexAttributes::at([0.0; 3]).with_skin([1, 2, 3, 3], [0.5, 0.25, 0.0, 0.0]);
        b.add_corner(v).unwrap();
        let mesh = MeshFlattener::new(channels).flatten(vec![b]);
        assert_eq!(mesh.bone_index_words, vec![0x03_03_02_01]);
        assert_eq!(mesh.bone_weights, vec![[0.5, 0.25, 0.0, 0.25]]);
    }

    #[test]
    fn test_overflowing_bone_never_reaches_packing() {
        let channels = Channels {
            skin: true,
            ..Channels::POSITIONS_ONLY
        };
        let mut b = SubmeshBuilder::new(0);
        let bad = VertexAttributes::at([0.0; 3]).with_skin([0, 300, 0, 0], [1.0, 0.0, 0.0, 0.0]);
        assert!(b.add_corner(bad).is_err());
        let good = VertexAttributes::at([0.0; 3]).with_skin([0, 255, 0, 0], [1.0, 0.0, 0.0, 0.0]);
        b.add_corner(good).unwrap();

        let mesh = MeshFlattener::new(channels).flatten(vec![b]);
        assert_eq!(mesh.bone_index_words, vec![0x00_00_FF_00]);
    }

    #[test]
    fn test_first_seen_values_are_emitted() {
        let channels = Channels {
            normals: true,
            ..Channels::POSITIONS_ONLY
        };
        let mut b = SubmeshBuilder::new(0);
        b.add_corner(VertexAttributes::at([0.0; 3]).with_normal([0.0, 1.0, -0.0]))
            .unwrap();
        b.add_corner(VertexAttributes::at([0.0; 3]).with_normal([0.0, 1.0, 0.0]))
            .unwrap();

        let mesh = MeshFlattener::new(channels).flatten(vec![b]);
        assert_eq!(mesh.vertex_count(), 1);
        assert!(mesh.normals[0][2].is_sign_negative());
    }
}
