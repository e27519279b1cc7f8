//! Per-material submesh accumulation

use super::dedup::{Triangle, TriangleDeduplicator};
use super::flatten::MeshFlattener;
use super::types::{BuildStats, Channels, FlattenedMesh};
use super::weld::VertexWelder;
use crate::error::MeshError;
use crate::skin::validate_bone_indices;
use crate::vertex::VertexAttributes;

/// Welded vertices and deduplicated triangles for one material slot
///
/// Append-only while the source is traversed, then consumed by the flattener.
#[derive(Debug)]
pub struct SubmeshBuilder {
    material: u32,
    welder: VertexWelder,
    triangles: TriangleDeduplicator,
    indices: Vec<u32>,
}

impl SubmeshBuilder {
    pub fn new(material: u32) -> Self {
        Self {
            material,
            welder: VertexWelder::new(),
            triangles: TriangleDeduplicator::new(),
            indices: Vec::new(),
        }
    }

    /// Weld one corner, returning its local vertex index
    ///
    /// Bone indices are checked for u8 packing here so that flattening cannot
    /// fail later. Unskinned corners carry zeroed bones and always pass.
    pub fn add_corner(&mut self, attributes: VertexAttributes) -> Result<u32, MeshError> {
        validate_bone_indices(&attributes.bone_indices)?;
        Ok(self.welder.weld(attributes))
    }

    /// Append a triangle unless this exact triple was already added
    ///
    /// A rejected triangle leaves its (already welded) vertices in place.
    pub fn add_triangle(&mut self, triangle: Triangle) -> Result<bool, MeshError> {
        let len = self.welder.len();
        if let Some(&index) = triangle.iter().find(|&&i| i as usize >= len) {
            return Err(MeshError::VertexOutOfRange {
                material: self.material,
                index,
                len,
            });
        }
        if !self.triangles.accept(triangle) {
            return Ok(false);
        }
        self.indices.extend_from_slice(&triangle);
        Ok(true)
    }

    /// Weld three corners and add the resulting triangle
    pub fn add_polygon(&mut self, corners: &[VertexAttributes; 3]) -> Result<(Triangle, bool), MeshError> {
        let mut triangle = [0u32; 3];
        for (slot, corner) in triangle.iter_mut().zip(corners) {
            *slot = self.add_corner(*corner)?;
        }
        Ok((triangle, self.add_triangle(triangle)?))
    }

    /// [`Self::add_polygon`], counting the polygon into `stats`
    pub(crate) fn add_counted_polygon(
        &mut self,
        corners: &[VertexAttributes; 3],
        stats: &mut BuildStats,
    ) -> Result<(Triangle, bool), MeshError> {
        let (triangle, accepted) = self.add_polygon(corners)?;
        stats.corners += corners.len();
        stats.record_triangle(accepted);
        Ok((triangle, accepted))
    }

    pub fn material(&self) -> u32 {
        self.material
    }

    pub fn vertex_count(&self) -> usize {
        self.welder.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn vertices(&self) -> &[VertexAttributes] {
        self.welder.vertices()
    }

    /// Local (un-rebased) indices
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub(crate) fn into_parts(self) -> (Vec<VertexAttributes>, Vec<u32>) {
        (self.welder.into_vertices(), self.indices)
    }
}

/// Routes corners and triangles to one [`SubmeshBuilder`] per material slot
///
/// A mesh declaring zero materials still gets one slot.
#[derive(Debug)]
pub struct MeshBuilder {
    channels: Channels,
    submeshes: Vec<SubmeshBuilder>,
    stats: BuildStats,
}

impl MeshBuilder {
    pub fn new(material_count: usize, channels: Channels) -> Self {
        let submeshes = (0..material_count.max(1) as u32)
            .map(SubmeshBuilder::new)
            .collect();
        Self {
            channels,
            submeshes,
            stats: BuildStats::default(),
        }
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn slot_count(&self) -> usize {
        self.submeshes.len()
    }

    pub fn submesh(&self, material: u32) -> Option<&SubmeshBuilder> {
        self.submeshes.get(material as usize)
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    fn slot(&mut self, material: u32) -> Result<&mut SubmeshBuilder, MeshError> {
        slot_mut(&mut self.submeshes, material)
    }

    /// Weld one corner into its material's submesh
    pub fn add_corner(
        &mut self,
        material: u32,
        attributes: VertexAttributes,
    ) -> Result<u32, MeshError> {
        let index = self.slot(material)?.add_corner(attributes)?;
        self.stats.corners += 1;
        Ok(index)
    }

    /// Add a triangle of local indices; Ok(false) if it was a duplicate
    pub fn add_triangle(&mut self, material: u32, triangle: Triangle) -> Result<bool, MeshError> {
        let accepted = self.slot(material)?.add_triangle(triangle)?;
        self.stats.record_triangle(accepted);
        Ok(accepted)
    }

    /// Weld three corners and add the triangle they form
    pub fn add_polygon(
        &mut self,
        material: u32,
        corners: &[VertexAttributes; 3],
    ) -> Result<(Triangle, bool), MeshError> {
        slot_mut(&mut self.submeshes, material)?.add_counted_polygon(corners, &mut self.stats)
    }

    /// Flatten all submeshes in material-slot order
    pub fn finish(self) -> (FlattenedMesh, BuildStats) {
        let mesh = MeshFlattener::new(self.channels).flatten(self.submeshes);
        (mesh, self.stats)
    }
}

fn slot_mut(submeshes: &mut [SubmeshBuilder], material: u32) -> Result<&mut SubmeshBuilder, MeshError> {
    let slots = submeshes.len();
    submeshes
        .get_mut(material as usize)
        .ok_or(MeshError::MaterialOutOfRange { material, slots })
}
