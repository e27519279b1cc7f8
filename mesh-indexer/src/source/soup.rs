//! In-memory triangulated mesh with layered attributes

use anyhow::{Context, Result};

use super::layer::LayerElement;
use super::{Corner, GeometrySource};
use crate::error::MeshError;
use crate::mesh::Channels;
use crate::vertex::VertexAttributes;

/// Material assignment of polygons
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialMapping {
    /// Every polygon uses the same slot
    AllSame(u32),
    /// One slot per polygon
    ByPolygon(Vec<u32>),
}

/// Control points plus triangles of control-point indices, with optional
/// normal/uv/uv2/color layers
///
/// With `flip_z` set, position.z and normal.z are negated as corners are
/// read (right-handed source to left-handed target).
#[derive(Debug, Clone, Default)]
pub struct IndexedSoup {
    pub control_points: Vec<[f32; 3]>,
    pub triangles: Vec<[usize; 3]>,
    pub normals: Option<LayerElement<[f32; 3]>>,
    pub uvs: Option<LayerElement<[f32; 2]>>,
    pub uvs2: Option<LayerElement<[f32; 2]>>,
    pub colors: Option<LayerElement<[f32; 4]>>,
    pub materials: Option<MaterialMapping>,
    pub material_count: usize,
    pub flip_z: bool,
}

impl IndexedSoup {
    pub fn new(control_points: Vec<[f32; 3]>, triangles: Vec<[usize; 3]>) -> Self {
        Self {
            control_points,
            triangles,
            ..Self::default()
        }
    }

    pub fn with_normals(mut self, layer: LayerElement<[f32; 3]>) -> Self {
        self.normals = Some(layer);
        self
    }

    pub fn with_uvs(mut self, layer: LayerElement<[f32; 2]>) -> Self {
        self.uvs = Some(layer);
        self
    }

    pub fn with_uvs2(mut self, layer: LayerElement<[f32; 2]>) -> Self {
        self.uvs2 = Some(layer);
        self
    }

    pub fn with_colors(mut self, layer: LayerElement<[f32; 4]>) -> Self {
        self.colors = Some(layer);
        self
    }

    pub fn with_materials(mut self, material_count: usize, mapping: MaterialMapping) -> Self {
        self.material_count = material_count;
        self.materials = Some(mapping);
        self
    }

    pub fn with_flip_z(mut self, flip_z: bool) -> Self {
        self.flip_z = flip_z;
        self
    }

    fn control_point(&self, polygon: usize, corner: usize) -> Result<usize, MeshError> {
        let triangle = self
            .triangles
            .get(polygon)
            .ok_or(MeshError::AttributeOutOfRange {
                channel: "polygon",
                index: polygon,
                len: self.triangles.len(),
            })?;
        triangle
            .get(corner)
            .copied()
            .ok_or(MeshError::AttributeOutOfRange {
                channel: "corner",
                index: corner,
                len: 3,
            })
    }
}

impl GeometrySource for IndexedSoup {
    fn polygon_count(&self) -> usize {
        self.triangles.len()
    }

    fn material_count(&self) -> usize {
        self.material_count
    }

    fn channels(&self) -> Channels {
        Channels {
            normals: self.normals.is_some(),
            uvs: self.uvs.is_some(),
            uvs2: self.uvs2.is_some(),
            colors: self.colors.is_some(),
            skin: false,
        }
    }

    fn polygon_material(&self, polygon: usize) -> Result<u32> {
        match &self.materials {
            None => Ok(0),
            Some(MaterialMapping::AllSame(slot)) => Ok(*slot),
            Some(MaterialMapping::ByPolygon(slots)) => {
                slots
                    .get(polygon)
                    .copied()
                    .ok_or(MeshError::AttributeOutOfRange {
                        channel: "material",
                        index: polygon,
                        len: slots.len(),
                    })
                    .map_err(Into::into)
            }
        }
    }

    fn corner(&self, polygon: usize, corner: usize) -> Result<Corner> {
        let control_point = self.control_point(polygon, corner)?;
        let mut position = self
            .control_points
            .get(control_point)
            .copied()
            .ok_or(MeshError::AttributeOutOfRange {
                channel: "position",
                index: control_point,
                len: self.control_points.len(),
            })?;

        let mut attributes = VertexAttributes::default();

        if let Some(normals) = &self.normals {
            attributes.normal = normals
                .resolve("normal", polygon, corner, control_point)
                .context("Failed to resolve normal")?;
        }
        if let Some(uvs) = &self.uvs {
            attributes.uv = uvs.resolve("uv", polygon, corner, control_point)?;
        }
        if let Some(uvs2) = &self.uvs2 {
            attributes.uv2 = uvs2.resolve("uv2", polygon, corner, control_point)?;
        }
        if let Some(colors) = &self.colors {
            attributes.color = colors.resolve("color", polygon, corner, control_point)?;
        }

        if self.flip_z {
            position[2] = -position[2];
            attributes.normal[2] = -attributes.normal[2];
        }
        attributes.position = position;

        Ok(Corner {
            control_point,
            attributes,
        })
    }
}
