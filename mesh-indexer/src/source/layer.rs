//! Layer element resolution (mapping mode + reference mode)

use crate::error::MeshError;

/// Which index selects a layer value for a corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingMode {
    /// One value per control point
    ByControlPoint,
    /// One value per polygon corner (`polygon * 3 + corner`)
    ByPolygonVertex,
    /// One value per polygon
    ByPolygon,
    /// A single value for the whole mesh
    AllSame,
}

/// How the mapping index reaches the value array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceMode {
    /// Mapping index addresses `direct` directly
    Direct,
    /// Mapping index addresses `index`, whose entry addresses `direct`
    IndexToDirect,
}

/// An attribute layer (normals, UVs, colors) as stored in a source mesh
#[derive(Debug, Clone, PartialEq)]
pub struct LayerElement<T> {
    pub mapping: MappingMode,
    pub reference: ReferenceMode,
    pub direct: Vec<T>,
    pub index: Vec<usize>,
}

impl<T: Copy> LayerElement<T> {
    pub fn direct(mapping: MappingMode, values: Vec<T>) -> Self {
        Self {
            mapping,
            reference: ReferenceMode::Direct,
            direct: values,
            index: Vec::new(),
        }
    }

    pub fn indexed(mapping: MappingMode, values: Vec<T>, index: Vec<usize>) -> Self {
        Self {
            mapping,
            reference: ReferenceMode::IndexToDirect,
            direct: values,
            index,
        }
    }

    /// Resolve the value for one corner
    pub fn resolve(
        &self,
        channel: &'static str,
        polygon: usize,
        corner: usize,
        control_point: usize,
    ) -> Result<T, MeshError> {
        let mapping_index = match self.mapping {
            MappingMode::ByControlPoint => control_point,
            MappingMode::ByPolygonVertex => polygon * 3 + corner,
            MappingMode::ByPolygon => polygon,
            MappingMode::AllSame => 0,
        };

        let value_index = match self.reference {
            ReferenceMode::Direct => mapping_index,
            ReferenceMode::IndexToDirect => *self.index.get(mapping_index).ok_or(
                MeshError::AttributeOutOfRange {
                    channel,
                    index: mapping_index,
                    len: self.index.len(),
                },
            )?,
        };

        self.direct
            .get(value_index)
            .copied()
            .ok_or(MeshError::AttributeOutOfRange {
                channel,
                index: value_index,
                len: self.direct.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_control_point_direct() {
        let layer = LayerElement::direct(MappingMode::ByControlPoint, vec![10, 11, 12]);
        assert_eq!(layer.resolve("test", 7, 2, 1).unwrap(), 11);
    }

    #[test]
    fn test_by_polygon_vertex_indexed() {
        // Corner (1, 2) -> mapping index 5 -> value index 0
        let layer = LayerElement::indexed(
            MappingMode::ByPolygonVertex,
            vec![[0.5f32, 0.5], [1.0, 0.0]],
            vec![1, 1, 1, 0, 0, 0],
        );
        assert_eq!(layer.resolve("uv", 1, 2, 99).unwrap(), [0.5, 0.5]);
        assert_eq!(layer.resolve("uv", 0, 0, 99).unwrap(), [1.0, 0.0]);
    }

    #[test]
    fn test_by_polygon_and_all_same() {
        let per_poly = LayerElement::direct(MappingMode::ByPolygon, vec![1, 2]);
        assert_eq!(per_poly.resolve("test", 1, 0, 0).unwrap(), 2);

        let same = LayerElement::direct(MappingMode::AllSame, vec![42]);
        assert_eq!(same.resolve("test", 9, 2, 5).unwrap(), 42);
    }

    #[test]
    fn test_out_of_range_index() {
        let layer = LayerElement::indexed(MappingMode::ByControlPoint, vec![1, 2], vec![0, 5]);
        let err = layer.resolve("normal", 0, 0, 1).unwrap_err();
        assert!(matches!(
            err,
            MeshError::AttributeOutOfRange { channel: "normal", index: 5, len: 2 }
        ));

        let err = layer.resolve("normal", 0, 0, 3).unwrap_err();
        assert!(matches!(
            err,
            MeshError::AttributeOutOfRange { index: 3, len: 2, .. }
        ));
    }
}
