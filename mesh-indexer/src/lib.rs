//! mesh-indexer library
//!
//! Converts triangulated per-corner ("polygon soup") mesh data into GPU-ready
//! buffers: welded unique vertices, deduplicated triangle indices, and one
//! submesh range per material slot.

pub mod config;
pub mod convert;
pub mod error;
pub mod export;
pub mod mesh;
pub mod skin;
pub mod source;
pub mod vertex;

pub use config::IndexerConfig;
pub use error::MeshError;

// Re-export key types for mesh conversion
pub use convert::{index_mesh, index_mesh_with_config, IndexedMesh};
#[cfg(feature = "parallel")]
pub use convert::index_mesh_parallel;
pub use export::ExportedMesh;
pub use mesh::{
    BuildStats, Channels, FlattenedMesh, MeshBuilder, MeshFlattener, Submesh, SubmeshBuilder,
    Triangle, TriangleDeduplicator, VertexWelder,
};
pub use vertex::{VertexAttributes, VertexKey};

// Re-export skin packing
pub use skin::{
    pack_bone_indices, pack_bone_weights, pack_skin, pad_influences, BoneInfluence, PackedSkin,
};

// Re-export collaborator seams
pub use source::{
    Corner, GeometrySource, IndexedSoup, LayerElement, MappingMode, MaterialMapping,
    ReferenceMode, SkinBinding, SkinSource,
};
