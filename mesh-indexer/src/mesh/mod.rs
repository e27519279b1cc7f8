//! Welding, triangle deduplication and flattening (polygon soup -> indexed mesh)

mod builder;
mod dedup;
mod flatten;
mod types;
mod weld;

// Re-export public API
pub use builder::{MeshBuilder, SubmeshBuilder};
pub use dedup::{Triangle, TriangleDeduplicator};
pub use flatten::MeshFlattener;
pub use types::{BuildStats, Channels, FlattenedMesh, Submesh};
pub use weld::VertexWelder;
