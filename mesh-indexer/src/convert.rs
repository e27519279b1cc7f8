//! Geometry source -> flattened, indexed mesh
//!
//! One linear pass over the source polygons: resolve corners, attach skin
//! influences, weld per material, drop exact duplicate triangles, then
//! flatten in material-slot order.

use anyhow::{Context, Result};

use crate::config::IndexerConfig;
use crate::mesh::{BuildStats, Channels, FlattenedMesh, MeshBuilder, Triangle};
use crate::skin::pad_influences;
use crate::source::{Corner, GeometrySource, SkinSource};
use crate::vertex::VertexAttributes;

/// Result of a conversion
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh {
    pub mesh: FlattenedMesh,
    pub stats: BuildStats,
}

/// Convert a geometry source (and optional skin) into an indexed mesh
pub fn index_mesh<G: GeometrySource + ?Sized>(
    geometry: &G,
    skin: Option<&dyn SkinSource>,
) -> Result<IndexedMesh> {
    let channels = channels_for(geometry, skin);
    let mut builder = MeshBuilder::new(geometry.material_count(), channels);

    for polygon in 0..geometry.polygon_count() {
        let (material, corners) = read_polygon(geometry, skin, polygon)?;
        let (triangle, accepted) = builder
            .add_polygon(material, &corners)
            .with_context(|| format!("Failed to add polygon {}", polygon))?;
        if !accepted {
            warn_duplicate(polygon, material, triangle);
        }
    }

    let (mesh, stats) = builder.finish();
    log_summary(&mesh, &stats);
    Ok(IndexedMesh { mesh, stats })
}

/// Convert using `[build]` settings from the config
///
/// Falls back to the sequential path when `parallel` is requested but the
/// crate was built without the `parallel` feature.
pub fn index_mesh_with_config<G: GeometrySource + ?Sized>(
    geometry: &G,
    skin: Option<&dyn SkinSource>,
    config: &IndexerConfig,
) -> Result<IndexedMesh> {
    if config.build.parallel {
        #[cfg(feature = "parallel")]
        return index_mesh_parallel(geometry, skin);

        #[cfg(not(feature = "parallel"))]
        tracing::warn!("Parallel build requested but the `parallel` feature is disabled, building sequentially");
    }
    index_mesh(geometry, skin)
}

/// Same output as [`index_mesh`], welding each material slot on its own worker
///
/// Corners are read sequentially and bucketed per material in traversal
/// order, so index assignment inside every submesh is unchanged. When several
/// slots fail, which polygon's error is reported is unspecified.
#[cfg(feature = "parallel")]
pub fn index_mesh_parallel<G: GeometrySource + ?Sized>(
    geometry: &G,
    skin: Option<&dyn SkinSource>,
) -> Result<IndexedMesh> {
    use rayon::prelude::*;

    use crate::error::MeshError;
    use crate::mesh::{MeshFlattener, SubmeshBuilder};

    let channels = channels_for(geometry, skin);
    let slots = geometry.material_count().max(1);
    let mut buckets: Vec<Vec<(usize, [VertexAttributes; 3])>> = vec![Vec::new(); slots];

    for polygon in 0..geometry.polygon_count() {
        let (material, corners) = read_polygon(geometry, skin, polygon)?;
        buckets
            .get_mut(material as usize)
            .ok_or(MeshError::MaterialOutOfRange { material, slots })
            .with_context(|| format!("Failed to add polygon {}", polygon))?
            .push((polygon, corners));
    }

    let built: Vec<(SubmeshBuilder, BuildStats)> = buckets
        .into_par_iter()
        .enumerate()
        .map(|(material, polygons)| -> Result<(SubmeshBuilder, BuildStats)> {
            let material = material as u32;
            let mut submesh = SubmeshBuilder::new(material);
            let mut stats = BuildStats::default();
            for (polygon, corners) in polygons {
                let (triangle, accepted) = submesh
                    .add_counted_polygon(&corners, &mut stats)
                    .with_context(|| format!("Failed to add polygon {}", polygon))?;
                if !accepted {
                    warn_duplicate(polygon, material, triangle);
                }
            }
            Ok((submesh, stats))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut stats = BuildStats::default();
    let mut submeshes = Vec::with_capacity(built.len());
    for (submesh, submesh_stats) in built {
        stats.merge(&submesh_stats);
        submeshes.push(submesh);
    }

    let mesh = MeshFlattener::new(channels).flatten(submeshes);
    log_summary(&mesh, &stats);
    Ok(IndexedMesh { mesh, stats })
}

fn channels_for<G: GeometrySource + ?Sized>(geometry: &G, skin: Option<&dyn SkinSource>) -> Channels {
    Channels {
        skin: skin.is_some(),
        ..geometry.channels()
    }
}

/// Resolve one polygon's material and corner attributes
fn read_polygon<G: GeometrySource + ?Sized>(
    geometry: &G,
    skin: Option<&dyn SkinSource>,
    polygon: usize,
) -> Result<(u32, [VertexAttributes; 3])> {
    let material = geometry
        .polygon_material(polygon)
        .with_context(|| format!("Failed to read material of polygon {}", polygon))?;

    let mut corners = [VertexAttributes::default(); 3];
    for (index, slot) in corners.iter_mut().enumerate() {
        let Corner {
            control_point,
            mut attributes,
        } = geometry
            .corner(polygon, index)
            .with_context(|| format!("Failed to read corner {} of polygon {}", index, polygon))?;

        let (bones, weights) = match skin {
            Some(skin) => pad_influences(skin.influences(control_point), skin.bone_count()),
            None => ([0; 4], [0.0; 4]),
        };
        attributes.bone_indices = bones;
        attributes.bone_weights = weights;
        *slot = attributes;
    }

    Ok((material, corners))
}

fn warn_duplicate(polygon: usize, material: u32, triangle: Triangle) {
    tracing::warn!(
        "Duplicate triangle found: polygon {}, material {}, indices {:?}",
        polygon,
        material,
        triangle
    );
}

fn log_summary(mesh: &FlattenedMesh, stats: &BuildStats) {
    tracing::info!(
        "Indexed mesh: {} vertices, {} indices, {} submeshes, {} duplicate triangles",
        mesh.vertex_count(),
        mesh.index_count(),
        mesh.submeshes.len(),
        stats.duplicate_triangles
    );
}
