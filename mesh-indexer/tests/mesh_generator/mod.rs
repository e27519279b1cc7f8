//! In-memory test meshes
//!
//! Builds polygon soups the way a scene reader would hand them over:
//! control points, triangles of control-point indices, and attribute layers.

#![allow(dead_code)]

use mesh_indexer::{IndexedSoup, LayerElement, MappingMode, MaterialMapping, SkinBinding};

/// Cube corner `i`: bit 0 = x, bit 1 = y, bit 2 = z (each -1 or +1)
fn cube_control_points() -> Vec<[f32; 3]> {
    (0..8)
        .map(|i| {
            let axis = |bit: usize| if i & bit != 0 { 1.0 } else { -1.0 };
            [axis(1), axis(2), axis(4)]
        })
        .collect()
}

/// Two triangles per face, in face order -X, +X, -Y, +Y, -Z, +Z
pub const CUBE_TRIANGLES: [[usize; 3]; 12] = [
    [0, 4, 6],
    [0, 6, 2],
    [1, 3, 7],
    [1, 7, 5],
    [0, 1, 5],
    [0, 5, 4],
    [2, 6, 7],
    [2, 7, 3],
    [0, 2, 3],
    [0, 3, 1],
    [4, 5, 7],
    [4, 7, 6],
];

const FACE_NORMALS: [[f32; 3]; 6] = [
    [-1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, -1.0],
    [0.0, 0.0, 1.0],
];

/// Cube with positions only (welds down to 8 vertices)
pub fn cube_positions_only() -> IndexedSoup {
    IndexedSoup::new(cube_control_points(), CUBE_TRIANGLES.to_vec())
}

/// Cube with flat per-face normals (welds to 24 vertices)
pub fn cube_with_face_normals() -> IndexedSoup {
    let face_index: Vec<usize> = (0..12).map(|polygon| polygon / 2).collect();
    cube_positions_only().with_normals(LayerElement::indexed(
        MappingMode::ByPolygon,
        FACE_NORMALS.to_vec(),
        face_index,
    ))
}

/// Cube with one material per face (6 slots)
pub fn cube_per_face_materials() -> IndexedSoup {
    let materials = (0..12).map(|polygon| (polygon / 2) as u32).collect();
    cube_with_face_normals().with_materials(6, MaterialMapping::ByPolygon(materials))
}

/// Three triangles fanning around the origin; the middle one uses material 1
pub fn shared_origin_fan() -> IndexedSoup {
    IndexedSoup::new(
        vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, -1.0, 0.0],
        ],
        vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]],
    )
    .with_normals(LayerElement::direct(
        MappingMode::AllSame,
        vec![[0.0, 0.0, 1.0]],
    ))
    .with_uvs(LayerElement::direct(
        MappingMode::ByControlPoint,
        vec![[0.5, 0.5], [1.0, 0.5], [0.5, 1.0], [0.0, 0.5], [0.5, 0.0]],
    ))
    .with_materials(2, MaterialMapping::ByPolygon(vec![0, 1, 0]))
}

/// Quad (two triangles) with every optional channel populated
pub fn fully_attributed_quad() -> IndexedSoup {
    IndexedSoup::new(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
        vec![[0, 1, 2], [0, 2, 3]],
    )
    .with_normals(LayerElement::direct(
        MappingMode::AllSame,
        vec![[0.0, 0.0, 1.0]],
    ))
    .with_uvs(LayerElement::direct(
        MappingMode::ByControlPoint,
        vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    ))
    .with_uvs2(LayerElement::indexed(
        MappingMode::ByPolygonVertex,
        vec![[0.0, 0.0], [0.5, 0.5]],
        vec![0, 1, 1, 0, 1, 0],
    ))
    .with_colors(LayerElement::direct(
        MappingMode::ByControlPoint,
        vec![
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
            [1.0, 1.0, 1.0, 1.0],
        ],
    ))
}

/// Skin for [`fully_attributed_quad`]: control point `i` mostly follows bone `i`
pub fn quad_skin(bone_count: u32) -> SkinBinding {
    let mut skin = SkinBinding::new(bone_count, 4);
    for cp in 0..4usize {
        let bone = cp as u32 % bone_count;
        skin.add_influence(cp, bone, 0.6);
        skin.add_influence(cp, (bone + 1) % bone_count, 0.3);
        skin.add_influence(cp, (bone + 2) % bone_count, 0.1);
    }
    skin
}

/// Soup with an exact duplicate triangle and a rotated copy of it
pub fn duplicated_triangles() -> IndexedSoup {
    IndexedSoup::new(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        vec![[0, 1, 2], [0, 1, 2], [1, 2, 0]],
    )
}
